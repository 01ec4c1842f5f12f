pub mod robots;
pub mod sitemap;

pub use robots::RobotsPolicy;
pub use sitemap::{build_sitemap, render_sitemap, ChangeFrequency, SitemapEntry};
