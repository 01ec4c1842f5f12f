pub mod gallery;
pub mod map;
pub mod video;

pub use gallery::Gallery;
pub use map::{MapMarker, MapView, MarkerSelection};
pub use video::{HeroVideo, VideoEvent};
