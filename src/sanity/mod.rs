pub mod documents;
pub mod error;
pub mod helpers;
pub mod queries;
pub mod sanity_client;
pub mod source;

pub use error::CmsError;
pub use sanity_client::SanityClient;
pub use source::{fetch, fetch_list, ContentSource, QueryParams};
