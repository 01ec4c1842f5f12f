use serde_json::json;

use crate::{
    models::destination::Destination,
    sanity::{
        documents::SanityDestination, fetch, fetch_list, queries, CmsError, ContentSource, QueryParams,
    },
};

pub async fn get_all(source: &dyn ContentSource) -> Result<Vec<Destination>, CmsError> {
    let raw: Vec<SanityDestination> =
        fetch_list(source, &queries::ALL_DESTINATIONS, &QueryParams::new()).await?;
    Ok(raw.into_iter().map(Destination::from).collect())
}

pub async fn get_featured(source: &dyn ContentSource) -> Result<Vec<Destination>, CmsError> {
    let raw: Vec<SanityDestination> =
        fetch_list(source, &queries::FEATURED_DESTINATIONS, &QueryParams::new()).await?;
    Ok(raw.into_iter().map(Destination::from).collect())
}

pub async fn get_by_slug(
    source: &dyn ContentSource,
    slug: &str,
) -> Result<Option<Destination>, CmsError> {
    let mut params = QueryParams::new();
    params.insert("slug".to_string(), json!(slug));

    let raw: Option<SanityDestination> =
        fetch(source, &queries::DESTINATION_BY_SLUG, &params).await?;
    Ok(raw.map(Destination::from))
}
