use crate::{
    models::{amenity::Amenity, location::Location},
    sanity::{
        documents::{SanityAmenity, SanityLocation},
        fetch_list, queries, CmsError, ContentSource, QueryParams,
    },
};

pub async fn get_amenities(source: &dyn ContentSource) -> Result<Vec<Amenity>, CmsError> {
    let raw: Vec<SanityAmenity> = fetch_list(source, queries::ALL_AMENITIES, &QueryParams::new()).await?;
    Ok(raw.into_iter().map(Amenity::from).collect())
}

pub async fn get_locations(source: &dyn ContentSource) -> Result<Vec<Location>, CmsError> {
    let raw: Vec<SanityLocation> = fetch_list(source, queries::ALL_LOCATIONS, &QueryParams::new()).await?;
    Ok(raw.into_iter().map(Location::from).collect())
}
