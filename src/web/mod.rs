pub mod contact;
pub mod seo;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use log::{error, info};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::{
    config::Config,
    media::MapView,
    models::{
        amenity::Amenity,
        destination::Destination,
        location::Location,
        property::{Property, PropertyCategory},
    },
    sanity::{helpers::empty_as_none, queries::PropertySearch, CmsError, ContentSource},
    search::{
        self,
        options::{PopularDestination, ReferenceOption, COMMON_AMENITIES, POPULAR_DESTINATIONS, PROPERTY_TYPES},
        sorting::SortOptionDescriptor,
        PriceRange, PriceRangeOption, SearchFilters, SortOption,
    },
    services::{catalog, destinations, properties},
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub source: Arc<dyn ContentSource>,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

fn respond<T>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse { data })
}

/// Query string of the listing page: in-memory filters plus a sort key.
/// List values are comma separated.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyQuery {
    pub location: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub guests: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_price: Option<f64>,
    pub types: Option<String>,
    pub amenities: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_rating: Option<f64>,
    pub sort: Option<String>,
}

fn split_list(value: &Option<String>) -> Vec<String> {
    value
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

impl PropertyQuery {
    pub fn filters(&self) -> SearchFilters {
        let price_range = match (self.min_price, self.max_price) {
            (None, None) => None,
            (min, max) => Some(PriceRange {
                min: min.unwrap_or(0.0),
                max,
            }),
        };

        SearchFilters {
            location: self.location.clone(),
            guests: self.guests,
            price_range,
            property_types: split_list(&self.types)
                .iter()
                .map(|kind| PropertyCategory::parse(kind))
                .collect(),
            amenities: split_list(&self.amenities),
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            min_rating: self.min_rating,
        }
    }
}

#[derive(Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeed {
    pub featured_properties: Vec<Property>,
    pub featured_destinations: Vec<Destination>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub sort_options: Vec<SortOptionDescriptor>,
    pub property_types: &'static [ReferenceOption],
    pub amenities: &'static [ReferenceOption],
    pub popular_destinations: &'static [PopularDestination],
}

/// Catalog pages render an empty state rather than an error page.
fn or_empty<T>(result: Result<Vec<T>, CmsError>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|err| {
        error!("Error fetching {}: {}", what, err);
        Vec::new()
    })
}

fn or_not_found<T>(result: Result<Option<T>, CmsError>, what: &str) -> Result<T, StatusCode> {
    match result {
        Ok(Some(item)) => Ok(item),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(err) => {
            error!("Error fetching {}: {}", what, err);
            Err(StatusCode::NOT_FOUND)
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/properties", get(list_properties))
        .route("/api/properties/featured", get(featured_properties))
        .route("/api/properties/search", get(search_properties))
        .route("/api/properties/:slug", get(property_by_slug))
        .route("/api/cities/:city/properties", get(properties_by_city))
        .route("/api/destinations", get(list_destinations))
        .route("/api/destinations/featured", get(featured_destinations))
        .route("/api/destinations/:slug", get(destination_by_slug))
        .route("/api/amenities", get(list_amenities))
        .route("/api/locations", get(list_locations))
        .route("/api/home", get(home_feed))
        .route("/api/search/suggestions", get(search_suggestions))
        .route("/api/search/price-ranges", get(price_ranges))
        .route("/api/search/options", get(search_options))
        .route("/api/map", get(map_view))
        .route("/api/contact", post(contact::submit_contact))
        .route("/sitemap.xml", get(seo::sitemap))
        .route("/robots.txt", get(seo::robots))
        .layer(middleware::from_fn(cors_layer))
        .with_state(state)
}

pub async fn start_http_server(
    state: AppState,
    mut shutdown_rx: tokio::sync::broadcast::Receiver<()>,
) -> anyhow::Result<()> {
    let bind_addr = state
        .config
        .http_bind_address
        .clone()
        .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind http listener on {}", bind_addr))?;
    info!("Listening on {}", bind_addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .context("HTTP server crashed")?;

    Ok(())
}

async fn cors_layer(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = Response::new(axum::body::Body::empty());
        apply_cors_headers(response.headers_mut());
        *response.status_mut() = StatusCode::NO_CONTENT;
        response
    } else {
        let mut response = next.run(req).await;
        apply_cors_headers(response.headers_mut());
        response
    }
}

fn apply_cors_headers(headers: &mut axum::http::HeaderMap) {
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type"),
    );
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
}

async fn list_properties(
    State(state): State<AppState>,
    Query(query): Query<PropertyQuery>,
) -> Json<ApiResponse<Vec<Property>>> {
    let all = or_empty(properties::get_all(state.source.as_ref()).await, "properties");
    let filtered = search::filter_properties(&all, &query.filters());

    let result = match query.sort.as_deref().filter(|sort| !sort.is_empty()) {
        Some(sort_by) => search::sort_properties(&filtered, sort_by),
        None => filtered,
    };
    respond(result)
}

async fn featured_properties(State(state): State<AppState>) -> Json<ApiResponse<Vec<Property>>> {
    respond(or_empty(
        properties::get_featured(state.source.as_ref()).await,
        "featured properties",
    ))
}

async fn search_properties(
    State(state): State<AppState>,
    Query(search): Query<PropertySearch>,
) -> Json<ApiResponse<Vec<Property>>> {
    respond(or_empty(
        properties::search(state.source.as_ref(), &search).await,
        "property search",
    ))
}

async fn property_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Property>>, StatusCode> {
    or_not_found(
        properties::get_by_slug(state.source.as_ref(), &slug).await,
        "property by slug",
    )
    .map(respond)
}

async fn properties_by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Json<ApiResponse<Vec<Property>>> {
    respond(or_empty(
        properties::get_by_city(state.source.as_ref(), &city).await,
        "properties by city",
    ))
}

async fn list_destinations(State(state): State<AppState>) -> Json<ApiResponse<Vec<Destination>>> {
    respond(or_empty(
        destinations::get_all(state.source.as_ref()).await,
        "destinations",
    ))
}

async fn featured_destinations(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<Destination>>> {
    respond(or_empty(
        destinations::get_featured(state.source.as_ref()).await,
        "featured destinations",
    ))
}

async fn destination_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Destination>>, StatusCode> {
    or_not_found(
        destinations::get_by_slug(state.source.as_ref(), &slug).await,
        "destination by slug",
    )
    .map(respond)
}

async fn list_amenities(State(state): State<AppState>) -> Json<ApiResponse<Vec<Amenity>>> {
    respond(or_empty(
        catalog::get_amenities(state.source.as_ref()).await,
        "amenities",
    ))
}

async fn list_locations(State(state): State<AppState>) -> Json<ApiResponse<Vec<Location>>> {
    respond(or_empty(
        catalog::get_locations(state.source.as_ref()).await,
        "locations",
    ))
}

async fn home_feed(State(state): State<AppState>) -> Json<ApiResponse<HomeFeed>> {
    let source = state.source.as_ref();
    let (featured_properties, featured_destinations) = futures::join!(
        properties::get_featured(source),
        destinations::get_featured(source)
    );

    respond(HomeFeed {
        featured_properties: or_empty(featured_properties, "featured properties"),
        featured_destinations: or_empty(featured_destinations, "featured destinations"),
    })
}

async fn search_suggestions(
    State(state): State<AppState>,
    Query(SuggestionQuery { q }): Query<SuggestionQuery>,
) -> Json<ApiResponse<Vec<String>>> {
    let all = or_empty(properties::get_all(state.source.as_ref()).await, "properties");
    respond(search::generate_search_suggestions(&q, &all))
}

async fn price_ranges(State(state): State<AppState>) -> Json<ApiResponse<Vec<PriceRangeOption>>> {
    let all = or_empty(properties::get_all(state.source.as_ref()).await, "properties");
    respond(search::generate_price_ranges(&all))
}

async fn search_options() -> Json<ApiResponse<SearchOptions>> {
    respond(SearchOptions {
        sort_options: SortOption::ALL.iter().map(SortOption::descriptor).collect(),
        property_types: &PROPERTY_TYPES,
        amenities: &COMMON_AMENITIES,
        popular_destinations: &POPULAR_DESTINATIONS,
    })
}

async fn map_view(State(state): State<AppState>) -> Json<ApiResponse<MapView>> {
    let all = or_empty(properties::get_all(state.source.as_ref()).await, "properties");
    respond(MapView::build(&all, state.config.map_token()))
}
