use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use log::error;

use crate::{
    seo::{build_sitemap, render_sitemap, RobotsPolicy},
    services::properties,
};

use super::AppState;

pub async fn sitemap(State(state): State<AppState>) -> Response {
    // without the catalog the static and destination pages are still listed
    let catalog = properties::get_all(state.source.as_ref())
        .await
        .unwrap_or_else(|err| {
            error!("Error fetching properties for sitemap: {}", err);
            Vec::new()
        });

    let entries = build_sitemap(state.config.base_url(), Utc::now(), &catalog);
    match render_sitemap(&entries) {
        Ok(xml) => ([(CONTENT_TYPE, "application/xml")], xml).into_response(),
        Err(err) => {
            error!("Failed to render sitemap: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        RobotsPolicy::for_site(state.config.base_url()).to_string(),
    )
}
