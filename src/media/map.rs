use serde::Serialize;

use crate::models::{location::Coordinates, property::Property};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub id: String,
    pub title: String,
    pub coordinates: Coordinates,
    pub price: f64,
    pub currency: String,
    pub image: Option<String>,
    pub city: String,
    pub region: String,
}

impl From<&Property> for MapMarker {
    fn from(property: &Property) -> Self {
        MapMarker {
            id: property.id.clone(),
            title: property.title.clone(),
            coordinates: property.location.coordinates,
            price: property.price.amount,
            currency: property.price.currency.clone(),
            image: property.cover_image().map(|image| image.url.clone()),
            city: property.location.city.clone(),
            region: property.location.region.clone(),
        }
    }
}

/// What a map widget should render. Without a map token the site shows a
/// static placeholder listing the same markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum MapView {
    Interactive {
        #[serde(rename = "accessToken")]
        access_token: String,
        center: Coordinates,
        markers: Vec<MapMarker>,
    },
    Fallback {
        markers: Vec<MapMarker>,
    },
}

fn center_of(markers: &[MapMarker]) -> Coordinates {
    if markers.is_empty() {
        return Coordinates::default();
    }
    let count = markers.len() as f64;
    Coordinates {
        lat: markers.iter().map(|m| m.coordinates.lat).sum::<f64>() / count,
        lng: markers.iter().map(|m| m.coordinates.lng).sum::<f64>() / count,
    }
}

impl MapView {
    pub fn build(properties: &[Property], access_token: Option<&str>) -> MapView {
        let markers: Vec<MapMarker> = properties.iter().map(MapMarker::from).collect();

        match access_token {
            Some(token) => MapView::Interactive {
                access_token: token.to_string(),
                center: center_of(&markers),
                markers,
            },
            None => MapView::Fallback { markers },
        }
    }

    pub fn markers(&self) -> &[MapMarker] {
        match self {
            MapView::Interactive { markers, .. } => markers,
            MapView::Fallback { markers } => markers,
        }
    }
}

/// The marker whose popup is open, if any.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MarkerSelection {
    selected: Option<String>,
}

impl MarkerSelection {
    /// Selecting an id that is not on the map leaves the selection as is.
    pub fn select(&mut self, view: &MapView, marker_id: &str) -> bool {
        if view.markers().iter().any(|marker| marker.id == marker_id) {
            self.selected = Some(marker_id.to_string());
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}
