use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_this_or_that::{as_f64, as_u64};

use crate::models::{
    amenity::{Amenity, AmenityCategory},
    destination::{Attraction, Destination, Transportation, Weather},
    location::{Coordinates, Location},
    property::{
        Availability, BookingLink, BookingPlatform, Price, PricePeriod, Property,
        PropertyCategory, PropertyImage, Rating, Specifications,
    },
};

use super::helpers::null_as_default;

#[derive(Debug, Default, Deserialize)]
pub struct SanitySlug {
    #[serde(default, deserialize_with = "null_as_default")]
    pub current: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanityImage {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub url: Option<String>,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SanityCoordinates {
    #[serde(default, deserialize_with = "as_f64")]
    pub lat: f64,
    #[serde(default, deserialize_with = "as_f64")]
    pub lng: f64,
}

impl From<SanityCoordinates> for Coordinates {
    fn from(raw: SanityCoordinates) -> Self {
        Coordinates {
            lat: raw.lat,
            lng: raw.lng,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SanityLocation {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    pub coordinates: Option<SanityCoordinates>,
    pub neighborhood: Option<String>,
    pub description: Option<String>,
}

impl From<SanityLocation> for Location {
    fn from(raw: SanityLocation) -> Self {
        Location {
            id: raw.id,
            city: raw.city,
            region: raw.region,
            country: raw.country,
            coordinates: raw.coordinates.map(Coordinates::from).unwrap_or_default(),
            neighborhood: raw.neighborhood.unwrap_or_default(),
            description: raw.description,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SanityAmenity {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: AmenityCategory,
}

impl From<SanityAmenity> for Amenity {
    fn from(raw: SanityAmenity) -> Self {
        Amenity {
            id: raw.id,
            name: raw.name,
            icon: raw.icon,
            category: raw.category,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SanityPrice {
    #[serde(default, deserialize_with = "as_f64")]
    pub amount: f64,
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub period: PricePeriod,
}

#[derive(Debug, Default, Deserialize)]
pub struct SanitySpecifications {
    #[serde(default, deserialize_with = "as_u64")]
    pub bedrooms: u64,
    #[serde(default, deserialize_with = "as_u64")]
    pub bathrooms: u64,
    #[serde(default, deserialize_with = "as_u64")]
    pub guests: u64,
    pub area: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanityAvailability {
    #[serde(default, deserialize_with = "null_as_default")]
    pub available: bool,
    pub next_available: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct SanityRating {
    #[serde(default, deserialize_with = "as_f64")]
    pub average: f64,
    #[serde(default, deserialize_with = "as_u64")]
    pub count: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct SanityBookingLink {
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform: BookingPlatform,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
}

impl From<SanityBookingLink> for BookingLink {
    fn from(raw: SanityBookingLink) -> Self {
        BookingLink {
            platform: raw.platform,
            url: raw.url,
            label: raw.label,
        }
    }
}

fn saturating_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanityProperty {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: SanitySlug,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<SanityImage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: SanityLocation,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: SanityPrice,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specifications: SanitySpecifications,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amenities: Vec<Option<SanityAmenity>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub booking_links: Vec<Option<SanityBookingLink>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    pub category: Option<PropertyCategory>,
    pub availability: Option<SanityAvailability>,
    pub rating: Option<SanityRating>,
    #[serde(rename = "_createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<SanityProperty> for Property {
    fn from(raw: SanityProperty) -> Self {
        let images = raw
            .images
            .into_iter()
            .enumerate()
            .map(|(index, image)| PropertyImage {
                id: image.key.unwrap_or_else(|| format!("img-{}", index)),
                url: image.url.unwrap_or_default(),
                alt: image.alt.unwrap_or_default(),
                caption: image.caption.unwrap_or_default(),
                order: index as u32 + 1,
            })
            // images whose asset was deleted come back without a url
            .filter(|image| !image.url.is_empty())
            .collect();

        let created_at = raw.created_at.unwrap_or_default();

        Property {
            id: raw.id,
            title: raw.title,
            slug: raw.slug.current,
            description: raw.description,
            short_description: raw.short_description,
            images,
            location: raw.location.into(),
            price: Price {
                amount: raw.price.amount,
                currency: raw.price.currency.unwrap_or_else(|| "MAD".to_string()),
                period: raw.price.period,
            },
            specifications: Specifications {
                bedrooms: saturating_u32(raw.specifications.bedrooms),
                bathrooms: saturating_u32(raw.specifications.bathrooms),
                guests: saturating_u32(raw.specifications.guests),
                area: raw.specifications.area,
            },
            // dangling references dereference to null
            amenities: raw.amenities.into_iter().flatten().map(Amenity::from).collect(),
            booking_links: raw
                .booking_links
                .into_iter()
                .flatten()
                .map(BookingLink::from)
                .collect(),
            featured: raw.featured,
            category: raw.category.unwrap_or_default(),
            availability: raw.availability.map(|availability| Availability {
                available: availability.available,
                next_available: availability.next_available,
            }),
            rating: raw.rating.map(|rating| Rating {
                average: rating.average,
                count: saturating_u32(rating.count),
            }),
            created_at,
            updated_at: raw.updated_at.unwrap_or(created_at),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanityAttraction {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanityWeather {
    pub best_time_to_visit: Option<String>,
    pub average_temp: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rainy_months: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanityDestination {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: SanitySlug,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub short_description: Option<String>,
    pub image: Option<String>,
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    pub coordinates: Option<SanityCoordinates>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attractions: Vec<SanityAttraction>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activities: Vec<String>,
    pub transportation: Option<Transportation>,
    pub weather: Option<SanityWeather>,
    pub property_count: Option<u64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl From<SanityDestination> for Destination {
    fn from(raw: SanityDestination) -> Self {
        Destination {
            id: raw.id,
            name: raw.name,
            slug: raw.slug.current,
            description: raw.description,
            short_description: raw.short_description,
            image: raw.image.unwrap_or_default(),
            video_url: raw.video_url,
            region: raw.region,
            coordinates: raw.coordinates.map(Coordinates::from).unwrap_or_default(),
            featured: raw.featured,
            highlights: raw.highlights,
            attractions: raw
                .attractions
                .into_iter()
                .map(|attraction| Attraction {
                    name: attraction.name,
                    kind: attraction.kind,
                    description: attraction.description,
                })
                .collect(),
            activities: raw.activities,
            transportation: raw.transportation.unwrap_or_default(),
            weather: raw
                .weather
                .map(|weather| Weather {
                    best_time_to_visit: weather.best_time_to_visit,
                    average_temp: weather.average_temp,
                    rainy_months: weather.rainy_months,
                })
                .unwrap_or_default(),
            property_count: saturating_u32(raw.property_count.unwrap_or(0)),
            min_price: raw.min_price,
            max_price: raw.max_price,
        }
    }
}
