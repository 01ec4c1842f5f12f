use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::models::property::Property;

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

const STATIC_PAGES: [(&str, ChangeFrequency, f32); 7] = [
    ("", ChangeFrequency::Daily, 1.0),
    ("/properties", ChangeFrequency::Daily, 0.9),
    ("/destinations", ChangeFrequency::Weekly, 0.8),
    ("/corporate", ChangeFrequency::Monthly, 0.7),
    ("/join-us", ChangeFrequency::Monthly, 0.7),
    ("/about", ChangeFrequency::Monthly, 0.6),
    ("/contact", ChangeFrequency::Monthly, 0.5),
];

pub const DESTINATION_PAGES: [&str; 5] = ["marrakech", "casablanca", "fez", "essaouira", "chefchaouen"];

/// Static routes, destination pages, then one entry per property.
pub fn build_sitemap(base_url: &str, now: DateTime<Utc>, properties: &[Property]) -> Vec<SitemapEntry> {
    let base_url = base_url.trim_end_matches('/');

    let static_pages = STATIC_PAGES.iter().map(|(path, change_frequency, priority)| SitemapEntry {
        url: format!("{}{}", base_url, path),
        last_modified: now,
        change_frequency: *change_frequency,
        priority: *priority,
    });

    let destination_pages = DESTINATION_PAGES.iter().map(|destination| SitemapEntry {
        url: format!("{}/destinations/{}", base_url, destination),
        last_modified: now,
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.7,
    });

    let property_pages = properties.iter().map(|property| SitemapEntry {
        url: format!("{}/properties/{}", base_url, property.slug),
        last_modified: property.updated_at,
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.6,
    });

    static_pages.chain(destination_pages).chain(property_pages).collect()
}

#[derive(Serialize)]
#[serde(rename = "urlset")]
struct UrlSet<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'a str,
    url: Vec<UrlElement>,
}

#[derive(Serialize)]
struct UrlElement {
    loc: String,
    lastmod: String,
    changefreq: &'static str,
    priority: String,
}

pub fn render_sitemap(entries: &[SitemapEntry]) -> Result<String, quick_xml::DeError> {
    let urlset = UrlSet {
        xmlns: SITEMAP_NAMESPACE,
        url: entries
            .iter()
            .map(|entry| UrlElement {
                loc: entry.url.clone(),
                lastmod: entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
                changefreq: entry.change_frequency.as_str(),
                priority: format!("{:.1}", entry.priority),
            })
            .collect(),
    };

    let body = quick_xml::se::to_string(&urlset)?;
    Ok(format!("{}\n{}", XML_DECLARATION, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sitemap_lists_static_destination_and_property_pages() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let updated = Utc.with_ymd_and_hms(2025, 5, 20, 8, 30, 0).unwrap();
        let property = Property {
            slug: "riad-dar-nour".to_string(),
            updated_at: updated,
            ..Default::default()
        };

        let entries = build_sitemap("https://example.com/", now, &[property]);

        assert_eq!(entries.len(), STATIC_PAGES.len() + DESTINATION_PAGES.len() + 1);
        assert_eq!(entries[0].url, "https://example.com");
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[7].url, "https://example.com/destinations/marrakech");

        let last = entries.last().unwrap();
        assert_eq!(last.url, "https://example.com/properties/riad-dar-nour");
        assert_eq!(last.last_modified, updated);
        assert_eq!(last.change_frequency, ChangeFrequency::Weekly);
    }

    #[test]
    fn rendered_sitemap_is_xml_urlset() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let xml = render_sitemap(&build_sitemap("https://example.com", now, &[])).unwrap();

        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
        assert!(xml.contains("<loc>https://example.com/properties</loc>"));
        assert!(xml.contains("<lastmod>2025-06-01T12:00:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.contains("<priority>0.9</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
