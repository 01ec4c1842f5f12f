use chrono::{DateTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const PROPERTY_APPLICATION: &str = "property-application";

/// Raw contact form payload. Every field is optional here so that
/// validation can answer with a 400 instead of a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub inquiry_type: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub property_type: Option<String>,
    pub location: Option<String>,
    // The form sends "6+" as well as plain numbers; a numeric 0 is no answer
    #[serde(default, deserialize_with = "opt_nonzero_string_or_number")]
    pub bedrooms: Option<String>,
    pub property_description: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub property_size: Option<String>,
    pub currently_renting: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub expected_revenue: Option<String>,
    pub amenities: Option<Vec<String>>,
}

fn opt_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(num) => Some(num.to_string()),
        _ => return Err(de::Error::custom("expected a string or a number")),
    })
}

fn opt_nonzero_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(num) if num.as_f64() == Some(0.0) => None,
        Value::Number(num) => Some(num.to_string()),
        _ => return Err(de::Error::custom("expected a string or a number")),
    })
}

fn present(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl ContactSubmission {
    pub fn is_property_application(&self) -> bool {
        present(&self.inquiry_type) == Some(PROPERTY_APPLICATION)
    }

    pub fn has_required_fields(&self) -> bool {
        present(&self.name).is_some()
            && present(&self.email).is_some()
            && present(&self.inquiry_type).is_some()
    }

    pub fn has_application_fields(&self) -> bool {
        present(&self.property_type).is_some()
            && present(&self.location).is_some()
            && present(&self.bedrooms).is_some()
            && present(&self.property_description).is_some()
    }

    /// Builds the CMS document. Callers validate first; missing optional
    /// values become empty strings the way the site stores them.
    pub fn into_document(self, submitted_at: DateTime<Utc>) -> ContactDocument {
        let application = if self.is_property_application() {
            Some(PropertyApplication {
                property_type: self.property_type.unwrap_or_default(),
                location: self.location.unwrap_or_default(),
                bedrooms: self.bedrooms.unwrap_or_default(),
                property_description: self.property_description.unwrap_or_default(),
                property_size: self.property_size.unwrap_or_default(),
                currently_renting: self.currently_renting.unwrap_or_default(),
                expected_revenue: self.expected_revenue.unwrap_or_default(),
                amenities: self.amenities.unwrap_or_default(),
            })
        } else {
            None
        };

        ContactDocument {
            doc_type: "contact",
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            inquiry_type: self.inquiry_type.unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
            submitted_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            status: "new",
            application,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyApplication {
    pub property_type: String,
    pub location: String,
    pub bedrooms: String,
    pub property_description: String,
    pub property_size: String,
    pub currently_renting: String,
    pub expected_revenue: String,
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDocument {
    #[serde(rename = "_type")]
    pub doc_type: &'static str,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: String,
    pub status: &'static str,
    #[serde(flatten)]
    pub application: Option<PropertyApplication>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn submission(body: Value) -> ContactSubmission {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn blank_required_field_counts_as_missing() {
        let form = submission(json!({
            "name": "  ",
            "email": "guest@example.com",
            "inquiryType": "general"
        }));
        assert!(!form.has_required_fields());
    }

    #[test]
    fn numeric_bedrooms_are_accepted() {
        let form = submission(json!({ "bedrooms": 3, "propertySize": "120" }));
        assert_eq!(form.bedrooms.as_deref(), Some("3"));
        assert_eq!(form.property_size.as_deref(), Some("120"));
    }

    #[test]
    fn numeric_zero_bedrooms_is_no_answer() {
        let form = submission(json!({
            "inquiryType": "property-application",
            "propertyType": "riad",
            "location": "Fez",
            "bedrooms": 0,
            "propertyDescription": "Small riad"
        }));
        assert_eq!(form.bedrooms, None);
        assert!(!form.has_application_fields());

        let form = submission(json!({ "bedrooms": "0" }));
        assert_eq!(form.bedrooms.as_deref(), Some("0"));
    }

    #[test]
    fn general_inquiry_document_has_no_application_fields() {
        let form = submission(json!({
            "name": "Amina",
            "email": "amina@example.com",
            "inquiryType": "booking",
            "propertyType": "riad"
        }));
        let submitted_at = Utc.with_ymd_and_hms(2025, 5, 24, 10, 0, 0).unwrap();
        let document = serde_json::to_value(form.into_document(submitted_at)).unwrap();

        assert_eq!(document["_type"], "contact");
        assert_eq!(document["status"], "new");
        assert_eq!(document["phone"], "");
        assert_eq!(document["submittedAt"], "2025-05-24T10:00:00.000Z");
        assert!(document.get("propertyType").is_none());
    }

    #[test]
    fn application_document_flattens_property_fields() {
        let form = submission(json!({
            "name": "Youssef",
            "email": "youssef@example.com",
            "inquiryType": "property-application",
            "propertyType": "villa",
            "location": "Essaouira",
            "bedrooms": "6+",
            "propertyDescription": "Sea view villa",
            "amenities": ["pool", "wifi"]
        }));
        assert!(form.is_property_application());
        assert!(form.has_application_fields());

        let document = serde_json::to_value(form.into_document(Utc::now())).unwrap();
        assert_eq!(document["propertyType"], "villa");
        assert_eq!(document["bedrooms"], "6+");
        assert_eq!(document["expectedRevenue"], "");
        assert_eq!(document["amenities"], json!(["pool", "wifi"]));
    }
}
