use chrono::Utc;
use log::{error, info};
use thiserror::Error;

use crate::{
    models::contact::ContactSubmission,
    sanity::{CmsError, ContentSource},
};

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Missing required property application fields")]
    MissingApplicationFields,

    #[error("Failed to store contact submission: {0}")]
    Storage(#[from] CmsError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactReceipt {
    pub id: String,
    pub message: &'static str,
}

pub fn validate(submission: &ContactSubmission) -> Result<(), ContactError> {
    if !submission.has_required_fields() {
        return Err(ContactError::MissingFields);
    }
    if submission.is_property_application() && !submission.has_application_fields() {
        return Err(ContactError::MissingApplicationFields);
    }
    Ok(())
}

pub async fn submit(
    source: &dyn ContentSource,
    submission: ContactSubmission,
) -> Result<ContactReceipt, ContactError> {
    validate(&submission)?;

    let message = if submission.is_property_application() {
        "Property application submitted successfully"
    } else {
        "Contact form submitted successfully"
    };

    let document = serde_json::to_value(submission.into_document(Utc::now())).map_err(CmsError::from)?;
    let id = source.create(document).await.map_err(|err| {
        error!("Error submitting contact form: {}", err);
        err
    })?;

    info!("Stored contact submission {}", id);
    Ok(ContactReceipt { id, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(body: serde_json::Value) -> ContactSubmission {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn missing_email_is_rejected() {
        let err = validate(&form(json!({ "name": "Amina", "inquiryType": "general" }))).unwrap_err();
        assert!(matches!(err, ContactError::MissingFields));
    }

    #[test]
    fn application_requires_property_fields() {
        let submission = form(json!({
            "name": "Youssef",
            "email": "youssef@example.com",
            "inquiryType": "property-application",
            "location": "Agadir",
            "bedrooms": "2",
            "propertyDescription": "Flat near the beach"
        }));
        let err = validate(&submission).unwrap_err();
        assert!(matches!(err, ContactError::MissingApplicationFields));
        assert_eq!(err.to_string(), "Missing required property application fields");
    }

    #[test]
    fn general_inquiry_ignores_application_fields() {
        let submission = form(json!({
            "name": "Amina",
            "email": "amina@example.com",
            "inquiryType": "media"
        }));
        assert!(validate(&submission).is_ok());
    }
}
