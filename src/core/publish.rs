use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Offer, OfferStatus};

/// A required publish-form field was left empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("missing required field: {0}")]
pub struct MissingField(pub &'static str);

/// Offer submission form, one field per input on the publish screen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferForm {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub publication_type: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "Utc::now")]
    pub expiration_date: DateTime<Utc>,
    #[serde(default)]
    pub budget: String,
}

impl Default for OfferForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            publication_type: String::new(),
            category: String::new(),
            description: String::new(),
            skills: String::new(),
            location: String::new(),
            expiration_date: Utc::now(),
            budget: String::new(),
        }
    }
}

impl OfferForm {
    /// Required-field gate, run before any backend call.
    ///
    /// Title, type, category and description must be non-blank; everything
    /// else is optional.
    pub fn validate(&self) -> Result<(), MissingField> {
        if self.title.trim().is_empty() {
            return Err(MissingField("title"));
        }
        if self.publication_type.trim().is_empty() {
            return Err(MissingField("type"));
        }
        if self.category.trim().is_empty() {
            return Err(MissingField("category"));
        }
        if self.description.trim().is_empty() {
            return Err(MissingField("description"));
        }
        Ok(())
    }

    /// Pure mapping from form fields to the record the backend stores
    pub fn to_offer(
        &self,
        id: String,
        employer_id: Option<String>,
        image_url: Option<String>,
        now: DateTime<Utc>,
    ) -> Offer {
        Offer {
            id,
            publication_type: self.publication_type.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            publication_date: now,
            expiration_date: self.expiration_date,
            location: self.location.clone(),
            employer_id,
            category: self.category.clone(),
            required_skills: self.skills.clone(),
            budget: self.budget.clone(),
            assignment_location: self.location.clone(),
            image_url,
            status: OfferStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> OfferForm {
        OfferForm {
            title: "Développeur mobile".to_string(),
            publication_type: "job_offer".to_string(),
            category: "Informatique / digital".to_string(),
            description: "Mission de trois mois".to_string(),
            skills: "React Native".to_string(),
            location: "Kinshasa, Gombe".to_string(),
            budget: "500".to_string(),
            ..OfferForm::default()
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let mut form = filled_form();
        form.title = "  ".to_string();

        assert_eq!(form.validate(), Err(MissingField("title")));
    }

    #[test]
    fn test_each_required_field_is_checked() {
        for (field, name) in [
            (1usize, "type"),
            (2, "category"),
            (3, "description"),
        ] {
            let mut form = filled_form();
            match field {
                1 => form.publication_type.clear(),
                2 => form.category.clear(),
                3 => form.description.clear(),
                _ => unreachable!(),
            }
            assert_eq!(form.validate(), Err(MissingField(name)));
        }
    }

    #[test]
    fn test_to_offer_maps_every_field() {
        let form = filled_form();
        let now = Utc::now();

        let offer = form.to_offer(
            "-Nkey".to_string(),
            Some("user1".to_string()),
            Some("https://example.test/img.jpg".to_string()),
            now,
        );

        assert_eq!(offer.id, "-Nkey");
        assert_eq!(offer.publication_type, "job_offer");
        assert_eq!(offer.publication_date, now);
        assert_eq!(offer.expiration_date, form.expiration_date);
        assert_eq!(offer.required_skills, "React Native");
        assert_eq!(offer.assignment_location, offer.location);
        assert_eq!(offer.status, OfferStatus::Active);
        assert_eq!(
            offer.image_url.as_deref(),
            Some("https://example.test/img.jpg")
        );
    }
}
