use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Geographic part of the search criteria.
///
/// Sub-fields are independent; the model never cross-checks that a city
/// belongs to its region. The radius lives on a 1-50 km slider whose bounds
/// are enforced by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCriteria {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(rename = "radiusKm", default = "default_radius_km")]
    pub radius_km: u8,
}

impl Default for LocationCriteria {
    fn default() -> Self {
        Self {
            country: String::new(),
            region: String::new(),
            city: String::new(),
            neighborhood: String::new(),
            radius_km: default_radius_km(),
        }
    }
}

/// One of the four independent location sub-fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationField {
    Country,
    Region,
    City,
    Neighborhood,
}

/// All search-refinement state owned by the search screen.
///
/// Mutations mirror the discrete user gestures one for one. Every operation
/// is infallible: inputs are pre-constrained by the presentation layer and the
/// model performs no cross-field validation. An empty string means "not
/// selected"; a selection outside the advertised catalogs simply matches
/// nothing later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub profile_type: String,
    #[serde(default)]
    pub job_category: String,
    #[serde(default)]
    pub location: LocationCriteria,
    #[serde(default)]
    pub availability: BTreeSet<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub price_min: u32,
    #[serde(default = "default_price_max")]
    pub price_max: u32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub languages: BTreeSet<String>,
    #[serde(default = "today")]
    pub target_date: NaiveDate,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            profile_type: String::new(),
            job_category: String::new(),
            location: LocationCriteria::default(),
            availability: BTreeSet::new(),
            experience: String::new(),
            price_min: 0,
            price_max: default_price_max(),
            gender: String::new(),
            languages: BTreeSet::new(),
            target_date: today(),
        }
    }
}

impl FilterCriteria {
    /// Replace the profile type selection (single-select)
    pub fn set_profile_type(&mut self, value: impl Into<String>) {
        self.profile_type = value.into();
    }

    /// Replace the job category selection
    pub fn set_job_category(&mut self, value: impl Into<String>) {
        self.job_category = value.into();
    }

    /// Replace one location sub-field, leaving the others untouched
    pub fn set_location_field(&mut self, field: LocationField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LocationField::Country => self.location.country = value,
            LocationField::Region => self.location.region = value,
            LocationField::City => self.location.city = value,
            LocationField::Neighborhood => self.location.neighborhood = value,
        }
    }

    /// Replace the search radius. The slider enforces the 1-50 bound.
    pub fn set_radius(&mut self, km: u8) {
        self.location.radius_km = km;
    }

    /// Toggle one availability option in or out of the set
    pub fn toggle_availability(&mut self, option: &str) {
        if !self.availability.remove(option) {
            self.availability.insert(option.to_string());
        }
    }

    /// Toggle one spoken language in or out of the set
    pub fn toggle_language(&mut self, language: &str) {
        if !self.languages.remove(language) {
            self.languages.insert(language.to_string());
        }
    }

    /// Replace the experience level selection
    pub fn set_experience(&mut self, value: impl Into<String>) {
        self.experience = value.into();
    }

    /// Replace the gender selection ("any" matches every provider)
    pub fn set_gender(&mut self, value: impl Into<String>) {
        self.gender = value.into();
    }

    /// Replace the upper price bound only. The lower bound is not adjustable
    /// in the current design and stays where it is.
    pub fn set_price_max(&mut self, value: u32) {
        self.price_max = value;
    }

    /// Replace the target date
    pub fn set_target_date(&mut self, date: NaiveDate) {
        self.target_date = date;
    }

    /// Restore every field to its documented default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn default_radius_km() -> u8 {
    5
}

fn default_price_max() -> u32 {
    1000
}

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
