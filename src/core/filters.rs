use crate::core::criteria::FilterCriteria;
use crate::models::ProviderProfile;

/// Check a provider against the current search criteria.
///
/// Empty criteria fields match everything; an inactive provider never
/// matches. Set-valued criteria (availability, languages) require the
/// provider to cover every selected option, independently of selection order.
#[inline]
pub fn matches_criteria(profile: &ProviderProfile, criteria: &FilterCriteria) -> bool {
    if !profile.is_active {
        return false;
    }

    if !criteria.profile_type.is_empty() && profile.profile_type != criteria.profile_type {
        return false;
    }

    if !criteria.job_category.is_empty() && profile.category != criteria.job_category {
        return false;
    }

    if !matches_location(profile, criteria) {
        return false;
    }

    if !criteria
        .availability
        .iter()
        .all(|option| profile.availability.iter().any(|a| a == option))
    {
        return false;
    }

    if !criteria.experience.is_empty() && profile.experience != criteria.experience {
        return false;
    }

    if profile.hourly_rate < criteria.price_min || profile.hourly_rate > criteria.price_max {
        return false;
    }

    if !criteria.gender.is_empty()
        && criteria.gender != "any"
        && profile.gender != criteria.gender
    {
        return false;
    }

    if !criteria
        .languages
        .iter()
        .all(|language| profile.languages.iter().any(|l| l == language))
    {
        return false;
    }

    true
}

/// Location sub-fields are matched independently, case-insensitively
#[inline]
fn matches_location(profile: &ProviderProfile, criteria: &FilterCriteria) -> bool {
    field_matches(&criteria.location.country, &profile.country)
        && field_matches(&criteria.location.region, &profile.region)
        && field_matches(&criteria.location.city, &profile.city)
        && field_matches(&criteria.location.neighborhood, &profile.neighborhood)
}

#[inline]
fn field_matches(criterion: &str, value: &str) -> bool {
    criterion.is_empty() || criterion.to_lowercase() == value.to_lowercase()
}
