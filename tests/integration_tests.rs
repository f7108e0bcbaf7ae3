// Integration tests for the jobcon search pipeline and voice stub

use std::time::Duration;

use jobcon::core::criteria::{FilterCriteria, LocationField};
use jobcon::core::searcher::Searcher;
use jobcon::core::voice::VoiceSearch;
use jobcon::models::ProviderProfile;

fn create_test_provider(
    id: &str,
    category: &str,
    city: &str,
    rating: f64,
    rate: u32,
) -> ProviderProfile {
    ProviderProfile {
        provider_id: id.to_string(),
        name: format!("Provider {}", id),
        profile_type: "service_provider".to_string(),
        category: category.to_string(),
        country: "RDC".to_string(),
        region: "Kinshasa".to_string(),
        city: city.to_string(),
        neighborhood: String::new(),
        hourly_rate: rate,
        experience: "3 à 5 ans".to_string(),
        gender: "female".to_string(),
        availability: vec![
            "Libre les week-ends".to_string(),
            "À temps partiel".to_string(),
        ],
        languages: vec!["Français".to_string()],
        rating,
        review_count: 12,
        is_verified: Some(true),
        is_active: true,
        photo_url: None,
    }
}

#[test]
fn test_end_to_end_search() {
    let searcher = Searcher::new(20, 100);

    let mut criteria = FilterCriteria::default();
    criteria.set_job_category("Bâtiment, électricité, plomberie");
    criteria.set_location_field(LocationField::City, "Gombe");
    criteria.toggle_availability("Libre les week-ends");

    let candidates = vec![
        create_test_provider("1", "Bâtiment, électricité, plomberie", "Gombe", 4.8, 25),
        create_test_provider("2", "Bâtiment, électricité, plomberie", "Limete", 4.9, 30), // wrong city
        create_test_provider("3", "Nettoyage", "Gombe", 4.7, 20), // wrong category
        create_test_provider("4", "Bâtiment, électricité, plomberie", "Gombe", 4.5, 18),
    ];

    let result = searcher.search(&criteria, candidates, None);

    assert_eq!(result.total_candidates, 4);
    let ids: Vec<&str> = result
        .providers
        .iter()
        .map(|p| p.provider_id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "4"]);
}

#[test]
fn test_search_after_reset_matches_everything_active() {
    let searcher = Searcher::new(20, 100);

    let mut criteria = FilterCriteria::default();
    criteria.set_job_category("Santé");
    criteria.set_gender("female");
    criteria.reset();

    let mut inactive = create_test_provider("off", "Nettoyage", "Gombe", 4.0, 20);
    inactive.is_active = false;

    let candidates = vec![
        create_test_provider("1", "Nettoyage", "Gombe", 4.0, 20),
        create_test_provider("2", "Santé", "Limete", 4.0, 900),
        inactive,
    ];

    let result = searcher.search(&criteria, candidates, None);

    assert_eq!(result.providers.len(), 2);
}

#[tokio::test]
async fn test_voice_search_drives_the_criteria() {
    let voice = VoiceSearch::new(Duration::from_millis(20));
    let mut criteria = FilterCriteria::default();
    criteria.toggle_availability("Disponible maintenant");
    criteria.set_job_category("Santé");

    let outcome = voice.recognize().await;
    outcome.apply_to(&mut criteria);

    assert_eq!(criteria.job_category, "Bâtiment, électricité, plomberie");
    assert_eq!(criteria.location.city, "Gombe");
    assert_eq!(
        criteria.availability.iter().cloned().collect::<Vec<_>>(),
        vec!["Libre les week-ends".to_string()]
    );
    assert!(!voice.is_active());
}

#[tokio::test]
async fn test_voice_outcome_feeds_the_search() {
    let searcher = Searcher::new(20, 100);
    let voice = VoiceSearch::new(Duration::from_millis(5));

    let mut criteria = FilterCriteria::default();
    voice.recognize().await.apply_to(&mut criteria);

    let candidates = vec![
        create_test_provider("hit", "Bâtiment, électricité, plomberie", "Gombe", 4.8, 25),
        create_test_provider("miss", "Informatique / digital", "Gombe", 4.9, 30),
    ];

    let result = searcher.search(&criteria, candidates, None);

    assert_eq!(result.providers.len(), 1);
    assert_eq!(result.providers[0].provider_id, "hit");
}
