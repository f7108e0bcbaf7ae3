// Criterion benchmarks for the jobcon search pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jobcon::core::criteria::{FilterCriteria, LocationField};
use jobcon::core::filters::matches_criteria;
use jobcon::core::searcher::Searcher;
use jobcon::models::catalog::{AVAILABILITY_OPTIONS, JOB_CATEGORIES, LANGUAGES};
use jobcon::models::ProviderProfile;

fn create_candidate(id: usize) -> ProviderProfile {
    ProviderProfile {
        provider_id: id.to_string(),
        name: format!("Provider {}", id),
        profile_type: "service_provider".to_string(),
        category: JOB_CATEGORIES[id % JOB_CATEGORIES.len()].to_string(),
        country: "RDC".to_string(),
        region: "Kinshasa".to_string(),
        city: if id % 3 == 0 { "Gombe" } else { "Limete" }.to_string(),
        neighborhood: String::new(),
        hourly_rate: 10 + (id % 90) as u32,
        experience: "1 à 3 ans".to_string(),
        gender: if id % 2 == 0 { "female" } else { "male" }.to_string(),
        availability: vec![AVAILABILITY_OPTIONS[id % AVAILABILITY_OPTIONS.len()].to_string()],
        languages: vec![LANGUAGES[id % LANGUAGES.len()].to_string()],
        rating: 3.0 + (id % 20) as f64 / 10.0,
        review_count: (id % 50) as u32,
        is_verified: Some(id % 3 == 0),
        is_active: true,
        photo_url: None,
    }
}

fn create_criteria() -> FilterCriteria {
    let mut criteria = FilterCriteria::default();
    criteria.set_job_category(JOB_CATEGORIES[0]);
    criteria.set_location_field(LocationField::City, "Gombe");
    criteria.set_price_max(80);
    criteria
}

fn bench_predicate(c: &mut Criterion) {
    let criteria = create_criteria();
    let profile = create_candidate(0);

    c.bench_function("matches_criteria", |b| {
        b.iter(|| matches_criteria(black_box(&profile), black_box(&criteria)));
    });
}

fn bench_toggle_pair(c: &mut Criterion) {
    c.bench_function("toggle_availability_pair", |b| {
        let mut criteria = FilterCriteria::default();
        b.iter(|| {
            criteria.toggle_availability(black_box("Libre les week-ends"));
            criteria.toggle_availability(black_box("Libre les week-ends"));
        });
    });
}

fn bench_search(c: &mut Criterion) {
    let searcher = Searcher::new(20, 100);
    let criteria = create_criteria();

    let mut group = c.benchmark_group("search");
    for size in [100usize, 1_000, 10_000] {
        let candidates: Vec<ProviderProfile> = (0..size).map(create_candidate).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter_batched(
                || candidates.clone(),
                |candidates| searcher.search(black_box(&criteria), candidates, None),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_predicate, bench_toggle_pair, bench_search);
criterion_main!(benches);
