use atlas_core::filter::{AttractionFilters, AttractionSort, CityFilters, CitySort, PopulationBucket};
use atlas_core::{Attraction, City, ListState};
use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;
use std::hint::black_box;

fn synthetic_cities(n: usize) -> Vec<City> {
    (0..n)
        .map(|i| {
            serde_json::from_value(json!({
                "id": format!("M-{i}"),
                "podstawowe_informacje": {"nazwa": {"popularna": format!("Miasto {}", n - i)}},
                "lokalizacja": {"kraj_id": format!("K-{}", i % 40)},
                "demografia": {"populacja": (i * 7919 % 20_000_000) as f64},
                "turystyka": {"obiekty_unesco": i % 5}
            }))
            .unwrap()
        })
        .collect()
}

fn synthetic_attractions(n: usize) -> Vec<Attraction> {
    (0..n)
        .map(|i| {
            Attraction::from_value(
                json!({
                    "id": format!("A-{i}"),
                    "podstawowe_informacje": {"nazwa": {"potoczna": format!("Obiekt {i}")}},
                    "lokalizacja": {"adres": {"kraj": if i % 3 == 0 { "Włochy" } else { "Francja" }}},
                    "wymiary": {"wysokość": {"całkowita": (i % 400) as f64}}
                }),
                Some("budynki"),
            )
            .unwrap()
        })
        .collect()
}

fn bench_cities(c: &mut Criterion) {
    let cities = synthetic_cities(5_000);
    let state = ListState::<City>::new(
        CityFilters {
            search: "miasto 1".into(),
            population: Some(PopulationBucket::Large),
            ..CityFilters::default()
        },
        CitySort::Population,
    );
    c.bench_function("cities_filter_sort_5k", |b| {
        b.iter(|| black_box(state.apply(black_box(&cities))))
    });
    let by_name = ListState::<City>::new(CityFilters::default(), CitySort::Name);
    c.bench_function("cities_sort_by_name_5k", |b| {
        b.iter(|| black_box(by_name.apply(black_box(&cities))))
    });
}

fn bench_attractions(c: &mut Criterion) {
    let attractions = synthetic_attractions(5_000);
    let state = ListState::<Attraction>::new(
        AttractionFilters {
            search: "włochy".into(),
            ..AttractionFilters::default()
        },
        AttractionSort::Height,
    );
    c.bench_function("attractions_full_text_5k", |b| {
        b.iter(|| black_box(state.apply(black_box(&attractions))))
    });
}

criterion_group!(benches, bench_cities, bench_attractions);
criterion_main!(benches);
