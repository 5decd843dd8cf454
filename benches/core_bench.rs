use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use csv_marker_map::core::{cluster_group, ClusterParams};
use csv_marker_map::{parse_csv_document, Category, Marker, MarkerLayers, PointRecord};
use std::hint::black_box;

fn bench_csv_parsing(c: &mut Criterion) {
    let csv_content = include_str!("../tests/fixtures/markers.csv");

    c.bench_function("csv_parse_fixture", |b| {
        b.iter(|| {
            let parsed = parse_csv_document(black_box(csv_content));
            black_box(parsed.records.len())
        })
    });

    let mut large = String::from("lat,lng,title,description,type\n");
    for index in 0..10_000usize {
        let lat = 46.0 + (index % 150) as f64 * 0.01;
        let lng = 6.0 + (index / 150) as f64 * 0.02;
        let kind = if index % 3 == 0 { "action" } else { "lieu" };
        large.push_str(&format!(
            "{lat:.4},{lng:.4},Punkt {index},\"Beschreibung, Teil {index}|Zeile 2\",{kind}\n"
        ));
    }

    c.bench_function("csv_parse_10k_lines", |b| {
        b.iter(|| {
            let parsed = parse_csv_document(black_box(&large));
            black_box(parsed.records.len())
        })
    });
}

fn build_synthetic_layers(marker_count: usize) -> MarkerLayers {
    let mut layers = MarkerLayers::new();

    for index in 0..marker_count {
        let column = (index % 1000) as f64;
        let row = (index / 1000) as f64;
        let record = PointRecord {
            lat: 46.0 + row * 0.01 + column * 0.000_01,
            lng: 6.0 + column * 0.0015 + row * 0.000_01,
            title: format!("Punkt {index}"),
            description: String::new(),
            category: Category::Lieu,
        };
        layers.add_to_group(Marker::from_record(index as u64 + 1, record), Category::Lieu);
    }

    layers
}

fn bench_clustering(c: &mut Criterion) {
    let mut group = c.benchmark_group("clustering");

    for &marker_count in &[1_000usize, 10_000usize] {
        let layers = build_synthetic_layers(marker_count);

        for &zoom in &[7.0f64, 12.0f64] {
            let params = ClusterParams {
                radius_world: 10.0 / 2f64.powf(zoom),
                medium_threshold: 10,
                large_threshold: 50,
            };

            group.bench_with_input(
                BenchmarkId::new(format!("lieu_zoom_{zoom}"), marker_count),
                &layers,
                |b, layers| {
                    b.iter(|| {
                        let clusters =
                            cluster_group(black_box(layers.group(Category::Lieu)), &params);
                        black_box(clusters.len())
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(core_benches, bench_csv_parsing, bench_clustering);
criterion_main!(core_benches);
