// Criterion benchmarks for Photo Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use photo_match::{filter_photos, GalleryPhoto, MatchResponse};

fn create_gallery(size: usize) -> Vec<GalleryPhoto> {
    (0..size)
        .map(|i| {
            let filename = format!("IMG_{:05}.jpg", i);
            GalleryPhoto {
                id: filename.clone(),
                uri: format!("http://localhost:5000/images/{}", filename),
                filename,
            }
        })
        .collect()
}

fn create_matches(gallery_size: usize, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("IMG_{:05}.jpg", (i * 7919) % gallery_size))
        .collect()
}

fn bench_filter_photos(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_photos");

    for size in [100, 1_000, 10_000] {
        let gallery = create_gallery(size);
        let matches = create_matches(size, 50);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| filter_photos(black_box(&gallery), black_box(&matches)));
        });
    }

    group.finish();
}

fn bench_decode_response(c: &mut Criterion) {
    let response = MatchResponse {
        message: "Found 200 matches.".to_string(),
        matches: create_matches(10_000, 200),
    };
    let body = serde_json::to_string(&response).unwrap();

    c.bench_function("decode_match_response", |b| {
        b.iter(|| serde_json::from_str::<MatchResponse>(black_box(&body)).unwrap());
    });
}

criterion_group!(benches, bench_filter_photos, bench_decode_response);
criterion_main!(benches);
