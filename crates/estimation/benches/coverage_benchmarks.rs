use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use paintcalc_catalog::Catalog;
use paintcalc_estimation::{CoverageEngine, EstimateRequest, SelectionMode};

fn requests() -> Vec<(&'static str, EstimateRequest)> {
    vec![
        (
            "fixed_range",
            EstimateRequest::new("Moshe 3000 Flex", 100.0).with_coat_count(2),
        ),
        (
            "surface_class",
            EstimateRequest::new("Moshe 3000 Repel", 40.0)
                .with_coat_count(2)
                .with_yield_value(5.0),
        ),
        (
            "batch_default",
            EstimateRequest::new("Moshe 3000 Wood", "250.5").with_mode(SelectionMode::Batch),
        ),
        ("rejected", EstimateRequest::new("Moshe 3000 Flex", "-1")),
    ]
}

fn bench_compute_coverage(c: &mut Criterion) {
    let engine = CoverageEngine::new(Catalog::builtin());
    let mut group = c.benchmark_group("compute_coverage");

    for (name, request) in requests() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &request, |b, request| {
            b.iter(|| {
                let _ = black_box(engine.compute_coverage(black_box(request)));
            });
        });
    }

    group.finish();
}

fn bench_resolve_option_groups(c: &mut Criterion) {
    let engine = CoverageEngine::new(Catalog::builtin());
    let ids = engine.list_products();

    c.bench_function("resolve_option_groups/all_products", |b| {
        b.iter(|| {
            for id in &ids {
                let _ = black_box(engine.resolve_option_groups(black_box(id.as_str())));
            }
        });
    });
}

criterion_group!(benches, bench_compute_coverage, bench_resolve_option_groups);
criterion_main!(benches);
