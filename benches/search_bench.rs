//! Search filter benchmarks.
//!
//! Measures the substring filter over catalogs of growing size. Every query
//! scans records in index order until the result cap is reached, so a query
//! that matches early is cheap and a rare or missing query pays for the whole
//! catalog.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `filter` | Common, rare and missing queries over a 10k-record catalog |
//! | `scaling` | A missing query as the catalog grows from 1k to 100k |
//! | `session` | `run_now` including the HTML render of the panel |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use vitrine_core::{
    config::SearchConfig, render::HtmlRenderer, search, Record, SearchIndex, SearchSession,
};

const ESPORTS: [&str; 6] = ["cod", "halo", "dota", "cs", "lol", "sc2"];

fn catalog(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| Record {
            id: format!("CE-{i:06}"),
            title: format!("Signed jersey number {i}"),
            description: (i % 3 == 0).then(|| format!("Worn during season {}", i % 20)),
            steward: (i % 5 == 0).then(|| "kettle".to_string()),
            team: Some(format!("Team {}", i % 40)),
            player: (i % 2 == 0).then(|| format!("player{}", i % 250)),
            esport: ESPORTS[i % ESPORTS.len()].to_string(),
            url: format!("/record/ce-{i:06}/"),
            primary_image: (i % 4 == 0).then(|| format!("/static/img/ce-{i:06}.jpg")),
        })
        .collect()
}

fn filter_bench(c: &mut Criterion) {
    let records = catalog(10_000);
    let mut group = c.benchmark_group("filter");
    group.throughput(Throughput::Elements(records.len() as u64));

    // Matches every record; stops at the cap almost immediately.
    group.bench_function("common_query_10k", |b| {
        b.iter(|| search::filter(black_box(&records), black_box("jersey")))
    });

    // A handful of matches spread across the catalog.
    group.bench_function("rare_query_10k", |b| {
        b.iter(|| search::filter(black_box(&records), black_box("player249")))
    });

    group.bench_function("missing_query_10k", |b| {
        b.iter(|| search::filter(black_box(&records), black_box("zzzz")))
    });

    group.finish();
}

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    for n in [1_000usize, 10_000, 100_000] {
        let records = catalog(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("missing_query", n), &records, |b, records| {
            b.iter(|| search::filter(black_box(records), black_box("zzzz")))
        });
    }
    group.finish();
}

fn session_bench(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let _guard = rt.enter();
    let index = SearchIndex::with_records(catalog(10_000));
    let mut session =
        SearchSession::with_renderer(index, &SearchConfig::default(), HtmlRenderer::default());

    c.bench_function("session/run_now_html_10k", |b| {
        b.iter(|| session.run_now(black_box("kettle")))
    });
}

criterion_group!(benches, filter_bench, scaling_bench, session_bench);
criterion_main!(benches);
