use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use printdock::config::UiConfig;
use printdock::filters::build_pills;
use printdock::format::format_bytes;
use printdock::store::HistoryStore;
use printdock::types::{Filter, HistoryEntry};
use printdock::view::{partition, render, CollapseState};

fn create_history(entries: usize, folders: usize) -> Vec<HistoryEntry> {
    (0..entries)
        .map(|i| HistoryEntry {
            filename: format!("{}-file.pdf", i),
            original_name: format!("Document {}.pdf", i),
            // every fifth entry is uncategorized
            folder: (i % 5 != 0).then(|| format!("Folder {}", i % folders)),
            date: format!("2024-0{}-1{}T10:{:02}:00Z", 1 + i % 9, i % 10, i % 60),
            size: Some((i as u64 + 1) * 7919),
        })
        .collect()
}

fn benchmark_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    for &size in &[1_000usize, 10_000] {
        let entries = create_history(size, 50);
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| black_box(partition(entries).len()));
        });
    }
    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let ui = UiConfig::default();
    let collapse = CollapseState::default();
    let mut store = HistoryStore::with_entries(create_history(10_000, 50));

    c.bench_function("render_grouped_10k", |b| {
        b.iter(|| black_box(render(&store, &collapse, &ui)));
    });

    store.set_filter(Filter::Folder("Folder 7".to_string()));
    c.bench_function("render_folder_10k", |b| {
        b.iter(|| black_box(render(&store, &collapse, &ui)));
    });

    c.bench_function("filter_pills_10k", |b| {
        b.iter(|| black_box(build_pills(&store)));
    });
}

fn benchmark_format_bytes(c: &mut Criterion) {
    c.bench_function("format_bytes", |b| {
        b.iter(|| {
            for n in [0u64, 512, 1536, 5_000_000, 7_000_000_000] {
                black_box(format_bytes(Some(n), 2));
            }
        });
    });
}

criterion_group!(benches, benchmark_partition, benchmark_render, benchmark_format_bytes);
criterion_main!(benches);
