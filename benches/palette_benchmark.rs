//! Benchmarks for palette filtering and grouping.
//!
//! Run with: cargo bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use folio::commands::CommandRegistry;
use folio::models::{Action, Command};
use folio::state::CommandPalette;

const CATEGORIES: [&str; 4] = ["Navigation", "Projects", "External", "Actions"];

/// Registry with `size` commands spread over the usual categories.
fn registry(size: usize) -> Arc<CommandRegistry> {
    let commands = (0..size)
        .map(|i| {
            Command::new(
                format!("cmd-{}", i),
                format!("Open: file_{}.md", i),
                CATEGORIES[i % CATEGORIES.len()],
                Action::ShowHelp,
            )
        })
        .collect();
    Arc::new(CommandRegistry::new(commands).expect("unique ids"))
}

fn open_palette(size: usize) -> CommandPalette {
    let mut palette = CommandPalette::new(registry(size));
    palette.set_list_rows(Some(15));
    palette.open();
    palette
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette_filter");

    for size in [15, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("query", size), &size, |b, &size| {
            let mut palette = open_palette(size);
            b.iter(|| {
                palette.filter(black_box("file_1"));
                black_box(palette.filtered_len())
            });
        });
        group.bench_with_input(BenchmarkId::new("empty", size), &size, |b, &size| {
            let mut palette = open_palette(size);
            b.iter(|| {
                palette.filter(black_box(""));
                black_box(palette.filtered_len())
            });
        });
    }

    group.finish();
}

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette_view");

    for size in [15, 100, 1000] {
        let palette = open_palette(size);
        group.bench_with_input(BenchmarkId::new("rows", size), &palette, |b, palette| {
            b.iter(|| black_box(palette.view().rows().len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_view);
criterion_main!(benches);
