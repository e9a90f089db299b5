use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use stockpile_inventory::{CategoryFilter, ItemDraft, ItemStore, PRESET_CATEGORIES, SortDirection};

fn populated_store(len: usize) -> ItemStore {
    let mut store = ItemStore::new();
    for i in 0..len {
        let category = PRESET_CATEGORIES[i % PRESET_CATEGORIES.len()];
        // Scatter quantities so sorting has work to do.
        let quantity = ((i * 7919) % 1000) as u32;
        store
            .add(ItemDraft::new(format!("item-{i}"), category, quantity))
            .unwrap();
    }
    store
}

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("view");

    for len in [100usize, 1_000, 10_000] {
        let store = populated_store(len);
        let electronics = CategoryFilter::parse("Electronics");
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("all_unsorted", len), &store, |b, store| {
            b.iter(|| black_box(store.view(&CategoryFilter::All, SortDirection::None).len()));
        });

        group.bench_with_input(BenchmarkId::new("all_ascending", len), &store, |b, store| {
            b.iter(|| black_box(store.view(&CategoryFilter::All, SortDirection::Ascending).len()));
        });

        group.bench_with_input(
            BenchmarkId::new("category_descending", len),
            &store,
            |b, store| {
                b.iter(|| black_box(store.view(&electronics, SortDirection::Descending).len()));
            },
        );
    }

    group.finish();
}

fn bench_list_categories(c: &mut Criterion) {
    let store = populated_store(10_000);
    c.bench_function("list_categories_10k", |b| {
        b.iter(|| black_box(store.list_categories()));
    });
}

criterion_group!(benches, bench_view, bench_list_categories);
criterion_main!(benches);
