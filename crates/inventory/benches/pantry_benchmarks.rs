use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use pantry_inventory::{Ingredient, Pantry};

fn ingredients(count: usize) -> Vec<Ingredient> {
    (0..count)
        .map(|i| Ingredient::new(format!("Item{i}"), format!("Kind{}", i % 7)))
        .collect()
}

fn ingredients_file(count: usize) -> String {
    let mut text = String::new();
    for i in 0..count {
        if i % 10 == 9 {
            text.push_str("Broken Line\n");
        } else {
            text.push_str(&format!("Item{i} Kind{} {}\n", i % 7, i + 1));
        }
    }
    text
}

fn bench_add_consume(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_consume");

    for count in [100usize, 1_000, 10_000] {
        let items = ingredients(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &items, |b, items| {
            b.iter(|| {
                let mut pantry = Pantry::new();
                for item in items {
                    pantry.add_ingredient(item.clone(), 3).unwrap();
                }
                for item in items {
                    black_box(pantry.consume_ingredient(item, 2).unwrap());
                }
                black_box(pantry.len())
            });
        });
    }

    group.finish();
}

fn bench_bulk_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_load");

    for count in [100usize, 1_000, 10_000] {
        let text = ingredients_file(count);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            b.iter(|| {
                let mut pantry = Pantry::new();
                black_box(pantry.load_ingredients(text))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add_consume, bench_bulk_load);
criterion_main!(benches);
