use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use roster::services::query_engine::{highest_salary, search_by_name, top_earning_names};
use roster::EmployeeRecord;
use std::hint::black_box;

fn population(size: usize) -> Vec<EmployeeRecord> {
    (0..size)
        .map(|i| {
            let salary = 30_000 + i64::try_from((i * 7_919) % 170_000).unwrap_or(0);
            EmployeeRecord::new(
                format!("id-{i}"),
                format!("Employee {i} Surname{}", i % 97),
                salary,
                30,
                "Staff",
                None,
            )
            .expect("bench record is valid")
        })
        .collect()
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_engine");

    for size in [100, 1_000, 10_000] {
        let employees = population(size);

        group.bench_with_input(BenchmarkId::new("search_by_name", size), &employees, |b, e| {
            b.iter(|| black_box(search_by_name(e, black_box("surname4")).len()));
        });
        group.bench_with_input(BenchmarkId::new("highest_salary", size), &employees, |b, e| {
            b.iter(|| black_box(highest_salary(e)));
        });
        group.bench_with_input(BenchmarkId::new("top_earning_names", size), &employees, |b, e| {
            b.iter(|| black_box(top_earning_names(e, 10)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
