use criterion::{criterion_group, criterion_main, Criterion};
use optionals::{Failure, Optional, OptionalResult};
use std::hint;

fn optional(c: &mut Criterion) {
    let mut group = c.benchmark_group("optional");
    let present = Optional::some(String::from("odin"));
    let absent = Optional::<String>::none();

    group.bench_function("match", |b| {
        b.iter(|| {
            hint::black_box(present.as_ref().into_option().map_or(0, |s| s.len()));
            hint::black_box(absent.as_ref().into_option().map_or(0, |s| s.len()));
        })
    });
    group.bench_function("get", |b| {
        b.iter(|| {
            hint::black_box(present.get().wait());
            hint::black_box(absent.get().wait());
        })
    });
    group.finish();
}

fn optional_result(c: &mut Criterion) {
    let mut group = c.benchmark_group("optional_result");
    let states = [
        OptionalResult::some(1u64),
        OptionalResult::none(),
        OptionalResult::failed(Failure::new("loki is a secret")),
    ];

    group.bench_function("into_result", |b| {
        b.iter(|| {
            for state in &states {
                hint::black_box(state.clone().into_result().is_ok());
            }
        })
    });
    group.bench_function("get", |b| {
        b.iter(|| {
            for state in &states {
                hint::black_box(state.get().wait());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, optional, optional_result);
criterion_main!(benches);
