use std::hint::black_box;

use algebra::group::{compose, D3Element};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use group_demo::{Axiom, Component, IntegerDemo, TriangleDemo};
use itertools::iproduct;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn compose_table(c: &mut Criterion) {
  let mut group = c.benchmark_group("d3");
  group.throughput(Throughput::Elements(36));

  group.bench_function("compose all pairs", |b| {
    b.iter(|| {
      for (x, y) in iproduct!(D3Element::ALL, D3Element::ALL) {
        black_box(black_box(x) * black_box(y));
      }
    })
  });

  group.bench_function("compose all pairs by name", |b| {
    b.iter(|| {
      for (x, y) in iproduct!(D3Element::ALL, D3Element::ALL) {
        let _ = black_box(compose(black_box(x.name()), black_box(y.name())));
      }
    })
  });

  group.throughput(Throughput::Elements(6));
  group.bench_function("inverse by search", |b| {
    b.iter(|| {
      for el in D3Element::ALL {
        black_box(black_box(el).find_inverse());
      }
    })
  });

  group.finish();
}

fn panels(c: &mut Criterion) {
  const N_INPUTS: usize = 1_000;

  let mut rng = StdRng::seed_from_u64(2718);
  let inputs: Vec<[String; 3]> = (0..N_INPUTS)
    .map(|_| {
      [(); 3].map(|_| (2 * rng.random_range(-10_000i64..10_000)).to_string())
    })
    .collect();

  let mut group = c.benchmark_group("panels");
  group.throughput(Throughput::Elements(N_INPUTS as u64));

  let evens = IntegerDemo::evens();
  group.bench_function("even associativity", |b| {
    b.iter(|| {
      for [x, y, z] in &inputs {
        black_box(evens.check(Axiom::Associativity, &[x.as_str(), y.as_str(), z.as_str()]));
      }
    })
  });

  let triangle = TriangleDemo::default();
  group.bench_function("triangle associativity", |b| {
    b.iter(|| {
      for (x, y, z) in iproduct!(D3Element::ALL, D3Element::ALL, D3Element::ALL) {
        black_box(triangle.check(Axiom::Associativity, &[x.name(), y.name(), z.name()]));
      }
    })
  });

  group.finish();
}

criterion_group!(benches, compose_table, panels);
criterion_main!(benches);
