//! Octree build and query benchmarks.
//!
//! Workloads use uniformly random points in `[-count, count]` per axis, so
//! density stays constant as the cloud grows:
//! - **build**: synchronous init vs sliced construction
//! - **sphere**: small, large and zero radius around the origin
//! - **ray**: from the cloud center, and from far outside pointing toward
//!   and away from the cloud

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glam::DVec3;
use point_octree::{BuildBudget, OctreeBuilder, OctreeConfig, PointOctree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0x0c7_7ee;

fn random_points(count: usize) -> Vec<f64> {
  let mut rng = StdRng::seed_from_u64(SEED);
  let extent = count as f64;
  (0..count * 3).map(|_| rng.random_range(-extent..extent)).collect()
}

fn built_tree(count: usize) -> PointOctree {
  let mut tree = PointOctree::new();
  tree
    .init(random_points(count))
    .expect("benchmark points are valid");
  tree
}

// =============================================================================
// Build
// =============================================================================

fn bench_init(c: &mut Criterion) {
  let mut group = c.benchmark_group("build");

  for count in [10_000, 100_000] {
    let points: std::sync::Arc<[f64]> = random_points(count).into();
    group.throughput(Throughput::Elements(count as u64));

    group.bench_with_input(BenchmarkId::new("init", count), &points, |b, points| {
      b.iter(|| {
        let mut tree = PointOctree::new();
        tree.init(points.clone()).unwrap();
        black_box(tree)
      });
    });

    group.bench_with_input(BenchmarkId::new("sliced_4096", count), &points, |b, points| {
      b.iter(|| {
        let mut builder = OctreeBuilder::new(points.clone(), OctreeConfig::default()).unwrap();
        let budget = BuildBudget::points(4096);
        while !builder.is_complete() {
          builder.step(&budget);
        }
        black_box(builder)
      });
    });
  }

  group.finish();
}

// =============================================================================
// Sphere
// =============================================================================

fn bench_sphere(c: &mut Criterion) {
  let tree = built_tree(100_000);
  let mut group = c.benchmark_group("sphere_100k");

  for radius in [20.0, 200.0, 0.0] {
    group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &radius| {
      b.iter(|| black_box(tree.intersect_sphere(black_box(DVec3::ZERO), radius)));
    });
  }

  group.finish();
}

// =============================================================================
// Ray
// =============================================================================

fn bench_ray(c: &mut Criterion) {
  let tree = built_tree(100_000);
  let mut group = c.benchmark_group("ray_100k");

  let mut rng = StdRng::seed_from_u64(SEED + 1);
  let direction = DVec3::new(
    rng.random_range(-1.0..1.0),
    rng.random_range(-1.0..1.0),
    rng.random_range(-1.0..1.0),
  )
  .normalize_or(DVec3::X);

  group.bench_function("from_center", |b| {
    b.iter(|| black_box(tree.intersect_ray(DVec3::ZERO, black_box(direction))));
  });

  let outside = DVec3::new(100_000.0, 0.0, 0.0);
  group.bench_function("outside_toward", |b| {
    b.iter(|| black_box(tree.intersect_ray(outside, black_box(DVec3::NEG_X))));
  });
  group.bench_function("outside_away", |b| {
    b.iter(|| black_box(tree.intersect_ray(outside, black_box(DVec3::X))));
  });

  group.finish();
}

criterion_group!(build, bench_init);
criterion_group!(queries, bench_sphere, bench_ray);
criterion_main!(build, queries);
