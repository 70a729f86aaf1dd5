use criterion::{black_box, criterion_group, criterion_main, Criterion};
use corona_hyp_ops::*;

fn bench_gyro_add(c: &mut Criterion) {
    let u = GyroPoint::from_xy(0.31, -0.42);
    let v = GyroPoint::from_xy(-0.18, 0.55);
    c.bench_function("gyro_add", |b| {
        b.iter(|| black_box(&u).add(black_box(&v)))
    });
}

fn bench_gyro_distance(c: &mut Criterion) {
    let u = GyroPoint::from_xy(0.31, -0.42);
    let v = GyroPoint::from_xy(-0.18, 0.55);
    c.bench_function("gyro_distance", |b| {
        b.iter(|| black_box(&u).distance(black_box(&v)))
    });
}

fn bench_gyro_scale(c: &mut Criterion) {
    let u = GyroPoint::from_xy(0.31, -0.42);
    c.bench_function("gyro_scale", |b| {
        b.iter(|| black_box(&u).scale(black_box(2.5)))
    });
}

fn bench_gyro_placement_step(c: &mut Criterion) {
    let guide = GyroPoint::from_xy(0.497, 0.0);
    let v = GyroPoint::from_xy(0.6, 0.3);
    let w = GyroPoint::from_xy(0.4, 0.5);
    c.bench_function("gyro_placement_step", |b| {
        b.iter(|| {
            let dir = black_box(&v).relative(black_box(&w)).phase();
            v.add(&guide.rotate(dir + 0.897))
        })
    });
}

fn bench_euclidean_placement_step(c: &mut Criterion) {
    let guide = EuclideanPoint::from_xy(1.0, 0.0);
    let v = EuclideanPoint::from_xy(3.0, -2.0);
    let w = EuclideanPoint::from_xy(3.0, -1.0);
    c.bench_function("euclidean_placement_step", |b| {
        b.iter(|| {
            let dir = black_box(&v).relative(black_box(&w)).phase();
            v.add(&guide.rotate(dir + 1.571))
        })
    });
}

fn bench_side_length(c: &mut Criterion) {
    c.bench_function("poincare_side_length_3_7", |b| {
        b.iter(|| poincare_side_length(black_box(3), black_box(7)))
    });
}

criterion_group!(
    benches,
    bench_gyro_add,
    bench_gyro_distance,
    bench_gyro_scale,
    bench_gyro_placement_step,
    bench_euclidean_placement_step,
    bench_side_length,
);
criterion_main!(benches);
