//! # Navigation Benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nalgebra::{UnitQuaternion, Vector3};
use rov_lib::{loc::Pose, nav};
use util::maths;

fn nav_benchmark(c: &mut Criterion) {
    // ---- Build a rover pose and a ring of goals around it ----

    let rov_pose = Pose::new(
        Vector3::new(1.0, -2.0, 0.0),
        *UnitQuaternion::from_euler_angles(0.0, 0.0, 2.5).quaternion(),
    );

    let goals: Vec<Pose> = (0..64)
        .map(|i| {
            let a = (i as f64) * std::f64::consts::PI / 32.0;
            Pose::new(
                Vector3::new(1.0 + 3.0 * a.cos(), -2.0 + 3.0 * a.sin(), 0.0),
                UnitQuaternion::identity().into_inner(),
            )
        })
        .collect();

    // ---- Benchmarks ----

    c.bench_function("bearing", |b| {
        b.iter(|| maths::bearing(black_box(&rov_pose.attitude_q)))
    });

    c.bench_function("nav_cmd ring", |b| {
        b.iter(|| {
            for goal in goals.iter() {
                black_box(nav::nav_cmd(black_box(&rov_pose), goal));
            }
        })
    });
}

criterion_group!(benches, nav_benchmark);
criterion_main!(benches);
