use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::layout::Rect;

use kidclock::clock::{Clock, ClockTime, FaceGeometry};
use kidclock::quiz::options::{build_options, random_grid_time};

fn rim_path(face: &FaceGeometry, samples: usize) -> Vec<(u16, u16)> {
    let (cx, cy) = face.center();
    let rx = face.area.width as f64 / 2.0 - 1.0;
    let ry = face.area.height as f64 / 2.0 - 1.0;
    (0..samples)
        .map(|i| {
            let t = i as f64 / samples as f64 * std::f64::consts::TAU;
            ((cx + rx * t.sin()) as u16, (cy - ry * t.cos()) as u16)
        })
        .collect()
}

fn bench_drag(c: &mut Criterion) {
    let face = FaceGeometry::new(Rect::new(0, 0, 80, 40), 2.0);
    let path = rim_path(&face, 1000);

    c.bench_function("drag 1000 pointer samples", |b| {
        b.iter(|| {
            let mut clock = Clock::new(ClockTime { hour: 9, minute: 0 });
            clock.begin_drag(face.angle_at(path[0].0, path[0].1));
            for &(column, row) in &path {
                clock.drag_to(face.angle_at(black_box(column), black_box(row)));
            }
            clock.end_drag();
            clock
        })
    });
}

fn bench_options(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);

    c.bench_function("build quiz options", |b| {
        b.iter(|| {
            let correct = random_grid_time(&mut rng);
            build_options(black_box(correct), &mut rng)
        })
    });
}

criterion_group!(benches, bench_drag, bench_options);
criterion_main!(benches);
