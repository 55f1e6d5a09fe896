use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridmark_core::{Direction, Matrix};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_write_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_growth");
    for &grow in &[0usize, 16, 256] {
        group.bench_with_input(BenchmarkId::new("diagonal", grow), &grow, |b, &grow| {
            b.iter(|| {
                let mut m: Matrix<u64> = Matrix::with_size(0, 0, grow);
                for i in 0..1_000 {
                    m.set_cell(i, i, i as u64).unwrap();
                }
                black_box(m.height())
            })
        });
    }
    group.finish();
}

fn bench_random_writes(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let coords: Vec<(usize, usize)> = (0..10_000)
        .map(|_| (rng.gen_range(0..512), rng.gen_range(0..512)))
        .collect();

    c.bench_function("random_writes_512", |b| {
        b.iter(|| {
            let mut m: Matrix<u32> = Matrix::new();
            for &(x, y) in &coords {
                m.set_cell(x, y, 1).unwrap();
            }
            black_box(m.width())
        })
    });
}

fn bench_fill(c: &mut Criterion) {
    let values: Vec<i64> = (0..4_096).collect();
    let mut group = c.benchmark_group("fill");
    for (start, end) in [
        (Direction::West, Direction::East),
        (Direction::North, Direction::South),
        (Direction::NorthWest, Direction::SouthEast),
    ] {
        group.bench_function(format!("{start}_{end}"), |b| {
            b.iter(|| {
                let mut m: Matrix<i64> = Matrix::new();
                m.fill(values.iter().copied(), start, end).unwrap();
                black_box(m.height())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_write_growth, bench_random_writes, bench_fill);
criterion_main!(benches);
