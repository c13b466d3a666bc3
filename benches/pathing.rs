use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use perfect_maze::cells::GridCoordinate;
use perfect_maze::generators;
use perfect_maze::grids::{large_rect_grid, LargeRectangularGrid};
use perfect_maze::pathing::{self, Distances};
use perfect_maze::units::{ColumnsCount, RowsCount};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn carved_350() -> LargeRectangularGrid {
    let mut g = large_rect_grid(ColumnsCount(350), RowsCount(350)).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(350);
    generators::recursive_backtracker(&mut g, GridCoordinate::new(0, 0), &mut rng).unwrap();
    g
}

fn bench_distances(c: &mut Criterion) {
    c.bench_function("distances", |b| {
        let g = carved_350();
        let start_coord = GridCoordinate::new(250, 250);
        b.iter(|| Distances::for_grid(&g, start_coord))
    });
}

fn bench_furthest_points(c: &mut Criterion) {
    c.bench_function("furthest_points", |b| {
        let g = carved_350();
        let distances = Distances::for_grid(&g, GridCoordinate::new(250, 250)).unwrap();
        b.iter(|| distances.furthest_points_on_grid())
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    c.bench_function("shortest_path", |b| {
        let g = carved_350();
        let distances = Distances::for_grid(&g, GridCoordinate::new(250, 250)).unwrap();
        let end_coord = GridCoordinate::new(0, 0);
        b.iter(|| pathing::shortest_path(&g, &distances, end_coord))
    });
}

fn bench_longest_path(c: &mut Criterion) {
    c.bench_function("longest_path", |b| {
        let g = carved_350();
        b.iter(|| pathing::longest_path(&g))
    });
}

criterion_group!(benches,
    bench_distances,
    bench_furthest_points,
    bench_shortest_path,
    bench_longest_path
);
criterion_main!(benches);
