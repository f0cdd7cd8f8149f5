use criterion::{criterion_group, criterion_main, Criterion};
use dsatur::{
    test_graphs::{complete, crown, grid, petersen},
    Dsatur, TieBreak,
};

fn criterion_benchmark(c: &mut Criterion) {
    macro_rules! bench {
        ($name:ident, $tie_break:ident, $fixture:expr) => {
            c.bench_function(stringify!($name), |b| {
                let fixture = $fixture;
                let colorer = Dsatur::builder().tie_break(TieBreak::$tie_break).build();
                b.iter(|| colorer.run(&fixture.graph))
            });
        };
    }

    bench!(dsatur_petersen, SmallestVertex, petersen());
    bench!(dsatur_grid_10x10, SmallestVertex, grid(10, 10));
    bench!(dsatur_grid_30x30, SmallestVertex, grid(30, 30));
    bench!(dsatur_grid_30x30_largest, LargestVertex, grid(30, 30));
    bench!(dsatur_complete_50, SmallestVertex, complete(50));
    bench!(dsatur_crown_100, SmallestVertex, crown(100));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
