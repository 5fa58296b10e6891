use criterion::{Criterion, criterion_group, criterion_main};
use spantree::{
    NodeId, WeightMatrix, build_ordering_tables, enumerate_kruskal_msts, enumerate_prim_msts,
};

/// 8 vertices, 13 edges, weights drawn from {1, 2, 3} so most decision
/// points carry ties — the worst case the engine is sized for.
fn tie_heavy_matrix() -> WeightMatrix<i32> {
    WeightMatrix::from_edges(
        8,
        [
            (0, 1, 1),
            (1, 2, 1),
            (2, 3, 1),
            (3, 4, 2),
            (4, 5, 2),
            (5, 6, 2),
            (6, 7, 1),
            (0, 7, 3),
            (1, 6, 2),
            (2, 5, 3),
            (3, 6, 1),
            (0, 4, 3),
            (1, 5, 1),
        ],
    )
    .unwrap()
}

fn bench_enumeration(c: &mut Criterion) {
    let matrix = tie_heavy_matrix();

    c.bench_function("kruskal_tie_heavy", |b| {
        b.iter(|| enumerate_kruskal_msts(&matrix));
    });

    c.bench_function("prim_tie_heavy", |b| {
        b.iter(|| enumerate_prim_msts(&matrix, NodeId(0)).unwrap());
    });

    let trees = enumerate_kruskal_msts(&matrix);
    c.bench_function("group_into_tables", |b| {
        b.iter(|| build_ordering_tables(&trees));
    });
}

criterion_group!(benches, bench_enumeration);
criterion_main!(benches);
