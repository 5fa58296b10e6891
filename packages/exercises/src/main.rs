use spantree::{
    CanonicalEdge, NodeId, OrderingTable, WeightMatrix, build_ordering_tables,
    enumerate_kruskal_msts, enumerate_prim_msts, validate_sequence,
};

fn print_tables(label: &str, tables: &[OrderingTable<i32>]) {
    println!("{label}: {} distinct minimum edge set(s)", tables.len());
    for (i, table) in tables.iter().enumerate() {
        let set = table
            .edges
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  set {}: [{set}]", i + 1);
        for ordering in &table.orderings {
            let order = ordering
                .iter()
                .map(|e| format!("({}, {})", e.u, e.v))
                .collect::<Vec<_>>()
                .join(" -> ");
            println!("    order: {order}");
        }
    }
}

fn kruskal_example() {
    // 5-vertex graph with deliberate weight collisions.
    let matrix = WeightMatrix::from_edges(
        5,
        [
            (0, 1, 1),
            (0, 2, 1),
            (1, 2, 2),
            (1, 3, 2),
            (2, 4, 2),
            (3, 4, 3),
        ],
    )
    .unwrap();

    let trees = enumerate_kruskal_msts(&matrix);
    println!(
        "Kruskal: {} minimum spanning tree(s) of weight {}",
        trees.len(),
        trees[0].total_weight
    );
    print_tables("Kruskal tables", &build_ordering_tables(&trees));
    println!();
}

fn prim_example() {
    // Same graph, grown from each vertex in turn.
    let matrix = WeightMatrix::from_edges(
        5,
        [
            (0, 1, 1),
            (0, 2, 1),
            (1, 2, 2),
            (1, 3, 2),
            (2, 4, 2),
            (3, 4, 3),
        ],
    )
    .unwrap();

    for start in 0..matrix.order() {
        let trees = enumerate_prim_msts(&matrix, NodeId(start)).unwrap();
        print_tables(
            &format!("Prim from vertex {}", start + 1),
            &build_ordering_tables(&trees),
        );
    }
    println!();
}

fn validation_example() {
    // Vertices {1,2,3,4}: the unique MST weighs 7.
    let matrix =
        WeightMatrix::from_edges(4, [(0, 1, 2), (1, 2, 2), (2, 3, 3), (0, 2, 5)]).unwrap();
    let tables = build_ordering_tables(&enumerate_kruskal_msts(&matrix));

    let attempts: [(&str, Vec<CanonicalEdge<i32>>); 3] = [
        (
            "swapped inside the weight-2 block",
            vec![
                CanonicalEdge::new(2, 3, 2),
                CanonicalEdge::new(1, 2, 2),
                CanonicalEdge::new(3, 4, 3),
            ],
        ),
        (
            "weight-3 edge picked too early",
            vec![
                CanonicalEdge::new(3, 4, 3),
                CanonicalEdge::new(1, 2, 2),
                CanonicalEdge::new(2, 3, 2),
            ],
        ),
        (
            "not a minimum tree",
            vec![
                CanonicalEdge::new(1, 2, 2),
                CanonicalEdge::new(2, 3, 2),
                CanonicalEdge::new(1, 3, 5),
            ],
        ),
    ];

    for (label, picks) in attempts {
        let verdict = validate_sequence(&picks, &tables);
        println!(
            "{label}: set correct = {}, order correct = {}",
            verdict.set_correct, verdict.tie_aware_order_correct
        );
    }
}

fn main() {
    kruskal_example();
    prim_example();
    validation_example();
}
