//! Edge extraction from the adjacency matrix.

use serde::{Deserialize, Serialize};

use crate::core::{NodeId, Weight};
use crate::storage::WeightMatrix;

/// Internal undirected edge. Extraction walks the upper triangle, so `u < v`
/// always holds here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<W> {
    pub u: NodeId,
    pub v: NodeId,
    pub weight: W,
}

/// Emits one edge per nonzero upper-triangle cell, row-major by `u` then `v`.
pub fn extract_edges<W: Weight>(matrix: &WeightMatrix<W>) -> Vec<Edge<W>> {
    let n = matrix.order();
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if let Some(weight) = matrix.weight(NodeId(u), NodeId(v)) {
                edges.push(Edge {
                    u: NodeId(u),
                    v: NodeId(v),
                    weight,
                });
            }
        }
    }
    edges
}

/// Ascending weight order for Kruskal. The sort is stable, so tied edges keep
/// the row-major extraction order and branch exploration is reproducible.
pub fn sorted_by_weight<W: Weight>(mut edges: Vec<Edge<W>>) -> Vec<Edge<W>> {
    edges.sort_by_key(|e| e.weight);
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(edge: &Edge<i32>) -> (usize, usize, i32) {
        (edge.u.0, edge.v.0, edge.weight)
    }

    #[test]
    fn extraction_is_row_major_over_the_upper_triangle() {
        let matrix = WeightMatrix::from_rows(vec![
            vec![0, 2, 0, 5],
            vec![2, 0, 2, 0],
            vec![0, 2, 0, 3],
            vec![5, 0, 3, 0],
        ])
        .unwrap();

        let edges = extract_edges(&matrix);
        let triples: Vec<_> = edges.iter().map(triple).collect();
        assert_eq!(triples, vec![(0, 1, 2), (0, 3, 5), (1, 2, 2), (2, 3, 3)]);
    }

    #[test]
    fn weight_sort_is_stable_across_ties() {
        let matrix = WeightMatrix::from_rows(vec![
            vec![0, 2, 0, 5],
            vec![2, 0, 2, 0],
            vec![0, 2, 0, 3],
            vec![5, 0, 3, 0],
        ])
        .unwrap();

        let sorted = sorted_by_weight(extract_edges(&matrix));
        let triples: Vec<_> = sorted.iter().map(triple).collect();
        // The two weight-2 edges keep their extraction order.
        assert_eq!(triples, vec![(0, 1, 2), (1, 2, 2), (2, 3, 3), (0, 3, 5)]);
    }

    #[test]
    fn empty_matrix_has_no_edges() {
        let matrix = WeightMatrix::<i32>::from_rows(vec![]).unwrap();
        assert!(extract_edges(&matrix).is_empty());
    }
}
