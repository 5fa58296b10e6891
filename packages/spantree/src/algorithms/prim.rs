//! Exhaustive Prim enumeration from a fixed root: every growth sequence that
//! extends the frontier with a minimum-weight frontier edge at each step.

use crate::core::{NodeId, Weight};
use crate::edges::{Edge, extract_edges};
use crate::error::GraphError;
use crate::storage::WeightMatrix;
use crate::tables::SpanningTree;

/// Enumerates every minimum-weight spanning tree reachable by Prim's rule
/// from `start`, branching wherever several frontier edges tie at the
/// minimum. A disconnected graph yields `Ok` with an empty result; a start
/// vertex outside the graph is an error.
pub fn enumerate_prim_msts<W: Weight>(
    matrix: &WeightMatrix<W>,
    start: NodeId,
) -> Result<Vec<SpanningTree<W>>, GraphError> {
    let n = matrix.order();
    if !matrix.contains(start) {
        return Err(GraphError::VertexOutOfRange {
            vertex: start,
            order: n,
        });
    }

    let mut included = vec![false; n];
    included[start.0] = true;
    let mut search = PrimSearch {
        edges: extract_edges(matrix),
        included,
        target: n - 1,
        chosen: Vec::with_capacity(n - 1),
        found: Vec::new(),
    };
    search.explore();
    Ok(search.found)
}

struct PrimSearch<W> {
    edges: Vec<Edge<W>>,
    included: Vec<bool>,
    target: usize,
    chosen: Vec<Edge<W>>,
    found: Vec<SpanningTree<W>>,
}

impl<W: Weight> PrimSearch<W> {
    /// Minimum weight among edges with exactly one endpoint in the grown
    /// tree, or `None` when the frontier is empty.
    fn frontier_min(&self) -> Option<W> {
        self.edges
            .iter()
            .filter(|e| self.included[e.u.0] != self.included[e.v.0])
            .map(|e| e.weight)
            .min()
    }

    fn explore(&mut self) {
        if self.chosen.len() == self.target {
            let total_weight = self
                .chosen
                .iter()
                .fold(W::zero(), |acc, e| acc + e.weight);
            self.found.push(SpanningTree {
                edges: self.chosen.clone(),
                total_weight,
            });
            return;
        }

        // Empty frontier with the tree incomplete: the start's component is
        // exhausted, so the graph is disconnected.
        let Some(min_weight) = self.frontier_min() else {
            return;
        };

        for i in 0..self.edges.len() {
            let edge = self.edges[i];
            if edge.weight != min_weight || self.included[edge.u.0] == self.included[edge.v.0] {
                continue;
            }
            // Every chosen edge joins an included to an excluded vertex, so
            // no cycle check is needed.
            let grown = if self.included[edge.u.0] { edge.v } else { edge.u };
            self.included[grown.0] = true;
            self.chosen.push(edge);
            self.explore();
            self.chosen.pop();
            self.included[grown.0] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_mst_matches_from_any_start() {
        let matrix =
            WeightMatrix::from_edges(4, [(0, 1, 2), (1, 2, 2), (2, 3, 3), (0, 2, 5)]).unwrap();
        for start in 0..4 {
            let trees = enumerate_prim_msts(&matrix, NodeId(start)).unwrap();
            assert_eq!(trees.len(), 1, "start {start}");
            assert_eq!(trees[0].total_weight, 7);
        }
    }

    #[test]
    fn growth_order_depends_on_the_start_vertex() {
        // Path 1-0-2 with equal weights: from 0 either side may grow first,
        // from a leaf the order is forced.
        let matrix = WeightMatrix::from_edges(3, [(0, 1, 1), (0, 2, 1)]).unwrap();

        let from_center = enumerate_prim_msts(&matrix, NodeId(0)).unwrap();
        assert_eq!(from_center.len(), 2);

        let from_leaf = enumerate_prim_msts(&matrix, NodeId(1)).unwrap();
        assert_eq!(from_leaf.len(), 1);
    }

    #[test]
    fn frontier_rule_allows_descending_weights() {
        // Heavy edge first: from vertex 0 the only frontier edge weighs 5.
        let matrix = WeightMatrix::from_edges(3, [(0, 1, 5), (1, 2, 1)]).unwrap();
        let trees = enumerate_prim_msts(&matrix, NodeId(0)).unwrap();
        assert_eq!(trees.len(), 1);
        let weights: Vec<_> = trees[0].edges.iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![5, 1]);
    }

    #[test]
    fn disconnected_graph_has_no_spanning_tree() {
        let matrix = WeightMatrix::from_edges(4, [(0, 1, 1), (2, 3, 1)]).unwrap();
        assert!(enumerate_prim_msts(&matrix, NodeId(0)).unwrap().is_empty());
    }

    #[test]
    fn out_of_range_start_is_an_error() {
        let matrix = WeightMatrix::from_edges(2, [(0, 1, 1)]).unwrap();
        let err = enumerate_prim_msts(&matrix, NodeId(9)).unwrap_err();
        assert_eq!(
            err,
            GraphError::VertexOutOfRange {
                vertex: NodeId(9),
                order: 2
            }
        );
    }

    #[test]
    fn single_vertex_spans_with_no_edges() {
        let matrix = WeightMatrix::<i32>::from_rows(vec![vec![0]]).unwrap();
        let trees = enumerate_prim_msts(&matrix, NodeId(0)).unwrap();
        assert_eq!(trees.len(), 1);
        assert!(trees[0].edges.is_empty());
    }
}
