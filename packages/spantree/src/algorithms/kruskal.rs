//! Exhaustive Kruskal enumeration: every spanning tree at the global minimum
//! weight, found by include/exclude backtracking over the weight-sorted edge
//! list with in-place union-find rollback.

use crate::core::Weight;
use crate::edges::{Edge, extract_edges, sorted_by_weight};
use crate::storage::WeightMatrix;
use crate::tables::SpanningTree;
use crate::union_find::UnionFind;

/// Enumerates every minimum-weight spanning tree reachable by Kruskal's rule:
/// edges considered in ascending weight order, any inclusion avoiding a
/// cycle. A disconnected graph yields an empty result.
pub fn enumerate_kruskal_msts<W: Weight>(matrix: &WeightMatrix<W>) -> Vec<SpanningTree<W>> {
    let n = matrix.order();
    if n == 0 {
        return Vec::new();
    }

    let edges = sorted_by_weight(extract_edges(matrix));
    let mut search = KruskalSearch {
        edges: &edges,
        target: n - 1,
        uf: UnionFind::new(n),
        chosen: Vec::with_capacity(n - 1),
        best: None,
        found: Vec::new(),
    };
    search.explore(0, W::zero());
    search.found
}

/// Accumulator state threaded through the recursion, so sibling branches
/// share nothing beyond the rollback-tracked union-find.
struct KruskalSearch<'a, W> {
    edges: &'a [Edge<W>],
    target: usize,
    uf: UnionFind,
    chosen: Vec<Edge<W>>,
    best: Option<W>,
    found: Vec<SpanningTree<W>>,
}

impl<W: Weight> KruskalSearch<'_, W> {
    fn explore(&mut self, idx: usize, sum: W) {
        if self.chosen.len() == self.target {
            self.record(sum);
            return;
        }
        // Dead end: the remaining suffix cannot complete the tree.
        if self.edges.len() - idx < self.target - self.chosen.len() {
            return;
        }

        let edge = self.edges[idx];
        let mark = self.uf.mark();
        if self.uf.union(edge.u.0, edge.v.0) {
            let extended = sum + edge.weight;
            // A partial sum above the best complete sum can never tie it.
            if self.best.map_or(true, |best| extended <= best) {
                self.chosen.push(edge);
                self.explore(idx + 1, extended);
                self.chosen.pop();
            }
        }
        self.uf.undo_to(mark);

        // Skipping a cheaper edge can be what keeps an equal-weight
        // alternative available, so the exclude branch is always explored.
        self.explore(idx + 1, sum);
    }

    fn record(&mut self, sum: W) {
        debug_assert!(
            self.chosen.windows(2).all(|w| w[0].weight <= w[1].weight),
            "recorded sequences follow the sorted edge order"
        );
        match self.best {
            Some(best) if sum > best => return,
            Some(best) if sum < best => {
                self.found.clear();
                self.best = Some(sum);
            }
            None => self.best = Some(sum),
            Some(_) => {}
        }
        self.found.push(SpanningTree {
            edges: self.chosen.clone(),
            total_weight: sum,
        });
    }
}
