//! Dense symmetric adjacency matrix stored as a flat row-major Vec<W>.
//! `W::zero()` marks an absent edge, so edge weights must be strictly
//! positive. Symmetry and simplicity are the graph generator's contract;
//! the matrix does not re-validate them.

use serde::{Deserialize, Serialize};

use crate::core::{NodeId, Weight};
use crate::error::GraphError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightMatrix<W> {
    n: usize,
    data: Vec<W>,
}

impl<W: Weight> WeightMatrix<W> {
    /// Builds a matrix from row vectors. Every row must have `rows.len()`
    /// cells; a ragged input cannot be constructed at all.
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self, GraphError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != n {
                return Err(GraphError::NotSquare {
                    row,
                    len: cells.len(),
                    expected: n,
                });
            }
            data.extend(cells);
        }
        Ok(Self { n, data })
    }

    /// Builds a symmetric matrix of order `n` from undirected edge triples
    /// with 0-indexed endpoints. Both cells of each pair are written.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut matrix = Self {
            n,
            data: vec![W::zero(); n * n],
        };
        for (u, v, w) in edges {
            for vertex in [u, v] {
                if vertex >= n {
                    return Err(GraphError::VertexOutOfRange {
                        vertex: NodeId(vertex),
                        order: n,
                    });
                }
            }
            let i = matrix.idx(u, v);
            matrix.data[i] = w;
            let j = matrix.idx(v, u);
            matrix.data[j] = w;
        }
        Ok(matrix)
    }

    #[inline]
    fn idx(&self, r: usize, c: usize) -> usize {
        r * self.n + c
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.n
    }

    /// Weight of the edge between `u` and `v`, or `None` when the cell is
    /// zero (no edge).
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<W> {
        let w = self.data[self.idx(u.0, v.0)];
        (w != W::zero()).then_some(w)
    }

    pub fn row(&self, u: NodeId) -> &[W] {
        let start = u.0 * self.n;
        &self.data[start..start + self.n]
    }

    pub fn contains(&self, v: NodeId) -> bool {
        v.0 < self.n
    }
}
