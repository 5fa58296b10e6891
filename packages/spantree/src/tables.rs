//! Canonical edges, enumerated spanning trees, and the grouping of raw trees
//! into ordering tables, one table per distinct minimum-weight edge set.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Weight;
use crate::edges::Edge;

/// External edge form: 1-indexed vertices with the lower label first, so two
/// picks of the same undirected edge compare equal regardless of click order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalEdge<W> {
    pub u: usize,
    pub v: usize,
    pub weight: W,
}

impl<W: Weight> CanonicalEdge<W> {
    /// Canonicalizes a possibly-swapped 1-indexed pair.
    pub fn new(a: usize, b: usize, weight: W) -> Self {
        if a <= b {
            Self { u: a, v: b, weight }
        } else {
            Self { u: b, v: a, weight }
        }
    }

    pub(crate) fn from_internal(edge: &Edge<W>) -> Self {
        Self::new(edge.u.0 + 1, edge.v.0 + 1, edge.weight)
    }
}

impl<W: Weight + Display> Display for CanonicalEdge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) : {}", self.u, self.v, self.weight)
    }
}

/// One enumerated spanning tree: edges in the order the governing algorithm
/// chose them, plus the (minimum) total weight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree<W> {
    pub edges: Vec<Edge<W>>,
    pub total_weight: W,
}

/// A minimum-weight edge set together with every linear order in which the
/// governing algorithm could have produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingTable<W> {
    /// Representative edge set, canonically sorted.
    pub edges: Vec<CanonicalEdge<W>>,
    /// Every valid arrangement of `edges`, as enumerated.
    pub orderings: Vec<Vec<CanonicalEdge<W>>>,
}

/// Groups raw enumerated trees by canonical edge set. Tables come out in
/// first-discovery order, and every input tree lands in exactly one table's
/// `orderings`.
pub fn build_ordering_tables<W: Weight>(trees: &[SpanningTree<W>]) -> Vec<OrderingTable<W>> {
    let mut groups: IndexMap<Vec<CanonicalEdge<W>>, Vec<Vec<CanonicalEdge<W>>>> = IndexMap::new();

    for tree in trees {
        let ordering: Vec<CanonicalEdge<W>> =
            tree.edges.iter().map(CanonicalEdge::from_internal).collect();
        let mut set = ordering.clone();
        set.sort();
        groups.entry(set).or_default().push(ordering);
    }

    groups
        .into_iter()
        .map(|(edges, orderings)| OrderingTable { edges, orderings })
        .collect()
}
