//! Grading of a player's ordered edge picks against the enumerated ordering
//! tables: set membership first, then tie-aware order equality.

use serde::{Deserialize, Serialize};

use crate::core::Weight;
use crate::tables::{CanonicalEdge, OrderingTable};

/// Verdict for one validation call. Pure function of its inputs; scoring and
/// persistence happen downstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// The picks form exactly the edge set of some enumerated MST.
    pub set_correct: bool,
    /// Index of the matched table in the input slice, when one exists.
    pub matched_table: Option<usize>,
    /// The pick order also matches some permitted ordering, up to
    /// permutation inside equal-weight blocks.
    pub tie_aware_order_correct: bool,
}

impl ValidationResult {
    fn failure() -> Self {
        Self {
            set_correct: false,
            matched_table: None,
            tie_aware_order_correct: false,
        }
    }
}

/// Checks the player's sequence against the tables. An edge that appears in
/// no table (including one absent from the graph) simply fails the set
/// check. Tables are exclusive by construction, so the first set match is
/// the only one.
pub fn validate_sequence<W: Weight>(
    player: &[CanonicalEdge<W>],
    tables: &[OrderingTable<W>],
) -> ValidationResult {
    let picks: Vec<CanonicalEdge<W>> = player
        .iter()
        .map(|e| CanonicalEdge::new(e.u, e.v, e.weight))
        .collect();

    let mut set = picks.clone();
    set.sort();
    let Some(matched) = tables.iter().position(|table| table.edges == set) else {
        return ValidationResult::failure();
    };

    let order_ok = tables[matched]
        .orderings
        .iter()
        .any(|ordering| tie_aware_equal(&picks, ordering));

    ValidationResult {
        set_correct: true,
        matched_table: Some(matched),
        tie_aware_order_correct: order_ok,
    }
}

/// Maximal runs of consecutive equal weight, in the sequence's given order.
fn weight_blocks<W: Weight>(seq: &[CanonicalEdge<W>]) -> Vec<(W, Vec<CanonicalEdge<W>>)> {
    let mut blocks: Vec<(W, Vec<CanonicalEdge<W>>)> = Vec::new();
    for &edge in seq {
        match blocks.last_mut() {
            Some((weight, members)) if *weight == edge.weight => members.push(edge),
            _ => blocks.push((edge.weight, vec![edge])),
        }
    }
    blocks
}

/// Two sequences are tie-aware equal when their weight blocks line up: same
/// block count, equal weight per block, identical edge set per block. Order
/// inside a block is free; an edge placed across a weight boundary changes
/// the block structure and fails. Two empty sequences are trivially equal.
fn tie_aware_equal<W: Weight>(player: &[CanonicalEdge<W>], official: &[CanonicalEdge<W>]) -> bool {
    if player.len() != official.len() {
        return false;
    }

    let player_blocks = weight_blocks(player);
    let official_blocks = weight_blocks(official);
    if player_blocks.len() != official_blocks.len() {
        return false;
    }

    player_blocks.into_iter().zip(official_blocks).all(
        |((player_weight, mut player_members), (official_weight, mut official_members))| {
            player_members.sort();
            official_members.sort();
            player_weight == official_weight && player_members == official_members
        },
    )
}
