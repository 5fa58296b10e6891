//! core small types

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Typed vertex identifier, 0-indexed and contiguous within a graph.
///
/// External-facing structures (canonical edges, ordering tables) use plain
/// 1-indexed labels instead; the boundary between the two lives in
/// [`crate::tables`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// Minimal numeric weight trait.
///
/// Tie detection needs exact equality, so `Ord` is required and float weights
/// are unsupported.
pub trait Weight:
    Copy + Ord + Hash + std::ops::Add<Output = Self> + Debug + Send + Sync + 'static
{
    fn zero() -> Self;
}

impl Weight for i32 {
    fn zero() -> Self {
        0
    }
}
impl Weight for i64 {
    fn zero() -> Self {
        0
    }
}

impl Weight for u32 {
    fn zero() -> Self {
        0
    }
}
impl Weight for u64 {
    fn zero() -> Self {
        0
    }
}
