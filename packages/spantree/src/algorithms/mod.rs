pub mod kruskal;
pub mod prim;

pub use kruskal::*;
pub use prim::*;
