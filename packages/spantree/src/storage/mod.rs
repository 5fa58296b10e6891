pub mod weight_matrix;

pub use weight_matrix::*;
