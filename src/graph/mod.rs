pub mod traits;
pub mod matrix;
pub mod config;

pub use traits::{EdgeWeight, Graph};
pub use matrix::MatrixGraph;
pub use config::{EdgeConfig, GraphConfig, GraphLimits, NodeRef};
