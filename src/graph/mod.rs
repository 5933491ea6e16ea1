//! Core graph data structures

mod snapshot;
mod weighted;


pub use snapshot::{EdgeRecord, GraphSnapshot};
pub use weighted::WeightedGraph;
