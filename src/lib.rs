//! Graphpoet: Weighted Word Graphs and Bridge-Word Poems
//!
//! A generic, mutable, weighted directed graph and a text generator built on
//! top of it.
//!
//! # Core Concepts
//!
//! - **WeightedGraph**: Directed graph over any hashable label, with strictly
//!   positive integer edge weights
//! - **GraphPoet**: Word-adjacency graph built from a corpus, used to insert
//!   bridge words into new text
//! - **Bridge word**: A word `m` with edges `w1 → m → w2`, ranked by the sum
//!   of both edge weights
//!
//! # Example
//!
//! ```
//! use graphpoet::GraphPoet;
//!
//! let poet = GraphPoet::from_lines(["Seek to explore strange new life and new civilizations"]);
//! assert_eq!(poet.poem("Seek to explore new life"), "Seek to explore strange new life");
//! ```

mod graph;
pub mod poet;

pub use graph::{EdgeRecord, GraphSnapshot, WeightedGraph};
pub use poet::{Bridge, GraphPoet, PoetError, PoetResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
