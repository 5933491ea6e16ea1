//! Bridge-word poem generation
//!
//! A [`GraphPoet`] reads a corpus into a word-adjacency graph, then rewrites
//! input text by inserting, between each pair of adjacent words, the word
//! that most strongly connects them in the corpus.

mod bridge;
mod engine;
pub mod tokenize;

pub use bridge::Bridge;
pub use engine::{GraphPoet, PoetError, PoetResult};
