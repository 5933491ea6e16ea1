//! Bridge word selection over a word-adjacency graph
//!
//! A bridge between `from` and `to` is a vertex `m` with edges `from → m`
//! and `m → to`. Its score is the sum of those two edge weights. The best
//! bridge has the highest score; equal scores resolve to the
//! lexicographically smallest word, so the choice never depends on hash
//! iteration order.

use crate::graph::WeightedGraph;
use std::cmp::Ordering;

/// A chosen bridge word and its two-hop score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bridge<'g> {
    pub word: &'g str,
    pub score: u32,
}

impl Bridge<'_> {
    /// Ranking: higher score first, then smaller word
    fn rank(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.word.cmp(self.word))
    }
}

/// Find the best bridge from `from` to `to`, if any two-hop path exists
pub fn best_bridge<'g>(graph: &'g WeightedGraph<String>, from: &str, to: &str) -> Option<Bridge<'g>> {
    graph
        .outgoing(from)
        .filter_map(|(middle, first_hop)| {
            let second_hop = graph.weight(middle.as_str(), to);
            (second_hop > 0).then(|| Bridge {
                word: middle.as_str(),
                score: first_hop.saturating_add(second_hop),
            })
        })
        .max_by(Bridge::rank)
}
