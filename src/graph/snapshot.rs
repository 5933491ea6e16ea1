//! Ordered, serializable view of a WeightedGraph

use super::weighted::WeightedGraph;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// A single weighted edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord<L> {
    pub source: L,
    pub target: L,
    pub weight: u32,
}

/// Sorted vertex and edge lists of a graph
///
/// Produced by [`WeightedGraph::snapshot`]. Vertices are sorted, edges are
/// sorted by `(source, target)`, so two equal graphs always produce equal
/// snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphSnapshot<L> {
    pub vertices: Vec<L>,
    pub edges: Vec<EdgeRecord<L>>,
}

impl<L: Eq + Hash + Ord + Clone> WeightedGraph<L> {
    /// Take an ordered snapshot of the graph
    pub fn snapshot(&self) -> GraphSnapshot<L> {
        let mut vertices: Vec<L> = self.vertices().into_iter().collect();
        vertices.sort();

        let mut edges: Vec<EdgeRecord<L>> = self
            .edges()
            .map(|(source, target, weight)| EdgeRecord {
                source: source.clone(),
                target: target.clone(),
                weight,
            })
            .collect();
        edges.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));

        GraphSnapshot { vertices, edges }
    }
}

impl<L: Eq + Hash + Clone> WeightedGraph<L> {
    /// Rebuild a graph from a snapshot
    ///
    /// Records are applied in order through [`set_edge`](Self::set_edge), so a
    /// later record for the same pair replaces an earlier one and a zero
    /// weight leaves no edge behind.
    pub fn from_snapshot(snapshot: GraphSnapshot<L>) -> Self {
        let mut graph = Self::new();
        for vertex in snapshot.vertices {
            graph.add_vertex(vertex);
        }
        for edge in snapshot.edges {
            graph.set_edge(edge.source, edge.target, edge.weight);
        }
        graph
    }
}

impl<L: Eq + Hash + Clone> From<GraphSnapshot<L>> for WeightedGraph<L> {
    fn from(snapshot: GraphSnapshot<L>) -> Self {
        Self::from_snapshot(snapshot)
    }
}

impl<L: fmt::Display> fmt::Display for GraphSnapshot<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertices: [")?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", vertex)?;
        }
        writeln!(f, "]")?;
        writeln!(f, "Edges:")?;
        for edge in &self.edges {
            writeln!(f, "{} -> {} ({})", edge.source, edge.target, edge.weight)?;
        }
        Ok(())
    }
}

impl<L: Eq + Hash + Ord + Clone + fmt::Display> fmt::Display for WeightedGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}
