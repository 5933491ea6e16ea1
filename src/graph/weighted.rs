//! WeightedGraph: a mutable directed graph with positive integer weights

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::num::NonZeroU32;

/// Neighbors of one vertex, paired with the weight of the connecting edge
type Adjacency<L> = HashMap<L, NonZeroU32>;

/// A directed graph over labels of type `L` with positive integer edge weights
///
/// Every edge endpoint is a vertex, at most one edge exists per ordered
/// `(source, target)` pair, and every stored weight is strictly positive.
/// Setting an edge weight to zero removes the edge; removing a vertex removes
/// every edge incident on it.
///
/// Edges are indexed in both directions so that [`targets_of`](Self::targets_of)
/// and [`sources_of`](Self::sources_of) are proportional to the neighborhood
/// size rather than the edge count.
#[derive(Debug, Clone)]
pub struct WeightedGraph<L> {
    vertices: HashSet<L>,
    /// source → target → weight
    outgoing: HashMap<L, Adjacency<L>>,
    /// target → source → weight (mirror of `outgoing`)
    incoming: HashMap<L, Adjacency<L>>,
}

impl<L> Default for WeightedGraph<L> {
    fn default() -> Self {
        Self {
            vertices: HashSet::new(),
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        }
    }
}

impl<L: Eq + Hash> PartialEq for WeightedGraph<L> {
    fn eq(&self, other: &Self) -> bool {
        // `incoming` is derived from `outgoing`, and empty adjacencies are never retained
        self.vertices == other.vertices && self.outgoing == other.outgoing
    }
}

impl<L: Eq + Hash> Eq for WeightedGraph<L> {}

impl<L: Eq + Hash + Clone> WeightedGraph<L> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex
    ///
    /// Returns `true` if the label was not already present.
    pub fn add_vertex(&mut self, label: L) -> bool {
        self.vertices.insert(label)
    }

    /// Set the weight of the edge `source → target`, returning the previous weight
    ///
    /// A weight of zero removes the edge (the endpoints stay). A positive
    /// weight inserts or replaces the edge, adding either endpoint that is not
    /// yet a vertex. The returned weight is 0 when no edge existed before.
    pub fn set_edge(&mut self, source: L, target: L, weight: u32) -> u32 {
        let previous = match NonZeroU32::new(weight) {
            Some(weight) => self.insert_edge(source, target, weight),
            None => {
                let previous = self.remove_edge(&source, &target);
                self.check_edge(&source, &target);
                previous
            }
        };
        previous.map_or(0, NonZeroU32::get)
    }

    /// Remove a vertex and every edge where it is the source or the target
    ///
    /// Returns `false` (and changes nothing) if the vertex was absent.
    pub fn remove_vertex<Q>(&mut self, label: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        if !self.vertices.remove(label) {
            return false;
        }

        if let Some(targets) = self.outgoing.remove(label) {
            for target in targets.keys() {
                detach::<L, L, Q>(&mut self.incoming, target, label);
                assert_detached::<L, L, Q>(&self.incoming, target, label);
            }
        }
        if let Some(sources) = self.incoming.remove(label) {
            for source in sources.keys() {
                detach::<L, L, Q>(&mut self.outgoing, source, label);
                assert_detached::<L, L, Q>(&self.outgoing, source, label);
            }
        }

        debug_assert!(
            !self.outgoing.contains_key(label) && !self.incoming.contains_key(label),
            "removed vertex still indexed"
        );
        true
    }

    fn insert_edge(&mut self, source: L, target: L, weight: NonZeroU32) -> Option<NonZeroU32> {
        if !self.vertices.contains(&source) {
            self.vertices.insert(source.clone());
        }
        if !self.vertices.contains(&target) {
            self.vertices.insert(target.clone());
        }

        #[cfg(debug_assertions)]
        let touched = (source.clone(), target.clone());

        self.incoming
            .entry(target.clone())
            .or_default()
            .insert(source.clone(), weight);
        let previous = self.outgoing.entry(source).or_default().insert(target, weight);

        #[cfg(debug_assertions)]
        self.check_edge(&touched.0, &touched.1);
        previous
    }

    fn remove_edge(&mut self, source: &L, target: &L) -> Option<NonZeroU32> {
        let previous = detach(&mut self.outgoing, source, target)?;
        detach(&mut self.incoming, target, source);
        Some(previous)
    }

    /// Snapshot of the vertex set
    ///
    /// The returned set is owned; later mutations of the graph do not affect it.
    pub fn vertices(&self) -> HashSet<L> {
        self.vertices.clone()
    }

    /// Every vertex with an edge into `target`, paired with that edge's weight
    pub fn sources_of<Q>(&self, target: &Q) -> HashMap<L, u32>
    where
        L: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.incoming(target)
            .map(|(source, weight)| (source.clone(), weight))
            .collect()
    }

    /// Every vertex reached by one edge out of `source`, paired with that edge's weight
    pub fn targets_of<Q>(&self, source: &Q) -> HashMap<L, u32>
    where
        L: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.outgoing(source)
            .map(|(target, weight)| (target.clone(), weight))
            .collect()
    }
}

impl<L: Eq + Hash> WeightedGraph<L> {
    /// Check if a vertex exists
    pub fn contains_vertex<Q>(&self, label: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.vertices.contains(label)
    }

    /// Weight of the edge `source → target`, or 0 if there is none
    pub fn weight<Q>(&self, source: &Q, target: &Q) -> u32
    where
        L: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.outgoing
            .get(source)
            .and_then(|targets| targets.get(target))
            .map_or(0, |weight| weight.get())
    }

    /// Borrowing view of the edges leaving `source`
    pub fn outgoing<'a, Q>(&'a self, source: &Q) -> impl Iterator<Item = (&'a L, u32)> + 'a
    where
        L: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.outgoing
            .get(source)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(target, weight)| (target, weight.get())))
    }

    /// Borrowing view of the edges entering `target`
    pub fn incoming<'a, Q>(&'a self, target: &Q) -> impl Iterator<Item = (&'a L, u32)> + 'a
    where
        L: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.incoming
            .get(target)
            .into_iter()
            .flat_map(|sources| sources.iter().map(|(source, weight)| (source, weight.get())))
    }

    /// Iterate over every edge as `(source, target, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (&L, &L, u32)> {
        self.outgoing.iter().flat_map(|(source, targets)| {
            targets
                .iter()
                .map(move |(target, weight)| (source, target, weight.get()))
        })
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of edges
    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(HashMap::len).sum()
    }

    /// True if the graph has no vertices (and therefore no edges)
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Assert the invariant around one `source → target` pair
    ///
    /// Both index directions agree on the edge, a present edge joins two
    /// vertices, and neither endpoint keeps an empty adjacency. Constant time,
    /// so it can run after every mutation in debug builds.
    fn check_edge(&self, source: &L, target: &L) {
        let forward = self.outgoing.get(source);
        let backward = self.incoming.get(target);
        debug_assert_eq!(
            forward.and_then(|targets| targets.get(target)),
            backward.and_then(|sources| sources.get(source)),
            "incoming index out of sync"
        );
        debug_assert!(
            forward.map_or(true, |targets| !targets.is_empty())
                && backward.map_or(true, |sources| !sources.is_empty()),
            "empty adjacency retained"
        );
        debug_assert!(
            forward.map_or(true, |targets| !targets.contains_key(target))
                || (self.vertices.contains(source) && self.vertices.contains(target)),
            "edge endpoint is not a vertex"
        );
    }

    /// Assert the full representation invariant by sweeping every edge
    #[cfg(test)]
    pub(crate) fn check_rep(&self) {
        for (source, targets) in &self.outgoing {
            assert!(!targets.is_empty(), "empty adjacency retained");
            assert!(self.vertices.contains(source), "edge source is not a vertex");
            for (target, weight) in targets {
                assert!(self.vertices.contains(target), "edge target is not a vertex");
                assert_eq!(
                    self.incoming.get(target).and_then(|sources| sources.get(source)),
                    Some(weight),
                    "incoming index out of sync"
                );
            }
        }
        assert!(
            self.incoming.values().all(|sources| !sources.is_empty()),
            "empty adjacency retained"
        );
        let mirrored: usize = self.incoming.values().map(HashMap::len).sum();
        assert_eq!(mirrored, self.edge_count(), "incoming index out of sync");
    }
}

/// Remove `to` from the adjacency of `from`, dropping the adjacency once it is empty
fn detach<L, A, B>(index: &mut HashMap<L, Adjacency<L>>, from: &A, to: &B) -> Option<NonZeroU32>
where
    L: Eq + Hash + Borrow<A> + Borrow<B>,
    A: Eq + Hash + ?Sized,
    B: Eq + Hash + ?Sized,
{
    let adjacency = index.get_mut(from)?;
    let weight = adjacency.remove(to);
    if adjacency.is_empty() {
        index.remove(from);
    }
    weight
}

/// Assert that `from` no longer lists `to` and kept no empty adjacency
fn assert_detached<L, A, B>(index: &HashMap<L, Adjacency<L>>, from: &A, to: &B)
where
    L: Eq + Hash + Borrow<A> + Borrow<B>,
    A: Eq + Hash + ?Sized,
    B: Eq + Hash + ?Sized,
{
    if let Some(adjacency) = index.get(from) {
        debug_assert!(!adjacency.is_empty(), "empty adjacency retained");
        debug_assert!(!adjacency.contains_key(to), "edge to removed vertex retained");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        let graph: WeightedGraph<String> = WeightedGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_incoming_mirrors_outgoing() {
        let mut graph = WeightedGraph::new();
        graph.set_edge("a", "b", 2);
        graph.set_edge("c", "b", 5);

        let mut sources: Vec<_> = graph.incoming("b").collect();
        sources.sort();
        assert_eq!(sources, vec![(&"a", 2), (&"c", 5)]);
        assert_eq!(graph.outgoing("b").count(), 0);
    }

    #[test]
    fn test_removing_last_edge_drops_adjacency() {
        let mut graph = WeightedGraph::new();
        graph.set_edge("a", "b", 1);
        graph.set_edge("a", "b", 0);

        assert!(graph.outgoing.is_empty());
        assert!(graph.incoming.is_empty());
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_borrowed_lookup() {
        let mut graph: WeightedGraph<String> = WeightedGraph::new();
        graph.set_edge("seek".to_string(), "to".to_string(), 3);

        assert!(graph.contains_vertex("seek"));
        assert_eq!(graph.weight("seek", "to"), 3);
        assert_eq!(graph.weight("to", "seek"), 0);
        assert!(graph.remove_vertex("to"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_graphs_with_same_edges_are_equal() {
        let mut left = WeightedGraph::new();
        left.set_edge(1, 2, 4);
        left.set_edge(2, 3, 1);

        let mut right = WeightedGraph::new();
        right.set_edge(2, 3, 1);
        right.set_edge(1, 2, 9);
        assert_ne!(left, right);

        right.set_edge(1, 2, 4);
        assert_eq!(left, right);
    }
}
