// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Harmonic progression graphs.
//!
//! A progression graph is a digraph over scale degrees: an edge from one
//! degree to another means the second can follow the first. The built-in
//! major-key chart follows the standard functional-harmony chord chart.
//! Walks over the graph pick uniformly among outgoing edges.

use std::collections::HashMap;

use rand::Rng;

use crate::quality::NashvilleNumber;

/// A digraph of allowed chord movements over scale degrees
#[derive(Debug, Clone, Default)]
pub struct ChordProgression {
    vertices: Vec<NashvilleNumber>,
    edges: HashMap<NashvilleNumber, Vec<NashvilleNumber>>,
}

impl ChordProgression {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// The major-key progression chart
    pub fn major() -> Self {
        let mut graph = ChordProgression::new();

        for number in [
            NashvilleNumber::ONE,
            NashvilleNumber::TWO,
            NashvilleNumber::THREE,
            NashvilleNumber::FOUR,
            NashvilleNumber::FIVE,
            NashvilleNumber::SIX,
            NashvilleNumber::SEVEN,
        ] {
            graph.add_vertex(number);
        }

        graph.add_edge(NashvilleNumber::ONE, NashvilleNumber::ONE);
        graph.add_edge(NashvilleNumber::ONE, NashvilleNumber::TWO);
        graph.add_edge(NashvilleNumber::ONE, NashvilleNumber::THREE);
        graph.add_edge(NashvilleNumber::ONE, NashvilleNumber::FOUR);
        graph.add_edge(NashvilleNumber::ONE, NashvilleNumber::FIVE);
        graph.add_edge(NashvilleNumber::ONE, NashvilleNumber::SIX);

        graph.add_edge(NashvilleNumber::TWO, NashvilleNumber::FIVE);
        graph.add_edge(NashvilleNumber::TWO, NashvilleNumber::SEVEN);

        graph.add_edge(NashvilleNumber::THREE, NashvilleNumber::FOUR);
        graph.add_edge(NashvilleNumber::THREE, NashvilleNumber::SIX);

        graph.add_edge(NashvilleNumber::FOUR, NashvilleNumber::ONE);
        graph.add_edge(NashvilleNumber::FOUR, NashvilleNumber::TWO);
        graph.add_edge(NashvilleNumber::FOUR, NashvilleNumber::FIVE);
        graph.add_edge(NashvilleNumber::FOUR, NashvilleNumber::SEVEN);

        graph.add_edge(NashvilleNumber::FIVE, NashvilleNumber::ONE);
        graph.add_edge(NashvilleNumber::FIVE, NashvilleNumber::SIX);
        graph.add_edge(NashvilleNumber::FIVE, NashvilleNumber::SEVEN);

        graph.add_edge(NashvilleNumber::SIX, NashvilleNumber::TWO);
        graph.add_edge(NashvilleNumber::SIX, NashvilleNumber::FOUR);
        graph.add_edge(NashvilleNumber::SIX, NashvilleNumber::FIVE);

        graph.add_edge(NashvilleNumber::SEVEN, NashvilleNumber::ONE);
        graph.add_edge(NashvilleNumber::SEVEN, NashvilleNumber::THREE);

        graph
    }

    /// Add a vertex; re-adding an existing vertex is a no-op
    pub fn add_vertex(&mut self, vertex: NashvilleNumber) {
        if !self.vertices.contains(&vertex) {
            self.vertices.push(vertex);
            self.edges.entry(vertex).or_default();
        }
    }

    /// Add a directed edge, inserting missing endpoints
    pub fn add_edge(&mut self, from: NashvilleNumber, to: NashvilleNumber) {
        self.add_vertex(from);
        self.add_vertex(to);
        let targets = self.edges.entry(from).or_default();
        if !targets.contains(&to) {
            targets.push(to);
        }
    }

    /// Get the vertices in insertion order
    pub fn vertices(&self) -> &[NashvilleNumber] {
        &self.vertices
    }

    /// Outgoing edges from a vertex, in insertion order
    pub fn targets(&self, from: NashvilleNumber) -> &[NashvilleNumber] {
        self.edges.get(&from).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the vertex is in the graph
    pub fn contains(&self, vertex: NashvilleNumber) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Walk the graph from a start vertex, picking uniformly among
    /// outgoing edges. The walk stops early at a vertex with no outgoing
    /// edges; the start vertex counts toward the length.
    pub fn random_walk<R: Rng>(
        &self,
        start: NashvilleNumber,
        length: usize,
        rng: &mut R,
    ) -> Vec<NashvilleNumber> {
        let mut walk = Vec::with_capacity(length);
        if length == 0 || !self.contains(start) {
            return walk;
        }

        let mut current = start;
        walk.push(current);

        while walk.len() < length {
            let targets = self.targets(current);
            if targets.is_empty() {
                break;
            }
            current = targets[rng.gen_range(0..targets.len())];
            walk.push(current);
        }

        walk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_major_chart_edges() {
        let graph = ChordProgression::major();
        assert_eq!(graph.vertices().len(), 7);

        assert_eq!(
            graph.targets(NashvilleNumber::ONE),
            &[
                NashvilleNumber::ONE,
                NashvilleNumber::TWO,
                NashvilleNumber::THREE,
                NashvilleNumber::FOUR,
                NashvilleNumber::FIVE,
                NashvilleNumber::SIX,
            ]
        );
        assert_eq!(
            graph.targets(NashvilleNumber::SEVEN),
            &[NashvilleNumber::ONE, NashvilleNumber::THREE]
        );
    }

    #[test]
    fn test_add_edge_inserts_vertices() {
        let mut graph = ChordProgression::new();
        graph.add_edge(NashvilleNumber::ONE, NashvilleNumber::FOUR);
        assert!(graph.contains(NashvilleNumber::ONE));
        assert!(graph.contains(NashvilleNumber::FOUR));
        assert_eq!(graph.targets(NashvilleNumber::FOUR), &[]);

        // Duplicate edges collapse
        graph.add_edge(NashvilleNumber::ONE, NashvilleNumber::FOUR);
        assert_eq!(graph.targets(NashvilleNumber::ONE).len(), 1);
    }

    #[test]
    fn test_random_walk_follows_edges() {
        let graph = ChordProgression::major();
        let mut rng = StdRng::seed_from_u64(42);
        let walk = graph.random_walk(NashvilleNumber::ONE, 16, &mut rng);

        assert_eq!(walk.len(), 16);
        assert_eq!(walk[0], NashvilleNumber::ONE);
        for pair in walk.windows(2) {
            assert!(
                graph.targets(pair[0]).contains(&pair[1]),
                "{} -> {} is not an edge",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_random_walk_stops_at_dead_end() {
        let mut graph = ChordProgression::new();
        graph.add_edge(NashvilleNumber::ONE, NashvilleNumber::FIVE);
        let mut rng = StdRng::seed_from_u64(7);
        let walk = graph.random_walk(NashvilleNumber::ONE, 8, &mut rng);
        assert_eq!(walk, [NashvilleNumber::ONE, NashvilleNumber::FIVE]);
    }

    #[test]
    fn test_random_walk_from_unknown_vertex() {
        let graph = ChordProgression::major();
        let mut rng = StdRng::seed_from_u64(0);
        let walk = graph.random_walk(NashvilleNumber::FLAT_THREE, 4, &mut rng);
        assert!(walk.is_empty());
    }
}
