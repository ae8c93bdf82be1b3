//! Roadmap graph: nodes, edges, connectivity, and path queries.
//!
//! Purpose
//! - Own the undirected graph built by roadmap learning and the start/goal stitching.
//! - Answer "same connected component" and unweighted shortest-path queries on demand;
//!   component membership is never cached.
//!
//! Invariants
//! - Node ids are unique; every edge joins two existing nodes; no self-loops or parallel edges.
//! - Node insertion order is the petgraph index order and is the tie-break for neighbor search.

mod neighbors;
mod types;

pub use neighbors::{Neighbor, NeighborSearch};
pub use types::{NodeId, RoadmapNode};

use petgraph::algo::{astar, connected_components, has_path_connecting};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rstar::primitives::GeomWithData;
use rstar::RTree;
use std::collections::HashMap;
use std::fmt;

use crate::space::Configuration;

type IndexedPoint = GeomWithData<[f64; 2], NodeIndex>;

/// Undirected roadmap with an optional planar R-tree for neighbor lookups.
pub struct Roadmap {
    graph: UnGraph<RoadmapNode, ()>,
    ids: HashMap<NodeId, NodeIndex>,
    search: NeighborSearch,
    rtree: RTree<IndexedPoint>,
    /// False once any non-planar node is inserted; the R-tree is bypassed from then on.
    planar: bool,
}

impl fmt::Debug for Roadmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Roadmap")
            .field("nodes", &self.graph.node_count())
            .field("edges", &self.graph.edge_count())
            .field("search", &self.search)
            .finish()
    }
}

impl Default for Roadmap {
    fn default() -> Self {
        Self::new(NeighborSearch::default())
    }
}

impl Roadmap {
    pub fn new(search: NeighborSearch) -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            ids: HashMap::new(),
            search,
            rtree: RTree::new(),
            planar: true,
        }
    }

    /// Drop every node and edge.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.ids.clear();
        self.rtree = RTree::new();
        self.planar = true;
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains_key(&id)
    }

    /// Insert a node. Returns `false` (and changes nothing) if the id already exists.
    pub fn add_node(&mut self, id: NodeId, position: Configuration) -> bool {
        self.add_node_with_tag(id, position, None)
    }

    /// Insert a node carrying display metadata (e.g. a color name).
    pub fn add_node_with_tag(
        &mut self,
        id: NodeId,
        position: Configuration,
        tag: Option<String>,
    ) -> bool {
        if self.ids.contains_key(&id) {
            return false;
        }
        let planar_point =
            (position.dim() == 2).then(|| [position.coords()[0], position.coords()[1]]);
        let idx = self.graph.add_node(RoadmapNode { id, position, tag });
        self.ids.insert(id, idx);
        match planar_point {
            Some(p) if self.search == NeighborSearch::RTree => {
                self.rtree.insert(IndexedPoint::new(p, idx))
            }
            Some(_) => {}
            None => self.planar = false,
        }
        true
    }

    /// Insert an undirected edge. Returns `false` for unknown ids, self-loops, or duplicates.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        let (Some(&ia), Some(&ib)) = (self.ids.get(&a), self.ids.get(&b)) else {
            return false;
        };
        if ia == ib || self.graph.find_edge(ia, ib).is_some() {
            return false;
        }
        self.graph.add_edge(ia, ib, ());
        true
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        match (self.ids.get(&a), self.ids.get(&b)) {
            (Some(&ia), Some(&ib)) => self.graph.find_edge(ia, ib).is_some(),
            _ => false,
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&RoadmapNode> {
        self.ids.get(&id).map(|&idx| &self.graph[idx])
    }

    pub fn position(&self, id: NodeId) -> Option<&Configuration> {
        self.node(id).map(|n| &n.position)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &RoadmapNode> + '_ {
        self.graph.node_weights()
    }

    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()].id, self.graph[e.target()].id))
    }

    /// Ids adjacent to `id` (empty for unknown ids).
    pub fn neighbors_of(&self, id: NodeId) -> Vec<NodeId> {
        match self.ids.get(&id) {
            Some(&idx) => self.graph.neighbors(idx).map(|n| self.graph[n].id).collect(),
            None => Vec::new(),
        }
    }

    /// True if both nodes exist and a path joins them. A node is in its own component.
    pub fn same_component(&self, a: NodeId, b: NodeId) -> bool {
        match (self.ids.get(&a), self.ids.get(&b)) {
            (Some(&ia), Some(&ib)) => has_path_connecting(&self.graph, ia, ib, None),
            _ => false,
        }
    }

    pub fn connected_components(&self) -> usize {
        connected_components(&self.graph)
    }

    /// Fewest-edges path from `from` to `to`, both ends included.
    pub fn shortest_path(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        let (&ia, &ib) = (self.ids.get(&from)?, self.ids.get(&to)?);
        let (_, path) = astar(&self.graph, ia, |n| n == ib, |_| 1usize, |_| 0)?;
        Some(path.into_iter().map(|n| self.graph[n].id).collect())
    }

    /// Every node strictly closer than `radius` to `query`, nearest first.
    ///
    /// Ties keep insertion order, so both search strategies return the same sequence.
    pub fn find_neighbors(&self, query: &Configuration, radius: f64) -> Vec<Neighbor> {
        let use_rtree = self.search == NeighborSearch::RTree && self.planar && query.dim() == 2;
        let mut found: Vec<Neighbor> = if use_rtree {
            let q = [query.coords()[0], query.coords()[1]];
            self.rtree
                .locate_within_distance(q, radius * radius)
                .filter_map(|item| self.neighbor_at(item.data, query, radius))
                .collect()
        } else {
            self.graph
                .node_indices()
                .filter_map(|idx| self.neighbor_at(idx, query, radius))
                .collect()
        };
        found.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.index.cmp(&b.index))
        });
        found
    }

    fn neighbor_at(&self, idx: NodeIndex, query: &Configuration, radius: f64) -> Option<Neighbor> {
        let node = &self.graph[idx];
        let distance = node.position.distance(query);
        (distance < radius).then_some(Neighbor {
            distance,
            id: node.id,
            index: idx,
        })
    }
}

#[cfg(test)]
mod tests;
