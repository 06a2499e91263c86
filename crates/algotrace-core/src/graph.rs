//! Graph inputs for traversal generators.
//!
//! Callers describe a graph as a [`GraphSpec`] (vertex count plus an edge
//! list). [`Network::from_spec`] validates it into a petgraph `StableGraph`.
//! Undirected edges are stored as a forward/backward pair of directed edges,
//! so every vertex's adjacency is exactly its outgoing edge list.
//!
//! # Neighbour order
//!
//! [`Network::neighbors`] returns neighbours in edge-insertion order, which
//! is the order edges appear in the `GraphSpec`. petgraph itself iterates adjacency
//! newest-first, so the edges are re-sorted by `EdgeIndex` before use.

use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableGraph;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Directed;
use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::id::NodeId;

fn default_weight() -> u32 {
    1
}

/// One edge of a caller-described graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: u32,
    pub to: u32,
    /// Edge weight, used by weighted algorithms. Defaults to 1.
    #[serde(default = "default_weight")]
    pub weight: u32,
}

impl EdgeSpec {
    pub fn new(from: u32, to: u32) -> Self {
        EdgeSpec {
            from,
            to,
            weight: 1,
        }
    }

    pub fn weighted(from: u32, to: u32, weight: u32) -> Self {
        EdgeSpec { from, to, weight }
    }
}

/// Caller-facing description of a graph: vertices `0..node_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub node_count: u32,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    #[serde(default)]
    pub directed: bool,
}

impl GraphSpec {
    pub fn undirected(node_count: u32, edges: Vec<EdgeSpec>) -> Self {
        GraphSpec {
            node_count,
            edges,
            directed: false,
        }
    }

    pub fn directed(node_count: u32, edges: Vec<EdgeSpec>) -> Self {
        GraphSpec {
            node_count,
            edges,
            directed: true,
        }
    }

    /// Checks that every edge endpoint names an existing vertex.
    pub fn validate(&self) -> Result<(), InputError> {
        for edge in &self.edges {
            if edge.from >= self.node_count || edge.to >= self.node_count {
                return Err(InputError::InvalidEdge {
                    from: edge.from,
                    to: edge.to,
                    node_count: self.node_count,
                });
            }
        }
        Ok(())
    }
}

/// A validated graph ready for traversal.
#[derive(Debug, Clone)]
pub struct Network {
    graph: StableGraph<NodeId, u32, Directed, u32>,
    directed: bool,
}

impl Network {
    /// Builds a network from a spec, rejecting edges to unknown vertices.
    pub fn from_spec(spec: &GraphSpec) -> Result<Self, InputError> {
        spec.validate()?;

        let mut graph: StableGraph<NodeId, u32, Directed, u32> = StableGraph::with_capacity(
            spec.node_count as usize,
            spec.edges.len() * if spec.directed { 1 } else { 2 },
        );
        for id in 0..spec.node_count {
            graph.add_node(NodeId(id));
        }
        for edge in &spec.edges {
            let a: NodeIndex<u32> = NodeId(edge.from).into();
            let b: NodeIndex<u32> = NodeId(edge.to).into();
            graph.add_edge(a, b, edge.weight);
            if !spec.directed && a != b {
                graph.add_edge(b, a, edge.weight);
            }
        }

        Ok(Network {
            graph,
            directed: spec.directed,
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges as described by the caller (undirected pairs count once).
    pub fn edge_count(&self) -> usize {
        if self.directed {
            self.graph.edge_count()
        } else {
            let loops = self
                .graph
                .edge_references()
                .filter(|e| e.source() == e.target())
                .count();
            (self.graph.edge_count() - loops) / 2 + loops
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.graph.contains_node(node.into())
    }

    /// Neighbours of `node` with edge weights, in edge-insertion order.
    pub fn neighbors(&self, node: NodeId) -> Vec<(NodeId, u32)> {
        if !self.contains(node) {
            return Vec::new();
        }
        let mut edges: Vec<_> = self
            .graph
            .edges(node.into())
            .map(|e| (e.id().index(), NodeId::from(e.target()), *e.weight()))
            .collect();
        edges.sort_by_key(|(id, _, _)| *id);
        edges.into_iter().map(|(_, to, w)| (to, w)).collect()
    }

    /// Read-only access to the underlying petgraph structure.
    pub fn graph(&self) -> &StableGraph<NodeId, u32, Directed, u32> {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(neighbors: Vec<(NodeId, u32)>) -> Vec<u32> {
        neighbors.into_iter().map(|(n, _)| n.0).collect()
    }

    #[test]
    fn neighbors_follow_insertion_order() {
        let spec = GraphSpec::undirected(
            4,
            vec![EdgeSpec::new(0, 2), EdgeSpec::new(0, 1), EdgeSpec::new(0, 3)],
        );
        let net = Network::from_spec(&spec).unwrap();
        assert_eq!(ids(net.neighbors(NodeId(0))), vec![2, 1, 3]);
        assert_eq!(ids(net.neighbors(NodeId(1))), vec![0]);
    }

    #[test]
    fn directed_edges_are_one_way() {
        let spec = GraphSpec::directed(3, vec![EdgeSpec::new(0, 1), EdgeSpec::new(1, 2)]);
        let net = Network::from_spec(&spec).unwrap();
        assert_eq!(ids(net.neighbors(NodeId(0))), vec![1]);
        assert!(net.neighbors(NodeId(2)).is_empty());
        assert_eq!(net.edge_count(), 2);
    }

    #[test]
    fn undirected_edge_count_counts_pairs_once() {
        let spec = GraphSpec::undirected(
            3,
            vec![EdgeSpec::new(0, 1), EdgeSpec::new(1, 2), EdgeSpec::new(2, 2)],
        );
        let net = Network::from_spec(&spec).unwrap();
        assert_eq!(net.edge_count(), 3);
    }

    #[test]
    fn rejects_edge_to_missing_vertex() {
        let spec = GraphSpec::undirected(2, vec![EdgeSpec::new(0, 5)]);
        let err = Network::from_spec(&spec).unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidEdge {
                from: 0,
                to: 5,
                node_count: 2
            }
        );
    }

    #[test]
    fn weights_default_to_one_when_omitted() {
        let spec: GraphSpec =
            serde_json::from_str(r#"{"node_count":2,"edges":[{"from":0,"to":1}]}"#).unwrap();
        assert!(!spec.directed);
        assert_eq!(spec.edges[0].weight, 1);
    }

    #[test]
    fn unknown_vertex_has_no_neighbors() {
        let net = Network::from_spec(&GraphSpec::undirected(1, vec![])).unwrap();
        assert!(!net.contains(NodeId(4)));
        assert!(net.neighbors(NodeId(4)).is_empty());
    }
}
