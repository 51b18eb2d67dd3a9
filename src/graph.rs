use rustc_hash::FxHashMap;

use crate::error::NodeOutOfRange;
use crate::DwellTimes;

/// Uniquely identifies a node of the graph. Ids are dense in `[0, n)`.
pub type NodeId = usize;

/// A node of the graph, owned exclusively by its [`Graph`].
///
/// The dwell time is assigned once at graph construction and charged on
/// every arrival at the node, independently of which edge was used.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    dwell_time: f64,
    neighbors: Vec<NodeId>,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn dwell_time(&self) -> f64 {
        self.dwell_time
    }

    /// Outgoing neighbors, in insertion order.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }
}

/// Directed graph with weighted edges and per-node dwell times.
///
/// Nodes are stored in a dense array indexed by id; adjacency is expressed
/// as lists of ids into that array. Travel times are kept in a map keyed by
/// the ordered `(from, to)` pair, with at most one edge per pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
    travel_times: FxHashMap<(NodeId, NodeId), f64>,
}

impl Graph {
    /// Creates a graph of `node_count` nodes and no edges.
    /// Dwell times are assigned here, once, from the given configuration.
    pub fn new(node_count: usize, dwell: &DwellTimes) -> Self {
        let nodes = dwell
            .sample(node_count)
            .into_iter()
            .enumerate()
            .map(|(id, dwell_time)| Node {
                id,
                dwell_time,
                neighbors: Vec::new(),
            })
            .collect();

        Self {
            nodes,
            travel_times: FxHashMap::default(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.travel_times.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Gets the dwell time charged on every arrival at the node.
    ///
    /// Panics if `node` is not a node of this graph.
    pub fn dwell_time(&self, node: NodeId) -> f64 {
        self.nodes[node].dwell_time
    }

    /// Gets the travel time of the directed edge `(from, to)`, or `None` if
    /// no such edge was ever inserted.
    pub fn travel_time(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.travel_times.get(&(from, to)).copied()
    }

    /// Inserts the directed edge `(from, to)`. Inserting the same ordered
    /// pair twice overwrites the travel time without duplicating the
    /// adjacency entry.
    pub fn insert_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        travel_time: f64,
    ) -> Result<(), NodeOutOfRange> {
        self.check_node(from)?;
        self.check_node(to)?;

        if self.travel_times.insert((from, to), travel_time).is_none() {
            self.nodes[from].neighbors.push(to);
        }

        Ok(())
    }

    /// Gets an iterator over all the outgoing edges from the given node.
    /// For each edge returns the destination node and the travel time.
    ///
    /// Panics if `node` is not a node of this graph.
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.nodes[node]
            .neighbors
            .iter()
            .filter_map(move |&to| self.travel_time(node, to).map(|travel| (to, travel)))
    }

    fn check_node(&self, id: NodeId) -> Result<(), NodeOutOfRange> {
        if id < self.nodes.len() {
            Ok(())
        } else {
            Err(NodeOutOfRange {
                id,
                node_count: self.nodes.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn graph_001() {
        let mut graph = Graph::new(3, &DwellTimes::Fixed(2.0));
        graph.insert_edge(0, 1, 1.5).unwrap();
        graph.insert_edge(1, 2, 2.5).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.dwell_time(1), 2.0);
        assert_eq!(graph.travel_time(0, 1), Some(1.5));
        assert_eq!(graph.travel_time(1, 0), None);
        assert_eq!(graph.outgoing(1).collect::<Vec<_>>(), vec![(2, 2.5)]);
    }

    #[test]
    fn graph_002() {
        let mut graph = Graph::new(2, &DwellTimes::Fixed(0.0));
        graph.insert_edge(0, 1, 1.0).unwrap();
        graph.insert_edge(0, 1, 4.0).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.travel_time(0, 1), Some(4.0));
        assert_eq!(graph.outgoing(0).collect::<Vec<_>>(), vec![(1, 4.0)]);
    }

    #[test]
    fn graph_003() {
        let mut graph = Graph::new(2, &DwellTimes::Fixed(0.0));

        assert_eq!(
            graph.insert_edge(0, 2, 1.0),
            Err(NodeOutOfRange { id: 2, node_count: 2 })
        );
        assert_eq!(
            graph.insert_edge(7, 1, 1.0),
            Err(NodeOutOfRange { id: 7, node_count: 2 })
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn graph_004() {
        let graph = Graph::new(0, &DwellTimes::default());

        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
    }
}
