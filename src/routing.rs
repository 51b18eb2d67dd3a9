use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use tracing::debug;

use crate::{Graph, NodeId};

mod route;

pub use route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapElement {
    /// Best known arrival time at this node when it was queued.
    arrival: OrderedFloat<f64>,
    node: NodeId,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl Ord for HeapElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .arrival
            .cmp(&self.arrival)
            // breaking ties in a deterministic way
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Earliest arrival time and predecessor of every node, as computed by
/// [`earliest_arrivals`] for one source. The graph itself is not retained.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrivalTimes {
    source: NodeId,
    arrival: Vec<f64>,
    predecessor: Vec<Option<NodeId>>,
}

impl ArrivalTimes {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Gets the earliest arrival time at the node, or `None` if the node is
    /// unreachable from the source (or not a node of the graph).
    pub fn arrival(&self, node: NodeId) -> Option<f64> {
        self.arrival
            .get(node)
            .copied()
            .filter(|arrival| arrival.is_finite())
    }

    /// Gets the previous node on the best known path to the node.
    /// `None` for the source and for unreachable nodes.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessor.get(node).copied().flatten()
    }

    /// Unpacks the route from the source to the destination by walking the
    /// predecessors backwards, then reversing into travel order.
    /// Returns `None` if the destination was never reached.
    pub fn route_to(&self, destination: NodeId) -> Option<Route> {
        let total_time = self.arrival(destination)?;

        let mut nodes = vec![destination];
        let mut next = destination;

        while let Some(previous) = self.predecessor(next) {
            next = previous;
            nodes.push(previous);
        }

        nodes.reverse();

        Some(Route { total_time, nodes })
    }
}

/// Computes the earliest arrival time from the source to every node of the
/// graph.
///
/// Arriving at a node charges its dwell time, so relaxing the edge `(u, v)`
/// costs `travel_time(u, v) + dwell_time(v)` on top of the arrival at `u`.
/// The source charges its own dwell time before departing, at time 0.
///
/// The queue discipline tolerates stale entries: a node is re-queued on
/// every improvement and a popped element older than the authoritative
/// arrival time is skipped. With non-negative travel and dwell times each
/// node settles at its minimum arrival time.
///
/// Panics if `source` is not a node of the graph.
pub fn earliest_arrivals(graph: &Graph, source: NodeId) -> ArrivalTimes {
    debug!("Computing earliest arrivals from node {source}");

    let node_count = graph.node_count();
    let mut arrival = vec![f64::INFINITY; node_count];
    let mut predecessor: Vec<Option<NodeId>> = vec![None; node_count];

    arrival[source] = graph.dwell_time(source);

    // priority queue of discovered nodes that may need to be visited
    let mut frontier = BinaryHeap::from([HeapElement {
        arrival: OrderedFloat(arrival[source]),
        node: source,
    }]);

    while let Some(element) = frontier.pop() {
        // check if we already know a cheaper way to get to this node
        if element.arrival.0 > arrival[element.node] {
            continue;
        }

        for (neighbor, travel_time) in graph.outgoing(element.node) {
            let candidate = arrival[element.node] + travel_time + graph.dwell_time(neighbor);

            // check if we can follow the current path to reach the neighbor in a cheaper way
            if candidate < arrival[neighbor] {
                // Relax: we have now found a better way that we are going to explore
                arrival[neighbor] = candidate;
                predecessor[neighbor] = Some(element.node);
                frontier.push(HeapElement {
                    arrival: OrderedFloat(candidate),
                    node: neighbor,
                });
            }
        }
    }

    ArrivalTimes {
        source,
        arrival,
        predecessor,
    }
}
