//! Breadth-first search from a start vertex.

use std::collections::{BTreeSet, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use algotrace_core::{step_kind, Network, NodeId, Recorder, Snapshot, Trace};

use super::fmt_order;

step_kind! {
    /// Transitions recorded by [`bfs`].
    pub enum BfsKind {
        Start => "start",
        /// A vertex was taken off the front of the queue and visited.
        Dequeue => "dequeue",
        /// An unseen neighbour was marked and enqueued.
        Discover => "discover",
        /// A neighbour was already discovered.
        Skip => "skip",
        Done => "done" [terminal],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfsState {
    pub current: Option<NodeId>,
    pub neighbor: Option<NodeId>,
    /// Queue contents, front first.
    pub queue: Vec<NodeId>,
    pub visited: BTreeSet<NodeId>,
    pub order: Vec<NodeId>,
}

#[derive(Default)]
struct Frontier {
    current: Option<NodeId>,
    neighbor: Option<NodeId>,
    queue: VecDeque<NodeId>,
    visited: HashSet<NodeId>,
    order: Vec<NodeId>,
}

impl Snapshot for Frontier {
    type Frozen = BfsState;

    fn snapshot(&self) -> BfsState {
        BfsState {
            current: self.current,
            neighbor: self.neighbor,
            queue: self.queue.snapshot(),
            visited: self.visited.snapshot(),
            order: self.order.clone(),
        }
    }
}

/// Traces breadth-first search over `network` starting at `start`.
pub fn bfs(network: &Network, start: NodeId) -> Trace<BfsKind, BfsState> {
    let mut f = Frontier::default();

    if !network.contains(start) {
        return Trace::single(
            BfsKind::Done,
            f.snapshot(),
            format!("Start vertex {start} is not in the graph, nothing to traverse"),
        );
    }

    let mut rec = Recorder::new();
    f.visited.insert(start);
    f.queue.push_back(start);
    rec.record(
        BfsKind::Start,
        &f,
        format!("Mark {start} discovered and enqueue it"),
    );

    while let Some(u) = f.queue.pop_front() {
        f.current = Some(u);
        f.neighbor = None;
        f.order.push(u);
        rec.record(BfsKind::Dequeue, &f, format!("Dequeue {u} and visit it"));

        for (v, _) in network.neighbors(u) {
            f.neighbor = Some(v);
            if f.visited.insert(v) {
                f.queue.push_back(v);
                rec.record(
                    BfsKind::Discover,
                    &f,
                    format!("Neighbour {v} of {u} is new: mark it and enqueue it"),
                );
            } else {
                rec.record(
                    BfsKind::Skip,
                    &f,
                    format!("Neighbour {v} of {u} was already discovered"),
                );
            }
        }
    }

    f.current = None;
    f.neighbor = None;
    let description = format!(
        "Queue empty: visited {} of {} vertices in order {}",
        f.order.len(),
        network.node_count(),
        fmt_order(&f.order)
    );
    rec.finish(BfsKind::Done, &f, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::small_graph;

    fn ids(nodes: &[NodeId]) -> Vec<u32> {
        nodes.iter().map(|n| n.0).collect()
    }

    #[test]
    fn visits_level_by_level() {
        let trace = bfs(&small_graph(), NodeId(0));
        let last = trace.last().unwrap();
        assert_eq!(ids(&last.state.order), vec![0, 1, 2, 3, 4]);
        assert!(!last.state.visited.contains(&NodeId(5)));
    }

    #[test]
    fn queue_snapshot_is_front_first() {
        let trace = bfs(&small_graph(), NodeId(0));
        let after_second_discover = trace.steps_of(BfsKind::Discover).nth(1).unwrap();
        assert_eq!(ids(&after_second_discover.state.queue), vec![1, 2]);
    }

    #[test]
    fn skips_are_recorded_for_seen_neighbours() {
        let trace = bfs(&small_graph(), NodeId(0));
        assert_eq!(trace.steps_of(BfsKind::Skip).count(), 6);
        assert_eq!(trace.steps_of(BfsKind::Discover).count(), 4);
    }

    #[test]
    fn isolated_start_visits_only_itself() {
        let trace = bfs(&small_graph(), NodeId(5));
        assert_eq!(ids(&trace.last().unwrap().state.order), vec![5]);
    }

    #[test]
    fn missing_start_is_single_done_step() {
        let trace = bfs(&small_graph(), NodeId(42));
        assert_eq!(trace.len(), 1);
        assert!(trace.last().unwrap().description.contains("not in the graph"));
    }
}
