//! Dijkstra's single-source shortest paths with a lazy-deletion heap.
//!
//! The heap may hold outdated entries for a vertex whose distance improved
//! after they were pushed; popping one records a `stale` step. Ties pop in
//! ascending vertex order.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashSet};

use serde::{Deserialize, Serialize};

use algotrace_core::{step_kind, Network, NodeId, Recorder, Snapshot, Trace};

step_kind! {
    /// Transitions recorded by [`dijkstra`].
    pub enum DijkstraKind {
        Start => "start",
        /// The closest unsettled vertex was finalized.
        Settle => "settle",
        /// A shorter route to a neighbour was found.
        Relax => "relax",
        /// The route through the current vertex is not shorter.
        Skip => "skip",
        /// A heap entry for an already settled vertex was discarded.
        Stale => "stale",
        Done => "done" [terminal],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DijkstraState {
    pub current: Option<NodeId>,
    pub neighbor: Option<NodeId>,
    /// Best known distance per vertex; `None` is unreached.
    pub dist: Vec<Option<u64>>,
    /// Predecessor on the best known route.
    pub prev: Vec<Option<NodeId>>,
    pub settled: BTreeSet<NodeId>,
    /// Heap contents as `(distance, vertex)`, smallest first.
    pub frontier: Vec<(u64, NodeId)>,
}

struct Work {
    current: Option<NodeId>,
    neighbor: Option<NodeId>,
    dist: Vec<Option<u64>>,
    prev: Vec<Option<NodeId>>,
    settled: HashSet<NodeId>,
    heap: BinaryHeap<Reverse<(u64, NodeId)>>,
}

impl Snapshot for Work {
    type Frozen = DijkstraState;

    fn snapshot(&self) -> DijkstraState {
        // Heap iteration order is unspecified; freeze it sorted.
        let mut frontier: Vec<(u64, NodeId)> = self.heap.iter().map(|Reverse(e)| *e).collect();
        frontier.sort_unstable();
        DijkstraState {
            current: self.current,
            neighbor: self.neighbor,
            dist: self.dist.clone(),
            prev: self.prev.clone(),
            settled: self.settled.snapshot(),
            frontier,
        }
    }
}

fn fmt_dist(d: Option<u64>) -> String {
    d.map_or_else(|| "inf".to_string(), |d| d.to_string())
}

/// Traces Dijkstra's algorithm over `network` from `source`.
///
/// Edge weights are non-negative by construction (`u32`).
pub fn dijkstra(network: &Network, source: NodeId) -> Trace<DijkstraKind, DijkstraState> {
    let n = network.node_count();
    let mut w = Work {
        current: None,
        neighbor: None,
        dist: vec![None; n],
        prev: vec![None; n],
        settled: HashSet::new(),
        heap: BinaryHeap::new(),
    };

    if !network.contains(source) {
        return Trace::single(
            DijkstraKind::Done,
            w.snapshot(),
            format!("Source vertex {source} is not in the graph, no distances to compute"),
        );
    }

    let mut rec = Recorder::new();
    w.dist[source.index()] = Some(0);
    w.heap.push(Reverse((0, source)));
    rec.record(
        DijkstraKind::Start,
        &w,
        format!("dist[{source}] = 0, every other vertex starts at infinity"),
    );

    while let Some(Reverse((d, u))) = w.heap.pop() {
        w.current = Some(u);
        w.neighbor = None;

        if w.settled.contains(&u) {
            rec.record(
                DijkstraKind::Stale,
                &w,
                format!("Entry ({d}, {u}) is outdated: {u} is already settled"),
            );
            continue;
        }

        w.settled.insert(u);
        rec.record(
            DijkstraKind::Settle,
            &w,
            format!("Settle {u} at distance {d}"),
        );

        for (v, weight) in network.neighbors(u) {
            w.neighbor = Some(v);
            let candidate = d + weight as u64;
            let known = w.dist[v.index()];

            if w.settled.contains(&v) || known.is_some_and(|k| k <= candidate) {
                rec.record(
                    DijkstraKind::Skip,
                    &w,
                    format!(
                        "Via {u}: {d} + {weight} = {candidate} does not beat dist[{v}] = {}",
                        fmt_dist(known)
                    ),
                );
                continue;
            }

            w.dist[v.index()] = Some(candidate);
            w.prev[v.index()] = Some(u);
            w.heap.push(Reverse((candidate, v)));
            rec.record(
                DijkstraKind::Relax,
                &w,
                format!(
                    "Relax {u} -> {v}: dist[{v}] {} -> {candidate}",
                    fmt_dist(known)
                ),
            );
        }
    }

    w.current = None;
    w.neighbor = None;
    let summary: Vec<String> = w
        .dist
        .iter()
        .enumerate()
        .map(|(i, d)| format!("{i}: {}", fmt_dist(*d)))
        .collect();
    let description = format!("Heap empty, shortest distances from {source}: {}", summary.join(", "));
    rec.finish(DijkstraKind::Done, &w, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_core::{EdgeSpec, GraphSpec};

    fn weighted() -> Network {
        let spec = GraphSpec::directed(
            5,
            vec![
                EdgeSpec::weighted(0, 1, 4),
                EdgeSpec::weighted(0, 2, 1),
                EdgeSpec::weighted(2, 1, 2),
                EdgeSpec::weighted(1, 3, 1),
                EdgeSpec::weighted(2, 3, 5),
            ],
        );
        Network::from_spec(&spec).unwrap()
    }

    #[test]
    fn computes_shortest_distances() {
        let trace = dijkstra(&weighted(), NodeId(0));
        let last = trace.last().unwrap();
        assert_eq!(last.state.dist, vec![Some(0), Some(3), Some(1), Some(4), None]);
        assert_eq!(last.state.prev[3], Some(NodeId(1)));
        assert_eq!(last.state.prev[1], Some(NodeId(2)));
    }

    #[test]
    fn improved_vertex_leaves_a_stale_entry() {
        let trace = dijkstra(&weighted(), NodeId(0));
        let stale: Vec<_> = trace
            .steps_of(DijkstraKind::Stale)
            .map(|s| s.state.current)
            .collect();
        assert_eq!(stale, vec![Some(NodeId(1)), Some(NodeId(3))]);
    }

    #[test]
    fn settle_order_is_by_distance() {
        let trace = dijkstra(&weighted(), NodeId(0));
        let settled: Vec<u32> = trace
            .steps_of(DijkstraKind::Settle)
            .filter_map(|s| s.state.current.map(|n| n.0))
            .collect();
        assert_eq!(settled, vec![0, 2, 1, 3]);
    }

    #[test]
    fn frontier_snapshot_is_sorted() {
        let trace = dijkstra(&weighted(), NodeId(0));
        for step in &trace {
            let mut sorted = step.state.frontier.clone();
            sorted.sort_unstable();
            assert_eq!(step.state.frontier, sorted);
        }
    }

    #[test]
    fn missing_source_is_single_done_step() {
        let trace = dijkstra(&weighted(), NodeId(7));
        assert_eq!(trace.len(), 1);
    }
}
