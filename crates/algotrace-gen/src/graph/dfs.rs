//! Depth-first search from a start vertex.
//!
//! The recursion is traced through an explicit path stack so each step shows
//! how deep the search currently is.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use algotrace_core::{step_kind, Network, NodeId, Recorder, Snapshot, Trace};

use super::fmt_order;

step_kind! {
    /// Transitions recorded by [`dfs`].
    pub enum DfsKind {
        Start => "start",
        Visit => "visit",
        /// An unvisited neighbour was found; the search descends into it.
        Discover => "discover",
        Skip => "skip",
        /// Every neighbour of the top vertex is done; it leaves the stack.
        Backtrack => "backtrack",
        Done => "done" [terminal],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfsState {
    pub current: Option<NodeId>,
    pub neighbor: Option<NodeId>,
    /// Recursion path, bottom first.
    pub stack: Vec<NodeId>,
    pub visited: BTreeSet<NodeId>,
    pub order: Vec<NodeId>,
}

#[derive(Default)]
struct Walk {
    neighbor: Option<NodeId>,
    stack: Vec<NodeId>,
    visited: HashSet<NodeId>,
    order: Vec<NodeId>,
}

impl Snapshot for Walk {
    type Frozen = DfsState;

    fn snapshot(&self) -> DfsState {
        DfsState {
            current: self.stack.last().copied(),
            neighbor: self.neighbor,
            stack: self.stack.clone(),
            visited: self.visited.snapshot(),
            order: self.order.clone(),
        }
    }
}

struct Search<'a> {
    network: &'a Network,
    rec: Recorder<DfsKind, DfsState>,
    walk: Walk,
}

impl Search<'_> {
    fn visit(&mut self, u: NodeId) {
        self.walk.visited.insert(u);
        self.walk.stack.push(u);
        self.walk.order.push(u);
        self.walk.neighbor = None;
        self.rec.record(
            DfsKind::Visit,
            &self.walk,
            format!("Visit {u} (depth {})", self.walk.stack.len() - 1),
        );

        for (v, _) in self.network.neighbors(u) {
            self.walk.neighbor = Some(v);
            if self.walk.visited.contains(&v) {
                self.rec.record(
                    DfsKind::Skip,
                    &self.walk,
                    format!("Neighbour {v} of {u} is already visited"),
                );
            } else {
                self.rec.record(
                    DfsKind::Discover,
                    &self.walk,
                    format!("Neighbour {v} of {u} is unvisited: go deeper"),
                );
                self.visit(v);
            }
        }

        self.walk.stack.pop();
        self.walk.neighbor = None;
        let description = match self.walk.stack.last() {
            Some(parent) => format!("All neighbours of {u} done: back to {parent}"),
            None => format!("All neighbours of {u} done: the stack is empty"),
        };
        self.rec.record(DfsKind::Backtrack, &self.walk, description);
    }
}

/// Traces recursive depth-first search over `network` starting at `start`.
pub fn dfs(network: &Network, start: NodeId) -> Trace<DfsKind, DfsState> {
    if !network.contains(start) {
        return Trace::single(
            DfsKind::Done,
            Walk::default().snapshot(),
            format!("Start vertex {start} is not in the graph, nothing to traverse"),
        );
    }

    let mut search = Search {
        network,
        rec: Recorder::new(),
        walk: Walk::default(),
    };
    search.rec.record(
        DfsKind::Start,
        &search.walk,
        format!("Start depth-first search at {start}"),
    );
    search.visit(start);

    let description = format!(
        "Search finished: visited {} of {} vertices in order {}",
        search.walk.order.len(),
        network.node_count(),
        fmt_order(&search.walk.order)
    );
    search.rec.finish(DfsKind::Done, &search.walk, description)
}
