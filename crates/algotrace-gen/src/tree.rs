//! Binary tree traversals driven by an explicit stack or queue.
//!
//! All four orders are iterative so the container is part of every
//! snapshot. Node references in the state are slots of the
//! [`BinaryTree`] arena, which is itself level-order numbered.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use algotrace_core::{step_kind, BinaryTree, Recorder, Trace};

use crate::backtracking::fmt_path;

/// Which traversal to trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    Preorder,
    #[default]
    Inorder,
    Postorder,
    LevelOrder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::Preorder,
        TraversalOrder::Inorder,
        TraversalOrder::Postorder,
        TraversalOrder::LevelOrder,
    ];

    /// Whether the container is a queue rather than a stack.
    pub fn uses_queue(self) -> bool {
        self == TraversalOrder::LevelOrder
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraversalOrder::Preorder => "preorder",
            TraversalOrder::Inorder => "inorder",
            TraversalOrder::Postorder => "postorder",
            TraversalOrder::LevelOrder => "level-order",
        };
        f.write_str(name)
    }
}

step_kind! {
    /// Transitions recorded by [`traverse`].
    pub enum TreeKind {
        Start => "start",
        /// A node was added to the stack or queue.
        Push => "push",
        /// A node was emitted to the output.
        Visit => "visit",
        Done => "done" [terminal],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeState {
    pub order: TraversalOrder,
    /// Slot of the node just pushed or visited.
    pub current: Option<usize>,
    /// Stack (bottom first) or queue (front first) of slots.
    pub container: Vec<usize>,
    /// Slots visited so far.
    pub visited: Vec<usize>,
    /// Values in visit order.
    pub output: Vec<i32>,
}

algotrace_core::snapshot_by_clone!(TreeState);

struct Walk<'a> {
    tree: &'a BinaryTree,
    rec: Recorder<TreeKind, TreeState>,
    work: TreeState,
}

impl Walk<'_> {
    fn push(&mut self, slot: usize) {
        self.work.container.push(slot);
        self.work.current = Some(slot);
        let what = if self.work.order.uses_queue() { "Enqueue" } else { "Push" };
        self.rec.record(
            TreeKind::Push,
            &self.work,
            format!("{what} node {}", self.tree.value(slot)),
        );
    }

    fn visit(&mut self, slot: usize) {
        let value = self.tree.value(slot);
        self.work.current = Some(slot);
        self.work.visited.push(slot);
        self.work.output.push(value);
        self.rec.record(
            TreeKind::Visit,
            &self.work,
            format!("Visit {value}: output {}", fmt_path(&self.work.output)),
        );
    }

    fn left(&self, slot: usize) -> Option<usize> {
        self.tree.node(slot).and_then(|n| n.left)
    }

    fn right(&self, slot: usize) -> Option<usize> {
        self.tree.node(slot).and_then(|n| n.right)
    }

    fn preorder(&mut self, root: usize) {
        self.push(root);
        while let Some(u) = self.work.container.pop() {
            self.visit(u);
            // Right first so the left subtree pops first.
            if let Some(r) = self.right(u) {
                self.push(r);
            }
            if let Some(l) = self.left(u) {
                self.push(l);
            }
        }
    }

    fn inorder(&mut self, root: usize) {
        let mut cursor = Some(root);
        loop {
            while let Some(u) = cursor {
                self.push(u);
                cursor = self.left(u);
            }
            let Some(u) = self.work.container.pop() else {
                break;
            };
            self.visit(u);
            cursor = self.right(u);
        }
    }

    fn postorder(&mut self, root: usize) {
        let mut cursor = Some(root);
        let mut last: Option<usize> = None;
        loop {
            while let Some(u) = cursor {
                self.push(u);
                cursor = self.left(u);
            }
            let Some(&top) = self.work.container.last() else {
                break;
            };
            match self.right(top) {
                Some(r) if last != Some(r) => cursor = Some(r),
                _ => {
                    self.work.container.pop();
                    self.visit(top);
                    last = Some(top);
                }
            }
        }
    }

    fn level_order(&mut self, root: usize) {
        // The snapshot keeps the queue front first, so pop from index 0.
        let mut queue = VecDeque::new();
        queue.push_back(root);
        self.push(root);
        while let Some(u) = queue.pop_front() {
            self.work.container.remove(0);
            self.visit(u);
            for child in [self.left(u), self.right(u)].into_iter().flatten() {
                queue.push_back(child);
                self.push(child);
            }
        }
    }
}

/// Traces an iterative `order` traversal of `tree`.
pub fn traverse(tree: &BinaryTree, order: TraversalOrder) -> Trace<TreeKind, TreeState> {
    let work = TreeState {
        order,
        current: None,
        container: Vec::new(),
        visited: Vec::new(),
        output: Vec::new(),
    };

    let Some(root) = tree.root() else {
        return Trace::single(
            TreeKind::Done,
            work,
            format!("Empty tree, the {order} traversal is []"),
        );
    };

    let mut walk = Walk {
        tree,
        rec: Recorder::new(),
        work,
    };
    let container = if order.uses_queue() { "queue" } else { "stack" };
    walk.rec.record(
        TreeKind::Start,
        &walk.work,
        format!(
            "Traverse {} nodes in {order} using a {container}",
            tree.len()
        ),
    );

    match order {
        TraversalOrder::Preorder => walk.preorder(root),
        TraversalOrder::Inorder => walk.inorder(root),
        TraversalOrder::Postorder => walk.postorder(root),
        TraversalOrder::LevelOrder => walk.level_order(root),
    }

    walk.work.current = None;
    let description = format!(
        "Traversal complete: {order} is {}",
        fmt_path(&walk.work.output)
    );
    walk.rec.finish(TreeKind::Done, &walk.work, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    //       1
    //      / \
    //     2   3
    //    / \   \
    //   4   5   6
    fn sample() -> BinaryTree {
        BinaryTree::from_level_order(&[Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(6)])
    }

    fn output(order: TraversalOrder) -> Vec<i32> {
        traverse(&sample(), order).last().unwrap().state.output.clone()
    }

    #[test]
    fn orders_match_their_definitions() {
        assert_eq!(output(TraversalOrder::Preorder), vec![1, 2, 4, 5, 3, 6]);
        assert_eq!(output(TraversalOrder::Inorder), vec![4, 2, 5, 1, 3, 6]);
        assert_eq!(output(TraversalOrder::Postorder), vec![4, 5, 2, 6, 3, 1]);
        assert_eq!(output(TraversalOrder::LevelOrder), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn every_node_is_pushed_and_visited_once() {
        for order in TraversalOrder::ALL {
            let trace = traverse(&sample(), order);
            assert_eq!(trace.steps_of(TreeKind::Push).count(), 6, "{order}");
            assert_eq!(trace.steps_of(TreeKind::Visit).count(), 6, "{order}");
            assert!(trace.last().unwrap().state.container.is_empty());
        }
    }

    #[test]
    fn level_order_queue_is_front_first() {
        let trace = traverse(&sample(), TraversalOrder::LevelOrder);
        let after_root = trace
            .steps_of(TreeKind::Push)
            .find(|s| s.state.container.len() == 2)
            .unwrap();
        assert_eq!(after_root.state.container, vec![1, 2]);
    }

    #[test]
    fn inorder_stack_holds_left_spine() {
        let trace = traverse(&sample(), TraversalOrder::Inorder);
        let first_visit = trace.steps_of(TreeKind::Visit).next().unwrap();
        assert_eq!(first_visit.state.container, vec![0, 1]);
        assert_eq!(first_visit.state.output, vec![4]);
    }

    #[test]
    fn empty_tree_is_single_step() {
        let trace = traverse(&BinaryTree::default(), TraversalOrder::Preorder);
        assert_eq!(trace.len(), 1);
        assert!(trace.last().unwrap().state.output.is_empty());
    }

    #[test]
    fn order_serializes_in_kebab_case() {
        let json = serde_json::to_string(&TraversalOrder::LevelOrder).unwrap();
        assert_eq!(json, "\"level-order\"");
    }
}
