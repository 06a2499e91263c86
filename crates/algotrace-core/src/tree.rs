//! Arena-backed binary tree built from a level-order listing.
//!
//! Trees arrive the way interview problems print them: a level-order array
//! where `None` marks a missing child, e.g. `[3, 9, 20, null, null, 15, 7]`.
//! Nodes live in a `Vec` and refer to children by slot, so a snapshot of the
//! tree is a plain clone.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// A single tree node. Children are slots in [`BinaryTree::nodes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub value: i32,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// Binary tree with nodes numbered in level order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryTree {
    nodes: Vec<TreeNode>,
    root: Option<usize>,
}

impl BinaryTree {
    /// Builds a tree from a level-order listing.
    ///
    /// A leading `None` (or an empty listing) produces an empty tree. Entries
    /// beyond the last node that can still receive children are ignored.
    pub fn from_level_order(values: &[Option<i32>]) -> Self {
        let mut tree = BinaryTree::default();
        let Some(Some(first)) = values.first() else {
            return tree;
        };

        tree.root = Some(tree.push(*first));
        let mut parents = VecDeque::from([0usize]);
        let mut rest = values[1..].iter();

        while let Some(parent) = parents.pop_front() {
            match rest.next() {
                Some(Some(v)) => {
                    let child = tree.push(*v);
                    tree.nodes[parent].left = Some(child);
                    parents.push_back(child);
                }
                Some(None) => {}
                None => break,
            }
            match rest.next() {
                Some(Some(v)) => {
                    let child = tree.push(*v);
                    tree.nodes[parent].right = Some(child);
                    parents.push_back(child);
                }
                Some(None) => {}
                None => break,
            }
        }

        tree
    }

    fn push(&mut self, value: i32) -> usize {
        self.nodes.push(TreeNode {
            value,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    pub fn root(&self) -> Option<usize> {
        self.root
    }

    pub fn node(&self, slot: usize) -> Option<&TreeNode> {
        self.nodes.get(slot)
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Value stored at `slot`. Unknown slots read as 0.
    pub fn value(&self, slot: usize) -> i32 {
        self.nodes.get(slot).map_or(0, |n| n.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_classic_example() {
        let tree =
            BinaryTree::from_level_order(&[Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]);
        assert_eq!(tree.len(), 5);
        let root = tree.node(tree.root().unwrap()).unwrap();
        assert_eq!(root.value, 3);
        assert_eq!(tree.value(root.left.unwrap()), 9);
        let right = tree.node(root.right.unwrap()).unwrap();
        assert_eq!(right.value, 20);
        assert_eq!(tree.value(right.left.unwrap()), 15);
        assert_eq!(tree.value(right.right.unwrap()), 7);
    }

    #[test]
    fn leading_none_is_empty_tree() {
        assert!(BinaryTree::from_level_order(&[None, Some(1)]).is_empty());
        assert!(BinaryTree::from_level_order(&[]).root().is_none());
    }

    #[test]
    fn trailing_missing_children_are_fine() {
        let tree = BinaryTree::from_level_order(&[Some(1), None, Some(2)]);
        let root = tree.node(0).unwrap();
        assert!(root.left.is_none());
        assert_eq!(tree.value(root.right.unwrap()), 2);
    }
}
