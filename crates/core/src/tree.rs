//! Huffman tree construction.
//!
//! Nodes live in an arena and refer to their children by index. Every node
//! is pushed into the priority queue exactly once, right after it is created,
//! so its arena index doubles as its queue sequence number: leaves take
//! `0..n` in input order, merged nodes take `n..` in merge order. The queue
//! compares `(probability, index)` lexicographically, which makes every tie
//! resolve the same way on every platform.
//!
//! # Code assignment
//!
//! Walking down from the root, `left` appends `0` and `right` appends `1`.
//! The walk uses an explicit stack so deep trees cannot exhaust the call
//! stack.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::Symbol;

/// Index of a node in the arena.
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind<S> {
    Leaf(S),
    Internal { left: NodeId, right: NodeId },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node<S> {
    pub probability: f64,
    pub kind: NodeKind<S>,
}

/// Queue key: probability first, then sequence number.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    probability: f64,
    id: NodeId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.probability
            .total_cmp(&other.probability)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

/// A strict binary tree built bottom-up; the root is the last node.
#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanTree<S> {
    nodes: Vec<Node<S>>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Build the tree from leaves given in insertion order.
    ///
    /// A single leaf becomes the root on its own; its code is the empty
    /// string.
    ///
    /// # Errors
    /// `Error::EmptyInput` if `leaves` is empty.
    pub fn build<I>(leaves: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
    {
        let mut nodes: Vec<Node<S>> = leaves
            .into_iter()
            .map(|(symbol, probability)| Node {
                probability,
                kind: NodeKind::Leaf(symbol),
            })
            .collect();

        if nodes.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut queue: BinaryHeap<Reverse<QueueEntry>> = nodes
            .iter()
            .enumerate()
            .map(|(id, node)| {
                Reverse(QueueEntry {
                    probability: node.probability,
                    id,
                })
            })
            .collect();

        // Loop invariant: queue.len() > 1 guarantees both pops succeed.
        while queue.len() > 1 {
            let (Some(Reverse(left)), Some(Reverse(right))) = (queue.pop(), queue.pop()) else {
                break;
            };

            let id = nodes.len();
            let probability = left.probability + right.probability;
            nodes.push(Node {
                probability,
                kind: NodeKind::Internal {
                    left: left.id,
                    right: right.id,
                },
            });
            queue.push(Reverse(QueueEntry { probability, id }));
        }

        Ok(Self { nodes })
    }

    pub fn root(&self) -> NodeId {
        self.nodes.len() - 1
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<S>> {
        self.nodes.get(id)
    }

    /// Should be close to 1.0 for a normalized table.
    pub fn root_probability(&self) -> f64 {
        self.nodes[self.root()].probability
    }

    /// Every n-leaf tree has n - 1 internal nodes.
    pub fn leaf_count(&self) -> usize {
        (self.nodes.len() + 1) / 2
    }

    /// Walk the tree and return `(symbol, code)` for every leaf.
    ///
    /// Leaves come out left to right.
    pub fn codes(&self) -> Vec<(S, String)> {
        let mut codes = Vec::with_capacity(self.leaf_count());
        let mut stack: Vec<(NodeId, String)> = vec![(self.root(), String::new())];

        while let Some((id, code)) = stack.pop() {
            match &self.nodes[id].kind {
                NodeKind::Leaf(symbol) => codes.push((symbol.clone(), code)),
                NodeKind::Internal { left, right } => {
                    let mut right_code = code.clone();
                    right_code.push('1');
                    let mut left_code = code;
                    left_code.push('0');
                    // right first so left is popped first
                    stack.push((*right, right_code));
                    stack.push((*left, left_code));
                }
            }
        }

        codes
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root(), 0usize)];
        while let Some((id, depth)) = stack.pop() {
            match &self.nodes[id].kind {
                NodeKind::Leaf(_) => deepest = deepest.max(depth),
                NodeKind::Internal { left, right } => {
                    stack.push((*left, depth + 1));
                    stack.push((*right, depth + 1));
                }
            }
        }
        deepest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;

    fn tree_for(message: &str) -> HuffmanTree<char> {
        let table = FrequencyTable::from_sequence(message.chars()).unwrap();
        HuffmanTree::build(table.ordered_leaves()).unwrap()
    }

    #[test]
    fn test_empty_leaves() {
        let leaves: Vec<(char, f64)> = Vec::new();
        assert_eq!(HuffmanTree::build(leaves).unwrap_err(), Error::EmptyInput);
    }

    #[test]
    fn test_single_leaf_is_root() {
        let tree = tree_for("aaaa");
        assert_eq!(tree.root(), 0);
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.codes(), vec![('a', String::new())]);
    }

    #[test]
    fn test_root_probability() {
        let tree = tree_for("the quick brown fox jumps over the lazy dog");
        assert!((tree.root_probability() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_merge_order_abracadabra() {
        let tree = tree_for("abracadabra");

        // leaves c d b r a take ids 0..5; merges follow
        assert_eq!(
            tree.node(5).unwrap().kind,
            NodeKind::Internal { left: 0, right: 1 }
        );
        assert_eq!(
            tree.node(6).unwrap().kind,
            NodeKind::Internal { left: 2, right: 3 }
        );
        assert_eq!(
            tree.node(7).unwrap().kind,
            NodeKind::Internal { left: 5, right: 6 }
        );
        assert_eq!(
            tree.node(8).unwrap().kind,
            NodeKind::Internal { left: 4, right: 7 }
        );
        assert_eq!(tree.root(), 8);
        assert_eq!(tree.leaf_count(), 5);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_codes_abracadabra() {
        let codes = tree_for("abracadabra").codes();
        assert_eq!(
            codes,
            vec![
                ('a', "0".to_string()),
                ('c', "100".to_string()),
                ('d', "101".to_string()),
                ('b', "110".to_string()),
                ('r', "111".to_string()),
            ]
        );
    }

    #[test]
    fn test_equal_weights_balanced() {
        let codes = tree_for("abcd").codes();
        assert_eq!(
            codes,
            vec![
                ('a', "00".to_string()),
                ('b', "01".to_string()),
                ('c', "10".to_string()),
                ('d', "11".to_string()),
            ]
        );
    }

    #[test]
    fn test_deep_skewed_tree() {
        // Fibonacci-like weights produce a maximally skewed tree
        let mut weights = vec![1u64, 1];
        while weights.len() < 40 {
            let n = weights.len();
            weights.push(weights[n - 1] + weights[n - 2]);
        }
        let counts: Vec<(u32, i64)> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (i as u32, w as i64))
            .collect();
        let table = FrequencyTable::from_counts(counts).unwrap();
        let tree = HuffmanTree::build(table.ordered_leaves()).unwrap();

        assert_eq!(tree.codes().len(), 40);
        assert!(tree.depth() >= 30);
    }
}
