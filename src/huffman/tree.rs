use std::collections::HashMap;
use std::hash::Hash;

use anyhow::{bail, Result};
use log::debug;

use crate::{Weight, NodeIdx};

/// A node of a [`HuffmanTree`].
///
/// A node is a leaf iff it carries a symbol; leaves have no children, while
/// internal nodes always have both. `parent` is a weak back-reference for
/// navigation only: ownership flows root-to-leaves through the tree's arena.
#[derive(Debug, Clone)]
pub struct TreeNode<S> {
    pub weight: Weight,
    pub symbol: Option<S>,
    pub left: Option<NodeIdx>,
    pub right: Option<NodeIdx>,
    pub parent: Option<NodeIdx>,
}

impl<S> TreeNode<S> {
    fn leaf(symbol: S, weight: Weight) -> Self {
        Self {
            weight,
            symbol: Some(symbol),
            left: None,
            right: None,
            parent: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.symbol.is_some()
    }

    pub fn is_internal(&self) -> bool {
        self.symbol.is_none()
    }

    /// True for the unique node with no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// A Huffman tree built from the symbol frequencies of an input sequence.
///
/// Nodes live in an arena indexed by [`NodeIdx`]; the first
/// `distinct-symbol-count` entries are the leaves, in first-encounter order,
/// followed by the internal nodes in merge order. The tree is immutable once
/// built.
#[derive(Debug, Clone)]
pub struct HuffmanTree<S> {
    nodes: Vec<TreeNode<S>>,
    root: NodeIdx,
}

impl<S: Eq + Hash + Clone> HuffmanTree<S> {
    /// Builds the tree for the given sequence by counting symbol frequencies
    /// and repeatedly merging the two lowest-weight pending nodes until a
    /// single root remains.
    ///
    /// Ties on the minimal weight are broken by position: the scan is
    /// left-to-right over the pending list and the first minimal entry wins.
    /// Since leaves enter the list in first-encounter order and merged nodes
    /// are appended at the tail, the resulting shape (and therefore every
    /// code) is fully determined by the input sequence.
    ///
    /// Fails on an empty sequence.
    pub fn from_symbols(symbols: &[S]) -> Result<Self> {
        let frequencies = count_frequencies(symbols);

        if frequencies.is_empty() {
            bail!("cannot build a Huffman tree from an empty symbol sequence");
        }

        let mut nodes: Vec<TreeNode<S>> = frequencies
            .into_iter()
            .map(|(symbol, weight)| TreeNode::leaf(symbol, weight))
            .collect();

        let leaves = nodes.len();
        let mut pending: Vec<NodeIdx> = (0..nodes.len()).collect();

        while pending.len() > 1 {
            let first = find_smallest(&nodes, &pending, None);
            let second = find_smallest(&nodes, &pending, Some(first));

            let left = pending[first];
            let right = pending[second];

            let merged = nodes.len();
            nodes.push(TreeNode {
                weight: nodes[left].weight + nodes[right].weight,
                symbol: None,
                left: Some(left),
                right: Some(right),
                parent: None,
            });
            nodes[left].parent = Some(merged);
            nodes[right].parent = Some(merged);

            // Drop the two merged entries keeping the relative order of the
            // rest, then append the new node at the tail.
            let (lo, hi) = if first < second {
                (first, second)
            } else {
                (second, first)
            };
            pending.remove(hi);
            pending.remove(lo);
            pending.push(merged);
        }

        let root = pending[0];
        debug!(
            "built Huffman tree: {} leaves, {} nodes, total weight {}",
            leaves,
            nodes.len(),
            nodes[root].weight
        );

        Ok(Self { nodes, root })
    }
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> NodeIdx {
        self.root
    }

    pub fn node(&self, index: NodeIdx) -> &TreeNode<S> {
        &self.nodes[index]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The length of the input sequence the tree was built from.
    pub fn total_weight(&self) -> Weight {
        self.nodes[self.root].weight
    }

    /// True when the alphabet had a single distinct symbol, so the root is
    /// itself a leaf and its code is the empty string.
    pub fn is_degenerate(&self) -> bool {
        self.nodes[self.root].is_leaf()
    }

    /// Pre-order traversal passing each node together with its accumulated
    /// path code: `'0'` appended on left edges, `'1'` on right edges, empty
    /// at the root.
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&TreeNode<S>, &str),
    {
        self.walk_node(self.root, String::new(), &mut visit);
    }

    fn walk_node<F>(&self, index: NodeIdx, code: String, visit: &mut F)
    where
        F: FnMut(&TreeNode<S>, &str),
    {
        let node = &self.nodes[index];
        visit(node, &code);

        if let Some(left) = node.left {
            self.walk_node(left, format!("{code}0"), visit);
        }
        if let Some(right) = node.right {
            self.walk_node(right, format!("{code}1"), visit);
        }
    }
}

/// Counts the occurrences of each distinct symbol, preserving the order in
/// which distinct symbols are first encountered. That order feeds the
/// tie-break rule of the merge loop, so it is part of the contract.
fn count_frequencies<S: Eq + Hash + Clone>(symbols: &[S]) -> Vec<(S, Weight)> {
    let mut position: HashMap<&S, usize> = HashMap::new();
    let mut frequencies: Vec<(S, Weight)> = Vec::new();

    for symbol in symbols {
        match position.get(symbol) {
            Some(&index) => frequencies[index].1 += 1,
            None => {
                position.insert(symbol, frequencies.len());
                frequencies.push((symbol.clone(), 1));
            }
        }
    }
    frequencies
}

/// Position (within `pending`) of the lowest-weight entry, skipping `exclude`
/// if given. First minimal position wins on equal weights.
fn find_smallest<S>(
    nodes: &[TreeNode<S>],
    pending: &[NodeIdx],
    exclude: Option<usize>,
) -> usize {
    let mut smallest: Option<usize> = None;

    for (position, &index) in pending.iter().enumerate() {
        if Some(position) == exclude {
            continue;
        }
        match smallest {
            Some(best) if nodes[index].weight >= nodes[pending[best]].weight => {}
            _ => smallest = Some(position),
        }
    }
    smallest.expect("pending list holds at least two nodes")
}
