use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, error, log_enabled, trace, Level};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use super::code_map::CodeMap;
use crate::error::{HuffError, Result};
use crate::tools::freq_count::{frequencies, FrequencyEntry};

/// A node in the huffman tree. Leaves hold a symbol, internal nodes own both children.
#[derive(Debug, Clone)]
pub enum Node<S> {
    Leaf {
        weight: u64,
        symbol: S,
    },
    Internal {
        weight: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// Join two nodes under a new parent. The first node goes on the left (code bit 0).
    /// Fails with WeightOverflow if the combined weight does not fit in a u64.
    pub fn merge(left: Self, right: Self) -> Result<Self> {
        let weight = left
            .weight()
            .checked_add(right.weight())
            .ok_or(HuffError::WeightOverflow)?;
        Ok(Node::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

/// Heap slot ordered by weight alone so BinaryHeap pops the lightest node first.
/// Nodes of equal weight come off in whatever order the heap yields them.
struct Lightest<S>(Node<S>);

impl<S> PartialEq for Lightest<S> {
    fn eq(&self, other: &Self) -> bool {
        self.0.weight() == other.0.weight()
    }
}

impl<S> Eq for Lightest<S> {}

impl<S> PartialOrd for Lightest<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Lightest<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.weight().cmp(&self.0.weight())
    }
}

/// Pull the lightest node off the heap.
fn pop_lightest<S>(heap: &mut BinaryHeap<Lightest<S>>) -> Result<Node<S>> {
    match heap.pop() {
        Some(Lightest(node)) => Ok(node),
        None => {
            error!("Priority queue emptied before the tree was complete");
            Err(HuffError::MalformedTree {
                reason: "priority queue ran dry during merge",
            })
        }
    }
}

/// A fully built huffman tree. The tree exists only to produce codes; `into_codes` consumes it.
#[derive(Debug, Clone)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S> HuffmanTree<S> {
    /// Build the tree by repeatedly merging the two lightest nodes until one remains.
    pub fn from_frequencies(entries: Vec<FrequencyEntry<S>>) -> Result<Self> {
        if entries.is_empty() {
            return Err(HuffError::EmptyInput);
        }

        // Every entry starts out as a leaf on the heap
        let mut heap = entries
            .into_iter()
            .map(|e| {
                Lightest(Node::Leaf {
                    weight: e.count,
                    symbol: e.symbol,
                })
            })
            .collect::<BinaryHeap<_>>();
        trace!("Merging {} leaves", heap.len());

        // ...then pare it down to one single node with child nodes.
        while heap.len() > 1 {
            let first = pop_lightest(&mut heap)?;
            let second = pop_lightest(&mut heap)?;
            heap.push(Lightest(Node::merge(first, second)?));
        }

        let root = pop_lightest(&mut heap)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Total weight of the tree, which is the length of the counted input.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Number of edges on the longest root to leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => deepest = deepest.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((left.as_ref(), depth + 1));
                    stack.push((right.as_ref(), depth + 1));
                }
            }
        }
        deepest
    }

    pub fn leaf_count(&self) -> usize {
        let mut leaves = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => leaves += 1,
                Node::Internal { left, right, .. } => {
                    stack.push(left.as_ref());
                    stack.push(right.as_ref());
                }
            }
        }
        leaves
    }
}

impl<S> HuffmanTree<S>
where
    S: Eq + Hash + Debug,
{
    /// Dump the tree shape at trace level.
    pub fn log_structure(&self) {
        if !log_enabled!(Level::Trace) {
            return;
        }
        trace!("Huffman tree structure:");
        let mut stack = vec![(&self.root, 0_usize, "root")];
        while let Some((node, depth, label)) = stack.pop() {
            let indent = "  ".repeat(depth);
            match node {
                Node::Leaf { weight, symbol } => {
                    trace!("{}{}-> Leaf {:?} [weight: {}]", indent, label, symbol, weight)
                }
                Node::Internal {
                    weight,
                    left,
                    right,
                } => {
                    trace!("{}{}-> Internal [weight: {}]", indent, label, weight);
                    stack.push((right.as_ref(), depth + 1, "R"));
                    stack.push((left.as_ref(), depth + 1, "L"));
                }
            }
        }
    }

    /// Walk the tree and give every leaf its path as a code: '0' for left, '1' for right.
    /// A tree that is a single leaf gets the code "0", since an empty code can't be written.
    pub fn into_codes(self) -> Result<CodeMap<S>> {
        let mut codes: FxHashMap<S, String> = FxHashMap::default();

        let root = match self.root {
            Node::Leaf { symbol, .. } => {
                codes.insert(symbol, "0".to_string());
                return Ok(CodeMap::from_map(codes));
            }
            internal => internal,
        };

        // Explicit stack so a lopsided tree over a large alphabet can't blow the call stack
        let mut stack = vec![(root, String::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => match codes.entry(symbol) {
                    Entry::Occupied(seen) => {
                        return Err(HuffError::DuplicateSymbol {
                            symbol: format!("{:?}", seen.key()),
                        })
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(path);
                    }
                },
                Node::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push('1');
                    stack.push((*right, right_path));

                    let mut left_path = path;
                    left_path.push('0');
                    stack.push((*left, left_path));
                }
            }
        }
        Ok(CodeMap::from_map(codes))
    }
}

/// Build a code map from frequency entries. Each entry must carry a distinct symbol.
pub fn build_codes<S>(entries: Vec<FrequencyEntry<S>>) -> Result<CodeMap<S>>
where
    S: Eq + Hash + Debug,
{
    let tree = HuffmanTree::from_frequencies(entries)?;
    debug!(
        "Built tree: {} leaves, depth {}, weight {}",
        tree.leaf_count(),
        tree.depth(),
        tree.weight()
    );
    tree.log_structure();
    tree.into_codes()
}

/// Count the symbols and build their code map in one step.
pub fn huffman_codes<S, I>(symbols: I) -> Result<CodeMap<S>>
where
    S: Eq + Hash + Debug,
    I: IntoIterator<Item = S>,
{
    build_codes(frequencies(symbols)?)
}

/// Build one code map per batch, in parallel. Batches share nothing; an empty batch yields
/// EmptyInput in its own slot without affecting the others.
pub fn huffman_codes_batch<S, B>(batches: &[B]) -> Vec<Result<CodeMap<S>>>
where
    S: Eq + Hash + Debug + Clone + Send + Sync,
    B: AsRef<[S]> + Sync,
{
    debug!("Building codes for {} batches", batches.len());
    batches
        .par_iter()
        .map(|batch| huffman_codes(batch.as_ref().iter().cloned()))
        .collect()
}
