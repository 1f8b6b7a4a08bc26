pub mod huffman;
pub mod utils;

/// The weight of a tree node: the sum of the occurrence counts of every
/// symbol below it. For a leaf, this is the symbol's frequency in the input.
pub type Weight = usize;

/// A prefix code: the path from the root down to a leaf, with `'0'` for each
/// left edge and `'1'` for each right edge. The root's code is the empty
/// string, which is also the code of the single symbol of a degenerate
/// one-leaf tree.
pub type Code = String;

/// Handle addressing a node inside a tree's arena.
///
/// Nodes reference their children and parent through these indices instead of
/// owning pointers, since the parent back-reference would otherwise form a
/// cycle.
pub type NodeIdx = usize;
