use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Index;

use anyhow::Result;
use log::debug;
use once_cell::unsync::OnceCell;

use crate::huffman::tree::HuffmanTree;
use crate::Code;

/// The symbol↔code bijection derived from a tree walk, one entry per leaf.
#[derive(Debug, Clone)]
struct CodeTable<S> {
    symbol_of: HashMap<Code, S>,
    code_of: HashMap<S, Code>,
}

impl<S: Eq + Hash + Clone> CodeTable<S> {
    fn derive(tree: &HuffmanTree<S>) -> Self {
        let mut symbol_of = HashMap::new();
        let mut code_of = HashMap::new();

        tree.walk(|node, code| {
            if let Some(symbol) = &node.symbol {
                let previous = symbol_of.insert(code.to_owned(), symbol.clone());
                assert!(
                    previous.is_none(),
                    "two leaves produced the same code {code:?}"
                );
                code_of.insert(symbol.clone(), code.to_owned());
            }
        });

        debug!("derived lookup table for {} symbols", symbol_of.len());
        Self { symbol_of, code_of }
    }
}

/// Encodes and decodes symbols against a Huffman tree built once from an
/// input sequence.
///
/// The lookup table is derived lazily on the first encode/decode call and
/// cached for the codec's lifetime; the tree is immutable after construction
/// so the cache is never invalidated.
pub struct HuffmanCodec<S> {
    tree: HuffmanTree<S>,
    table: OnceCell<CodeTable<S>>,
}

impl<S: Eq + Hash + Clone> HuffmanCodec<S> {
    /// Builds the tree for `symbols` and wraps it. Fails on an empty
    /// sequence.
    pub fn new(symbols: &[S]) -> Result<Self> {
        Ok(Self {
            tree: HuffmanTree::from_symbols(symbols)?,
            table: OnceCell::new(),
        })
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    fn table(&self) -> &CodeTable<S> {
        self.table.get_or_init(|| CodeTable::derive(&self.tree))
    }

    /// True when `symbol` is part of the alphabet the tree was built from.
    ///
    /// This is the membership check callers need to tell an unknown symbol
    /// apart from the legitimate empty code of a degenerate one-symbol tree,
    /// since [`encode`](Self::encode) returns `""` in both cases.
    pub fn contains(&self, symbol: &S) -> bool {
        self.table().code_of.contains_key(symbol)
    }

    /// The code for `symbol`, or the empty string if the symbol is not part
    /// of the alphabet.
    ///
    /// Note that in a degenerate one-symbol tree the single symbol's
    /// legitimate code is also the empty string; use
    /// [`contains`](Self::contains) to tell the two apart.
    pub fn encode(&self, symbol: &S) -> Code {
        self.table()
            .code_of
            .get(symbol)
            .cloned()
            .unwrap_or_default()
    }

    /// The symbol whose code is exactly `code`, or `None` if no leaf carries
    /// that code.
    pub fn decode(&self, code: &str) -> Option<&S> {
        self.table().symbol_of.get(code)
    }

    /// Concatenation of [`encode`](Self::encode) over `symbols`, with no
    /// separator. Unknown symbols contribute nothing to the output, so the
    /// result is not reversible by re-splitting on element count; use
    /// [`decode_string`](Self::decode_string), which walks the bit string.
    pub fn encode_sequence<'a, I>(&self, symbols: I) -> Code
    where
        S: 'a,
        I: IntoIterator<Item = &'a S>,
    {
        symbols
            .into_iter()
            .map(|symbol| self.encode(symbol))
            .collect()
    }

    /// Greedy streaming decode of `bits`: scan left to right accumulating a
    /// candidate code, and emit a symbol every time the candidate exactly
    /// matches a leaf's code. Prefix-freeness guarantees the first match is
    /// the only possible parse.
    ///
    /// Trailing bits that never complete a code are silently dropped; this
    /// is a known lossy edge of the contract, reported only at debug level.
    pub fn decode_string(&self, bits: &str) -> Vec<S> {
        let table = self.table();
        let mut decoded = Vec::new();
        let mut candidate = String::new();

        for bit in bits.chars() {
            candidate.push(bit);
            if let Some(symbol) = table.symbol_of.get(&candidate) {
                decoded.push(symbol.clone());
                candidate.clear();
            }
        }

        if !candidate.is_empty() {
            debug!(
                "dropping {} trailing bits that complete no code",
                candidate.len()
            );
        }
        decoded
    }

    /// Frequency-weighted mean code length in bits per input symbol.
    ///
    /// For a non-degenerate alphabet this sits within one bit of the
    /// entropy of the input's frequency distribution.
    pub fn expected_code_length(&self) -> f64 {
        let total = self.tree.total_weight() as f64;
        let mut weighted_bits = 0.0;

        self.tree.walk(|node, code| {
            if node.is_leaf() {
                weighted_bits += node.weight as f64 * code.len() as f64;
            }
        });
        weighted_bits / total
    }
}

/// Indexing shorthand for [`encode`](HuffmanCodec::encode): `&codec[&sym]`
/// is the symbol's code, or `""` when the symbol is unknown.
impl<S: Eq + Hash + Clone> Index<&S> for HuffmanCodec<S> {
    type Output = str;

    fn index(&self, symbol: &S) -> &str {
        self.table()
            .code_of
            .get(symbol)
            .map(String::as_str)
            .unwrap_or("")
    }
}
