// --- File: src/core/trie.rs
use std::collections::HashMap;

#[derive(Clone, Debug)]
struct TrieNode {
    children: HashMap<char, usize>,
    /// Set when the path from the root to this node spells a whole symbol.
    terminal: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: HashMap::new(), terminal: false }
    }
}

/// An arena-backed character trie over the symbol inventory.
/// Used to split free text into the longest known symbols.
#[derive(Clone, Debug)]
pub struct SymbolTrie {
    nodes: Vec<TrieNode>,
}

impl SymbolTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()] }
    }

    /// Inserts a symbol. O(k) where k is the symbol length in chars.
    pub fn insert(&mut self, symbol: &str) {
        let mut node_idx = 0;
        for c in symbol.chars() {
            node_idx = match self.nodes[node_idx].children.get(&c) {
                Some(&id) => id,
                None => {
                    let new_node_id = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[node_idx].children.insert(c, new_node_id);
                    new_node_id
                }
            };
        }
        self.nodes[node_idx].terminal = true;
    }

    /// Byte length of the longest symbol that prefixes `text`, if any.
    pub fn longest_prefix(&self, text: &str) -> Option<usize> {
        let mut node_idx = 0;
        let mut best = None;
        for (offset, c) in text.char_indices() {
            match self.nodes[node_idx].children.get(&c) {
                Some(&next_idx) => node_idx = next_idx,
                None => break,
            }
            if self.nodes[node_idx].terminal {
                best = Some(offset + c.len_utf8());
            }
        }
        best
    }

    /// Greedy longest-match segmentation.
    ///
    /// Characters that start no known symbol come out as single-char segments
    /// flagged `false`, so callers can still score them (as unknown).
    pub fn segment<'a>(&self, text: &'a str) -> Vec<(&'a str, bool)> {
        let mut segments = Vec::new();
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            let (len, known) = match self.longest_prefix(rest) {
                Some(len) => (len, true),
                None => (c.len_utf8(), false),
            };
            segments.push((&rest[..len], known));
            rest = &rest[len..];
        }
        segments
    }
}

impl Default for SymbolTrie {
    fn default() -> Self {
        Self::new()
    }
}
