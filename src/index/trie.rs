use std::collections::BTreeMap;
use crate::core::types::DocId;

/// Index of a node within the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

pub const ROOT: NodeId = NodeId(0);

/// One arena slot. A node is terminal exactly when `docs` is non-empty;
/// its posting set then belongs to the token spelled by the root path.
/// Child links are arena indices, never references, so the structure
/// stays acyclic for ownership and serializes as plain data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrieNode {
    pub children: BTreeMap<char, NodeId>,
    /// Distinct documents containing this exact token (within this trie).
    pub df: u32,
    /// doc id → term frequency for this exact token.
    pub docs: BTreeMap<DocId, u32>,
}

impl TrieNode {
    pub fn is_terminal(&self) -> bool {
        !self.docs.is_empty()
    }
}

/// Prefix tree over tokens. Fan-out is a char-keyed map, so any Unicode
/// scalar works as an edge label; unseen characters just grow new edges.
/// Immutable once the owning index is built; rebuild is the mutation path.
#[derive(Debug, Clone, PartialEq)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::default()],
        }
    }

    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0 as usize]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of terminal nodes, i.e. distinct tokens held by this trie.
    pub fn term_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_terminal()).count()
    }

    /// Record one occurrence of `term` in `doc_id`. The empty term is a
    /// degenerate pipeline output and is silently ignored. Returns true
    /// when this is the first occurrence for the (term, doc) pair, which
    /// is the moment df ticks up.
    pub fn insert(&mut self, term: &str, doc_id: DocId) -> bool {
        if term.is_empty() {
            return false;
        }

        let mut current = ROOT;
        for ch in term.chars() {
            current = match self.nodes[current.0 as usize].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = NodeId(self.nodes.len() as u32);
                    self.nodes.push(TrieNode::default());
                    self.nodes[current.0 as usize].children.insert(ch, child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current.0 as usize];
        let counter = node.docs.entry(doc_id).or_insert(0);
        *counter += 1;
        let first = *counter == 1;
        if first {
            node.df += 1;
        }
        first
    }

    /// Install a full posting set for a term, as read back from a
    /// serialized index. Replaces whatever the node held.
    pub(crate) fn set_term(&mut self, term: &str, docs: BTreeMap<DocId, u32>) {
        if term.is_empty() || docs.is_empty() {
            return;
        }

        let mut current = ROOT;
        for ch in term.chars() {
            current = match self.nodes[current.0 as usize].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = NodeId(self.nodes.len() as u32);
                    self.nodes.push(TrieNode::default());
                    self.nodes[current.0 as usize].children.insert(ch, child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current.0 as usize];
        node.df = docs.len() as u32;
        node.docs = docs;
    }

    fn walk(&self, path: &str) -> Option<NodeId> {
        let mut current = ROOT;
        for ch in path.chars() {
            current = *self.node(current).children.get(&ch)?;
        }
        Some(current)
    }

    /// Postings for a path match ending at a terminal node. Absence is a
    /// normal result, never an error.
    pub fn exact(&self, term: &str) -> Option<&TrieNode> {
        let node = self.walk(term).map(|id| self.node(id))?;
        if node.is_terminal() {
            Some(node)
        } else {
            None
        }
    }

    /// Union of postings over every terminal reachable under `prefix`,
    /// the prefix's own node included. Term frequencies are summed per
    /// document across the matched terminals.
    pub fn prefix(&self, prefix: &str) -> BTreeMap<DocId, u32> {
        let mut merged = BTreeMap::new();
        let Some(start) = self.walk(prefix) else {
            return merged;
        };

        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            for (&doc_id, &tf) in &node.docs {
                *merged.entry(doc_id).or_insert(0) += tf;
            }
            stack.extend(node.children.values().copied());
        }

        merged
    }
}
