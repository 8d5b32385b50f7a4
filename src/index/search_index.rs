use std::collections::HashMap;
use crate::core::config::IndexConfig;
use crate::core::types::DocId;
use crate::index::posting::{Posting, TermPostings};
use crate::index::store::DocumentStore;
use crate::index::trie::Trie;

/// The built, read-only index: one trie per indexed field, the document
/// store, and the configuration that shaped both. Queries share it freely;
/// nothing here mutates after `IndexBuilder::build`. Rebuilding produces a
/// fresh value which the handle swaps in whole.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    pub config: IndexConfig,
    /// Stage names the analyzer actually ran, recorded so the serialized
    /// index carries its pipeline identity.
    pub pipeline: Vec<String>,
    tries: HashMap<String, Trie>,
    store: DocumentStore,
    doc_count: usize,
}

impl SearchIndex {
    /// An index over zero documents. Valid, and every query against it
    /// resolves to empty results.
    pub fn empty(config: IndexConfig) -> Self {
        let tries = config
            .fields
            .iter()
            .map(|f| (f.clone(), Trie::new()))
            .collect();
        SearchIndex {
            config,
            pipeline: Vec::new(),
            tries,
            store: DocumentStore::new(),
            doc_count: 0,
        }
    }

    pub(crate) fn set_pipeline(&mut self, stages: Vec<String>) {
        self.pipeline = stages;
    }

    pub(crate) fn record_document(
        &mut self,
        doc_id: DocId,
        field_lengths: HashMap<String, u32>,
        stored_fields: HashMap<String, String>,
    ) {
        self.store.record(doc_id, field_lengths, stored_fields);
        self.doc_count += 1;
    }

    /// Add or increment the posting for (term, doc, field). Empty terms
    /// are a degenerate pipeline output and are dropped silently; fields
    /// outside the configured set are ignored the same way.
    pub(crate) fn insert(&mut self, field: &str, term: &str, doc_id: DocId) {
        if let Some(trie) = self.tries.get_mut(field) {
            trie.insert(term, doc_id);
        }
    }

    pub(crate) fn trie_mut(&mut self, field: &str) -> Option<&mut Trie> {
        self.tries.get_mut(field)
    }

    pub fn trie(&self, field: &str) -> Option<&Trie> {
        self.tries.get(field)
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Exact-term postings across every field trie. Absence of the term is
    /// an empty result, not an error.
    pub fn lookup_exact(&self, term: &str) -> TermPostings {
        let mut result = TermPostings::new();
        for field in &self.config.fields {
            let Some(node) = self.tries.get(field).and_then(|t| t.exact(term)) else {
                continue;
            };
            for (&doc_id, &tf) in &node.docs {
                result.push(Posting {
                    doc_id,
                    field: field.clone(),
                    term_freq: tf,
                });
            }
        }
        result
    }

    /// Prefix-expanded postings across every field trie. Each matched
    /// subtree is merged per document first, so scoring sees one posting
    /// per (doc, field).
    pub fn lookup_prefix(&self, prefix: &str) -> TermPostings {
        let mut result = TermPostings::new();
        for field in &self.config.fields {
            let Some(trie) = self.tries.get(field) else {
                continue;
            };
            for (doc_id, tf) in trie.prefix(prefix) {
                result.push(Posting {
                    doc_id,
                    field: field.clone(),
                    term_freq: tf,
                });
            }
        }
        result
    }
}
