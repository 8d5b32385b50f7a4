use std::collections::HashMap;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocId;

/// Per-document bookkeeping the resolver needs: token counts per field
/// (for length normalization) and the stored field text (for rendering
/// results outside the engine).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentStore {
    doc_info: HashMap<DocId, HashMap<String, u32>>,
    docs: HashMap<DocId, HashMap<String, String>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        DocumentStore::default()
    }

    pub fn record(
        &mut self,
        doc_id: DocId,
        field_lengths: HashMap<String, u32>,
        stored_fields: HashMap<String, String>,
    ) {
        self.doc_info.insert(doc_id, field_lengths);
        self.docs.insert(doc_id, stored_fields);
    }

    /// Token counts per field. An unknown id means the builder and store
    /// went out of sync, which is a data-integrity bug in the caller, not
    /// a normal miss.
    pub fn field_lengths(&self, doc_id: DocId) -> Result<&HashMap<String, u32>> {
        self.doc_info.get(&doc_id).ok_or_else(|| {
            Error::new(
                ErrorKind::NotFound,
                format!("document {} not in store", doc_id),
            )
        })
    }

    pub fn field_length(&self, doc_id: DocId, field: &str) -> Result<u32> {
        Ok(self
            .field_lengths(doc_id)?
            .get(field)
            .copied()
            .unwrap_or(0))
    }

    /// Stored field text for result rendering.
    pub fn stored(&self, doc_id: DocId) -> Result<&HashMap<String, String>> {
        self.docs.get(&doc_id).ok_or_else(|| {
            Error::new(
                ErrorKind::NotFound,
                format!("document {} not in store", doc_id),
            )
        })
    }

    pub fn contains(&self, doc_id: DocId) -> bool {
        self.doc_info.contains_key(&doc_id)
    }

    pub fn len(&self) -> usize {
        self.doc_info.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_info.is_empty()
    }

    pub fn doc_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.doc_info.keys().copied()
    }
}
