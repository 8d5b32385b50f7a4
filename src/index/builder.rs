use std::collections::HashMap;
use tracing::debug;

use crate::analysis::analyzer::Analyzer;
use crate::core::config::IndexConfig;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::Document;
use crate::index::search_index::SearchIndex;

/// Feeds documents through the analysis pipeline and into the per-field
/// tries and document store. Field order and token order never change the
/// finished index; only the per-(term, doc, field) counts matter.
///
/// The only supported update path is a full rebuild: construct a new
/// builder, add every document, `build()`, publish.
pub struct IndexBuilder {
    analyzer: Analyzer,
    index: SearchIndex,
}

impl IndexBuilder {
    pub fn new(config: IndexConfig) -> Self {
        let analyzer = Analyzer::from_config(&config.pipeline);
        let mut index = SearchIndex::empty(config);
        index.set_pipeline(analyzer.stage_names());

        IndexBuilder { analyzer, index }
    }

    /// Use a caller-assembled pipeline instead of the configured one. The
    /// identical analyzer must then be handed to the query resolver.
    pub fn with_analyzer(config: IndexConfig, analyzer: Analyzer) -> Self {
        let mut index = SearchIndex::empty(config);
        index.set_pipeline(analyzer.stage_names());

        IndexBuilder { analyzer, index }
    }

    pub fn add_document(&mut self, doc: &Document) -> Result<()> {
        if self.index.store().contains(doc.id) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("document {} already indexed", doc.id),
            ));
        }

        let fields = self.index.config.fields.clone();
        let mut field_lengths: HashMap<String, u32> = HashMap::new();
        let mut stored_fields: HashMap<String, String> = HashMap::new();

        for field in &fields {
            let text = doc.get_field(field).unwrap_or("");
            let tokens = self.analyzer.analyze(text);
            field_lengths.insert(field.clone(), tokens.len() as u32);
            stored_fields.insert(field.clone(), text.to_string());

            for token in tokens {
                self.index.insert(field, &token.text, doc.id);
            }
        }

        debug!(doc_id = doc.id.value(), "indexed document");
        self.index.record_document(doc.id, field_lengths, stored_fields);
        Ok(())
    }

    pub fn add_documents<'a, I>(&mut self, docs: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Document>,
    {
        for doc in docs {
            self.add_document(doc)?;
        }
        Ok(())
    }

    pub fn build(self) -> SearchIndex {
        debug!(
            docs = self.index.doc_count(),
            fields = self.index.config.fields.len(),
            "index build finished"
        );
        self.index
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocId;

    fn doc(id: u64, title: &str, body: &str) -> Document {
        let mut d = Document::new(DocId(id));
        d.add_field("title", title).add_field("body", body);
        d
    }

    #[test]
    fn every_pipeline_token_is_retrievable() {
        let mut builder = IndexBuilder::new(IndexConfig::default());
        let d = doc(7, "Project Setup", "How to configure the project");
        let analyzer = Analyzer::from_config(&IndexConfig::default().pipeline);

        builder.add_document(&d).unwrap();
        let index = builder.build();

        for field in ["title", "body"] {
            for token in analyzer.analyze(d.get_field(field).unwrap()) {
                let result = index.lookup_exact(&token.text);
                assert!(
                    result
                        .postings
                        .iter()
                        .any(|p| p.doc_id == DocId(7) && p.field == field && p.term_freq >= 1),
                    "token {:?} from {field} not found",
                    token.text
                );
            }
        }
    }

    #[test]
    fn field_lengths_count_pipeline_tokens() {
        let mut builder = IndexBuilder::new(IndexConfig::default());
        // "the" is a stop word; the stored length counts surviving tokens.
        builder.add_document(&doc(0, "Setup", "the quick setup")).unwrap();
        let index = builder.build();

        assert_eq!(index.store().field_length(DocId(0), "title").unwrap(), 1);
        assert_eq!(index.store().field_length(DocId(0), "body").unwrap(), 2);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut builder = IndexBuilder::new(IndexConfig::default());
        builder.add_document(&doc(0, "Setup", "")).unwrap();
        let err = builder.add_document(&doc(0, "Again", "")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn build_is_deterministic_across_insertion_order() {
        let docs = vec![
            doc(0, "Setup", "install and configure"),
            doc(4, "Administration", "managing users"),
            doc(5, "Project Setup", "project configuration"),
        ];

        let mut forward = IndexBuilder::new(IndexConfig::default());
        forward.add_documents(&docs).unwrap();
        let forward = forward.build();

        let mut reversed = IndexBuilder::new(IndexConfig::default());
        reversed.add_documents(docs.iter().rev()).unwrap();
        let reversed = reversed.build();

        let analyzer = Analyzer::from_config(&IndexConfig::default().pipeline);
        let mut terms: Vec<String> = docs
            .iter()
            .flat_map(|d| d.fields.values())
            .flat_map(|text| analyzer.analyze(text))
            .map(|t| t.text)
            .collect();
        terms.sort();
        terms.dedup();

        assert_eq!(forward.doc_count(), reversed.doc_count());
        for term in &terms {
            let a = forward.lookup_exact(term);
            let b = reversed.lookup_exact(term);
            assert_eq!(a.doc_freq(), b.doc_freq(), "df mismatch for {term}");
            let mut ap = a.postings;
            let mut bp = b.postings;
            ap.sort_by(|x, y| (x.doc_id, &x.field).cmp(&(y.doc_id, &y.field)));
            bp.sort_by(|x, y| (x.doc_id, &x.field).cmp(&(y.doc_id, &y.field)));
            assert_eq!(ap, bp, "posting mismatch for {term}");
        }
    }

    #[test]
    fn missing_fields_index_as_empty() {
        let mut builder = IndexBuilder::new(IndexConfig::default());
        let mut d = Document::new(DocId(1));
        d.add_field("title", "Setup");
        builder.add_document(&d).unwrap();
        let index = builder.build();

        assert_eq!(index.store().field_length(DocId(1), "body").unwrap(), 0);
    }
}
