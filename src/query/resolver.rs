use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use crate::analysis::analyzer::Analyzer;
use crate::core::config::IndexConfig;
use crate::core::types::DocId;
use crate::index::posting::{intersect_docs, union_docs, TermPostings};
use crate::index::search_index::SearchIndex;
use crate::query::types::QueryMode;
use crate::scoring::scorer::{Scorer, TermStats, TfIdfScorer};
use crate::search::results::{SearchHit, SearchResults};

/// Resolves a raw query string against a built index: tokenize with the
/// build-time pipeline, look terms up in the tries, combine per the
/// boolean mode, score, rank.
pub struct QueryResolver {
    analyzer: Analyzer,
    scorer: Box<dyn Scorer>,
}

impl QueryResolver {
    pub fn new(config: &IndexConfig) -> Self {
        QueryResolver {
            analyzer: Analyzer::from_config(&config.pipeline),
            scorer: Box::new(TfIdfScorer),
        }
    }

    pub fn with_analyzer(analyzer: Analyzer) -> Self {
        QueryResolver {
            analyzer,
            scorer: Box::new(TfIdfScorer),
        }
    }

    /// Ranked search. An empty or all-stop-word query is an empty result,
    /// not an error; so is a query whose terms match nothing.
    pub fn search(&self, index: &SearchIndex, query: &str, mode: QueryMode) -> SearchResults {
        let tokens = self.analyzer.analyze(query);
        if tokens.is_empty() || index.doc_count() == 0 {
            return SearchResults::empty();
        }

        // Every term resolves exactly; only the final token of the raw
        // query additionally expands by prefix, which is what makes
        // search-as-you-type return "configure" for "confi". The
        // asymmetry is deliberate: earlier words were finished by the
        // user, the last one may still be mid-keystroke.
        let last = tokens.len() - 1;
        let terms: Vec<TermPostings> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                if i == last && index.config.expand {
                    index.lookup_prefix(&token.text)
                } else {
                    index.lookup_exact(&token.text)
                }
            })
            .collect();

        debug!(
            query,
            terms = tokens.len(),
            mode = ?mode,
            "resolved query terms"
        );

        let matched: BTreeSet<DocId> = match mode {
            QueryMode::And => {
                // Any term with no postings empties the intersection.
                if terms.iter().any(|t| t.is_empty()) {
                    return SearchResults::empty();
                }
                intersect_docs(&terms)
            }
            QueryMode::Or => union_docs(&terms),
        };
        if matched.is_empty() {
            return SearchResults::empty();
        }

        let hits = self.score(index, &terms, &matched);
        SearchResults::from_hits(hits, index.config.limit_results)
    }

    /// Sum each matched document's contributions over query terms and
    /// fields: boost × tf / field_length × idf.
    fn score(
        &self,
        index: &SearchIndex,
        terms: &[TermPostings],
        matched: &BTreeSet<DocId>,
    ) -> Vec<SearchHit> {
        let total_docs = index.doc_count();
        let mut scores: HashMap<DocId, f32> = HashMap::new();

        for term in terms {
            let stats = TermStats {
                doc_freq: term.doc_freq(),
                total_docs,
            };

            for posting in &term.postings {
                if !matched.contains(&posting.doc_id) {
                    continue;
                }
                let field_length = index
                    .store()
                    .field_length(posting.doc_id, &posting.field)
                    .unwrap_or(0);
                let boost = index.config.boost(&posting.field);
                let contribution =
                    self.scorer
                        .score(posting.term_freq, field_length, boost, &stats);
                *scores.entry(posting.doc_id).or_insert(0.0) += contribution;
            }
        }

        scores
            .into_iter()
            .map(|(doc_id, score)| SearchHit { doc_id, score })
            .collect()
    }
}
