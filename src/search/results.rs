use std::cmp::Ordering;
use serde::{Serialize, Deserialize};
use crate::core::types::DocId;

/// Search results container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    pub hits: Vec<SearchHit>,
    pub total_hits: usize,
    pub max_score: f32,
}

impl SearchResults {
    pub fn empty() -> Self {
        SearchResults::default()
    }

    /// Sort hits and fill the summary fields. Descending score; equal
    /// scores break by ascending doc id so rankings are reproducible.
    pub fn from_hits(mut hits: Vec<SearchHit>, limit: usize) -> Self {
        hits.sort();
        let total_hits = hits.len();
        if limit > 0 && hits.len() > limit {
            hits.truncate(limit);
        }
        let max_score = hits.first().map(|h| h.score).unwrap_or(0.0);

        SearchResults {
            hits,
            total_hits,
            max_score,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Document with relevance score. The id resolves to title/breadcrumbs/url
/// through the document store, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: f32,
}

impl PartialEq for SearchHit {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.doc_id == other.doc_id
    }
}

impl Eq for SearchHit {}

impl PartialOrd for SearchHit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchHit {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse score order so sorting ranks best-first.
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
            .then(self.doc_id.cmp(&other.doc_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_sort_by_score_then_doc_id() {
        let hits = vec![
            SearchHit { doc_id: DocId(5), score: 0.5 },
            SearchHit { doc_id: DocId(0), score: 0.5 },
            SearchHit { doc_id: DocId(3), score: 0.9 },
        ];
        let results = SearchResults::from_hits(hits, 0);
        let order: Vec<u64> = results.hits.iter().map(|h| h.doc_id.0).collect();
        assert_eq!(order, vec![3, 0, 5]);
        assert_eq!(results.max_score, 0.9);
        assert_eq!(results.total_hits, 3);
    }

    #[test]
    fn limit_truncates_but_total_is_preserved() {
        let hits = (0..10)
            .map(|i| SearchHit { doc_id: DocId(i), score: i as f32 })
            .collect();
        let results = SearchResults::from_hits(hits, 3);
        assert_eq!(results.hits.len(), 3);
        assert_eq!(results.total_hits, 10);
        assert_eq!(results.hits[0].doc_id, DocId(9));
    }
}
