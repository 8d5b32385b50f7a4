use std::collections::BTreeSet;
use crate::core::types::DocId;

/// One (term, document, field) occurrence record. Exists only with tf > 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: DocId,
    pub field: String,
    pub term_freq: u32,
}

/// Everything one resolved query term contributes: its postings across all
/// fields, the distinct documents behind them, and the document frequency
/// used for idf.
#[derive(Debug, Clone, Default)]
pub struct TermPostings {
    pub postings: Vec<Posting>,
    pub doc_set: BTreeSet<DocId>,
}

impl TermPostings {
    pub fn new() -> Self {
        TermPostings::default()
    }

    pub fn push(&mut self, posting: Posting) {
        self.doc_set.insert(posting.doc_id);
        self.postings.push(posting);
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Distinct documents containing the term in any field.
    pub fn doc_freq(&self) -> u32 {
        self.doc_set.len() as u32
    }
}

/// Documents present in every term's result set.
pub fn intersect_docs(terms: &[TermPostings]) -> BTreeSet<DocId> {
    let mut iter = terms.iter();
    let Some(first) = iter.next() else {
        return BTreeSet::new();
    };

    let mut result = first.doc_set.clone();
    for term in iter {
        result = result.intersection(&term.doc_set).copied().collect();
        if result.is_empty() {
            break;
        }
    }
    result
}

/// Documents present in any term's result set.
pub fn union_docs(terms: &[TermPostings]) -> BTreeSet<DocId> {
    let mut result = BTreeSet::new();
    for term in terms {
        result.extend(term.doc_set.iter().copied());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(doc_ids: &[u64]) -> TermPostings {
        let mut t = TermPostings::new();
        for &id in doc_ids {
            t.push(Posting {
                doc_id: DocId(id),
                field: "body".to_string(),
                term_freq: 1,
            });
        }
        t
    }

    #[test]
    fn doc_freq_counts_distinct_documents() {
        let mut t = term(&[1, 2]);
        // Second field hit for an already-seen doc.
        t.push(Posting {
            doc_id: DocId(1),
            field: "title".to_string(),
            term_freq: 1,
        });
        assert_eq!(t.doc_freq(), 2);
        assert_eq!(t.postings.len(), 3);
    }

    #[test]
    fn intersection_and_union() {
        let terms = vec![term(&[1, 2, 3]), term(&[2, 3, 4])];
        let and: Vec<u64> = intersect_docs(&terms).iter().map(|d| d.0).collect();
        let or: Vec<u64> = union_docs(&terms).iter().map(|d| d.0).collect();
        assert_eq!(and, vec![2, 3]);
        assert_eq!(or, vec![1, 2, 3, 4]);
    }

    #[test]
    fn intersection_with_empty_term_is_empty() {
        let terms = vec![term(&[1, 2]), term(&[])];
        assert!(intersect_docs(&terms).is_empty());
    }
}
