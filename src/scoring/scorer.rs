/// Collection-level statistics for one query term.
#[derive(Debug, Clone, Copy)]
pub struct TermStats {
    /// Distinct documents containing the term in any field.
    pub doc_freq: u32,
    pub total_docs: usize,
}

/// Scorer trait: one posting's contribution given term rarity, field
/// length, and the field's configured boost.
pub trait Scorer: Send + Sync {
    fn score(&self, term_freq: u32, field_length: u32, boost: f32, term: &TermStats) -> f32;

    fn name(&self) -> &str;
}

/// Classic tf-idf with field-length normalization:
/// boost × (tf / field_length) × ln(1 + N / df).
///
/// Long fields cannot dominate through repetition alone because tf is
/// divided by the field's token count. Zero df, zero field length, or an
/// empty collection all contribute nothing rather than dividing by zero.
pub struct TfIdfScorer;

impl TfIdfScorer {
    pub fn idf(&self, term: &TermStats) -> f32 {
        if term.doc_freq == 0 || term.total_docs == 0 {
            return 0.0;
        }
        (1.0 + term.total_docs as f32 / term.doc_freq as f32).ln()
    }
}

impl Scorer for TfIdfScorer {
    fn score(&self, term_freq: u32, field_length: u32, boost: f32, term: &TermStats) -> f32 {
        if field_length == 0 {
            return 0.0;
        }
        let tf = term_freq as f32 / field_length as f32;
        boost * tf * self.idf(term)
    }

    fn name(&self) -> &str {
        "tfidf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarer_terms_score_higher() {
        let scorer = TfIdfScorer;
        let rare = TermStats { doc_freq: 1, total_docs: 100 };
        let common = TermStats { doc_freq: 90, total_docs: 100 };
        assert!(scorer.score(1, 10, 1.0, &rare) > scorer.score(1, 10, 1.0, &common));
    }

    #[test]
    fn shorter_fields_score_higher_at_equal_tf() {
        let scorer = TfIdfScorer;
        let stats = TermStats { doc_freq: 2, total_docs: 10 };
        assert!(scorer.score(1, 1, 1.0, &stats) > scorer.score(1, 3, 1.0, &stats));
    }

    #[test]
    fn boost_scales_linearly() {
        let scorer = TfIdfScorer;
        let stats = TermStats { doc_freq: 1, total_docs: 10 };
        let base = scorer.score(1, 5, 1.0, &stats);
        assert!((scorer.score(1, 5, 2.0, &stats) - 2.0 * base).abs() < 1e-6);
    }

    #[test]
    fn degenerate_inputs_score_zero() {
        let scorer = TfIdfScorer;
        let no_docs = TermStats { doc_freq: 0, total_docs: 10 };
        let empty_collection = TermStats { doc_freq: 1, total_docs: 0 };
        let stats = TermStats { doc_freq: 1, total_docs: 10 };

        assert_eq!(scorer.score(1, 10, 1.0, &no_docs), 0.0);
        assert_eq!(scorer.score(1, 10, 1.0, &empty_collection), 0.0);
        assert_eq!(scorer.score(1, 0, 1.0, &stats), 0.0);
    }
}
