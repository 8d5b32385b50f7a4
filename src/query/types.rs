use serde::{Serialize, Deserialize};

/// Boolean combination mode across query terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryMode {
    /// Every query term must match (doc-set intersection).
    And,
    /// Any query term may match (doc-set union, scored additively).
    Or,
}

impl Default for QueryMode {
    fn default() -> Self {
        QueryMode::Or
    }
}
