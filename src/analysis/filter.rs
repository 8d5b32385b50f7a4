use crate::analysis::token::Token;

/// A pipeline stage: token → token-or-removed. Stages compose left-to-right.
pub trait TokenFilter: Send + Sync {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn TokenFilter>;
}
