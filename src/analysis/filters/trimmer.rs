use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

/// Strips leading and trailing non-alphanumeric characters from each token.
/// Interior punctuation (hyphens, apostrophes) is untouched, so "it's"
/// survives while "'quoted'" becomes "quoted". Tokens that trim to empty
/// are removed.
#[derive(Clone, Default)]
pub struct Trimmer;

impl TokenFilter for Trimmer {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .filter_map(|mut token| {
                let trimmed = token.text
                    .trim_matches(|c: char| !c.is_alphanumeric());
                if trimmed.is_empty() {
                    return None;
                }
                if trimmed.len() != token.text.len() {
                    token.text = trimmed.to_string();
                }
                Some(token)
            })
            .collect()
    }

    fn name(&self) -> &str {
        "trimmer"
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(Trimmer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: Vec<Token>) -> Vec<String> {
        tokens.into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn strips_edge_punctuation_only() {
        let tokens = vec![
            Token::new("(setup),".to_string(), 0),
            Token::new("it's".to_string(), 1),
            Token::new("--".to_string(), 2),
        ];
        assert_eq!(texts(Trimmer.filter(tokens)), vec!["setup", "it's"]);
    }

    #[test]
    fn clean_tokens_pass_through() {
        let tokens = vec![Token::new("setup".to_string(), 0)];
        assert_eq!(texts(Trimmer.filter(tokens)), vec!["setup"]);
    }
}
