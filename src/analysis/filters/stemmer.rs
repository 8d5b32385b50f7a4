use rust_stemmers::{Algorithm, Stemmer};
use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

/// Snowball suffix-stripping stemmer. The rule tables live in the stemmer
/// crate as data; application is idempotent, so re-analyzing an already
/// stemmed token is harmless.
pub struct StemmerFilter {
    pub algorithm: Algorithm,
    stemmer: Stemmer,
}

impl StemmerFilter {
    pub fn new(algorithm: Algorithm) -> Self {
        StemmerFilter {
            algorithm,
            stemmer: Stemmer::create(algorithm),
        }
    }

    pub fn english() -> Self {
        StemmerFilter::new(Algorithm::English)
    }

    pub fn stem(&self, text: &str) -> String {
        self.stemmer.stem(text).to_string()
    }
}

impl TokenFilter for StemmerFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .map(|mut token| {
                token.text = self.stemmer.stem(&token.text).to_string();
                token
            })
            .collect()
    }

    fn name(&self) -> &str {
        "stemmer"
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(StemmerFilter::new(self.algorithm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_variants_to_one_root() {
        let filter = StemmerFilter::english();
        assert_eq!(filter.stem("configure"), filter.stem("configuration"));
        assert_eq!(filter.stem("running"), "run");
    }

    #[test]
    fn stemming_is_idempotent() {
        let filter = StemmerFilter::english();
        for word in ["configuration", "administration", "troubleshooting", "setup"] {
            let once = filter.stem(word);
            assert_eq!(filter.stem(&once), once, "stem(stem({word})) changed");
        }
    }
}
