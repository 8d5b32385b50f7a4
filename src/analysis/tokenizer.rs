use crate::analysis::token::Token;
use unicode_segmentation::UnicodeSegmentation;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

/// Splits on whitespace (and optionally internal hyphens), lowercasing each
/// piece. Edge punctuation is left in place for the trimmer stage to strip,
/// so "setup," and "(setup)" both normalize to "setup" downstream.
#[derive(Clone)]
pub struct StandardTokenizer {
    pub lowercase: bool,
    pub split_hyphens: bool,
    pub max_token_length: usize,
}

impl Default for StandardTokenizer {
    fn default() -> Self {
        StandardTokenizer {
            lowercase: true,
            split_hyphens: true,
            max_token_length: 255,
        }
    }
}

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut position = 0u32;

        for word in text.split_whitespace() {
            let pieces: Vec<&str> = if self.split_hyphens {
                word.split('-').collect()
            } else {
                vec![word]
            };

            for piece in pieces {
                if piece.is_empty() || piece.len() > self.max_token_length {
                    continue;
                }
                let token_text = if self.lowercase {
                    piece.to_lowercase()
                } else {
                    piece.to_string()
                };
                tokens.push(Token::new(token_text, position));
                position += 1;
            }
        }

        tokens
    }

    fn name(&self) -> &str {
        "standard"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Unicode word-boundary tokenizer. Segmentation discards punctuation up
/// front, so pipelines using it get an effectively idle trimmer stage.
#[derive(Clone)]
pub struct UnicodeTokenizer {
    pub lowercase: bool,
    pub max_token_length: usize,
}

impl Default for UnicodeTokenizer {
    fn default() -> Self {
        UnicodeTokenizer {
            lowercase: true,
            max_token_length: 255,
        }
    }
}

impl Tokenizer for UnicodeTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut position = 0u32;

        for word in text.unicode_words() {
            if word.len() > self.max_token_length {
                continue;
            }
            let token_text = if self.lowercase {
                word.to_lowercase()
            } else {
                word.to_string()
            };
            tokens.push(Token::new(token_text, position));
            position += 1;
        }

        tokens
    }

    fn name(&self) -> &str {
        "unicode"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_splits_whitespace_and_hyphens() {
        let tokenizer = StandardTokenizer::default();
        let tokens = tokenizer.tokenize("Project-Setup guide");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["project", "setup", "guide"]);
    }

    #[test]
    fn standard_keeps_edge_punctuation() {
        let tokenizer = StandardTokenizer::default();
        let tokens = tokenizer.tokenize("(setup), done.");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["(setup),", "done."]);
    }

    #[test]
    fn standard_positions_are_sequential() {
        let tokenizer = StandardTokenizer::default();
        let tokens = tokenizer.tokenize("one two three");
        let positions: Vec<u32> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn unicode_discards_punctuation() {
        let tokenizer = UnicodeTokenizer::default();
        let tokens = tokenizer.tokenize("The quick (brown) fox!");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(StandardTokenizer::default().tokenize("").is_empty());
        assert!(StandardTokenizer::default().tokenize("   \t\n").is_empty());
    }
}
