use serde::{Serialize, Deserialize};

/// Normalized unit of text produced by the pipeline. Not unique: stemming
/// collapses variants onto one token text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub position: u32, // Position within the analyzed field
}

impl Token {
    pub fn new(text: String, position: u32) -> Self {
        Token { text, position }
    }
}
