use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::stemmer::StemmerFilter;
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::filters::trimmer::Trimmer;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{StandardTokenizer, Tokenizer, UnicodeTokenizer};
use crate::core::config::PipelineConfig;

/// Text analysis pipeline: one tokenizer followed by an ordered list of
/// filters. The exact same pipeline must process documents at build time
/// and queries at search time; nothing checks this, mismatches just
/// retrieve wrong or empty results.
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
    pub name: String,
}

impl Analyzer {
    pub fn new(name: String, tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
            name,
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(text);

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    /// Active stage names in application order, as recorded in the
    /// serialized index ("trimmer", "stopWordFilter", "stemmer").
    pub fn stage_names(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.name().to_string()).collect()
    }

    /// Assemble the pipeline a documentation index uses: trim edge
    /// punctuation, drop stop words, then stem. Stage order is fixed;
    /// the config can only switch stages off.
    pub fn from_config(config: &PipelineConfig) -> Self {
        let tokenizer: Box<dyn Tokenizer> = if config.unicode_segmentation {
            Box::new(UnicodeTokenizer::default())
        } else {
            Box::new(StandardTokenizer {
                lowercase: true,
                split_hyphens: config.split_hyphens,
                max_token_length: 255,
            })
        };

        let mut analyzer = Analyzer::new("documentation".to_string(), tokenizer);
        if config.trimmer {
            analyzer = analyzer.add_filter(Box::new(Trimmer));
        }
        if config.stop_words {
            analyzer = analyzer.add_filter(Box::new(StopWordFilter::english()));
        }
        if config.stemmer {
            analyzer = analyzer.add_filter(Box::new(StemmerFilter::english()));
        }
        analyzer
    }
}

impl Clone for Analyzer {
    fn clone(&self) -> Self {
        Analyzer {
            tokenizer: self.tokenizer.clone_box(),
            filters: self.filters.iter().map(|f| f.clone_box()).collect(),
            name: self.name.clone(),
        }
    }
}
