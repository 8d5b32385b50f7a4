pub mod core;
pub mod analysis;
pub mod index;
pub mod scoring;
pub mod query;
pub mod search;
pub mod persist;

/*
┌──────────────────────────────────────────────────────────────────────────┐
│                        DOCSIFT STRUCT ARCHITECTURE                       │
└──────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── CORE LAYER ────────────────────────────────┐
│  ┌───────────────────────────────────────────────────────────────────┐  │
│  │                        struct SearchEngine                        │  │
│  │  config: IndexConfig            // Fields, boosts, pipeline       │  │
│  │  analyzer: Analyzer             // Shared by build and query      │  │
│  │  handle: IndexHandle            // Published index snapshot       │  │
│  └───────────────────────────────────────────────────────────────────┘  │
│  ┌──────────────────┐  ┌─────────────────────┐  ┌────────────────────┐  │
│  │ struct DocId     │  │ struct Document     │  │ struct IndexConfig │  │
│  │ • 0: u64         │  │ • id: DocId         │  │ • fields           │  │
│  └──────────────────┘  │ • fields: HashMap   │  │ • boosts           │  │
│                        └─────────────────────┘  │ • pipeline         │  │
│                                                 └────────────────────┘  │
└──────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────── ANALYSIS LAYER ──────────────────────────────┐
│  Analyzer ──runs──> Tokenizer ──then──> [Trimmer, StopWords, Stemmer]    │
│  trait Tokenizer { tokenize() }      trait TokenFilter { filter() }      │
└──────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────── INDEXING LAYER ──────────────────────────────┐
│  IndexBuilder ──analysis──> Token ──insert──> Trie (one per field)       │
│  ┌──────────────────────┐  ┌──────────────────┐  ┌────────────────────┐  │
│  │ struct Trie          │  │ struct TrieNode  │  │ struct Posting     │  │
│  │ • nodes: Vec<Node>   │  │ • children: Map  │  │ • doc_id           │  │
│  └──────────────────────┘  │ • df, docs       │  │ • field            │  │
│  ┌──────────────────────┐  └──────────────────┘  │ • term_freq        │  │
│  │ struct SearchIndex   │  ┌──────────────────┐  └────────────────────┘  │
│  │ • tries: per field   │  │ struct DocStore  │                          │
│  │ • store: DocStore    │  │ • doc_info       │                          │
│  │ • doc_count, boosts  │  │ • docs           │                          │
│  └──────────────────────┘  └──────────────────┘                          │
└──────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────── SEARCH LAYER ───────────────────────────────┐
│  QueryResolver ──tokenize──> exact/prefix lookups ──combine──> AND | OR  │
│       │                                                                  │
│       └──scores_with──> TfIdfScorer ──implements──> trait Scorer         │
│  SearchResults { hits: Vec<SearchHit>, total_hits, max_score }           │
│  IndexHandle: single-writer publish / multi-reader snapshot              │
└──────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────── PERSIST LAYER ───────────────────────────────┐
│  SerializedIndex <──serde_json──> SearchIndex                            │
│  Trie nodes serialize as nested char maps carrying df + docs{id: tf}     │
└──────────────────────────────────────────────────────────────────────────┘
*/
