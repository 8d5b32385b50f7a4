use std::sync::Arc;
use parking_lot::RwLock;

use crate::core::config::IndexConfig;
use crate::index::search_index::SearchIndex;

/// Swappable owner of the current index: single-writer publish,
/// multi-reader snapshot. A rebuild assembles a complete `SearchIndex`
/// off to the side and `publish` swaps it in as one visible step, so
/// readers never observe a half-built trie. Snapshots taken earlier keep
/// answering from the index they captured.
pub struct IndexHandle {
    current: RwLock<Arc<SearchIndex>>,
}

impl IndexHandle {
    /// Start with an empty index; queries are valid immediately and
    /// return no hits until something is published.
    pub fn new(config: IndexConfig) -> Self {
        IndexHandle {
            current: RwLock::new(Arc::new(SearchIndex::empty(config))),
        }
    }

    pub fn with_index(index: SearchIndex) -> Self {
        IndexHandle {
            current: RwLock::new(Arc::new(index)),
        }
    }

    pub fn snapshot(&self) -> Arc<SearchIndex> {
        self.current.read().clone()
    }

    pub fn publish(&self, index: SearchIndex) {
        *self.current.write() = Arc::new(index);
    }
}
