use std::sync::Arc;
use tracing::debug;

use crate::core::config::IndexConfig;
use crate::core::error::Result;
use crate::core::types::Document;
use crate::index::builder::IndexBuilder;
use crate::index::search_index::SearchIndex;
use crate::query::resolver::QueryResolver;
use crate::query::types::QueryMode;
use crate::search::handle::IndexHandle;
use crate::search::results::SearchResults;

/// Facade tying the pieces together for a live query service: a config,
/// the published index, and a resolver built from the same pipeline
/// config the builder uses. Owns no global state; tests construct as many
/// isolated engines as they like.
pub struct SearchEngine {
    config: IndexConfig,
    resolver: QueryResolver,
    handle: IndexHandle,
}

impl SearchEngine {
    pub fn new(config: IndexConfig) -> Self {
        SearchEngine {
            resolver: QueryResolver::new(&config),
            handle: IndexHandle::new(config.clone()),
            config,
        }
    }

    /// Rebuild from scratch and publish atomically. In-flight readers
    /// keep the snapshot they started with; new queries see the new
    /// index. This is the only mutation path.
    pub fn rebuild<'a, I>(&self, docs: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Document>,
    {
        let mut builder = IndexBuilder::new(self.config.clone());
        builder.add_documents(docs)?;
        let index = builder.build();

        debug!(docs = index.doc_count(), "publishing rebuilt index");
        self.handle.publish(index);
        Ok(())
    }

    pub fn search(&self, query: &str, mode: QueryMode) -> SearchResults {
        let index = self.handle.snapshot();
        self.resolver.search(&index, query, mode)
    }

    /// Search with the configured default boolean mode.
    pub fn search_default(&self, query: &str) -> SearchResults {
        self.search(query, self.config.default_mode)
    }

    pub fn snapshot(&self) -> Arc<SearchIndex> {
        self.handle.snapshot()
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }
}
