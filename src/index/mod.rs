pub mod trie;
pub mod posting;
pub mod store;
pub mod builder;
pub mod search_index;
