//! Interchange form of a built index, shaped like the `searchindex.js`
//! payload documentation sites ship to the browser: a document store
//! (per-field token counts plus stored text), one nested-character-map
//! trie per field with `df` and `docs {id: {tf}}` at terminals, the
//! pipeline stage names, and the search options.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::config::{IndexConfig, PipelineConfig};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocId;
use crate::index::search_index::SearchIndex;
use crate::index::trie::{Trie, TrieNode, ROOT};
use crate::query::types::QueryMode;

const FORMAT_VERSION: &str = "0.9.5";

/// One trie node on the wire: child edges keyed by their character,
/// mixed into the same JSON object as the `df` count and the
/// `docs` map of doc id → term frequency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SerializedNode {
    pub df: u32,
    pub docs: BTreeMap<String, TermFrequency>,
    pub children: BTreeMap<char, SerializedNode>,
}

/// Term frequency wrapper; emitted as a float (`{"tf": 1.0}`) for
/// compatibility with the JavaScript consumer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermFrequency {
    pub tf: f32,
}

impl Serialize for SerializedNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.children.len() + 2))?;
        map.serialize_entry("df", &self.df)?;
        map.serialize_entry("docs", &self.docs)?;
        for (ch, child) in &self.children {
            map.serialize_entry(&ch.to_string(), child)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SerializedNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = SerializedNode;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a trie node object with df, docs and child edges")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut node = SerializedNode::default();

                while let Some(key) = access.next_key::<String>()? {
                    match key.as_str() {
                        "df" => node.df = access.next_value()?,
                        "docs" => node.docs = access.next_value()?,
                        edge => {
                            let mut chars = edge.chars();
                            let (Some(ch), None) = (chars.next(), chars.next()) else {
                                return Err(serde::de::Error::custom(format!(
                                    "edge label {edge:?} is not a single character"
                                )));
                            };
                            node.children.insert(ch, access.next_value()?);
                        }
                    }
                }

                Ok(node)
            }
        }

        deserializer.deserialize_map(NodeVisitor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedDocStore {
    #[serde(rename = "docInfo")]
    pub doc_info: BTreeMap<String, BTreeMap<String, u32>>,
    pub docs: BTreeMap<String, BTreeMap<String, String>>,
    pub length: usize,
    pub save: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRoot {
    pub root: SerializedNode,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FieldBoost {
    pub boost: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(rename = "bool")]
    pub bool_mode: String,
    pub expand: bool,
    pub fields: BTreeMap<String, FieldBoost>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedIndex {
    #[serde(rename = "documentStore")]
    pub document_store: SerializedDocStore,
    pub fields: Vec<String>,
    pub index: BTreeMap<String, FieldRoot>,
    pub lang: String,
    pub pipeline: Vec<String>,
    #[serde(rename = "ref")]
    pub ref_field: String,
    pub version: String,
    pub search_options: SearchOptions,
}

impl SerializedIndex {
    pub fn from_index(index: &SearchIndex) -> Self {
        let store = index.store();

        let mut doc_info = BTreeMap::new();
        let mut docs = BTreeMap::new();
        for doc_id in store.doc_ids() {
            let key = doc_id.to_string();
            if let Ok(lengths) = store.field_lengths(doc_id) {
                doc_info.insert(key.clone(), lengths.iter().map(|(k, &v)| (k.clone(), v)).collect());
            }
            if let Ok(stored) = store.stored(doc_id) {
                let mut entry: BTreeMap<String, String> =
                    stored.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
                entry.insert("id".to_string(), key.clone());
                docs.insert(key, entry);
            }
        }

        let tries = index
            .config
            .fields
            .iter()
            .filter_map(|field| {
                let trie = index.trie(field)?;
                Some((
                    field.clone(),
                    FieldRoot {
                        root: serialize_trie(trie),
                    },
                ))
            })
            .collect();

        let boosts = index
            .config
            .fields
            .iter()
            .map(|field| {
                (
                    field.clone(),
                    FieldBoost {
                        boost: index.config.boost(field),
                    },
                )
            })
            .collect();

        SerializedIndex {
            document_store: SerializedDocStore {
                doc_info,
                docs,
                length: index.doc_count(),
                save: true,
            },
            fields: index.config.fields.clone(),
            index: tries,
            lang: "English".to_string(),
            pipeline: index.pipeline.clone(),
            ref_field: "id".to_string(),
            version: FORMAT_VERSION.to_string(),
            search_options: SearchOptions {
                bool_mode: match index.config.default_mode {
                    QueryMode::And => "AND".to_string(),
                    QueryMode::Or => "OR".to_string(),
                },
                expand: index.config.expand,
                fields: boosts,
            },
        }
    }

    pub fn into_index(self) -> Result<SearchIndex> {
        let boosts = self
            .search_options
            .fields
            .iter()
            .map(|(field, b)| (field.clone(), b.boost))
            .collect();

        let config = IndexConfig {
            fields: self.fields.clone(),
            boosts,
            pipeline: pipeline_from_stages(&self.pipeline),
            expand: self.search_options.expand,
            default_mode: match self.search_options.bool_mode.as_str() {
                "AND" => QueryMode::And,
                _ => QueryMode::Or,
            },
            limit_results: IndexConfig::default().limit_results,
        };

        let mut index = SearchIndex::empty(config);
        index.set_pipeline(self.pipeline);

        for (field, root) in self.index {
            let Some(trie) = index.trie_mut(&field) else {
                continue;
            };
            let mut path = String::new();
            load_node(trie, &root.root, &mut path)?;
        }

        for (key, lengths) in self.document_store.doc_info {
            let doc_id = parse_doc_id(&key)?;
            let stored = self
                .document_store
                .docs
                .get(&key)
                .map(|fields| {
                    fields
                        .iter()
                        .filter(|(name, _)| name.as_str() != "id")
                        .map(|(name, text)| (name.clone(), text.clone()))
                        .collect()
                })
                .unwrap_or_default();
            index.record_document(doc_id, lengths.into_iter().collect(), stored);
        }

        Ok(index)
    }
}

fn parse_doc_id(key: &str) -> Result<DocId> {
    key.parse::<u64>().map(DocId).map_err(|_| {
        Error::new(
            ErrorKind::Parse,
            format!("document id {key:?} is not an integer"),
        )
    })
}

/// Reconstruct pipeline toggles from the recorded stage names. Unknown
/// stage names are ignored; a missing name means the stage was disabled.
fn pipeline_from_stages(stages: &[String]) -> PipelineConfig {
    let has = |name: &str| stages.iter().any(|s| s == name);
    PipelineConfig {
        trimmer: has("trimmer"),
        stop_words: has("stopWordFilter"),
        stemmer: has("stemmer"),
        ..PipelineConfig::default()
    }
}

fn serialize_trie(trie: &Trie) -> SerializedNode {
    serialize_node(trie, trie.node(ROOT))
}

fn serialize_node(trie: &Trie, node: &TrieNode) -> SerializedNode {
    SerializedNode {
        df: node.df,
        docs: node
            .docs
            .iter()
            .map(|(doc_id, &tf)| (doc_id.to_string(), TermFrequency { tf: tf as f32 }))
            .collect(),
        children: node
            .children
            .iter()
            .map(|(&ch, &child)| (ch, serialize_node(trie, trie.node(child))))
            .collect(),
    }
}

fn load_node(trie: &mut Trie, node: &SerializedNode, path: &mut String) -> Result<()> {
    if !node.docs.is_empty() {
        let mut docs = BTreeMap::new();
        for (key, tf) in &node.docs {
            docs.insert(parse_doc_id(key)?, tf.tf.round().max(1.0) as u32);
        }
        trie.set_term(path, docs);
    }

    for (&ch, child) in &node.children {
        path.push(ch);
        load_node(trie, child, path)?;
        path.pop();
    }

    Ok(())
}

/// Serialize a built index to the interchange JSON.
pub fn to_json(index: &SearchIndex) -> Result<String> {
    Ok(serde_json::to_string(&SerializedIndex::from_index(index))?)
}

/// Load an index from interchange JSON. The pipeline configuration rides
/// along in the payload, so the loaded index queries with the same
/// normalization it was built with.
pub fn from_json(json: &str) -> Result<SearchIndex> {
    let serialized: SerializedIndex = serde_json::from_str(json)?;
    serialized.into_index()
}
