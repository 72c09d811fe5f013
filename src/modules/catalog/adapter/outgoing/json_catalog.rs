// src/modules/catalog/adapter/outgoing/json_catalog.rs

use serde_json::Value;
use std::collections::HashMap;

use crate::modules::catalog::application::ports::outgoing::{CatalogError, MessageCatalog};
use crate::modules::locale::application::domain::Locale;

const EMBEDDED: &[(Locale, &str)] = &[
    (
        Locale::Ar,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/messages/ar.json")),
    ),
    (
        Locale::En,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/messages/en.json")),
    ),
];

/// Message catalog backed by one JSON tree per locale.
#[derive(Debug, Clone)]
pub struct JsonMessageCatalog {
    trees: HashMap<Locale, Value>,
}

impl JsonMessageCatalog {
    /// Catalog compiled into the binary from `messages/*.json`.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_sources(EMBEDDED)
    }

    pub fn from_sources(sources: &[(Locale, &str)]) -> Result<Self, CatalogError> {
        let mut trees = HashMap::with_capacity(sources.len());

        for (locale, raw) in sources {
            let tree: Value =
                serde_json::from_str(raw).map_err(|e| CatalogError::InvalidCatalog {
                    locale: *locale,
                    message: e.to_string(),
                })?;

            if !tree.is_object() {
                return Err(CatalogError::InvalidCatalog {
                    locale: *locale,
                    message: "root must be an object".to_string(),
                });
            }

            trees.insert(*locale, tree);
        }

        Ok(Self { trees })
    }

    fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        let mut node = self.trees.get(&locale)?;
        for segment in key.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        node.as_str().filter(|s| !s.trim().is_empty())
    }
}

fn collect_leaves(prefix: &str, node: &Value, out: &mut Vec<String>) {
    match node {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{}.{}", prefix, k)
                };
                collect_leaves(&key, v, out);
            }
        }
        _ => out.push(prefix.to_string()),
    }
}

impl MessageCatalog for JsonMessageCatalog {
    fn message(&self, locale: Locale, key: &str) -> Result<String, CatalogError> {
        self.lookup(locale, key)
            .map(str::to_string)
            .ok_or_else(|| CatalogError::MissingTranslationKey {
                locale,
                key: key.to_string(),
            })
    }

    fn keys(&self, locale: Locale) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(tree) = self.trees.get(&locale) {
            collect_leaves("", tree, &mut out);
        }
        out.sort();
        out
    }
}
