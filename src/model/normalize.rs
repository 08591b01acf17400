/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Result normalizer
//!
//! The service encodes every result as an Apache SOAP map: a list of `<item>`
//! elements, each holding a `<key>` and a `<value>`. A value is either a
//! terminal string or another list of items. Arrays are encoded as lists of
//! key-less items. This module turns that tagged tree into a plain JSON object.

use crate::model::soap::XmlNode;
use serde_json::{Map, Value};

/// One entry of a key/value list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Entry key. Array members carry none and are keyed by position.
    pub key: Option<String>,
    /// Entry value
    pub value: ItemValue,
}

/// Value of a key/value list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValue {
    /// Terminal value
    Scalar(String),
    /// Nested key/value list
    Nested(Vec<Item>),
    /// Neither a terminal value nor a nested list; dropped on normalization
    Absent,
}

impl Item {
    /// Keyed entry with a terminal value
    pub fn scalar(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: ItemValue::Scalar(value.into()),
        }
    }

    /// Keyed entry with a nested list
    pub fn nested(key: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            key: Some(key.into()),
            value: ItemValue::Nested(items),
        }
    }

    /// Key-less entry, as found in SOAP arrays
    pub fn list(items: Vec<Item>) -> Self {
        Self {
            key: None,
            value: ItemValue::Nested(items),
        }
    }

    /// Keyed entry without a usable value
    pub fn absent(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: ItemValue::Absent,
        }
    }

    /// Builds an entry from an `<item>` element
    pub fn from_node(node: &XmlNode) -> Self {
        match node.child("value") {
            Some(value) => Self {
                key: node.child("key").map(|key| key.text.clone()),
                value: ItemValue::from_node(value),
            },
            // bare item lists are array members, keyed by position even when a key is present
            None if node.child("item").is_some() => Item::list(Item::list_of(node)),
            None => Self {
                key: node.child("key").map(|key| key.text.clone()),
                value: ItemValue::Absent,
            },
        }
    }

    /// Collects the `<item>` children of `node`
    pub fn list_of(node: &XmlNode) -> Vec<Item> {
        node.children_named("item").map(Item::from_node).collect()
    }
}

impl ItemValue {
    /// Classifies a `<value>` element
    pub fn from_node(node: &XmlNode) -> Self {
        if node.child("item").is_some() {
            ItemValue::Nested(Item::list_of(node))
        } else if !node.text.is_empty() {
            ItemValue::Scalar(node.text.clone())
        } else {
            ItemValue::Absent
        }
    }
}

/// Normalizes a key/value list into a JSON object
///
/// Scalars become JSON strings and nested lists become nested objects. Entries
/// without a key are keyed by their zero-based position in the list. Entries
/// whose value is [`ItemValue::Absent`] do not appear in the result. When a key
/// repeats, the last entry wins.
pub fn normalize(items: &[Item]) -> Map<String, Value> {
    let mut map = Map::new();
    for (position, item) in items.iter().enumerate() {
        let key = item
            .key
            .clone()
            .unwrap_or_else(|| position.to_string());
        match &item.value {
            ItemValue::Scalar(value) => {
                map.insert(key, Value::String(value.clone()));
            }
            ItemValue::Nested(children) => {
                map.insert(key, Value::Object(normalize(children)));
            }
            ItemValue::Absent => {}
        }
    }
    map
}
