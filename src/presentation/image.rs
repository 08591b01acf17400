use crate::presentation::serialization::scalar_to_string;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reference image as listed by `imageList`
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ImageInfo {
    /// Identifier given at insert time
    pub id: String,
    /// Name given at insert time
    pub name: String,
    /// URL of the stored image
    pub href: String,
}

impl ImageInfo {
    /// Builds an image from one entry of a normalized list; `None` when it is not an object
    #[must_use]
    pub fn from_entry(entry: &Value) -> Option<Self> {
        let fields = entry.as_object()?;
        let text = |key: &str| {
            fields
                .get(key)
                .and_then(scalar_to_string)
                .unwrap_or_default()
        };
        Some(Self {
            id: text("id"),
            name: text("name"),
            href: text("href"),
        })
    }

    /// Thumbnail URL of at most `width` x `height` pixels
    #[must_use]
    pub fn thumbnail(&self, width: u32, height: u32) -> String {
        format!("{}?w={width}&h={height}", self.href)
    }
}

/// Extracts the images of an `imageList` payload
///
/// The payload is a normalized map keyed by list position (`"0"`, `"1"`, ...);
/// images are returned in that order. Entries that are not objects are skipped.
#[must_use]
pub fn images_from_list(data: &Value) -> Vec<ImageInfo> {
    let Some(entries) = data.as_object() else {
        return Vec::new();
    };

    let mut indexed: Vec<(Option<usize>, &String, &Value)> = entries
        .iter()
        .map(|(key, value)| (key.parse::<usize>().ok(), key, value))
        .collect();
    indexed.sort_by(|a, b| match (a.0, b.0) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.1.cmp(b.1),
    });

    indexed
        .into_iter()
        .filter_map(|(_, _, value)| ImageInfo::from_entry(value))
        .collect()
}
