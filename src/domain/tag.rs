use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Domain representation of a reusable tag that can be attached to multiple products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Unique identifier of the tag.
    pub id: i32,
    /// Human-readable name of the tag.
    pub tag_name: String,
}

/// Tag together with every product it is attached to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagWithProducts {
    #[serde(flatten)]
    pub tag: Tag,
    /// Products associated with the tag through `product_tags`.
    pub products: Vec<Product>,
}

/// Payload required to insert a new tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    /// Identifier chosen by the client; generated by the store when `None`.
    pub id: Option<i32>,
    /// Human-readable name of the tag.
    pub tag_name: String,
}

impl NewTag {
    /// Construct a new tag payload whose identifier is generated by the store.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            id: None,
            tag_name: tag_name.into(),
        }
    }

    /// Request a specific identifier for the tag.
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

/// Patch data applied when renaming an existing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTag {
    /// Updated human-readable name of the tag.
    pub tag_name: String,
}

impl UpdateTag {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
        }
    }
}
