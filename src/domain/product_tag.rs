use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Domain representation linking a product to a tag record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProductTag {
    /// Unique identifier of the product-tag association.
    pub id: i32,
    /// Identifier of the product the tag is attached to.
    pub product_id: i32,
    /// Identifier of the referenced tag record.
    pub tag_id: i32,
}

/// Payload required to associate an existing tag with a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NewProductTag {
    /// Identifier of the product receiving the tag.
    pub product_id: i32,
    /// Identifier of the tag being attached to the product.
    pub tag_id: i32,
}

impl NewProductTag {
    /// Construct a new association payload between a product and a tag.
    pub fn new(product_id: i32, tag_id: i32) -> Self {
        Self { product_id, tag_id }
    }
}

/// Changes that turn a product's current tag associations into a desired set.
///
/// Associations present in both sets are left alone so their row ids survive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDiff {
    /// Associations to insert, in the order the tag ids were requested.
    pub to_add: Vec<NewProductTag>,
    /// Row ids of the `product_tags` entries to delete.
    pub to_remove: Vec<i32>,
}

impl TagDiff {
    /// Compare `current` association rows against the `desired` tag ids.
    pub fn compute(product_id: i32, current: &[ProductTag], desired: &[i32]) -> Self {
        let current_tag_ids: HashSet<i32> = current.iter().map(|row| row.tag_id).collect();
        let desired_tag_ids: HashSet<i32> = desired.iter().copied().collect();

        let mut queued = HashSet::new();
        let to_add = desired
            .iter()
            .copied()
            .filter(|tag_id| !current_tag_ids.contains(tag_id) && queued.insert(*tag_id))
            .map(|tag_id| NewProductTag::new(product_id, tag_id))
            .collect();

        let to_remove = current
            .iter()
            .filter(|row| !desired_tag_ids.contains(&row.tag_id))
            .map(|row| row.id)
            .collect();

        Self { to_add, to_remove }
    }

    /// `true` when the current associations already match the desired set.
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}
