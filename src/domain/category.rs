use serde::{Deserialize, Serialize};

/// Domain representation of a product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable name of the category.
    pub category_name: String,
}

/// Product projection listed underneath its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryProduct {
    /// Identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub product_name: String,
}

/// Category together with the products assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryWithProducts {
    #[serde(flatten)]
    pub category: Category,
    /// Products whose `category_id` points at this category.
    pub products: Vec<CategoryProduct>,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub category_name: String,
}

impl NewCategory {
    /// Construct a new category payload.
    pub fn new(category_name: impl Into<String>) -> Self {
        Self {
            category_name: category_name.into(),
        }
    }
}

/// Patch data applied when renaming an existing category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategory {
    /// Updated name of the category.
    pub category_name: String,
}

impl UpdateCategory {
    pub fn new(category_name: impl Into<String>) -> Self {
        Self {
            category_name: category_name.into(),
        }
    }
}
