use serde::{Deserialize, Serialize};

use crate::domain::{category::Category, price, tag::Tag};

/// Domain representation of a product row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub product_name: String,
    /// Price in cents, exposed as a decimal `price` field.
    #[serde(rename = "price", with = "price::as_decimal")]
    pub price_cents: i64,
    /// Units currently in stock.
    pub stock: i32,
    /// Category the product belongs to, if any.
    pub category_id: Option<i32>,
}

/// Product together with its category and tags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductDetails {
    #[serde(flatten)]
    pub product: Product,
    /// Category referenced by `category_id`, when it exists.
    pub category: Option<Category>,
    /// Tags associated with the product through `product_tags`.
    pub tags: Vec<Tag>,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub product_name: String,
    pub price_cents: i64,
    pub stock: i32,
    pub category_id: Option<i32>,
}

impl NewProduct {
    /// Build a new product payload without a category.
    pub fn new(product_name: impl Into<String>, price_cents: i64, stock: i32) -> Self {
        Self {
            product_name: product_name.into(),
            price_cents,
            stock,
            category_id: None,
        }
    }

    /// Assign the product to a category.
    pub fn with_category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Replacement values for a product's scalar fields.
///
/// A `None` category detaches the product from its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProduct {
    pub product_name: String,
    pub price_cents: i64,
    pub stock: i32,
    pub category_id: Option<i32>,
}

impl UpdateProduct {
    pub fn new(product_name: impl Into<String>, price_cents: i64, stock: i32) -> Self {
        Self {
            product_name: product_name.into(),
            price_cents,
            stock,
            category_id: None,
        }
    }

    /// Assign the product to a category.
    pub fn with_category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }
}
