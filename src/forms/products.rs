use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::price::decimal_to_cents;
use crate::domain::product::{NewProduct, UpdateProduct};
use crate::forms::{NAME_MAX_LEN, sanitize_inline_text};

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The price cannot be represented in cents.
    #[error("invalid price: {value}")]
    InvalidPrice { value: f64 },
    /// A tag identifier is not a positive integer.
    #[error("invalid tag id: {value}")]
    InvalidTagId { value: i32 },
}

/// JSON body accepted when creating or updating a product.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub product_name: String,
    /// Decimal price, for example `9.99`.
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub stock: i32,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub category_id: Option<i32>,
    /// Desired tag associations. Omitting the field on update leaves the
    /// current associations untouched.
    #[serde(default, rename = "tagIds", alias = "tag_ids")]
    pub tag_ids: Option<Vec<i32>>,
}

/// Validated payload for inserting a product together with its tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductPayload {
    pub product: NewProduct,
    /// Distinct tag ids in request order.
    pub tag_ids: Vec<i32>,
}

/// Validated payload for updating a product and reconciling its tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProductPayload {
    pub product: UpdateProduct,
    /// Distinct tag ids in request order, or `None` to skip reconciliation.
    pub tag_ids: Option<Vec<i32>>,
}

impl ProductForm {
    /// Validates and sanitizes the payload for insertion.
    pub fn into_new_product(self) -> ProductFormResult<NewProductPayload> {
        self.validate()?;

        let product_name = sanitized_name(&self.product_name)?;
        let price_cents = price_to_cents(self.price)?;

        let mut product = NewProduct::new(product_name, price_cents, self.stock);
        if let Some(category_id) = self.category_id {
            product = product.with_category_id(category_id);
        }

        let tag_ids = distinct_tag_ids(self.tag_ids.unwrap_or_default())?;

        Ok(NewProductPayload { product, tag_ids })
    }

    /// Validates and sanitizes the payload for an update.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProductPayload> {
        self.validate()?;

        let product_name = sanitized_name(&self.product_name)?;
        let price_cents = price_to_cents(self.price)?;

        let mut product = UpdateProduct::new(product_name, price_cents, self.stock);
        if let Some(category_id) = self.category_id {
            product = product.with_category_id(category_id);
        }

        let tag_ids = self.tag_ids.map(distinct_tag_ids).transpose()?;

        Ok(UpdateProductPayload { product, tag_ids })
    }
}

fn sanitized_name(input: &str) -> ProductFormResult<String> {
    let sanitized = sanitize_inline_text(input);
    if sanitized.is_empty() {
        return Err(ProductFormError::EmptyName);
    }
    Ok(sanitized)
}

fn price_to_cents(value: f64) -> ProductFormResult<i64> {
    decimal_to_cents(value).ok_or(ProductFormError::InvalidPrice { value })
}

fn distinct_tag_ids(tag_ids: Vec<i32>) -> ProductFormResult<Vec<i32>> {
    let mut distinct = Vec::with_capacity(tag_ids.len());
    for tag_id in tag_ids {
        if tag_id < 1 {
            return Err(ProductFormError::InvalidTagId { value: tag_id });
        }
        if !distinct.contains(&tag_id) {
            distinct.push(tag_id);
        }
    }
    Ok(distinct)
}
