use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::forms::{NAME_MAX_LEN, sanitize_inline_text};

/// Result type returned by the category form helpers.
pub type CategoryFormResult<T> = Result<T, CategoryFormError>;

/// Errors that can occur while processing category payloads.
#[derive(Debug, Error)]
pub enum CategoryFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("category name cannot be empty")]
    EmptyName,
}

/// JSON body accepted when creating or renaming a category.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub category_name: String,
}

impl CategoryForm {
    /// Validates and sanitizes the payload into a domain `NewCategory`.
    pub fn into_new_category(self) -> CategoryFormResult<NewCategory> {
        Ok(NewCategory::new(self.sanitized_name()?))
    }

    /// Validates and sanitizes the payload into a domain `UpdateCategory`.
    pub fn into_update_category(self) -> CategoryFormResult<UpdateCategory> {
        Ok(UpdateCategory::new(self.sanitized_name()?))
    }

    fn sanitized_name(&self) -> CategoryFormResult<String> {
        self.validate()?;

        let sanitized = sanitize_inline_text(&self.category_name);
        if sanitized.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        Ok(sanitized)
    }
}
