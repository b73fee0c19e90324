use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::tag::{NewTag, UpdateTag};
use crate::forms::{NAME_MAX_LEN, sanitize_inline_text};

/// Result type returned by the tag form helpers.
pub type TagFormResult<T> = Result<T, TagFormError>;

/// Errors that can occur while processing tag payloads.
#[derive(Debug, Error)]
pub enum TagFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("tag name cannot be empty")]
    EmptyName,
}

/// JSON body accepted when creating a tag.
#[derive(Debug, Deserialize, Validate)]
pub struct AddTagForm {
    /// Identifier requested by the client; generated when omitted.
    #[validate(range(min = 1))]
    pub id: Option<i32>,
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub tag_name: String,
}

impl AddTagForm {
    /// Validates and sanitizes the payload into a domain `NewTag`.
    pub fn into_new_tag(self) -> TagFormResult<NewTag> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.tag_name);
        if sanitized_name.is_empty() {
            return Err(TagFormError::EmptyName);
        }

        let new_tag = NewTag::new(sanitized_name);
        Ok(match self.id {
            Some(id) => new_tag.with_id(id),
            None => new_tag,
        })
    }
}

/// JSON body accepted when renaming a tag.
#[derive(Debug, Deserialize, Validate)]
pub struct EditTagForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub tag_name: String,
}

impl EditTagForm {
    /// Validates and sanitizes the payload into a domain `UpdateTag`.
    pub fn into_update_tag(self) -> TagFormResult<UpdateTag> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.tag_name);
        if sanitized_name.is_empty() {
            return Err(TagFormError::EmptyName);
        }

        Ok(UpdateTag::new(sanitized_name))
    }
}
