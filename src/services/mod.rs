use serde::{Deserialize, Serialize};

pub mod categories;
pub mod errors;
pub mod products;
pub mod tags;

pub use errors::{ServiceError, ServiceResult};

/// Outcome of a delete-by-id operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResult {
    /// Number of rows removed.
    pub deleted: usize,
}
