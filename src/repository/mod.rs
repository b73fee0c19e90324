use crate::db::{DbConnection, DbPool};
use crate::domain::{
    category::{Category, CategoryWithProducts, NewCategory, UpdateCategory},
    product::{NewProduct, Product, ProductDetails, UpdateProduct},
    product_tag::{NewProductTag, ProductTag},
    tag::{NewTag, Tag, TagWithProducts, UpdateTag},
};

pub mod category;
pub mod errors;
pub mod product;
pub mod product_tag;
pub mod tag;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over category records.
pub trait CategoryReader {
    fn list_categories(&self) -> RepositoryResult<Vec<CategoryWithProducts>>;
    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<CategoryWithProducts>>;
}

/// Write operations over category records.
///
/// `update_category` and `delete_category` return `RepositoryError::NotFound`
/// when no row matches.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        category_id: i32,
        updates: &UpdateCategory,
    ) -> RepositoryResult<Category>;
    fn delete_category(&self, category_id: i32) -> RepositoryResult<usize>;
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn list_products(&self) -> RepositoryResult<Vec<ProductDetails>>;
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<ProductDetails>>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<usize>;
}

/// Read-only operations over product-tag associations.
pub trait ProductTagReader {
    fn list_product_tags(&self, product_id: i32) -> RepositoryResult<Vec<ProductTag>>;
}

/// Write operations over product-tag associations.
pub trait ProductTagWriter {
    fn create_product_tags(
        &self,
        new_product_tags: &[NewProductTag],
    ) -> RepositoryResult<Vec<ProductTag>>;
    fn delete_product_tags(&self, product_tag_ids: &[i32]) -> RepositoryResult<usize>;
}

/// Read-only operations over tag records.
pub trait TagReader {
    fn list_tags(&self) -> RepositoryResult<Vec<TagWithProducts>>;
    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<TagWithProducts>>;
}

/// Write operations over tag records.
pub trait TagWriter {
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
    fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag>;
    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<usize>;
}
