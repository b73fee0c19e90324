use crate::domain::category::{Category, CategoryWithProducts};
use crate::forms::categories::CategoryForm;
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{DeleteResult, ServiceError, ServiceResult};

/// Lists every category together with its products.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryWithProducts>>
where
    R: CategoryReader + ?Sized,
{
    repo.list_categories().map_err(ServiceError::from)
}

/// Loads a single category, failing with `NotFound` when it does not exist.
pub fn get_category<R>(repo: &R, category_id: i32) -> ServiceResult<CategoryWithProducts>
where
    R: CategoryReader + ?Sized,
{
    repo.get_category_by_id(category_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new category.
pub fn create_category<R>(repo: &R, form: CategoryForm) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let new_category = form
        .into_new_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_category(&new_category)
        .map_err(ServiceError::from)
}

/// Renames an existing category.
pub fn modify_category<R>(repo: &R, category_id: i32, form: CategoryForm) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let updates = form
        .into_update_category()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_category(category_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes a category. Its products stay, detached from any category.
pub fn remove_category<R>(repo: &R, category_id: i32) -> ServiceResult<DeleteResult>
where
    R: CategoryWriter + ?Sized,
{
    let deleted = repo
        .delete_category(category_id)
        .map_err(ServiceError::from)?;

    Ok(DeleteResult { deleted })
}
