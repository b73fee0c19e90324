use crate::domain::tag::{Tag, TagWithProducts};
use crate::forms::tags::{AddTagForm, EditTagForm};
use crate::repository::{TagReader, TagWriter};
use crate::services::{DeleteResult, ServiceError, ServiceResult};

/// Lists every tag together with the products it is attached to.
pub fn list_tags<R>(repo: &R) -> ServiceResult<Vec<TagWithProducts>>
where
    R: TagReader + ?Sized,
{
    repo.list_tags().map_err(ServiceError::from)
}

/// Loads a single tag, failing with `NotFound` when it does not exist.
pub fn get_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<TagWithProducts>
where
    R: TagReader + ?Sized,
{
    repo.get_tag_by_id(tag_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new tag, honouring a client-supplied identifier.
pub fn create_tag<R>(repo: &R, form: AddTagForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    let new_tag = form
        .into_new_tag()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_tag(&new_tag).map_err(ServiceError::from)
}

/// Renames an existing tag.
pub fn modify_tag<R>(repo: &R, tag_id: i32, form: EditTagForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    let update = form
        .into_update_tag()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_tag(tag_id, &update).map_err(ServiceError::from)
}

/// Deletes a tag together with its product associations.
pub fn remove_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<DeleteResult>
where
    R: TagWriter + ?Sized,
{
    let deleted = repo.delete_tag(tag_id).map_err(ServiceError::from)?;

    Ok(DeleteResult { deleted })
}
