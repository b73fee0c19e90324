use serde::{Deserialize, Serialize};

use crate::domain::product::{Product, ProductDetails};
use crate::domain::product_tag::{NewProductTag, ProductTag, TagDiff};
use crate::forms::products::ProductForm;
use crate::repository::{ProductReader, ProductTagReader, ProductTagWriter, ProductWriter};
use crate::services::{DeleteResult, ServiceError, ServiceResult};

/// Response of a product creation.
///
/// Without tags the created product is returned; with tags the created
/// association rows are returned instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CreatedProduct {
    Product(Product),
    Tags(Vec<ProductTag>),
}

/// Combined outcome of a product update and tag reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductUpdate {
    /// Product row after the scalar update.
    pub product: Product,
    /// Number of association rows deleted.
    pub removed: usize,
    /// Association rows inserted.
    pub added: Vec<ProductTag>,
}

/// Lists every product with its category and tags.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<ProductDetails>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products().map_err(ServiceError::from)
}

/// Loads a single product. A missing product yields `Ok(None)`, not `NotFound`.
pub fn get_product<R>(repo: &R, product_id: i32) -> ServiceResult<Option<ProductDetails>>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)
}

/// Creates a product and attaches the requested tags.
///
/// The product row stays committed when attaching the tags fails; the
/// error is returned to the caller.
pub fn create_product<R>(repo: &R, form: ProductForm) -> ServiceResult<CreatedProduct>
where
    R: ProductWriter + ProductTagWriter + ?Sized,
{
    let payload = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let created = repo
        .create_product(&payload.product)
        .map_err(ServiceError::from)?;

    if payload.tag_ids.is_empty() {
        return Ok(CreatedProduct::Product(created));
    }

    let pairs: Vec<NewProductTag> = payload
        .tag_ids
        .iter()
        .map(|tag_id| NewProductTag::new(created.id, *tag_id))
        .collect();

    match repo.create_product_tags(&pairs) {
        Ok(rows) => Ok(CreatedProduct::Tags(rows)),
        Err(err) => {
            log::error!("Failed to attach tags to product {}: {err}", created.id);
            Err(ServiceError::from(err))
        }
    }
}

/// Updates a product's fields and reconciles its tags with the requested set.
///
/// Unchanged associations are kept as-is. When the request carries no tag
/// list the associations are not touched at all. A failure while deleting or
/// inserting associations aborts the update without undoing earlier steps.
pub fn modify_product<R>(
    repo: &R,
    product_id: i32,
    form: ProductForm,
) -> ServiceResult<ProductUpdate>
where
    R: ProductWriter + ProductTagReader + ProductTagWriter + ?Sized,
{
    let payload = form
        .into_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let product = repo
        .update_product(product_id, &payload.product)
        .map_err(ServiceError::from)?;

    let Some(desired) = payload.tag_ids else {
        return Ok(ProductUpdate {
            product,
            removed: 0,
            added: Vec::new(),
        });
    };

    let current = repo
        .list_product_tags(product_id)
        .map_err(ServiceError::from)?;

    let diff = TagDiff::compute(product_id, &current, &desired);
    if diff.is_empty() {
        return Ok(ProductUpdate {
            product,
            removed: 0,
            added: Vec::new(),
        });
    }

    log::debug!(
        "Reconciling tags for product {product_id}: {} to add, {} to remove",
        diff.to_add.len(),
        diff.to_remove.len()
    );

    let removed = repo
        .delete_product_tags(&diff.to_remove)
        .map_err(ServiceError::from)?;
    let added = repo
        .create_product_tags(&diff.to_add)
        .map_err(ServiceError::from)?;

    Ok(ProductUpdate {
        product,
        removed,
        added,
    })
}

/// Deletes a product together with its tag associations.
pub fn remove_product<R>(repo: &R, product_id: i32) -> ServiceResult<DeleteResult>
where
    R: ProductWriter + ?Sized,
{
    let deleted = repo
        .delete_product(product_id)
        .map_err(ServiceError::from)?;

    Ok(DeleteResult { deleted })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;

    use crate::repository::RepositoryError;
    use crate::repository::mock::{MockProductReader, MockProductStore};

    fn sample_product(id: i32) -> Product {
        Product {
            id,
            product_name: "Ball".to_string(),
            price_cents: 999,
            stock: 10,
            category_id: Some(1),
        }
    }

    fn form(tag_ids: Option<Vec<i32>>) -> ProductForm {
        ProductForm {
            product_name: "Ball".to_string(),
            price: 9.99,
            stock: 10,
            category_id: Some(1),
            tag_ids,
        }
    }

    fn row(id: i32, product_id: i32, tag_id: i32) -> ProductTag {
        ProductTag {
            id,
            product_id,
            tag_id,
        }
    }

    #[test]
    fn get_product_returns_none_for_missing_row() {
        let mut repo = MockProductReader::new();

        repo.expect_get_product_by_id()
            .times(1)
            .withf(|id| *id == 404)
            .returning(|_| Ok(None));

        let result = get_product(&repo, 404).expect("expected success");

        assert!(result.is_none());
    }

    #[test]
    fn create_product_without_tags_returns_product() {
        let mut repo = MockProductStore::new();

        repo.expect_create_product()
            .times(1)
            .withf(|new_product| {
                assert_eq!(new_product.product_name, "Ball");
                assert_eq!(new_product.price_cents, 999);
                assert_eq!(new_product.category_id, Some(1));
                true
            })
            .returning(|_| Ok(sample_product(1)));
        repo.expect_create_product_tags().never();

        let created = create_product(&repo, form(Some(Vec::new()))).expect("expected success");

        assert_eq!(created, CreatedProduct::Product(sample_product(1)));
    }

    #[test]
    fn create_product_with_tags_returns_association_rows() {
        let mut repo = MockProductStore::new();

        repo.expect_create_product()
            .times(1)
            .returning(|_| Ok(sample_product(8)));
        repo.expect_create_product_tags()
            .times(1)
            .withf(|pairs| {
                assert_eq!(
                    pairs.to_vec(),
                    vec![NewProductTag::new(8, 1), NewProductTag::new(8, 2)]
                );
                true
            })
            .returning(|_| Ok(vec![row(1, 8, 1), row(2, 8, 2)]));

        let created = create_product(&repo, form(Some(vec![1, 2]))).expect("expected success");

        assert_eq!(
            created,
            CreatedProduct::Tags(vec![row(1, 8, 1), row(2, 8, 2)])
        );
    }

    #[test]
    fn create_product_keeps_product_when_tags_fail() {
        let mut repo = MockProductStore::new();

        repo.expect_create_product()
            .times(1)
            .returning(|_| Ok(sample_product(8)));
        repo.expect_create_product_tags().times(1).returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "FOREIGN KEY constraint failed".to_string(),
            ))
        });
        repo.expect_delete_product().never();

        let result = create_product(&repo, form(Some(vec![77])));

        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn modify_product_reconciles_tag_set() {
        let mut repo = MockProductStore::new();
        let mut seq = Sequence::new();

        repo.expect_update_product()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|product_id, _| *product_id == 1)
            .returning(|_, _| Ok(sample_product(1)));
        repo.expect_list_product_tags()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![row(10, 1, 1), row(11, 1, 2), row(12, 1, 3)]));
        repo.expect_delete_product_tags()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|ids| ids.to_vec() == vec![10])
            .returning(|ids| Ok(ids.len()));
        repo.expect_create_product_tags()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|pairs| pairs.to_vec() == vec![NewProductTag::new(1, 4)])
            .returning(|_| Ok(vec![row(13, 1, 4)]));

        let update =
            modify_product(&repo, 1, form(Some(vec![2, 3, 4]))).expect("expected success");

        assert_eq!(update.removed, 1);
        assert_eq!(update.added, vec![row(13, 1, 4)]);
    }

    #[test]
    fn modify_product_with_matching_tags_changes_nothing() {
        let mut repo = MockProductStore::new();

        repo.expect_update_product()
            .times(1)
            .returning(|_, _| Ok(sample_product(1)));
        repo.expect_list_product_tags()
            .times(1)
            .returning(|_| Ok(vec![row(11, 1, 2), row(12, 1, 3)]));
        repo.expect_delete_product_tags().never();
        repo.expect_create_product_tags().never();

        let update = modify_product(&repo, 1, form(Some(vec![3, 2]))).expect("expected success");

        assert_eq!(update.removed, 0);
        assert!(update.added.is_empty());
    }

    #[test]
    fn modify_product_without_tag_ids_skips_reconciliation() {
        let mut repo = MockProductStore::new();

        repo.expect_update_product()
            .times(1)
            .returning(|_, _| Ok(sample_product(1)));
        repo.expect_list_product_tags().never();
        repo.expect_delete_product_tags().never();
        repo.expect_create_product_tags().never();

        let update = modify_product(&repo, 1, form(None)).expect("expected success");

        assert_eq!(update.product, sample_product(1));
        assert_eq!(update.removed, 0);
    }

    #[test]
    fn modify_product_missing_row_is_not_found() {
        let mut repo = MockProductStore::new();

        repo.expect_update_product()
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));
        repo.expect_list_product_tags().never();

        let result = modify_product(&repo, 55, form(Some(vec![1])));

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn modify_product_fails_when_insert_fails() {
        let mut repo = MockProductStore::new();

        repo.expect_update_product()
            .times(1)
            .returning(|_, _| Ok(sample_product(1)));
        repo.expect_list_product_tags()
            .times(1)
            .returning(|_| Ok(vec![row(10, 1, 1)]));
        repo.expect_delete_product_tags()
            .times(1)
            .returning(|_| Ok(1));
        repo.expect_create_product_tags().times(1).returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "FOREIGN KEY constraint failed".to_string(),
            ))
        });

        let result = modify_product(&repo, 1, form(Some(vec![99])));

        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn remove_product_reports_deleted_rows() {
        let mut repo = MockProductStore::new();

        repo.expect_delete_product()
            .times(1)
            .withf(|product_id| *product_id == 2)
            .returning(|_| Ok(1));

        let result = remove_product(&repo, 2).expect("expected success");

        assert_eq!(result.deleted, 1);
    }
}
