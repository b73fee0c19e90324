use std::collections::{BTreeSet, HashMap};

use catalog_api::domain::product_tag::ProductTag;
use catalog_api::domain::tag::NewTag;
use catalog_api::forms::products::ProductForm;
use catalog_api::repository::{DieselRepository, ProductTagReader, TagWriter};
use catalog_api::services::ServiceError;
use catalog_api::services::products::{self, CreatedProduct};

mod common;

fn form(tag_ids: Option<Vec<i32>>) -> ProductForm {
    ProductForm {
        product_name: "Basketball".to_string(),
        price: 200.0,
        stock: 3,
        category_id: None,
        tag_ids,
    }
}

fn seed_tags(repo: &DieselRepository, ids: &[i32]) {
    for id in ids {
        repo.create_tag(&NewTag::new(format!("tag {id}")).with_id(*id))
            .expect("create tag");
    }
}

fn tag_set(rows: &[ProductTag]) -> BTreeSet<i32> {
    rows.iter().map(|row| row.tag_id).collect()
}

fn create_with_tags(repo: &DieselRepository, tag_ids: Vec<i32>) -> i32 {
    match products::create_product(repo, form(Some(tag_ids))).expect("create product") {
        CreatedProduct::Tags(rows) => rows[0].product_id,
        CreatedProduct::Product(product) => panic!("expected tag rows, got {product:?}"),
    }
}

#[test]
fn update_reconciles_tags_without_touching_unchanged_rows() {
    let test_db = common::TestDb::new("service_update_reconciles_tags.db");
    let repo = DieselRepository::new(test_db.pool());
    seed_tags(&repo, &[1, 2, 3, 4]);

    let product_id = create_with_tags(&repo, vec![1, 2, 3]);
    let before: HashMap<i32, i32> = repo
        .list_product_tags(product_id)
        .expect("list tags")
        .into_iter()
        .map(|row| (row.tag_id, row.id))
        .collect();

    let update = products::modify_product(&repo, product_id, form(Some(vec![2, 3, 4])))
        .expect("update product");
    assert_eq!(update.removed, 1);
    assert_eq!(tag_set(&update.added), BTreeSet::from([4]));

    let after = repo.list_product_tags(product_id).expect("list tags");
    assert_eq!(tag_set(&after), BTreeSet::from([2, 3, 4]));

    for row in &after {
        if row.tag_id == 2 || row.tag_id == 3 {
            assert_eq!(Some(&row.id), before.get(&row.tag_id));
        }
    }
}

#[test]
fn update_reconciliation_is_idempotent() {
    let test_db = common::TestDb::new("service_update_reconciliation_idempotent.db");
    let repo = DieselRepository::new(test_db.pool());
    seed_tags(&repo, &[1, 2, 3]);

    let product_id = create_with_tags(&repo, vec![1]);

    products::modify_product(&repo, product_id, form(Some(vec![2, 3]))).expect("first update");
    let first = repo.list_product_tags(product_id).expect("list tags");

    let second = products::modify_product(&repo, product_id, form(Some(vec![2, 3])))
        .expect("second update");
    assert_eq!(second.removed, 0);
    assert!(second.added.is_empty());

    let after = repo.list_product_tags(product_id).expect("list tags");
    assert_eq!(after, first);
    assert_eq!(after.len(), 2);
}

#[test]
fn update_without_tag_ids_keeps_associations() {
    let test_db = common::TestDb::new("service_update_without_tag_ids.db");
    let repo = DieselRepository::new(test_db.pool());
    seed_tags(&repo, &[1, 2]);

    let product_id = create_with_tags(&repo, vec![1, 2]);

    let update =
        products::modify_product(&repo, product_id, form(None)).expect("update product");
    assert_eq!(update.product.price_cents, 20000);

    let after = repo.list_product_tags(product_id).expect("list tags");
    assert_eq!(tag_set(&after), BTreeSet::from([1, 2]));
}

#[test]
fn create_keeps_product_when_tags_are_unknown() {
    let test_db = common::TestDb::new("service_create_keeps_product.db");
    let repo = DieselRepository::new(test_db.pool());

    let result = products::create_product(&repo, form(Some(vec![77])));
    assert!(matches!(result, Err(ServiceError::Conflict(_))));

    let listed = products::list_products(&repo).expect("list products");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].product.product_name, "Basketball");
    assert!(listed[0].tags.is_empty());
}
