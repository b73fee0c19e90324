use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::category::Category as DomainCategory,
    domain::product::{
        NewProduct as DomainNewProduct, Product as DomainProduct, ProductDetails,
        UpdateProduct as DomainUpdateProduct,
    },
    domain::tag::Tag as DomainTag,
    models::category::Category as DbCategory,
    models::product::{
        NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
    },
    models::tag::Tag as DbTag,
    repository::{DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult},
};

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<ProductDetails>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let db_products = products::table
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?;

        load_product_details(&mut conn, db_products)
    }

    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<ProductDetails>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .find(id)
            .first::<DbProduct>(&mut conn)
            .optional()?;

        match product {
            Some(db_product) => Ok(load_product_details(&mut conn, vec![db_product])?.pop()),
            None => Ok(None),
        }
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        let created = diesel::insert_into(products::table)
            .values(&db_new)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateProduct::from(updates);

        let updated = diesel::update(products::table.find(product_id))
            .set(&db_updates)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        // `ON DELETE CASCADE` on product_tags drops the product's associations.
        let deleted = diesel::delete(products::table.find(product_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(deleted)
    }
}

fn load_product_details(
    conn: &mut SqliteConnection,
    db_products: Vec<DbProduct>,
) -> RepositoryResult<Vec<ProductDetails>> {
    use crate::schema::{categories, product_tags, tags};

    if db_products.is_empty() {
        return Ok(Vec::new());
    }

    let product_ids: Vec<i32> = db_products.iter().map(|product| product.id).collect();
    let mut category_ids: Vec<i32> = db_products
        .iter()
        .filter_map(|product| product.category_id)
        .collect();
    category_ids.sort_unstable();
    category_ids.dedup();

    let category_map: HashMap<i32, DomainCategory> = if category_ids.is_empty() {
        HashMap::new()
    } else {
        categories::table
            .filter(categories::id.eq_any(&category_ids))
            .load::<DbCategory>(conn)?
            .into_iter()
            .map(|category| (category.id, category.into()))
            .collect()
    };

    let tag_rows = product_tags::table
        .inner_join(tags::table)
        .filter(product_tags::product_id.eq_any(&product_ids))
        .order((product_tags::product_id.asc(), tags::id.asc()))
        .select((product_tags::product_id, DbTag::as_select()))
        .load::<(i32, DbTag)>(conn)?;

    let mut tag_map: HashMap<i32, Vec<DomainTag>> = HashMap::new();
    for (product_id, db_tag) in tag_rows {
        tag_map.entry(product_id).or_default().push(db_tag.into());
    }

    Ok(db_products
        .into_iter()
        .map(|db_product| {
            let product: DomainProduct = db_product.into();
            let category = product
                .category_id
                .and_then(|category_id| category_map.get(&category_id).cloned());
            let tags = tag_map.remove(&product.id).unwrap_or_default();
            ProductDetails {
                product,
                category,
                tags,
            }
        })
        .collect())
}
