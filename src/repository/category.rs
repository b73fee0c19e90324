use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::{
    Category as DomainCategory, CategoryProduct, CategoryWithProducts,
    NewCategory as DomainNewCategory, UpdateCategory as DomainUpdateCategory,
};
use crate::models::category::{
    Category as DbCategory, NewCategory as DbNewCategory, UpdateCategory as DbUpdateCategory,
};
use crate::repository::{
    CategoryReader, CategoryWriter, DieselRepository, RepositoryError, RepositoryResult,
};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<CategoryWithProducts>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let db_categories = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?;

        attach_products(&mut conn, db_categories)
    }

    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<CategoryWithProducts>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .find(id)
            .first::<DbCategory>(&mut conn)
            .optional()?;

        match category {
            Some(db_category) => Ok(attach_products(&mut conn, vec![db_category])?.pop()),
            None => Ok(None),
        }
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(
        &self,
        new_category: &DomainNewCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let insertable = DbNewCategory::from(new_category);

        let created = diesel::insert_into(categories::table)
            .values(&insertable)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.into())
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &DomainUpdateCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateCategory::from(updates);

        let updated = diesel::update(categories::table.find(category_id))
            .set(&db_updates)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        // Products keep existing; `ON DELETE SET NULL` clears their category_id.
        let deleted = diesel::delete(categories::table.find(category_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(deleted)
    }
}

fn attach_products(
    conn: &mut SqliteConnection,
    db_categories: Vec<DbCategory>,
) -> RepositoryResult<Vec<CategoryWithProducts>> {
    use crate::schema::products;

    if db_categories.is_empty() {
        return Ok(Vec::new());
    }

    let category_ids: Vec<i32> = db_categories.iter().map(|category| category.id).collect();

    let rows = products::table
        .filter(products::category_id.eq_any(&category_ids))
        .order(products::id.asc())
        .select((products::id, products::product_name, products::category_id))
        .load::<(i32, String, Option<i32>)>(conn)?;

    let mut products_by_category: HashMap<i32, Vec<CategoryProduct>> = HashMap::new();
    for (id, product_name, category_id) in rows {
        if let Some(category_id) = category_id {
            products_by_category
                .entry(category_id)
                .or_default()
                .push(CategoryProduct { id, product_name });
        }
    }

    Ok(db_categories
        .into_iter()
        .map(|db_category| {
            let products = products_by_category
                .remove(&db_category.id)
                .unwrap_or_default();
            CategoryWithProducts {
                category: db_category.into(),
                products,
            }
        })
        .collect())
}
