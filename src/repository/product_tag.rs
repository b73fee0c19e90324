use diesel::prelude::*;

use crate::domain::product_tag::{
    NewProductTag as DomainNewProductTag, ProductTag as DomainProductTag,
};
use crate::models::product_tag::{NewProductTag as DbNewProductTag, ProductTag as DbProductTag};
use crate::repository::{
    DieselRepository, ProductTagReader, ProductTagWriter, RepositoryError, RepositoryResult,
};

impl ProductTagReader for DieselRepository {
    fn list_product_tags(&self, product_id: i32) -> RepositoryResult<Vec<DomainProductTag>> {
        use crate::schema::product_tags;

        let mut conn = self.conn()?;

        let rows = product_tags::table
            .filter(product_tags::product_id.eq(product_id))
            .order(product_tags::id.asc())
            .load::<DbProductTag>(&mut conn)?;

        Ok(rows.into_iter().map(DomainProductTag::from).collect())
    }
}

impl ProductTagWriter for DieselRepository {
    fn create_product_tags(
        &self,
        new_product_tags: &[DomainNewProductTag],
    ) -> RepositoryResult<Vec<DomainProductTag>> {
        use crate::schema::product_tags;

        if new_product_tags.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;

        // SQLite cannot return rows from a batch insert, so rows go in one by one.
        conn.transaction::<Vec<DomainProductTag>, RepositoryError, _>(|conn| {
            let mut created = Vec::with_capacity(new_product_tags.len());

            for new_product_tag in new_product_tags {
                let row = diesel::insert_into(product_tags::table)
                    .values(DbNewProductTag::from(new_product_tag))
                    .get_result::<DbProductTag>(conn)?;
                created.push(DomainProductTag::from(row));
            }

            Ok(created)
        })
    }

    fn delete_product_tags(&self, product_tag_ids: &[i32]) -> RepositoryResult<usize> {
        use crate::schema::product_tags;

        if product_tag_ids.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(product_tags::table.filter(product_tags::id.eq_any(product_tag_ids)))
                .execute(&mut conn)?;

        Ok(deleted)
    }
}
