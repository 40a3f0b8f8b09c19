use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{Product, ProductQuantity};
use crate::domain::ports::ProductCatalog;
use crate::schema::products;

use super::models::ProductRow;

pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ProductCatalog for DieselProductRepository {
    fn find_all_by_id(&self, requested: &[ProductQuantity]) -> Result<Vec<Product>, DomainError> {
        let ids: Vec<Uuid> = requested.iter().map(|p| p.id).collect();
        let mut conn = self.pool.get()?;

        let rows = products::table
            .filter(products::id.eq_any(ids))
            .select(ProductRow::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn update_quantity(&self, updates: &[ProductQuantity]) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        // Applied in request order, so the last entry for a repeated id wins.
        conn.transaction::<_, DomainError, _>(|conn| {
            for update in updates {
                diesel::update(products::table.find(update.id))
                    .set(products::quantity.eq(update.quantity))
                    .execute(conn)?;
            }
            Ok(())
        })
    }
}
