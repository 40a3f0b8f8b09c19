use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::Customer;
use crate::domain::ports::CustomerLookup;
use crate::schema::customers;

use super::models::CustomerRow;

pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerLookup for DieselCustomerRepository {
    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = customers::table
            .find(id)
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Customer::from))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::DieselCustomerRepository;
    use crate::domain::ports::CustomerLookup;
    use crate::infrastructure::test_db::{insert_customer, setup_db};

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn find_by_id_returns_existing_customer() {
        let (_container, pool) = setup_db().await;
        let id = insert_customer(&pool, "Ada");
        let repo = DieselCustomerRepository::new(pool);

        let customer = repo
            .find_by_id(id)
            .expect("find failed")
            .expect("customer should exist");

        assert_eq!(customer.id, id);
        assert_eq!(customer.name, "Ada");
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn find_by_id_returns_none_for_unknown_id() {
        let (_container, pool) = setup_db().await;
        let repo = DieselCustomerRepository::new(pool);

        let result = repo
            .find_by_id(Uuid::new_v4())
            .expect("find should not error");

        assert!(result.is_none());
    }
}
