use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{Customer, NewOrder, Order, OrderLine};
use crate::domain::ports::OrderStore;
use crate::schema::{customers, order_lines, orders};

use super::models::{CustomerRow, NewOrderLineRow, NewOrderRow, OrderLineRow, OrderRow};

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderStore for DieselOrderRepository {
    fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            // 1. Insert the order
            let row = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    id: Uuid::new_v4(),
                    customer_id: order.customer.id,
                })
                .returning(OrderRow::as_returning())
                .get_result(conn)?;

            // 2. Insert order lines, keeping the request order
            let new_lines: Vec<NewOrderLineRow> = order
                .lines
                .iter()
                .zip(0..)
                .map(|(l, position)| NewOrderLineRow {
                    id: Uuid::new_v4(),
                    order_id: row.id,
                    position,
                    product_id: l.product_id,
                    quantity: l.quantity,
                    price: l.price.clone(),
                })
                .collect();
            let lines = diesel::insert_into(order_lines::table)
                .values(&new_lines)
                .returning(OrderLineRow::as_returning())
                .get_results(conn)?;

            Ok(assemble(row, order.customer, lines))
        })
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = orders::table
            .find(id)
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };

        let customer = customers::table
            .find(row.customer_id)
            .select(CustomerRow::as_select())
            .first(&mut conn)?;

        let lines = OrderLineRow::belonging_to(&row)
            .select(OrderLineRow::as_select())
            .load(&mut conn)?;

        Ok(Some(assemble(row, customer.into(), lines)))
    }
}

fn assemble(row: OrderRow, customer: Customer, mut lines: Vec<OrderLineRow>) -> Order {
    lines.sort_by_key(|l| l.position);
    Order {
        id: row.id,
        customer,
        created_at: row.created_at,
        lines: lines.into_iter().map(OrderLine::from).collect(),
    }
}
