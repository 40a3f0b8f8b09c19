use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, Order, OrderLineInput, Product, ProductQuantity};
use crate::domain::ports::{CustomerLookup, OrderStore, ProductCatalog};

/// The service as wired into the HTTP layer, with its adapters behind shared
/// trait objects.
pub type DynOrderService =
    OrderService<Arc<dyn CustomerLookup>, Arc<dyn ProductCatalog>, Arc<dyn OrderStore>>;

pub struct OrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> OrderService<C, P, O>
where
    C: CustomerLookup,
    P: ProductCatalog,
    O: OrderStore,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Places an order for `customer_id` and takes the ordered quantities out
    /// of stock.
    ///
    /// Every check runs before anything is written, so a rejected request
    /// leaves no order and no stock change behind. Each requested line is
    /// checked on its own against the quantities read at the start of the
    /// call; repeated product ids are not merged.
    pub fn create_order(
        &self,
        customer_id: Uuid,
        products: &[ProductQuantity],
    ) -> Result<Order, DomainError> {
        let customer = self
            .customers
            .find_by_id(customer_id)?
            .ok_or_else(|| rejected(DomainError::InvalidCustomer(customer_id)))?;

        let found = self.products.find_all_by_id(products)?;
        if found.is_empty() {
            return Err(rejected(DomainError::ProductsNotFound));
        }

        let catalog: HashMap<Uuid, &Product> = found.iter().map(|p| (p.id, p)).collect();

        let mut resolved = Vec::with_capacity(products.len());
        let mut unknown = Vec::new();
        for requested in products {
            match catalog.get(&requested.id) {
                Some(product) => resolved.push((requested, *product)),
                None => unknown.push(requested.id),
            }
        }
        if !unknown.is_empty() {
            return Err(rejected(DomainError::InvalidProductSelection(unknown)));
        }

        let unavailable: Vec<Uuid> = resolved
            .iter()
            .filter(|(requested, product)| product.quantity < requested.quantity)
            .map(|(requested, _)| requested.id)
            .collect();
        if !unavailable.is_empty() {
            return Err(rejected(DomainError::InsufficientQuantity(unavailable)));
        }

        let lines = resolved
            .iter()
            .map(|(requested, product)| OrderLineInput {
                product_id: requested.id,
                quantity: requested.quantity,
                price: product.price.clone(),
            })
            .collect();

        let order = self.orders.create(NewOrder { customer, lines })?;

        let remaining: Vec<ProductQuantity> = resolved
            .iter()
            .map(|(requested, product)| ProductQuantity {
                id: requested.id,
                quantity: product.quantity - requested.quantity,
            })
            .collect();
        self.products.update_quantity(&remaining)?;

        log::info!(
            "Created order {} for customer {} with {} line(s)",
            order.id,
            order.customer.id,
            order.lines.len()
        );

        Ok(order)
    }

    pub fn get_order(&self, id: Uuid) -> Result<Order, DomainError> {
        self.orders.find_by_id(id)?.ok_or(DomainError::NotFound)
    }
}

fn rejected(err: DomainError) -> DomainError {
    log::warn!("Order rejected: {}", err);
    err
}
