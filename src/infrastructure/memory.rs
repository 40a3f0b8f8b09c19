//! In-memory adapters used by the unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use bigdecimal::BigDecimal;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{Customer, NewOrder, Order, OrderLine, Product, ProductQuantity};
use crate::domain::ports::{CustomerLookup, OrderStore, ProductCatalog};

#[derive(Default)]
struct State {
    customers: HashMap<Uuid, Customer>,
    products: HashMap<Uuid, Product>,
    orders: Vec<Order>,
    stock_updates: Vec<Vec<ProductQuantity>>,
    fail_order_writes: bool,
}

/// Implements all three ports over one shared state; clones share it.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("in-memory store poisoned")
    }

    pub fn add_customer(&self, name: &str, email: &str) -> Customer {
        let customer = Customer {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
        };
        self.state()
            .customers
            .insert(customer.id, customer.clone());
        customer
    }

    pub fn add_product(&self, name: &str, price: BigDecimal, quantity: i32) -> Uuid {
        let id = Uuid::new_v4();
        self.state().products.insert(
            id,
            Product {
                id,
                name: name.to_string(),
                price,
                quantity,
            },
        );
        id
    }

    pub fn set_price(&self, id: Uuid, price: BigDecimal) {
        if let Some(product) = self.state().products.get_mut(&id) {
            product.price = price;
        }
    }

    pub fn stock(&self, id: Uuid) -> Option<i32> {
        self.state().products.get(&id).map(|p| p.quantity)
    }

    pub fn order_count(&self) -> usize {
        self.state().orders.len()
    }

    pub fn stock_updates(&self) -> Vec<Vec<ProductQuantity>> {
        self.state().stock_updates.clone()
    }

    pub fn fail_order_writes(&self) {
        self.state().fail_order_writes = true;
    }
}

impl CustomerLookup for InMemoryStore {
    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        Ok(self.state().customers.get(&id).cloned())
    }
}

impl ProductCatalog for InMemoryStore {
    fn find_all_by_id(&self, products: &[ProductQuantity]) -> Result<Vec<Product>, DomainError> {
        let state = self.state();
        let mut found: Vec<Product> = Vec::new();
        for requested in products {
            if found.iter().any(|p| p.id == requested.id) {
                continue;
            }
            if let Some(product) = state.products.get(&requested.id) {
                found.push(product.clone());
            }
        }
        Ok(found)
    }

    fn update_quantity(&self, products: &[ProductQuantity]) -> Result<(), DomainError> {
        let mut state = self.state();
        for update in products {
            if let Some(product) = state.products.get_mut(&update.id) {
                product.quantity = update.quantity;
            }
        }
        state.stock_updates.push(products.to_vec());
        Ok(())
    }
}

impl OrderStore for InMemoryStore {
    fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        let mut state = self.state();
        if state.fail_order_writes {
            return Err(DomainError::Internal("order store unavailable".to_string()));
        }
        let order = Order {
            id: Uuid::new_v4(),
            customer: order.customer,
            created_at: Utc::now(),
            lines: order
                .lines
                .into_iter()
                .map(|l| OrderLine {
                    id: Uuid::new_v4(),
                    product_id: l.product_id,
                    quantity: l.quantity,
                    price: l.price,
                })
                .collect(),
        };
        state.orders.push(order.clone());
        Ok(order)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        Ok(self.state().orders.iter().find(|o| o.id == id).cloned())
    }
}
