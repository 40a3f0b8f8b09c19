use std::sync::Arc;

use uuid::Uuid;

use super::errors::DomainError;
use super::order::{Customer, NewOrder, Order, Product, ProductQuantity};

pub trait CustomerLookup: Send + Sync + 'static {
    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError>;
}

pub trait ProductCatalog: Send + Sync + 'static {
    /// Returns the products whose id appears in `products`. Unknown ids are
    /// skipped and the quantities are ignored.
    fn find_all_by_id(&self, products: &[ProductQuantity]) -> Result<Vec<Product>, DomainError>;

    /// Sets each listed product's available quantity to the given value.
    fn update_quantity(&self, products: &[ProductQuantity]) -> Result<(), DomainError>;
}

pub trait OrderStore: Send + Sync + 'static {
    /// Persists the order and its lines as one unit and returns it with its
    /// assigned identity.
    fn create(&self, order: NewOrder) -> Result<Order, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError>;
}

// Shared handles forward to the wrapped adapter, so a service can hold
// `Arc<dyn ...>` ports.

impl<T: CustomerLookup + ?Sized> CustomerLookup for Arc<T> {
    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        (**self).find_by_id(id)
    }
}

impl<T: ProductCatalog + ?Sized> ProductCatalog for Arc<T> {
    fn find_all_by_id(&self, products: &[ProductQuantity]) -> Result<Vec<Product>, DomainError> {
        (**self).find_all_by_id(products)
    }

    fn update_quantity(&self, products: &[ProductQuantity]) -> Result<(), DomainError> {
        (**self).update_quantity(products)
    }
}

impl<T: OrderStore + ?Sized> OrderStore for Arc<T> {
    fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        (**self).create(order)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        (**self).find_by_id(id)
    }
}
