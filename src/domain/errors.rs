use thiserror::Error;
use uuid::Uuid;

/// The expected, user-facing ways order creation can be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessErrorKind {
    InvalidCustomer,
    ProductsNotFound,
    InvalidProductSelection,
    InsufficientQuantity,
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid customer: {0}")]
    InvalidCustomer(Uuid),
    #[error("Could not find any of the requested products")]
    ProductsNotFound,
    #[error("Invalid product selection: {} unknown product(s)", .0.len())]
    InvalidProductSelection(Vec<Uuid>),
    #[error("Quantity not available for {} product(s)", .0.len())]
    InsufficientQuantity(Vec<Uuid>),
    #[error("Order not found")]
    NotFound,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Business errors are raised by the workflow itself; anything else is a
    /// fault coming from a collaborator.
    pub fn kind(&self) -> Option<BusinessErrorKind> {
        match self {
            DomainError::InvalidCustomer(_) => Some(BusinessErrorKind::InvalidCustomer),
            DomainError::ProductsNotFound => Some(BusinessErrorKind::ProductsNotFound),
            DomainError::InvalidProductSelection(_) => {
                Some(BusinessErrorKind::InvalidProductSelection)
            }
            DomainError::InsufficientQuantity(_) => Some(BusinessErrorKind::InsufficientQuantity),
            DomainError::NotFound | DomainError::Internal(_) => None,
        }
    }
}
