//! The record store boundary. Handlers only ever see [`CustomerStore`]; the
//! production Lambdas plug in [`DynamoDbStore`], tests use `MemoryStore`
//! (built for unit tests or with the `memory-store` feature).

/*---------- Imports ----------*/
use crate::models::customer::{Customer, CustomerFields};
use async_trait::async_trait;
use thiserror::Error;

pub mod dynamodb;
#[cfg(any(test, feature = "memory-store"))]
pub mod memory;

pub use dynamodb::DynamoDbStore;
#[cfg(any(test, feature = "memory-store"))]
pub use memory::MemoryStore;

/*---------- Enums ----------*/
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Request(String),

    #[error("Couldn't decode stored customer: {0}")]
    Decode(String),

    #[error("Couldn't encode customer: {0}")]
    Encode(String),
}

/*---------- Structs ----------*/

/// One page of a full-collection scan. `next_cursor` is `None` on the last page.
#[derive(Debug, Default)]
pub struct ScanPage {
    pub customers: Vec<Customer>,
    pub next_cursor: Option<String>,
}

#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Unconditional insert. An existing record under the same id is replaced.
    async fn put(&self, customer: &Customer) -> Result<(), StoreError>;

    async fn get(&self, customer_id: &str) -> Result<Option<Customer>, StoreError>;

    /// Overwrites all mutable fields and returns the record as stored afterwards.
    /// Writing to an id that doesn't exist creates it.
    async fn update(
        &self,
        customer_id: &str,
        fields: &CustomerFields,
    ) -> Result<Customer, StoreError>;

    /// Deleting an absent id is not an error.
    async fn delete(&self, customer_id: &str) -> Result<(), StoreError>;

    /// Reads one page of the collection, starting after `cursor`.
    async fn scan_page(&self, cursor: Option<String>) -> Result<ScanPage, StoreError>;

    /// Drains every page of the collection.
    async fn list_all(&self) -> Result<Vec<Customer>, StoreError> {
        let mut customers = Vec::new();
        let mut cursor = None;

        loop {
            let page = self.scan_page(cursor).await?;
            customers.extend(page.customers);

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        Ok(customers)
    }
}
