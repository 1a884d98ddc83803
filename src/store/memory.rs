/*---------- Imports ----------*/
use super::{CustomerStore, ScanPage, StoreError};
use crate::models::customer::{Customer, CustomerFields};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::ops::Bound;
use tokio::sync::RwLock;

/*---------- Constants ----------*/
const DEFAULT_PAGE_SIZE: usize = 100;

/// In-process store with the same last-write-wins semantics as the table.
/// Pages are yielded in key order.
pub struct MemoryStore {
    customers: RwLock<BTreeMap<String, Customer>>,
    page_size: usize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(BTreeMap::new()),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn put(&self, customer: &Customer) -> Result<(), StoreError> {
        self.customers
            .write()
            .await
            .insert(customer.customer_id.to_owned(), customer.clone());

        Ok(())
    }

    async fn get(&self, customer_id: &str) -> Result<Option<Customer>, StoreError> {
        Ok(self.customers.read().await.get(customer_id).cloned())
    }

    async fn update(
        &self,
        customer_id: &str,
        fields: &CustomerFields,
    ) -> Result<Customer, StoreError> {
        let customer = Customer::new(customer_id, fields.clone());

        self.customers
            .write()
            .await
            .insert(customer_id.to_owned(), customer.clone());

        Ok(customer)
    }

    async fn delete(&self, customer_id: &str) -> Result<(), StoreError> {
        self.customers.write().await.remove(customer_id);

        Ok(())
    }

    async fn scan_page(&self, cursor: Option<String>) -> Result<ScanPage, StoreError> {
        let customers = self.customers.read().await;

        let lower_bound = match &cursor {
            Some(last_key) => Bound::Excluded(last_key.to_owned()),
            None => Bound::Unbounded,
        };

        let page: Vec<Customer> = customers
            .range((lower_bound, Bound::Unbounded))
            .take(self.page_size)
            .map(|(_, customer)| customer.clone())
            .collect();

        let next_cursor = match page.last() {
            Some(last) if page.len() == self.page_size => {
                let has_more = customers
                    .range::<String, _>((Bound::Excluded(&last.customer_id), Bound::Unbounded))
                    .next()
                    .is_some();

                has_more.then(|| last.customer_id.to_owned())
            }
            _ => None,
        };

        Ok(ScanPage {
            customers: page,
            next_cursor,
        })
    }
}
