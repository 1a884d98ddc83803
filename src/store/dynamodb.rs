/*---------- Imports ----------*/
use super::{CustomerStore, ScanPage, StoreError};
use crate::models::customer::{Customer, CustomerFields};
use async_trait::async_trait;
use aws_sdk_dynamodb::model::{AttributeValue, ReturnValue};
use serde_dynamo::aws_sdk_dynamodb_0_21::{from_item, from_items, to_item};
use std::collections::HashMap;

/*---------- Constants ----------*/
const PARTITION_KEY: &str = "customerId";
const UPDATE_EXPRESSION: &str = "SET #firstName = :firstName, #lastName = :lastName, \
     #email = :email, #phone = :phone, #address = :address";

/*---------- Structs ----------*/
pub struct DynamoDbStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
    page_limit: Option<i32>,
}

// SDK errors only show the outermost layer in Display; callers want the whole chain.
fn describe(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let cause_message = cause.to_string();

        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }

        source = cause.source();
    }

    message
}

fn request_error<E: std::error::Error + 'static>(error: E) -> StoreError {
    StoreError::Request(describe(&error))
}

fn nullable(value: &Option<String>) -> AttributeValue {
    match value {
        Some(text) => AttributeValue::S(text.to_owned()),
        None => AttributeValue::Null(true),
    }
}

fn key_of(customer_id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(
        PARTITION_KEY.to_owned(),
        AttributeValue::S(customer_id.to_owned()),
    )])
}

impl DynamoDbStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            page_limit: None,
        }
    }

    /// Caps the number of items read per scan request. DynamoDB's own 1MB page
    /// limit still applies when unset.
    pub fn with_page_limit(mut self, limit: i32) -> Self {
        self.page_limit = Some(limit);
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl CustomerStore for DynamoDbStore {
    async fn put(&self, customer: &Customer) -> Result<(), StoreError> {
        let item: HashMap<String, AttributeValue> =
            to_item(customer).map_err(|error| StoreError::Encode(error.to_string()))?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(request_error)?;

        Ok(())
    }

    async fn get(&self, customer_id: &str) -> Result<Option<Customer>, StoreError> {
        let get_item_output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_of(customer_id)))
            .send()
            .await
            .map_err(request_error)?;

        match get_item_output.item() {
            Some(item_data) => {
                let customer: Customer = from_item(item_data.to_owned())
                    .map_err(|error| StoreError::Decode(error.to_string()))?;

                Ok(Some(customer))
            }
            None => Ok(None),
        }
    }

    async fn update(
        &self,
        customer_id: &str,
        fields: &CustomerFields,
    ) -> Result<Customer, StoreError> {
        let update_output = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(key_of(customer_id)))
            .update_expression(UPDATE_EXPRESSION)
            .expression_attribute_names("#firstName", "firstName")
            .expression_attribute_names("#lastName", "lastName")
            .expression_attribute_names("#email", "email")
            .expression_attribute_names("#phone", "phone")
            .expression_attribute_names("#address", "address")
            .expression_attribute_values(
                ":firstName",
                AttributeValue::S(fields.first_name.to_owned()),
            )
            .expression_attribute_values(":lastName", AttributeValue::S(fields.last_name.to_owned()))
            .expression_attribute_values(":email", AttributeValue::S(fields.email.to_owned()))
            .expression_attribute_values(":phone", nullable(&fields.phone))
            .expression_attribute_values(":address", nullable(&fields.address))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(request_error)?;

        // ALL_NEW always carries the key; fall back to the request if a mock omits it.
        let mut attributes = update_output.attributes().cloned().unwrap_or_default();
        attributes
            .entry(PARTITION_KEY.to_owned())
            .or_insert_with(|| AttributeValue::S(customer_id.to_owned()));

        let customer: Customer =
            from_item(attributes).map_err(|error| StoreError::Decode(error.to_string()))?;

        Ok(customer)
    }

    async fn delete(&self, customer_id: &str) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_of(customer_id)))
            .send()
            .await
            .map_err(request_error)?;

        Ok(())
    }

    async fn scan_page(&self, cursor: Option<String>) -> Result<ScanPage, StoreError> {
        let scan_output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .set_limit(self.page_limit)
            .set_exclusive_start_key(cursor.as_deref().map(key_of))
            .send()
            .await
            .map_err(request_error)?;

        let items_list = scan_output.items().unwrap_or(&[]);
        let customers: Vec<Customer> = from_items(items_list.to_vec())
            .map_err(|error| StoreError::Decode(error.to_string()))?;

        let next_cursor = scan_output
            .last_evaluated_key()
            .and_then(|key| key.get(PARTITION_KEY))
            .and_then(|value| value.as_s().ok())
            .cloned();

        Ok(ScanPage {
            customers,
            next_cursor,
        })
    }
}
