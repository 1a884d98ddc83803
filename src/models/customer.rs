/*---------- Imports ----------*/
use crate::error::CustomerError;
use serde::{Deserialize, Serialize};

/*---------- Structs ----------*/

/// A customer record as persisted in the table and returned to callers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// The mutable part of a customer. Doubles as the Update request body, which
/// is not validated: absent name/email fields are written as empty strings.
/// An empty `phone` or `address` is stored as null, see [`NewCustomer`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFields {
    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,
}

/// Create request body. Everything is optional here so that a missing
/// required field is reported as a validation error instead of a parse error.
///
/// Values are kept exactly as submitted with one exception: `phone` and
/// `address` given as `""` are stored as null, the same as leaving them out.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

fn required(value: Option<String>, field_name: &str) -> Result<String, CustomerError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(CustomerError::Validation(format!(
            "Missing required field: {}",
            field_name
        ))),
    }
}

// Empty optional values are stored as null.
fn optional(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

impl NewCustomer {
    pub fn validate(self) -> Result<CustomerFields, CustomerError> {
        let first_name = required(self.first_name, "firstName")?;
        let last_name = required(self.last_name, "lastName")?;
        let email = required(self.email, "email")?;

        Ok(CustomerFields {
            first_name,
            last_name,
            email,
            phone: optional(self.phone),
            address: optional(self.address),
        })
    }
}

impl CustomerFields {
    pub fn normalized(self) -> Self {
        Self {
            phone: optional(self.phone),
            address: optional(self.address),
            ..self
        }
    }
}

impl Customer {
    pub fn new(customer_id: impl Into<String>, fields: CustomerFields) -> Self {
        Self {
            customer_id: customer_id.into(),
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone: fields.phone,
            address: fields.address,
        }
    }
}
