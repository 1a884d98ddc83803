/*---------- Imports ----------*/
use super::error_response;
use crate::error::CustomerError;
use crate::models::customer::{Customer, NewCustomer};
use crate::store::CustomerStore;
use crate::utils::http::{parse_body, HttpResponse};
use crate::utils::id::IdGenerator;
use lambda_http::{Body, Error, Request, Response};
use tracing::info;

/// Validates the payload, mints a fresh id and inserts the record. Nothing is
/// written when validation fails.
pub async fn create_customer<S>(
    store: &S,
    ids: &IdGenerator,
    request: &Request,
) -> Result<Customer, CustomerError>
where
    S: CustomerStore + ?Sized,
{
    let payload: NewCustomer = parse_body(request.body())?;
    let fields = payload.validate()?;

    let customer = Customer::new(ids.generate(), fields);
    store.put(&customer).await?;

    Ok(customer)
}

pub async fn handle<S>(
    store: &S,
    ids: &IdGenerator,
    request: Request,
) -> Result<Response<Body>, Error>
where
    S: CustomerStore + ?Sized,
{
    match create_customer(store, ids, &request).await {
        Ok(customer) => {
            info!(customer_id = %customer.customer_id, "customer created");

            HttpResponse::json(201, &customer)
        }

        Err(failure) => error_response("create", &failure),
    }
}
