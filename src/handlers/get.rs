/*---------- Imports ----------*/
use super::error_response;
use crate::error::CustomerError;
use crate::models::customer::Customer;
use crate::store::CustomerStore;
use crate::utils::http::{path_parameter, HttpResponse};
use lambda_http::{Body, Error, Request, Response};
use tracing::info;

pub async fn get_customer<S>(store: &S, customer_id: &str) -> Result<Customer, CustomerError>
where
    S: CustomerStore + ?Sized,
{
    store
        .get(customer_id)
        .await?
        .ok_or_else(|| CustomerError::NotFound(customer_id.to_owned()))
}

pub async fn handle<S>(store: &S, request: Request) -> Result<Response<Body>, Error>
where
    S: CustomerStore + ?Sized,
{
    let customer_id = match path_parameter(&request, "customerId") {
        Ok(id) => id,
        Err(failure) => return error_response("get", &failure),
    };

    match get_customer(store, &customer_id).await {
        Ok(customer) => {
            info!(customer_id = %customer.customer_id, "customer fetched");

            HttpResponse::json(200, &customer)
        }

        Err(failure) => error_response("get", &failure),
    }
}
