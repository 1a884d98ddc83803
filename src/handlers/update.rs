/*---------- Imports ----------*/
use super::error_response;
use crate::error::CustomerError;
use crate::models::customer::{Customer, CustomerFields};
use crate::store::CustomerStore;
use crate::utils::http::{parse_body, path_parameter, HttpResponse};
use lambda_http::{Body, Error, Request, Response};
use tracing::info;

/// Replaces every mutable field. The id isn't checked for existence first, so
/// an unknown id ends up created with the supplied values.
pub async fn update_customer<S>(store: &S, request: &Request) -> Result<Customer, CustomerError>
where
    S: CustomerStore + ?Sized,
{
    let customer_id = path_parameter(request, "customerId")?;
    let fields: CustomerFields = parse_body(request.body())?;

    let customer = store.update(&customer_id, &fields.normalized()).await?;

    Ok(customer)
}

pub async fn handle<S>(store: &S, request: Request) -> Result<Response<Body>, Error>
where
    S: CustomerStore + ?Sized,
{
    match update_customer(store, &request).await {
        Ok(customer) => {
            info!(customer_id = %customer.customer_id, "customer updated");

            HttpResponse::json(200, &customer)
        }

        Err(failure) => error_response("update", &failure),
    }
}
