/*---------- Imports ----------*/
use super::error_response;
use crate::store::CustomerStore;
use crate::utils::http::{path_parameter, HttpResponse};
use lambda_http::{Body, Error, Request, Response};
use tracing::info;

pub async fn handle<S>(store: &S, request: Request) -> Result<Response<Body>, Error>
where
    S: CustomerStore + ?Sized,
{
    let customer_id = match path_parameter(&request, "customerId") {
        Ok(id) => id,
        Err(failure) => return error_response("delete", &failure),
    };

    // Idempotent: an absent id still answers 204.
    match store.delete(&customer_id).await {
        Ok(()) => {
            info!(customer_id = %customer_id, "customer deleted");

            HttpResponse::no_content()
        }

        Err(failure) => error_response("delete", &failure.into()),
    }
}
