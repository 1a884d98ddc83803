/*---------- Imports ----------*/
use super::error_response;
use crate::store::CustomerStore;
use crate::utils::http::HttpResponse;
use lambda_http::{Body, Error, Request, Response};
use tracing::info;

/// Returns the whole collection in store order. The request carries nothing
/// we need.
pub async fn handle<S>(store: &S, _request: Request) -> Result<Response<Body>, Error>
where
    S: CustomerStore + ?Sized,
{
    match store.list_all().await {
        Ok(customers) => {
            info!(count = customers.len(), "customers listed");

            HttpResponse::json(200, &customers)
        }

        Err(failure) => error_response("list", &failure.into()),
    }
}
