//! One module per Lambda function. Each `handle` turns a gateway request into
//! a response, talking to the table only through [`CustomerStore`].
//!
//! [`CustomerStore`]: crate::store::CustomerStore

/*---------- Imports ----------*/
use crate::error::CustomerError;
use crate::utils::http::HttpResponse;
use lambda_http::{Body, Error, Response};
use tracing::{error, warn};

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub(crate) fn error_response(
    operation: &'static str,
    failure: &CustomerError,
) -> Result<Response<Body>, Error> {
    match failure {
        CustomerError::Store(_) => error!(operation, error = %failure, "store request failed"),
        _ => warn!(operation, error = %failure, "request rejected"),
    }

    HttpResponse::error(failure)
}
