/*---------- Imports ----------*/
use crate::error::CustomerError;
use lambda_http::{http::response::Builder, Body, Error, Request, RequestExt, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;

pub struct HttpResponse;

impl HttpResponse {
    // Attached to every response, errors included.
    fn builder(status: u16) -> Builder {
        Response::builder()
            .status(status)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Credentials", "true")
    }

    pub fn json<T: Serialize>(status: u16, payload: &T) -> Result<Response<Body>, Error> {
        let body = serde_json::to_string(payload)?;

        Ok(Self::builder(status)
            .header("Content-Type", "application/json")
            .body(Body::Text(body))?)
    }

    pub fn no_content() -> Result<Response<Body>, Error> {
        Ok(Self::builder(204).body(Body::Empty)?)
    }

    pub fn error(error: &CustomerError) -> Result<Response<Body>, Error> {
        Self::json(error.status_code(), &json!({ "error": error.to_string() }))
    }
}

pub fn parse_body<T: DeserializeOwned>(body: &Body) -> Result<T, CustomerError> {
    let raw_body: &[u8] = match body {
        Body::Text(value) => value.as_bytes(),
        Body::Binary(value) => value.as_slice(),
        _ => &[],
    };

    if raw_body.is_empty() {
        return Err(CustomerError::InvalidBody(
            "Request body can't be empty".to_owned(),
        ));
    }

    serde_json::from_slice(raw_body).map_err(|error| CustomerError::InvalidBody(error.to_string()))
}

pub fn path_parameter(request: &Request, name: &'static str) -> Result<String, CustomerError> {
    request
        .path_parameters()
        .first(name)
        .map(|value| value.to_owned())
        .ok_or(CustomerError::MissingPathParameter(name))
}
