use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use serde_json::Value;

pub fn json_response(status: u16, value: &Value) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|_| ServerError::InternalError)?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
