use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

/// 302 to `location`, optionally setting one cookie on the way.
pub fn redirect(location: &str, set_cookie: Option<String>) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(302)
        .header("Location", location);

    if let Some(cookie) = set_cookie {
        builder = builder.header("Set-Cookie", cookie);
    }

    builder
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
