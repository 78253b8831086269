// src/requests.rs
use crate::errors::ServerError;
use astra::Request;
use percent_encoding::percent_decode_str;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Decoded query string; later duplicates win.
pub fn query_params(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

pub fn cookie(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all("cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

pub fn header<'r>(req: &'r Request, name: &str) -> Option<&'r str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

/// True for htmx-driven partial requests.
pub fn is_htmx(req: &Request) -> bool {
    header(req, "hx-request") == Some("true")
}

pub fn client_ip(req: &Request) -> Option<String> {
    header(req, "x-forwarded-for")
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Accepts either a JSON object or an urlencoded form body.
pub fn read_fields(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let is_json = header(req, "content-type")
        .map(|ct| ct.starts_with("application/json"))
        .unwrap_or(false);

    let mut raw = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("could not read body: {e}")))?;
    if raw.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest(format!(
            "request body exceeds {MAX_BODY_BYTES} bytes"
        )));
    }

    if !is_json {
        return Ok(form_urlencoded::parse(&raw).into_owned().collect());
    }

    let value: Value = serde_json::from_slice(&raw)
        .map_err(|e| ServerError::BadRequest(format!("invalid JSON body: {e}")))?;
    let Value::Object(obj) = value else {
        return Err(ServerError::BadRequest("JSON body must be an object".into()));
    };

    Ok(obj
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::String(s) => Some((k, s)),
            Value::Number(n) => Some((k, n.to_string())),
            Value::Bool(b) => Some((k, b.to_string())),
            _ => None,
        })
        .collect())
}

/// Percent-decoded path segment; `None` for an empty segment, a nested path or invalid UTF-8.
pub fn path_segment(raw: &str) -> Option<String> {
    if raw.is_empty() || raw.contains('/') {
        return None;
    }
    percent_decode_str(raw).decode_utf8().ok().map(|s| s.into_owned())
}

/// Only same-site paths are allowed as redirect targets.
pub fn local_path(next: Option<&String>) -> String {
    match next {
        Some(p) if p.starts_with('/') && !p.starts_with("//") && !p.contains('\\') => p.clone(),
        _ => "/".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra::Body;

    fn get(uri: &str) -> Request {
        http::Request::builder()
            .uri(uri)
            .header("Cookie", "theme=dark; lang=gujarati")
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn query_values_are_percent_decoded() {
        let req = get("/?q=%E0%A4%93%E0%A4%AE&district=Surat+City");
        let params = query_params(&req);
        assert_eq!(params.get("q").map(String::as_str), Some("ओम"));
        assert_eq!(params.get("district").map(String::as_str), Some("Surat City"));
    }

    #[test]
    fn finds_named_cookie() {
        let req = get("/");
        assert_eq!(cookie(&req, "lang").as_deref(), Some("gujarati"));
        assert_eq!(cookie(&req, "missing"), None);
    }

    #[test]
    fn path_segments_are_decoded() {
        assert_eq!(path_segment("%E0%A4%93%E0%A4%AE%201").as_deref(), Some("ओम 1"));
        assert_eq!(path_segment("abc-_9").as_deref(), Some("abc-_9"));
        assert_eq!(path_segment("a/b"), None);
        assert_eq!(path_segment("%FF"), None);
        assert_eq!(path_segment(""), None);
    }

    #[test]
    fn rejects_off_site_redirects() {
        assert_eq!(local_path(Some(&"/business/1".to_string())), "/business/1");
        assert_eq!(local_path(Some(&"//evil.example".to_string())), "/");
        assert_eq!(local_path(Some(&"https://evil.example".to_string())), "/");
        assert_eq!(local_path(None), "/");
    }
}
