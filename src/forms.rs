// src/forms.rs

//! Query strings, urlencoded bodies and cookies.

use std::io::Read;

use astra::Request;

use crate::errors::ServerError;

/// Largest form body we accept.
const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Decoded `application/x-www-form-urlencoded` pairs, in order.
/// Repeated keys (multi-selects) are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn parse(input: &str) -> Self {
        let pairs = url::form_urlencoded::parse(input.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn require(&self, key: &str) -> Result<&str, ServerError> {
        self.get(key)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ServerError::BadRequest(format!("missing field: {key}")))
    }
}

pub fn parse_query(req: &Request) -> FormData {
    req.uri().query().map(FormData::parse).unwrap_or_default()
}

/// Bodies over [`MAX_FORM_BYTES`] are rejected whole, never parsed in part.
pub fn read_form(req: &mut Request) -> Result<FormData, ServerError> {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest(format!(
            "form body larger than {} KiB",
            MAX_FORM_BYTES / 1024
        )));
    }
    Ok(FormData::parse(&body))
}

/// Value of the named cookie from the `Cookie` header, if present.
pub fn cookie(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}
