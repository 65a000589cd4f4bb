use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One API call described as plain data: verb, path relative to the API
/// root, and JSON body.
///
/// `body` is `None` for GET and always `Some` otherwise, starting as `{}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        let body = match method {
            HttpMethod::Get => None,
            _ => Some(Value::Object(Map::new())),
        };
        Self {
            method,
            path: path.into(),
            body,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Replaces the body with the given field map. Ignored for GET.
    pub fn with_fields(mut self, fields: Map<String, Value>) -> Self {
        if self.body.is_some() {
            self.body = Some(Value::Object(fields));
        }
        self
    }

    /// Serializes `body` as the request payload. Ignored for GET.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        if self.body.is_some() {
            self.body = Some(serde_json::to_value(body).map_err(Error::Encode)?);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_has_no_body() {
        let req = ApiRequest::get("zones");
        assert_eq!(req.method, HttpMethod::Get);
        assert!(req.body.is_none());

        let mut fields = Map::new();
        fields.insert("name".into(), json!("example.com"));
        let req = req.with_fields(fields);
        assert!(req.body.is_none());
    }

    #[test]
    fn test_non_get_defaults_to_empty_object() {
        for req in [
            ApiRequest::post("zones"),
            ApiRequest::patch("zones/z1/settings/ssl"),
            ApiRequest::delete("zones/z1/pagerules/r1"),
        ] {
            assert_eq!(req.body, Some(json!({})));
        }
    }

    #[test]
    fn test_with_json_sets_body() {
        let req = ApiRequest::patch("zones/z1/settings/cache_level")
            .with_json(&json!({"value": "basic"}))
            .unwrap();
        assert_eq!(req.body, Some(json!({"value": "basic"})));
    }

    #[test]
    fn test_method_names() {
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
    }
}
