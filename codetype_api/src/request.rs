//! Request descriptors, the closed set of supported verbs, and response payloads.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::{query::QueryParams, Error};

/// HTTP verbs the client implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Verb name lookup table. Names are matched case-insensitively.
const METHODS: &[(&str, Method)] = &[
    ("GET", Method::Get),
    ("POST", Method::Post),
    ("PUT", Method::Put),
    ("DELETE", Method::Delete),
];

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Whether a JSON body is attached for this verb. GET and DELETE never carry one.
    pub fn sends_body(&self) -> bool {
        !matches!(self, Method::Get | Method::Delete)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        METHODS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|(_, method)| *method)
            .ok_or_else(|| Error::UnsupportedMethod(s.to_string()))
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Optional parts of a request: query parameters, JSON body and extra headers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub query: QueryParams,
    pub body: Option<Value>,
    /// A caller-supplied `Accept` or `Content-Type` replaces the default one.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// True when the caller supplied a header named `header`, in any case.
    pub(crate) fn overrides(&self, header: &str) -> bool {
        self.headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case(header))
    }
}

/// One HTTP call described before execution.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub options: RequestOptions,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            options: RequestOptions::default(),
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.options.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.options.body = Some(body);
        self
    }

    /// Stable text form of the request, usable for comparing two requests
    /// without comparing bodies or headers.
    pub fn signature(&self) -> String {
        let query = self.options.query.signature();
        if query.is_empty() {
            format!("{} {}", self.method, self.path)
        } else {
            format!("{} {}?{}", self.method, self.path, query)
        }
    }
}

/// A response body, parsed according to its `Content-Type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Json(_) => None,
            Payload::Text(text) => Some(text.as_str()),
        }
    }

    /// Decodes a JSON payload into a typed schema. Text payloads never decode.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, Error> {
        match self {
            Payload::Json(value) => serde_json::from_value(value).map_err(|e| {
                tracing::error!("Failed to parse resource: {}", e);
                Error::Decode(e.to_string())
            }),
            Payload::Text(text) => {
                tracing::error!("Expected JSON, got text: {}", truncate_body(&text));
                Err(Error::Decode("expected a JSON response".to_string()))
            }
        }
    }

    /// Short printable form used in logs and error banners.
    pub fn snippet(&self) -> String {
        match self {
            Payload::Json(value) => truncate_body(&value.to_string()),
            Payload::Text(text) => truncate_body(text),
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((cut, _)) => format!("{}...[truncated]", &body[..cut]),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn method_lookup_is_case_insensitive() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("Delete".parse::<Method>().unwrap(), Method::Delete);
        assert_eq!(" PUT ".parse::<Method>().unwrap(), Method::Put);
    }

    #[test]
    fn unknown_method_is_unsupported() {
        let err = "PATCH".parse::<Method>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedMethod(ref verb) if verb == "PATCH"));
        assert_eq!(err.to_string(), "Unsupported HTTP method: PATCH");
    }

    #[test]
    fn only_write_verbs_send_bodies() {
        assert!(!Method::Get.sends_body());
        assert!(!Method::Delete.sends_body());
        assert!(Method::Post.sends_body());
        assert!(Method::Put.sends_body());
    }

    #[test]
    fn decode_rejects_text() {
        let result = Payload::Text("hello".into()).decode::<serde_json::Value>();
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn signature_includes_only_serialized_query() {
        let request = RequestDescriptor::get("/bar/recipes").with_query(
            QueryParams::new()
                .push("page", 2)
                .push("q", "")
                .push("sort", "name"),
        );
        assert_eq!(request.signature(), "GET /bar/recipes?page=2&sort=name");
        assert_eq!(RequestDescriptor::get("/games").signature(), "GET /games");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let long = "é".repeat(2100);
        let cut = truncate_body(&long);
        assert!(cut.ends_with("...[truncated]"));
        assert_eq!(cut.chars().filter(|c| *c == 'é').count(), 2000);
    }

    #[test]
    fn payload_accessors() {
        let json = Payload::Json(json!({"message": "not found"}));
        assert_eq!(json.as_json().unwrap()["message"], "not found");
        assert!(json.as_text().is_none());
        assert_eq!(Payload::Text("ok".into()).as_text(), Some("ok"));
    }
}
