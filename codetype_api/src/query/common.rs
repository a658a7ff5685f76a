//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] paging fields,
//! and the ordered [`QueryParams`] list every request serializes from.

use std::fmt;

use url::{form_urlencoded, Url};

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination.
pub trait Query {
    /// Flattens this query into ordered key/value pairs.
    fn to_params(&self) -> QueryParams;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        self.to_params().add_to_url(url)
    }

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the number of results per page.
    fn with_limit(mut self, limit: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().limit = Some(limit);
        self
    }
}

/// Fields shared by all paginated queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1.
    pub page: i64,
    /// Results per page. `None` uses the API default.
    pub limit: Option<i64>,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            page: 1,
            limit: None,
        }
    }
}

impl QueryCommon {
    pub fn append_to(&self, params: &mut QueryParams) {
        params.insert("page", self.page);
        params.insert("limit", self.limit);
    }
}

/// A scalar query value. [`QueryValue::Null`] and empty text are never sent.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    Null,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl QueryValue {
    /// True for values that are left out of the URL entirely.
    pub fn is_blank(&self) -> bool {
        match self {
            QueryValue::Null => true,
            QueryValue::Text(text) => text.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Null => Ok(()),
            QueryValue::Text(text) => f.write_str(text),
            QueryValue::Int(n) => write!(f, "{}", n),
            QueryValue::Float(n) => write!(f, "{}", n),
            QueryValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Text(value.clone())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(QueryValue::Null, Into::into)
    }
}

/// Ordered query parameters. Keeps blank entries so callers can distinguish
/// "not set" from "set to nothing" until serialization, where blanks are dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<QueryValue>) {
        self.pairs.push((key.to_string(), value.into()));
    }

    /// Raw value for `key`, including blanks.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.pairs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Pairs that will actually be sent, in insertion order.
    pub fn serialized(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.pairs
            .iter()
            .filter(|(_, value)| !value.is_blank())
            .map(|(key, value)| (key.as_str(), value.to_string()))
    }

    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for (key, value) in self.serialized() {
            url.query_pairs_mut().append_pair(key, &value);
        }
        url
    }

    /// The `application/x-www-form-urlencoded` form of the sent pairs.
    pub fn signature(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.serialized() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_skipped() {
        let url = Url::parse("https://example.com/bar/recipes").unwrap();
        let params = QueryParams::new()
            .push("page", 1)
            .push("q", "")
            .push("base_id", Option::<i64>::None)
            .push("is_alcoholic", false)
            .push("min_abv", 0.0);
        insta::assert_snapshot!(
            params.add_to_url(&url).to_string(),
            @"https://example.com/bar/recipes?page=1&is_alcoholic=false&min_abv=0"
        );
    }

    #[test]
    fn no_params_leaves_url_untouched() {
        let url = Url::parse("https://example.com/games").unwrap();
        let params = QueryParams::new().push("q", QueryValue::Null);
        assert_eq!(params.add_to_url(&url).as_str(), "https://example.com/games");
    }

    #[test]
    fn whitespace_is_not_blank() {
        assert!(!QueryValue::from(" ").is_blank());
        assert!(QueryValue::from("").is_blank());
        assert!(QueryValue::Null.is_blank());
    }

    #[test]
    fn signature_encodes_values() {
        let params = QueryParams::new().push("q", "gin & tonic").push("page", 2);
        assert_eq!(params.signature(), "q=gin+%26+tonic&page=2");
    }

    #[test]
    fn get_sees_blank_entries() {
        let params = QueryParams::new().push("q", "");
        assert_eq!(params.get("q"), Some(&QueryValue::Text(String::new())));
        assert_eq!(params.get("missing"), None);
    }
}
