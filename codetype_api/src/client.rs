//! HTTP client for the CodeType Web API.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{GameQuery, Query, QueryParams, RecipeQuery},
    request::{truncate_body, Method, Payload, RequestDescriptor, RequestOptions},
    types::{Base, Game, ListResponse, Profile, Recipe, RecipeID, Response},
    Error,
};

/// Base used when neither an explicit API URL nor an origin is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost";

/// Picks the base an API client should use: the explicit API URL, else the
/// origin the front end is served from, else [`DEFAULT_BASE_URL`]. Blank
/// values count as unset.
pub fn base_target<'a>(explicit: Option<&'a str>, origin: Option<&'a str>) -> &'a str {
    [explicit, origin]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
}

/// HTTP client for the CodeType Web API.
///
/// Relative request paths are resolved against the base URL with its path
/// prefix kept (a base of `https://host/api` sends `/games` to
/// `https://host/api/games`). Absolute paths bypass the base. No retries and
/// no timeout beyond the transport default.
#[derive(Clone, Debug)]
pub struct Client {
    base: Url,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client with a custom base URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let base = Url::parse(base_url.trim()).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", base_url, e);
            Error::InvalidUrl(format!("{}: {}", base_url, e))
        })?;
        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolves `path` and appends every non-blank query pair.
    pub fn resolve_url(&self, path: &str, query: &QueryParams) -> Result<Url, Error> {
        let url = match Url::parse(path) {
            Ok(absolute) => absolute,
            Err(_) => {
                let mut base = self.base.clone();
                if !base.path().ends_with('/') {
                    let prefixed = format!("{}/", base.path());
                    base.set_path(&prefixed);
                }
                base.join(path.trim_start_matches('/')).map_err(|e| {
                    tracing::error!("Invalid URL constructed from {}: {}", path, e);
                    Error::InvalidUrl(format!("{}: {}", path, e))
                })?
            }
        };
        Ok(query.add_to_url(&url))
    }

    /// Issues one request and returns the parsed body.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        options: &RequestOptions,
    ) -> Result<Payload, Error> {
        let url = self.resolve_url(path, &options.query)?;
        tracing::debug!("{} {}", method, url);

        let mut req = self.http.request(method.into(), url.clone());
        if !options.overrides(ACCEPT.as_str()) {
            req = req.header(ACCEPT, "application/json, text/plain, */*");
        }
        if method.sends_body() {
            if let Some(body) = &options.body {
                if !options.overrides(CONTENT_TYPE.as_str()) {
                    req = req.header(CONTENT_TYPE, "application/json");
                }
                req = req.body(body.to_string());
            }
        }
        for (name, value) in &options.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        let resp = req.send().await.map_err(|e| {
            tracing::error!("Failed to reach {}: {}", url, e);
            Error::Network(e.to_string())
        })?;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let text = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e.to_string())
        })?;

        let payload = if content_type.contains("application/json") {
            if text.trim().is_empty() {
                Payload::Json(serde_json::Value::Null)
            } else {
                match serde_json::from_str(&text) {
                    Ok(value) => Payload::Json(value),
                    Err(_) if !status.is_success() => Payload::Text(text),
                    Err(e) => {
                        tracing::error!(
                            "Failed to parse resource: {} | body: {}",
                            e,
                            truncate_body(&text)
                        );
                        return Err(Error::Decode(e.to_string()));
                    }
                }
            }
        } else {
            Payload::Text(text)
        };

        if !status.is_success() {
            tracing::error!(
                "Request failed with status {}: {}",
                status,
                payload.snippet()
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: payload,
            });
        }

        Ok(payload)
    }

    /// Issues a fully described request.
    pub async fn send(&self, request: &RequestDescriptor) -> Result<Payload, Error> {
        self.call(request.method, &request.path, &request.options)
            .await
    }

    pub async fn get(&self, path: &str, options: &RequestOptions) -> Result<Payload, Error> {
        self.call(Method::Get, path, options).await
    }

    pub async fn post(&self, path: &str, options: &RequestOptions) -> Result<Payload, Error> {
        self.call(Method::Post, path, options).await
    }

    pub async fn put(&self, path: &str, options: &RequestOptions) -> Result<Payload, Error> {
        self.call(Method::Put, path, options).await
    }

    pub async fn delete(&self, path: &str, options: &RequestOptions) -> Result<Payload, Error> {
        self.call(Method::Delete, path, options).await
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, query: QueryParams) -> Result<T, Error> {
        let options = RequestOptions::default().with_query(query);
        self.get(path, &options).await?.decode()
    }

    /// Fetches the base spirits used by the recipe filter.
    pub async fn get_bases(&self) -> Result<ListResponse<Base>, Error> {
        self.fetch("/bases", QueryParams::new()).await
    }

    /// Fetches one page of recipes matching the given query.
    pub async fn get_recipes(&self, query: &RecipeQuery) -> Result<ListResponse<Recipe>, Error> {
        self.fetch("/bar/recipes", query.to_params()).await
    }

    /// Fetches a single recipe by id.
    pub async fn get_recipe(&self, recipe_id: RecipeID) -> Result<Response<Recipe>, Error> {
        self.fetch(&format!("/bar/recipes/{}", recipe_id), QueryParams::new())
            .await
    }

    /// Fetches the game server list.
    pub async fn get_games(&self, query: &GameQuery) -> Result<ListResponse<Game>, Error> {
        self.fetch("/games", query.to_params()).await
    }

    /// Fetches a user's portfolio aggregate.
    pub async fn get_portfolio(&self, user_id: i64) -> Result<Response<Profile>, Error> {
        self.fetch(&format!("/portfolio/user/{}", user_id), QueryParams::new())
            .await
    }
}
