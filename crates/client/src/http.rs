use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use shared_types::AppError;

use crate::error_convert::ReqwestErrorExt;

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

/// Thin JSON client for the insurance API.
///
/// Holds the base URL and, once signed in, the bearer token. Every request
/// carries a fresh `x-request-id`. Non-success responses become an
/// [`AppError`] carrying the body's `message`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: Client,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.token == other.token
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token: None,
            http: Client::new(),
        }
    }

    /// Same client, authenticated with `token`.
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.url(path))
            .header(HEADER_REQUEST_ID, uuid::Uuid::new_v4().to_string());
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Value, AppError> {
        let response = builder.send().await.map_err(ReqwestErrorExt::into_app_error)?;
        let status = response.status();
        let body = response.text().await.map_err(ReqwestErrorExt::into_app_error)?;

        if !status.is_success() {
            let err = AppError::from_response(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), message = %err.message, "API request failed");
            return Err(err);
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body)
            .map_err(|e| AppError::decode(format!("Response was not valid JSON: {e}")))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, AppError> {
        let mut builder = self.request(Method::GET, path);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        self.send(builder).await
    }

    #[tracing::instrument(skip(self, body))]
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, AppError> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    #[tracing::instrument(skip(self, body))]
    pub async fn patch_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, AppError> {
        self.send(self.request(Method::PATCH, path).json(body)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<Value, AppError> {
        self.send(self.request(Method::DELETE, path)).await
    }
}

/// Build query pairs, skipping empty values.
pub fn query_pairs<'a>(pairs: &[(&'a str, Option<&str>)]) -> Vec<(&'a str, String)> {
    pairs
        .iter()
        .filter_map(|(k, v)| {
            v.map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (*k, v.to_string()))
        })
        .collect()
}
