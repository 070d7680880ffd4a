//! HTTP plumbing shared by every resource wrapper.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::{ClientError, ClientResult};
use crate::pagination::ListQuery;
use crate::store::SessionStore;

/// Client for the aviation-operations REST API.
///
/// Cheap to clone; all state lives in the shared session store. Calls are
/// independent of one another: there is no retry, no queuing, and no
/// de-duplication of concurrent token refreshes.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, store: Arc<dyn SessionStore>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            store,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request with per-call correlation id, optionally attaching the
    /// bearer token read from the session store at call time.
    fn request(&self, method: Method, path: &str, with_auth: bool) -> RequestBuilder {
        let request_id = Uuid::now_v7();
        tracing::debug!(%method, path, %request_id, "api request");

        let mut req = self
            .http
            .request(method, self.url(path))
            .header("X-Request-Id", request_id.to_string());

        if with_auth {
            if let Some(tokens) = self.store.load().and_then(|s| s.tokens) {
                req = req.bearer_auth(tokens.access);
            }
        }

        req
    }

    async fn send(&self, req: RequestBuilder) -> ClientResult<Response> {
        let resp = req
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: extract_message(status, &body),
            });
        }

        Ok(resp)
    }

    pub(crate) async fn get_json<T>(&self, path: &str, query: Option<&ListQuery>) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let mut req = self.request(Method::GET, path, true);
        if let Some(query) = query {
            req = req.query(query);
        }
        let resp = self.send(req).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, path, true).json(body);
        let resp = self.send(req).await?;
        Ok(resp.json().await?)
    }

    /// POST without a bearer token (login/refresh/logout endpoints).
    pub(crate) async fn post_json_anon<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, path, false).json(body);
        let resp = self.send(req).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn patch_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::PATCH, path, true).json(body);
        let resp = self.send(req).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        let req = self.request(Method::DELETE, path, true);
        self.send(req).await?;
        Ok(())
    }

    pub(crate) async fn post_multipart<T>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, path, true).multipart(form);
        let resp = self.send(req).await?;
        Ok(resp.json().await?)
    }
}

impl core::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Pull a human-readable message out of an error body.
///
/// DRF-style bodies carry `detail`; some endpoints use `message`. Anything
/// else is passed through opaquely.
fn extract_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }

    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.to_string()
    }
}
