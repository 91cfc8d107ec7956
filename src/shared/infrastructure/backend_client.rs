// Thin JSON client for the external REST backend.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend answered {status} for {url}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("unexpected payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = self.url(path);
        let request = self.client.get(&url);
        self.send_json(url, request).await
    }

    pub async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        let request = self.client.get(&url).query(query);
        self.send_json(url, request).await
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let request = self.client.post(&url).json(body);
        self.send_json(url, request).await
    }

    pub async fn patch_json<T, B>(&self, path: &str, body: &B) -> Result<T, BackendError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let request = self.client.patch(&url).json(body);
        self.send_json(url, request).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), BackendError> {
        let url = self.url(path);
        let request = self.client.delete(&url);
        self.send(url, request).await.map(|_| ())
    }

    async fn send(
        &self,
        url: String,
        request: RequestBuilder,
    ) -> Result<reqwest::Response, BackendError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        tracing::debug!(%url, "calling backend");

        let response = request.send().await.map_err(|source| BackendError::Transport {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { url, status, body });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        url: String,
        request: RequestBuilder,
    ) -> Result<T, BackendError> {
        let response = self.send(url.clone(), request).await?;
        response
            .json::<T>()
            .await
            .map_err(|source| BackendError::Decode { url, source })
    }
}
