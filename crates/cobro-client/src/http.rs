//! Shared HTTP client for the remote billing API.
//!
//! Every repository implementation goes through [`ApiClient`], which joins
//! request paths against the configured base URL, attaches the bearer token
//! when one is configured, and unwraps the `{success, message, data}`
//! envelope the API puts around every payload.
//!
//! The client deliberately arms no timeout of its own; the dashboard cache
//! is the only caller that bounds its requests, and it does so around the
//! repository call.

use cobro_config::ApiConfig;
use cobro_core::{ApiEnvelope, ApiError};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Thin `reqwest` wrapper shared by all HTTP repositories.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.config.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GET `path` and unwrap the envelope's `data` payload.
    pub async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let builder = self.builder(Method::GET, path);
        self.request_envelope("GET", path, builder).await?.into_data()
    }

    /// GET `path` with query parameters and unwrap the `data` payload.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.builder(Method::GET, path).query(query);
        self.request_envelope("GET", path, builder).await?.into_data()
    }

    /// POST a JSON body and unwrap the `data` payload of the answer.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.builder(Method::POST, path).json(body);
        self.request_envelope("POST", path, builder).await?.into_data()
    }

    /// POST a JSON body to an endpoint that answers with a confirmation
    /// message instead of a `data` payload.
    pub async fn post_for_message<B>(&self, path: &str, body: &B) -> Result<String, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.builder(Method::POST, path).json(body);
        self.request_envelope::<serde_json::Value>("POST", path, builder)
            .await?
            .into_message()
    }

    /// PUT a JSON body and unwrap the `data` payload of the answer.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.builder(Method::PUT, path).json(body);
        self.request_envelope("PUT", path, builder).await?.into_data()
    }

    /// DELETE `path`, accepting any successful envelope as confirmation.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.builder(Method::DELETE, path);
        self.request_envelope::<serde_json::Value>("DELETE", path, builder)
            .await?
            .into_message()
            .map(|_| ())
    }

    async fn request_envelope<T>(
        &self,
        method: &'static str,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<ApiEnvelope<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(http.method = method, http.path = path, "sending API request");

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Error payloads reuse the envelope; prefer the server's own
            // message over a bare status code when one is present.
            if let Ok(rejected) = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body) {
                if !rejected.success {
                    if let Some(message) = rejected.message {
                        tracing::warn!(
                            http.path = path,
                            http.status = status.as_u16(),
                            "API rejected request: {message}"
                        );
                        return Err(ApiError::Rejected { message });
                    }
                }
            }
            tracing::warn!(
                http.path = path,
                http.status = status.as_u16(),
                "API returned an error status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_against_the_base_url() {
        let client = ApiClient::new(ApiConfig::with_base_url("http://127.0.0.1:9000/api/"));
        assert_eq!(
            client.url("/estudiantes"),
            "http://127.0.0.1:9000/api/estudiantes"
        );
    }

    #[test]
    fn default_config_points_at_localhost() {
        let client = ApiClient::new(ApiConfig::default());
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }
}
