use std::sync::Arc;

use common_session::SessionStore;
use reqwest::multipart::Form;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Thin wrapper over `reqwest` carrying the console's cross-cutting
/// concerns: bearer injection from the session store, the unified
/// timeout, and central 401 handling. A 401 from any endpoint clears
/// the session here, once, and never per call site.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: Arc<SessionStore>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Ok(Self {
            http,
            config,
            session,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.snapshot() {
            Some(session) => request.bearer_auth(session.token),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(ApiError::from)?;

        if response.status() == StatusCode::UNAUTHORIZED {
            warn!("backend returned 401; clearing session");
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn expect_success(response: Response) -> ApiResult<()> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.authorize(self.http.get(self.url(path)));
        Self::decode(self.execute(request).await?).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.authorize(self.http.post(self.url(path)).json(body));
        Self::decode(self.execute(request).await?).await
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.authorize(self.http.put(self.url(path)).json(body));
        Self::decode(self.execute(request).await?).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let request = self.authorize(self.http.delete(self.url(path)));
        Self::expect_success(self.execute(request).await?).await
    }

    /// Multipart submission for forms carrying file fields.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> ApiResult<T> {
        let request = self.authorize(self.http.post(self.url(path)).multipart(form));
        Self::decode(self.execute(request).await?).await
    }

    /// Fire a POST whose outcome the caller treats as best-effort.
    pub(crate) async fn post_unit(&self, path: &str) -> ApiResult<()> {
        let request = self.authorize(self.http.post(self.url(path)));
        Self::expect_success(self.execute(request).await?).await
    }
}
