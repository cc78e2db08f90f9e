use async_trait::async_trait;
use netbridge_application::ports::BackingStore;
use netbridge_domain::config::ApiServerConfig;
use netbridge_domain::{ApiObject, DomainError, ObjectKind};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::fqname::{FqNameRequest, FqNameResponse};

pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// REST client for the backing store's API server.
///
/// Objects travel in a `{"<type>": {...}}` envelope. The connection flag
/// drops on connect or timeout errors; `reconnect` pings the server and
/// raises it again once anything answers.
pub struct ApiServerClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
    connected: AtomicBool,
}

impl ApiServerClient {
    pub fn new(config: &ApiServerConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::StoreUnavailable(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone().filter(|t| !t.is_empty()),
            connected: AtomicBool::new(true),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a cheap request so the connection flag reflects reality.
    pub async fn ping(&self) -> bool {
        match self.send(self.request(Method::GET, "/")).await {
            Ok(_) => true,
            Err(e) => {
                warn!(url = %self.base_url, error = %e, "API server unreachable");
                false
            }
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        match &self.auth_token {
            Some(token) => builder.header(AUTH_TOKEN_HEADER, token),
            None => builder,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, DomainError> {
        match request.send().await {
            Ok(response) => {
                self.connected.store(true, Ordering::Relaxed);
                Ok(response)
            }
            Err(e) if e.is_connect() || e.is_timeout() => {
                self.connected.store(false, Ordering::Relaxed);
                Err(DomainError::StoreUnavailable(format!(
                    "API server {} unreachable: {}",
                    self.base_url, e
                )))
            }
            Err(e) => Err(DomainError::StoreFailure(format!(
                "Request to {} failed: {}",
                self.base_url, e
            ))),
        }
    }

    fn unexpected(response: &Response, what: &str) -> DomainError {
        let status = response.status();
        DomainError::StoreFailure(format!(
            "{} returned HTTP {}: {}",
            what,
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        ))
    }

    /// Sends a create or update; rejections become `Ok(false)`.
    async fn write(&self, request: RequestBuilder, object: &ApiObject) -> Result<bool, DomainError> {
        let response = self.send(request.json(object)).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(true);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(
            kind = %object.kind(),
            uuid = object.uuid(),
            status = status.as_u16(),
            body = %body,
            "API server rejected write"
        );
        Ok(false)
    }
}

#[async_trait]
impl BackingStore for ApiServerClient {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    async fn reconnect(&self) -> bool {
        debug!(url = %self.base_url, "Pinging API server after lost connection");
        self.ping().await
    }

    #[instrument(skip(self))]
    async fn find_by_id(
        &self,
        kind: ObjectKind,
        id: &str,
    ) -> Result<Option<ApiObject>, DomainError> {
        let path = format!("/{}/{}", kind.type_name(), id);
        let response = self.send(self.request(Method::GET, &path)).await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!(kind = %kind, id = %id, "Object not found");
                Ok(None)
            }
            status if status.is_success() => response
                .json::<ApiObject>()
                .await
                .map(Some)
                .map_err(|e| DomainError::StoreFailure(format!("Invalid {} body: {}", kind, e))),
            _ => Err(Self::unexpected(&response, &path)),
        }
    }

    #[instrument(skip(self))]
    async fn find_by_name(
        &self,
        kind: ObjectKind,
        parent: Option<&[String]>,
        name: &str,
    ) -> Result<Option<String>, DomainError> {
        let fq_name = match parent {
            Some(parent) => {
                let mut fq_name = parent.to_vec();
                fq_name.push(name.to_string());
                fq_name
            }
            None => kind.default_fq_name(name),
        };
        let body = FqNameRequest {
            kind: kind.type_name().to_string(),
            fq_name,
        };

        let response = self
            .send(self.request(Method::POST, "/fqname-to-id").json(&body))
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => response
                .json::<FqNameResponse>()
                .await
                .map(|r| Some(r.uuid))
                .map_err(|e| DomainError::StoreFailure(format!("Invalid fqname-to-id body: {}", e))),
            _ => Err(Self::unexpected(&response, "fqname-to-id")),
        }
    }

    #[instrument(skip(self, object), fields(kind = %object.kind(), uuid = object.uuid()))]
    async fn create(&self, object: &ApiObject) -> Result<bool, DomainError> {
        let path = format!("/{}", object.kind().collection());
        self.write(self.request(Method::POST, &path), object).await
    }

    #[instrument(skip(self, object), fields(kind = %object.kind(), uuid = object.uuid()))]
    async fn update(&self, object: &ApiObject) -> Result<bool, DomainError> {
        let path = format!("/{}/{}", object.kind().type_name(), object.uuid());
        self.write(self.request(Method::PUT, &path), object).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, kind: ObjectKind, id: &str) -> Result<(), DomainError> {
        let path = format!("/{}/{}", kind.type_name(), id);
        let response = self.send(self.request(Method::DELETE, &path)).await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::unexpected(&response, &path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        let config = ApiServerConfig {
            host: "10.1.1.1".to_string(),
            port: 8082,
            ..ApiServerConfig::default()
        };
        let client = ApiServerClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://10.1.1.1:8082");
        assert!(client.is_connected());
    }

    #[test]
    fn empty_auth_token_is_ignored() {
        let config = ApiServerConfig {
            auth_token: Some(String::new()),
            ..ApiServerConfig::default()
        };
        let client = ApiServerClient::new(&config).unwrap();
        assert!(client.auth_token.is_none());
    }
}
