//! HTTP Config Service client

mod http;
mod service;

use reqwest::{Client, Url};

use crate::error::{RemoteError, Result};
use crate::types::HttpClientOptions;

/// Identifier used in log lines.
pub(crate) const SERVICE_NAME: &str = "ConfigService";
/// Header carrying the access token.
pub(crate) const AUTH_HEADER: &str = "auth_token";

/// Config Service reached over HTTP.
///
/// The endpoint is the collection URL, e.g. `https://host/vault/api/key_configs`.
/// Single presets live at `{endpoint}/{percent-encoded name}`.
pub struct HttpConfigService {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
    pub(crate) auth_token: Option<String>,
}

impl HttpConfigService {
    /// Create a client for the given collection endpoint.
    ///
    /// Fails with [`RemoteError::InvalidConfiguration`] when the endpoint is not
    /// an absolute `http(s)` URL or the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, options: HttpClientOptions) -> Result<Self> {
        let endpoint = normalize_endpoint(&endpoint.into())?;
        let client = create_http_client(&options)?;
        Ok(Self {
            client,
            endpoint,
            auth_token: options.auth_token.filter(|t| !t.is_empty()),
        })
    }

    /// Collection endpoint this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// 创建带超时配置的 HTTP Client
fn create_http_client(options: &HttpClientOptions) -> Result<Client> {
    let mut builder = Client::builder().connect_timeout(options.connect_timeout);
    if let Some(timeout) = options.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| RemoteError::InvalidConfiguration {
        detail: format!("Failed to create HTTP client: {e}"),
    })
}

/// 校验并去掉末尾的 `/`
fn normalize_endpoint(endpoint: &str) -> Result<String> {
    let trimmed = endpoint.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| RemoteError::InvalidConfiguration {
        detail: format!("Invalid endpoint '{trimmed}': {e}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(RemoteError::InvalidConfiguration {
            detail: format!("Unsupported endpoint scheme: {}", url.scheme()),
        });
    }
    Ok(trimmed.to_string())
}
