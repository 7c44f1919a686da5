//! Generic HTTP client tools
//!
//! Shared request plumbing for the Config Service client: sending, logging,
//! status classification and JSON parsing.
//!
//! Every request is a single attempt. A failure is reported to the caller as-is.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::RemoteError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `service_name` - service identifier (for logging)
    /// * `method_name` - request method name (such as "GET", "PUT", used for logs)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - any HTTP response, success or not
    /// * `Err(RemoteError::Timeout | RemoteError::NetworkError)` - no response
    pub async fn execute_request(
        request_builder: RequestBuilder,
        service_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), RemoteError> {
        log::debug!("[{service_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                RemoteError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                RemoteError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{service_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| RemoteError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{service_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Turn a non-2xx status into [`RemoteError::Rejected`].
    ///
    /// The body is kept (truncated) as the rejection message so callers can
    /// show what the service said.
    pub fn ensure_success(
        status_code: u16,
        response_text: &str,
        service_name: &str,
    ) -> Result<(), RemoteError> {
        if (200..300).contains(&status_code) {
            return Ok(());
        }

        log::warn!("[{service_name}] Request rejected: HTTP {status_code}");
        let folded = truncate_for_log(response_text);
        let raw_message = (!folded.is_empty()).then_some(folded);
        Err(RemoteError::Rejected {
            status: status_code,
            raw_message,
        })
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(RemoteError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, service_name: &str) -> Result<T, RemoteError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{service_name}] JSON parse failed: {e}");
            log::error!(
                "[{service_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            RemoteError::ParseError {
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PresetMap;

    // ---- ensure_success ----

    #[test]
    fn success_range_accepted() {
        for status in [200, 201, 204, 299] {
            assert!(HttpUtils::ensure_success(status, "", "test").is_ok());
        }
    }

    #[test]
    fn not_found_rejected_with_body() {
        let result = HttpUtils::ensure_success(404, " not here \n", "test");
        assert_eq!(
            result,
            Err(RemoteError::Rejected {
                status: 404,
                raw_message: Some("not here".to_string()),
            })
        );
    }

    #[test]
    fn server_error_rejected_without_body() {
        let result = HttpUtils::ensure_success(503, "   ", "test");
        assert_eq!(
            result,
            Err(RemoteError::Rejected {
                status: 503,
                raw_message: None,
            })
        );
    }

    #[test]
    fn redirect_is_not_success() {
        assert!(HttpUtils::ensure_success(302, "", "test").is_err());
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_collection() {
        let result: Result<PresetMap, RemoteError> = HttpUtils::parse_json(
            r#"{"a":{"platform":"a.example","length":8}}"#,
            "test",
        );
        assert!(
            matches!(&result, Ok(map) if map.len() == 1),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<PresetMap, RemoteError> = HttpUtils::parse_json("<html>", "test");
        assert!(
            matches!(&result, Err(RemoteError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
