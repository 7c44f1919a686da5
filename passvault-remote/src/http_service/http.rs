//! Config Service HTTP 请求方法

use reqwest::RequestBuilder;

use crate::error::{RemoteError, Result};
use crate::http_client::HttpUtils;

use super::{AUTH_HEADER, HttpConfigService, SERVICE_NAME};

impl HttpConfigService {
    /// URL of a single preset. The name is percent-encoded as one path segment.
    pub(crate) fn item_url(&self, name: &str) -> String {
        format!("{}/{}", self.endpoint, urlencoding::encode(name))
    }

    /// 附加认证头
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => builder.header(AUTH_HEADER, token),
            None => builder,
        }
    }

    /// 执行请求并要求 2xx 响应，返回响应体
    pub(crate) async fn send(
        &self,
        builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<String> {
        let (status, text) =
            HttpUtils::execute_request(self.authorized(builder), SERVICE_NAME, method_name, url)
                .await?;
        HttpUtils::ensure_success(status, &text, SERVICE_NAME)?;
        Ok(text)
    }

    /// 执行 GET 请求
    pub(crate) async fn get_text(&self, url: &str) -> Result<String> {
        self.send(self.client.get(url), "GET", url).await
    }

    /// 执行 PUT 请求 (JSON body)
    pub(crate) async fn put_json<B: serde::Serialize>(&self, url: &str, body: &B) -> Result<()> {
        let body = serde_json::to_string(body).map_err(|e| RemoteError::SerializationError {
            detail: e.to_string(),
        })?;
        let builder = self
            .client
            .put(url)
            .header("Content-Type", "application/json")
            .body(body);
        self.send(builder, "PUT", url).await.map(|_| ())
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete_request(&self, url: &str) -> Result<()> {
        self.send(self.client.delete(url), "DELETE", url)
            .await
            .map(|_| ())
    }
}
