use async_trait::async_trait;

use crate::error::Result;
use crate::types::{PresetConfig, PresetMap};

/// Config Service 契约 Trait
///
/// The remote authority for named presets. Implementations perform exactly one
/// attempt per call: no retry, no backoff.
///
/// 实现:
/// - [`HttpConfigService`](crate::HttpConfigService) (reqwest)
/// - 测试中的 mock 实现
#[async_trait]
pub trait ConfigService: Send + Sync {
    /// Service identifier used in log lines.
    fn id(&self) -> &'static str;

    /// Read the whole preset collection.
    ///
    /// A non-success response is an error; the caller treats any error as a
    /// total load failure.
    async fn fetch_all(&self) -> Result<PresetMap>;

    /// Create or replace the preset stored under `name`.
    async fn upsert(&self, name: &str, preset: &PresetConfig) -> Result<()>;

    /// Delete the preset stored under `name`.
    async fn delete(&self, name: &str) -> Result<()>;
}
