//! `ConfigService` trait 实现

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::ConfigService;
use crate::types::{PresetConfig, PresetMap};

use super::{HttpConfigService, SERVICE_NAME};

#[async_trait]
impl ConfigService for HttpConfigService {
    fn id(&self) -> &'static str {
        "http"
    }

    async fn fetch_all(&self) -> Result<PresetMap> {
        let text = self.get_text(&self.endpoint).await?;
        let presets = parse_collection(&text)?;
        log::debug!("[{SERVICE_NAME}] Fetched {} presets", presets.len());
        Ok(presets)
    }

    async fn upsert(&self, name: &str, preset: &PresetConfig) -> Result<()> {
        let url = self.item_url(name);
        self.put_json(&url, preset).await
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let url = self.item_url(name);
        self.delete_request(&url).await
    }
}

/// 逐条解析集合响应
///
/// A payload that is not a JSON object is a `ParseError`. A record that does
/// not match `PresetConfig` (e.g. `"length": null`) is dropped with a warning.
fn parse_collection(text: &str) -> Result<PresetMap> {
    let raw: BTreeMap<String, serde_json::Value> = HttpUtils::parse_json(text, SERVICE_NAME)?;
    let mut presets = PresetMap::new();
    for (name, value) in raw {
        match serde_json::from_value::<PresetConfig>(value) {
            Ok(preset) => {
                presets.insert(name, preset);
            }
            Err(e) => {
                log::warn!("[{SERVICE_NAME}] Skipping malformed preset {name:?}: {e}");
            }
        }
    }
    Ok(presets)
}
