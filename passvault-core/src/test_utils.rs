//! 测试辅助模块
//!
//! 提供 mock Config Service 和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use passvault_remote::{ConfigService, PresetConfig, PresetMap, RemoteError};
use tokio::sync::RwLock;

use crate::services::{AliasStore, DEFAULT_LOAD_TIMEOUT};

// ===== MockConfigService =====

pub struct MockConfigService {
    presets: RwLock<PresetMap>,
    /// 如果 Some，fetch_all 返回此错误
    fetch_error: RwLock<Option<RemoteError>>,
    upsert_error: RwLock<Option<RemoteError>>,
    delete_error: RwLock<Option<RemoteError>>,
    /// fetch_all 响应前的延迟（配合 `tokio::time::pause` 测试超时）
    fetch_delay: Option<Duration>,
    fetch_calls: AtomicUsize,
    upsert_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl MockConfigService {
    pub fn new() -> Self {
        Self {
            presets: RwLock::new(PresetMap::new()),
            fetch_error: RwLock::new(None),
            upsert_error: RwLock::new(None),
            delete_error: RwLock::new(None),
            fetch_delay: None,
            fetch_calls: AtomicUsize::new(0),
            upsert_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_preset(mut self, name: &str, preset: PresetConfig) -> Self {
        self.presets.get_mut().insert(name.to_string(), preset);
        self
    }

    pub fn with_presets(mut self, presets: PresetMap) -> Self {
        self.presets.get_mut().extend(presets);
        self
    }

    pub fn with_fetch_error(mut self, err: RemoteError) -> Self {
        *self.fetch_error.get_mut() = Some(err);
        self
    }

    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    pub async fn clear_fetch_error(&self) {
        *self.fetch_error.write().await = None;
    }

    pub async fn set_upsert_error(&self, err: Option<RemoteError>) {
        *self.upsert_error.write().await = err;
    }

    pub async fn set_delete_error(&self, err: Option<RemoteError>) {
        *self.delete_error.write().await = err;
    }

    /// Preset as the remote side currently holds it.
    pub async fn stored(&self, name: &str) -> Option<PresetConfig> {
        self.presets.read().await.get(name).cloned()
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn upsert_calls(&self) -> usize {
        self.upsert_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigService for MockConfigService {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn fetch_all(&self) -> passvault_remote::Result<PresetMap> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.fetch_delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(ref err) = *self.fetch_error.read().await {
            return Err(err.clone());
        }
        Ok(self.presets.read().await.clone())
    }

    async fn upsert(&self, name: &str, preset: &PresetConfig) -> passvault_remote::Result<()> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref err) = *self.upsert_error.read().await {
            return Err(err.clone());
        }
        self.presets
            .write()
            .await
            .insert(name.to_string(), preset.clone());
        Ok(())
    }

    async fn delete(&self, name: &str) -> passvault_remote::Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref err) = *self.delete_error.read().await {
            return Err(err.clone());
        }
        self.presets.write().await.remove(name);
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 创建一个未加载的 `AliasStore`，同时返回 mock 以便断言
pub fn create_test_store(mock: MockConfigService) -> (AliasStore, Arc<MockConfigService>) {
    let mock = Arc::new(mock);
    let store = AliasStore::new(mock.clone()).with_load_timeout(DEFAULT_LOAD_TIMEOUT);
    (store, mock)
}

/// 创建一个已同步（空集合）的 `AliasStore`
pub async fn create_synced_store() -> (AliasStore, Arc<MockConfigService>) {
    let (store, mock) = create_test_store(MockConfigService::new());
    store.load().await;
    (store, mock)
}

pub fn test_preset(platform: &str) -> PresetConfig {
    PresetConfig::new(platform, 16, "")
}

pub fn rejected(status: u16) -> RemoteError {
    RemoteError::Rejected {
        status,
        raw_message: Some(format!("status {status}")),
    }
}
