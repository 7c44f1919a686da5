//! Preset store
//!
//! Owns the local mirror of the Config Service's preset collection and the
//! store's [`SyncMode`]. The mirror only changes after the Config Service has
//! confirmed a write, so a rejected save or delete never leaves the two apart.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use passvault_remote::{ConfigService, RemoteError};
use tokio::sync::RwLock;

use crate::crypto::validate_length;
use crate::error::{CoreError, CoreResult};
use crate::types::{PresetConfig, SyncMode};
use crate::validation::is_valid_preset_name;

/// Upper bound on the initial collection read.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_millis(5000);

/// Named presets mirrored from a Config Service.
pub struct AliasStore {
    config_service: Arc<dyn ConfigService>,
    presets: RwLock<BTreeMap<String, PresetConfig>>,
    mode: AtomicU8,
    load_started: AtomicBool,
    load_timeout: Duration,
}

impl AliasStore {
    /// Create an uninitialized store. Nothing is fetched until [`load`](Self::load).
    #[must_use]
    pub fn new(config_service: Arc<dyn ConfigService>) -> Self {
        Self {
            config_service,
            presets: RwLock::new(BTreeMap::new()),
            mode: AtomicU8::new(SyncMode::Uninitialized.as_u8()),
            load_started: AtomicBool::new(false),
            load_timeout: DEFAULT_LOAD_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_load_timeout(mut self, load_timeout: Duration) -> Self {
        self.load_timeout = load_timeout;
        self
    }

    /// Create a store and run its single initial load.
    pub async fn open(config_service: Arc<dyn ConfigService>, load_timeout: Duration) -> Self {
        let store = Self::new(config_service).with_load_timeout(load_timeout);
        store.load().await;
        store
    }

    pub fn mode(&self) -> SyncMode {
        SyncMode::from_u8(self.mode.load(Ordering::SeqCst))
    }

    pub fn is_offline(&self) -> bool {
        self.mode() == SyncMode::Offline
    }

    // ===== 同步 =====

    /// Read the remote collection into the mirror.
    ///
    /// Runs at most once per store. Success moves the store to `Synced`, with
    /// remote entries overwriting local ones of the same name. Any failure,
    /// including the timeout, moves it to `Offline` for good. Failures are
    /// logged and reflected in the returned mode, never raised.
    pub async fn load(&self) -> SyncMode {
        if self.load_started.swap(true, Ordering::SeqCst) {
            log::warn!("[AliasStore] Load already performed, ignoring");
            return self.mode();
        }

        let service_id = self.config_service.id();
        match tokio::time::timeout(self.load_timeout, self.config_service.fetch_all()).await {
            Ok(Ok(remote)) => {
                let total = remote.len();
                let mut presets = self.presets.write().await;
                for (name, preset) in remote {
                    match validate_preset(&name, &preset) {
                        Ok(()) => {
                            presets.insert(name, preset);
                        }
                        Err(e) => {
                            log::warn!("[AliasStore] Skipping remote preset {name:?}: {e}");
                        }
                    }
                }
                drop(presets);
                self.set_mode(SyncMode::Synced);
                log::info!("[AliasStore] Successfully loaded {total} presets from {service_id}");
            }
            Ok(Err(e)) => {
                log::error!("[AliasStore] Fetch presets failed: {e}");
                self.go_offline();
            }
            Err(_) => {
                log::error!(
                    "[AliasStore] Fetch presets timed out after {} ms",
                    self.load_timeout.as_millis()
                );
                self.go_offline();
            }
        }
        self.mode()
    }

    // ===== 修改操作 =====

    /// Create or replace the preset `name`.
    ///
    /// The mirror is updated only after the Config Service accepts the write.
    pub async fn save(&self, name: &str, preset: PresetConfig) -> CoreResult<()> {
        self.ensure_writable()?;
        validate_preset(name, &preset)?;

        if let Err(e) = self.config_service.upsert(name, &preset).await {
            log_remote_failure("save", name, &e);
            return Err(e.into());
        }

        self.presets.write().await.insert(name.to_string(), preset);
        log::info!("[AliasStore] Saved preset: {name}");
        Ok(())
    }

    /// Delete the preset `name`.
    ///
    /// The mirror is updated only after the Config Service accepts the delete.
    pub async fn delete(&self, name: &str) -> CoreResult<()> {
        self.ensure_writable()?;
        if name.is_empty() {
            return Err(CoreError::ValidationError(
                "Preset name is required".to_string(),
            ));
        }

        if let Err(e) = self.config_service.delete(name).await {
            log_remote_failure("delete", name, &e);
            return Err(e.into());
        }

        self.presets.write().await.remove(name);
        log::info!("[AliasStore] Deleted preset: {name}");
        Ok(())
    }

    // ===== 本地查询 =====

    /// Preset stored under `name` in the mirror.
    pub async fn lookup(&self, name: &str) -> Option<PresetConfig> {
        self.presets.read().await.get(name).cloned()
    }

    /// All preset names, lexicographically ordered.
    pub async fn list(&self) -> Vec<String> {
        self.presets.read().await.keys().cloned().collect()
    }

    /// All presets, lexicographically ordered by name.
    pub async fn entries(&self) -> Vec<(String, PresetConfig)> {
        self.presets
            .read()
            .await
            .iter()
            .map(|(name, preset)| (name.clone(), preset.clone()))
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.presets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.presets.read().await.is_empty()
    }

    // ===== 内部 =====

    fn set_mode(&self, mode: SyncMode) {
        self.mode.store(mode.as_u8(), Ordering::SeqCst);
    }

    fn go_offline(&self) {
        if self.mode() == SyncMode::Offline {
            return;
        }
        log::warn!("[AliasStore] Switching to offline mode");
        self.set_mode(SyncMode::Offline);
    }

    fn ensure_writable(&self) -> CoreResult<()> {
        if self.mode().allows_mutation() {
            Ok(())
        } else {
            log::warn!("[AliasStore] Rejected mutation in {:?} mode", self.mode());
            Err(CoreError::ReadOnly)
        }
    }
}

/// Local checks performed before any network call.
fn validate_preset(name: &str, preset: &PresetConfig) -> CoreResult<()> {
    if !is_valid_preset_name(name) {
        return Err(CoreError::ValidationError(format!(
            "Invalid preset name: {name:?}"
        )));
    }
    if preset.platform.trim().is_empty() {
        return Err(CoreError::ValidationError(
            "Platform is required".to_string(),
        ));
    }
    validate_length(preset.length)
}

fn log_remote_failure(operation: &str, name: &str, err: &RemoteError) {
    if err.is_expected() {
        log::warn!("[AliasStore] Failed to {operation} preset {name}: {err}");
    } else {
        log::error!("[AliasStore] Failed to {operation} preset {name}: {err}");
    }
}
