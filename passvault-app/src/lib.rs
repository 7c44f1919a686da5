//! Platform-agnostic application bootstrap for PassVault.
//!
//! Provides `AppState` (store container plus command functions),
//! `AppStateBuilder` (adapter injection) and `AppConfig` (file and env
//! configuration).

pub mod config;
pub mod requests;

use std::sync::Arc;
use std::time::Duration;

use passvault_core::crypto::derive;
use passvault_core::error::{CoreError, CoreResult};
use passvault_core::services::{AliasStore, DEFAULT_LOAD_TIMEOUT};
use passvault_core::types::{DerivedCredential, SyncMode};
use passvault_remote::{ConfigService, HttpConfigService};

pub use config::AppConfig;
pub use requests::{DeriveRequest, PresetForm, PresetSummary, SavePresetRequest};

/// Platform-agnostic application state.
///
/// Every frontend constructs this once at startup via `AppStateBuilder` or
/// [`AppState::from_config`]. The preset store has already attempted its
/// single load by the time this exists.
pub struct AppState {
    /// Preset store
    pub alias_store: Arc<AliasStore>,
    /// Configuration the state was built from
    pub config: AppConfig,
}

impl AppState {
    /// Wire an HTTP Config Service from `config` and run the initial load.
    ///
    /// # Errors
    /// Returns `CoreError::Remote` if the endpoint or client options are invalid.
    /// An unreachable service is not an error: the store comes up offline.
    pub async fn from_config(config: AppConfig) -> CoreResult<Self> {
        let service = HttpConfigService::new(config.endpoint.clone(), config.http_options())?;
        log::info!("Using Config Service at {}", service.endpoint());
        AppStateBuilder::new()
            .config_service(Arc::new(service))
            .load_timeout(config.load_timeout())
            .config(config)
            .build()
            .await
    }

    pub fn sync_mode(&self) -> SyncMode {
        self.alias_store.mode()
    }

    /// Whether preset mutations are currently refused.
    pub fn is_read_only(&self) -> bool {
        !self.sync_mode().allows_mutation()
    }

    // ===== 命令 =====

    /// Derive the credential for the request's site.
    ///
    /// # Errors
    /// `ValidationError` for an empty secret, a blank site or an out-of-range length.
    pub fn derive_credential(&self, request: &DeriveRequest) -> CoreResult<DerivedCredential> {
        let site = request.site.trim();
        if request.secret.is_empty() {
            return Err(CoreError::ValidationError(
                "Master secret is required".to_string(),
            ));
        }
        if site.is_empty() {
            return Err(CoreError::ValidationError("Site is required".to_string()));
        }
        derive(&request.secret, site, request.length, &request.symbols)
    }

    /// Create or update a preset.
    pub async fn save_preset(&self, request: &SavePresetRequest) -> CoreResult<()> {
        self.alias_store
            .save(request.name.trim(), request.to_preset())
            .await
    }

    pub async fn delete_preset(&self, name: &str) -> CoreResult<()> {
        self.alias_store.delete(name.trim()).await
    }

    /// Autofill values for `name`.
    ///
    /// Blank name gives the default form; an unknown name gives `None` so the
    /// caller keeps whatever it already shows.
    pub async fn preset_form(&self, name: &str) -> Option<PresetForm> {
        let name = name.trim();
        if name.is_empty() {
            return Some(PresetForm::defaults());
        }
        self.alias_store
            .lookup(name)
            .await
            .map(|preset| PresetForm::from_preset(&preset))
    }

    /// Presets with their platform labels, ordered by name.
    pub async fn list_presets(&self) -> Vec<PresetSummary> {
        self.alias_store
            .entries()
            .await
            .into_iter()
            .map(|(name, preset)| PresetSummary {
                name,
                platform: preset.platform,
            })
            .collect()
    }
}

/// Builder for constructing `AppState` with a platform-specific Config Service.
///
/// # Required adapters
/// - `config_service`: where presets are persisted
///
/// # Optional
/// - `load_timeout`: defaults to [`DEFAULT_LOAD_TIMEOUT`]
/// - `config`: defaults to `AppConfig::default()`
pub struct AppStateBuilder {
    config_service: Option<Arc<dyn ConfigService>>,
    load_timeout: Option<Duration>,
    config: Option<AppConfig>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_service: None,
            load_timeout: None,
            config: None,
        }
    }

    #[must_use]
    pub fn config_service(mut self, service: Arc<dyn ConfigService>) -> Self {
        self.config_service = Some(service);
        self
    }

    #[must_use]
    pub fn load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the `AppState` and run the store's initial load.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if `config_service` is missing.
    pub async fn build(self) -> CoreResult<AppState> {
        let config_service = self.config_service.ok_or_else(|| {
            CoreError::ValidationError("config_service is required".to_string())
        })?;
        let load_timeout = self.load_timeout.unwrap_or(DEFAULT_LOAD_TIMEOUT);

        let alias_store = AliasStore::open(config_service, load_timeout).await;
        if alias_store.is_offline() {
            log::warn!("Config Service unavailable, presets are read-only");
        }

        Ok(AppState {
            alias_store: Arc::new(alias_store),
            config: self.config.unwrap_or_default(),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
