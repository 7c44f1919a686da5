//! CLI command handlers.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::{anyhow, bail, Context, Result};
use passvault_app::{AppState, DeriveRequest, PresetForm, SavePresetRequest};
use passvault_core::error::CoreError;
use passvault_core::types::{MasterSecret, SymbolPolicy};

use crate::cli::{Commands, SymbolArgs};

/// Environment variable holding the master secret.
const ENV_MASTER_KEY: &str = "PASSVAULT_MASTER_KEY";

/// Execute the parsed CLI command.
pub async fn execute(state: &AppState, command: Commands) -> Result<()> {
    match command {
        Commands::Derive {
            site,
            length,
            preset,
            symbols,
        } => cmd_derive(state, site, length, preset, &symbols).await,
        Commands::List => cmd_list(state).await,
        Commands::Show { name } => cmd_show(state, &name).await,
        Commands::Save {
            name,
            platform,
            length,
            symbols,
        } => cmd_save(state, name, platform, length, &symbols).await,
        Commands::Delete { name } => cmd_delete(state, &name).await,
    }
}

// ─── Derive ──────────────────────────────────────────────────────────────────

async fn cmd_derive(
    state: &AppState,
    site: Option<String>,
    length: Option<u32>,
    preset: Option<String>,
    symbols: &SymbolArgs,
) -> Result<()> {
    let base = match preset {
        Some(name) => state
            .preset_form(&name)
            .await
            .filter(|form| !form.platform.is_empty())
            .ok_or(CoreError::PresetNotFound(name))?,
        None => PresetForm::defaults(),
    };

    let site = site
        .or_else(|| Some(base.platform.clone()).filter(|p| !p.is_empty()))
        .ok_or_else(|| anyhow!("--site is required unless --preset is given"))?;

    let request = DeriveRequest {
        secret: read_master_secret()?,
        site,
        length: length.unwrap_or(base.length),
        symbols: symbols.resolve(base.symbols),
    };
    let credential = state.derive_credential(&request)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", credential.expose())?;
    Ok(())
}

/// `PASSVAULT_MASTER_KEY` if set, else one line of stdin.
fn read_master_secret() -> Result<MasterSecret> {
    if let Ok(value) = std::env::var(ENV_MASTER_KEY) {
        if !value.is_empty() {
            return Ok(MasterSecret::from(value));
        }
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("Master secret: ");
        std::io::stderr().flush()?;
    }
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("Failed to read master secret from stdin")?;
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(MasterSecret::from(line))
}

// ─── Presets ─────────────────────────────────────────────────────────────────

async fn cmd_list(state: &AppState) -> Result<()> {
    let presets = state.list_presets().await;
    if presets.is_empty() {
        eprintln!("No presets stored");
        return Ok(());
    }

    let width = presets.iter().map(|p| p.name.chars().count()).max().unwrap_or(0);
    for preset in presets {
        println!("{:<width$}  {}", preset.name, preset.platform);
    }
    Ok(())
}

async fn cmd_show(state: &AppState, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Preset name is required");
    }
    let form = state
        .preset_form(name)
        .await
        .ok_or_else(|| CoreError::PresetNotFound(name.to_string()))?;

    println!("name:     {}", name.trim());
    println!("platform: {}", form.platform);
    println!("length:   {}", form.length);
    if form.symbols.enabled {
        println!("symbols:  {}", form.symbols.pool);
    } else {
        println!("symbols:  (disabled)");
    }
    Ok(())
}

async fn cmd_save(
    state: &AppState,
    name: String,
    platform: String,
    length: u32,
    symbols: &SymbolArgs,
) -> Result<()> {
    let request = SavePresetRequest {
        name,
        platform,
        length,
        symbols: symbols.resolve(SymbolPolicy::default_pool()),
    };
    state.save_preset(&request).await?;
    eprintln!("✓ Preset {} saved", request.name.trim());
    Ok(())
}

async fn cmd_delete(state: &AppState, name: &str) -> Result<()> {
    state.delete_preset(name).await?;
    eprintln!("✓ Preset {} deleted", name.trim());
    Ok(())
}

impl SymbolArgs {
    /// Apply the flags on top of `base`.
    fn resolve(&self, base: SymbolPolicy) -> SymbolPolicy {
        if self.no_symbols {
            SymbolPolicy::disabled()
        } else if let Some(pool) = &self.symbols {
            SymbolPolicy::with_pool(pool.clone())
        } else {
            base
        }
    }
}
