//! Command-line interface, built with clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use passvault_core::crypto::DEFAULT_LENGTH;

/// PassVault: deterministic site credentials and named presets.
#[derive(Parser, Debug)]
#[command(name = "passvault")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/passvault/config.json).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Config Service collection URL, overrides config file and environment.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive the credential for a site and print it.
    ///
    /// The master secret is read from PASSVAULT_MASTER_KEY, or from one line
    /// of stdin.
    Derive {
        /// Site identifier (e.g. "example.com"). Taken from the preset if omitted.
        #[arg(long)]
        site: Option<String>,

        /// Credential length, 1 to 32.
        #[arg(long)]
        length: Option<u32>,

        /// Use a stored preset; explicit flags override its fields.
        #[arg(long)]
        preset: Option<String>,

        #[command(flatten)]
        symbols: SymbolArgs,
    },

    /// List stored presets with their platform.
    List,

    /// Show the fields of one preset.
    Show {
        name: String,
    },

    /// Create or update a preset.
    Save {
        name: String,

        /// Site identifier the preset derives for.
        #[arg(long)]
        platform: String,

        #[arg(long, default_value_t = DEFAULT_LENGTH)]
        length: u32,

        #[command(flatten)]
        symbols: SymbolArgs,
    },

    /// Delete a preset.
    Delete {
        name: String,
    },
}

/// Symbol policy flags shared by `derive` and `save`.
#[derive(Args, Debug, Clone, Default)]
pub struct SymbolArgs {
    /// Do not inject a symbol.
    #[arg(long, conflicts_with = "symbols")]
    pub no_symbols: bool,

    /// Custom symbol pool (default: !@#%_-+).
    #[arg(long)]
    pub symbols: Option<String>,
}
