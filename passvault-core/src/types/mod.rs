//! 类型定义模块

mod preset;
mod secret;
mod sync;

pub use preset::SymbolPolicy;
pub use secret::{DerivedCredential, MasterSecret};
pub use sync::SyncMode;

// Re-export remote 库的公共类型
pub use passvault_remote::{PresetConfig, PresetMap};
