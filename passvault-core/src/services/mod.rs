//! 业务逻辑服务层

mod alias_store;

pub use alias_store::{AliasStore, DEFAULT_LOAD_TIMEOUT};
