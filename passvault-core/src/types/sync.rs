/// Synchronization mode of the preset store.
///
/// `Uninitialized` moves to `Synced` or `Offline` exactly once, when the
/// initial load completes. `Offline` is absorbing for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// 尚未联系远端
    Uninitialized,
    /// 初始加载成功，允许修改
    Synced,
    /// 初始加载失败，只读
    Offline,
}

impl SyncMode {
    pub(crate) const fn as_u8(self) -> u8 {
        match self {
            Self::Uninitialized => 0,
            Self::Synced => 1,
            Self::Offline => 2,
        }
    }

    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Uninitialized,
            1 => Self::Synced,
            _ => Self::Offline,
        }
    }

    /// Whether mutations may be sent to the Config Service.
    #[must_use]
    pub const fn allows_mutation(self) -> bool {
        matches!(self, Self::Synced)
    }
}
