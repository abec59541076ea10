//! 存储类型枚举

use serde::{Deserialize, Serialize};

/// 存储设备类型
///
/// 只决定上游采集哪些原始尺寸字段，不改变引擎算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum StorageKind {
    /// 酒架
    WineRack,
    /// 酒柜
    WineFridge,
    /// 其他设备
    #[default]
    Other,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::WineRack => "Wine Rack",
            StorageKind::WineFridge => "Wine Fridge",
            StorageKind::Other => "Other",
        }
    }
}

impl From<&str> for StorageKind {
    fn from(value: &str) -> Self {
        match value {
            "Wine Rack" => StorageKind::WineRack,
            "Wine Fridge" => StorageKind::WineFridge,
            _ => StorageKind::Other,
        }
    }
}

impl From<String> for StorageKind {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<StorageKind> for String {
    fn from(kind: StorageKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
