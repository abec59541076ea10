//! 库位标签值对象

use serde::{Deserialize, Serialize};

/// 库位标签
///
/// 标识存储设备内一个槽位的规范字符串，由分区、坐标和命名方案
/// 确定性地派生。存储 context 生成它，酒品 context 持有它
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position(String);

impl Position {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// 获取标签字符串
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 转换为字符串
    pub fn into_string(self) -> String {
        self.0
    }

    /// 空标签表示酒未指定具体库位
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Position {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Position {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
