//! 库位命名方案

use domain_core::Position;
use serde::{Deserialize, Serialize};

/// 库位命名方案
///
/// 每个存储设备选定一种方案，把 (分区, 行, 列) 确定性地格式化为标签。
/// 未识别的方案值回落到 SectionRowColumn，这是文档化的确定性默认，
/// 不是错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum NamingScheme {
    /// 纯数字：1, 2, 3, ...（按分区独立编号）
    SequentialNumbering,
    /// 行号 + 列字母：1A, 1B, 2A, ...
    RowColumn,
    /// 分区名 + 行号 + 列字母：Red-2C
    ZonePosition,
    /// 分区名-行-列：Red-2-3
    #[default]
    SectionRowColumn,
}

impl NamingScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingScheme::SequentialNumbering => "Sequential Numbering",
            NamingScheme::RowColumn => "Row-Column",
            NamingScheme::ZonePosition => "Zone-Position",
            NamingScheme::SectionRowColumn => "Section-Row-Column",
        }
    }

    /// 解析 (分区, 行, 列) 为库位标签，行列均从 1 起
    ///
    /// columns 为该分区的列数，只有顺序编号用到它
    pub fn label(&self, zone_name: &str, columns: u32, row: u32, col: u32) -> Position {
        match self {
            NamingScheme::SequentialNumbering => {
                Position::new(((row - 1) * columns + col).to_string())
            }
            NamingScheme::RowColumn => Position::new(format!("{}{}", row, column_letter(col))),
            NamingScheme::ZonePosition => {
                Position::new(format!("{}-{}{}", zone_name, row, column_letter(col)))
            }
            NamingScheme::SectionRowColumn => {
                Position::new(format!("{}-{}-{}", zone_name, row, col))
            }
        }
    }
}

/// 列字母：'A' + (col - 1)
///
/// 超过 26 列会越过 'Z' 进入符号区（第 27 列为 '['），与既有标签
/// 保持一致，不截断也不换进制
fn column_letter(col: u32) -> char {
    char::from_u32(64 + col).unwrap_or('?')
}

impl From<&str> for NamingScheme {
    fn from(value: &str) -> Self {
        match value {
            "Sequential Numbering" => NamingScheme::SequentialNumbering,
            "Row-Column" => NamingScheme::RowColumn,
            "Zone-Position" => NamingScheme::ZonePosition,
            _ => NamingScheme::SectionRowColumn,
        }
    }
}

impl From<String> for NamingScheme {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<NamingScheme> for String {
    fn from(scheme: NamingScheme) -> Self {
        scheme.as_str().to_string()
    }
}

impl std::fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 顺序编号模式
///
/// PerZone 为历史行为：每个分区从 1 重新编号，形状相同的分区会产生
/// 重复标签。Global 跨分区连续编号，标签全局唯一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequentialMode {
    /// 每个分区独立编号（历史默认）
    #[default]
    PerZone,
    /// 全存储连续编号
    Global,
}
