//! 分区尺寸值对象

use serde::{Deserialize, Serialize};

/// 分区尺寸
///
/// rows × columns 为该分区的规范库位数；sections 只影响标签展示
/// 容量，两个数字不可混用。任何缺失或非正的原始输入都钳制到 1，
/// 一个分区至少有一个库位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDimensions")]
pub struct ZoneDimensions {
    rows: u32,
    columns: u32,
    sections: u32,
}

/// 线上的原始尺寸形状：字段可缺失、可为 0 或负数
#[derive(Debug, Default, Deserialize)]
struct RawDimensions {
    rows: Option<i64>,
    columns: Option<i64>,
    sections: Option<i64>,
}

impl From<RawDimensions> for ZoneDimensions {
    fn from(raw: RawDimensions) -> Self {
        Self::new(raw.rows, raw.columns, raw.sections)
    }
}

/// 缺失或非正的输入向上钳制到 1，绝不取 0
fn clamp_dimension(raw: Option<i64>) -> u32 {
    raw.map_or(1, |v| v.clamp(1, i64::from(u32::MAX)) as u32)
}

impl ZoneDimensions {
    pub fn new(rows: Option<i64>, columns: Option<i64>, sections: Option<i64>) -> Self {
        Self {
            rows: clamp_dimension(rows),
            columns: clamp_dimension(columns),
            sections: clamp_dimension(sections),
        }
    }

    /// 已知良构的行列构造
    pub fn of(rows: u32, columns: u32) -> Self {
        Self::new(Some(i64::from(rows)), Some(i64::from(columns)), None)
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn sections(&self) -> u32 {
        self.sections
    }

    /// 规范容量：rows × columns（sections 不参与）
    pub fn capacity(&self) -> u32 {
        self.rows * self.columns
    }

    /// 展示容量：rows × columns × sections（仅供界面显示）
    pub fn display_capacity(&self) -> u32 {
        self.rows * self.columns * self.sections
    }
}

impl Default for ZoneDimensions {
    fn default() -> Self {
        Self {
            rows: 1,
            columns: 1,
            sections: 1,
        }
    }
}
