//! 分区概要视图

use serde::Serialize;

use crate::domain::value_objects::Zone;

/// 分区概要
///
/// 面向展示层的结构化数据。capacity 为规范容量（rows × columns），
/// display_capacity 把 sections 乘进去，仅用于界面上的瓶位数字；
/// 两个数字语义不同，不可混用
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneSummary {
    pub name: String,
    pub rows: u32,
    pub columns: u32,
    pub sections: u32,
    pub capacity: u32,
    pub display_capacity: u32,
    pub temperature: Option<f64>,
}

impl ZoneSummary {
    pub fn from_zone(index: usize, zone: &Zone) -> Self {
        let dims = zone.dimensions();
        Self {
            name: zone.display_name(index),
            rows: dims.rows(),
            columns: dims.columns(),
            sections: dims.sections(),
            capacity: dims.capacity(),
            display_capacity: dims.display_capacity(),
            temperature: zone.temperature(),
        }
    }
}
