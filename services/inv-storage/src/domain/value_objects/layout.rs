//! 存储布局输入
//!
//! 记录构建器的原始输入：按存储类型采集的尺寸字段，或启用分区模式
//! 时调用方显式提供的分区列表。数值字段缺失或非正时钳制到 1

use super::{Zone, ZoneDimensions};

/// 合成单分区的默认名称
const DEFAULT_ZONE_NAME: &str = "Default Zone";

/// 分区模式下缺省的展示温度（°F）
const DEFAULT_ZONE_TEMPERATURE: f64 = 55.0;

/// 分区模式下单个分区的原始输入
#[derive(Debug, Clone, Default)]
pub struct ZoneInput {
    pub name: Option<String>,
    pub rows: Option<i64>,
    pub columns: Option<i64>,
    pub sections: Option<i64>,
    pub temperature: Option<f64>,
}

/// 存储布局
///
/// 三个标量变体对应关闭分区模式时按存储类型采集的表单字段，
/// Zones 对应开启分区模式时的显式分区列表
#[derive(Debug, Clone)]
pub enum StorageLayout {
    /// 酒架：行 × 列
    Rack {
        rows: Option<i64>,
        columns: Option<i64>,
    },
    /// 酒柜：隔层映射为行，每层瓶数映射为列
    Fridge {
        sections: Option<i64>,
        shelves: Option<i64>,
        bottles_per_shelf: Option<i64>,
    },
    /// 其他设备：分段 + 行 × 列
    Custom {
        sections: Option<i64>,
        rows: Option<i64>,
        columns: Option<i64>,
    },
    /// 分区模式
    Zones(Vec<ZoneInput>),
}

impl StorageLayout {
    /// 解析为规范分区数组
    ///
    /// 标量变体合成一个 "Default Zone"；分区模式逐个归一化输入，
    /// 空列表回落到历史默认的 4×6 分区
    pub fn resolve_zones(&self) -> Vec<Zone> {
        match self {
            StorageLayout::Rack { rows, columns } => vec![Zone::new(
                DEFAULT_ZONE_NAME,
                ZoneDimensions::new(*rows, *columns, None),
            )],
            StorageLayout::Fridge {
                sections,
                shelves,
                bottles_per_shelf,
            } => vec![Zone::new(
                DEFAULT_ZONE_NAME,
                ZoneDimensions::new(*shelves, *bottles_per_shelf, *sections),
            )],
            StorageLayout::Custom {
                sections,
                rows,
                columns,
            } => vec![Zone::new(
                DEFAULT_ZONE_NAME,
                ZoneDimensions::new(*rows, *columns, *sections),
            )],
            StorageLayout::Zones(inputs) => {
                if inputs.is_empty() {
                    return vec![
                        Zone::new(DEFAULT_ZONE_NAME, ZoneDimensions::of(4, 6))
                            .with_temperature(DEFAULT_ZONE_TEMPERATURE),
                    ];
                }
                inputs
                    .iter()
                    .enumerate()
                    .map(|(i, input)| {
                        let name = match &input.name {
                            Some(n) if !n.is_empty() => n.clone(),
                            _ => format!("Zone {}", i + 1),
                        };
                        Zone::new(
                            name,
                            ZoneDimensions::new(input.rows, input.columns, input.sections),
                        )
                        .with_temperature(input.temperature.unwrap_or(DEFAULT_ZONE_TEMPERATURE))
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rack_synthesizes_default_zone() {
        let zones = StorageLayout::Rack {
            rows: Some(4),
            columns: Some(6),
        }
        .resolve_zones();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].name(), "Default Zone");
        assert_eq!(zones[0].dimensions().rows(), 4);
        assert_eq!(zones[0].dimensions().columns(), 6);
        assert_eq!(zones[0].dimensions().sections(), 1);
    }

    #[test]
    fn test_fridge_maps_shelves_to_rows() {
        let zones = StorageLayout::Fridge {
            sections: Some(2),
            shelves: Some(5),
            bottles_per_shelf: Some(7),
        }
        .resolve_zones();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].dimensions().rows(), 5);
        assert_eq!(zones[0].dimensions().columns(), 7);
        assert_eq!(zones[0].dimensions().sections(), 2);
    }

    #[test]
    fn test_custom_with_missing_fields() {
        let zones = StorageLayout::Custom {
            sections: None,
            rows: Some(3),
            columns: None,
        }
        .resolve_zones();
        assert_eq!(zones[0].dimensions().rows(), 3);
        assert_eq!(zones[0].dimensions().columns(), 1);
        assert_eq!(zones[0].dimensions().sections(), 1);
    }

    #[test]
    fn test_zone_mode_fills_names_and_temperature() {
        let zones = StorageLayout::Zones(vec![
            ZoneInput {
                name: Some("Red".to_string()),
                rows: Some(2),
                columns: Some(3),
                temperature: Some(58.0),
                ..Default::default()
            },
            ZoneInput {
                rows: Some(1),
                columns: Some(4),
                ..Default::default()
            },
        ])
        .resolve_zones();
        assert_eq!(zones[0].name(), "Red");
        assert_eq!(zones[0].temperature(), Some(58.0));
        // 名称缺失时按序号补齐，温度回落默认
        assert_eq!(zones[1].name(), "Zone 2");
        assert_eq!(zones[1].temperature(), Some(55.0));
    }

    #[test]
    fn test_empty_zone_mode_falls_back_to_four_by_six() {
        let zones = StorageLayout::Zones(Vec::new()).resolve_zones();
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].name(), "Default Zone");
        assert_eq!(zones[0].dimensions().capacity(), 24);
        assert_eq!(zones[0].temperature(), Some(55.0));
    }
}
