//! 库位生成器

use domain_core::Position;

use crate::domain::entities::StorageConfiguration;
use crate::domain::enums::{NamingScheme, SequentialMode};

/// 按声明顺序枚举存储的全部库位标签
///
/// 分区内行优先：外层 1..=rows，内层 1..=columns。顺序编号沿用
/// 历史的按分区独立编号，形状相同的分区会产生重复标签；需要
/// 全局唯一时用 [`generate_with`] 搭配 [`SequentialMode::Global`]
pub fn generate(storage: &StorageConfiguration) -> Vec<Position> {
    generate_with(storage, SequentialMode::default())
}

/// 指定顺序编号模式的库位枚举
pub fn generate_with(storage: &StorageConfiguration, mode: SequentialMode) -> Vec<Position> {
    let zones = storage.zones();
    if zones.is_empty() {
        // 分区模型之前创建的存储只有 total_positions，沿用兜底序列
        return (1..=storage.total_positions())
            .map(|i| Position::new(format!("Position {i}")))
            .collect();
    }

    let scheme = storage.naming_scheme();
    let mut labels = Vec::with_capacity(storage.total_positions() as usize);
    let mut offset: u32 = 0;
    for (index, zone) in zones.iter().enumerate() {
        let name = zone.display_name(index);
        let dims = zone.dimensions();
        for row in 1..=dims.rows() {
            for col in 1..=dims.columns() {
                let label = match (scheme, mode) {
                    (NamingScheme::SequentialNumbering, SequentialMode::Global) => {
                        Position::new((offset + (row - 1) * dims.columns() + col).to_string())
                    }
                    _ => scheme.label(&name, dims.columns(), row, col),
                };
                labels.push(label);
            }
        }
        offset += dims.capacity();
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::StorageKind;
    use crate::domain::value_objects::{StorageId, Zone, ZoneDimensions};
    use common::AuditInfo;

    fn storage_with(scheme: NamingScheme, zones: Vec<Zone>) -> StorageConfiguration {
        StorageConfiguration::new("Test", StorageKind::WineRack, scheme, zones)
    }

    fn labels(storage: &StorageConfiguration) -> Vec<String> {
        generate(storage)
            .into_iter()
            .map(Position::into_string)
            .collect()
    }

    #[test]
    fn test_row_column_order() {
        let storage = storage_with(
            NamingScheme::RowColumn,
            vec![Zone::new("Z", ZoneDimensions::of(2, 3))],
        );
        assert_eq!(labels(&storage), ["1A", "1B", "1C", "2A", "2B", "2C"]);
    }

    #[test]
    fn test_sequential_single_zone() {
        let storage = storage_with(
            NamingScheme::SequentialNumbering,
            vec![Zone::new("Z", ZoneDimensions::of(3, 2))],
        );
        assert_eq!(labels(&storage), ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_zone_position() {
        let storage = storage_with(
            NamingScheme::ZonePosition,
            vec![Zone::new("Red", ZoneDimensions::of(1, 2))],
        );
        assert_eq!(labels(&storage), ["Red-1A", "Red-1B"]);
    }

    #[test]
    fn test_section_row_column_default() {
        let storage = storage_with(
            NamingScheme::SectionRowColumn,
            vec![Zone::new("Red", ZoneDimensions::of(2, 3))],
        );
        assert_eq!(
            labels(&storage),
            ["Red-1-1", "Red-1-2", "Red-1-3", "Red-2-1", "Red-2-2", "Red-2-3"]
        );
    }

    #[test]
    fn test_unnamed_zone_gets_indexed_name() {
        let storage = storage_with(
            NamingScheme::SectionRowColumn,
            vec![
                Zone::new("Red", ZoneDimensions::of(1, 1)),
                Zone::new("", ZoneDimensions::of(1, 1)),
            ],
        );
        assert_eq!(labels(&storage), ["Red-1-1", "Zone 2-1-1"]);
    }

    #[test]
    fn test_fallback_without_zones() {
        let storage = StorageConfiguration::from_parts(
            StorageId::new(),
            "Legacy".to_string(),
            StorageKind::Other,
            Vec::new(),
            3,
            NamingScheme::SectionRowColumn,
            AuditInfo::default(),
        );
        assert_eq!(labels(&storage), ["Position 1", "Position 2", "Position 3"]);
    }

    #[test]
    fn test_sequential_collision_across_equal_zones() {
        // 历史契约：按分区独立编号，形状相同的分区标签重复。
        // 这里断言碰撞存在，而不是断言唯一性
        let storage = storage_with(
            NamingScheme::SequentialNumbering,
            vec![
                Zone::new("Red", ZoneDimensions::of(3, 4)),
                Zone::new("White", ZoneDimensions::of(3, 4)),
            ],
        );
        let all = labels(&storage);
        assert_eq!(all.len(), 24);
        assert_eq!(all[0], "1");
        assert_eq!(all[12], "1");
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn test_global_sequential_is_collision_free() {
        let storage = storage_with(
            NamingScheme::SequentialNumbering,
            vec![
                Zone::new("Red", ZoneDimensions::of(3, 4)),
                Zone::new("White", ZoneDimensions::of(3, 4)),
            ],
        );
        let all = generate_with(&storage, SequentialMode::Global);
        assert_eq!(all.len(), 24);
        assert_eq!(all[0].as_str(), "1");
        assert_eq!(all[12].as_str(), "13");
        assert_eq!(all[23].as_str(), "24");
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 24);
    }

    #[test]
    fn test_global_mode_leaves_other_schemes_unchanged() {
        let storage = storage_with(
            NamingScheme::RowColumn,
            vec![Zone::new("Z", ZoneDimensions::of(1, 2))],
        );
        assert_eq!(
            generate_with(&storage, SequentialMode::Global),
            generate(&storage)
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let storage = storage_with(
            NamingScheme::ZonePosition,
            vec![
                Zone::new("Red", ZoneDimensions::of(2, 5)),
                Zone::new("White", ZoneDimensions::of(3, 3)),
            ],
        );
        assert_eq!(generate(&storage), generate(&storage));
    }

    #[test]
    fn test_length_matches_total_positions() {
        let storage = storage_with(
            NamingScheme::SectionRowColumn,
            vec![
                Zone::new("A", ZoneDimensions::new(Some(2), Some(3), Some(5))),
                Zone::new("B", ZoneDimensions::of(4, 1)),
            ],
        );
        assert_eq!(generate(&storage).len() as u32, storage.total_positions());
    }
}
