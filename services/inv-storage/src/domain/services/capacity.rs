//! 容量计算

use crate::domain::value_objects::Zone;

/// 库位总数：Σ rows × columns
///
/// sections 不参与规范容量；构建/更新存储配置时必须用该值覆盖
/// 外部提供的 total_positions
pub fn total_positions(zones: &[Zone]) -> u32 {
    zones.iter().map(|zone| zone.dimensions().capacity()).sum()
}

/// 展示容量：Σ rows × columns × sections（仅供界面显示）
pub fn display_capacity(zones: &[Zone]) -> u32 {
    zones
        .iter()
        .map(|zone| zone.dimensions().display_capacity())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ZoneDimensions;

    #[test]
    fn test_total_ignores_sections() {
        let zones = vec![
            Zone::new("A", ZoneDimensions::new(Some(4), Some(6), Some(3))),
            Zone::new("B", ZoneDimensions::of(2, 2)),
        ];
        assert_eq!(total_positions(&zones), 28);
        assert_eq!(display_capacity(&zones), 76);
    }

    #[test]
    fn test_empty_zones() {
        assert_eq!(total_positions(&[]), 0);
    }
}
