//! 存储配置聚合根

use common::AuditInfo;
use domain_core::{AggregateRoot, Entity, Position};
use serde::{Deserialize, Serialize};

use crate::domain::enums::{NamingScheme, SequentialMode, StorageKind};
use crate::domain::services::{capacity, positions};
use crate::domain::value_objects::{StorageId, Zone};
use crate::domain::views::ZoneSummary;

/// 存储配置聚合根
///
/// 一个物理存储设备（酒架、酒柜或自定义设备）的拓扑快照。分区数组
/// 的顺序有意义：它决定库位枚举顺序。total_positions 始终由容量计算
/// 得出并在构建/更新时覆盖，不信任外部输入；唯一的例外是从持久化
/// 协作方加载的历史记录（分区模型之前创建，zones 为空），其存量
/// total_positions 用于兜底标签序列
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfiguration {
    /// 存储 ID
    id: StorageId,
    /// 显示名称
    name: String,
    /// 存储类型
    #[serde(rename = "type")]
    kind: StorageKind,
    /// 分区数组（顺序有意义）
    zones: Vec<Zone>,
    /// 库位总数（派生值）
    total_positions: u32,
    /// 库位命名方案
    position_naming_scheme: NamingScheme,
    /// 审计信息
    #[serde(default)]
    audit_info: AuditInfo,
}

impl StorageConfiguration {
    /// 创建新存储配置，total_positions 由分区容量求和得出
    pub fn new(
        name: impl Into<String>,
        kind: StorageKind,
        naming_scheme: NamingScheme,
        zones: Vec<Zone>,
    ) -> Self {
        let total_positions = capacity::total_positions(&zones);
        Self {
            id: StorageId::new(),
            name: name.into(),
            kind,
            zones,
            total_positions,
            position_naming_scheme: naming_scheme,
            audit_info: AuditInfo::default(),
        }
    }

    /// 从各部分构建（用于从持久化协作方加载）
    ///
    /// 存量 total_positions 原样保留：无分区的历史存储依赖它生成
    /// 兜底标签序列
    pub fn from_parts(
        id: StorageId,
        name: String,
        kind: StorageKind,
        zones: Vec<Zone>,
        total_positions: u32,
        naming_scheme: NamingScheme,
        audit_info: AuditInfo,
    ) -> Self {
        Self {
            id,
            name,
            kind,
            zones,
            total_positions,
            position_naming_scheme: naming_scheme,
            audit_info,
        }
    }

    // ========== Getters ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn total_positions(&self) -> u32 {
        self.total_positions
    }

    pub fn naming_scheme(&self) -> NamingScheme {
        self.position_naming_scheme
    }

    // ========== 更新 ==========

    /// 更新显示名称
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.audit_info.update(None);
    }

    /// 更新存储类型
    pub fn change_kind(&mut self, kind: StorageKind) {
        self.kind = kind;
        self.audit_info.update(None);
    }

    /// 更新命名方案
    pub fn change_naming_scheme(&mut self, scheme: NamingScheme) {
        self.position_naming_scheme = scheme;
        self.audit_info.update(None);
    }

    /// 整体替换分区数组并重算库位总数
    ///
    /// 不支持部分修补：编辑永远以完整的新分区数组落盘
    pub fn replace_zones(&mut self, zones: Vec<Zone>) {
        self.zones = zones;
        self.total_positions = capacity::total_positions(&self.zones);
        self.audit_info.update(None);
    }

    // ========== 库位派生 ==========

    /// 枚举全部库位标签（声明顺序，分区内行优先）
    pub fn generate_positions(&self) -> Vec<Position> {
        positions::generate(self)
    }

    /// 指定顺序编号模式的库位枚举
    pub fn generate_positions_with(&self, mode: SequentialMode) -> Vec<Position> {
        positions::generate_with(self, mode)
    }

    /// 分区概要（面向展示层的结构化数据）
    pub fn zone_summaries(&self) -> Vec<ZoneSummary> {
        self.zones
            .iter()
            .enumerate()
            .map(|(index, zone)| ZoneSummary::from_zone(index, zone))
            .collect()
    }
}

// ========== Entity/AggregateRoot trait 实现 ==========

impl Entity for StorageConfiguration {
    type Id = StorageId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for StorageConfiguration {
    fn audit_info(&self) -> &AuditInfo {
        &self.audit_info
    }

    fn audit_info_mut(&mut self) -> &mut AuditInfo {
        &mut self.audit_info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ZoneDimensions;

    fn rack(rows: u32, columns: u32) -> Zone {
        Zone::new("Default Zone", ZoneDimensions::of(rows, columns))
    }

    #[test]
    fn test_total_positions_single_zone() {
        let storage = StorageConfiguration::new(
            "Cellar Rack",
            StorageKind::WineRack,
            NamingScheme::SectionRowColumn,
            vec![rack(4, 6)],
        );
        assert_eq!(storage.total_positions(), 24);
    }

    #[test]
    fn test_total_positions_sums_zones_without_sections() {
        let zones = vec![
            Zone::new("Red", ZoneDimensions::new(Some(2), Some(3), Some(4))),
            Zone::new("White", ZoneDimensions::of(5, 5)),
        ];
        let storage = StorageConfiguration::new(
            "Fridge",
            StorageKind::WineFridge,
            NamingScheme::SectionRowColumn,
            zones,
        );
        // sections 不参与求和：2*3 + 5*5
        assert_eq!(storage.total_positions(), 31);
    }

    #[test]
    fn test_replace_zones_recalculates_total() {
        let mut storage = StorageConfiguration::new(
            "Rack",
            StorageKind::WineRack,
            NamingScheme::RowColumn,
            vec![rack(4, 6)],
        );
        storage.replace_zones(vec![rack(1, 2), rack(3, 3)]);
        assert_eq!(storage.total_positions(), 11);
        assert_eq!(storage.zones().len(), 2);
    }

    #[test]
    fn test_from_parts_keeps_stored_total() {
        // 历史存储：无分区，total_positions 存量值兜底
        let storage = StorageConfiguration::from_parts(
            StorageId::new(),
            "Legacy".to_string(),
            StorageKind::Other,
            Vec::new(),
            9,
            NamingScheme::SectionRowColumn,
            AuditInfo::default(),
        );
        assert_eq!(storage.total_positions(), 9);
    }

    #[test]
    fn test_wire_shape() {
        let storage = StorageConfiguration::new(
            "Kitchen Fridge",
            StorageKind::WineFridge,
            NamingScheme::RowColumn,
            vec![rack(2, 3)],
        );
        let json = serde_json::to_value(&storage).unwrap();
        assert_eq!(json["type"], "Wine Fridge");
        assert_eq!(json["position_naming_scheme"], "Row-Column");
        assert_eq!(json["total_positions"], 6);

        let back: StorageConfiguration = serde_json::from_value(json).unwrap();
        assert_eq!(back.name(), "Kitchen Fridge");
        assert_eq!(back.total_positions(), 6);
        assert_eq!(back.naming_scheme(), NamingScheme::RowColumn);
    }

    #[test]
    fn test_zone_summaries() {
        let zones = vec![
            Zone::new("Red", ZoneDimensions::new(Some(2), Some(3), Some(2)))
                .with_temperature(58.0),
            Zone::new("", ZoneDimensions::of(1, 4)),
        ];
        let storage = StorageConfiguration::new(
            "Mixed",
            StorageKind::Other,
            NamingScheme::SectionRowColumn,
            zones,
        );
        let summaries = storage.zone_summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "Red");
        assert_eq!(summaries[0].capacity, 6);
        assert_eq!(summaries[0].display_capacity, 12);
        assert_eq!(summaries[0].temperature, Some(58.0));
        assert_eq!(summaries[1].name, "Zone 2");
        assert_eq!(summaries[1].capacity, 4);
    }
}
