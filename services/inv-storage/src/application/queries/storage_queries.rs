//! Storage queries

use common::Pagination;
use domain_core::Position;

use crate::domain::value_objects::{StorageId, WineId};

/// 获取存储配置查询
#[derive(Debug, Clone)]
pub struct GetStorageQuery {
    pub storage_id: StorageId,
}

/// 列表存储配置查询
#[derive(Debug, Clone)]
pub struct ListStoragesQuery {
    pub pagination: Pagination,
}

/// 空闲库位查询
#[derive(Debug, Clone)]
pub struct AvailablePositionsQuery {
    pub storage_id: StorageId,
}

/// 占用情况查询
#[derive(Debug, Clone)]
pub struct OccupancyQuery {
    pub storage_id: StorageId,
}

/// 库位校验查询
#[derive(Debug, Clone)]
pub struct CheckPositionQuery {
    pub storage_id: StorageId,
    pub position: Position,
    /// 更新酒记录时排除其自身
    pub exclude_wine: Option<WineId>,
}
