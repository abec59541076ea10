//! 酒记录读模型

use domain_core::Position;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{StorageId, WineId};

/// 酒记录
///
/// 由外部酒品集合拥有；引擎只读取 storage_id 与 position 两个字段。
/// position 是否落在所属存储的合法标签集合内由写入方保证，引擎在
/// 对账时直接信任它
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WineRecord {
    id: WineId,
    #[serde(default)]
    storage_id: Option<StorageId>,
    #[serde(default)]
    position: Option<Position>,
}

impl WineRecord {
    pub fn new(id: WineId, storage_id: Option<StorageId>, position: Option<Position>) -> Self {
        Self {
            id,
            storage_id,
            position,
        }
    }

    /// 已归位的酒记录
    pub fn assigned(storage_id: StorageId, position: impl Into<Position>) -> Self {
        Self {
            id: WineId::new(),
            storage_id: Some(storage_id),
            position: Some(position.into()),
        }
    }

    pub fn id(&self) -> &WineId {
        &self.id
    }

    pub fn storage_id(&self) -> Option<&StorageId> {
        self.storage_id.as_ref()
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    /// 是否归属于指定存储
    pub fn is_in(&self, storage_id: &StorageId) -> bool {
        self.storage_id.as_ref() == Some(storage_id)
    }
}
