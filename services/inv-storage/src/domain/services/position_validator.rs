//! 库位校验

use domain_core::Position;

use crate::domain::entities::{StorageConfiguration, WineRecord};
use crate::domain::services::positions;
use crate::domain::value_objects::{StorageId, WineId};

/// 库位是否属于该存储的合法标签
///
/// 空标签视为合法（酒未指定具体库位）。按生成的标签集合做成员
/// 判断，对所有命名方案一致，不重新解析标签文本
pub fn is_valid(storage: &StorageConfiguration, position: &Position) -> bool {
    if position.is_empty() {
        return true;
    }
    positions::generate(storage)
        .iter()
        .any(|label| label == position)
}

/// 查找已占用该库位的酒记录
///
/// 更新酒记录时用 exclude 排除其自身，避免把自己判成冲突
pub fn find_conflict<'a>(
    storage_id: &StorageId,
    position: &Position,
    wines: &'a [WineRecord],
    exclude: Option<&WineId>,
) -> Option<&'a WineRecord> {
    if position.is_empty() {
        return None;
    }
    wines.iter().find(|wine| {
        wine.is_in(storage_id)
            && wine.position() == Some(position)
            && exclude.map_or(true, |id| wine.id() != id)
    })
}
