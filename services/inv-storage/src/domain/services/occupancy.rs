//! 占用对账

use std::collections::HashSet;

use domain_core::{Entity, Position};

use crate::domain::entities::{StorageConfiguration, WineRecord};
use crate::domain::services::positions;
use crate::domain::value_objects::StorageId;

/// 指定存储内已被占用的库位集合
///
/// 占用判定是成员测试而不是计数：重复引用同一标签的记录折叠为
/// 一个集合成员
pub fn occupied(storage_id: &StorageId, wines: &[WineRecord]) -> HashSet<Position> {
    wines
        .iter()
        .filter(|wine| wine.is_in(storage_id))
        .filter_map(|wine| wine.position().cloned())
        .collect()
}

/// 空闲库位：全部标签剔除占用集合，保持生成顺序
pub fn available(storage: &StorageConfiguration, wines: &[WineRecord]) -> Vec<Position> {
    let taken = occupied(storage.id(), wines);
    positions::generate(storage)
        .into_iter()
        .filter(|position| !taken.contains(position))
        .collect()
}
