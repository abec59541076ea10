//! 酒记录仓储接口

use async_trait::async_trait;
use errors::AppResult;

use crate::domain::entities::WineRecord;
use crate::domain::value_objects::StorageId;

/// 酒记录仓储接口
///
/// 酒品集合由外部拥有，这里只暴露对账需要的读取能力
#[async_trait]
pub trait WineRepository: Send + Sync {
    /// 指定存储下的酒记录
    async fn find_by_storage(&self, storage_id: &StorageId) -> AppResult<Vec<WineRecord>>;
}
