//! 存储配置仓储接口
//!
//! 持久化协作方的端口。实现方负责网络与序列化；失败以 AppError
//! 原样上抛，不得吞掉或降级为空结果

use async_trait::async_trait;
use common::{PagedResult, Pagination};
use errors::AppResult;

use crate::domain::entities::StorageConfiguration;
use crate::domain::value_objects::StorageId;

/// 存储配置仓储接口
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// 根据 ID 查找存储配置
    async fn find_by_id(&self, id: &StorageId) -> AppResult<Option<StorageConfiguration>>;

    /// 分页列出全部存储配置
    async fn find_all(
        &self,
        pagination: &Pagination,
    ) -> AppResult<PagedResult<StorageConfiguration>>;

    /// 保存（新建）
    async fn save(&self, storage: &StorageConfiguration) -> AppResult<()>;

    /// 更新
    async fn update(&self, storage: &StorageConfiguration) -> AppResult<()>;

    /// 删除
    ///
    /// 级联解除酒记录归属是持久化协作方的事务性契约，引擎不负责
    async fn delete(&self, id: &StorageId) -> AppResult<()>;
}
