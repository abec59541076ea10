//! Business logic handler

use std::sync::Arc;

use common::PagedResult;
use domain_core::{AggregateRoot, Entity, Position};
use errors::{AppError, AppResult};
use tracing::info;

use crate::domain::entities::StorageConfiguration;
use crate::domain::enums::{NamingScheme, StorageKind};
use crate::domain::repositories::{StorageRepository, WineRepository};
use crate::domain::services::{occupancy, position_validator};
use crate::domain::value_objects::StorageId;
use crate::domain::views::{OccupancyReport, PositionStatus, ZoneSummary};

use super::commands::*;
use super::queries::*;

pub struct ServiceHandler {
    storage_repo: Arc<dyn StorageRepository>,
    wine_repo: Arc<dyn WineRepository>,
}

impl ServiceHandler {
    pub fn new(storage_repo: Arc<dyn StorageRepository>, wine_repo: Arc<dyn WineRepository>) -> Self {
        Self {
            storage_repo,
            wine_repo,
        }
    }

    // ========== 存储配置 CRUD ==========

    /// 创建存储配置
    pub async fn create_storage(&self, cmd: CreateStorageCommand) -> AppResult<StorageId> {
        info!("Creating storage: {}", cmd.name);

        // 1. 验证命令
        cmd.validate()?;

        // 2. 解析布局、构建聚合；库位总数由容量计算覆盖
        let zones = cmd.layout.resolve_zones();
        let mut storage = StorageConfiguration::new(
            cmd.name.clone(),
            StorageKind::from(cmd.kind.as_str()),
            NamingScheme::from(cmd.naming_scheme.as_str()),
            zones,
        );

        // 设置审计信息
        {
            let audit = storage.audit_info_mut();
            audit.created_by = Some(cmd.user_id);
            audit.created_at = chrono::Utc::now();
        }

        let storage_id = storage.id().clone();

        // 3. 交给持久化协作方
        self.storage_repo.save(&storage).await?;

        info!("Storage created successfully: {}", storage_id.0);
        Ok(storage_id)
    }

    /// 获取存储配置
    pub async fn get_storage(&self, query: GetStorageQuery) -> AppResult<StorageConfiguration> {
        info!("Getting storage: {}", query.storage_id.0);

        self.fetch_storage(&query.storage_id).await
    }

    /// 列表存储配置
    pub async fn list_storages(
        &self,
        query: ListStoragesQuery,
    ) -> AppResult<PagedResult<StorageConfiguration>> {
        self.storage_repo.find_all(&query.pagination).await
    }

    /// 更新存储配置（整体替换分区数组）
    pub async fn update_storage(&self, cmd: UpdateStorageCommand) -> AppResult<()> {
        info!("Updating storage: {}", cmd.storage_id.0);

        // 1. 验证命令
        cmd.validate()?;

        // 2. 获取现有存储
        let mut storage = self.fetch_storage(&cmd.storage_id).await?;

        // 3. 应用变更；replace_zones 重算库位总数
        storage.rename(cmd.name);
        storage.change_kind(StorageKind::from(cmd.kind.as_str()));
        storage.change_naming_scheme(NamingScheme::from(cmd.naming_scheme.as_str()));
        storage.replace_zones(cmd.layout.resolve_zones());
        storage.audit_info_mut().updated_by = Some(cmd.user_id);

        // 4. 交给持久化协作方
        self.storage_repo.update(&storage).await?;

        info!("Storage updated successfully: {}", cmd.storage_id.0);
        Ok(())
    }

    /// 删除存储配置
    ///
    /// 级联处理归属酒记录由持久化协作方在删除事务内完成
    pub async fn delete_storage(&self, cmd: DeleteStorageCommand) -> AppResult<()> {
        info!("Deleting storage: {}", cmd.storage_id.0);

        // 先确认存在，让调用方拿到 404 语义
        self.fetch_storage(&cmd.storage_id).await?;
        self.storage_repo.delete(&cmd.storage_id).await?;

        info!("Storage deleted successfully: {}", cmd.storage_id.0);
        Ok(())
    }

    // ========== 库位引擎 ==========

    /// 空闲库位
    ///
    /// 两次拉取互不依赖，并发执行；任一失败原样上抛，界面兜底是
    /// 调用方的决定
    pub async fn available_positions(
        &self,
        query: AvailablePositionsQuery,
    ) -> AppResult<Vec<Position>> {
        let (storage, wines) = tokio::try_join!(
            self.fetch_storage(&query.storage_id),
            self.wine_repo.find_by_storage(&query.storage_id),
        )?;

        Ok(occupancy::available(&storage, &wines))
    }

    /// 占用情况报告
    pub async fn occupancy_report(&self, query: OccupancyQuery) -> AppResult<OccupancyReport> {
        let (storage, wines) = tokio::try_join!(
            self.fetch_storage(&query.storage_id),
            self.wine_repo.find_by_storage(&query.storage_id),
        )?;

        let all = storage.generate_positions();
        let taken = occupancy::occupied(storage.id(), &wines);
        let available: Vec<Position> = all
            .iter()
            .filter(|position| !taken.contains(*position))
            .cloned()
            .collect();

        Ok(OccupancyReport {
            total: all.len(),
            occupied: all.len() - available.len(),
            available,
        })
    }

    /// 校验候选库位：不合法 / 已占用 / 空闲
    pub async fn check_position(&self, query: CheckPositionQuery) -> AppResult<PositionStatus> {
        let (storage, wines) = tokio::try_join!(
            self.fetch_storage(&query.storage_id),
            self.wine_repo.find_by_storage(&query.storage_id),
        )?;

        if !position_validator::is_valid(&storage, &query.position) {
            return Ok(PositionStatus::Invalid);
        }
        if position_validator::find_conflict(
            storage.id(),
            &query.position,
            &wines,
            query.exclude_wine.as_ref(),
        )
        .is_some()
        {
            return Ok(PositionStatus::Occupied);
        }
        Ok(PositionStatus::Free)
    }

    /// 分区概要
    pub async fn zone_summaries(&self, query: GetStorageQuery) -> AppResult<Vec<ZoneSummary>> {
        let storage = self.fetch_storage(&query.storage_id).await?;
        Ok(storage.zone_summaries())
    }

    async fn fetch_storage(&self, id: &StorageId) -> AppResult<StorageConfiguration> {
        self.storage_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("存储配置不存在"))
    }
}
