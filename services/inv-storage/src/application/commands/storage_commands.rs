//! Storage commands

use common::UserId;
use errors::{AppError, AppResult};

use crate::domain::value_objects::{StorageId, StorageLayout};

/// 创建存储配置命令
///
/// kind 和 naming_scheme 携带原始字符串：未知类型归入 Other，
/// 未知命名方案回落默认，都不是错误
#[derive(Debug, Clone)]
pub struct CreateStorageCommand {
    pub user_id: UserId,
    pub name: String,
    pub kind: String,
    pub naming_scheme: String,
    pub layout: StorageLayout,
}

impl CreateStorageCommand {
    pub fn validate(&self) -> AppResult<()> {
        // 名称是这一层唯一的硬校验；尺寸缺失走静默钳制
        if self.name.trim().is_empty() {
            return Err(AppError::validation("存储名称不能为空"));
        }
        Ok(())
    }
}

/// 更新存储配置命令
///
/// 更新整体替换分区数组，不做部分修补
#[derive(Debug, Clone)]
pub struct UpdateStorageCommand {
    pub storage_id: StorageId,
    pub user_id: UserId,
    pub name: String,
    pub kind: String,
    pub naming_scheme: String,
    pub layout: StorageLayout,
}

impl UpdateStorageCommand {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("存储名称不能为空"));
        }
        Ok(())
    }
}

/// 删除存储配置命令
#[derive(Debug, Clone)]
pub struct DeleteStorageCommand {
    pub storage_id: StorageId,
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        let cmd = CreateStorageCommand {
            user_id: UserId::new(),
            name: "   ".to_string(),
            kind: "Wine Rack".to_string(),
            naming_scheme: "Row-Column".to_string(),
            layout: StorageLayout::Rack {
                rows: Some(4),
                columns: Some(6),
            },
        };
        assert!(matches!(cmd.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_valid_command_passes() {
        let cmd = CreateStorageCommand {
            user_id: UserId::new(),
            name: "Cellar Rack".to_string(),
            kind: "Wine Rack".to_string(),
            naming_scheme: "Row-Column".to_string(),
            layout: StorageLayout::Rack {
                rows: None,
                columns: None,
            },
        };
        assert!(cmd.validate().is_ok());
    }
}
