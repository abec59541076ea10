//! 占用情况视图

use domain_core::Position;
use serde::Serialize;

/// 占用情况报告
///
/// occupied 只统计落在当前标签集合内的占用；指向已不存在标签的
/// 酒记录不计入
#[derive(Debug, Clone, Serialize)]
pub struct OccupancyReport {
    /// 库位总数
    pub total: usize,
    /// 已占用数
    pub occupied: usize,
    /// 空闲标签（保持生成顺序）
    pub available: Vec<Position>,
}

impl OccupancyReport {
    pub fn available_count(&self) -> usize {
        self.available.len()
    }
}

/// 候选库位的校验结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PositionStatus {
    /// 空闲，可以分配
    Free,
    /// 已被其他酒占用
    Occupied,
    /// 不是该存储的合法标签
    Invalid,
}
