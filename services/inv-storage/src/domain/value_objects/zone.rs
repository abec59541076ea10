//! 分区值对象

use serde::{Deserialize, Serialize};

use super::ZoneDimensions;

/// 分区
///
/// 存储设备内的一个矩形子区域。分区一旦进入某个存储配置快照即不可
/// 变；编辑产生新快照，不在计算中途原地修改。temperature 仅作展示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawZone")]
pub struct Zone {
    name: String,
    dimensions: ZoneDimensions,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

/// 线上的原始分区形状：name 与 dimensions 均可缺失
#[derive(Debug, Deserialize)]
struct RawZone {
    name: Option<String>,
    dimensions: Option<ZoneDimensions>,
    temperature: Option<f64>,
}

impl From<RawZone> for Zone {
    fn from(raw: RawZone) -> Self {
        Self {
            name: raw.name.unwrap_or_default(),
            dimensions: raw.dimensions.unwrap_or_default(),
            temperature: raw.temperature,
        }
    }
}

impl Zone {
    pub fn new(name: impl Into<String>, dimensions: ZoneDimensions) -> Self {
        Self {
            name: name.into(),
            dimensions,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> &ZoneDimensions {
        &self.dimensions
    }

    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    /// 展示名称：name 缺失时按 1 起始序号补 "Zone {n}"
    pub fn display_name(&self, index: usize) -> String {
        if self.name.is_empty() {
            format!("Zone {}", index + 1)
        } else {
            self.name.clone()
        }
    }
}
