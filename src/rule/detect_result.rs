//! 检测结果模型
use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};

use super::model::Source;

/// 单一来源的原始检测信号（仅存活于单次分析过程）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    pub name: String,
    pub category: String,
    pub confidence: f64,
    pub source: Source,
    #[serde(default)]
    pub version: Option<String>,
}

/// 合并后的最终检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedDetection {
    pub name: String,
    pub category: String,
    pub confidence: f64,
    pub sources: BTreeSet<Source>,
    #[serde(default)]
    pub version: Option<String>,
}

impl MergedDetection {
    /// 展示用的取整置信度
    pub fn rounded_confidence(&self) -> u32 {
        self.confidence.round().clamp(0.0, 100.0) as u32
    }
}
