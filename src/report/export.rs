//! 检测报告导出（JSON）
use std::path::{Path, PathBuf};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::TechResult;
use crate::rule::MergedDetection;

/// 导出报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportReport {
    pub url: String,
    /// RFC 3339
    pub timestamp: String,
    pub technologies: Vec<MergedDetection>,
}

impl ExportReport {
    pub fn new(url: impl Into<String>, technologies: Vec<MergedDetection>) -> Self {
        Self::at(url, Utc::now(), technologies)
    }

    pub fn at(url: impl Into<String>, timestamp: DateTime<Utc>, technologies: Vec<MergedDetection>) -> Self {
        Self {
            url: url.into(),
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            technologies,
        }
    }

    pub fn to_json_pretty(&self) -> TechResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 默认文件名：tech-report-<毫秒时间戳>.json
    pub fn default_file_name(now: DateTime<Utc>) -> String {
        format!("tech-report-{}.json", now.timestamp_millis())
    }

    /// 写入文件；目标为目录时使用默认文件名
    pub async fn save(&self, target: &Path) -> TechResult<PathBuf> {
        let path = if tokio::fs::metadata(target).await.map(|m| m.is_dir()).unwrap_or(false) {
            target.join(Self::default_file_name(Utc::now()))
        } else {
            target.to_path_buf()
        };
        tokio::fs::write(&path, self.to_json_pretty()?).await?;
        info!("检测报告已导出：{}", path.display());
        Ok(path)
    }
}
