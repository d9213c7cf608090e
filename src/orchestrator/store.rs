//! 最近一次检测结果的本地持久化（MessagePack）
//! 只保存单条记录，每次写入整体覆盖

use std::path::{Path, PathBuf};
use rmp_serde::{from_slice, to_vec_named};
use tracing::debug;

use super::orchestrator::LastDetection;
use crate::error::{TechResult, TechScopeError};

/// 检测结果存储
#[derive(Debug, Clone)]
pub struct DetectionStore {
    path: PathBuf,
}

impl DetectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 加载；文件不存在时返回 None
    pub async fn load(&self) -> TechResult<Option<LastDetection>> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let detection: LastDetection = from_slice(&data)
            .map_err(|e| TechScopeError::MsgPackError(format!("反序列化失败：{}", e)))?;
        debug!(
            "检测记录反序列化成功，技术数：{}，URL：{}",
            detection.technologies.len(),
            detection.url
        );
        Ok(Some(detection))
    }

    /// 保存（覆盖）
    pub async fn save(&self, detection: &LastDetection) -> TechResult<()> {
        let data = to_vec_named(detection)
            .map_err(|e| TechScopeError::MsgPackError(format!("序列化失败：{}", e)))?;
        debug!("检测记录序列化成功，数据大小：{} 字节", data.len());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }

    /// 清除
    pub async fn clear(&self) -> TechResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
