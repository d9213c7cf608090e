//! 全局检测器单例管理
use once_cell::sync::{Lazy, OnceCell};
use std::sync::Arc;
use tracing::debug;

use super::detector::TechDetector;
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::{TechResult, TechScopeError};
use crate::rule::MergedDetection;
use crate::snapshot::PageSnapshot;

/// 全局检测器实例
static GLOBAL_DETECTOR: Lazy<Arc<OnceCell<TechDetector>>> = Lazy::new(|| Arc::new(OnceCell::new()));

/// 初始化全局检测器（默认配置）
pub fn init_global_detector() -> TechResult<()> {
    init_global_detector_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局检测器；已初始化时保持原实例
pub fn init_global_detector_with_config(config: GlobalConfig) -> TechResult<()> {
    if GLOBAL_DETECTOR.get().is_some() {
        debug!("全局检测器已初始化，忽略重复初始化");
        return Ok(());
    }

    let detector = TechDetector::new(config)
        .map_err(|e| TechScopeError::DetectorInitError(e.to_string()))?;
    // 并发初始化时以先写入者为准
    let _ = GLOBAL_DETECTOR.set(detector);
    Ok(())
}

/// 获取全局检测器
pub fn get_global_detector() -> TechResult<&'static TechDetector> {
    GLOBAL_DETECTOR.get().ok_or(TechScopeError::DetectorNotInitialized)
}

/// 使用全局检测器分析快照（未初始化时按默认配置初始化）
pub fn analyze(snapshot: &PageSnapshot) -> TechResult<Vec<MergedDetection>> {
    if GLOBAL_DETECTOR.get().is_none() {
        init_global_detector()?;
    }
    Ok(get_global_detector()?.analyze(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_analyze_initializes_lazily() {
        let snapshot = PageSnapshot {
            html: "<link href=\"/wp-content/style.css\">".to_string(),
            ..Default::default()
        };
        let result = analyze(&snapshot).unwrap();
        assert!(result.iter().any(|d| d.name == "WordPress"));
        assert!(get_global_detector().is_ok());
        assert!(init_global_detector().is_ok());
    }
}
