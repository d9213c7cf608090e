//! 检测模块：技术检测核心逻辑
pub mod global;
pub mod analyzer;
pub mod matcher;
pub mod merger;
pub mod detector;

// 导出核心接口
pub use self::global::{analyze, get_global_detector, init_global_detector, init_global_detector_with_config};
pub use self::matcher::{MatchScore, PatternMatcher};
pub use self::merger::{ConfidenceMerger, clamp_confidence};
pub use self::detector::TechDetector;
