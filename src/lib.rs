//! stackscope - 页面技术栈检测引擎（特征库 + 多来源模式匹配 + 置信度叠加）

// 导出全局错误类型
pub use self::error::{TechResult, TechScopeError};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, GlobalConfig, SignatureOrigin};

// 导出特征模块核心接口
pub use self::rule::{
    MergedDetection, RawDetection, SignatureDatabase, SignatureDatabaseBuilder, SignaturePatterns,
    SignatureRecord, Source, TechnologySignature, EMBEDDED_SIGNATURES,
};

// 导出快照模型
pub use self::snapshot::{DomDescriptor, DomElement, PageSnapshot, ProbeValue};

// 导出编译模块核心接口
pub use self::compiler::{CompileStats, CompiledPattern, CompiledSignature, PatternOutcome, SignatureCompiler};

// 导出检测模块核心接口
pub use self::detector::{
    ConfidenceMerger, PatternMatcher, TechDetector, analyze, get_global_detector, init_global_detector,
    init_global_detector_with_config,
};

// 导出采集模块核心接口
pub use self::extractor::{GlobalProbe, HtmlExtractor, NoProbe, PageCollector, PageInput, StaticProbe, canonical_probe_name};

// 导出调度模块核心接口
pub use self::orchestrator::{BadgeState, DetectionStore, LastDetection, Message, Orchestrator, Response, TabInfo};

// 导出展示模块核心接口
pub use self::report::{CategoryGroup, ExportReport, Statistics, format_technology, group_by_category, render_text};

// 导出工具模块核心接口
pub use self::utils::{DetectionUpdater, HeaderConverter, VersionExtractor, parse_url};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod snapshot;
pub mod compiler;
pub mod detector;
pub mod extractor;
pub mod orchestrator;
pub mod report;
pub mod utils;
