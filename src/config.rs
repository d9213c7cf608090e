//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 默认上报阈值：合并置信度严格低于该值的技术不输出
pub const DEFAULT_REPORT_THRESHOLD: f64 = 50.0;
/// 采集端HTML字节预算
pub const DEFAULT_HTML_BYTE_BUDGET: usize = 100_000;
/// 内联脚本截断长度（字符）
pub const DEFAULT_INLINE_SCRIPT_LIMIT: usize = 500;
/// DOM描述符数量上限
pub const DEFAULT_DOM_DESCRIPTOR_LIMIT: usize = 500;
/// 日志中脚本预览长度
pub const DEFAULT_SCRIPT_PREVIEW_LEN: usize = 50;

/// 特征库来源
#[derive(Debug, Clone, PartialEq)]
pub enum SignatureOrigin {
    Embedded,           // 内置特征表（编译期固化）
    LocalFile(PathBuf), // 本地JSON特征文件（运行时）
}

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 特征库来源
    pub signature_origin: SignatureOrigin,
    // 上报阈值
    pub report_threshold: f64,
    // 采集端HTML截断预算（字节）
    pub html_byte_budget: usize,
    // 内联脚本截断长度
    pub inline_script_limit: usize,
    // DOM描述符上限
    pub dom_descriptor_limit: usize,
    // 脚本日志预览长度
    pub script_preview_len: usize,
    // 最近一次检测结果的持久化路径（None则仅驻留内存）
    pub store_path: Option<PathBuf>,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            signature_origin: SignatureOrigin::Embedded,
            report_threshold: DEFAULT_REPORT_THRESHOLD,
            html_byte_budget: DEFAULT_HTML_BYTE_BUDGET,
            inline_script_limit: DEFAULT_INLINE_SCRIPT_LIMIT,
            dom_descriptor_limit: DEFAULT_DOM_DESCRIPTOR_LIMIT,
            script_preview_len: DEFAULT_SCRIPT_PREVIEW_LEN,
            store_path: None,
            verbose: false,
        }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn signature_origin(mut self, origin: SignatureOrigin) -> Self {
        self.config.signature_origin = origin;
        self
    }

    pub fn signature_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.signature_origin = SignatureOrigin::LocalFile(path.into());
        self
    }

    /// 阈值自动钳制到 [0,100]
    pub fn report_threshold(mut self, threshold: f64) -> Self {
        self.config.report_threshold = if threshold.is_nan() {
            DEFAULT_REPORT_THRESHOLD
        } else {
            threshold.clamp(0.0, 100.0)
        };
        self
    }

    pub fn html_byte_budget(mut self, budget: usize) -> Self {
        self.config.html_byte_budget = budget;
        self
    }

    pub fn inline_script_limit(mut self, limit: usize) -> Self {
        self.config.inline_script_limit = limit;
        self
    }

    pub fn dom_descriptor_limit(mut self, limit: usize) -> Self {
        self.config.dom_descriptor_limit = limit;
        self
    }

    pub fn script_preview_len(mut self, len: usize) -> Self {
        self.config.script_preview_len = len;
        self
    }

    pub fn store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.store_path = Some(path.into());
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
