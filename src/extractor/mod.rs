//! 提取模块：HTML解析、全局变量探测、页面快照采集
pub mod html_extractor;
pub mod probe;
pub mod collector;

pub use self::html_extractor::{ExtractLimits, ExtractResult, HtmlExtractor};
pub use self::probe::{DEFAULT_GLOBAL_PROBES, GlobalProbe, LEGACY_PROBE_ALIASES, NoProbe, StaticProbe, canonical_probe_name};
pub use self::collector::{PageCollector, PageInput};
