//! 工具模块：版本提取、Header转换、结果聚合、文本截断、URL展示
pub mod version_extractor;
pub mod header_converter;
pub mod detection_updater;
pub mod preview;
pub mod url_helper;

pub use self::version_extractor::VersionExtractor;
pub use self::header_converter::HeaderConverter;
pub use self::detection_updater::{DetectionGroup, DetectionUpdater};
pub use self::preview::{preview_compact, truncate_bytes, truncate_chars};
pub use self::url_helper::{current_domain, format_url, is_valid_url, parse_url};
