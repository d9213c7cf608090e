//! 特征模块：负责特征的数据模型定义、内置特征表、特征库加载
pub mod model;
pub mod catalog;
pub mod detect_result;
pub mod loader;

// 导出核心接口
pub use self::model::{SignaturePatterns, SignatureRecord, Source, TechnologySignature};
pub use self::catalog::{AI_CATEGORIES, EMBEDDED_SIGNATURES};
pub use self::detect_result::{MergedDetection, RawDetection};
pub use self::loader::{FALLBACK_CATEGORY, SignatureDatabase, SignatureDatabaseBuilder};
