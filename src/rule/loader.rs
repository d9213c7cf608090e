//! 特征库加载管理器
//! 负责从内置特征表或本地JSON特征文件构建只读特征库

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;
use once_cell::sync::Lazy;
use tracing::{debug, info};

use super::catalog::EMBEDDED_SIGNATURES;
use super::model::{SignatureRecord, TechnologySignature};
use crate::compiler::{CompileStats, CompiledSignature, SignatureCompiler};
use crate::config::SignatureOrigin;
use crate::error::{TechResult, TechScopeError};

/// 未声明分类时的兜底分类
pub const FALLBACK_CATEGORY: &str = "Other";

/// 内置特征库（进程内编译一次）
static EMBEDDED_DATABASE: Lazy<Result<Arc<SignatureDatabase>, String>> = Lazy::new(|| {
    SignatureDatabase::from_records(EMBEDDED_SIGNATURES)
        .map(Arc::new)
        .map_err(|e| e.to_string())
});

/// 只读特征库：名称 -> 编译后特征，按名称有序迭代
#[derive(Debug, Default)]
pub struct SignatureDatabase {
    signatures: BTreeMap<String, CompiledSignature>,
    stats: CompileStats,
}

impl SignatureDatabase {
    pub fn builder() -> SignatureDatabaseBuilder {
        SignatureDatabaseBuilder::default()
    }

    /// 获取内置特征库（共享实例）
    pub fn embedded() -> TechResult<Arc<SignatureDatabase>> {
        EMBEDDED_DATABASE
            .as_ref()
            .map(Arc::clone)
            .map_err(|e| TechScopeError::DatabaseLoadError(e.clone()))
    }

    /// 按配置的来源加载特征库
    pub fn load(origin: &SignatureOrigin) -> TechResult<Arc<SignatureDatabase>> {
        match origin {
            SignatureOrigin::Embedded => Self::embedded(),
            SignatureOrigin::LocalFile(path) => Self::from_file(path).map(Arc::new),
        }
    }

    /// 从静态记录构建
    pub fn from_records(records: &[SignatureRecord]) -> TechResult<Self> {
        records
            .iter()
            .try_fold(Self::builder(), |builder, record| {
                builder.insert(TechnologySignature::from(record))
            })?
            .build()
    }

    /// 从JSON文本构建，格式：`{ "技术名": { category, confidence, patterns: {...} } }`
    pub fn from_json_str(json: &str) -> TechResult<Self> {
        let raw: BTreeMap<String, TechnologySignature> = serde_json::from_str(json)
            .map_err(|e| TechScopeError::DatabaseLoadError(format!("特征文件格式错误：{}", e)))?;

        raw.into_iter()
            .try_fold(Self::builder(), |builder, (key, mut signature)| {
                signature.name = key;
                builder.insert(signature)
            })?
            .build()
    }

    /// 从本地JSON特征文件构建
    pub fn from_file(path: &Path) -> TechResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TechScopeError::DatabaseLoadError(format!("读取特征文件失败 {}：{}", path.display(), e))
        })?;
        let db = Self::from_json_str(&content)?;
        info!("已从本地文件加载特征库：{}，技术数：{}", path.display(), db.len());
        Ok(db)
    }

    /// 按名称有序迭代
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompiledSignature)> {
        self.signatures.iter().map(|(name, sig)| (name.as_str(), sig))
    }

    pub fn get(&self, name: &str) -> Option<&CompiledSignature> {
        self.signatures.get(name)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// 全部分类（去重有序）
    pub fn categories(&self) -> BTreeSet<&str> {
        self.signatures.values().map(|sig| sig.category()).collect()
    }

    pub fn stats(&self) -> &CompileStats {
        &self.stats
    }
}

/// 特征库构建器，同名插入覆盖旧值
#[derive(Debug, Default)]
pub struct SignatureDatabaseBuilder {
    signatures: BTreeMap<String, TechnologySignature>,
}

impl SignatureDatabaseBuilder {
    /// 插入特征（校验名称，钳制标称置信度）
    pub fn insert(mut self, mut signature: TechnologySignature) -> TechResult<Self> {
        let name = signature.name.trim().to_string();
        if name.is_empty() {
            return Err(TechScopeError::DatabaseInvalid("存在名称为空的技术特征".to_string()));
        }
        signature.name = name.clone();

        if signature.category.trim().is_empty() {
            signature.category = FALLBACK_CATEGORY.to_string();
        }
        signature.confidence = signature
            .confidence
            .filter(|c| !c.is_nan())
            .map(|c| c.clamp(0.0, 100.0));

        if self.signatures.insert(name.clone(), signature).is_some() {
            debug!("技术特征重复，覆盖旧定义：{}", name);
        }
        Ok(self)
    }

    pub fn build(self) -> TechResult<SignatureDatabase> {
        let (signatures, stats) = SignatureCompiler::compile_all(self.signatures.into_values());
        debug!("特征库构建完成，技术数：{}，模式数：{}", stats.tech_count, stats.pattern_count());
        Ok(SignatureDatabase { signatures, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Source;
    use std::io::Write;

    #[test]
    fn test_embedded_database_loads() {
        let db = SignatureDatabase::embedded().unwrap();
        assert_eq!(db.len(), EMBEDDED_SIGNATURES.len());
        assert_eq!(db.stats().invalid_count, 0);

        let wordpress = db.get("WordPress").unwrap();
        assert_eq!(wordpress.category(), "CMS");
        assert_eq!(wordpress.nominal_confidence(), Some(95.0));
        assert!(!wordpress.patterns(Source::Html).is_empty());
    }

    #[test]
    fn test_embedded_database_is_shared() {
        let a = SignatureDatabase::embedded().unwrap();
        let b = SignatureDatabase::embedded().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_duplicate_insert_overwrites() {
        let first = TechnologySignature {
            name: "Alpha".to_string(),
            category: "One".to_string(),
            ..Default::default()
        };
        let second = TechnologySignature {
            name: "Alpha".to_string(),
            category: "Two".to_string(),
            ..Default::default()
        };

        let db = SignatureDatabase::builder()
            .insert(first)
            .and_then(|b| b.insert(second))
            .and_then(|b| b.build())
            .unwrap();

        assert_eq!(db.len(), 1);
        assert_eq!(db.get("Alpha").unwrap().category(), "Two");
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let result = SignatureDatabase::from_json_str(r#"{ "  ": { "category": "CMS" } }"#);
        assert!(matches!(result, Err(TechScopeError::DatabaseInvalid(_))));
    }

    #[test]
    fn test_empty_database_is_valid() {
        let db = SignatureDatabase::from_json_str("{}").unwrap();
        assert!(db.is_empty());
        assert_eq!(db.iter().count(), 0);
    }

    #[test]
    fn test_from_file_and_fallback_category() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "Beta": {{ "confidence": 140, "patterns": {{ "headers": ["x-beta"] }} }} }}"#
        )
        .unwrap();

        let db = SignatureDatabase::from_file(file.path()).unwrap();
        let beta = db.get("Beta").unwrap();
        assert_eq!(beta.category(), FALLBACK_CATEGORY);
        assert_eq!(beta.nominal_confidence(), Some(100.0));
        assert_eq!(beta.patterns(Source::Header).len(), 1);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let result = SignatureDatabase::from_file(Path::new("/nonexistent/signatures.json"));
        assert!(matches!(result, Err(TechScopeError::DatabaseLoadError(_))));
    }
}
