//! 特征数据模型定义
//! 仅存储特征数据，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

/// 检测信号来源（五个独立观测通道）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Html,
    Script,
    Js,
    Header,
    Dom,
}

impl Source {
    /// 固定的遍历顺序
    pub const ALL: [Source; 5] = [Source::Html, Source::Script, Source::Js, Source::Header, Source::Dom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Html => "html",
            Source::Script => "script",
            Source::Js => "js",
            Source::Header => "header",
            Source::Dom => "dom",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 按来源划分的原始匹配模式
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignaturePatterns {
    #[serde(default)]
    pub html: Vec<String>,
    #[serde(default)]
    pub scripts: Vec<String>,
    #[serde(default)]
    pub js: Vec<String>,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub dom: Vec<String>,
}

impl SignaturePatterns {
    /// 获取指定来源的模式列表
    pub fn for_source(&self, source: Source) -> &[String] {
        match source {
            Source::Html => &self.html,
            Source::Script => &self.scripts,
            Source::Js => &self.js,
            Source::Header => &self.headers,
            Source::Dom => &self.dom,
        }
    }

    /// 模式总数
    pub fn len(&self) -> usize {
        Source::ALL.iter().map(|s| self.for_source(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 技术特征定义（内置特征表 / 本地JSON特征文件 解析后的统一结构）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnologySignature {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// 标称置信度：HTML精确标记命中时直接采用该值
    #[serde(default, alias = "nominal_confidence")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub patterns: SignaturePatterns,
}

/// 内置特征表的静态记录（编译期常量，零运行时构造）
#[derive(Debug, Clone, Copy)]
pub struct SignatureRecord {
    pub name: &'static str,
    pub category: &'static str,
    pub icon: Option<&'static str>,
    pub website: Option<&'static str>,
    pub confidence: Option<f64>,
    pub html: &'static [&'static str],
    pub scripts: &'static [&'static str],
    pub js: &'static [&'static str],
    pub headers: &'static [&'static str],
    pub dom: &'static [&'static str],
}

impl From<&SignatureRecord> for TechnologySignature {
    fn from(record: &SignatureRecord) -> Self {
        let to_vec = |list: &[&str]| list.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        Self {
            name: record.name.to_string(),
            category: record.category.to_string(),
            icon: record.icon.map(str::to_string),
            website: record.website.map(str::to_string),
            confidence: record.confidence,
            patterns: SignaturePatterns {
                html: to_vec(record.html),
                scripts: to_vec(record.scripts),
                js: to_vec(record.js),
                headers: to_vec(record.headers),
                dom: to_vec(record.dom),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_serializes_lowercase() {
        let json = serde_json::to_string(&Source::Header).unwrap();
        assert_eq!(json, "\"header\"");
        let parsed: Source = serde_json::from_str("\"dom\"").unwrap();
        assert_eq!(parsed, Source::Dom);
    }

    #[test]
    fn test_signature_missing_sources_default_empty() {
        let sig: TechnologySignature = serde_json::from_str(
            r#"{"category": "CMS", "nominal_confidence": 90, "patterns": {"html": ["wp-content"]}}"#,
        )
        .unwrap();

        assert_eq!(sig.confidence, Some(90.0));
        assert_eq!(sig.patterns.html, vec!["wp-content".to_string()]);
        assert!(sig.patterns.for_source(Source::Dom).is_empty());
        assert_eq!(sig.patterns.len(), 1);
    }
}
