//! 版本提取工具模块
//! 从正则捕获结果中按版本模板提取版本号，并提供版本号规范化

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// 版本号分隔符：空白、逗号、分号
static VERSION_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s,;]+").unwrap());

/// 版本提取工具类
pub struct VersionExtractor;

impl VersionExtractor {
    /// 按模板提取版本号
    ///
    /// 模板支持 `\1` 与 `$1` 两种分组引用。以下情况返回 `None`：
    /// 模板为空、没有任何分组被替换、结果为空或残留占位符。
    pub fn extract(version_template: &Option<String>, captures: &Captures) -> Option<String> {
        let template = version_template.as_ref().filter(|t| !t.trim().is_empty())?;

        let mut version = template.clone();
        let mut replaced = false;

        for group_index in 1..captures.len() {
            let placeholder_backslash = format!("\\{}", group_index);
            let placeholder_dollar = format!("${}", group_index);

            let value = match captures.get(group_index) {
                Some(matched) if !matched.as_str().trim().is_empty() => {
                    replaced = true;
                    matched.as_str().trim()
                }
                _ => "",
            };
            version = version.replace(&placeholder_backslash, value);
            version = version.replace(&placeholder_dollar, value);
        }

        let version = version.trim();
        if !replaced || version.is_empty() || version.contains('\\') || version.contains('$') {
            return None;
        }
        Some(Self::normalize(version))
    }

    /// 无模板时的提取：优先第一个分组，否则取整体匹配
    pub fn extract_version(regex: &Regex, content: &str) -> Option<String> {
        let captures = regex.captures(content)?;
        captures
            .get(1)
            .or_else(|| captures.get(0))
            .map(|m| m.as_str().trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// 版本号规范化：取第一个以空白/逗号/分号分隔的片段
    pub fn normalize(version: &str) -> String {
        VERSION_SEPARATOR
            .split(version.trim())
            .find(|part| !part.is_empty())
            .unwrap_or_default()
            .to_string()
    }

    /// 版本择优：新版本更具体（更长）时替换
    pub fn is_better(current: Option<&str>, candidate: Option<&str>) -> bool {
        match (current, candidate) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(cur), Some(new)) => new.len() > cur.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_with_backslash_placeholder() {
        let regex = Regex::new(r#"jquery-([\d.]+)\.min\.js"#).unwrap();
        let captures = regex.captures("/static/jquery-3.7.1.min.js").unwrap();
        let version = VersionExtractor::extract(&Some("\\1".to_string()), &captures);
        assert_eq!(version, Some("3.7.1".to_string()));
    }

    #[test]
    fn test_extract_with_dollar_placeholder() {
        let regex = Regex::new(r#"react@([\d.]+)"#).unwrap();
        let captures = regex.captures("https://unpkg.com/react@18.2.0/umd/react.js").unwrap();
        let version = VersionExtractor::extract(&Some("$1".to_string()), &captures);
        assert_eq!(version, Some("18.2.0".to_string()));
    }

    #[test]
    fn test_extract_optional_group_absent() {
        let regex = Regex::new(r#"jquery(?:-([\d.]+))?(?:\.min)?\.js"#).unwrap();
        let captures = regex.captures("jquery.min.js").unwrap();
        assert_eq!(VersionExtractor::extract(&Some("\\1".to_string()), &captures), None);
    }

    #[test]
    fn test_extract_unknown_placeholder() {
        let regex = Regex::new(r#"php/([\d.]+)"#).unwrap();
        let captures = regex.captures("x-powered-by: php/8.2.1").unwrap();
        assert_eq!(VersionExtractor::extract(&Some("\\2".to_string()), &captures), None);
    }

    #[test]
    fn test_extract_version_fallbacks() {
        let with_group = Regex::new(r"ver=([\d.]+)").unwrap();
        assert_eq!(VersionExtractor::extract_version(&with_group, "style.css?ver=6.4.2"), Some("6.4.2".to_string()));

        let whole = Regex::new(r"\d+\.\d+").unwrap();
        assert_eq!(VersionExtractor::extract_version(&whole, "build 2.11 final"), Some("2.11".to_string()));
        assert_eq!(VersionExtractor::extract_version(&whole, "no digits"), None);
    }

    #[test]
    fn test_normalize_takes_first_token() {
        assert_eq!(VersionExtractor::normalize("  1.2.3, build 7"), "1.2.3");
        assert_eq!(VersionExtractor::normalize("4.0;beta"), "4.0");
        assert_eq!(VersionExtractor::normalize(""), "");
    }

    #[test]
    fn test_prefers_longer_version() {
        assert!(VersionExtractor::is_better(None, Some("3")));
        assert!(VersionExtractor::is_better(Some("3"), Some("3.7.1")));
        assert!(!VersionExtractor::is_better(Some("3.7.1"), Some("3")));
        assert!(!VersionExtractor::is_better(Some("3"), None));
    }
}
