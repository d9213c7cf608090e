//! URL展示工具
use url::Url;

use super::preview::truncate_chars;
use crate::error::TechResult;

/// 路径展示长度
const PATH_DISPLAY_LEN: usize = 30;
/// 解析失败时原文展示长度
const RAW_DISPLAY_LEN: usize = 50;

/// 解析页面URL
pub fn parse_url(url: &str) -> TechResult<Url> {
    Ok(Url::parse(url.trim())?)
}

/// 提取主机名
pub fn current_domain(url: &str) -> Option<String> {
    parse_url(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}

/// 展示用URL：主机名 + 路径前30字符；解析失败时取原文前50字符
pub fn format_url(url: &str) -> String {
    match parse_url(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => format!("{}{}", host, truncate_chars(parsed.path(), PATH_DISPLAY_LEN)),
            None => truncate_chars(url, RAW_DISPLAY_LEN).to_string(),
        },
        Err(_) => truncate_chars(url, RAW_DISPLAY_LEN).to_string(),
    }
}

pub fn is_valid_url(url: &str) -> bool {
    parse_url(url).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TechScopeError;

    #[test]
    fn test_parse_url_reports_error() {
        assert_eq!(parse_url(" https://example.com/a ").unwrap().path(), "/a");
        assert!(matches!(parse_url("example.com/path"), Err(TechScopeError::UrlError(_))));
    }

    #[test]
    fn test_current_domain() {
        assert_eq!(current_domain("https://blog.example.com/a/b?x=1"), Some("blog.example.com".to_string()));
        assert_eq!(current_domain("not a url"), None);
    }

    #[test]
    fn test_format_url_truncates_path() {
        let url = "https://example.com/this/is/a/very/long/path/that/keeps/going";
        assert_eq!(format_url(url), "example.com/this/is/a/very/long/path/that");
    }

    #[test]
    fn test_format_url_fallback() {
        let raw = "x".repeat(80);
        assert_eq!(format_url(&raw).len(), 50);
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://example.com"));
        assert!(!is_valid_url("example.com/path"));
    }
}
