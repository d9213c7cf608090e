//! 模式匹配器：单一来源内容的命中率计算与精确标记检查
use crate::compiler::{CompiledPattern, PatternOutcome, SignatureCompiler};
use super::merger::clamp_confidence;

/// 单来源匹配得分
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchScore {
    pub confidence: f64,
    pub matched: usize,
    pub total: usize,
    pub invalid: usize,
    pub version: Option<String>,
}

/// 模式匹配器
pub struct PatternMatcher;

impl PatternMatcher {
    /// 命中率打分：`matched / total × 100`，空列表得 0；无效模式只计入分母
    pub fn score(content: &str, patterns: &[CompiledPattern]) -> MatchScore {
        let mut score = MatchScore {
            total: patterns.len(),
            ..Default::default()
        };
        if patterns.is_empty() {
            return score;
        }

        for pattern in patterns {
            match pattern.evaluate(content) {
                PatternOutcome::Match { version } => {
                    score.matched += 1;
                    if score.version.is_none() {
                        score.version = version;
                    }
                }
                PatternOutcome::NoMatch => {}
                PatternOutcome::Invalid => score.invalid += 1,
            }
        }

        score.confidence = clamp_confidence(score.matched as f64 / score.total as f64 * 100.0);
        score
    }

    /// 原始模式字符串的便捷入口
    pub fn match_content<S: AsRef<str>>(content: &str, patterns: &[S]) -> f64 {
        let compiled: Vec<CompiledPattern> = patterns
            .iter()
            .map(|p| SignatureCompiler::compile_pattern(p.as_ref()))
            .collect();
        Self::score(content, &compiled).confidence
    }

    /// 精确标记：任一模式的字面量区分大小写地出现在原始内容中
    pub fn exact_marker(raw_content: &str, patterns: &[CompiledPattern]) -> bool {
        patterns.iter().any(|p| p.literal_in(raw_content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pattern_list_scores_zero() {
        let empty: [&str; 0] = [];
        assert_eq!(PatternMatcher::match_content("anything", &empty), 0.0);
    }

    #[test]
    fn test_all_match_scores_hundred() {
        assert_eq!(PatternMatcher::match_content("wp-content wp-includes", &["wp-content", "WP-INCLUDES"]), 100.0);
    }

    #[test]
    fn test_ratio_and_range() {
        let confidence = PatternMatcher::match_content("react-root", &["react-root", "data-reactid", "data-reactroot"]);
        assert!((confidence - 100.0 / 3.0).abs() < 1e-9);
        assert!((0.0..=100.0).contains(&confidence));
    }

    #[test]
    fn test_invalid_pattern_counts_in_denominator() {
        let patterns = ["alpha", "(beta"];
        let compiled: Vec<_> = patterns.iter().map(|p| SignatureCompiler::compile_pattern(p)).collect();
        let score = PatternMatcher::score("alpha beta", &compiled);

        assert_eq!(score.confidence, 50.0);
        assert_eq!(score.matched, 1);
        assert_eq!(score.invalid, 1);
        assert_eq!(score.total, 2);
    }

    #[test]
    fn test_score_carries_first_version() {
        let compiled = vec![
            SignatureCompiler::compile_pattern("code\\.jquery\\.com"),
            SignatureCompiler::compile_pattern("jquery-(\\d+(?:\\.\\d+)*)(?:\\.min)?\\.js;version:\\1"),
        ];
        let score = PatternMatcher::score("https://code.jquery.com/jquery-3.7.1.min.js", &compiled);
        assert_eq!(score.confidence, 100.0);
        assert_eq!(score.version.as_deref(), Some("3.7.1"));
    }

    #[test]
    fn test_exact_marker_is_case_sensitive() {
        let compiled = vec![SignatureCompiler::compile_pattern("Shopify\\.theme")];
        assert!(PatternMatcher::exact_marker("window.Shopify.theme = {}", &compiled));
        assert!(!PatternMatcher::exact_marker("window.shopify.THEME = {}", &compiled));
    }

    #[test]
    fn test_exact_marker_skips_invalid_patterns() {
        let compiled = vec![SignatureCompiler::compile_pattern("(beta")];
        assert!(!compiled[0].is_valid());
        assert!(!PatternMatcher::exact_marker("call(beta)", &compiled));
    }
}
