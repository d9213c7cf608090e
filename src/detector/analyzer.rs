//! 检测分析器：按来源对快照内容逐技术打分，输出原始信号
use tracing::debug;

use super::matcher::{MatchScore, PatternMatcher};
use crate::compiler::CompiledSignature;
use crate::rule::{RawDetection, SignatureDatabase, Source};
use crate::utils::preview_compact;

/// 日志中内容预览长度
const LOG_PREVIEW_LEN: usize = 50;

/// 对单段内容扫描全部技术
fn scan(
    db: &SignatureDatabase,
    source: Source,
    content: &str,
    detected: &mut Vec<RawDetection>,
    score_fn: impl Fn(&CompiledSignature, &str) -> Option<MatchScore>,
) {
    if content.is_empty() {
        return;
    }

    for (_, signature) in db.iter() {
        if signature.patterns(source).is_empty() {
            continue;
        }
        let Some(score) = score_fn(signature, content) else {
            continue;
        };
        if score.confidence <= 0.0 {
            continue;
        }

        debug!(
            "{}匹配成功：技术={}，置信度={:.1}，版本={:?}，内容={}",
            source,
            signature.name(),
            score.confidence,
            score.version,
            preview_compact(content, LOG_PREVIEW_LEN)
        );
        detected.push(RawDetection {
            name: signature.name().to_string(),
            category: signature.category().to_string(),
            confidence: score.confidence,
            source,
            version: score.version,
        });
    }
}

/// 按命中率打分
fn ratio_score(source: Source) -> impl Fn(&CompiledSignature, &str) -> Option<MatchScore> {
    move |signature: &CompiledSignature, content: &str| Some(PatternMatcher::score(content, signature.patterns(source)))
}

/// HTML分析器
pub struct HtmlAnalyzer;

impl HtmlAnalyzer {
    /// 命中率打分 + 精确标记：声明了标称置信度且字面量原样出现时，直接采用标称值
    pub fn analyze(db: &SignatureDatabase, html: &str, detected: &mut Vec<RawDetection>) {
        scan(db, Source::Html, html, detected, |signature, content| {
            let patterns = signature.patterns(Source::Html);
            let mut score = PatternMatcher::score(content, patterns);

            if let Some(nominal) = signature.nominal_confidence() {
                if PatternMatcher::exact_marker(content, patterns) {
                    debug!("HTML精确标记命中：技术={}，采用标称置信度{}", signature.name(), nominal);
                    score.confidence = nominal;
                }
            }
            Some(score)
        });
    }
}

/// Script分析器：每个脚本条目独立打分
pub struct ScriptAnalyzer;

impl ScriptAnalyzer {
    pub fn analyze(db: &SignatureDatabase, scripts: &[String], detected: &mut Vec<RawDetection>) {
        for script in scripts {
            scan(db, Source::Script, script, detected, ratio_score(Source::Script));
        }
    }
}

/// 全局变量分析器
pub struct JsAnalyzer;

impl JsAnalyzer {
    pub fn analyze(db: &SignatureDatabase, js_content: &str, detected: &mut Vec<RawDetection>) {
        scan(db, Source::Js, js_content, detected, ratio_score(Source::Js));
    }
}

/// Header分析器
pub struct HeaderAnalyzer;

impl HeaderAnalyzer {
    pub fn analyze(db: &SignatureDatabase, header_content: &str, detected: &mut Vec<RawDetection>) {
        scan(db, Source::Header, header_content, detected, ratio_score(Source::Header));
    }
}

/// DOM分析器
pub struct DomAnalyzer;

impl DomAnalyzer {
    pub fn analyze(db: &SignatureDatabase, dom_content: &str, detected: &mut Vec<RawDetection>) {
        scan(db, Source::Dom, dom_content, detected, ratio_score(Source::Dom));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{SignaturePatterns, TechnologySignature};

    fn database() -> SignatureDatabase {
        let alpha = TechnologySignature {
            name: "Alpha".to_string(),
            category: "Testing".to_string(),
            confidence: Some(88.0),
            patterns: SignaturePatterns {
                html: vec!["AlphaKit".to_string(), "alpha-widget".to_string(), "alpha-grid".to_string()],
                scripts: vec!["alpha\\.js".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        SignatureDatabase::builder().insert(alpha).and_then(|b| b.build()).unwrap()
    }

    #[test]
    fn test_html_exact_marker_uses_nominal() {
        let db = database();
        let mut detected = Vec::new();
        HtmlAnalyzer::analyze(&db, "<div>powered by AlphaKit</div>", &mut detected);

        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].confidence, 88.0);
        assert_eq!(detected[0].source, Source::Html);
    }

    #[test]
    fn test_html_without_exact_case_uses_ratio() {
        let db = database();
        let mut detected = Vec::new();
        HtmlAnalyzer::analyze(&db, "<div>powered by alphakit</div>", &mut detected);

        assert_eq!(detected.len(), 1);
        assert!((detected[0].confidence - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_script_entries_scored_separately() {
        let db = database();
        let mut detected = Vec::new();
        let scripts = vec!["/static/alpha.js".to_string(), "/vendor/other.js".to_string(), "/alpha.js?v=2".to_string()];
        ScriptAnalyzer::analyze(&db, &scripts, &mut detected);

        assert_eq!(detected.len(), 2);
        assert!(detected.iter().all(|d| d.source == Source::Script && d.confidence == 100.0));
    }

    #[test]
    fn test_empty_content_produces_nothing() {
        let db = database();
        let mut detected = Vec::new();
        HtmlAnalyzer::analyze(&db, "", &mut detected);
        JsAnalyzer::analyze(&db, "", &mut detected);
        assert!(detected.is_empty());
    }
}
