//! 特征编译器核心
//! 仅负责将原始特征编译为可执行的正则模式

use std::collections::BTreeMap;
use std::time::Instant;
use regex::RegexBuilder;
use tracing::{debug, warn};

use super::pattern::{CompiledPattern, CompiledSignature, Matcher};
use crate::rule::{Source, TechnologySignature};

/// 版本模板分隔标记
const VERSION_MARKER: &str = ";version:";

/// 特征编译器
pub struct SignatureCompiler;

impl SignatureCompiler {
    /// 编译特征集合
    pub fn compile_all<I>(signatures: I) -> (BTreeMap<String, CompiledSignature>, CompileStats)
    where
        I: IntoIterator<Item = TechnologySignature>,
    {
        let start = Instant::now();
        let mut stats = CompileStats::default();
        let mut compiled = BTreeMap::new();

        for signature in signatures {
            let compiled_sig = Self::compile_signature(signature, &mut stats);
            compiled.insert(compiled_sig.name().to_string(), compiled_sig);
        }
        stats.tech_count = compiled.len();

        debug!("✅ 特征编译完成，总耗时{:?}", start.elapsed());
        debug!(
            "📊 编译统计：HTML模式{}条、Script模式{}条、JS模式{}条、Header模式{}条、DOM模式{}条，无效模式{}条",
            stats.html_count,
            stats.script_count,
            stats.js_count,
            stats.header_count,
            stats.dom_count,
            stats.invalid_count
        );

        (compiled, stats)
    }

    /// 编译单个技术特征
    pub fn compile_signature(signature: TechnologySignature, stats: &mut CompileStats) -> CompiledSignature {
        let mut compile_source = |source: Source| -> Vec<CompiledPattern> {
            let patterns: Vec<CompiledPattern> = signature
                .patterns
                .for_source(source)
                .iter()
                .map(|raw| Self::compile_pattern(raw))
                .collect();

            for pattern in patterns.iter().filter(|p| !p.is_valid()) {
                if let Matcher::Invalid { reason } = &pattern.matcher {
                    warn!(
                        "技术[{}]的{}模式编译失败，按未命中计入：{} ({})",
                        signature.name, source, pattern.raw, reason
                    );
                }
                stats.invalid_count += 1;
            }
            stats.record(source, patterns.len());
            patterns
        };

        let html = compile_source(Source::Html);
        let scripts = compile_source(Source::Script);
        let js = compile_source(Source::Js);
        let headers = compile_source(Source::Header);
        let dom = compile_source(Source::Dom);

        CompiledSignature {
            signature,
            html,
            scripts,
            js,
            headers,
            dom,
        }
    }

    /// 编译单个模式：编译失败不返回错误，而是产出 `Matcher::Invalid`
    pub fn compile_pattern(raw_pattern: &str) -> CompiledPattern {
        let (pattern, version_template) = Self::split_version(raw_pattern);

        // 移除PCRE分隔符
        let pattern = if pattern.len() >= 2 && pattern.starts_with('/') && pattern.ends_with('/') {
            &pattern[1..pattern.len() - 1]
        } else {
            pattern
        };

        let matcher = match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(regex) => Matcher::Regex(regex),
            Err(e) => Matcher::Invalid { reason: e.to_string() },
        };

        CompiledPattern {
            raw: raw_pattern.to_string(),
            literal: Self::literal_form(pattern),
            matcher,
            version_template,
        }
    }

    /// 拆分版本模板：`pattern;version:\1`
    fn split_version(raw_pattern: &str) -> (&str, Option<String>) {
        match raw_pattern.split_once(VERSION_MARKER) {
            Some((pattern, template)) => {
                let template = template.trim();
                (pattern, (!template.is_empty()).then(|| template.to_string()))
            }
            None => (raw_pattern, None),
        }
    }

    /// 字面量形式：去掉标点前的转义反斜杠，`claude\.ai` -> `claude.ai`
    fn literal_form(pattern: &str) -> String {
        let mut literal = String::with_capacity(pattern.len());
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.peek() {
                    Some(next_c) if !next_c.is_alphanumeric() => {
                        literal.push(*next_c);
                        chars.next();
                    }
                    _ => literal.push(c),
                }
            } else {
                literal.push(c);
            }
        }

        literal
    }
}

/// 编译统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileStats {
    pub tech_count: usize,
    pub html_count: usize,
    pub script_count: usize,
    pub js_count: usize,
    pub header_count: usize,
    pub dom_count: usize,
    pub invalid_count: usize,
}

impl CompileStats {
    fn record(&mut self, source: Source, count: usize) {
        match source {
            Source::Html => self.html_count += count,
            Source::Script => self.script_count += count,
            Source::Js => self.js_count += count,
            Source::Header => self.header_count += count,
            Source::Dom => self.dom_count += count,
        }
    }

    /// 模式总数
    pub fn pattern_count(&self) -> usize {
        self.html_count + self.script_count + self.js_count + self.header_count + self.dom_count
    }
}
