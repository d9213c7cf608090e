//! 编译后模式模型
//! 正则编译后的结构

use regex::Regex;

use crate::rule::{Source, TechnologySignature};
use crate::utils::VersionExtractor;

/// 模式匹配器
#[derive(Debug, Clone)]
pub enum Matcher {
    Regex(Regex),              // 正则匹配（忽略大小写）
    Invalid { reason: String }, // 编译失败的模式：只计入分母
}

impl Matcher {
    /// 规则描述
    pub fn describe(&self) -> &str {
        match self {
            Matcher::Regex(r) => r.as_str(),
            Matcher::Invalid { .. } => "invalid",
        }
    }
}

/// 单条模式的求值结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternOutcome {
    Match { version: Option<String> },
    NoMatch,
    Invalid,
}

impl PatternOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, PatternOutcome::Match { .. })
    }
}

/// 编译后的模式
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// 原始模式文本（含版本模板）
    pub raw: String,
    /// 精确标记检查用的字面量（去除转义符）
    pub literal: String,
    pub matcher: Matcher,
    pub version_template: Option<String>,
}

impl CompiledPattern {
    /// 对输入内容求值
    pub fn evaluate(&self, content: &str) -> PatternOutcome {
        match &self.matcher {
            Matcher::Invalid { .. } => PatternOutcome::Invalid,
            Matcher::Regex(regex) => match regex.captures(content) {
                Some(captures) => PatternOutcome::Match {
                    version: VersionExtractor::extract(&self.version_template, &captures),
                },
                None => PatternOutcome::NoMatch,
            },
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self.matcher, Matcher::Invalid { .. })
    }

    /// 区分大小写的字面量包含检查；无效模式恒为 false
    pub fn literal_in(&self, raw_content: &str) -> bool {
        self.is_valid() && !self.literal.is_empty() && raw_content.contains(self.literal.as_str())
    }
}

/// 技术编译后的特征
#[derive(Debug, Clone)]
pub struct CompiledSignature {
    pub signature: TechnologySignature,
    pub html: Vec<CompiledPattern>,
    pub scripts: Vec<CompiledPattern>,
    pub js: Vec<CompiledPattern>,
    pub headers: Vec<CompiledPattern>,
    pub dom: Vec<CompiledPattern>,
}

impl CompiledSignature {
    pub fn name(&self) -> &str {
        &self.signature.name
    }

    pub fn category(&self) -> &str {
        &self.signature.category
    }

    /// 标称置信度
    pub fn nominal_confidence(&self) -> Option<f64> {
        self.signature.confidence
    }

    /// 获取指定来源的编译模式
    pub fn patterns(&self, source: Source) -> &[CompiledPattern] {
        match source {
            Source::Html => &self.html,
            Source::Script => &self.scripts,
            Source::Js => &self.js,
            Source::Header => &self.headers,
            Source::Dom => &self.dom,
        }
    }
}
