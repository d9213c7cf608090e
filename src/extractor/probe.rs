//! 全局变量探测
//! 脚本执行环境相关的能力探测抽象为协作者，结果作为普通的 jsVars 输入

use std::collections::BTreeMap;

use crate::error::{TechResult, TechScopeError};
use crate::snapshot::ProbeValue;

/// 默认探测的全局变量名
pub static DEFAULT_GLOBAL_PROBES: &[&str] = &[
    "window.__REACT_DEVTOOLS_GLOBAL_HOOK__",
    "window.React",
    "window.__VUE__",
    "window.Vue",
    "window.angular",
    "window.ng",
    "window.Backbone",
    "window.jQuery",
    "window.$",
    "jQuery.fn.jquery",
    "window.Swiper",
    "window.bootstrap",
    "window.tailwind",
    "window.lucide",
    "window.wp",
    "window.wpApiSettings",
    "window.elementorFrontend",
    "window.wpcf7",
    "window.wc_add_to_cart_params",
    "window.woocommerce_params",
    "window.Shopify",
    "window.Stripe",
    "window.ga",
    "window.gtag",
    "window.gaData",
    "window.fbq",
    "window.mixpanel",
    "window.google_tag_manager",
    "window.dataLayer",
    "window.AWS",
    "window.firebase",
    "window.openai",
    "window.ChatGPT",
    "window.Claude",
    "window.Anthropic",
    "window.Gemini",
    "window.GoogleAI",
    "window.HuggingFace",
    "window.Replicate",
    "window.Cohere",
    "window.VercelAI",
    "window.Llama",
    "window.MetaAI",
    "window.TogetherAI",
    "window.LangChain",
    "window.LlamaIndex",
    "window.tf",
    "window.TensorFlow",
    "window.torch",
    "window.PyTorch",
];

/// 以技术名为键的旧版 jsVars 与对应探测变量
pub static LEGACY_PROBE_ALIASES: &[(&str, &str)] = &[
    ("React", "window.__REACT_DEVTOOLS_GLOBAL_HOOK__"),
    ("Vue", "window.__VUE__"),
    ("Angular", "window.angular"),
    ("jQuery", "window.jQuery"),
    ("Bootstrap", "window.bootstrap"),
    ("LangChain", "window.LangChain"),
    ("OpenAI", "window.openai"),
];

/// 旧版技术名键映射为探测变量名，其余原样返回
pub fn canonical_probe_name(name: &str) -> &str {
    LEGACY_PROBE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, canonical)| *canonical)
}

/// 全局变量探测协作者
pub trait GlobalProbe: Send + Sync {
    /// 探测指定名称，不存在返回 None
    fn probe(&self, name: &str) -> Option<ProbeValue>;
}

/// 无脚本上下文的宿主
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProbe;

impl GlobalProbe for NoProbe {
    fn probe(&self, _name: &str) -> Option<ProbeValue> {
        None
    }
}

/// 固定取值的探测器
#[derive(Debug, Default, Clone)]
pub struct StaticProbe {
    values: BTreeMap<String, ProbeValue>,
}

impl StaticProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: ProbeValue) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// 解析 `name=value`；省略值时记为 "found"
    pub fn parse_assignment(assignment: &str) -> TechResult<(String, ProbeValue)> {
        let (name, value) = match assignment.split_once('=') {
            Some((name, value)) => (name.trim(), value.trim()),
            None => (assignment.trim(), "found"),
        };
        if name.is_empty() {
            return Err(TechScopeError::InvalidInput(format!("无效的全局变量赋值：{}", assignment)));
        }
        Ok((name.to_string(), ProbeValue::Text(value.to_string())))
    }

    /// 由多条赋值构建
    pub fn from_assignments<I, S>(assignments: I) -> TechResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        assignments.into_iter().try_fold(Self::new(), |probe, assignment| {
            let (name, value) = Self::parse_assignment(assignment.as_ref())?;
            Ok(probe.with(name, value))
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl GlobalProbe for StaticProbe {
    fn probe(&self, name: &str) -> Option<ProbeValue> {
        self.values.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            StaticProbe::parse_assignment("jQuery.fn.jquery=3.7.1").unwrap(),
            ("jQuery.fn.jquery".to_string(), ProbeValue::Text("3.7.1".to_string()))
        );
        assert_eq!(
            StaticProbe::parse_assignment("window.React").unwrap(),
            ("window.React".to_string(), ProbeValue::Text("found".to_string()))
        );
        assert!(StaticProbe::parse_assignment("=1").is_err());
    }

    #[test]
    fn test_static_probe_lookup() {
        let probe = StaticProbe::from_assignments(["window.jQuery", "window.ga=true"]).unwrap();
        assert_eq!(probe.probe("window.jQuery"), Some(ProbeValue::Text("found".to_string())));
        assert_eq!(probe.probe("window.React"), None);
        assert_eq!(NoProbe.probe("window.jQuery"), None);
        assert_eq!(probe.names().count(), 2);
    }
}
