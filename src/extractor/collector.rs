//! 页面采集器：由原始页面材料构建快照

use std::collections::HashSet;
use tracing::debug;

use super::html_extractor::{ExtractLimits, HtmlExtractor};
use super::probe::{DEFAULT_GLOBAL_PROBES, GlobalProbe};
use crate::config::GlobalConfig;
use crate::snapshot::PageSnapshot;
use crate::utils::{HeaderConverter, preview_compact, truncate_bytes};

/// 原始页面材料
#[derive(Debug, Clone, Default)]
pub struct PageInput {
    pub html: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// 页面采集器
#[derive(Debug, Clone)]
pub struct PageCollector {
    html_byte_budget: usize,
    script_preview_len: usize,
    limits: ExtractLimits,
    probe_names: Vec<String>,
}

impl PageCollector {
    pub fn new(config: &GlobalConfig) -> Self {
        Self {
            html_byte_budget: config.html_byte_budget,
            script_preview_len: config.script_preview_len,
            limits: ExtractLimits {
                inline_script_limit: config.inline_script_limit,
                dom_descriptor_limit: config.dom_descriptor_limit,
            },
            probe_names: DEFAULT_GLOBAL_PROBES.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// 追加探测名称（已存在的忽略）
    pub fn with_probe_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.probe_names.contains(&name) {
                self.probe_names.push(name);
            }
        }
        self
    }

    /// 采集快照
    pub fn collect(&self, input: &PageInput, probe: &dyn GlobalProbe) -> PageSnapshot {
        let html = truncate_bytes(&input.html, self.html_byte_budget);
        if html.len() < input.html.len() {
            debug!("HTML超出预算，已截断：{} -> {} 字节", input.html.len(), html.len());
        }

        let extracted = HtmlExtractor::with_limits(self.limits).extract(html);

        // script-src 与内联脚本合并去重，保持文档顺序
        let mut seen = HashSet::new();
        let scripts: Vec<String> = extracted
            .script_srcs
            .into_iter()
            .chain(extracted.inline_scripts)
            .filter(|script| seen.insert(script.clone()))
            .collect();
        for script in &scripts {
            debug!("采集脚本：{}", preview_compact(script, self.script_preview_len));
        }

        let js_vars = self
            .probe_names
            .iter()
            .filter_map(|name| {
                probe
                    .probe(name)
                    .filter(|value| value.is_present())
                    .map(|value| (name.clone(), value))
            })
            .collect();

        let snapshot = PageSnapshot {
            html: html.to_string(),
            scripts,
            js_vars,
            headers: HeaderConverter::normalize(input.headers.iter().map(|(k, v)| (k, v))),
            dom: extracted.dom,
            meta: extracted.meta,
            url: input.url.clone(),
            title: extracted.title,
        };
        debug!(
            "快照采集完成：脚本{}个，全局变量{}个，Header{}个，meta{}个，DOM描述符{}个",
            snapshot.scripts.len(),
            snapshot.js_vars.len(),
            snapshot.headers.len(),
            snapshot.meta.len(),
            snapshot.dom.len()
        );
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::extractor::{NoProbe, StaticProbe};
    use crate::snapshot::ProbeValue;

    #[test]
    fn test_collect_builds_snapshot() {
        let input = PageInput {
            html: r#"<title>Shop</title>
                <meta name="generator" content="WooCommerce 8.5.1">
                <script src="https://code.jquery.com/jquery-3.7.1.min.js"></script>
                <script src="https://code.jquery.com/jquery-3.7.1.min.js"></script>
                <script>fbq('init', '123');</script>
                <div class="woocommerce" data-product="1"></div>"#
                .to_string(),
            url: "https://shop.example.com/".to_string(),
            headers: vec![
                ("Server".to_string(), "nginx".to_string()),
                ("SERVER".to_string(), "apache".to_string()),
            ],
        };
        let probe = StaticProbe::new()
            .with("window.jQuery", ProbeValue::Text("found".to_string()))
            .with("window.React", ProbeValue::Text(String::new()))
            .with("window.custom", ProbeValue::Flag(true));

        let snapshot = PageCollector::new(&ConfigManager::get_default()).collect(&input, &probe);

        assert_eq!(snapshot.title, "Shop");
        assert_eq!(snapshot.meta.get("generator").map(String::as_str), Some("WooCommerce 8.5.1"));
        assert_eq!(
            snapshot.scripts,
            vec![
                "https://code.jquery.com/jquery-3.7.1.min.js".to_string(),
                "fbq('init', '123');".to_string()
            ]
        );
        assert_eq!(snapshot.js_vars.len(), 1);
        assert!(snapshot.js_vars.contains_key("window.jQuery"));
        assert_eq!(snapshot.headers.get("server").map(String::as_str), Some("nginx"));
        assert_eq!(snapshot.dom.len(), 1);
        assert_eq!(snapshot.url, "https://shop.example.com/");
    }

    #[test]
    fn test_custom_probe_names() {
        let probe = StaticProbe::new().with("window.custom", ProbeValue::Flag(true));
        let collector = PageCollector::new(&ConfigManager::get_default()).with_probe_names(["window.custom"]);
        let snapshot = collector.collect(&PageInput::default(), &probe);
        assert!(snapshot.js_vars.contains_key("window.custom"));
    }

    #[test]
    fn test_html_budget_truncates() {
        let config = ConfigManager::custom().html_byte_budget(16).build();
        let input = PageInput {
            html: format!("<p>{}</p>", "x".repeat(100)),
            ..Default::default()
        };
        let snapshot = PageCollector::new(&config).collect(&input, &NoProbe);
        assert_eq!(snapshot.html.len(), 16);
        assert!(snapshot.js_vars.is_empty());
    }
}
