//! 页面快照模型
//! 单次分析的只读输入；反序列化按字段宽松处理：缺失、null、类型错误均视为空值

use std::collections::BTreeMap;
use std::fmt::Write;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{TechResult, TechScopeError};
use crate::extractor::canonical_probe_name;
use crate::utils::HeaderConverter;

/// 全局变量探测值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProbeValue {
    Flag(bool),
    Number(f64),
    Text(String),
    Missing,
}

impl ProbeValue {
    /// 可观测的取值，不存在时返回 None
    pub fn observed(&self) -> Option<String> {
        match self {
            ProbeValue::Flag(true) => Some("true".to_string()),
            ProbeValue::Flag(false) | ProbeValue::Missing => None,
            ProbeValue::Number(n) => Some(n.to_string()),
            ProbeValue::Text(s) if s.trim().is_empty() => None,
            ProbeValue::Text(s) => Some(s.clone()),
        }
    }

    pub fn is_present(&self) -> bool {
        self.observed().is_some()
    }
}

/// 结构化DOM元素描述
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomElement {
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

/// DOM描述符：选择器字符串或结构化元素
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomDescriptor {
    Selector(String),
    Element(DomElement),
}

impl DomDescriptor {
    /// 渲染为选择器风格的一行：`div#app.container[data-v-1a2b]`
    pub fn render(&self) -> String {
        match self {
            DomDescriptor::Selector(selector) => selector.trim().to_string(),
            DomDescriptor::Element(element) => {
                let mut line = element.tag.to_lowercase();
                if let Some(id) = element.id.as_deref().filter(|id| !id.is_empty()) {
                    let _ = write!(line, "#{}", id);
                }
                for class in element.classes.iter().filter(|c| !c.is_empty()) {
                    let _ = write!(line, ".{}", class);
                }
                for (name, value) in &element.attributes {
                    if value.is_empty() {
                        let _ = write!(line, "[{}]", name);
                    } else {
                        let _ = write!(line, "[{}=\"{}\"]", name, value);
                    }
                }
                line
            }
        }
    }
}

/// 页面快照
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct PageSnapshot {
    pub html: String,
    pub scripts: Vec<String>,
    #[serde(rename = "jsVars")]
    pub js_vars: BTreeMap<String, ProbeValue>,
    pub headers: BTreeMap<String, String>,
    pub dom: Vec<DomDescriptor>,
    /// meta标签：name/property -> content
    pub meta: BTreeMap<String, String>,
    pub url: String,
    pub title: String,
}

impl PageSnapshot {
    /// 解析JSON文本；仅顶层不是合法JSON时返回错误
    pub fn from_json_str(json: &str) -> TechResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| TechScopeError::SnapshotError(format!("快照不是合法JSON：{}", e)))?;
        Ok(Self::from_json_value(&value))
    }

    /// 宽松解析：逐字段降级为空值
    pub fn from_json_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            warn!("快照顶层不是对象，按空快照处理");
            return Self::default();
        };

        Self {
            html: string_field(obj, "html"),
            scripts: string_list_field(obj, "scripts"),
            js_vars: probe_map_field(obj, "jsVars"),
            headers: header_map_field(obj, "headers"),
            dom: dom_list_field(obj, "dom"),
            meta: string_map_field(obj, "meta"),
            url: string_field(obj, "url"),
            title: string_field(obj, "title"),
        }
    }

    /// JS来源匹配文本：每个存在的探测项一行 `name=value`
    pub fn js_match_content(&self) -> String {
        self.js_vars
            .iter()
            .filter_map(|(name, value)| value.observed().map(|v| format!("{}={}", name, v)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Header来源匹配文本：每个Header一行 `name: value`，按名称排序
    pub fn header_match_content(&self) -> String {
        HeaderConverter::to_match_lines(&self.headers)
    }

    /// DOM来源匹配文本：每个描述符一行
    pub fn dom_match_content(&self) -> String {
        self.dom
            .iter()
            .map(DomDescriptor::render)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
            && self.scripts.is_empty()
            && self.js_vars.is_empty()
            && self.headers.is_empty()
            && self.dom.is_empty()
    }
}

impl From<Value> for PageSnapshot {
    fn from(value: Value) -> Self {
        Self::from_json_value(&value)
    }
}

fn field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    match obj.get(key) {
        None | Some(Value::Null) => {
            debug!("快照字段{}缺失，按空值处理", key);
            None
        }
        Some(value) => Some(value),
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    match field(obj, key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            warn!("快照字段{}类型错误（{}），按空值处理", key, type_name(other));
            String::new()
        }
        None => String::new(),
    }
}

fn string_list_field(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    match field(obj, key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(other) => {
            warn!("快照字段{}类型错误（{}），按空值处理", key, type_name(other));
            Vec::new()
        }
        None => Vec::new(),
    }
}

fn probe_map_field(obj: &Map<String, Value>, key: &str) -> BTreeMap<String, ProbeValue> {
    match field(obj, key) {
        Some(Value::Object(entries)) => {
            let mut probes = BTreeMap::new();
            for (name, value) in entries {
                let Ok(probe) = serde_json::from_value::<ProbeValue>(value.clone()) else {
                    continue;
                };
                let name = canonical_probe_name(name);
                // 别名与正式名同时出现时保留存在的值
                match probes.get(name) {
                    Some(existing) if ProbeValue::is_present(existing) => {}
                    _ => {
                        probes.insert(name.to_string(), probe);
                    }
                }
            }
            probes
        }
        Some(other) => {
            warn!("快照字段{}类型错误（{}），按空值处理", key, type_name(other));
            BTreeMap::new()
        }
        None => BTreeMap::new(),
    }
}

fn header_map_field(obj: &Map<String, Value>, key: &str) -> BTreeMap<String, String> {
    match field(obj, key) {
        Some(Value::Object(entries)) => {
            let pairs = entries.iter().filter_map(|(name, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    Value::Array(values) => values
                        .iter()
                        .filter_map(Value::as_str)
                        .find(|v| !v.is_empty())?
                        .to_string(),
                    Value::Null | Value::Object(_) => return None,
                };
                Some((name.clone(), value))
            });
            HeaderConverter::normalize(pairs)
        }
        Some(other) => {
            warn!("快照字段{}类型错误（{}），按空值处理", key, type_name(other));
            BTreeMap::new()
        }
        None => BTreeMap::new(),
    }
}

fn string_map_field(obj: &Map<String, Value>, key: &str) -> BTreeMap<String, String> {
    match field(obj, key) {
        Some(Value::Object(entries)) => entries
            .iter()
            .filter_map(|(name, value)| value.as_str().map(|v| (name.clone(), v.to_string())))
            .filter(|(name, value)| !name.is_empty() && !value.is_empty())
            .collect(),
        Some(other) => {
            warn!("快照字段{}类型错误（{}），按空值处理", key, type_name(other));
            BTreeMap::new()
        }
        None => BTreeMap::new(),
    }
}

fn dom_list_field(obj: &Map<String, Value>, key: &str) -> Vec<DomDescriptor> {
    match field(obj, key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| serde_json::from_value::<DomDescriptor>(item.clone()).ok())
            .collect(),
        Some(other) => {
            warn!("快照字段{}类型错误（{}），按空值处理", key, type_name(other));
            Vec::new()
        }
        None => Vec::new(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lenient_fields_fall_back_to_empty() {
        let snapshot = PageSnapshot::from_json_value(&json!({
            "html": 42,
            "scripts": ["/a.js", null, 7, "/b.js"],
            "jsVars": "oops",
            "headers": null,
            "url": "https://example.com/"
        }));

        assert!(snapshot.html.is_empty());
        assert_eq!(snapshot.scripts, vec!["/a.js".to_string(), "/b.js".to_string()]);
        assert!(snapshot.js_vars.is_empty());
        assert!(snapshot.headers.is_empty());
        assert!(snapshot.dom.is_empty());
        assert_eq!(snapshot.url, "https://example.com/");
    }

    #[test]
    fn test_non_object_is_empty_snapshot() {
        assert!(PageSnapshot::from_json_value(&json!([1, 2, 3])).is_empty());
        assert!(PageSnapshot::from_json_str("not json").is_err());
    }

    #[test]
    fn test_serde_deserialize_goes_through_lenient_path() {
        let snapshot: PageSnapshot = serde_json::from_str(r#"{"html": "<p>hi</p>", "dom": 5}"#).unwrap();
        assert_eq!(snapshot.html, "<p>hi</p>");
        assert!(snapshot.dom.is_empty());
    }

    #[test]
    fn test_js_match_content_skips_absent_probes() {
        let snapshot = PageSnapshot::from_json_value(&json!({
            "jsVars": {
                "window.jQuery": "found",
                "window.React": "",
                "window.__VUE__": false,
                "jQuery.fn.jquery": "3.7.1",
                "window.ga": true,
                "window.angular": null
            }
        }));

        assert_eq!(
            snapshot.js_match_content(),
            "jQuery.fn.jquery=3.7.1\nwindow.ga=true\nwindow.jQuery=found"
        );
    }

    #[test]
    fn test_legacy_tech_name_keys_mapped_to_probe_names() {
        let snapshot = PageSnapshot::from_json_value(&json!({
            "jsVars": {
                "React": "",
                "jQuery": "found",
                "window.jQuery": "",
                "OpenAI": "found",
                "window.custom": "x"
            }
        }));

        assert_eq!(
            snapshot.js_match_content(),
            "window.custom=x\nwindow.jQuery=found\nwindow.openai=found"
        );
        assert!(!snapshot.js_vars.contains_key("jQuery"));
    }

    #[test]
    fn test_meta_map_lenient() {
        let snapshot = PageSnapshot::from_json_value(&json!({
            "meta": { "generator": "WordPress 6.4.2", "og:type": "website", "bad": 1, "empty": "" }
        }));
        assert_eq!(snapshot.meta.len(), 2);
        assert_eq!(snapshot.meta.get("generator").map(String::as_str), Some("WordPress 6.4.2"));
        assert!(PageSnapshot::from_json_value(&json!({ "meta": [] })).meta.is_empty());
    }

    #[test]
    fn test_headers_normalized_and_sorted() {
        let snapshot = PageSnapshot::from_json_value(&json!({
            "headers": { "Server": "cloudflare", "CF-RAY": "8a1b", "Set-Cookie": ["", "__cf_bm=abc"] }
        }));

        assert_eq!(
            snapshot.header_match_content(),
            "cf-ray: 8a1b\nserver: cloudflare\nset-cookie: __cf_bm=abc"
        );
    }

    #[test]
    fn test_dom_descriptor_render() {
        let snapshot = PageSnapshot::from_json_value(&json!({
            "dom": [
                "#root",
                { "tag": "DIV", "id": "app", "classes": ["container-fluid"], "attributes": { "data-v-7ba5bd90": "" } },
                { "tag": "html", "attributes": { "ng-version": "17.0.2" } }
            ]
        }));

        assert_eq!(
            snapshot.dom_match_content(),
            "#root\ndiv#app.container-fluid[data-v-7ba5bd90]\nhtml[ng-version=\"17.0.2\"]"
        );
    }
}
