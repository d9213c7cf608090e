//! HTML标签提取器
//! 负责从HTML中提取script-src、内联脚本、title、meta标签以及DOM描述符

use std::cell::RefCell;
use std::collections::BTreeMap;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts
};
use markup5ever::interface::Attribute;
use tendril::StrTendril;

use crate::config::{DEFAULT_DOM_DESCRIPTOR_LIMIT, DEFAULT_INLINE_SCRIPT_LIMIT};
use crate::snapshot::{DomDescriptor, DomElement};
use crate::utils::truncate_chars;

/// DOM属性值保留长度
const ATTRIBUTE_VALUE_LIMIT: usize = 100;
/// 记入DOM描述符的属性前缀
const TRACKED_ATTRIBUTE_PREFIXES: &[&str] = &["data-", "ng-", "v-"];

/// 提取结果
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExtractResult {
    pub script_srcs: Vec<String>,
    pub inline_scripts: Vec<String>,
    pub title: String,
    pub meta: BTreeMap<String, String>,
    pub dom: Vec<DomDescriptor>,
}

/// 提取上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractLimits {
    pub inline_script_limit: usize,
    pub dom_descriptor_limit: usize,
}

impl Default for ExtractLimits {
    fn default() -> Self {
        Self {
            inline_script_limit: DEFAULT_INLINE_SCRIPT_LIMIT,
            dom_descriptor_limit: DEFAULT_DOM_DESCRIPTOR_LIMIT,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum TextTarget {
    #[default]
    None,
    InlineScript,
    Title,
}

#[derive(Debug, Default, Clone)]
struct ExtractState {
    result: ExtractResult,
    target: TextTarget,
    buffer: String,
}

#[derive(Debug, Default, Clone)]
pub struct HtmlExtractor {
    limits: ExtractLimits,
    state: RefCell<ExtractState>,
}

impl TokenSink for HtmlExtractor {
    type Handle = ();

    fn process_token(&self, token: Token, _line: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(Tag {
                kind: TagKind::StartTag,
                name,
                attrs,
                self_closing,
                ..
            }) => match name.as_ref() {
                "script" => {
                    let has_src = self.extract_script_src(&attrs);
                    if self_closing {
                        return TokenSinkResult::Continue;
                    }
                    self.begin_text(if has_src { TextTarget::None } else { TextTarget::InlineScript });
                    return TokenSinkResult::RawData(RawKind::ScriptData);
                }
                "title" => {
                    self.begin_text(TextTarget::Title);
                    return TokenSinkResult::RawData(RawKind::Rcdata);
                }
                "style" => return TokenSinkResult::RawData(RawKind::Rawtext),
                "meta" => self.extract_meta_tag(&attrs),
                tag => self.extract_dom_descriptor(tag, &attrs),
            },
            Token::TagToken(Tag {
                kind: TagKind::EndTag,
                name,
                ..
            }) => {
                if matches!(name.as_ref(), "script" | "title") {
                    self.flush_text();
                }
            }
            Token::CharacterTokens(text) => {
                let mut state = self.state.borrow_mut();
                if state.target != TextTarget::None {
                    state.buffer.push_str(&text);
                }
            }
            Token::EOFToken => self.flush_text(),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

impl HtmlExtractor {
    /// 创建新的提取器
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ExtractLimits) -> Self {
        Self {
            limits,
            state: RefCell::default(),
        }
    }

    /// 从HTML字符串提取
    pub fn extract(&self, html: &str) -> ExtractResult {
        let sink = Self::with_limits(self.limits);
        let tokenizer = Tokenizer::new(sink, TokenizerOpts::default());
        let queue = BufferQueue::default();
        queue.push_back(StrTendril::from(html));

        let _ = tokenizer.feed(&queue);
        tokenizer.end();

        tokenizer.sink.state.into_inner().result
    }

    /// 提取script-src，返回是否存在src
    fn extract_script_src(&self, attrs: &[Attribute]) -> bool {
        let src = attrs
            .iter()
            .find(|attr| attr.name.local.as_ref() == "src")
            .map(|attr| attr.value.trim().to_string());

        match src {
            Some(src) if !src.is_empty() => {
                self.state.borrow_mut().result.script_srcs.push(src);
                true
            }
            _ => false,
        }
    }

    /// 提取meta标签：name 优先，其次 property；同名时后者覆盖
    fn extract_meta_tag(&self, attrs: &[Attribute]) {
        let mut name = None;
        let mut property = None;
        let mut content = None;

        for attr in attrs {
            match attr.name.local.as_ref() {
                "name" => name = Some(attr.value.trim().to_lowercase()),
                "property" => property = Some(attr.value.trim().to_lowercase()),
                "content" => content = Some(attr.value.trim().to_string()),
                _ => {}
            }
        }

        let key = name.filter(|n| !n.is_empty()).or(property).filter(|k| !k.is_empty());
        if let (Some(key), Some(content)) = (key, content.filter(|c| !c.is_empty())) {
            self.state.borrow_mut().result.meta.insert(key, content);
        }
    }

    /// 记录携带 id / class / 特征属性的元素
    fn extract_dom_descriptor(&self, tag: &str, attrs: &[Attribute]) {
        let mut state = self.state.borrow_mut();
        if state.result.dom.len() >= self.limits.dom_descriptor_limit {
            return;
        }

        let mut element = DomElement {
            tag: tag.to_string(),
            ..Default::default()
        };
        let mut attributes = BTreeMap::new();

        for attr in attrs {
            let name = attr.name.local.as_ref();
            match name {
                "id" => {
                    let id = attr.value.trim();
                    if !id.is_empty() {
                        element.id = Some(id.to_string());
                    }
                }
                "class" => {
                    element.classes = attr.value.split_whitespace().map(str::to_string).collect();
                }
                _ if TRACKED_ATTRIBUTE_PREFIXES.iter().any(|prefix| name.starts_with(prefix)) => {
                    let value = truncate_chars(attr.value.trim(), ATTRIBUTE_VALUE_LIMIT);
                    attributes.insert(name.to_string(), value.to_string());
                }
                _ => {}
            }
        }
        element.attributes = attributes;

        if element.id.is_some() || !element.classes.is_empty() || !element.attributes.is_empty() {
            state.result.dom.push(DomDescriptor::Element(element));
        }
    }

    fn begin_text(&self, target: TextTarget) {
        let mut state = self.state.borrow_mut();
        state.target = target;
        state.buffer.clear();
    }

    /// 结束当前文本收集
    fn flush_text(&self) {
        let mut state = self.state.borrow_mut();
        let target = std::mem::take(&mut state.target);
        let text = std::mem::take(&mut state.buffer);
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        match target {
            TextTarget::InlineScript => {
                let script = truncate_chars(text, self.limits.inline_script_limit).to_string();
                state.result.inline_scripts.push(script);
            }
            TextTarget::Title if state.result.title.is_empty() => {
                state.result.title = text.to_string();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_extractor() {
        let html = r#"
            <html><head>
            <title>Acme &amp; Co</title>
            <meta name="Generator" content="WordPress 6.4.2">
            <meta property="og:site_name" content="Acme">
            <meta name="viewport">
            <meta charset="utf-8">
            <script src="/jquery.min.js"></script>
            <script>window.dataLayer = window.dataLayer || []; if (a < b) { gtag('js', new Date()); }</script>
            <style>.x > .y { color: red }</style>
            </head>
            <body>
            <div id="app" class="container-fluid main" data-v-7ba5bd90></div>
            <p>plain</p>
            <script src="/vue.global.js"></script>
            </body></html>
        "#;

        let result = HtmlExtractor::new().extract(html);

        assert_eq!(
            result.script_srcs,
            vec!["/jquery.min.js".to_string(), "/vue.global.js".to_string()]
        );
        assert_eq!(result.inline_scripts.len(), 1);
        assert!(result.inline_scripts[0].starts_with("window.dataLayer"));
        assert!(result.inline_scripts[0].contains("a < b"));
        assert_eq!(result.title, "Acme & Co");
        assert_eq!(
            result.meta,
            BTreeMap::from([
                ("generator".to_string(), "WordPress 6.4.2".to_string()),
                ("og:site_name".to_string(), "Acme".to_string()),
            ])
        );
        assert_eq!(
            result.dom,
            vec![DomDescriptor::Element(DomElement {
                tag: "div".to_string(),
                id: Some("app".to_string()),
                classes: vec!["container-fluid".to_string(), "main".to_string()],
                attributes: BTreeMap::from([("data-v-7ba5bd90".to_string(), String::new())]),
            })]
        );
    }

    #[test]
    fn test_limits_applied() {
        let limits = ExtractLimits {
            inline_script_limit: 5,
            dom_descriptor_limit: 2,
        };
        let html = r#"<script>abcdefghij</script><i class="a"></i><i class="b"></i><i class="c"></i>"#;
        let result = HtmlExtractor::with_limits(limits).extract(html);

        assert_eq!(result.inline_scripts, vec!["abcde".to_string()]);
        assert_eq!(result.dom.len(), 2);
    }
}
