//! Header格式转换工具
//! 多值Header归一化为单值，以及转换为可匹配的文本行

use std::collections::BTreeMap;
use tracing::warn;

/// 单次处理的Header条目上限
const MAX_HEADER_ENTRIES: usize = 1000;

/// Header转换工具
pub struct HeaderConverter;

impl HeaderConverter {
    /// 归一化：名称转小写，重复Header取第一个非空值
    pub fn normalize<I, K, V>(headers: I) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut map: BTreeMap<String, String> = BTreeMap::new();

        for (index, (key, value)) in headers.into_iter().enumerate() {
            if index >= MAX_HEADER_ENTRIES {
                warn!("Header条目超过{}条，忽略剩余部分", MAX_HEADER_ENTRIES);
                break;
            }

            let key = key.as_ref().trim().to_lowercase();
            let value = value.as_ref().trim();
            if key.is_empty() {
                continue;
            }

            match map.get_mut(&key) {
                Some(existing) if existing.is_empty() => *existing = value.to_string(),
                Some(_) => {}
                None => {
                    map.insert(key, value.to_string());
                }
            }
        }

        map
    }

    /// 解析 `Name: value` 形式的单行Header
    pub fn parse_line(line: &str) -> Option<(String, String)> {
        let (name, value) = line.split_once(':')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some((name.to_string(), value.trim().to_string()))
    }

    /// 转换为匹配文本：每个Header一行 `name: value`，按名称排序
    pub fn to_match_lines(headers: &BTreeMap<String, String>) -> String {
        headers
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
