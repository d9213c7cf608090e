//! 检测结果更新工具
//! 负责按技术名聚合原始信号（收集置信度、来源、保留版本），并输出排序后的合并结果

use std::collections::{BTreeMap, BTreeSet};
use std::collections::btree_map::Entry;

use crate::detector::ConfidenceMerger;
use crate::rule::{MergedDetection, RawDetection, Source};
use super::VersionExtractor;

/// 单个技术的信号聚合
#[derive(Debug, Clone, Default)]
pub struct DetectionGroup {
    pub category: String,
    pub signals: Vec<f64>,
    pub sources: BTreeSet<Source>,
    pub version: Option<String>,
}

/// 检测结果更新工具
pub struct DetectionUpdater;

impl DetectionUpdater {
    /// 写入一条原始信号
    pub fn update(groups: &mut BTreeMap<String, DetectionGroup>, raw: RawDetection) {
        let group = match groups.entry(raw.name) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(DetectionGroup {
                category: raw.category,
                ..Default::default()
            }),
        };

        group.signals.push(raw.confidence);
        group.sources.insert(raw.source);
        if VersionExtractor::is_better(group.version.as_deref(), raw.version.as_deref()) {
            group.version = raw.version;
        }
    }

    /// 合并、按阈值过滤、排序（置信度降序，同分按名称升序）
    pub fn finalize(groups: BTreeMap<String, DetectionGroup>, threshold: f64) -> Vec<MergedDetection> {
        let mut merged: Vec<MergedDetection> = groups
            .into_iter()
            .filter(|(_, group)| !group.sources.is_empty())
            .map(|(name, group)| MergedDetection {
                name,
                category: group.category,
                confidence: ConfidenceMerger::merge(&group.signals),
                sources: group.sources,
                version: group.version,
            })
            .filter(|detection| detection.confidence >= threshold)
            .collect();

        merged.sort_by(|a, b| {
            b.confidence
                .total_cmp(&a.confidence)
                .then_with(|| a.name.cmp(&b.name))
        });
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, confidence: f64, source: Source, version: Option<&str>) -> RawDetection {
        RawDetection {
            name: name.to_string(),
            category: "Testing".to_string(),
            confidence,
            source,
            version: version.map(str::to_string),
        }
    }

    #[test]
    fn test_update_collects_sources_and_version() {
        let mut groups = BTreeMap::new();
        DetectionUpdater::update(&mut groups, raw("jQuery", 50.0, Source::Script, None));
        DetectionUpdater::update(&mut groups, raw("jQuery", 50.0, Source::Script, Some("3.7.1")));
        DetectionUpdater::update(&mut groups, raw("jQuery", 95.0, Source::Html, Some("3")));

        let group = groups.get("jQuery").unwrap();
        assert_eq!(group.signals.len(), 3);
        assert_eq!(group.sources, BTreeSet::from([Source::Html, Source::Script]));
        assert_eq!(group.version.as_deref(), Some("3.7.1"));
    }

    #[test]
    fn test_finalize_filters_and_sorts() {
        let mut groups = BTreeMap::new();
        DetectionUpdater::update(&mut groups, raw("Zeta", 80.0, Source::Html, None));
        DetectionUpdater::update(&mut groups, raw("Alpha", 80.0, Source::Dom, None));
        DetectionUpdater::update(&mut groups, raw("Mid", 90.0, Source::Js, None));
        DetectionUpdater::update(&mut groups, raw("Low", 49.9, Source::Header, None));

        let names: Vec<_> = DetectionUpdater::finalize(groups, 50.0)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Mid", "Alpha", "Zeta"]);
    }

    #[test]
    fn test_finalize_keeps_exact_threshold() {
        let mut groups = BTreeMap::new();
        DetectionUpdater::update(&mut groups, raw("Edge", 50.0, Source::Script, None));
        assert_eq!(DetectionUpdater::finalize(groups, 50.0).len(), 1);
    }
}
