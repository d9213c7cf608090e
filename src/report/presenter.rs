//! 结果展示：分类分组、统计、文本渲染
use std::collections::BTreeSet;
use std::fmt::Write as _;
use serde::{Deserialize, Serialize};

use crate::rule::{AI_CATEGORIES, FALLBACK_CATEGORY, MergedDetection};
use crate::utils::format_url;

/// 单个分类分组
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    pub is_ai: bool,
    pub technologies: Vec<MergedDetection>,
}

/// 汇总统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total: usize,
    pub average_confidence: u32,
    pub categories: usize,
}

impl Statistics {
    /// 平均置信度只统计置信度大于0的条目
    pub fn compute(technologies: &[MergedDetection]) -> Self {
        let positive: Vec<f64> = technologies
            .iter()
            .map(|t| t.confidence)
            .filter(|c| *c > 0.0)
            .collect();
        let average_confidence = if positive.is_empty() {
            0
        } else {
            (positive.iter().sum::<f64>() / positive.len() as f64).round() as u32
        };
        let categories = technologies
            .iter()
            .filter(|t| !t.category.is_empty())
            .map(|t| t.category.as_str())
            .collect::<BTreeSet<_>>()
            .len();

        Self {
            total: technologies.len(),
            average_confidence,
            categories,
        }
    }
}

/// 是否AI相关分类
pub fn is_ai_category(category: &str) -> bool {
    AI_CATEGORIES.contains(&category) || category.contains("AI")
}

/// 按分类分组：保持首次出现顺序，AI分类置前
pub fn group_by_category(technologies: &[MergedDetection]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for tech in technologies {
        let category = if tech.category.is_empty() {
            FALLBACK_CATEGORY
        } else {
            tech.category.as_str()
        };
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.technologies.push(tech.clone()),
            None => groups.push(CategoryGroup {
                category: category.to_string(),
                is_ai: is_ai_category(category),
                technologies: vec![tech.clone()],
            }),
        }
    }
    // 稳定排序，同类之间保持原顺序
    groups.sort_by_key(|g| !g.is_ai);
    groups
}

/// 单行展示：`Name vX [NN%]`，无版本或置信度为0时省略对应部分
pub fn format_technology(tech: &MergedDetection) -> String {
    let mut line = tech.name.clone();
    if let Some(version) = tech.version.as_deref().filter(|v| !v.is_empty()) {
        let _ = write!(line, " v{}", version);
    }
    if tech.confidence > 0.0 {
        let _ = write!(line, " [{}%]", tech.rounded_confidence());
    }
    line
}

/// 终端文本报告
pub fn render_text(url: &str, technologies: &[MergedDetection]) -> String {
    let mut out = String::new();
    if !url.is_empty() {
        let _ = writeln!(out, "{}", format_url(url));
    }
    if technologies.is_empty() {
        out.push_str("No technologies detected\n");
        return out;
    }

    for group in group_by_category(technologies) {
        let marker = if group.is_ai { "*" } else { "-" };
        let _ = writeln!(out, "{} {} ({})", marker, group.category, group.technologies.len());
        for tech in &group.technologies {
            let _ = writeln!(out, "    {}", format_technology(tech));
        }
    }

    let stats = Statistics::compute(technologies);
    let _ = writeln!(
        out,
        "total: {}  avg confidence: {}%  categories: {}",
        stats.total, stats.average_confidence, stats.categories
    );
    out
}
