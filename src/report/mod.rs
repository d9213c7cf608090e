//! 展示模块：分类分组、统计、报告导出
pub mod presenter;
pub mod export;

pub use self::presenter::{CategoryGroup, Statistics, format_technology, group_by_category, is_ai_category, render_text};
pub use self::export::ExportReport;
