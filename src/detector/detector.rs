//! 检测器核心：整合各来源分析器，输出合并排序后的检测结果
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use serde_json::Value;
use tracing::debug;

use super::analyzer::{DomAnalyzer, HeaderAnalyzer, HtmlAnalyzer, JsAnalyzer, ScriptAnalyzer};
use crate::config::GlobalConfig;
use crate::error::TechResult;
use crate::rule::{MergedDetection, RawDetection, SignatureDatabase};
use crate::snapshot::PageSnapshot;
use crate::utils::DetectionUpdater;

/// 技术检测器（无状态：除只读特征库外不跨调用保留任何数据）
#[derive(Debug, Clone)]
pub struct TechDetector {
    database: Arc<SignatureDatabase>,
    config: GlobalConfig,
}

impl TechDetector {
    /// 按配置加载特征库并创建检测器
    pub fn new(config: GlobalConfig) -> TechResult<Self> {
        let database = SignatureDatabase::load(&config.signature_origin)?;
        debug!("检测器初始化完成，技术数：{}", database.len());
        Ok(Self { database, config })
    }

    /// 使用已有特征库创建检测器
    pub fn with_database(database: Arc<SignatureDatabase>, config: GlobalConfig) -> Self {
        Self { database, config }
    }

    pub fn database(&self) -> &SignatureDatabase {
        &self.database
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// 核心检测接口
    pub fn analyze(&self, snapshot: &PageSnapshot) -> Vec<MergedDetection> {
        let start = Instant::now();
        let raw = self.raw_detections(snapshot);
        let raw_count = raw.len();

        let mut groups = BTreeMap::new();
        for detection in raw {
            DetectionUpdater::update(&mut groups, detection);
        }
        let merged = DetectionUpdater::finalize(groups, self.config.report_threshold);

        debug!(
            "检测完成，耗时{:?}，原始信号{}条，输出技术{}个",
            start.elapsed(),
            raw_count,
            merged.len()
        );
        merged
    }

    /// 宽松JSON输入：字段缺失或类型错误按空值处理
    pub fn analyze_value(&self, value: &Value) -> Vec<MergedDetection> {
        self.analyze(&PageSnapshot::from_json_value(value))
    }

    /// 全部来源的原始信号（未合并、未过滤）
    pub fn raw_detections(&self, snapshot: &PageSnapshot) -> Vec<RawDetection> {
        let db = self.database.as_ref();
        let mut detected = Vec::new();

        HtmlAnalyzer::analyze(db, &snapshot.html, &mut detected);
        ScriptAnalyzer::analyze(db, &snapshot.scripts, &mut detected);
        JsAnalyzer::analyze(db, &snapshot.js_match_content(), &mut detected);
        HeaderAnalyzer::analyze(db, &snapshot.header_match_content(), &mut detected);
        DomAnalyzer::analyze(db, &snapshot.dom_match_content(), &mut detected);

        detected
    }
}
