//! 调度器：接收页面数据消息，执行检测，缓存最近一次结果并计算徽标状态
use std::sync::Arc;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::store::DetectionStore;
use crate::config::GlobalConfig;
use crate::detector::TechDetector;
use crate::error::TechResult;
use crate::rule::MergedDetection;
use crate::snapshot::PageSnapshot;

/// 有检测结果时的徽标颜色
pub const BADGE_COLOR: &str = "#4CAF50";

/// 消息来源标签页
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub url: String,
}

/// 调度器消息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Message {
    PageData {
        data: PageSnapshot,
        #[serde(default)]
        tab: TabInfo,
    },
    GetLastDetection,
}

/// 最近一次检测
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastDetection {
    pub technologies: Vec<MergedDetection>,
    pub url: String,
    pub timestamp: Option<DateTime<Utc>>,
}

/// 徽标状态
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeState {
    pub text: String,
    pub color: Option<String>,
}

impl BadgeState {
    /// 数量为0时清空文本
    pub fn for_count(count: usize) -> Self {
        if count > 0 {
            Self {
                text: count.to_string(),
                color: Some(BADGE_COLOR.to_string()),
            }
        } else {
            Self::default()
        }
    }
}

/// 调度器响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    pub technologies: Vec<MergedDetection>,
    pub url: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub badge: Option<BadgeState>,
}

/// 调度器
#[derive(Debug)]
pub struct Orchestrator {
    detector: Arc<TechDetector>,
    last: RwLock<LastDetection>,
    store: Option<DetectionStore>,
}

impl Orchestrator {
    pub fn new(detector: Arc<TechDetector>) -> Self {
        Self {
            detector,
            last: RwLock::new(LastDetection::default()),
            store: None,
        }
    }

    /// 按配置创建：加载特征库，配置了存储路径时启用持久化
    pub fn from_config(config: GlobalConfig) -> TechResult<Self> {
        let store = config.store_path.clone().map(DetectionStore::new);
        let detector = Arc::new(TechDetector::new(config)?);
        let orchestrator = Self::new(detector);
        Ok(match store {
            Some(store) => orchestrator.with_store(store),
            None => orchestrator,
        })
    }

    pub fn with_store(mut self, store: DetectionStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn detector(&self) -> &TechDetector {
        &self.detector
    }

    /// 从存储恢复最近一次检测
    pub async fn restore(&self) -> TechResult<bool> {
        let Some(store) = &self.store else {
            return Ok(false);
        };
        match store.load().await? {
            Some(detection) => {
                debug!("已恢复最近一次检测：{}，技术数：{}", detection.url, detection.technologies.len());
                *self.last.write().await = detection;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 处理消息
    pub async fn handle(&self, message: Message) -> Response {
        match message {
            Message::PageData { data, tab } => self.handle_page_data(data, tab).await,
            Message::GetLastDetection => {
                let last = self.last_detection().await;
                Response {
                    success: true,
                    badge: Some(BadgeState::for_count(last.technologies.len())),
                    technologies: last.technologies,
                    url: last.url,
                    timestamp: last.timestamp,
                }
            }
        }
    }

    async fn handle_page_data(&self, snapshot: PageSnapshot, tab: TabInfo) -> Response {
        let url = if tab.url.is_empty() { snapshot.url.clone() } else { tab.url };
        info!("处理页面数据：tab={:?}，url={}", tab.id, url);

        let technologies = self.detector.analyze(&snapshot);
        let detection = LastDetection {
            technologies,
            url,
            timestamp: Some(Utc::now()),
        };
        info!(
            "检测到技术{}个：{:?}",
            detection.technologies.len(),
            detection.technologies.iter().map(|t| t.name.as_str()).collect::<Vec<_>>()
        );

        if let Some(store) = &self.store {
            if let Err(e) = store.save(&detection).await {
                warn!("检测记录持久化失败：{}", e);
            }
        }

        let badge = BadgeState::for_count(detection.technologies.len());
        *self.last.write().await = detection.clone();

        Response {
            success: true,
            technologies: detection.technologies,
            url: detection.url,
            timestamp: detection.timestamp,
            badge: Some(badge),
        }
    }

    /// 最近一次检测（无记录时为空结果）
    pub async fn last_detection(&self) -> LastDetection {
        self.last.read().await.clone()
    }

    /// 清空内存与存储中的记录
    pub async fn clear(&self) -> TechResult<()> {
        *self.last.write().await = LastDetection::default();
        if let Some(store) = &self.store {
            store.clear().await?;
        }
        Ok(())
    }
}
