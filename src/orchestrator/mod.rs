//! 调度模块：消息处理、最近结果缓存、徽标状态、结果持久化
pub mod orchestrator;
pub mod store;

pub use self::orchestrator::{BADGE_COLOR, BadgeState, LastDetection, Message, Orchestrator, Response, TabInfo};
pub use self::store::DetectionStore;
