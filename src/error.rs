//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum TechScopeError {
    // 特征库相关错误
    #[error("特征库加载失败：{0}")]
    DatabaseLoadError(String),
    #[error("特征库校验失败：{0}")]
    DatabaseInvalid(String),

    // 检测相关错误
    #[error("检测器未初始化")]
    DetectorNotInitialized,
    #[error("检测器初始化失败：{0}")]
    DetectorInitError(String),

    // 快照相关错误
    #[error("页面快照解析失败：{0}")]
    SnapshotError(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("MessagePack序列化/反序列化失败：{0}")]
    MsgPackError(String),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type TechResult<T> = Result<T, TechScopeError>;
