//! 错误处理模块
//!
//! 定义插件的统一错误类型

use thiserror::Error;

/// 插件的主要错误类型
#[derive(Error, Debug)]
pub enum ActionError {
    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 消息序列化错误
    #[error("消息序列化失败: {0}")]
    Payload(#[from] serde_json::Error),

    /// HTTP客户端错误
    #[error("HTTP客户端错误: {0}")]
    Http(#[from] reqwest::Error),

    /// 其他错误
    #[error("其他错误: {0}")]
    Other(#[from] anyhow::Error),
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    /// webhook URL无法解析
    #[error("webhook URL无效: {url}")]
    InvalidUrl { url: String },
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, ActionError>;
