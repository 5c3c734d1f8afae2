//! Slack Incident Action - Dynatrace事件的Slack通知插件
//!
//! 这是一个用Rust编写的监控平台动作插件，支持：
//! - 将平台下发的事件映射为Slack消息负载
//! - 通过webhook进行一次性HTTP投递
//! - 批次级的成功/部分失败/内部错误状态聚合

pub mod config;
pub mod error;
pub mod incident;
pub mod notification;
pub mod plugin;
pub mod status;

// 重新导出主要类型
pub use config::{ActionConfig, StaticConfig};
pub use error::{ActionError, ConfigError};
pub use incident::{Incident, IncidentState, Severity, Violation};
pub use plugin::SlackChatAction;
pub use status::StatusCode;

/// 应用程序版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 应用程序名称
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
