//! 通知模块
//!
//! 提供Slack消息构建和webhook投递功能

pub mod message;
pub mod slack;

// 重新导出主要类型
pub use message::{build_message, ChatAttachment, ChatMessage};
pub use slack::WebhookSender;
