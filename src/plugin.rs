//! 动作插件模块
//!
//! 实现宿主平台调度的初始化、批次处理和卸载入口

use crate::config::ActionConfig;
use crate::error::{ConfigError, Result};
use crate::incident::Incident;
use crate::notification::message;
use crate::notification::WebhookSender;
use crate::status::{self, StatusCode};
use tracing::{info, warn};

/// Slack事件通知动作
///
/// 宿主平台先调用[`SlackChatAction::initialize`]，之后每当有新事件
/// 批次就调用[`SlackChatAction::process`]，卸载前调用
/// [`SlackChatAction::shutdown`]
pub struct SlackChatAction {
    /// webhook发送器
    sender: WebhookSender,
}

impl SlackChatAction {
    /// 初始化插件
    ///
    /// 构建HTTP客户端并校验配置的webhook URL可解析
    ///
    /// # 参数
    /// * `config` - 宿主提供的配置访问器
    ///
    /// # 返回
    /// * `Result<Self>` - 插件实例
    pub fn initialize(config: &dyn ActionConfig) -> Result<Self> {
        let url = config.webhook_url();
        reqwest::Url::parse(&url).map_err(|_| ConfigError::InvalidUrl { url })?;

        Ok(Self {
            sender: WebhookSender::new()?,
        })
    }

    /// 处理一批事件，返回整体状态码
    ///
    /// 事件按平台下发顺序逐个处理，处理每个事件前重新读取配置。
    /// 单个事件的消息构建失败或发送失败都只记为该事件的结果，
    /// 不会中断批次
    pub async fn process(
        &self,
        incidents: &[Incident],
        config: &dyn ActionConfig,
    ) -> StatusCode {
        let mut outcomes = Vec::with_capacity(incidents.len());

        for incident in incidents {
            let notify_all = config.notify_all();
            let dashboard_link = config.dashboard_link();
            let url = config.webhook_url();

            let outcome =
                match message::build_message(incident, notify_all, dashboard_link.as_deref()) {
                    Ok(payload) => self.sender.send(&url, payload).await,
                    Err(e) => {
                        warn!("事件 {} 的消息构建失败: {}", incident.rule_name, e);
                        StatusCode::InternalError
                    }
                };

            outcomes.push(outcome);
        }

        let overall = status::aggregate(&outcomes);
        info!("批次处理完成: {} 个事件, 整体状态: {}", incidents.len(), overall);

        overall
    }

    /// 释放插件资源
    ///
    /// 当前没有需要显式释放的资源，入口为宿主卸载流程保留
    pub fn shutdown(&mut self) {}
}
