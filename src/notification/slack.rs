//! Slack webhook发送模块
//!
//! 实现消息到webhook端点的一次性投递

use crate::error::Result;
use crate::status::StatusCode;
use anyhow::Context;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// 连接建立超时
const CONNECT_TIMEOUT: Duration = Duration::from_millis(5000);

/// 响应读取超时
const READ_TIMEOUT: Duration = Duration::from_millis(20000);

/// Slack webhook发送器
pub struct WebhookSender {
    /// HTTP客户端
    client: Client,
}

impl WebhookSender {
    /// 创建新的发送器
    ///
    /// # 返回
    /// * `Result<Self>` - 发送器实例
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(READ_TIMEOUT)
            .build()
            .context("创建HTTP客户端失败")?;

        Ok(Self { client })
    }

    /// 将JSON消息发送到webhook，返回本次投递的状态码
    ///
    /// 响应状态码恰好为200时视为成功，其他状态码计为`PartialFailure`，
    /// 传输层故障（超时、连接拒绝、读写中断）计为`InternalError`。
    /// 每个事件只发送一次，不重试；请求体使用固定长度，连接在所有
    /// 出口路径上释放
    pub async fn send(&self, url: &str, payload: String) -> StatusCode {
        debug!("发送消息到webhook: {}", url);

        let response = self
            .client
            .post(url)
            .header(
                CONTENT_TYPE,
                HeaderValue::from_static("application/json; charset=UTF-8"),
            )
            .body(payload)
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status();
                debug!("webhook响应状态码: {}", status);

                if status.as_u16() == 200 {
                    StatusCode::Success
                } else {
                    error!("webhook返回非200状态码: {}", status);
                    StatusCode::PartialFailure
                }
            }
            Err(e) => {
                error!("webhook请求失败: {}", e);
                StatusCode::InternalError
            }
        }
    }
}
