//! 事件领域模型模块
//!
//! 定义监控平台下发的事件和阈值违规数据结构，插件只读不修改

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 事件生命周期状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentState {
    /// 事件已触发且仍在进行中
    Open,
    /// 事件已结束
    Closed,
    /// 平台既未标记触发也未标记结束
    Unknown,
}

/// 事件严重级别
///
/// 平台可能下发三个命名级别之外的标签，统一落入`Other`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// 错误
    Error,
    /// 警告
    Warning,
    /// 提示信息
    Informational,
    /// 平台自定义的其他级别
    Other(String),
}

/// 一次阈值违规
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// 被违反的度量名称
    pub measure: String,
    /// 被突破的阈值
    pub threshold: f64,
}

/// 监控平台下发的事件记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// 触发事件的监控规则名称
    pub rule_name: String,
    /// 事件开始时间
    pub start_time: DateTime<Utc>,
    /// 事件结束时间
    pub end_time: DateTime<Utc>,
    /// 生命周期状态
    pub state: IncidentState,
    /// 严重级别
    pub severity: Severity,
    /// 事件描述消息
    pub message: String,
    /// 事件来源服务器标识
    pub server_name: String,
    /// 阈值违规列表，保持平台下发顺序
    pub violations: Vec<Violation>,
}

impl Incident {
    /// 判断事件是否处于触发状态
    pub fn is_open(&self) -> bool {
        matches!(self.state, IncidentState::Open)
    }

    /// 判断事件是否已结束
    pub fn is_closed(&self) -> bool {
        matches!(self.state, IncidentState::Closed)
    }
}
