//! 投递状态模块
//!
//! 定义单次发送的状态码和批次级聚合规则

use serde::{Deserialize, Serialize};

/// 投递状态码
///
/// 既用于单个事件的发送结果，也用于整个批次的聚合结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCode {
    /// 发送成功
    Success,
    /// 部分失败
    PartialFailure,
    /// 内部错误
    InternalError,
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusCode::Success => write!(f, "成功"),
            StatusCode::PartialFailure => write!(f, "部分失败"),
            StatusCode::InternalError => write!(f, "内部错误"),
        }
    }
}

impl StatusCode {
    /// 判断该结果在聚合时是否计为一次失败
    pub fn is_failure(&self) -> bool {
        !matches!(self, StatusCode::Success)
    }
}

/// 聚合批次内各事件的发送结果
///
/// 零失败返回`Success`，全部失败返回`InternalError`，
/// 其余情况返回`PartialFailure`。空批次失败数与事件数同为0，
/// 落入第一条规则返回`Success`
pub fn aggregate(outcomes: &[StatusCode]) -> StatusCode {
    let failures = outcomes.iter().filter(|code| code.is_failure()).count();

    if failures == 0 {
        StatusCode::Success
    } else if failures != outcomes.len() {
        StatusCode::PartialFailure
    } else {
        StatusCode::InternalError
    }
}
