//! 消息构建模块
//!
//! 将事件记录映射为Slack消息负载并序列化为JSON字符串

use crate::incident::{Incident, IncidentState, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 固定的发送者显示名称
pub const SENDER_USERNAME: &str = "dynatrace";

/// 固定的发送者头像URL
pub const SENDER_ICON_URL: &str =
    "https://media.glassdoor.com/sqll/309684/dynatrace-squarelogo-1458744847928.png";

/// 频道广播标记，末尾空格是标记的一部分
const BROADCAST_MARKER: &str = "<!channel> ";

/// 仪表盘报表的固定基础路径
const DASHBOARD_REPORT_PATH: &str = "/rest/management/reports/create/";

/// 时间字段的渲染格式
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Slack消息附件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatAttachment {
    /// 附件标题，取监控规则名称
    pub title: String,
    /// 严重级别对应的颜色
    pub color: String,
    /// 多行正文
    pub text: String,
    /// 可选的标题链接，仅在配置了仪表盘链接时出现
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
}

/// Slack消息负载
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// 发送者显示名称
    pub username: String,
    /// 发送者头像URL
    pub icon_url: String,
    /// 引导文本
    pub text: String,
    /// 附件列表，固定为单元素
    pub attachments: Vec<ChatAttachment>,
}

/// 根据事件构建Slack消息并序列化为JSON字符串
///
/// # 参数
/// * `incident` - 平台下发的事件记录
/// * `notify_all` - 是否添加频道广播标记
/// * `dashboard_link` - 可选的仪表盘链接路径
///
/// # 返回
/// * `Result<String, serde_json::Error>` - 序列化后的JSON字符串
pub fn build_message(
    incident: &Incident,
    notify_all: bool,
    dashboard_link: Option<&str>,
) -> Result<String, serde_json::Error> {
    let message = ChatMessage {
        username: SENDER_USERNAME.to_string(),
        icon_url: SENDER_ICON_URL.to_string(),
        text: lead_text(incident, notify_all),
        attachments: vec![ChatAttachment {
            title: incident.rule_name.clone(),
            color: severity_color(incident).to_string(),
            text: body_text(incident),
            title_link: title_link(incident, dashboard_link),
        }],
    };

    serde_json::to_string(&message)
}

/// 构建引导文本
///
/// 事件既未触发也未结束时只保留可选的广播标记
fn lead_text(incident: &Incident, notify_all: bool) -> String {
    let mut text = String::new();

    if notify_all {
        text.push_str(BROADCAST_MARKER);
    }

    match incident.state {
        IncidentState::Open => text.push_str("Dynatrace incident triggered:"),
        IncidentState::Closed => text.push_str("Dynatrace incident ended:"),
        IncidentState::Unknown => {}
    }

    text
}

/// 选择严重级别颜色
///
/// 颜色映射只对触发中的事件生效，已结束或状态未知的事件一律使用`good`
fn severity_color(incident: &Incident) -> &'static str {
    if !incident.is_open() {
        return "good";
    }

    match &incident.severity {
        Severity::Error => "danger",
        Severity::Warning => "warning",
        Severity::Informational => "#439FE0",
        Severity::Other(_) => "good",
    }
}

/// 构建多行正文
///
/// 固定三行（开始时间、结束时间、消息）加每条违规一行，
/// 每行以单个换行符结尾，违规行保持平台下发顺序
fn body_text(incident: &Incident) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "Incident start: {}\n",
        format_time(&incident.start_time)
    ));
    body.push_str(&format!(
        "Incident end: {}\n",
        format_time(&incident.end_time)
    ));
    body.push_str(&format!("Message: {}\n", incident.message));

    for violation in &incident.violations {
        body.push_str(&format!(
            "Violated Measure: {} - Threshold: {}\n",
            violation.measure, violation.threshold
        ));
    }

    body
}

/// 构建可选的标题链接
///
/// 仅在仪表盘链接非空时生成，链接值按URL组件百分号编码，
/// 空格编码为`%20`
fn title_link(incident: &Incident, dashboard_link: Option<&str>) -> Option<String> {
    match dashboard_link {
        Some(link) if !link.is_empty() => Some(format!(
            "http://{}{}{}",
            incident.server_name,
            DASHBOARD_REPORT_PATH,
            urlencoding::encode(link)
        )),
        _ => None,
    }
}

fn format_time(time: &DateTime<Utc>) -> String {
    time.format(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incident::Violation;
    use chrono::TimeZone;

    fn sample_incident() -> Incident {
        Incident {
            rule_name: "High CPU".to_string(),
            start_time: Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
            state: IncidentState::Open,
            severity: Severity::Error,
            message: "CPU usage exceeded threshold".to_string(),
            server_name: "dynatrace.example.com".to_string(),
            violations: vec![],
        }
    }

    #[test]
    fn test_lead_text_open_with_broadcast() {
        let incident = sample_incident();
        let text = lead_text(&incident, true);
        assert_eq!(text, "<!channel> Dynatrace incident triggered:");
    }

    #[test]
    fn test_lead_text_closed_without_broadcast() {
        let mut incident = sample_incident();
        incident.state = IncidentState::Closed;
        let text = lead_text(&incident, false);
        assert_eq!(text, "Dynatrace incident ended:");
    }

    #[test]
    fn test_lead_text_unknown_state_keeps_only_marker() {
        let mut incident = sample_incident();
        incident.state = IncidentState::Unknown;

        assert_eq!(lead_text(&incident, true), "<!channel> ");
        assert_eq!(lead_text(&incident, false), "");
    }

    #[test]
    fn test_severity_color_open_incident() {
        let mut incident = sample_incident();

        assert_eq!(severity_color(&incident), "danger");

        incident.severity = Severity::Warning;
        assert_eq!(severity_color(&incident), "warning");

        incident.severity = Severity::Informational;
        assert_eq!(severity_color(&incident), "#439FE0");

        incident.severity = Severity::Other("Debug".to_string());
        assert_eq!(severity_color(&incident), "good");
    }

    #[test]
    fn test_severity_color_closed_incident_always_good() {
        let mut incident = sample_incident();
        incident.state = IncidentState::Closed;

        assert_eq!(severity_color(&incident), "good");

        incident.severity = Severity::Warning;
        assert_eq!(severity_color(&incident), "good");
    }

    #[test]
    fn test_body_text_without_violations_has_three_lines() {
        let incident = sample_incident();
        let body = body_text(&incident);

        assert_eq!(body.matches('\n').count(), 3);
        assert!(body.ends_with('\n'));
        assert_eq!(
            body,
            "Incident start: 2024-01-15 08:30:00\n\
             Incident end: 2024-01-15 09:00:00\n\
             Message: CPU usage exceeded threshold\n"
        );
    }

    #[test]
    fn test_body_text_violations_keep_input_order() {
        let mut incident = sample_incident();
        incident.violations = vec![
            Violation {
                measure: "CPU".to_string(),
                threshold: 95.0,
            },
            Violation {
                measure: "Memory".to_string(),
                threshold: 80.0,
            },
        ];

        let body = body_text(&incident);
        let lines: Vec<&str> = body.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "Violated Measure: CPU - Threshold: 95");
        assert_eq!(lines[4], "Violated Measure: Memory - Threshold: 80");
    }

    #[test]
    fn test_title_link_absent_without_dashboard_link() {
        let incident = sample_incident();

        assert!(title_link(&incident, None).is_none());
        assert!(title_link(&incident, Some("")).is_none());
    }

    #[test]
    fn test_title_link_percent_encodes_spaces() {
        let incident = sample_incident();
        let link = title_link(&incident, Some("host health report")).unwrap();

        assert_eq!(
            link,
            "http://dynatrace.example.com/rest/management/reports/create/host%20health%20report"
        );
    }

    #[test]
    fn test_build_message_omits_title_link_key() {
        let incident = sample_incident();
        let json = build_message(&incident, false, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let attachment = value["attachments"][0].as_object().unwrap();
        assert!(!attachment.contains_key("title_link"));
        assert_eq!(attachment["title"], "High CPU");
        assert_eq!(attachment["color"], "danger");
    }

    #[test]
    fn test_build_message_fixed_sender_fields() {
        let incident = sample_incident();
        let json = build_message(&incident, true, Some("cpu report")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["username"], "dynatrace");
        assert_eq!(value["icon_url"], SENDER_ICON_URL);
        assert_eq!(value["text"], "<!channel> Dynatrace incident triggered:");
        assert_eq!(value["attachments"].as_array().unwrap().len(), 1);
        assert_eq!(
            value["attachments"][0]["title_link"],
            "http://dynatrace.example.com/rest/management/reports/create/cpu%20report"
        );
    }
}
