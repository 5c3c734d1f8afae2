//! 配置访问模块
//!
//! 宿主平台通过配置访问器向插件提供每次调用的三个配置值

/// 动作配置访问器trait
///
/// 插件在处理每个事件前重新读取配置，宿主在批次中途更新配置时
/// 后续事件使用新值
pub trait ActionConfig: Send + Sync {
    /// 是否在引导文本前添加频道广播标记
    fn notify_all(&self) -> bool;

    /// 可选的仪表盘链接路径
    ///
    /// `None`或空字符串均视为未配置
    fn dashboard_link(&self) -> Option<String>;

    /// 目标webhook URL
    fn webhook_url(&self) -> String;
}

/// 固定值配置实现
#[derive(Debug, Clone)]
pub struct StaticConfig {
    /// 广播标记开关
    pub notify_all: bool,
    /// 仪表盘链接路径
    pub dashboard_link: Option<String>,
    /// webhook URL
    pub webhook_url: String,
}

impl ActionConfig for StaticConfig {
    fn notify_all(&self) -> bool {
        self.notify_all
    }

    fn dashboard_link(&self) -> Option<String> {
        self.dashboard_link.clone()
    }

    fn webhook_url(&self) -> String {
        self.webhook_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_config_accessors() {
        let config = StaticConfig {
            notify_all: true,
            dashboard_link: Some("host health".to_string()),
            webhook_url: "https://hooks.slack.com/services/T0/B0/x".to_string(),
        };

        assert!(config.notify_all());
        assert_eq!(config.dashboard_link(), Some("host health".to_string()));
        assert_eq!(
            config.webhook_url(),
            "https://hooks.slack.com/services/T0/B0/x"
        );
    }

    #[test]
    fn test_static_config_without_dashboard_link() {
        let config = StaticConfig {
            notify_all: false,
            dashboard_link: None,
            webhook_url: "https://hooks.slack.com/services/T0/B0/x".to_string(),
        };

        assert!(!config.notify_all());
        assert!(config.dashboard_link().is_none());
    }
}
