//! 全局配置管理,存储所有可配置项

use std::path::Path;

use chrono_tz::Tz;
use news_collector_engine::{parse_keyword_config, KeywordConfig};
use tracing::debug;

use crate::error::CollectorResult;

/// NewsNow 热榜接口
pub const DEFAULT_API_URL: &str = "https://newsnow.busiyi.world/api/s";

/// 时间戳使用的时区
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Shanghai;

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 热榜接口地址
    pub api_url: String,
    // 代理地址（http/https/socks）
    pub proxy_url: Option<String>,
    // 热榜请求超时（单位：秒）
    pub http_timeout: u64,
    // 热榜平台间请求间隔（单位：毫秒）
    pub request_interval: u64,
    // 单个平台的最大重试次数（不含首次）
    pub max_retries: u32,
    // 重试等待区间（单位：秒）
    pub min_retry_wait: u64,
    pub max_retry_wait: u64,
    // RSS请求超时（单位：秒）
    pub rss_timeout: u64,
    // RSS订阅源间请求间隔（单位：毫秒）
    pub rss_request_interval: u64,
    // RSS文章最大保留天数，0表示不过滤
    pub max_age_days: u32,
    // 时间戳时区
    pub timezone: Tz,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            proxy_url: None,
            http_timeout: 10,
            request_interval: 100,
            max_retries: 2,
            min_retry_wait: 3,
            max_retry_wait: 5,
            rss_timeout: 15,
            rss_request_interval: 1000,
            max_age_days: 3,
            timezone: DEFAULT_TIMEZONE,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }

    /// 读取关键词配置文件（UTF-8，词组/区域/前缀语法）
    pub async fn load_keyword_file(path: impl AsRef<Path>) -> CollectorResult<KeywordConfig> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await?;
        let config = parse_keyword_config(&text);
        debug!(
            "关键词配置加载完成：{}，词组{}个，过滤词{}个，全局过滤词{}个",
            path.display(),
            config.groups.len(),
            config.filters.len(),
            config.global_filters.len()
        );
        for summary in config.summaries() {
            debug!(
                "词组[{}]：必须词{}个，普通词{}个，过滤词{}个，上限{}",
                summary.display_name,
                summary.required.len(),
                summary.normal.len(),
                summary.filter.len(),
                summary.max_count
            );
        }
        Ok(config)
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    pub fn proxy_url(mut self, url: Option<String>) -> Self {
        self.config.proxy_url = url;
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn request_interval(mut self, millis: u64) -> Self {
        self.config.request_interval = millis;
        self
    }

    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// 重试等待区间，min大于max时交换
    pub fn retry_wait(mut self, min_secs: u64, max_secs: u64) -> Self {
        self.config.min_retry_wait = min_secs.min(max_secs);
        self.config.max_retry_wait = min_secs.max(max_secs);
        self
    }

    pub fn rss_timeout(mut self, timeout: u64) -> Self {
        self.config.rss_timeout = timeout;
        self
    }

    pub fn rss_request_interval(mut self, millis: u64) -> Self {
        self.config.rss_request_interval = millis;
        self
    }

    pub fn max_age_days(mut self, days: u32) -> Self {
        self.config.max_age_days = days;
        self
    }

    pub fn timezone(mut self, tz: Tz) -> Self {
        self.config.timezone = tz;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
