//! NewsNow 热榜接口抓取
//! 响应格式：{"status": "success" | "cache", "items": [{"title", "url", "mobileUrl"}]}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Proxy};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::GlobalConfig;
use crate::error::{CollectorError, CollectorResult};
use crate::utils::{retry_async, HeaderConverter, RetryPolicy, BROWSER_HEADERS};

/// 接口返回的单条原始数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub title: String,
    pub url: String,
    pub mobile_url: String,
    /// 在原始列表中的位置（从1开始，被跳过的条目也占位）
    pub rank: u32,
}

/// 热榜数据源
#[async_trait]
pub trait PlatformSource: Send + Sync {
    /// 抓取单个平台（platform_id 为已替换别名的实际ID）
    async fn fetch(&self, platform_id: &str) -> CollectorResult<Vec<RawEntry>>;
}

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    items: Vec<Value>,
}

/// 解析接口响应体
pub fn parse_payload(text: &str) -> CollectorResult<Vec<RawEntry>> {
    let payload: Payload = serde_json::from_str(text)?;
    let status = payload.status.as_deref().unwrap_or("未知");
    if status != "success" && status != "cache" {
        return Err(CollectorError::BadStatus(status.to_string()));
    }

    let entries = payload
        .items
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            let title = item.get("title").and_then(coerce_title)?;
            Some(RawEntry {
                title,
                url: string_field(item, "url"),
                mobile_url: string_field(item, "mobileUrl"),
                rank: idx as u32 + 1,
            })
        })
        .collect();
    Ok(entries)
}

/// 标题转文本：null、浮点数、空白返回None，其余类型转为文本
pub fn coerce_title(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::Number(n) if n.is_f64() => return None,
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}

fn string_field(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// 基于 reqwest 的 NewsNow 抓取器
pub struct NewsNowFetcher {
    client: Client,
    api_url: String,
    retry: RetryPolicy,
}

impl NewsNowFetcher {
    pub fn new(config: &GlobalConfig) -> CollectorResult<Self> {
        let mut builder = Client::builder()
            .default_headers(HeaderConverter::from_pairs(BROWSER_HEADERS))
            .timeout(Duration::from_secs(config.http_timeout));
        if let Some(proxy) = config.proxy_url.as_deref().filter(|p| !p.trim().is_empty()) {
            builder = builder.proxy(Proxy::all(proxy)?);
        }

        Ok(Self {
            client: builder.build()?,
            api_url: config.api_url.clone(),
            retry: RetryPolicy::from_config(config),
        })
    }

    /// `{api_url}?id={id}&latest`
    pub fn request_url(&self, platform_id: &str) -> CollectorResult<Url> {
        let mut url = Url::parse_with_params(&self.api_url, &[("id", platform_id)])?;
        url.query_pairs_mut().append_key_only("latest");
        Ok(url)
    }

    async fn fetch_once(&self, platform_id: &str) -> CollectorResult<Vec<RawEntry>> {
        let url = self.request_url(platform_id)?;
        debug!("请求热榜：{}", url);
        let text = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_payload(&text)
    }
}

#[async_trait]
impl PlatformSource for NewsNowFetcher {
    async fn fetch(&self, platform_id: &str) -> CollectorResult<Vec<RawEntry>> {
        retry_async(&self.retry, platform_id, || self.fetch_once(platform_id)).await
    }
}
