//! RSS/Atom 订阅源抓取与解析

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use feed_rs::parser;
use reqwest::{Client, Proxy};
use tracing::debug;

use crate::config::GlobalConfig;
use crate::error::{CollectorError, CollectorResult};
use crate::utils::{clean_summary, HeaderConverter, FEED_HEADERS};

/// 订阅源中的一篇文章
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub url: String,
    pub published: Option<DateTime<Utc>>,
    pub author: String,
    /// 已去除HTML并截断
    pub summary: String,
}

/// 订阅源数据源
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self, url: &str) -> CollectorResult<Vec<FeedEntry>>;
}

/// 解析 RSS/Atom 文档，无标题的文章跳过
pub fn parse_feed(bytes: &[u8]) -> CollectorResult<Vec<FeedEntry>> {
    let feed = parser::parse(bytes).map_err(|e| CollectorError::FeedParseError(e.to_string()))?;

    let entries = feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let title = entry.title.map(|t| t.content.trim().to_string()).filter(|t| !t.is_empty())?;
            Some(FeedEntry {
                title,
                url: entry.links.first().map(|l| l.href.clone()).unwrap_or_default(),
                published: entry.published.or(entry.updated),
                author: entry.authors.first().map(|a| a.name.clone()).unwrap_or_default(),
                summary: entry.summary.map(|s| clean_summary(&s.content)).unwrap_or_default(),
            })
        })
        .collect();
    Ok(entries)
}

/// 基于 reqwest + feed-rs 的抓取器
pub struct HttpFeedFetcher {
    client: Client,
}

impl HttpFeedFetcher {
    pub fn new(config: &GlobalConfig) -> CollectorResult<Self> {
        let mut builder = Client::builder()
            .default_headers(HeaderConverter::from_pairs(FEED_HEADERS))
            .timeout(Duration::from_secs(config.rss_timeout));
        if let Some(proxy) = config.proxy_url.as_deref().filter(|p| !p.trim().is_empty()) {
            builder = builder.proxy(Proxy::all(proxy)?);
        }
        Ok(Self { client: builder.build()? })
    }
}

#[async_trait]
impl FeedSource for HttpFeedFetcher {
    async fn fetch(&self, url: &str) -> CollectorResult<Vec<FeedEntry>> {
        debug!("请求订阅源：{}", url);
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        parse_feed(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Tech</title>
    <link>https://example.com</link>
    <description>demo</description>
    <item>
      <title>  芯片新进展  </title>
      <link>https://example.com/1</link>
      <description>&lt;p&gt;国产&lt;b&gt;芯片&lt;/b&gt;突破&lt;/p&gt;</description>
      <author>editor@example.com (Editor)</author>
      <pubDate>Mon, 12 Oct 2026 08:00:00 GMT</pubDate>
    </item>
    <item>
      <title></title>
      <link>https://example.com/2</link>
    </item>
    <item>
      <title>No date</title>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn test_parse_rss() {
        let entries = parse_feed(RSS.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "芯片新进展");
        assert_eq!(entries[0].url, "https://example.com/1");
        assert_eq!(entries[0].summary, "国产芯片突破");
        assert!(entries[0].published.is_some());
        assert_eq!(entries[1].title, "No date");
        assert_eq!(entries[1].url, "");
        assert!(entries[1].published.is_none());
    }

    #[test]
    fn test_parse_garbage_is_feed_error() {
        assert!(matches!(
            parse_feed(b"<html>not a feed"),
            Err(CollectorError::FeedParseError(_))
        ));
    }
}
