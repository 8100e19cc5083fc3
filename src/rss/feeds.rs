//! 订阅源配置与批量抓取

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::fetcher::{FeedEntry, FeedSource};
use crate::utils::Pacing;

/// 单个订阅源配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    /// 覆盖默认的每源条数上限
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl FeedConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            max_items: None,
        }
    }

    /// 命令行传入的URL列表：ID为 rss_{序号}，名称为URL
    pub fn from_urls<S: AsRef<str>>(urls: &[S]) -> Vec<Self> {
        urls.iter()
            .enumerate()
            .map(|(i, url)| Self::new(format!("rss_{}", i), url.as_ref(), url.as_ref()))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty() && !self.url.trim().is_empty()
    }

    /// 展示名称，缺省时用ID
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedCrawlOutcome {
    pub results: Vec<(FeedConfig, Vec<FeedEntry>)>,
    pub failed: Vec<String>,
    /// 参与抓取的有效订阅源数量
    pub attempted: usize,
}

/// 依次抓取订阅源，缺少ID或URL的配置直接跳过
pub async fn crawl_feeds(source: &dyn FeedSource, feeds: &[FeedConfig], pacing: Pacing) -> FeedCrawlOutcome {
    let mut outcome = FeedCrawlOutcome::default();

    for feed in feeds.iter().filter(|f| f.is_valid()) {
        if outcome.attempted > 0 {
            pacing.pause().await;
        }
        outcome.attempted += 1;

        match source.fetch(&feed.url).await {
            Ok(entries) => {
                info!("[{}] 订阅源获取成功，共{}篇", feed.display_name(), entries.len());
                outcome.results.push((feed.clone(), entries));
            }
            Err(e) => {
                warn!("[{}] 订阅源获取失败：{}", feed.display_name(), e);
                outcome.failed.push(feed.id.clone());
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CollectorError, CollectorResult};
    use async_trait::async_trait;

    struct StubFeeds;

    #[async_trait]
    impl FeedSource for StubFeeds {
        async fn fetch(&self, url: &str) -> CollectorResult<Vec<FeedEntry>> {
            if url.contains("broken") {
                return Err(CollectorError::FeedParseError("bad xml".to_string()));
            }
            Ok(vec![FeedEntry {
                title: format!("from {}", url),
                url: url.to_string(),
                published: None,
                author: String::new(),
                summary: String::new(),
            }])
        }
    }

    #[test]
    fn test_from_urls() {
        let feeds = FeedConfig::from_urls(&["https://a/rss", "https://b/atom"]);
        assert_eq!(feeds[1].id, "rss_1");
        assert_eq!(feeds[1].name, "https://b/atom");
        assert!(feeds.iter().all(FeedConfig::is_valid));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let feed: FeedConfig = serde_json::from_str(r#"{"id": "hn", "url": "https://hn/rss"}"#).unwrap();
        assert_eq!(feed.display_name(), "hn");
        assert_eq!(feed.max_items, None);
    }

    #[tokio::test]
    async fn test_crawl_skips_invalid_and_records_failures() {
        let feeds = vec![
            FeedConfig::new("ok", "OK", "https://ok/rss"),
            FeedConfig::new("", "NoId", "https://x/rss"),
            FeedConfig::new("bad", "Bad", "https://broken/rss"),
        ];
        let outcome = crawl_feeds(&StubFeeds, &feeds, Pacing::none()).await;
        assert_eq!(outcome.attempted, 2);
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].0.id, "ok");
        assert_eq!(outcome.failed, vec!["bad"]);
    }
}
