//! 采集门面：组合热榜抓取、RSS抓取、过滤与结果组装

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use chrono::Utc;
use news_collector_engine::{topic_group, topic_names, topic_sizes, KeywordConfig};
use tracing::{debug, info};

use crate::config::GlobalConfig;
use crate::error::CollectorResult;
use crate::platform::{
    all_platforms, crawl, default_platforms, list_platforms, NewsNowFetcher, PlatformListing, PlatformSource,
    PlatformSpec,
};
use crate::report::{
    assemble_feeds, assemble_platforms, compile_query, rank_hits, score_feeds, score_platforms, CollectionResult,
    SearchReport, TitleFilter, TopicListing,
};
use crate::rss::{crawl_feeds, FeedConfig, FeedSource, HttpFeedFetcher};
use crate::utils::{format_timestamp, Pacing};

/// 新闻采集器
pub struct NewsCollector {
    config: GlobalConfig,
    platforms: Arc<dyn PlatformSource>,
    feeds: Arc<dyn FeedSource>,
}

impl NewsCollector {
    /// 使用 HTTP 数据源创建采集器
    pub fn new(config: GlobalConfig) -> CollectorResult<Self> {
        let platforms = Arc::new(NewsNowFetcher::new(&config)?);
        let feeds = Arc::new(HttpFeedFetcher::new(&config)?);
        Ok(Self::with_sources(config, platforms, feeds))
    }

    /// 注入自定义数据源
    pub fn with_sources(config: GlobalConfig, platforms: Arc<dyn PlatformSource>, feeds: Arc<dyn FeedSource>) -> Self {
        Self {
            config,
            platforms,
            feeds,
        }
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    fn timestamp(&self) -> String {
        format_timestamp(self.config.timezone)
    }

    fn platform_pacing(&self) -> Pacing {
        Pacing::platforms(self.config.request_interval)
    }

    fn feed_pacing(&self) -> Pacing {
        Pacing::feeds(self.config.rss_request_interval)
    }

    /// 抓取热榜，未指定平台时使用默认列表
    pub async fn collect_news(
        &self,
        platforms: Option<&[PlatformSpec]>,
        filter: &TitleFilter,
        max_items: usize,
    ) -> CollectionResult {
        let platforms = platforms.map_or_else(default_platforms, <[PlatformSpec]>::to_vec);
        info!("开始抓取热榜，共{}个平台", platforms.len());

        let requested = platforms
            .iter()
            .map(PlatformSpec::resolved_id)
            .collect::<HashSet<_>>()
            .len();
        let outcome = crawl(self.platforms.as_ref(), &platforms, self.platform_pacing()).await;
        let result = assemble_platforms(outcome, filter, max_items, requested, self.timestamp());
        debug!("热榜抓取完成：保留{}条，失败{}个", result.total_count, result.failed.len());
        result
    }

    /// 抓取RSS订阅源，`max_items` 为未单独配置时的每源上限
    pub async fn collect_rss(&self, feeds: &[FeedConfig], max_items: usize) -> CollectionResult {
        info!("开始抓取订阅源，共{}个", feeds.len());
        let outcome = crawl_feeds(self.feeds.as_ref(), feeds, self.feed_pacing()).await;
        assemble_feeds(
            outcome,
            max_items,
            self.config.max_age_days,
            Utc::now(),
            self.config.timezone,
            self.timestamp(),
        )
    }

    /// 关键词搜索
    /// 指定了平台或未指定订阅源时搜索热榜；订阅源非空时同时搜索RSS
    pub async fn search_news(
        &self,
        query: &str,
        platforms: Option<&[PlatformSpec]>,
        feeds: Option<&[FeedConfig]>,
        max_items: usize,
    ) -> SearchReport {
        let (keywords, tokens) = compile_query(query);
        let mut results = Vec::new();
        let mut failed = Vec::new();

        if platforms.is_some() || feeds.is_none() {
            let collected = self.collect_news(platforms, &TitleFilter::All, max_items).await;
            results.extend(score_platforms(&collected, &tokens));
            failed.extend(collected.failed);
        }

        if let Some(feeds) = feeds.filter(|f| !f.is_empty()) {
            let collected = self.collect_rss(feeds, max_items).await;
            results.extend(score_feeds(&collected, &tokens));
            failed.extend(collected.failed);
        }

        rank_hits(&mut results);
        info!("搜索「{}」命中{}条", query, results.len());

        SearchReport {
            success: true,
            query: query.to_string(),
            keywords,
            total_count: results.len(),
            results,
            failed,
            timestamp: self.timestamp(),
        }
    }

    /// 按内置主题采集，未指定平台时抓取全部平台
    pub async fn collect_by_topic(
        &self,
        topic: &str,
        platforms: Option<&[PlatformSpec]>,
        max_items: usize,
        global_filters: &[String],
    ) -> CollectorResult<CollectionResult> {
        let group = topic_group(topic)?;
        let config = KeywordConfig {
            groups: vec![group],
            filters: Vec::new(),
            global_filters: global_filters.to_vec(),
        };

        let platforms = platforms.map_or_else(all_platforms, <[PlatformSpec]>::to_vec);
        Ok(self
            .collect_news(Some(&platforms), &TitleFilter::WordGroups(config), max_items)
            .await)
    }

    /// 按关键词配置（词组模式）采集
    pub async fn collect_with_config(
        &self,
        platforms: Option<&[PlatformSpec]>,
        config: &KeywordConfig,
        max_items: usize,
    ) -> CollectionResult {
        self.collect_news(platforms, &TitleFilter::WordGroups(config.clone()), max_items)
            .await
    }

    pub fn list_platforms() -> PlatformListing {
        list_platforms()
    }

    pub fn list_topics() -> TopicListing {
        TopicListing {
            groups: topic_names().into_iter().map(str::to_string).collect(),
            details: topic_sizes()
                .into_iter()
                .map(|(name, size)| (name.to_string(), size))
                .collect::<BTreeMap<_, _>>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CollectorError, CollectorResult};
    use crate::platform::RawEntry;
    use crate::rss::FeedEntry;
    use async_trait::async_trait;
    use news_collector_engine::{parse_keyword_config, CoreError};

    struct StubPlatforms;

    #[async_trait]
    impl PlatformSource for StubPlatforms {
        async fn fetch(&self, platform_id: &str) -> CollectorResult<Vec<RawEntry>> {
            let titles: &[&str] = match platform_id {
                "weibo" => &["OpenAI发布新模型", "华为Mate新机", "明星八卦", "华为广告"],
                "zhihu" => &["如何看待AI芯片", "华为Mate新机"],
                "36kr" => &["人工智能创业潮"],
                _ => return Err(CollectorError::BadStatus("error".to_string())),
            };
            Ok(titles
                .iter()
                .enumerate()
                .map(|(i, title)| RawEntry {
                    title: title.to_string(),
                    url: format!("https://{}/{}", platform_id, i),
                    mobile_url: String::new(),
                    rank: i as u32 + 1,
                })
                .collect())
        }
    }

    struct StubFeeds;

    #[async_trait]
    impl FeedSource for StubFeeds {
        async fn fetch(&self, _url: &str) -> CollectorResult<Vec<FeedEntry>> {
            Ok(vec![FeedEntry {
                title: "周报".to_string(),
                url: "https://feed/1".to_string(),
                published: Some(Utc::now()),
                author: "editor".to_string(),
                summary: "华为与AI".to_string(),
            }])
        }
    }

    fn collector() -> NewsCollector {
        let config = crate::config::ConfigManager::custom()
            .request_interval(0)
            .rss_request_interval(0)
            .build();
        NewsCollector::with_sources(config, Arc::new(StubPlatforms), Arc::new(StubFeeds))
    }

    fn specs(ids: &[&str]) -> Vec<PlatformSpec> {
        ids.iter().map(|id| PlatformSpec::from_id(id)).collect()
    }

    #[tokio::test]
    async fn test_collect_news_with_keywords() {
        let collector = collector();
        let platforms = specs(&["weibo", "douyin"]);
        let filter = TitleFilter::keywords(&["华为"], vec!["广告".to_string()]);
        let result = collector.collect_news(Some(&platforms), &filter, 20).await;

        assert!(result.success);
        assert_eq!(result.failed, vec!["douyin"]);
        assert_eq!(result.total_count, 1);
        assert_eq!(result.platforms["weibo"].items[0].title, "华为Mate新机");
        assert_eq!(result.platforms["weibo"].items[0].rank, 2);
    }

    #[tokio::test]
    async fn test_repeated_platforms_count_once() {
        let collector = collector();
        let platforms = specs(&["weibo", "weibo", "douyin", "douyin"]);
        let result = collector.collect_news(Some(&platforms), &TitleFilter::All, 0).await;

        assert!(result.success);
        assert_eq!(result.failed, vec!["douyin"]);
        assert_eq!(result.total_count, result.platforms["weibo"].count);
        assert_eq!(result.total_count, 4);
    }

    #[tokio::test]
    async fn test_collect_by_topic_uses_catalog() {
        let collector = collector();
        let platforms = specs(&["weibo", "zhihu", "36kr"]);
        let result = collector
            .collect_by_topic("ai", Some(&platforms), 20, &[])
            .await
            .unwrap();

        let titles: Vec<_> = result.news_items().map(|i| i.title.as_str()).collect();
        assert!(titles.contains(&"OpenAI发布新模型"));
        assert!(titles.contains(&"人工智能创业潮"));
        assert!(!titles.contains(&"明星八卦"));
        assert!(result.news_items().all(|i| i.matched_group.as_deref() == Some("AI")));
    }

    #[tokio::test]
    async fn test_unknown_topic_is_error() {
        let err = collector()
            .collect_by_topic("足球", None, 20, &[])
            .await
            .unwrap_err();
        assert!(matches!(err, CollectorError::Core(CoreError::UnknownTopic { .. })));
        assert!(err.to_string().contains("Available"));
    }

    #[tokio::test]
    async fn test_collect_with_config() {
        let config = parse_keyword_config("[GLOBAL_FILTER]\n广告\n\n[WORD_GROUPS]\n+华为\nMate");
        let platforms = specs(&["weibo", "zhihu"]);
        let result = collector().collect_with_config(Some(&platforms), &config, 20).await;
        assert_eq!(result.total_count, 2);
        assert!(result.failed.is_empty());
    }

    #[tokio::test]
    async fn test_collect_rss() {
        let feeds = FeedConfig::from_urls(&["https://feed/rss"]);
        let result = collector().collect_rss(&feeds, 20).await;
        assert!(result.success);
        assert_eq!(result.feeds["rss_0"].items[0].author, "editor");
        assert_eq!(result.feeds["rss_0"].name, "https://feed/rss");
    }

    #[tokio::test]
    async fn test_search_across_platforms_and_feeds() {
        let platforms = specs(&["weibo", "zhihu"]);
        let feeds = FeedConfig::from_urls(&["https://feed/rss"]);
        let report = collector()
            .search_news("华为 AI", Some(&platforms), Some(&feeds), 20)
            .await;

        assert!(report.success);
        assert_eq!(report.keywords, vec!["华为", "AI"]);
        assert_eq!(report.total_count, report.results.len());
        assert_eq!(report.results[0].title, "周报");
        assert_eq!(report.results[0].match_score, 2);
        assert!(report.results.windows(2).all(|w| w[0].match_score >= w[1].match_score));
    }

    #[test]
    fn test_list_topics() {
        let listing = NewsCollector::list_topics();
        assert_eq!(listing.groups.len(), listing.details.len());
        assert!(listing.details["AI"] > 0);
    }
}
