//! news-collector - 热榜与RSS一次性采集工具，支持关键词、词组与主题过滤

// 导出全局错误类型
pub use self::error::{CollectorError, CollectorResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, GlobalConfig, DEFAULT_API_URL, DEFAULT_TIMEZONE};

// 导出热榜模块核心接口
pub use self::platform::{
    crawl, list_platforms, CrawlOutcome, NewsNowFetcher, PlatformListing, PlatformSource, PlatformSpec, RawEntry,
    RankedTitle,
};

// 导出RSS模块核心接口
pub use self::rss::{crawl_feeds, FeedConfig, FeedEntry, FeedSource, HttpFeedFetcher};

// 导出结果模块核心接口
pub use self::report::{
    CollectionResult, CombinedReport, NewsItem, RssItem, SearchHit, SearchReport, SourceBlock, TitleFilter,
    TopicListing,
};

// 导出采集门面
pub use self::collector::{global_collector, init_collector, init_collector_with_config, NewsCollector};

// 导出匹配内核常用接口
pub use news_collector_engine::{
    parse_keyword_config, resolve_topic, topic_group, topic_names, KeywordConfig, MatchOutcome, WordGroup, WordToken,
};

// 声明所有子模块
pub mod collector;
pub mod config;
pub mod error;
pub mod platform;
pub mod report;
pub mod rss;
pub mod utils;
