// 订阅源抓取与解析
pub mod fetcher;
// 订阅源配置与批量抓取
pub mod feeds;
// 时效过滤
pub mod freshness;

pub use feeds::{crawl_feeds, FeedConfig, FeedCrawlOutcome};
pub use fetcher::{parse_feed, FeedEntry, FeedSource, HttpFeedFetcher};
pub use freshness::is_fresh;
