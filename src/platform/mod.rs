// 平台目录
pub mod catalog;
// 热榜接口抓取
pub mod fetcher;
// 多平台抓取与排名合并
pub mod crawler;

pub use catalog::{
    all_platforms, default_platforms, list_platforms, platform_name, resolve_alias, PlatformListing, PlatformSpec,
    DEFAULT_PLATFORMS, PLATFORM_ALIASES, PLATFORM_NAMES,
};
pub use crawler::{crawl, merge_entries, CrawlOutcome, PlatformTitles, RankedTitle};
pub use fetcher::{coerce_title, parse_payload, NewsNowFetcher, PlatformSource, RawEntry};
