//! 抓取结果组装：标题过滤、排序、条数限制

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use news_collector_engine::{compile_tokens, matches_keywords, KeywordConfig, MatchOutcome, WordGroup, WordToken};

use super::model::{CollectionResult, NewsItem, RssItem, SourceBlock};
use crate::platform::CrawlOutcome;
use crate::rss::{is_fresh, FeedCrawlOutcome};
use crate::utils::format_datetime;

/// 标题过滤方式
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TitleFilter {
    /// 不过滤
    #[default]
    All,
    /// 任一关键词命中即保留
    Keywords {
        tokens: Vec<WordToken>,
        global_filters: Vec<String>,
    },
    /// 词组规则
    WordGroups(KeywordConfig),
}

impl TitleFilter {
    /// 关键词与全局过滤词都为空时退化为不过滤
    pub fn keywords<S: AsRef<str>>(words: &[S], global_filters: Vec<String>) -> Self {
        let tokens = compile_tokens(words.iter().map(|w| w.as_ref()).filter(|w: &&str| !w.trim().is_empty()));
        let global_filters: Vec<String> = global_filters.into_iter().filter(|f| !f.is_empty()).collect();
        if tokens.is_empty() && global_filters.is_empty() {
            return Self::All;
        }
        Self::Keywords { tokens, global_filters }
    }

    pub fn evaluate(&self, title: &str) -> MatchOutcome {
        match self {
            Self::All => MatchOutcome::AcceptAll,
            Self::Keywords { tokens, global_filters } => {
                if matches_keywords(title, tokens, global_filters) {
                    MatchOutcome::AcceptAll
                } else {
                    MatchOutcome::Rejected
                }
            }
            Self::WordGroups(config) => config.evaluate(title),
        }
    }

    fn groups(&self) -> &[WordGroup] {
        match self {
            Self::WordGroups(config) => &config.groups,
            _ => &[],
        }
    }
}

/// 按词组统计条数，超出 `@N` 上限的条目丢弃
struct GroupQuota<'a> {
    groups: &'a [WordGroup],
    taken: Vec<usize>,
}

impl<'a> GroupQuota<'a> {
    fn new(groups: &'a [WordGroup]) -> Self {
        Self {
            groups,
            taken: vec![0; groups.len()],
        }
    }

    fn admit(&mut self, group: Option<usize>) -> bool {
        let Some(idx) = group else {
            return true;
        };
        let Some(target) = self.groups.get(idx) else {
            return true;
        };
        if target.is_capped() && self.taken[idx] >= target.max_count {
            return false;
        }
        self.taken[idx] += 1;
        true
    }
}

fn limit(max_items: usize) -> usize {
    if max_items == 0 {
        usize::MAX
    } else {
        max_items
    }
}

/// 组装热榜结果
/// `requested` 为请求的平台数，失败数少于它即视为成功
pub fn assemble_platforms(
    crawl: CrawlOutcome,
    filter: &TitleFilter,
    max_items: usize,
    requested: usize,
    timestamp: String,
) -> CollectionResult {
    let mut result = CollectionResult {
        timestamp,
        ..Default::default()
    };

    for platform in crawl.results {
        let mut candidates: Vec<(NewsItem, Option<usize>)> = platform
            .titles
            .into_iter()
            .filter_map(|ranked| {
                let outcome = filter.evaluate(&ranked.title);
                if !outcome.is_match() {
                    return None;
                }
                let group = outcome.group_index();
                let item = NewsItem {
                    rank: ranked.best_rank(),
                    title: ranked.title,
                    url: ranked.url,
                    mobile_url: ranked.mobile_url,
                    source: platform.id.clone(),
                    source_name: platform.name.clone(),
                    matched_group: group
                        .and_then(|idx| filter.groups().get(idx))
                        .map(|g| g.display_name.clone()),
                };
                Some((item, group))
            })
            .collect();

        candidates.sort_by_key(|(item, _)| item.rank);

        let mut quota = GroupQuota::new(filter.groups());
        let items: Vec<NewsItem> = candidates
            .into_iter()
            .filter(|(_, group)| quota.admit(*group))
            .map(|(item, _)| item)
            .take(limit(max_items))
            .collect();

        result.total_count += items.len();
        // 同ID的后一个结果块覆盖前一个，计数同步扣除
        if let Some(replaced) = result.platforms.insert(platform.id, SourceBlock::new(platform.name, items)) {
            result.total_count -= replaced.count;
        }
    }

    result.success = crawl.failed.len() < requested;
    result.failed = crawl.failed;
    result
}

/// 组装RSS结果：先按每源上限截取，再做时效过滤
pub fn assemble_feeds(
    crawl: FeedCrawlOutcome,
    default_max_items: usize,
    max_age_days: u32,
    now: DateTime<Utc>,
    tz: Tz,
    timestamp: String,
) -> CollectionResult {
    let mut result = CollectionResult {
        timestamp,
        ..Default::default()
    };

    for (feed, entries) in crawl.results {
        let name = feed.display_name().to_string();
        let items: Vec<RssItem> = entries
            .into_iter()
            .take(limit(feed.max_items.unwrap_or(default_max_items)))
            .filter(|entry| is_fresh(entry.published, now, max_age_days))
            .map(|entry| RssItem {
                title: entry.title,
                url: entry.url,
                published_at: entry.published.map(|dt| format_datetime(dt, tz)).unwrap_or_default(),
                author: entry.author,
                summary: entry.summary,
                feed_id: feed.id.clone(),
                feed_name: name.clone(),
            })
            .collect();

        result.total_count += items.len();
        result.feeds.insert(feed.id, SourceBlock::new(name, items));
    }

    result.success = crawl.failed.len() < crawl.attempted;
    result.failed = crawl.failed;
    result
}
