//! 输出数据结构（JSON序列化）

use std::collections::BTreeMap;

use serde::Serialize;

/// 热榜单条新闻
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub mobile_url: String,
    /// 最佳排名
    pub rank: u32,
    pub source: String,
    pub source_name: String,
    /// 词组模式下命中的词组展示名
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_group: Option<String>,
}

/// RSS单篇文章
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RssItem {
    pub title: String,
    pub url: String,
    /// 已按配置时区格式化，无日期时为空串
    pub published_at: String,
    pub author: String,
    pub summary: String,
    pub feed_id: String,
    pub feed_name: String,
}

/// 单个来源（平台或订阅源）的结果块
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceBlock<T> {
    pub name: String,
    pub items: Vec<T>,
    pub count: usize,
}

impl<T> SourceBlock<T> {
    pub fn new(name: impl Into<String>, items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            name: name.into(),
            items,
            count,
        }
    }
}

/// 一次采集的结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionResult {
    pub success: bool,
    pub timestamp: String,
    pub platforms: BTreeMap<String, SourceBlock<NewsItem>>,
    pub feeds: BTreeMap<String, SourceBlock<RssItem>>,
    pub total_count: usize,
    pub failed: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CollectionResult {
    pub fn news_items(&self) -> impl Iterator<Item = &NewsItem> {
        self.platforms.values().flat_map(|block| block.items.iter())
    }

    pub fn rss_items(&self) -> impl Iterator<Item = &RssItem> {
        self.feeds.values().flat_map(|block| block.items.iter())
    }
}

/// 搜索命中类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    Platform,
    Rss,
}

/// 搜索命中项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub source: String,
    pub source_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    pub match_score: usize,
    /// 首个命中关键词的展示名
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
    #[serde(rename = "type")]
    pub kind: HitKind,
}

/// 搜索结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub success: bool,
    pub query: String,
    pub keywords: Vec<String>,
    pub results: Vec<SearchHit>,
    pub total_count: usize,
    pub failed: Vec<String>,
    pub timestamp: String,
}

/// 内置主题列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicListing {
    pub groups: Vec<String>,
    /// 主题 -> 关键词数量
    pub details: BTreeMap<String, usize>,
}

/// 命令行采集模式的合并输出
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CombinedReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<CollectionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rss: Option<CollectionResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_result_serialization() {
        let result = CollectionResult {
            timestamp: "2026-10-16 12:00:00".to_string(),
            error: Some("Unknown topic: x".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "success": false,
                "timestamp": "2026-10-16 12:00:00",
                "platforms": {},
                "feeds": {},
                "total_count": 0,
                "failed": [],
                "error": "Unknown topic: x"
            })
        );
    }

    #[test]
    fn test_hit_kind_serializes_as_type() {
        let hit = SearchHit {
            title: "t".to_string(),
            url: String::new(),
            source: "weibo".to_string(),
            source_name: "微博热搜".to_string(),
            rank: Some(1),
            published_at: None,
            match_score: 1,
            matched: Some("t".to_string()),
            kind: HitKind::Platform,
        };
        let value = serde_json::to_value(&hit).unwrap();
        assert_eq!(value["type"], "platform");
        assert!(value.get("published_at").is_none());
    }
}
