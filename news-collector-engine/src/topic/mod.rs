//! 主题目录：内置主题名到关键词列表的静态映射，按需合成词组
pub mod cache;
pub mod catalog;

use once_cell::sync::Lazy;
use std::sync::Arc;

pub use self::cache::TopicCache;
pub use self::catalog::BUILTIN_TOPICS;

use crate::core::{WordGroup, WordToken};
use crate::error::{CoreError, CoreResult};

type TopicTable = &'static [(&'static str, &'static [&'static str])];

/// 主题目录
#[derive(Debug)]
pub struct TopicCatalog {
    topics: TopicTable,
    cache: TopicCache,
}

impl TopicCatalog {
    /// 内置主题表
    pub fn builtin() -> Self {
        Self::with_topics(BUILTIN_TOPICS)
    }

    pub fn with_topics(topics: TopicTable) -> Self {
        Self {
            topics,
            cache: TopicCache::new(),
        }
    }

    /// 全部主题名（按表顺序）
    pub fn names(&self) -> Vec<&'static str> {
        self.topics.iter().map(|(name, _)| *name).collect()
    }

    /// 主题名与关键词数量
    pub fn sizes(&self) -> Vec<(&'static str, usize)> {
        self.topics
            .iter()
            .map(|(name, keywords)| (*name, keywords.len()))
            .collect()
    }

    /// 忽略大小写查找主题
    fn lookup(&self, name: &str) -> CoreResult<(&'static str, &'static [&'static str])> {
        let wanted = name.to_lowercase();
        self.topics
            .iter()
            .find(|(key, _)| key.to_lowercase() == wanted)
            .copied()
            .ok_or_else(|| CoreError::UnknownTopic {
                name: name.to_string(),
                available: self.names().into_iter().map(String::from).collect(),
            })
    }

    /// 规范化主题名（如 "ai" -> "AI"）
    pub fn canonical_name(&self, name: &str) -> CoreResult<&'static str> {
        self.lookup(name).map(|(key, _)| key)
    }

    /// 主题的原始关键词
    pub fn keywords(&self, name: &str) -> CoreResult<&'static [&'static str]> {
        self.lookup(name).map(|(_, keywords)| keywords)
    }

    /// 主题编译后的词元（缓存）
    pub fn resolve(&self, name: &str) -> CoreResult<Arc<[WordToken]>> {
        let (key, keywords) = self.lookup(name)?;
        Ok(self.cache.get_or_compile(key, keywords))
    }

    /// 以主题关键词为普通词合成单个词组
    pub fn group(&self, name: &str) -> CoreResult<WordGroup> {
        let (key, keywords) = self.lookup(name)?;
        let tokens = self.cache.get_or_compile(key, keywords);
        WordGroup::new(Vec::new(), tokens.to_vec(), Vec::new(), Some(key.to_string()), 0)
            .map(|mut group| {
                group.group_key = key.to_string();
                group
            })
            .ok_or_else(|| CoreError::EmptyTopic(key.to_string()))
    }

    pub fn cache(&self) -> &TopicCache {
        &self.cache
    }
}

impl Default for TopicCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// 全局主题目录（进程内只读共享）
static GLOBAL_TOPIC_CATALOG: Lazy<TopicCatalog> = Lazy::new(TopicCatalog::builtin);

pub fn global_catalog() -> &'static TopicCatalog {
    &GLOBAL_TOPIC_CATALOG
}

pub fn resolve_topic(name: &str) -> CoreResult<Arc<[WordToken]>> {
    GLOBAL_TOPIC_CATALOG.resolve(name)
}

pub fn topic_group(name: &str) -> CoreResult<WordGroup> {
    GLOBAL_TOPIC_CATALOG.group(name)
}

pub fn topic_names() -> Vec<&'static str> {
    GLOBAL_TOPIC_CATALOG.names()
}

pub fn topic_keywords(name: &str) -> CoreResult<&'static [&'static str]> {
    GLOBAL_TOPIC_CATALOG.keywords(name)
}

/// 主题 -> 关键词数量
pub fn topic_sizes() -> Vec<(&'static str, usize)> {
    GLOBAL_TOPIC_CATALOG.sizes()
}
