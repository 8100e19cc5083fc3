use std::convert::Infallible;
use std::str::FromStr;

use super::group::{GroupSummary, WordGroup};
use super::token::WordToken;
use crate::matcher::{evaluate, MatchOutcome};

/// 关键词配置解析结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordConfig {
    /// 按声明顺序排列的词组（顺序即优先级）
    pub groups: Vec<WordGroup>,
    /// 所有组内过滤词的并集，按声明顺序
    pub filters: Vec<WordToken>,
    /// 全局过滤词（纯子串，优先级最高）
    pub global_filters: Vec<String>,
}

impl KeywordConfig {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.filters.is_empty() && self.global_filters.is_empty()
    }

    /// 以本配置自身的过滤词并集与全局过滤词评估标题
    pub fn evaluate(&self, title: &str) -> MatchOutcome {
        evaluate(title, &self.groups, &self.filters, &self.global_filters)
    }

    pub fn matches(&self, title: &str) -> bool {
        self.evaluate(title).is_match()
    }

    /// 追加全局过滤词（如命令行传入）
    pub fn extend_global_filters<I, S>(&mut self, filters: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.global_filters.extend(filters.into_iter().map(Into::into));
    }

    pub fn summaries(&self) -> Vec<GroupSummary> {
        self.groups.iter().map(WordGroup::summary).collect()
    }
}

impl FromStr for KeywordConfig {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(crate::compiler::parse_keyword_config(s))
    }
}
