use serde::{Deserialize, Serialize};

use super::token::{TokenSpec, WordToken};

/// 展示名称各部分之间的分隔符
pub const DISPLAY_SEPARATOR: &str = " / ";

/// 词组：一条匹配规则
/// 必须词全部命中（AND）后，普通词任一命中（OR）即视为匹配
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGroup {
    pub required: Vec<WordToken>,
    pub normal: Vec<WordToken>,
    /// 组内过滤词，仅在调用方把它们并入额外过滤列表时生效
    pub filter: Vec<WordToken>,
    pub group_key: String,
    pub display_name: String,
    /// `@N` 上限，0 表示不限
    pub max_count: usize,
}

impl WordGroup {
    /// 构建词组，必须词与普通词都为空时返回None
    pub fn new(
        required: Vec<WordToken>,
        normal: Vec<WordToken>,
        filter: Vec<WordToken>,
        alias: Option<String>,
        max_count: usize,
    ) -> Option<Self> {
        if required.is_empty() && normal.is_empty() {
            return None;
        }

        let key_source = if normal.is_empty() { &required } else { &normal };
        let group_key = key_source
            .iter()
            .map(|t| t.word.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let display_name = alias.unwrap_or_else(|| {
            required
                .iter()
                .chain(normal.iter())
                .map(WordToken::label)
                .collect::<Vec<_>>()
                .join(DISPLAY_SEPARATOR)
        });

        Some(Self {
            required,
            normal,
            filter,
            group_key,
            display_name,
            max_count,
        })
    }

    /// 对已小写化的标题判断本组是否通过
    pub fn matches_lower(&self, title_lower: &str) -> bool {
        if self.required.is_empty() && self.normal.is_empty() {
            return false;
        }

        if !self.required.iter().all(|t| t.matches_lower(title_lower)) {
            return false;
        }

        self.normal.is_empty() || self.normal.iter().any(|t| t.matches_lower(title_lower))
    }

    /// 本组是否设置了条数上限
    pub fn is_capped(&self) -> bool {
        self.max_count > 0
    }

    pub fn summary(&self) -> GroupSummary {
        GroupSummary {
            group_key: self.group_key.clone(),
            display_name: self.display_name.clone(),
            required: self.required.iter().map(WordToken::spec).collect(),
            normal: self.normal.iter().map(WordToken::spec).collect(),
            filter: self.filter.iter().map(WordToken::spec).collect(),
            max_count: self.max_count,
        }
    }
}

/// 词组的可序列化描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub group_key: String,
    pub display_name: String,
    pub required: Vec<TokenSpec>,
    pub normal: Vec<TokenSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<TokenSpec>,
    pub max_count: usize,
}
