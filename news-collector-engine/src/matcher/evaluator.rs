//! 词组匹配判定
//! 判定顺序（短路）：空标题 > 全局过滤 > 无词组全收 > 额外过滤词 > 按声明顺序逐组匹配

use crate::core::{WordGroup, WordToken};

/// 单个标题的匹配结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// 被过滤或没有词组通过
    Rejected,
    /// 未配置任何词组，全部接受
    AcceptAll,
    /// 首个通过的词组下标
    Group(usize),
}

impl MatchOutcome {
    #[inline(always)]
    pub fn is_match(&self) -> bool {
        !matches!(self, MatchOutcome::Rejected)
    }

    pub fn group_index(&self) -> Option<usize> {
        match self {
            MatchOutcome::Group(idx) => Some(*idx),
            _ => None,
        }
    }
}

/// 标题预处理：空白标题返回None，否则返回小写形式
#[inline]
pub(crate) fn normalize_title(title: &str) -> Option<String> {
    if title.trim().is_empty() {
        None
    } else {
        Some(title.to_lowercase())
    }
}

/// 全局过滤：任一非空过滤串是标题的子串（忽略大小写）即命中
pub(crate) fn hits_global_filter(title_lower: &str, global_filters: &[String]) -> bool {
    global_filters
        .iter()
        .filter(|word| !word.is_empty())
        .any(|word| title_lower.contains(&word.to_lowercase()))
}

/// 完整判定，返回命中的词组
/// `extra_filters` 由调用方合并（本函数不会从各词组自行推导组内过滤词）
pub fn evaluate(
    title: &str,
    groups: &[WordGroup],
    extra_filters: &[WordToken],
    global_filters: &[String],
) -> MatchOutcome {
    let Some(title_lower) = normalize_title(title) else {
        return MatchOutcome::Rejected;
    };

    if hits_global_filter(&title_lower, global_filters) {
        return MatchOutcome::Rejected;
    }

    if groups.is_empty() {
        return MatchOutcome::AcceptAll;
    }

    if extra_filters.iter().any(|t| t.matches_lower(&title_lower)) {
        return MatchOutcome::Rejected;
    }

    groups
        .iter()
        .position(|group| group.matches_lower(&title_lower))
        .map_or(MatchOutcome::Rejected, MatchOutcome::Group)
}

/// 布尔版本的词组判定
pub fn matches_word_groups(
    title: &str,
    groups: &[WordGroup],
    extra_filters: &[WordToken],
    global_filters: &[String],
) -> bool {
    evaluate(title, groups, extra_filters, global_filters).is_match()
}
