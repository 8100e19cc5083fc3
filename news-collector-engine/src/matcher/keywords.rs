//! 简单关键词列表匹配（无词组语义）
//! 用于搜索打分与关键词过滤：每个词元独立判定

use super::evaluator::{hits_global_filter, normalize_title};
use crate::core::WordToken;

/// 任一关键词命中且未触发全局过滤即为匹配；关键词为空时全部接受
pub fn matches_keywords(text: &str, tokens: &[WordToken], global_filters: &[String]) -> bool {
    let Some(text_lower) = normalize_title(text) else {
        return false;
    };

    if hits_global_filter(&text_lower, global_filters) {
        return false;
    }

    tokens.is_empty() || tokens.iter().any(|t| t.matches_lower(&text_lower))
}

/// 命中的关键词个数（搜索排序分）
pub fn count_matches(text: &str, tokens: &[WordToken]) -> usize {
    if tokens.is_empty() {
        return 0;
    }
    let Some(text_lower) = normalize_title(text) else {
        return 0;
    };

    tokens.iter().filter(|t| t.matches_lower(&text_lower)).count()
}

/// 首个命中关键词的展示标签
pub fn first_match_label<'a>(text: &str, tokens: &'a [WordToken]) -> Option<&'a str> {
    if tokens.is_empty() {
        return None;
    }
    let text_lower = normalize_title(text)?;

    tokens
        .iter()
        .find(|t| t.matches_lower(&text_lower))
        .map(WordToken::label)
}
