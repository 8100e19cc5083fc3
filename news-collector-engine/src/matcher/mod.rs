//! 匹配模块：词组判定与关键词打分
pub mod evaluator;
pub mod keywords;

pub use self::evaluator::{evaluate, matches_word_groups, MatchOutcome};
pub use self::keywords::{count_matches, first_match_label, matches_keywords};
