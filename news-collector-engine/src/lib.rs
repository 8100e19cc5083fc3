// 核心数据结构：词元、词组、配置
pub mod core;
// 词元编译 + 配置解析
pub mod compiler;
// 词组判定 + 关键词打分
pub mod matcher;
// 内置主题目录 + 词元缓存
pub mod topic;
// 内核错误
pub mod error;
// 日志辅助
pub mod utils;

// 顶层导出常用类型
pub use crate::core::{GroupSummary, KeywordConfig, TokenMatcher, TokenSpec, WordGroup, WordToken};
pub use compiler::{
    compile_token, compile_tokens, compile_with_policy, parse_keyword_config,
    parse_keyword_config_strict, try_compile_token, CompilePolicy,
};
pub use error::{CoreError, CoreResult, TokenCompileError};
pub use matcher::{
    count_matches, evaluate, first_match_label, matches_keywords, matches_word_groups,
    MatchOutcome,
};
pub use topic::{
    global_catalog, resolve_topic, topic_group, topic_keywords, topic_names, topic_sizes, TopicCache,
    TopicCatalog,
    BUILTIN_TOPICS,
};
pub use utils::preview;
