//! news-collector-engine 内核错误定义
//! 内核层只关心规则编译与主题解析，与抓取/输出层错误解耦，基于thiserror实现
use thiserror::Error;

use regex::Error as RegexError;

/// 单个词元编译失败
/// 携带退化为字面量匹配所需的全部信息，由调用方的策略层决定是否降级
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenCompileError {
    /// `/…/` 包裹的正则无法编译
    #[error("Invalid regex pattern '/{pattern}/': {source}")]
    InvalidRegex {
        /// 斜杠内的正则源码
        pattern: String,
        /// 去掉别名后的完整原文（含斜杠），降级时作为字面量
        literal: String,
        /// `=>` 之后的显示名称
        display_name: Option<String>,
        #[source]
        source: RegexError,
    },
}

/// 内核核心错误枚举
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// 主题名不在内置主题表中（错误信息列出全部可用主题）
    #[error("Unknown topic: {name}. Available: {}", available.join(", "))]
    UnknownTopic {
        name: String,
        available: Vec<String>,
    },

    /// 主题存在但没有任何关键词
    #[error("Topic has no keywords: {0}")]
    EmptyTopic(String),

    /// 严格模式下词元编译失败
    #[error("Token compilation failed: {0}")]
    TokenCompileError(#[from] TokenCompileError),
}

/// 内核层全局Result类型别名
pub type CoreResult<T> = Result<T, CoreError>;
