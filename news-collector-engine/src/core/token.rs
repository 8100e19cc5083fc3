use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 运行时匹配器
/// 字面量在构建时即转为小写，正则统一以忽略大小写方式编译
#[derive(Debug, Clone)]
pub enum TokenMatcher {
    /// 包含匹配（小写子串）
    Literal(Arc<str>),
    /// 正则匹配（忽略大小写）
    Regex(Arc<Regex>),
}

impl TokenMatcher {
    /// 对已小写化的文本执行匹配
    #[inline(always)]
    pub fn matches_lower(&self, text_lower: &str) -> bool {
        match self {
            TokenMatcher::Literal(needle) => text_lower.contains(needle.as_ref()),
            TokenMatcher::Regex(regex) => regex.is_match(text_lower),
        }
    }
}

/// 词元的静态描述体（可序列化，用于结构比较和输出）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenSpec {
    pub word: String,
    pub is_regex: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// 一个配置词编译后的匹配单元
#[derive(Debug, Clone)]
pub struct WordToken {
    /// 字面量原文，或正则 `/…/` 内部的源码
    pub word: String,
    /// `word => 别名` 中的别名
    pub display_name: Option<String>,
    pub matcher: TokenMatcher,
}

impl WordToken {
    /// 构建字面量词元
    pub fn literal(word: impl Into<String>, display_name: Option<String>) -> Self {
        let word = word.into();
        let needle: Arc<str> = Arc::from(word.to_lowercase());
        Self {
            word,
            display_name,
            matcher: TokenMatcher::Literal(needle),
        }
    }

    /// 用已编译的正则构建词元
    pub fn regex(word: impl Into<String>, regex: Regex, display_name: Option<String>) -> Self {
        Self {
            word: word.into(),
            display_name,
            matcher: TokenMatcher::Regex(Arc::new(regex)),
        }
    }

    #[inline(always)]
    pub fn is_regex(&self) -> bool {
        matches!(self.matcher, TokenMatcher::Regex(_))
    }

    /// 文本为空的词元（如单独一行 `+`）
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// 命中时展示的标签：别名优先，否则原文
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.word)
    }

    #[inline(always)]
    pub fn matches_lower(&self, text_lower: &str) -> bool {
        self.matcher.matches_lower(text_lower)
    }

    /// 对任意大小写的文本匹配
    pub fn matches(&self, text: &str) -> bool {
        self.matches_lower(&text.to_lowercase())
    }

    pub fn spec(&self) -> TokenSpec {
        TokenSpec {
            word: self.word.clone(),
            is_regex: self.is_regex(),
            display_name: self.display_name.clone(),
        }
    }
}

/// 结构相等：原文、模式类型、别名一致即视为同一词元，不比较正则对象身份
impl PartialEq for WordToken {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
            && self.is_regex() == other.is_regex()
            && self.display_name == other.display_name
    }
}

impl Eq for WordToken {}
