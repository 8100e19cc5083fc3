//! 词元编译器
//! 把单行配置词（可带 `=> 别名`，可为 `/正则/`）编译为 [`WordToken`]

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::core::WordToken;
use crate::error::{CoreResult, TokenCompileError};
use crate::utils::preview::preview_compact;

/// 正则词的外形：`/pattern/` 后可跟小写标志位（标志位被接受但不生效）
static REGEX_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/(.+)/[a-z]*$").unwrap());

/// 别名分隔符
const ALIAS_DELIMITER: &str = "=>";

/// 编译失败时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompilePolicy {
    /// 记录警告并退化为字面量匹配
    #[default]
    Lenient,
    /// 直接返回错误
    Strict,
}

/// 拆分 `word => alias`，两侧去空白，空别名视为无别名
fn split_alias(raw: &str) -> (&str, Option<String>) {
    match raw.split_once(ALIAS_DELIMITER) {
        Some((word, alias)) => {
            let alias = alias.trim();
            let alias = (!alias.is_empty()).then(|| alias.to_string());
            (word.trim(), alias)
        }
        None => (raw.trim(), None),
    }
}

/// 编译单个词元，正则非法时返回携带降级信息的错误
pub fn try_compile_token(raw: &str) -> Result<WordToken, TokenCompileError> {
    let (body, display_name) = split_alias(raw);

    if let Some(caps) = REGEX_WORD.captures(body) {
        let pattern = &caps[1];
        return match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(regex) => Ok(WordToken::regex(pattern, regex, display_name)),
            Err(source) => Err(TokenCompileError::InvalidRegex {
                pattern: pattern.to_string(),
                literal: body.to_string(),
                display_name,
                source,
            }),
        };
    }

    Ok(WordToken::literal(body, display_name))
}

/// 编译单个词元，永不失败
/// 正则非法时记录警告，并把去掉别名后的完整原文（含斜杠）当作字面量
pub fn compile_token(raw: &str) -> WordToken {
    try_compile_token(raw).unwrap_or_else(degrade_to_literal)
}

/// 按策略编译
pub fn compile_with_policy(raw: &str, policy: CompilePolicy) -> CoreResult<WordToken> {
    match policy {
        CompilePolicy::Lenient => Ok(compile_token(raw)),
        CompilePolicy::Strict => Ok(try_compile_token(raw)?),
    }
}

/// 按顺序编译关键词列表
pub fn compile_tokens<I, S>(raws: I) -> Vec<WordToken>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raws.into_iter().map(|raw| compile_token(raw.as_ref())).collect()
}

fn degrade_to_literal(err: TokenCompileError) -> WordToken {
    match err {
        TokenCompileError::InvalidRegex {
            pattern,
            literal,
            display_name,
            source,
        } => {
            log::warn!(
                "Invalid regex pattern '/{}/', matching as literal text: {}",
                preview_compact(&pattern, 60),
                source
            );
            WordToken::literal(literal, display_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_plain_word_is_literal() {
        let token = compile_token("  人工智能  ");
        assert!(!token.is_regex());
        assert_eq!(token.word, "人工智能");
        assert_eq!(token.display_name, None);
    }

    #[test]
    fn test_alias_extraction() {
        let token = compile_token("京东 => JD");
        assert_eq!(token.word, "京东");
        assert_eq!(token.display_name.as_deref(), Some("JD"));
        assert!(!token.is_regex());
    }

    #[test]
    fn test_empty_alias_is_dropped() {
        let token = compile_token("京东 =>   ");
        assert_eq!(token.word, "京东");
        assert_eq!(token.display_name, None);
    }

    #[test]
    fn test_alias_splits_on_first_delimiter() {
        let token = compile_token("a => b => c");
        assert_eq!(token.word, "a");
        assert_eq!(token.display_name.as_deref(), Some("b => c"));
    }

    #[test]
    fn test_regex_is_case_insensitive() {
        let token = compile_token("/foo|bar/");
        assert!(token.is_regex());
        assert_eq!(token.word, "foo|bar");
        assert!(token.matches("FOO TEST"));
        assert!(!token.matches("baz"));
    }

    #[test]
    fn test_regex_with_alias_and_flags() {
        let token = compile_token("/京东|刘强东/i => 京东");
        assert!(token.is_regex());
        assert_eq!(token.word, "京东|刘强东");
        assert_eq!(token.label(), "京东");
        assert!(token.matches("刘强东回应"));
    }

    #[test]
    fn test_invalid_regex_falls_back_to_literal() {
        let token = compile_token("/(unclosed/");
        assert!(!token.is_regex());
        assert_eq!(token.word, "/(unclosed/");
        assert!(token.matches("path /(unclosed/ here"));
        assert!(!token.matches("unclosed"));
    }

    #[test]
    fn test_try_compile_reports_invalid_regex() {
        let err = try_compile_token("/(unclosed/ => X").unwrap_err();
        let TokenCompileError::InvalidRegex { pattern, literal, display_name, .. } = err;
        assert_eq!(pattern, "(unclosed");
        assert_eq!(literal, "/(unclosed/");
        assert_eq!(display_name.as_deref(), Some("X"));
    }

    #[test]
    fn test_strict_policy_propagates_error() {
        let result = compile_with_policy("/[z-a]/", CompilePolicy::Strict);
        assert!(matches!(result, Err(CoreError::TokenCompileError(_))));

        let lenient = compile_with_policy("/[z-a]/", CompilePolicy::Lenient).unwrap();
        assert_eq!(lenient.word, "/[z-a]/");
    }

    #[test]
    fn test_single_slash_is_literal() {
        let token = compile_token("/");
        assert!(!token.is_regex());
        let token = compile_token("//");
        assert!(!token.is_regex());
    }

    #[test]
    fn test_compile_is_deterministic() {
        assert_eq!(compile_token("/GPT-?5/ => GPT5"), compile_token("/GPT-?5/ => GPT5"));
        assert_eq!(compile_tokens(["a", "/b/"]).len(), 2);
    }
}
