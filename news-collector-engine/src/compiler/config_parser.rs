//! 关键词配置解析器
//! 配置格式：
//! - 空行分隔词组，`#` 开头为注释
//! - `[GLOBAL_FILTER]` / `[WORD_GROUPS]` 切换区域，区域跨块保持
//! - `[别名]` 作为词组首行时为组别名
//! - `+词` 必须词，`!词` 过滤词，`@N` 条数上限，其余为普通词
//! - `/pattern/` 正则，`词 => 名称` 显示名称

use std::convert::Infallible;

use once_cell::sync::Lazy;
use regex::Regex;

use super::token_compiler::{compile_token, compile_with_policy, CompilePolicy};
use crate::core::{KeywordConfig, WordGroup, WordToken};
use crate::error::CoreResult;

/// 两个及以上连续换行为块边界
static BLOCK_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

const SECTION_GLOBAL_FILTER: &str = "GLOBAL_FILTER";
const SECTION_WORD_GROUPS: &str = "WORD_GROUPS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    GlobalFilter,
    WordGroups,
}

impl Section {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            SECTION_GLOBAL_FILTER => Some(Section::GlobalFilter),
            SECTION_WORD_GROUPS => Some(Section::WordGroups),
            _ => None,
        }
    }
}

/// 提取 `[...]` 内部文本
fn bracket_inner(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

/// 解析关键词配置（宽松模式）
/// 非法正则退化为字面量，非法 `@N` 被忽略，空块与空词组被丢弃
pub fn parse_keyword_config(text: &str) -> KeywordConfig {
    match parse_with(text, |raw| Ok::<_, Infallible>(compile_token(raw))) {
        Ok(config) => config,
        Err(never) => match never {},
    }
}

/// 解析关键词配置（严格模式），遇到非法正则即返回错误
pub fn parse_keyword_config_strict(text: &str) -> CoreResult<KeywordConfig> {
    parse_with(text, |raw| compile_with_policy(raw, CompilePolicy::Strict))
}

fn parse_with<E, F>(text: &str, mut compile: F) -> Result<KeywordConfig, E>
where
    F: FnMut(&str) -> Result<WordToken, E>,
{
    let normalized = text.replace("\r\n", "\n");
    let mut config = KeywordConfig::default();
    let mut section = Section::WordGroups;

    for block in BLOCK_BOUNDARY.split(&normalized) {
        let mut lines: Vec<&str> = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        if lines.is_empty() {
            continue;
        }

        // 区域标记
        if let Some(next) = bracket_inner(lines[0]).and_then(Section::from_name) {
            section = next;
            lines.remove(0);
        }

        if section == Section::GlobalFilter {
            config.global_filters.extend(
                lines
                    .iter()
                    .filter(|line| !line.starts_with(['!', '+', '@']))
                    .map(|line| line.to_string()),
            );
            continue;
        }

        // 组别名
        let mut alias = None;
        if let Some(inner) = lines.first().copied().and_then(bracket_inner) {
            let candidate = inner.trim();
            if Section::from_name(candidate).is_none() {
                // 空括号行丢弃，但不作为别名
                if !candidate.is_empty() {
                    alias = Some(candidate.to_string());
                }
                lines.remove(0);
            }
        }

        let mut required = Vec::new();
        let mut normal = Vec::new();
        let mut filter = Vec::new();
        let mut max_count = 0usize;

        for line in lines {
            if let Some(count) = line.strip_prefix('@') {
                if let Ok(n) = count.trim().parse::<i64>() {
                    if n > 0 {
                        max_count = n as usize;
                    }
                }
            } else if let Some(word) = line.strip_prefix('!') {
                let token = compile(word)?;
                if !token.is_empty() {
                    config.filters.push(token.clone());
                    filter.push(token);
                }
            } else if let Some(word) = line.strip_prefix('+') {
                let token = compile(word)?;
                if !token.is_empty() {
                    required.push(token);
                }
            } else {
                let token = compile(line)?;
                if !token.is_empty() {
                    normal.push(token);
                }
            }
        }

        if let Some(group) = WordGroup::new(required, normal, filter, alias, max_count) {
            config.groups.push(group);
        } else {
            log::debug!("Dropping keyword block without required or normal words");
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_tesla_scenario() {
        let config = parse_keyword_config("+Tesla\nMusk\n\n!spam");
        assert_eq!(config.groups.len(), 1);
        let group = &config.groups[0];
        assert_eq!(group.required.len(), 1);
        assert_eq!(group.required[0].word, "Tesla");
        assert_eq!(group.normal[0].word, "Musk");
        assert_eq!(group.group_key, "Musk");
        assert_eq!(config.filters.len(), 1);
        assert_eq!(config.filters[0].word, "spam");
        assert!(config.global_filters.is_empty());
    }

    #[test]
    fn test_filter_only_block_yields_no_group() {
        let config = parse_keyword_config("!spam\n!ads\n@5");
        assert!(config.groups.is_empty());
        assert_eq!(config.filters.len(), 2);
    }

    #[test]
    fn test_sections_persist_across_blocks() {
        let text = "[GLOBAL_FILTER]\n广告\n+ignored\n\n推广\n\n[WORD_GROUPS]\nAI\n\n芯片";
        let config = parse_keyword_config(text);
        assert_eq!(config.global_filters, vec!["广告", "推广"]);
        assert_eq!(config.groups.len(), 2);
        assert_eq!(config.groups[0].group_key, "AI");
        assert_eq!(config.groups[1].group_key, "芯片");
    }

    #[test]
    fn test_section_names_are_case_insensitive() {
        let config = parse_keyword_config("[global_filter]\n八卦\n\n[Word_Groups]\n股市");
        assert_eq!(config.global_filters, vec!["八卦"]);
        assert_eq!(config.groups.len(), 1);
    }

    #[test]
    fn test_group_alias_and_max_count() {
        let text = "[人工智能]\n/\\bAI\\b/\nChatGPT => GPT\n@10";
        let config = parse_keyword_config(text);
        let group = &config.groups[0];
        assert_eq!(group.display_name, "人工智能");
        assert_eq!(group.max_count, 10);
        assert_eq!(group.group_key, r"\bAI\b ChatGPT");
        assert!(group.normal[0].is_regex());
    }

    #[test]
    fn test_empty_alias_falls_back_to_labels() {
        for header in ["[]", "[   ]"] {
            let config = parse_keyword_config(&format!("{}\n华为\n鸿蒙", header));
            let group = &config.groups[0];
            assert_eq!(group.display_name, "华为 / 鸿蒙", "header {}", header);
            assert_eq!(group.normal.len(), 2);
        }
    }

    #[test]
    fn test_malformed_max_count_is_ignored() {
        for directive in ["@abc", "@0", "@-3", "@"] {
            let config = parse_keyword_config(&format!("华为\n{}", directive));
            assert_eq!(config.groups[0].max_count, 0, "directive {}", directive);
        }
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let text = "# 科技\n\n\n\n# only comment\n\n小米\n# inline comment\n雷军\n\n\n";
        let config = parse_keyword_config(text);
        assert_eq!(config.groups.len(), 1);
        assert_eq!(config.groups[0].normal.len(), 2);
    }

    #[test]
    fn test_display_name_uses_token_labels() {
        let config = parse_keyword_config("+/特斯拉|Tesla/ => 特斯拉\n马斯克");
        assert_eq!(config.groups[0].display_name, "特斯拉 / 马斯克");
    }

    #[test]
    fn test_crlf_input() {
        let config = parse_keyword_config("比亚迪\r\n\r\n宁德时代\r\n");
        assert_eq!(config.groups.len(), 2);
    }

    #[test]
    fn test_bare_sigils_are_ignored() {
        let config = parse_keyword_config("+\n!\n光伏");
        let group = &config.groups[0];
        assert!(group.required.is_empty());
        assert!(group.filter.is_empty());
        assert!(config.filters.is_empty());
        assert_eq!(group.normal.len(), 1);
    }

    #[test]
    fn test_groups_never_empty() {
        let samples = ["", "\n\n\n", "[WORD_GROUPS]", "[Alias]\n@3\n!x", "# c\n\n+\n"];
        for text in samples {
            let config = parse_keyword_config(text);
            assert!(config
                .groups
                .iter()
                .all(|g| !g.required.is_empty() || !g.normal.is_empty()));
        }
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "[科技]\n+华为\n鸿蒙 => HarmonyOS\n\n/英伟达|NVIDIA/\n!股价";
        let first = parse_keyword_config(text);
        let second = parse_keyword_config(text);
        assert_eq!(first, second);
        let keys: Vec<_> = first.groups.iter().map(|g| (&g.group_key, &g.display_name)).collect();
        let again: Vec<_> = second.groups.iter().map(|g| (&g.group_key, &g.display_name)).collect();
        assert_eq!(keys, again);
    }

    #[test]
    fn test_strict_parse_rejects_bad_regex() {
        let result = parse_keyword_config_strict("/(oops/\n正常");
        assert!(matches!(result, Err(CoreError::TokenCompileError(_))));

        let lenient = parse_keyword_config("/(oops/\n正常");
        assert_eq!(lenient.groups[0].normal[0].word, "/(oops/");
    }

    #[test]
    fn test_from_str() {
        let config: KeywordConfig = "AI".parse().unwrap();
        assert_eq!(config.groups.len(), 1);
    }
}
