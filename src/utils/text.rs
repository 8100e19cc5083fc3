//! 文本清洗：HTML标签剥离、按字符截断

use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid html tag pattern"));

/// RSS摘要最大字符数
pub const SUMMARY_MAX_CHARS: usize = 500;

/// 去除HTML标签并折叠首尾空白
pub fn strip_html(text: &str) -> String {
    HTML_TAG.replace_all(text, "").trim().to_string()
}

/// 按字符（非字节）截断
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

/// 摘要清洗：剥离标签后截断
pub fn clean_summary(raw: &str) -> String {
    truncate_chars(&strip_html(raw), SUMMARY_MAX_CHARS)
}
