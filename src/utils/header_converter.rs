//! 请求头构建工具
//! 将静态键值对转换为 reqwest 的 HeaderMap

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::warn;

/// 热榜接口请求头（模拟浏览器）
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    (
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    ),
    ("Accept", "application/json, text/plain, */*"),
    ("Accept-Language", "zh-CN,zh;q=0.9,en;q=0.8"),
    ("Connection", "keep-alive"),
    ("Cache-Control", "no-cache"),
];

/// RSS请求头
pub const FEED_HEADERS: &[(&str, &str)] = &[
    ("User-Agent", "NewsCollector/1.0 RSS Reader"),
    (
        "Accept",
        "application/rss+xml, application/atom+xml, application/xml, text/xml, */*",
    ),
];

/// Header转换工具
pub struct HeaderConverter;

impl HeaderConverter {
    /// 键值对 -> HeaderMap，非法项跳过并告警
    pub fn from_pairs(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::with_capacity(pairs.len());
        for (key, value) in pairs {
            match (HeaderName::from_bytes(key.as_bytes()), HeaderValue::from_str(value)) {
                (Ok(name), Ok(value)) => {
                    map.insert(name, value);
                }
                _ => warn!("无效Header已跳过：{}", key),
            }
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(HeaderConverter::from_pairs(BROWSER_HEADERS).len(), BROWSER_HEADERS.len());
        assert_eq!(HeaderConverter::from_pairs(FEED_HEADERS).len(), FEED_HEADERS.len());
    }

    #[test]
    fn test_invalid_pairs_are_skipped() {
        let map = HeaderConverter::from_pairs(&[("bad header", "x"), ("X-Ok", "1"), ("X-Bad", "a\nb")]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("x-ok").unwrap(), "1");
    }
}
