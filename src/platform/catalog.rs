//! 热榜平台目录（NewsNow 平台ID -> 展示名称）

use serde::Serialize;

/// 已验证可用的平台，顺序即展示顺序
pub const PLATFORM_NAMES: &[(&str, &str)] = &[
    // 社交平台
    ("weibo", "微博热搜"),
    ("zhihu", "知乎热榜"),
    ("douyin", "抖音热点"),
    ("tieba", "贴吧"),
    // 新闻平台
    ("toutiao", "今日头条"),
    ("baidu", "百度热搜"),
    ("thepaper", "澎湃新闻"),
    ("ifeng", "凤凰网"),
    ("zaobao", "联合早报"),
    // 财经
    ("wallstreetcn-hot", "华尔街见闻"),
    ("cls-hot", "财联社热门"),
    // 视频
    ("bilibili", "B站热门"),
    ("bilibili-hot-search", "B站热搜"),
    // 科技
    ("36kr", "36氪"),
    ("ithome", "IT之家"),
    ("v2ex", "V2EX"),
    ("juejin", "掘金"),
    ("github", "GitHub Trending"),
];

/// 平台ID别名（请求时替换为实际ID）
pub const PLATFORM_ALIASES: &[(&str, &str)] = &[("bilibili", "bilibili-hot-search")];

/// 未指定平台时抓取的默认列表
pub const DEFAULT_PLATFORMS: &[&str] = &["weibo", "zhihu", "douyin", "toutiao", "baidu"];

/// 一个待抓取的平台
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformSpec {
    pub id: String,
    pub name: String,
}

impl PlatformSpec {
    /// 按平台ID构建，名称取自平台目录（未知ID以ID为名）
    pub fn from_id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: platform_name(id).to_string(),
        }
    }

    /// 自定义展示名称
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// 实际请求使用的ID
    pub fn resolved_id(&self) -> &str {
        resolve_alias(&self.id)
    }
}

/// 平台展示名称，先查原ID再查别名指向的ID
pub fn platform_name(id: &str) -> &str {
    lookup_name(id)
        .or_else(|| lookup_name(resolve_alias(id)))
        .unwrap_or(id)
}

fn lookup_name(id: &str) -> Option<&'static str> {
    PLATFORM_NAMES
        .iter()
        .find(|(pid, _)| *pid == id)
        .map(|(_, name)| *name)
}

/// 别名替换
pub fn resolve_alias(id: &str) -> &str {
    PLATFORM_ALIASES
        .iter()
        .find(|(alias, _)| *alias == id)
        .map(|(_, actual)| *actual)
        .unwrap_or(id)
}

pub fn default_platforms() -> Vec<PlatformSpec> {
    DEFAULT_PLATFORMS.iter().map(|id| PlatformSpec::from_id(id)).collect()
}

pub fn all_platforms() -> Vec<PlatformSpec> {
    PLATFORM_NAMES
        .iter()
        .map(|(id, name)| PlatformSpec::named(*id, *name))
        .collect()
}

/// 平台列表输出
#[derive(Debug, Clone, Serialize)]
pub struct PlatformListing {
    pub platforms: Vec<PlatformSpec>,
    pub default: Vec<String>,
}

pub fn list_platforms() -> PlatformListing {
    PlatformListing {
        platforms: all_platforms(),
        default: DEFAULT_PLATFORMS.iter().map(|id| id.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_resolution() {
        assert_eq!(resolve_alias("bilibili"), "bilibili-hot-search");
        assert_eq!(resolve_alias("weibo"), "weibo");
        assert_eq!(PlatformSpec::from_id("bilibili").resolved_id(), "bilibili-hot-search");
    }

    #[test]
    fn test_platform_names() {
        assert_eq!(platform_name("zhihu"), "知乎热榜");
        assert_eq!(platform_name("bilibili"), "B站热门");
        assert_eq!(platform_name("unknown-site"), "unknown-site");
    }

    #[test]
    fn test_default_platforms_are_known() {
        let listing = list_platforms();
        assert_eq!(listing.default.len(), 5);
        for id in &listing.default {
            assert!(listing.platforms.iter().any(|p| &p.id == id));
        }
    }
}
