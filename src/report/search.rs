//! 关键词搜索：按命中数打分排序

use news_collector_engine::{compile_tokens, count_matches, first_match_label, WordToken};

use super::model::{CollectionResult, HitKind, SearchHit};

/// 未知排名的排序值
pub const UNRANKED: u32 = 999;

/// 查询按空白切分后逐个编译
pub fn compile_query(query: &str) -> (Vec<String>, Vec<WordToken>) {
    let keywords: Vec<String> = query.split_whitespace().map(str::to_string).collect();
    let tokens = compile_tokens(&keywords);
    (keywords, tokens)
}

/// 热榜标题打分
pub fn score_platforms(result: &CollectionResult, tokens: &[WordToken]) -> Vec<SearchHit> {
    result
        .news_items()
        .filter_map(|item| {
            let score = count_matches(&item.title, tokens);
            (score > 0).then(|| SearchHit {
                title: item.title.clone(),
                url: item.url.clone(),
                source: item.source.clone(),
                source_name: item.source_name.clone(),
                rank: Some(item.rank),
                published_at: None,
                match_score: score,
                matched: first_match_label(&item.title, tokens).map(str::to_string),
                kind: HitKind::Platform,
            })
        })
        .collect()
}

/// RSS文章按“标题 + 摘要”打分
pub fn score_feeds(result: &CollectionResult, tokens: &[WordToken]) -> Vec<SearchHit> {
    result
        .rss_items()
        .filter_map(|item| {
            let text = format!("{} {}", item.title, item.summary);
            let score = count_matches(&text, tokens);
            (score > 0).then(|| SearchHit {
                title: item.title.clone(),
                url: item.url.clone(),
                source: item.feed_id.clone(),
                source_name: item.feed_name.clone(),
                rank: None,
                published_at: Some(item.published_at.clone()),
                match_score: score,
                matched: first_match_label(&text, tokens).map(str::to_string),
                kind: HitKind::Rss,
            })
        })
        .collect()
}

/// 分数降序，同分按排名升序（稳定排序）
pub fn rank_hits(hits: &mut [SearchHit]) {
    hits.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| a.rank.unwrap_or(UNRANKED).cmp(&b.rank.unwrap_or(UNRANKED)))
    });
}
