//! 多平台顺序抓取：同一平台内重复标题合并排名，失败平台记入失败列表

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{info, warn};

use super::catalog::PlatformSpec;
use super::fetcher::{PlatformSource, RawEntry};
use crate::utils::Pacing;

/// 去重后的标题及其出现过的全部排名
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedTitle {
    pub title: String,
    pub ranks: Vec<u32>,
    pub url: String,
    pub mobile_url: String,
}

impl RankedTitle {
    /// 最佳排名（最小值）
    pub fn best_rank(&self) -> u32 {
        self.ranks.iter().copied().min().unwrap_or(0)
    }
}

/// 单个平台的抓取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformTitles {
    /// 实际请求的平台ID
    pub id: String,
    pub name: String,
    pub titles: Vec<RankedTitle>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlOutcome {
    pub results: Vec<PlatformTitles>,
    pub failed: Vec<String>,
}

/// 合并重复标题，保持首次出现顺序，链接取首次出现的条目
pub fn merge_entries(entries: Vec<RawEntry>) -> Vec<RankedTitle> {
    let mut index: HashMap<String, usize> = HashMap::with_capacity(entries.len());
    let mut merged: Vec<RankedTitle> = Vec::with_capacity(entries.len());

    for entry in entries {
        if let Some(&pos) = index.get(&entry.title) {
            merged[pos].ranks.push(entry.rank);
            continue;
        }
        index.insert(entry.title.clone(), merged.len());
        merged.push(RankedTitle {
            title: entry.title,
            ranks: vec![entry.rank],
            url: entry.url,
            mobile_url: entry.mobile_url,
        });
    }
    merged
}

/// 依次抓取平台，平台之间按节流间隔等待
/// 别名替换后ID相同的平台只抓取一次（以首次出现为准）
pub async fn crawl(source: &dyn PlatformSource, platforms: &[PlatformSpec], pacing: Pacing) -> CrawlOutcome {
    let mut outcome = CrawlOutcome::default();
    let mut seen: HashSet<&str> = HashSet::with_capacity(platforms.len());
    let unique: Vec<&PlatformSpec> = platforms
        .iter()
        .filter(|platform| seen.insert(platform.resolved_id()))
        .collect();

    for (i, platform) in unique.iter().enumerate() {
        let actual_id = platform.resolved_id();
        match source.fetch(actual_id).await {
            Ok(entries) => {
                let titles = merge_entries(entries);
                info!("[{}] 获取成功，共{}条", platform.name, titles.len());
                outcome.results.push(PlatformTitles {
                    id: actual_id.to_string(),
                    name: platform.name.clone(),
                    titles,
                });
            }
            Err(e) => {
                warn!("[{}] 获取失败：{}", platform.name, e);
                outcome.failed.push(actual_id.to_string());
            }
        }

        if i + 1 < unique.len() {
            pacing.pause().await;
        }
    }
    outcome
}
