// 输出数据结构
pub mod model;
// 结果组装
pub mod assembler;
// 搜索打分
pub mod search;

pub use assembler::{assemble_feeds, assemble_platforms, TitleFilter};
pub use model::{
    CollectionResult, CombinedReport, HitKind, NewsItem, RssItem, SearchHit, SearchReport, SourceBlock, TopicListing,
};
pub use search::{compile_query, rank_hits, score_feeds, score_platforms, UNRANKED};
