mod config;
mod group;
mod token;

// 导出常用项
pub use config::KeywordConfig;
pub use group::{GroupSummary, WordGroup, DISPLAY_SEPARATOR};
pub use token::{TokenMatcher, TokenSpec, WordToken};
