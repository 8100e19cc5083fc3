// 请求头构建
pub mod header_converter;
// 重试与请求节流
pub mod retry;
// 文本清洗
pub mod text;
// 时间戳
pub mod time;

pub use header_converter::{HeaderConverter, BROWSER_HEADERS, FEED_HEADERS};
pub use retry::{retry_async, Pacing, RetryPolicy};
pub use text::{clean_summary, strip_html, truncate_chars};
pub use time::{format_datetime, format_timestamp};
