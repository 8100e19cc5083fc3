//! 文章时效判断

use chrono::{DateTime, Utc};

/// `max_age_days` 为0时不过滤；无发布时间的文章保留
pub fn is_fresh(published: Option<DateTime<Utc>>, now: DateTime<Utc>, max_age_days: u32) -> bool {
    if max_age_days == 0 {
        return true;
    }
    match published {
        Some(published) => (now - published).num_days() <= i64::from(max_age_days),
        None => true,
    }
}
