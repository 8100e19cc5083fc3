//! 时间戳格式化

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 当前时间（指定时区）
pub fn format_timestamp(tz: Tz) -> String {
    format_datetime(Utc::now(), tz)
}

/// 任意UTC时间转指定时区后格式化
pub fn format_datetime(dt: DateTime<Utc>, tz: Tz) -> String {
    dt.with_timezone(&tz).format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_timestamp_shape() {
        let ts = format_timestamp(chrono_tz::Asia::Shanghai);
        assert_eq!(ts.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_format_datetime_shifts_timezone() {
        let dt = DateTime::parse_from_rfc3339("2026-10-12T08:00:00Z").unwrap().with_timezone(&Utc);
        assert_eq!(format_datetime(dt, chrono_tz::Asia::Shanghai), "2026-10-12 16:00:00");
    }
}
