use std::time::{Duration, UNIX_EPOCH};

/// 将毫秒时间戳格式化为标准时间格式 HH:MM:SS.mmm
pub fn format_timestamp(timestamp_ms: i64) -> String {
    if timestamp_ms < 0 {
        return format!("Invalid timestamp: {}", timestamp_ms);
    }

    let duration = Duration::from_millis(timestamp_ms as u64);
    match UNIX_EPOCH.checked_add(duration) {
        Some(_) => {
            let total_ms = timestamp_ms as u64;
            let seconds = total_ms / 1000;
            let ms = total_ms % 1000;

            // 简化格式：只显示时分秒.毫秒
            let hours = (seconds / 3600) % 24;
            let minutes = (seconds / 60) % 60;
            let secs = seconds % 60;

            format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, ms)
        }
        None => format!("Invalid timestamp: {}", timestamp_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_time_of_day() {
        // 1970-01-01 01:02:03.456 UTC
        let ms: i64 = (3600 + 2 * 60 + 3) * 1000 + 456;
        assert_eq!(format_timestamp(ms), "01:02:03.456");
    }

    #[test]
    fn rejects_negative_timestamp() {
        assert!(format_timestamp(-5).starts_with("Invalid timestamp"));
    }
}
