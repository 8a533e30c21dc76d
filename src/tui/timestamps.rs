use chrono::{DateTime, Datelike, Timelike, Utc};

/// Tiered timestamp for the conversation list: relative under a week
/// ("2h ago"), month + day beyond that, with the year once it differs.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let elapsed = now.signed_duration_since(*timestamp);

    if elapsed.num_days() < 7 {
        relative(elapsed.num_seconds())
    } else if timestamp.year() == now.year() {
        timestamp.format("%b %-d").to_string()
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}

/// Wall-clock time of one message within the preview.
pub fn format_clock(timestamp: &DateTime<Utc>) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        timestamp.hour(),
        timestamp.minute(),
        timestamp.second()
    )
}

fn relative(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}
