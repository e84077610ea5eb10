use std::time::Duration;

/// Format a `Duration` as `m:ss`. Minutes are not wrapped into hours, so
/// 3661 seconds renders as `61:01`.
pub fn format_clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
