/// Shown in place of a time that isn't known
pub const PLACEHOLDER: &str = "-";

/// Formats milliseconds as `mm:ss.mmm`, minutes keep counting past an hour
pub fn format_time(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let milliseconds = ms % 1000;

    format!("{:02}:{:02}.{:03}", minutes, seconds, milliseconds)
}

pub fn format_or_dash(ms: Option<u64>) -> String {
    match ms {
        Some(ms) => format_time(ms),
        None => PLACEHOLDER.to_string(),
    }
}
