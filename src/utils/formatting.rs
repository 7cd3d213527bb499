//! Formatting utilities used for CLI and export outputs.

use crate::models::calendar::CalendarConfig;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Render a span of world-seconds in calendar units, largest first.
/// Examples: "2y 1m", "5d 3h", "0h" for spans under one hour.
pub fn span2readable(seconds: i64, cfg: &CalendarConfig) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let mut rest = seconds.unsigned_abs();

    let units: [(u64, &str); 4] = [
        (cfg.seconds_per_year(), "y"),
        (cfg.seconds_per_month(), "m"),
        (cfg.seconds_per_day(), "d"),
        (cfg.seconds_per_hour, "h"),
    ];

    let mut parts = Vec::new();
    for (len, label) in units {
        let n = rest / len;
        if n > 0 {
            parts.push(format!("{}{}", n, label));
            rest %= len;
        }
    }

    if parts.is_empty() {
        return "0h".to_string();
    }

    format!("{}{}", sign, parts.join(" "))
}
