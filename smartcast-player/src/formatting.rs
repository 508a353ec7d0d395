//! Display helpers shared by the library and player screens.

use chrono::NaiveDate;

pub use smartcast_core::playback::display::format_time;

/// `2024-03-10` -> `Mar 10, 2024`. Unparseable input is returned as is.
pub fn format_upload_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => format_date(date),
        Err(_) => raw.to_string(),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Fraction of the media played, in `[0, 1]`; 0 while the duration is
/// unknown.
pub fn progress(position_seconds: f64, duration_seconds: f64) -> f64 {
    if duration_seconds > 0.0 && position_seconds.is_finite() {
        (position_seconds / duration_seconds).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Fixed-width text progress bar.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    bar.extend(std::iter::repeat_n('#', filled));
    bar.extend(std::iter::repeat_n('-', width - filled));
    bar.push(']');
    bar
}
