//! Text helpers for the player overlay.

/// Formats seconds as `m:ss`, or `h:mm:ss` from one hour up.
///
/// Fractions are truncated and negative or non-finite input renders as
/// `0:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hrs = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hrs > 0 {
        format!("{hrs}:{mins:02}:{secs:02}")
    } else {
        format!("{mins}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_durations_have_no_hour_field() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(15.9), "0:15");
        assert_eq!(format_time(734.0), "12:14");
    }

    #[test]
    fn long_durations_pad_minutes() {
        assert_eq!(format_time(3600.0), "1:00:00");
        assert_eq!(format_time(3725.0), "1:02:05");
    }

    #[test]
    fn garbage_renders_as_zero() {
        assert_eq!(format_time(-5.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
    }
}
