//! Play-time formatting.

/// Formats a duration in whole seconds as zero-padded `MM:SS`.
///
/// Durations of an hour or more keep counting minutes past 59 rather
/// than rolling over.
///
/// # Example
///
/// ```
/// use snapfit_game::format_mm_ss;
///
/// assert_eq!(format_mm_ss(0), "00:00");
/// assert_eq!(format_mm_ss(75), "01:15");
/// ```
#[must_use]
pub fn format_mm_ss(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_both_fields() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(9), "00:09");
        assert_eq!(format_mm_ss(59), "00:59");
        assert_eq!(format_mm_ss(60), "01:00");
        assert_eq!(format_mm_ss(599), "09:59");
    }

    #[test]
    fn minutes_run_past_an_hour() {
        assert_eq!(format_mm_ss(3600), "60:00");
        assert_eq!(format_mm_ss(3725), "62:05");
    }
}
