//! Text formatting utilities
//!
//! Provides human-readable formatting for reaction times and helpers
//! for fitting text into fixed-width terminal cells.

use std::time::Duration;

/// Format a measured duration for display, millisecond-first
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use folio::util::format::format_millis;
///
/// assert_eq!(format_millis(Duration::from_millis(247)), "247 ms");
/// assert_eq!(format_millis(Duration::from_millis(1350)), "1.35 s");
/// ```
pub fn format_millis(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{} ms", millis)
    } else {
        format!("{:.2} s", duration.as_secs_f64())
    }
}

/// Truncate text to `max` characters, appending an ellipsis when cut
///
/// # Examples
/// ```
/// use folio::util::format::ellipsize;
///
/// assert_eq!(ellipsize("short", 10), "short");
/// assert_eq!(ellipsize("a longer line of text", 10), "a longer …");
/// ```
pub fn ellipsize(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millis_sub_second() {
        assert_eq!(format_millis(Duration::from_millis(0)), "0 ms");
        assert_eq!(format_millis(Duration::from_millis(999)), "999 ms");
    }

    #[test]
    fn test_format_millis_seconds() {
        assert_eq!(format_millis(Duration::from_millis(1000)), "1.00 s");
        assert_eq!(format_millis(Duration::from_millis(2500)), "2.50 s");
    }

    #[test]
    fn test_ellipsize_exact_fit() {
        assert_eq!(ellipsize("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_ellipsize_multibyte() {
        // Truncation counts characters, not bytes
        assert_eq!(ellipsize("héllo wörld", 6), "héllo…");
    }

    #[test]
    fn test_ellipsize_zero_width() {
        assert_eq!(ellipsize("abc", 0), "…");
    }
}
