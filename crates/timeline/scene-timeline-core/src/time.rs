//! Time display and grid helpers for timeline UIs.

/// Format seconds as `MM:SS.mmm`. Minutes widen past two digits; negative
/// and non-finite input formats as zero.
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    // Nudge before flooring so 1.005 stays 1005ms.
    let total_ms = (seconds * 1000.0 + 1e-6).floor() as u64;
    let minutes = total_ms / 60_000;
    let secs = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;
    format!("{minutes:02}:{secs:02}.{millis:03}")
}

/// Leading integer of `s`, in the manner of a lenient `parseInt`: optional
/// whitespace, optional sign, then digits. Anything else yields 0.
fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end]
        .parse::<i64>()
        .map(|v| sign * v)
        .unwrap_or(0)
}

/// Parse `MM:SS.mmm` back into seconds.
///
/// Exactly one `:` is required, otherwise 0. Each field takes its leading
/// digits, so `"1:5"` is 65s and the fraction is read as a millisecond
/// count (`"00:01.5"` is 1.005s). Negative totals clamp to 0.
pub fn parse_time(text: &str) -> f64 {
    let mut parts = text.split(':');
    let (Some(minutes), Some(rest), None) = (parts.next(), parts.next(), parts.next()) else {
        return 0.0;
    };
    let mut fields = rest.split('.');
    let secs = fields.next().map(leading_int).unwrap_or(0);
    let millis = fields.next().map(leading_int).unwrap_or(0);
    let total = leading_int(minutes) as f64 * 60.0 + secs as f64 + millis as f64 / 1000.0;
    total.max(0.0)
}

/// Round `time` to the nearest multiple of `grid_size`. Non-positive or
/// non-finite grids leave the time unchanged.
pub fn snap_time(time: f64, grid_size: f64) -> f64 {
    if !(grid_size.is_finite() && grid_size > 0.0) {
        return time;
    }
    (time / grid_size).round() * grid_size
}
