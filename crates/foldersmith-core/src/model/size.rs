/// Size helpers — megabyte conversion and human-readable counts.
///
/// All sizes are read as `u64` bytes. Floating point is only used for the
/// megabyte figures that appear in reports.

/// Bytes per megabyte (binary: 1024 × 1024).
pub const BYTES_PER_MB: f64 = 1_048_576.0;

/// Convert a byte count to megabytes.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Round to two decimal places. Exact ties go to the even neighbour, so
/// 100.125 becomes 100.12.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Format a megabyte figure for display.
pub fn format_mb(mb: f64) -> String {
    if mb >= 1024.0 {
        format!("{:.2} GB", mb / 1024.0)
    } else {
        format!("{mb:.2} MB")
    }
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
