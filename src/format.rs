//! Fixed-width size formatting for the `rubig` ranking output.
//!
//! Sizes are rendered with thousands separators and right-aligned to a
//! fixed column width so that successive snapshots line up in the terminal.
//! The formatted string is also part of the record tie-break (see
//! [`crate::data::DirRecord`]), so the exact rendering matters for ranking
//! determinism, not just for looks.

/// Column width every formatted size is padded to.
///
/// 17 characters covers sizes into the hundreds of terabytes and keeps the
/// two-column snapshot output compact.
pub const SIZE_COLUMN_WIDTH: usize = 17;

/// Renders a byte count with thousands separators, right-aligned to
/// [`SIZE_COLUMN_WIDTH`] characters.
///
/// # Arguments
/// * `size` - The byte count to format
///
/// # Returns
/// * `String` - e.g. `12_000_000` becomes `"       12,000,000"`
pub fn format_size_grouped(size: u64) -> String {
    let digits = size.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    let first_group = digits.len() % 3;
    if first_group > 0 {
        grouped.push_str(&digits[..first_group]);
    }
    for (i, chunk) in digits.as_bytes()[first_group..].chunks(3).enumerate() {
        if first_group > 0 || i > 0 {
            grouped.push(',');
        }
        // Chunks come from an ASCII digit string, so this cannot fail.
        grouped.push_str(std::str::from_utf8(chunk).unwrap_or(""));
    }

    format!("{:>width$}", grouped, width = SIZE_COLUMN_WIDTH)
}
