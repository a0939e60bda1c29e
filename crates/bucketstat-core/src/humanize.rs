//! Human-readable number formatting for reports.

/// Binary unit suffixes after plain bytes, GNU `ls -h` style.
const SIZE_SUFFIXES: [char; 8] = ['K', 'M', 'G', 'T', 'P', 'E', 'Z', 'Y'];

const SIZE_BASE: f64 = 1024.0;

/// Format a byte count with binary units the way GNU tools do.
///
/// Values under 1 KiB are printed as whole bytes; larger values get one
/// decimal and a single-letter suffix.
///
/// ```
/// use bucketstat_core::humanize::natural_size;
///
/// assert_eq!(natural_size(300.0), "300B");
/// assert_eq!(natural_size(1536.0), "1.5K");
/// assert_eq!(natural_size(3.0 * 1024.0 * 1024.0 * 1024.0), "3.0G");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn natural_size(bytes: f64) -> String {
    if bytes.abs() < SIZE_BASE {
        return format!("{}B", bytes.trunc() as i64);
    }

    let mut value = bytes / SIZE_BASE;
    let mut suffix = SIZE_SUFFIXES[0];
    for next in &SIZE_SUFFIXES[1..] {
        if value.abs() < SIZE_BASE {
            break;
        }
        value /= SIZE_BASE;
        suffix = *next;
    }
    format!("{value:.1}{suffix}")
}

/// Format an integer with `,` thousands separators.
///
/// ```
/// use bucketstat_core::humanize::int_comma;
///
/// assert_eq!(int_comma(1_234_567), "1,234,567");
/// ```
#[must_use]
pub fn int_comma(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
