//! Number formatting for tiles and tooltips.

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a whole-dollar amount, e.g. `$6,100`.
#[must_use]
pub fn format_dollars(amount: u32) -> String {
    format!("${}", format_number(u64::from(amount)))
}
