//! Integer formatting for the numeric table columns.

/// Render `n` with digits grouped in threes: `1234567` -> `"1,234,567"`.
/// Negative values keep their leading `-`; non-negative values carry no sign.
pub fn fmt(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Like [`fmt`], with an explicit `+` on strictly positive values. Zero and
/// negative values render as [`fmt`] does.
pub fn fmt_diff(n: i64) -> String {
    if n > 0 {
        format!("+{}", fmt(n))
    } else {
        fmt(n)
    }
}
