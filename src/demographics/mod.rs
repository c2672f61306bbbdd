//! Demographic enumerations and the lookup tables derived from them
//!
//! Every category is a closed enum. Tables keyed on them (currency, wealth
//! ranges, job catalogs, class modifiers) are exhaustive matches.

mod class;
mod education;
mod jobs;
mod nationality;
mod religion;

pub use class::*;
pub use education::*;
pub use jobs::*;
pub use nationality::*;
pub use religion::*;

/// Normalize a user-supplied enum key: `"high school"` -> `"HIGH_SCHOOL"`
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

/// Format a money amount with thousands separators, rounded to whole units
pub fn format_amount(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
