//! Human-readable rendering of metric values for the legend and tooltips.
//!
//! Values under 1,000 keep up to two decimals, values under a million become
//! comma-grouped integers, and anything larger is spelled with a scale word
//! ("3.2 million").

use std::fmt::Write;

const SCALE_WORDS: &[(f64, &str)] = &[
    (1e6, "million"),
    (1e9, "billion"),
    (1e12, "trillion"),
    (1e15, "quadrillion"),
];

/// Format a metric value for display.
pub fn humanize(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value < 1_000.0 {
        return format_two_decimals(value);
    }
    if value < 1_000_000.0 {
        return intcomma(value.round() as i64);
    }
    intword(value)
}

/// Round to at most two decimals, dropping trailing zeros.
fn format_two_decimals(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    format!("{rounded}")
}

/// Group an integer's digits in threes with commas.
pub fn intcomma(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
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

/// Spell a value of a million or more with one decimal and a scale word.
pub fn intword(value: f64) -> String {
    let mut idx = SCALE_WORDS
        .iter()
        .rposition(|(scale, _)| value >= *scale)
        .unwrap_or(0);
    let mut scaled = round_one_decimal(value / SCALE_WORDS[idx].0);
    if scaled >= 1_000.0 && idx + 1 < SCALE_WORDS.len() {
        idx += 1;
        scaled = round_one_decimal(value / SCALE_WORDS[idx].0);
    }

    let mut out = String::new();
    let _ = write!(out, "{scaled:.1}");
    if out.ends_with(".0") {
        out.truncate(out.len() - 2);
    }
    out.push(' ');
    out.push_str(SCALE_WORDS[idx].1);
    out
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
