//! Display formatting for evaluation results

/// Magnitudes at or above this render in scientific notation
pub const SCIENTIFIC_UPPER: f64 = 1e9;

/// Non-zero magnitudes below this render in scientific notation
pub const SCIENTIFIC_LOWER: f64 = 1e-6;

/// Formats an evaluation result for the watch display.
///
/// - `|value| >= 1e9`, or a non-zero `|value| < 1e-6`: C-style `%.2e`
///   (`1.00e+09`, `-2.50e-07`)
/// - integral values: no decimal point (`3`)
/// - everything else: six decimals with trailing `'0'` characters and then
///   one trailing `'.'` stripped (`0.333333`, `0.05`)
#[must_use]
pub fn format_result(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= SCIENTIFIC_UPPER || (magnitude < SCIENTIFIC_LOWER && value != 0.0) {
        return scientific(value);
    }

    if value.fract() == 0.0 {
        // Below 1e9, so the cast is exact. Also folds -0 into "0".
        return format!("{}", value as i64);
    }

    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0');
    trimmed.strip_suffix('.').unwrap_or(trimmed).to_string()
}

/// Rust prints `1.00e9`; the display wants a signed, two-digit exponent.
fn scientific(value: f64) -> String {
    let rendered = format!("{value:.2e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        // inf / NaN have no exponent
        None => rendered,
    }
}
