//! Canonical decimal rendering of numeric results.
//!
//! [`format_result()`] turns an `f64` into the string a calculator display
//! would show:
//!
//! - **Bounded precision** - rounded half away from zero to `max_decimals`
//! - **Fixed notation** - never `1e21`, always the full digits
//! - **Trimmed** - no trailing zeros, no dangling decimal point
//! - **No signed zero** - anything that rounds to `-0` prints as `0`
//!
//! # Examples
//!
//! ```
//! use calc_expr::output::{format_result, FormatOptions};
//!
//! let options = FormatOptions::default();
//! assert_eq!(format_result(10.0 / 3.0, &options), "3.333333");
//! assert_eq!(format_result(2.50, &options), "2.5");
//! assert_eq!(format_result(-0.0000001, &options), "0");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

/// Largest number of fractional digits `rust_decimal` can carry.
pub const MAX_DECIMALS: u32 = 28;

/// Options for [`format_result()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Fractional digits kept after rounding (clamped to [`MAX_DECIMALS`])
    pub max_decimals: u32,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions { max_decimals: 6 }
    }
}

impl FormatOptions {
    pub fn with_max_decimals(max_decimals: u32) -> Self {
        FormatOptions { max_decimals }
    }
}

pub fn format_result(value: f64, options: &FormatOptions) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }

    let decimals = options.max_decimals.min(MAX_DECIMALS);

    // Exact binary value, not the shortest decimal that round-trips
    match Decimal::from_f64_retain(value) {
        Some(decimal) => {
            let rounded = decimal
                .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
                .normalize();
            if rounded.is_zero() {
                "0".to_string()
            } else {
                rounded.to_string()
            }
        }
        // Beyond Decimal's range (~7.9e28): such values have no fractional
        // part worth rounding, so plain fixed notation is exact enough
        None => trim_fixed(format!("{:.*}", decimals as usize, value)),
    }
}

fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}

fn trim_fixed(mut fixed: String) -> String {
    if fixed.contains('.') {
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.').len();
        fixed.truncate(trimmed);
    }
    if fixed == "-0" {
        fixed = "0".to_string();
    }
    fixed
}
