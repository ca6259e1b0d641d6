//! Utility functions for formatting and common operations
//!
//! Centralized formatting for currency, share quantities, and percentages so
//! every output surface renders values the same way.

use rust_decimal::Decimal;

/// Currency symbol options for formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySymbol {
    /// Include "$" prefix (US Dollar)
    Usd,
    /// No currency symbol (for table cells)
    None,
}

/// Core formatting function with full control over output.
///
/// Formats a Decimal using US locale conventions:
/// - Thousands separator: `,` (comma)
/// - Decimal separator: `.` (period)
///
/// # Examples
/// ```
/// use dca::utils::{format_currency_with_symbol, CurrencySymbol};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(
///     format_currency_with_symbol(dec!(1234.56), CurrencySymbol::Usd),
///     "$1,234.56"
/// );
/// assert_eq!(
///     format_currency_with_symbol(dec!(-500), CurrencySymbol::Usd),
///     "-$500.00"
/// );
/// ```
pub fn format_currency_with_symbol(value: Decimal, symbol: CurrencySymbol) -> String {
    let is_negative = value < Decimal::ZERO;
    let abs_value = value.abs();

    // Round to 2 decimal places and format
    let formatted = format!("{:.2}", abs_value);
    let parts: Vec<&str> = formatted.split('.').collect();

    let integer_part = parts[0];
    let decimal_part = parts.get(1).unwrap_or(&"00");

    // Add thousands separators (,) to integer part
    let with_separators: String = integer_part
        .chars()
        .rev()
        .enumerate()
        .flat_map(|(i, c)| {
            if i > 0 && i % 3 == 0 {
                vec![',', c]
            } else {
                vec![c]
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let sign = if is_negative { "-" } else { "" };
    let prefix = match symbol {
        CurrencySymbol::Usd => "$",
        CurrencySymbol::None => "",
    };

    format!("{}{}{}.{}", sign, prefix, with_separators, decimal_part)
}

/// Format as US Dollars with symbol: "$1,234.56"
///
/// # Examples
/// ```
/// use dca::utils::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(1234.56)), "$1,234.56");
/// assert_eq!(format_currency(dec!(-500)), "-$500.00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    format_currency_with_symbol(value, CurrencySymbol::Usd)
}

/// Format a share quantity with up to six decimal places, trailing zeros
/// trimmed: "22.5", "0.333333"
pub fn format_shares(value: Decimal) -> String {
    let rounded = value.round_dp(6).normalize();
    rounded.to_string()
}

/// Format a percentage with two decimal places and sign: "+157.14%", "-25.00%"
pub fn format_signed_pct(value: Decimal) -> String {
    if value >= Decimal::ZERO {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}
