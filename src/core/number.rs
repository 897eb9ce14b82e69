//! Numeric text validation.
//!
//! Two pure predicates decide what the input field may hold: a *complete*
//! number can be consumed as an operand, a *partial* number is an
//! intermediate typing state (`"-"`, `"3."`, `"2e"`) that must not be
//! rejected while the user is still typing.
//!
//! Both `.` and `,` are accepted as the decimal separator. Only ASCII
//! digits and a lowercase `e` exponent marker are recognised.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Sign, integer part without leading zeros, optional fraction, optional exponent.
    static ref COMPLETE_NUMBER: Regex =
        Regex::new(r"^[+-]?([1-9][0-9]*|0)([.,][0-9]+)?(e[+-]?[0-9]+)?$").unwrap();

    /// Empty text or a bare sign.
    static ref BARE_SIGN: Regex = Regex::new(r"^[+-]?$").unwrap();

    /// Integer part followed by a bare decimal separator.
    static ref TRAILING_SEPARATOR: Regex =
        Regex::new(r"^[+-]?([1-9][0-9]*|0)[.,]?$").unwrap();

    /// Mantissa followed by a bare exponent marker, optionally signed.
    static ref TRAILING_EXPONENT: Regex =
        Regex::new(r"^[+-]?([1-9][0-9]*|0)([.,][0-9]+)?(e[+-]?)?$").unwrap();
}

/// Check if `text` is a complete number usable as an operand.
///
/// # Example
///
/// ```rust
/// use tally::core::is_complete_number;
///
/// assert!(is_complete_number("-3.5e-2"));
/// assert!(is_complete_number("3,5"));
/// assert!(!is_complete_number("3."));
/// assert!(!is_complete_number("007"));
/// ```
pub fn is_complete_number(text: &str) -> bool {
    COMPLETE_NUMBER.is_match(text)
}

/// Check if `text` is an in-progress number the user may still be typing.
///
/// # Example
///
/// ```rust
/// use tally::core::is_partial_number;
///
/// assert!(is_partial_number(""));
/// assert!(is_partial_number("-"));
/// assert!(is_partial_number("3,"));
/// assert!(is_partial_number("3.5e+"));
/// assert!(!is_partial_number("5-"));
/// ```
pub fn is_partial_number(text: &str) -> bool {
    BARE_SIGN.is_match(text)
        || TRAILING_SEPARATOR.is_match(text)
        || TRAILING_EXPONENT.is_match(text)
}

/// Check if `text` may replace the current input.
///
/// This is the gate for every keystroke: partial or complete numbers are
/// accepted, anything else is discarded.
pub fn is_accepted_input(text: &str) -> bool {
    is_partial_number(text) || is_complete_number(text)
}

/// Numeric value of a complete number.
///
/// A `,` separator is read as the decimal point. Returns `None` if `text`
/// is not a complete number.
///
/// # Example
///
/// ```rust
/// use tally::core::parse_operand;
///
/// assert_eq!(parse_operand("3,5"), Some(3.5));
/// assert_eq!(parse_operand("-2e3"), Some(-2000.0));
/// assert_eq!(parse_operand("2e"), None);
/// ```
pub fn parse_operand(text: &str) -> Option<f64> {
    if !is_complete_number(text) {
        return None;
    }
    text.replace(',', ".").parse().ok()
}

/// Display text for a computed value.
///
/// Finite values use the shortest text that reads back to the same `f64`:
/// plain decimal notation for magnitudes in `[1e-6, 1e21)`, exponent
/// notation with an explicit exponent sign otherwise. Both zeros render as
/// `"0"`. Non-finite values render as `"Infinity"`, `"-Infinity"` and
/// `"NaN"`, none of which are complete numbers.
///
/// # Example
///
/// ```rust
/// use tally::core::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => scientific,
    }
}
