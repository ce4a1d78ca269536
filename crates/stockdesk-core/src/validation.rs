//! Validation of the "add stock position" form.
//!
//! Every rule is checked independently so the page can show all problems at
//! once instead of one per submission attempt.

use serde::{Deserialize, Serialize};

use crate::{Symbol, ValidationError};

/// Raw position input as read from the form at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntryInput {
    pub symbol: String,
    pub quantity: f64,
    pub avg_price: f64,
}

impl StockEntryInput {
    pub fn new(symbol: impl Into<String>, quantity: f64, avg_price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            avg_price,
        }
    }

    /// Builds an input from the three form fields' text. Numeric fields are
    /// read with [`parse_float`], so unreadable text becomes `NaN` and fails
    /// validation.
    pub fn from_form(symbol: &str, quantity: &str, avg_price: &str) -> Self {
        Self::new(symbol, parse_float(quantity), parse_float(avg_price))
    }

    /// Validates with the default messages and converts into a typed entry.
    pub fn into_entry(self) -> Result<StockEntry, ValidationResult> {
        let result = validate_stock_form(&self);
        if !result.is_valid {
            return Err(result);
        }

        match Symbol::parse(&self.symbol) {
            Ok(symbol) => Ok(StockEntry {
                symbol,
                quantity: self.quantity,
                avg_price: self.avg_price,
            }),
            Err(error) => Err(ValidationResult::from_issues(
                vec![error],
                &ValidationMessages::default(),
            )),
        }
    }
}

/// A position that passed every form rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    pub symbol: Symbol,
    pub quantity: f64,
    pub avg_price: f64,
}

/// Outcome of one validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// User-facing messages, in rule order.
    pub errors: Vec<String>,
    #[serde(skip)]
    pub issues: Vec<ValidationError>,
}

impl ValidationResult {
    fn from_issues(issues: Vec<ValidationError>, messages: &ValidationMessages) -> Self {
        Self {
            is_valid: issues.is_empty(),
            errors: issues.iter().map(|issue| messages.render(issue)).collect(),
            issues,
        }
    }
}

/// Message text shown for each violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessages {
    pub symbol_required: String,
    pub symbol_format: String,
    pub quantity_not_positive: String,
    pub avg_price_not_positive: String,
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            symbol_required: ValidationError::SymbolRequired.to_string(),
            symbol_format: ValidationError::SymbolFormat {
                value: String::new(),
            }
            .to_string(),
            quantity_not_positive: ValidationError::QuantityNotPositive.to_string(),
            avg_price_not_positive: ValidationError::AvgPriceNotPositive.to_string(),
        }
    }
}

impl ValidationMessages {
    /// The Hebrew strings the portfolio pages ship with.
    pub fn hebrew() -> Self {
        Self {
            symbol_required: String::from("סימול מניה הוא שדה חובה"),
            symbol_format: String::from("סימול מניה חייב להיות 1-5 אותיות באנגלית"),
            quantity_not_positive: String::from("כמות מניות חייבת להיות מספר חיובי"),
            avg_price_not_positive: String::from("מחיר ממוצע חייב להיות מספר חיובי"),
        }
    }

    pub fn render(&self, issue: &ValidationError) -> String {
        match issue {
            ValidationError::SymbolRequired => self.symbol_required.clone(),
            ValidationError::SymbolFormat { .. } => self.symbol_format.clone(),
            ValidationError::QuantityNotPositive => self.quantity_not_positive.clone(),
            ValidationError::AvgPriceNotPositive => self.avg_price_not_positive.clone(),
        }
    }
}

/// Checks `input` against every form rule using the default messages.
pub fn validate_stock_form(input: &StockEntryInput) -> ValidationResult {
    validate_stock_form_with(input, &ValidationMessages::default())
}

/// Checks `input` against every form rule, rendering with `messages`.
pub fn validate_stock_form_with(
    input: &StockEntryInput,
    messages: &ValidationMessages,
) -> ValidationResult {
    let mut issues = Vec::new();

    if let Err(error) = Symbol::parse(&input.symbol) {
        issues.push(error);
    }
    if !is_positive(input.quantity) {
        issues.push(ValidationError::QuantityNotPositive);
    }
    if !is_positive(input.avg_price) {
        issues.push(ValidationError::AvgPriceNotPositive);
    }

    ValidationResult::from_issues(issues, messages)
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Reads the longest leading decimal literal of `text`, the way browser form
/// code reads numeric inputs: `"12abc"` is `12`, `" 3.5e2 "` is `350`,
/// `"Infinity"` is infinite, and text without a leading number is `NaN`.
pub fn parse_float(text: &str) -> f64 {
    leading_number(text.trim_start_matches(is_form_whitespace)).map_or(f64::NAN, |(value, _)| value)
}

/// Parses `text` only when, once trimmed, it is one number and nothing else.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(is_form_whitespace);
    match leading_number(trimmed) {
        Some((value, consumed)) if consumed == trimmed.len() => Some(value),
        _ => None,
    }
}

/// Whitespace as browser form code trims it: Unicode white space plus the
/// byte order mark.
pub(crate) fn is_form_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{FEFF}'
}

/// Value and byte length of the decimal literal at the start of `text`.
fn leading_number(text: &str) -> Option<(f64, usize)> {
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if text[end..].starts_with("Infinity") {
        let value = if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some((value, end + "Infinity".len()));
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        end += 1 + fraction_digits;
    }

    if integer_digits + fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    text[..end].parse().ok().map(|value| (value, end))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(symbol: &str) -> StockEntryInput {
        StockEntryInput::new(symbol, 10.0, 150.25)
    }

    #[test]
    fn lowercase_symbol_is_normalized_and_valid() {
        let result = validate_stock_form(&entry("  aapl "));
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn empty_symbol_reports_required() {
        let result = validate_stock_form(&entry(""));
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec![String::from("symbol is required")]);
        assert_eq!(result.issues, vec![ValidationError::SymbolRequired]);
    }

    #[test]
    fn long_symbol_reports_format() {
        let result = validate_stock_form(&entry("TOOLONG1"));
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![String::from("symbol must be 1-5 Latin letters")]
        );
    }

    #[test]
    fn all_violations_are_collected_in_rule_order() {
        let result = validate_stock_form(&StockEntryInput::new("", 0.0, -5.0));

        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                String::from("symbol is required"),
                String::from("quantity must be a positive number"),
                String::from("average price must be a positive number"),
            ]
        );
    }

    #[test]
    fn quantity_and_price_share_rule_but_not_message() {
        let result = validate_stock_form(&StockEntryInput::new("MSFT", 0.0, -5.0));

        assert_eq!(
            result.issues,
            vec![
                ValidationError::QuantityNotPositive,
                ValidationError::AvgPriceNotPositive
            ]
        );
        assert_ne!(result.errors[0], result.errors[1]);
    }

    #[test]
    fn non_numeric_and_non_finite_amounts_fail() {
        for quantity in [f64::NAN, f64::INFINITY, -0.0] {
            let result = validate_stock_form(&StockEntryInput::new("IBM", quantity, 1.0));
            assert_eq!(result.issues, vec![ValidationError::QuantityNotPositive]);
        }
    }

    #[test]
    fn hebrew_messages_replace_text_only() {
        let result = validate_stock_form_with(
            &StockEntryInput::new("", 1.0, 1.0),
            &ValidationMessages::hebrew(),
        );
        assert_eq!(result.errors, vec![String::from("סימול מניה הוא שדה חובה")]);
        assert_eq!(result.issues, vec![ValidationError::SymbolRequired]);
    }

    #[test]
    fn form_text_is_read_as_leading_number() {
        let input = StockEntryInput::from_form("nvda", "12 shares", "abc");
        assert_eq!(input.quantity, 12.0);
        assert!(input.avg_price.is_nan());

        let result = validate_stock_form(&input);
        assert_eq!(result.issues, vec![ValidationError::AvgPriceNotPositive]);
    }

    #[test]
    fn into_entry_returns_normalized_symbol() {
        let entry = StockEntryInput::new("goog", 3.0, 99.5)
            .into_entry()
            .expect("valid entry");
        assert_eq!(entry.symbol.as_str(), "GOOG");

        let rejected = StockEntryInput::new("goog", 0.0, 99.5)
            .into_entry()
            .expect_err("zero quantity");
        assert!(!rejected.is_valid);
    }

    #[test]
    fn parse_float_reads_prefix_literals() {
        assert_eq!(parse_float("42"), 42.0);
        assert_eq!(parse_float("  -3.5xyz"), -3.5);
        assert_eq!(parse_float(".25"), 0.25);
        assert_eq!(parse_float("7."), 7.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("2E-2px"), 0.02);
        assert_eq!(parse_float("+8"), 8.0);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("inf").is_nan());
        assert!(parse_float("$5").is_nan());
    }

    #[test]
    fn parse_number_requires_whole_text() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("12px"), None);
        assert_eq!(parse_number("1e"), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("\u{FEFF}4.5\u{FEFF}"), Some(4.5));
        assert_eq!(parse_float("\u{FEFF} 3px"), 3.0);
    }
}
