use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use factura_core::Amount;

/// Coerces whatever the model reported as `Bill_Amount` into a canonical
/// two-decimal amount.
///
/// Strings lose everything but digits and decimal points before parsing, so
/// `"₹8,786"` and `"$298"` come through. Empty values, the literal `"Error"`,
/// nulls, and anything unparsable recover to `0.00` with a warning; amount
/// failures never fail the record.
pub fn normalize_amount(value: Option<&Value>) -> Amount {
    match value {
        None | Some(Value::Null) => {
            tracing::warn!("bill amount missing, defaulting to 0.00");
            Amount::zero()
        }
        Some(Value::String(s)) => normalize_amount_str(s),
        Some(Value::Number(n)) => parse_decimal(&n.to_string()).unwrap_or_else(|| {
            tracing::warn!(value = %n, "unrepresentable bill amount, defaulting to 0.00");
            Amount::zero()
        }),
        Some(other) => {
            tracing::warn!(value = %other, "bill amount has unexpected type, defaulting to 0.00");
            Amount::zero()
        }
    }
}

fn normalize_amount_str(s: &str) -> Amount {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("error") {
        tracing::warn!(value = %s, "invalid bill amount, defaulting to 0.00");
        return Amount::zero();
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return Amount::zero();
    }

    parse_decimal(&cleaned).unwrap_or_else(|| {
        tracing::warn!(value = %s, "failed to parse bill amount, defaulting to 0.00");
        Amount::zero()
    })
}

fn parse_decimal(s: &str) -> Option<Amount> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
        .map(Amount::from_decimal)
}
