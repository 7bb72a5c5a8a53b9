use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

re!(re_json_fence, r"(?s)```json\n(.*?)\n```");
re!(re_line_comment, r"(?m)//.*$");
re!(re_disallowed_number_char, r"[^a-zA-Z0-9\-/_.]");

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The model response is not valid JSON after cleanup. Terminal for this
    /// document; the cleaned text is kept for diagnosis.
    #[error("Invalid JSON format in model response")]
    MalformedResponse { raw_response: String },
}

/// Pulls the field mapping out of a raw model response.
///
/// A fenced ```json block is preferred when present; otherwise the whole
/// response is the candidate. Line-trailing `//` comments are stripped before
/// parsing; models add them despite instructions not to.
pub fn parse_response(raw: &str) -> Result<Map<String, Value>, ExtractError> {
    let candidate = match re_json_fence().captures(raw) {
        Some(c) => c.get(1).map_or(raw, |m| m.as_str()).trim(),
        None => raw.trim(),
    };
    let cleaned = re_line_comment().replace_all(candidate, "").trim().to_string();

    match serde_json::from_str::<Value>(&cleaned) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) | Err(_) => {
            tracing::warn!("model response is not a JSON object");
            Err(ExtractError::MalformedResponse { raw_response: cleaned })
        }
    }
}

// ── Bill number cleaning ─────────────────────────────────────────────────────

/// Label fragments the model tends to leave glued onto the number, scanned in
/// this order. `B111`/`Bi11` are OCR misreads of "Bill".
pub const BILL_NUMBER_PREFIXES: [&str; 9] =
    ["BILLNO", "Invoice", "Receipt", "Bill", "No:", "No.", "B111", "Bi11", "#"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedBillNumber {
    pub value: String,
    /// Purely numeric values of three or fewer digits are usually order
    /// numbers picked up by mistake. Diagnostic only; the value stands.
    pub suspiciously_short: bool,
}

/// Strips known label prefixes, a leading `#`, and everything outside
/// `[A-Za-z0-9-/_.]` from a reported bill number.
pub fn clean_bill_number(raw: &str) -> CleanedBillNumber {
    let mut number: &str = raw;
    for prefix in BILL_NUMBER_PREFIXES {
        if let Some(rest) = number.strip_prefix(prefix) {
            number = rest.trim();
        }
    }
    let number = number.strip_prefix('#').unwrap_or(number);

    let value = re_disallowed_number_char()
        .replace_all(number, "")
        .trim()
        .to_string();

    let suspiciously_short =
        !value.is_empty() && value.len() <= 3 && value.chars().all(|c| c.is_ascii_digit());
    if suspiciously_short {
        tracing::warn!(value = %value, "suspiciously short bill number, may be an order number");
    }

    CleanedBillNumber { value, suspiciously_short }
}
