use serde_json::{Map, Value};
use thiserror::Error;

use factura_core::BillRecord;

use crate::amount::normalize_amount;
use crate::classify::classify;
use crate::datetime::{normalize_date, normalize_time};
use crate::extract::{clean_bill_number, parse_response, ExtractError};
use crate::llm::{LlmBackend, LlmError};
use crate::prompt::extraction_prompt;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Renders a reported field as the string the cleaners expect. Numbers are
/// stringified; anything else degrades to empty.
fn field_str(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        None | Some(Value::Null) => String::new(),
        Some(other) => {
            tracing::warn!(key, value = %other, "unexpected field type, treating as empty");
            String::new()
        }
    }
}

/// Builds the normalized record from a parsed field mapping. Every field
/// recovers locally: missing or broken values land on the documented
/// defaults instead of failing the record.
pub fn normalize_fields(fields: &Map<String, Value>) -> BillRecord {
    let number = clean_bill_number(&field_str(fields, "Bill_Number"));
    let raw_time = field_str(fields, "Time");

    // The classifier sees the time exactly as reported; only the record
    // gets the re-rendered form.
    let time_for_classifier = (!raw_time.trim().is_empty()).then_some(raw_time.as_str());
    let category = classify(&field_str(fields, "Bill_Category"), time_for_classifier);

    BillRecord {
        bill_number: number.value,
        date: normalize_date(&field_str(fields, "Date")),
        amount: normalize_amount(fields.get("Bill_Amount")),
        time: normalize_time(&raw_time),
        category,
    }
}

/// Parses a raw model response and normalizes it into a record. JSON that
/// stays malformed after cleanup is the one terminal failure.
pub fn normalize_response(raw: &str) -> Result<BillRecord, ExtractError> {
    Ok(normalize_fields(&parse_response(raw)?))
}

/// Orchestrates: prompt → LLM collaborator → parse → normalize.
pub struct ExtractionPipeline<L: LlmBackend> {
    llm: L,
}

impl<L: LlmBackend> ExtractionPipeline<L> {
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    pub fn process_document(&self, document_text: &str) -> Result<BillRecord, FieldError> {
        let prompt = extraction_prompt(document_text);
        let content = self.llm.complete(&prompt)?;
        tracing::debug!(bytes = content.len(), "model response received");
        Ok(normalize_response(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlm;
    use factura_core::BillCategory;

    const GOOD_RESPONSE: &str = "```json\n{\n  \"Bill_Number\": \"BILLNOG0027238\",\n  \"Date\": \"3/6/2025\",\n  \"Time\": \"20:30\",\n  \"Bill_Amount\": \"₹1,234.56\",\n  \"Bill_Category\": \"Food\"\n}\n```";

    #[test]
    fn full_response_normalizes_end_to_end() {
        let record = normalize_response(GOOD_RESPONSE).unwrap();
        assert_eq!(record.bill_number, "G0027238");
        assert_eq!(record.date, "03/06/2025");
        assert_eq!(record.time, "08:30 PM");
        assert_eq!(record.amount.to_string(), "1234.56");
        assert_eq!(record.category, BillCategory::Dinner);
    }

    #[test]
    fn missing_fields_land_on_defaults() {
        let record = normalize_response("{}").unwrap();
        assert_eq!(record.bill_number, "");
        assert_eq!(record.date, "");
        assert_eq!(record.time, "");
        assert_eq!(record.amount.to_string(), "0.00");
        assert_eq!(record.category, BillCategory::General);
    }

    #[test]
    fn malformed_response_is_terminal() {
        assert!(normalize_response("{\"Bill_Number\": ").is_err());
    }

    #[test]
    fn numeric_bill_number_is_stringified() {
        let record = normalize_response("{\"Bill_Number\": 152461188}").unwrap();
        assert_eq!(record.bill_number, "152461188");
    }

    #[test]
    fn unparsable_amount_and_time_recover_locally() {
        let raw = "{\"Bill_Amount\": \"Error\", \"Time\": \"noonish\", \"Bill_Category\": \"fuell\"}";
        let record = normalize_response(raw).unwrap();
        assert_eq!(record.amount.to_string(), "0.00");
        assert_eq!(record.time, "");
        assert_eq!(record.category, BillCategory::Fuel);
    }

    #[test]
    fn food_without_time_defaults_to_dinner() {
        let record =
            normalize_response("{\"Bill_Category\": \"Food\", \"Time\": \"\"}").unwrap();
        assert_eq!(record.category, BillCategory::Dinner);
    }

    #[test]
    fn pipeline_runs_through_a_mock_model() {
        let pipeline = ExtractionPipeline::new(MockLlm::new(GOOD_RESPONSE));
        let record = pipeline.process_document("TOTAL  1,234.56\n20:30").unwrap();
        assert_eq!(record.bill_number, "G0027238");
        assert_eq!(record.category, BillCategory::Dinner);
    }

    #[test]
    fn pipeline_surfaces_malformed_json() {
        let pipeline = ExtractionPipeline::new(MockLlm::new("not json"));
        let err = pipeline.process_document("anything").unwrap_err();
        assert!(matches!(err, FieldError::Extract(_)));
    }
}
