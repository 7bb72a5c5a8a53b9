pub mod amount;
pub mod classify;
pub mod datetime;
pub mod extract;
pub mod llm;
pub mod pipeline;
pub mod prompt;
pub(crate) mod util;

pub use amount::normalize_amount;
pub use classify::{classify, FUZZY_CUTOFF};
pub use datetime::{normalize_date, normalize_time, parse_time_of_day, TIME_FORMATS};
pub use extract::{
    clean_bill_number, parse_response, CleanedBillNumber, ExtractError, BILL_NUMBER_PREFIXES,
};
pub use llm::{LlmBackend, LlmError, MockLlm};
pub use pipeline::{normalize_fields, normalize_response, ExtractionPipeline, FieldError};
pub use prompt::extraction_prompt;
