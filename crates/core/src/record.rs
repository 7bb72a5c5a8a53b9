use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::category::BillCategory;

/// The normalized output of the field pipeline, serialized as the flat
/// mapping downstream report writers consume.
///
/// Invariants: `amount` always carries exactly two fractional digits (0.00 on
/// failure) and `category` is always a taxonomy member. `date` is mm/dd/yyyy
/// best-effort; `time` is "hh:mm AA" or empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BillRecord {
    #[serde(rename = "Bill_Number", default)]
    pub bill_number: String,
    #[serde(rename = "Date", default)]
    pub date: String,
    #[serde(rename = "Bill_Amount", default)]
    pub amount: Amount,
    #[serde(rename = "Time", default)]
    pub time: String,
    #[serde(rename = "Bill_Category", default)]
    pub category: BillCategory,
}
