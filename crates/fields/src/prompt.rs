/// Field-by-field rules appended to every extraction prompt. The normalizers
/// downstream tolerate violations of all of them; the instructions exist to
/// make violations rare.
const FORMAT_INSTRUCTIONS: &str = r#"Return a single JSON object with exactly these keys:

"Bill_Number": the actual bill/invoice number, not the order number.
  Look for "Bill No", "Invoice No", "Receipt No" labels; bill numbers are
  usually 5+ characters and often mix letters, digits, and hyphens. In
  "Order No.: 12, Bill No.: 152461188" extract "152461188".
"Date": the most prominent bill date, converted to mm/dd/yyyy.
"Time": the bill time in 12-hour "hh:mm AA" form (e.g. "10:30 PM"), or an
  empty string if no time appears.
"Bill_Amount": the total amount as a NUMBER with 2 decimal places, never a
  string. Use the value labeled "Total" or "Grand Total" when several
  amounts appear, and drop every currency symbol and comma
  (1882 -> 1882.00, "₹8,786" -> 8786.00, "$298" -> 298.00).
"Bill_Category": the closest of: Food, Travel (Auto/Bus/Cab), Fuel,
  Communication, Printing & Stationery, Software License,
  Repairs & Maintenance, Staff Welfare, General.

Output pure JSON only. No explanatory text, no comments, no placeholders."#;

/// Builds the extraction prompt for one reconstructed document.
pub fn extraction_prompt(document_text: &str) -> String {
    format!(
        "Please process the following text, fix spelling errors, and parse to json: {document_text}\n\n{FORMAT_INSTRUCTIONS}"
    )
}
