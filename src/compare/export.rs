//! Downloadable `field,value` summary.

use super::ComparisonResult;
use crate::core::AuError;

impl ComparisonResult {
    /// Field/value pairs in export order, already formatted.
    pub fn csv_fields(&self) -> [(&'static str, String); 7] {
        [
            ("spot_usd_per_oz", format!("{:.2}", self.spot)),
            ("hist_date", self.hist_date.format("%Y-%m-%d").to_string()),
            ("hist_usd_per_oz", format!("{:.2}", self.hist_price)),
            ("ounces_then", format!("{:.6}", self.ounces_then)),
            ("grams_then", format!("{:.2}", self.grams_then)),
            ("ounces_now", format!("{:.6}", self.ounces_now)),
            ("grams_now", format!("{:.2}", self.grams_now)),
        ]
    }

    /// The summary as CSV text: a `field,value` header, one row per field, no trailing newline.
    pub fn to_csv(&self) -> Result<String, AuError> {
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        wtr.write_record(["field", "value"])?;
        for (field, value) in self.csv_fields() {
            wtr.write_record([field, value.as_str()])?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| AuError::Data(format!("csv flush: {e}")))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| AuError::Data(format!("csv encoding: {e}")))?;
        Ok(text.trim_end().to_string())
    }
}
