use crate::application::dto::ResolutionReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonReportFormatter adapter producing the machine-readable report
///
/// Pretty-printed with two-space indentation. Both report shapes go
/// through the same path.
#[derive(Debug, Default)]
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, report: &ResolutionReport) -> Result<String> {
        serde_json::to_string_pretty(report).map_err(Into::into)
    }
}
