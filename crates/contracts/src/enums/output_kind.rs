/// Binary format a report endpoint answers with.
///
/// Decided by the report descriptor, never sniffed from the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Spreadsheet,
    Document,
}

impl OutputKind {
    /// File extension used for synthesized filenames
    pub fn extension(&self) -> &'static str {
        match self {
            OutputKind::Spreadsheet => "xlsx",
            OutputKind::Document => "pdf",
        }
    }

    /// MIME type for the blob handed to the browser
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputKind::Spreadsheet => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            OutputKind::Document => "application/pdf",
        }
    }

    /// Short label shown on the report card
    pub fn label(&self) -> &'static str {
        match self {
            OutputKind::Spreadsheet => "EXCEL",
            OutputKind::Document => "PDF",
        }
    }
}
