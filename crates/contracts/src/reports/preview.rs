use super::error::ReportError;
use crate::enums::OutputKind;
use std::sync::Arc;

/// What a successful fetch produced, tagged by the descriptor's output kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewContent {
    /// Raw workbook bytes, decoded lazily by the preview widget
    Spreadsheet(Arc<[u8]>),
    /// Object URL pointing at the PDF blob; must be revoked when replaced
    Document { url: String },
}

impl PreviewContent {
    pub fn kind(&self) -> OutputKind {
        match self {
            PreviewContent::Spreadsheet(_) => OutputKind::Spreadsheet,
            PreviewContent::Document { .. } => OutputKind::Document,
        }
    }

    pub fn object_url(&self) -> Option<&str> {
        match self {
            PreviewContent::Spreadsheet(_) => None,
            PreviewContent::Document { url } => Some(url),
        }
    }
}

/// Latest successful preview for one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewResult {
    report_id: String,
    content: PreviewContent,
    filename: String,
}

impl PreviewResult {
    /// Wraps spreadsheet bytes; an empty payload is rejected
    pub fn spreadsheet(
        report_id: impl Into<String>,
        bytes: Vec<u8>,
        filename: impl Into<String>,
    ) -> Result<Self, ReportError> {
        if bytes.is_empty() {
            return Err(ReportError::EmptyPayload);
        }
        Ok(Self {
            report_id: report_id.into(),
            content: PreviewContent::Spreadsheet(Arc::from(bytes)),
            filename: filename.into(),
        })
    }

    /// Wraps an object URL created from a non-empty document payload
    pub fn document(
        report_id: impl Into<String>,
        url: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            report_id: report_id.into(),
            content: PreviewContent::Document { url: url.into() },
            filename: filename.into(),
        }
    }

    pub fn report_id(&self) -> &str {
        &self.report_id
    }

    pub fn content(&self) -> &PreviewContent {
        &self.content
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn kind(&self) -> OutputKind {
        self.content.kind()
    }
}
