use super::descriptor::ReportDescriptor;
use super::params::ReportParams;
use super::preview::PreviewResult;
use crate::enums::BackendStatus;
use std::collections::{HashMap, HashSet};

/// Whole mutable state of the dashboard page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub params: ReportParams,
    /// At most one preview per report id
    pub previews: HashMap<String, PreviewResult>,
    /// Report ids with a preview fetch in flight
    pub loading: HashSet<String>,
    pub backend_status: BackendStatus,
}

impl DashboardState {
    pub fn preview(&self, report_id: &str) -> Option<&PreviewResult> {
        self.previews.get(report_id)
    }

    pub fn is_loading(&self, report_id: &str) -> bool {
        self.loading.contains(report_id)
    }

    pub fn can_generate(&self, descriptor: &ReportDescriptor) -> bool {
        self.params.allows(descriptor)
    }

    /// Stores a preview under its report id and returns the one it replaced
    pub fn replace_preview(&mut self, preview: PreviewResult) -> Option<PreviewResult> {
        self.previews.insert(preview.report_id().to_string(), preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::catalog::find_report;

    #[test]
    fn test_replace_returns_previous() {
        let mut state = DashboardState::default();
        let first = PreviewResult::document("historico", "blob:1", "historico_Finca_1.pdf");
        let second = PreviewResult::document("historico", "blob:2", "historico_Finca_1.pdf");

        assert!(state.replace_preview(first.clone()).is_none());
        assert_eq!(state.replace_preview(second.clone()), Some(first));
        assert_eq!(state.preview("historico"), Some(&second));
        assert_eq!(state.previews.len(), 1);
    }

    #[test]
    fn test_status_does_not_gate_generation() {
        let state = DashboardState {
            backend_status: BackendStatus::Offline,
            ..Default::default()
        };
        assert!(state.can_generate(find_report("global").unwrap()));
    }
}
