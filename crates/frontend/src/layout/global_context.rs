use contracts::enums::BackendStatus;
use contracts::reports::{DashboardState, ReportDescriptor, ReportParams, PreviewResult};
use leptos::prelude::*;

/// Dashboard state shared through Leptos context.
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub state: RwSignal<DashboardState>,
}

impl DashboardContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(DashboardState::default()),
        }
    }

    pub fn params(&self) -> ReportParams {
        self.state.with(|s| s.params.clone())
    }

    pub fn set_farm(&self, farm: String) {
        self.state.update(|s| s.params.farm = farm);
    }

    pub fn set_product(&self, product: String) {
        self.state.update(|s| s.params.product = product);
    }

    pub fn backend_status(&self) -> BackendStatus {
        self.state.with(|s| s.backend_status)
    }

    pub fn preview(&self, report_id: &str) -> Option<PreviewResult> {
        self.state.with(|s| s.preview(report_id).cloned())
    }

    pub fn is_loading(&self, report_id: &str) -> bool {
        self.state.with(|s| s.is_loading(report_id))
    }

    pub fn can_generate(&self, descriptor: &ReportDescriptor) -> bool {
        self.state.with(|s| s.can_generate(descriptor))
    }
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>().expect("DashboardContext not provided in context")
}
