use crate::config::load_config;
use crate::dashboards::ReportsDashboard;
use crate::layout::global_context::DashboardContext;
use crate::layout::toaster::ToastService;
use crate::layout::Shell;
use crate::shared::api_utils::GlooClient;
use crate::usecases::u100_health_probe::refresh_backend_status;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let dashboard = DashboardContext::new();

    provide_context(dashboard);
    provide_context(ToastService::new(config.notifications.duration_ms));

    // Probe the backend once on mount
    let health_url = config.health_url();
    let health_timeout_ms = config.backend.health_timeout_ms;
    Effect::new(move |_| {
        let health_url = health_url.clone();
        spawn_local(async move {
            let client = GlooClient::with_timeout(health_timeout_ms);
            refresh_backend_status(&dashboard.state, &client, &health_url).await;
        });
    });

    provide_context(config);

    view! {
        <Shell>
            <ReportsDashboard />
        </Shell>
    }
}
