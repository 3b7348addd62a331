//! Backend health probe, run once when the page loads.

use super::common::{DashboardStore, ReportClient};
use contracts::enums::BackendStatus;

/// One GET against the health endpoint; any 2xx means online.
///
/// Failures are only logged: backend status is informational and never
/// raises a toast.
pub async fn probe<C: ReportClient + ?Sized>(client: &C, health_url: &str) -> BackendStatus {
    match client.get(health_url).await {
        Ok(reply) if reply.is_success() => {
            log::debug!("Backend health check OK ({})", reply.status);
            BackendStatus::Online
        }
        Ok(reply) => {
            log::warn!(
                "Backend health check answered {} {}",
                reply.status,
                reply.status_text
            );
            BackendStatus::Offline
        }
        Err(e) => {
            log::error!("Error al conectar con backend: {}", e);
            BackendStatus::Offline
        }
    }
}

/// Probes the backend and records the result in the dashboard state
pub async fn refresh_backend_status<S, C>(store: &S, client: &C, health_url: &str) -> BackendStatus
where
    S: DashboardStore,
    C: ReportClient + ?Sized,
{
    let status = probe(client, health_url).await;
    store.mutate(|state| state.backend_status = status);
    status
}
