//! Fetch-and-classify pipeline behind the "Generar Vista Previa" button.

use super::common::{DashboardStore, LoadingGuard, Notifier, ObjectUrls, ReportClient};
use contracts::enums::OutputKind;
use contracts::reports::{PreviewResult, ReportError, ReportRequest};

pub const LOADING_MESSAGE: &str = "Generando vista previa...";
pub const SUCCESS_MESSAGE: &str = "Vista previa generada exitosamente";

/// Everything the pipeline needs from the outside world
pub struct PreviewDeps<'a, C: ?Sized, U: ?Sized, N: ?Sized> {
    pub client: &'a C,
    pub urls: &'a U,
    pub notifier: &'a N,
}

/// Fetches a report and stores it as the preview for its id.
///
/// On failure the previous preview for the id is left untouched and exactly
/// one error toast is shown. The loading flag is cleared on every path.
/// Calls for the same id are not deduplicated: whichever finishes last wins.
pub async fn generate_preview<S, C, U, N>(
    store: &S,
    deps: &PreviewDeps<'_, C, U, N>,
    request: &ReportRequest,
) -> Result<(), ReportError>
where
    S: DashboardStore,
    C: ReportClient + ?Sized,
    U: ObjectUrls + ?Sized,
    N: Notifier + ?Sized,
{
    let _loading = LoadingGuard::begin(store, request.report_id);
    let toast = deps.notifier.loading(LOADING_MESSAGE);
    log::debug!("Generating preview for '{}' from {}", request.report_id, request.endpoint);

    let preview = match fetch_preview(deps.client, deps.urls, request).await {
        Ok(preview) => preview,
        Err(e) => {
            log::error!("Preview for '{}' failed: {}", request.report_id, e);
            deps.notifier.error(&e.to_string(), Some(toast));
            return Err(e);
        }
    };

    let mut replaced = None;
    store.mutate(|state| replaced = state.replace_preview(preview));

    if let Some(url) = replaced.as_ref().and_then(|old| old.content().object_url()) {
        deps.urls.revoke(url);
    }

    deps.notifier.success(SUCCESS_MESSAGE, Some(toast));
    Ok(())
}

/// GET, validate, then branch on the declared output kind
async fn fetch_preview<C, U>(
    client: &C,
    urls: &U,
    request: &ReportRequest,
) -> Result<PreviewResult, ReportError>
where
    C: ReportClient + ?Sized,
    U: ObjectUrls + ?Sized,
{
    let payload = client.get(&request.endpoint).await?.into_payload()?;

    match request.output_kind {
        OutputKind::Spreadsheet => {
            PreviewResult::spreadsheet(request.report_id, payload, request.filename.as_str())
        }
        OutputKind::Document => {
            let url = urls.create(&payload, request.output_kind.mime_type())?;
            Ok(PreviewResult::document(
                request.report_id,
                url,
                request.filename.as_str(),
            ))
        }
    }
}
