//! "Descargar Archivo": re-fetch a report and save it to disk.

use super::common::{FileSaver, Notifier, ObjectUrls, ReportClient, ScopedObjectUrl};
use contracts::reports::{ReportError, ReportRequest};

pub const LOADING_MESSAGE: &str = "Descargando archivo...";
pub const SUCCESS_MESSAGE: &str = "Archivo descargado exitosamente";

/// Downloads a report independently of any cached preview.
///
/// The temporary object URL lives only for the duration of the save and is
/// revoked on every path.
pub async fn download_report<C, U, F, N>(
    client: &C,
    urls: &U,
    saver: &F,
    notifier: &N,
    request: &ReportRequest,
) -> Result<(), ReportError>
where
    C: ReportClient + ?Sized,
    U: ObjectUrls + ?Sized,
    F: FileSaver + ?Sized,
    N: Notifier + ?Sized,
{
    let toast = notifier.loading(LOADING_MESSAGE);

    match save(client, urls, saver, request).await {
        Ok(()) => {
            log::debug!("Saved '{}' as {}", request.report_id, request.filename);
            notifier.success(SUCCESS_MESSAGE, Some(toast));
            Ok(())
        }
        Err(e) => {
            log::error!("Download of '{}' failed: {}", request.report_id, e);
            notifier.error(&e.to_string(), Some(toast));
            Err(e)
        }
    }
}

async fn save<C, U, F>(client: &C, urls: &U, saver: &F, request: &ReportRequest) -> Result<(), ReportError>
where
    C: ReportClient + ?Sized,
    U: ObjectUrls + ?Sized,
    F: FileSaver + ?Sized,
{
    let payload = client.get(&request.endpoint).await?.into_payload()?;
    let url = ScopedObjectUrl::new(urls, &payload, request.output_kind.mime_type())?;
    saver.save(url.as_str(), &request.filename)
}
