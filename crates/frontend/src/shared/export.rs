//! Browser object URLs and the hidden-anchor save-as.
use crate::usecases::common::{FileSaver, ObjectUrls};
use contracts::reports::ReportError;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// `URL.createObjectURL` / `URL.revokeObjectURL` over in-memory blobs
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserObjectUrls;

impl ObjectUrls for BrowserObjectUrls {
    fn create(&self, bytes: &[u8], mime_type: &str) -> Result<String, ReportError> {
        let blob = create_blob(bytes, mime_type)?;
        Url::create_object_url_with_blob(&blob)
            .map_err(|e| ReportError::ObjectUrl(format!("Failed to create object URL: {:?}", e)))
    }

    fn revoke(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("Failed to revoke {}: {:?}", url, e);
        }
    }
}

/// Wraps the response bytes in a typed Blob
fn create_blob(bytes: &[u8], mime_type: &str) -> Result<Blob, ReportError> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_type);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| ReportError::ObjectUrl(format!("Failed to create blob: {:?}", e)))
}

/// Saves through a temporary `<a download>` that is removed right after the click
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorSaver;

impl FileSaver for AnchorSaver {
    fn save(&self, url: &str, filename: &str) -> Result<(), ReportError> {
        let dom = |e: wasm_bindgen::JsValue| ReportError::ObjectUrl(format!("{:?}", e));

        let window = web_sys::window().ok_or(ReportError::ObjectUrl("No window object".into()))?;
        let document = window
            .document()
            .ok_or(ReportError::ObjectUrl("No document object".into()))?;
        let body = document
            .body()
            .ok_or(ReportError::ObjectUrl("No body element".into()))?;

        let anchor = document
            .create_element("a")
            .map_err(dom)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| ReportError::ObjectUrl("Failed to cast to anchor".into()))?;

        anchor.set_href(url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").map_err(dom)?;

        body.append_child(&anchor).map_err(dom)?;
        anchor.click();
        // the file is already saved once clicked
        if let Err(e) = body.remove_child(&anchor) {
            log::warn!("Failed to remove download anchor: {:?}", e);
        }

        Ok(())
    }
}
