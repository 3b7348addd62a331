use crate::layout::toaster::use_toasts;
use crate::shared::icons::icon;
use crate::usecases::common::Notifier;
use leptos::prelude::*;

pub const LOAD_ERROR_MESSAGE: &str = "Error al cargar la vista previa del PDF";

/// Inline PDF viewer over an object URL owned by the dashboard state
#[component]
pub fn PdfPreview(#[prop(into)] url: String, #[prop(into)] filename: String) -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="preview">
            <div class="preview__filename">
                {icon("file-text")}
                {filename}
            </div>
            <div class="preview__frame-wrap">
                <iframe
                    class="preview__frame"
                    src=url
                    title="Vista previa del PDF"
                    on:error=move |_| {
                        log::error!("PDF preview failed to load");
                        toasts.error(LOAD_ERROR_MESSAGE, None);
                    }
                ></iframe>
            </div>
        </div>
    }
}
