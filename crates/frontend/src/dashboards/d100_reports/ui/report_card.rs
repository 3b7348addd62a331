use crate::config::DashboardConfig;
use crate::layout::global_context::use_dashboard;
use crate::layout::toaster::use_toasts;
use crate::shared::api_utils::GlooClient;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::excel_preview::ExcelPreview;
use crate::shared::export::{AnchorSaver, BrowserObjectUrls};
use crate::shared::icons::{icon, report_icon};
use crate::shared::pdf_preview::PdfPreview;
use crate::usecases::u101_generate_preview::{generate_preview, PreviewDeps};
use crate::usecases::u102_download_report::download_report;
use contracts::enums::OutputKind;
use contracts::reports::{PreviewContent, ReportDescriptor, ReportRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// One catalog entry: header, gating note, preview and actions
#[component]
pub fn ReportCard(descriptor: &'static ReportDescriptor) -> impl IntoView {
    let dashboard = use_dashboard();
    let toasts = use_toasts();
    let config = use_context::<DashboardConfig>().expect("DashboardConfig not provided in context");
    let base_url = StoredValue::new(config.base_url().to_string());
    let request_timeout_ms = config.backend.request_timeout_ms;

    let id = descriptor.id;
    let preview = Memo::new(move |_| dashboard.preview(id));
    let is_loading = Memo::new(move |_| dashboard.is_loading(id));
    let can_generate = Memo::new(move |_| dashboard.can_generate(descriptor));
    let has_preview = move || preview.with(|p| p.is_some());

    let current_request =
        move || -> ReportRequest { descriptor.request(&base_url.get_value(), &dashboard.params()) };

    let on_generate = move |_: leptos::ev::MouseEvent| {
        if !can_generate.get_untracked() {
            return;
        }
        let request = current_request();
        spawn_local(async move {
            let client = GlooClient::new(request_timeout_ms);
            let deps = PreviewDeps {
                client: &client,
                urls: &BrowserObjectUrls,
                notifier: &toasts,
            };
            let _ = generate_preview(&dashboard.state, &deps, &request).await;
        });
    };

    let on_download = move |_: leptos::ev::MouseEvent| {
        let request = current_request();
        spawn_local(async move {
            let client = GlooClient::new(request_timeout_ms);
            let _ = download_report(&client, &BrowserObjectUrls, &AnchorSaver, &toasts, &request).await;
        });
    };

    let kind_icon = match descriptor.output_kind {
        OutputKind::Spreadsheet => icon("file-spreadsheet"),
        OutputKind::Document => icon("file-text"),
    };

    view! {
        <Card class=format!("report-card report-card--{}", id)>
            <div class="report-card__header">
                <Flex align=FlexAlign::Center gap=FlexGap::Medium>
                    <div class="report-card__icon">{report_icon(id)}</div>
                    <div>
                        <h4 class="report-card__title">{descriptor.title}</h4>
                        <Badge variant="neutral">{descriptor.audience}</Badge>
                    </div>
                </Flex>
                <span class="report-card__kind">
                    {kind_icon}
                    {descriptor.output_kind.label()}
                </span>
            </div>

            <p class="report-card__description">{descriptor.description}</p>

            {descriptor.input.map(|kind| view! {
                <div class="report-card__requires">
                    <strong>"Requiere:"</strong>
                    " "
                    {kind.requirement()}
                </div>
            })}

            {move || preview.get().map(|result| {
                let filename = result.filename().to_string();
                let body = match result.content().clone() {
                    PreviewContent::Spreadsheet(bytes) => {
                        view! { <ExcelPreview bytes=bytes filename=filename /> }.into_any()
                    }
                    PreviewContent::Document { url } => {
                        view! { <PdfPreview url=url filename=filename /> }.into_any()
                    }
                };
                view! {
                    <div class="report-card__preview">
                        <h5 class="report-card__preview-title">"Vista Previa:"</h5>
                        {body}
                    </div>
                }
            })}

            <Flex vertical=true gap=FlexGap::Small>
                <Button
                    class="button--block"
                    variant=Signal::derive(move || {
                        Some(if can_generate.get() { "primary" } else { "secondary" }.to_string())
                    })
                    disabled=Signal::derive(move || Some(!can_generate.get() || is_loading.get()))
                    on_click=Callback::new(on_generate)
                >
                    {move || {
                        if is_loading.get() {
                            view! {
                                <span class="spinner spinner--sm"></span>
                                "Generando vista previa..."
                            }
                                .into_any()
                        } else {
                            let caption = if has_preview() {
                                "Actualizar Vista Previa"
                            } else {
                                "Generar Vista Previa"
                            };
                            view! {
                                {icon("file-text")}
                                {caption}
                            }
                                .into_any()
                        }
                    }}
                </Button>
                <Show when=has_preview>
                    <Button
                        class="button--block"
                        variant="outline"
                        on_click=Callback::new(on_download)
                    >
                        {icon("download")}
                        "Descargar Archivo"
                    </Button>
                </Show>
            </Flex>
        </Card>
    }
}
