use super::parser::decode_and_report;
use crate::layout::toaster::use_toasts;
use crate::shared::icons::icon;
use contracts::reports::SpreadsheetGrid;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

/// Tabular preview of the first sheet of a workbook
#[component]
pub fn ExcelPreview(
    /// Raw workbook bytes as returned by the backend
    bytes: Arc<[u8]>,
    #[prop(into)] filename: String,
) -> impl IntoView {
    let toasts = use_toasts();
    let (sheet, set_sheet) = signal(Option::<SpreadsheetGrid>::None);

    Effect::new(move |_| {
        let bytes = bytes.clone();
        spawn_local(async move {
            // let the spinner paint before the synchronous decode
            TimeoutFuture::new(0).await;
            set_sheet.set(Some(decode_and_report(&bytes, &toasts)));
        });
    });

    view! {
        {move || match sheet.get() {
            None => view! {
                <div class="preview__loading">
                    <span class="spinner"></span>
                    <span>"Cargando datos..."</span>
                </div>
            }.into_any(),
            Some(grid) => {
                let header = grid.header().map(|cells| cells.to_vec()).unwrap_or_default();
                let body = grid.body().to_vec();
                view! {
                    <div class="preview">
                        <div class="preview__filename">
                            {icon("file-spreadsheet")}
                            {filename.clone()}
                        </div>
                        <div class="preview__table-wrap">
                            <table class="table__data table--striped preview__table">
                                <thead class="table__head">
                                    <tr>
                                        {header
                                            .into_iter()
                                            .map(|cell| view! { <th class="table__header-cell">{cell}</th> })
                                            .collect_view()}
                                    </tr>
                                </thead>
                                <tbody>
                                    {body
                                        .into_iter()
                                        .map(|row| view! {
                                            <tr class="table__row">
                                                {row
                                                    .into_iter()
                                                    .map(|cell| view! { <td class="table__cell">{cell}</td> })
                                                    .collect_view()}
                                            </tr>
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </div>
                }.into_any()
            }
        }}
    }
}
