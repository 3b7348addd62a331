use crate::layout::global_context::use_dashboard;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use contracts::reports::params::{FARM_OPTIONS, PRODUCT_OPTIONS};
use leptos::prelude::*;
use thaw::*;

fn options(values: &[&str]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}

/// Parámetros de consulta: finca y producto
#[component]
pub fn ParamsPanel() -> impl IntoView {
    let dashboard = use_dashboard();
    let farm = Signal::derive(move || dashboard.state.with(|s| s.params.farm.clone()));
    let product = Signal::derive(move || dashboard.state.with(|s| s.params.product.clone()));

    view! {
        <Card class="params-panel">
            <div class="params-panel__header">
                <h3 class="params-panel__title">
                    {icon("file-text")}
                    "Parámetros de Consulta"
                </h3>
                <p class="params-panel__description">
                    "Completa los campos necesarios para generar los reportes específicos"
                </p>
            </div>
            <div class="params-panel__grid">
                <Select
                    id="finca"
                    label="Nombre de la Finca"
                    placeholder="Selecciona una finca"
                    hint="Requerido para reportes de histórico y costos"
                    value=farm
                    options=options(&FARM_OPTIONS)
                    on_change=Callback::new(move |value: String| dashboard.set_farm(value))
                />
                <Select
                    id="producto"
                    label="Producto"
                    placeholder="Selecciona un producto"
                    hint="Requerido para reporte Top 3"
                    value=product
                    options=options(&PRODUCT_OPTIONS)
                    on_change=Callback::new(move |value: String| dashboard.set_product(value))
                />
            </div>
        </Card>
    }
}
