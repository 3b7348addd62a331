use super::params_panel::ParamsPanel;
use super::report_card::ReportCard;
use contracts::reports::catalog;
use leptos::prelude::*;

#[component]
pub fn ReportsDashboard() -> impl IntoView {
    view! {
        <div class="reports-dashboard">
            <section class="reports-dashboard__hero">
                <h2>"Reportes Inteligentes para el Futuro Agrícola"</h2>
                <p>
                    "Accede a información consolidada sobre producción, costos y rendimiento. "
                    "Toma decisiones informadas con datos precisos y actualizados."
                </p>
            </section>

            <section class="reports-dashboard__params">
                <ParamsPanel />
            </section>

            <section class="reports-dashboard__reports">
                <h3>"Reportes Disponibles"</h3>
                <p class="reports-dashboard__subtitle">
                    "Selecciona el tipo de reporte que necesitas generar"
                </p>
                <div class="reports-dashboard__grid">
                    {catalog()
                        .iter()
                        .map(|descriptor| view! { <ReportCard descriptor=descriptor /> })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
