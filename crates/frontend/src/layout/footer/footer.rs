use contracts::reports::catalog;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Footer() -> impl IntoView {
    let tiles = [
        (catalog().len().to_string(), "Tipos de Reportes", "tile--primary"),
        ("Excel + PDF".to_string(), "Formatos Disponibles", "tile--accent"),
        ("Tiempo Real".to_string(), "Datos Actualizados", "tile--chart-2"),
        ("Seguro".to_string(), "Información Protegida", "tile--chart-3"),
    ];

    view! {
        <footer data-zone="footer" class="summary">
            <Card class="summary__card">
                <div class="summary__grid">
                    {tiles
                        .into_iter()
                        .map(|(value, caption, modifier)| view! {
                            <div class="summary__tile">
                                <div class=format!("summary__value {}", modifier)>{value}</div>
                                <div class="summary__caption">{caption}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </Card>
        </footer>
    }
}
