use crate::layout::global_context::use_dashboard;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let dashboard = use_dashboard();
    let status = Memo::new(move |_| dashboard.backend_status());

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <div class="header__logo">{icon("leaf")}</div>
                <div>
                    <h1 class="header__title">"EverGreen Analytics"</h1>
                    <p class="header__subtitle">
                        "Sistema de análisis para la gestión agrícola inteligente"
                    </p>
                    <div class="header__badges">
                        <Badge variant="neutral">"Módulo Analítica (ANA)"</Badge>
                        <Badge variant=Signal::derive(move || Some(status.get().badge_variant().to_string()))>
                            {move || format!("Backend: {}", status.get().display_name())}
                        </Badge>
                    </div>
                </div>
            </div>
        </header>
    }
}
