pub mod footer;
pub mod global_context;
pub mod header;
pub mod toaster;

use leptos::prelude::*;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title, backend status)          |
/// +------------------------------------------+
/// |  Content                                 |
/// +------------------------------------------+
/// |  Footer (summary tiles)                  |
/// +------------------------------------------+
/// ```
/// The toaster floats above everything in the top-right corner.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                {children()}
                <footer::Footer />
            </main>
            <toaster::Toaster />
        </div>
    }
}
