use crate::usecases::common::Notifier;
use contracts::shared::notifications::{Toast, ToastId, ToastKind, ToastQueue};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Toast notifications; a loading toast is rewritten in place by its outcome
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl ToastService {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            duration_ms,
        }
    }

    pub fn dismiss(&self, id: ToastId) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn visible(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }
}

impl Notifier for ToastService {
    fn show(&self, kind: ToastKind, message: String, replaces: Option<ToastId>) -> ToastId {
        let mut id = ToastId(0);
        self.queue.update(|q| id = q.push(kind, message, replaces));

        if kind.auto_dismiss() {
            let queue = self.queue;
            let duration_ms = self.duration_ms;
            spawn_local(async move {
                TimeoutFuture::new(duration_ms).await;
                // only if nothing rewrote it in the meantime
                queue.update(|q| {
                    if q.get(id).is_some_and(|t| t.kind == kind) {
                        q.dismiss(id);
                    }
                });
            });
        }
        id
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.visible()
                key=|toast| (toast.id, toast.kind, toast.message.clone())
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.css_modifier())>
                            {match toast.kind {
                                ToastKind::Loading => view! { <span class="spinner spinner--sm"></span> }.into_any(),
                                ToastKind::Success => view! { <span class="toast__icon">"✓"</span> }.into_any(),
                                ToastKind::Error => view! { <span class="toast__icon">"⚠"</span> }.into_any(),
                            }}
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="button button--ghost toast__close"
                                aria-label="Cerrar"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
