//! Transient error toasts.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen unless dismissed.
const TOAST_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone)]
struct Toast {
    id: u32,
    text: String,
}

/// Handle for pushing toasts, provided through Leptos context.
#[derive(Clone, Copy)]
pub struct Toasts {
    list: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl Toasts {
    /// Show a toast; it goes away on its own after a few seconds.
    pub fn push(self, text: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));
        self.list.update(|list| {
            list.push(Toast {
                id,
                text: text.into(),
            });
        });

        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            self.dismiss(id);
        });
    }

    pub fn dismiss(self, id: u32) {
        self.list.update(|list| list.retain(|t| t.id != id));
    }
}

/// Toast handle from context.
///
/// Panics outside a [`ToastContainer`], which `App` always renders at the root.
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Provides [`Toasts`] to its children and renders the active toasts.
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let toasts = Toasts {
        list: RwSignal::new(Vec::new()),
        next_id: RwSignal::new(0),
    };
    provide_context(toasts);

    view! {
        {children()}
        <div class="toast-container" aria-live="polite">
            <For
                each=move || toasts.list.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast">
                            <button class="toast-dismiss" on:click=move |_| toasts.dismiss(id)>
                                "\u{00D7}"
                            </button>
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
