//! Transient notification surface

use gloo_timers::callback::Timeout;
use leptos::*;

/// How long a toast stays on screen.
const TOAST_MILLIS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ToastEntry {
    id: u32,
    text: String,
}

/// Handle for pushing notifications from anywhere below the provider.
///
/// Toasts never block interaction; each one dismisses itself.
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u32>,
}

impl Toasts {
    /// Show a transient error message.
    pub fn error(&self, text: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.entries.update(|entries| {
            entries.push(ToastEntry {
                id,
                text: text.into(),
            })
        });

        let entries = self.entries;
        Timeout::new(TOAST_MILLIS, move || {
            entries.update(|entries| entries.retain(|entry| entry.id != id));
        })
        .forget();
    }
}

/// Install the toast context and return the handle.
pub fn provide_toasts() -> Toasts {
    let toasts = Toasts {
        entries: create_rw_signal(Vec::new()),
        next_id: create_rw_signal(0),
    };
    provide_context(toasts);
    toasts
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            <For
                each=move || toasts.entries.get()
                key=|entry| entry.id
                children=move |entry| {
                    view! {
                        <div class="bg-amber-50 text-amber-900 border border-amber-200 rounded-lg shadow-lg px-4 py-3 text-sm">
                            {entry.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
