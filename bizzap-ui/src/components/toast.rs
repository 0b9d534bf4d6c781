//! Toast Notifications
//!
//! Bottom-right banners for the success and error messages in
//! [`GlobalState`]. Clicking a banner dismisses it early.

use leptos::*;

use crate::state::global::GlobalState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Error,
}

impl Tone {
    fn classes(self) -> &'static str {
        match self {
            Tone::Success => "bg-emerald-600",
            Tone::Error => "bg-red-600",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Success => "✓",
            Tone::Error => "✕",
        }
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="fixed bottom-6 right-4 z-50 flex flex-col gap-2">
            <Banner tone=Tone::Success source=state.success />
            <Banner tone=Tone::Error source=state.error />
        </div>
    }
}

#[component]
fn Banner(tone: Tone, source: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        source.get().map(|message| view! {
            <button
                class=format!(
                    "flex items-center gap-3 {} text-white px-4 py-3 rounded-lg shadow-lg text-left animate-slide-in",
                    tone.classes()
                )
                on:click=move |_| source.set(None)
            >
                <span class="text-lg">{tone.icon()}</span>
                <span class="text-sm font-medium">{message}</span>
            </button>
        })
    }
}
