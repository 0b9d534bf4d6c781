//! Date Filter Bar
//!
//! Preset buttons plus start/end date inputs for the signups view.

use leptos::*;

use bizzap::date_range::today;
use bizzap::{DatePreset, DateRange};

/// Calls `on_change` with the new range after every accepted edit
#[component]
pub fn DateFilter(range: RwSignal<DateRange>, on_change: Callback<DateRange>) -> impl IntoView {
    let apply = move |next: DateRange| {
        range.set(next);
        on_change.call(next);
    };

    let on_start = move |ev: ev::Event| {
        let mut next = range.get_untracked();
        if next.set_start(&event_target_value(&ev)) {
            apply(next);
        }
    };

    let on_end = move |ev: ev::Event| {
        let mut next = range.get_untracked();
        if next.set_end(&event_target_value(&ev)) {
            apply(next);
        }
    };

    view! {
        <div class="flex flex-wrap items-center gap-3 bg-white border border-slate-200 rounded-xl p-3">
            <div class="flex space-x-1">
                {DatePreset::ALL
                    .into_iter()
                    .map(move |preset| {
                        let is_active = move || range.get().active_preset(today()) == Some(preset);
                        view! {
                            <button
                                on:click=move |_| apply(DateRange::preset(preset))
                                class=move || {
                                    let base = "px-3 py-1.5 rounded-lg text-sm font-medium transition-colors";
                                    if is_active() {
                                        format!("{} bg-blue-600 text-white", base)
                                    } else {
                                        format!("{} bg-slate-100 text-slate-600 hover:bg-slate-200", base)
                                    }
                                }
                            >
                                {preset.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <input
                type="date"
                class="border border-slate-300 rounded-lg px-2 py-1 text-sm"
                prop:value=move || range.get().start.format("%Y-%m-%d").to_string()
                on:change=on_start
            />
            <span class="text-slate-400">"to"</span>
            <input
                type="date"
                class="border border-slate-300 rounded-lg px-2 py-1 text-sm"
                prop:value=move || range.get().end.format("%Y-%m-%d").to_string()
                on:change=on_end
            />
        </div>
    }
}
