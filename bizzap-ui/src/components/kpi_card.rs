//! KPI Card Component

use leptos::*;

/// Headline number with an optional sub-label
#[component]
pub fn KpiCard(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: String,
    #[prop(optional_no_strip)]
    sub: Option<String>,
    #[prop(default = "📊")]
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white border border-slate-200 rounded-xl p-5 shadow-sm">
            <div class="flex items-center justify-between">
                <span class="text-slate-500 text-sm font-medium">{label}</span>
                <span class="text-xl">{icon}</span>
            </div>
            <div class="text-3xl font-bold mt-2">{value}</div>
            {sub.map(|s| view! { <div class="text-xs text-green-600 mt-1">{s}</div> })}
        </div>
    }
}
