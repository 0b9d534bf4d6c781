//! Loading spinners and skeleton states

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading(
    #[prop(default = "Loading...")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3">
            <div class="loading-spinner w-8 h-8" />
            <span class="text-sm text-slate-500">{label}</span>
        </div>
    }
}

/// Skeleton loader for KPI cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white border border-slate-200 rounded-xl p-5 animate-pulse">
            <div class="h-4 bg-slate-200 rounded w-1/3 mb-4" />
            <div class="h-8 bg-slate-200 rounded w-1/2 mb-2" />
            <div class="h-3 bg-slate-200 rounded w-2/3" />
        </div>
    }
}

/// Skeleton loader for charts
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white border border-slate-200 rounded-xl p-6 animate-pulse">
            <div class="h-5 bg-slate-200 rounded w-1/4 mb-4" />
            <div class="h-64 bg-slate-100 rounded" />
        </div>
    }
}
