//! Lead Command Center Page
//!
//! Inventory, conversion and lead health analytics.

use leptos::*;

use bizzap::{LeadSnapshot, LeadTab};

use crate::api;
use crate::components::{Chart, ChartKind, ChartPoint, KpiCard, Loading};
use crate::state::global::{log_report, GlobalState};

#[component]
pub fn LeadAdmin() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let tab = create_rw_signal(LeadTab::Overview);
    let snapshot = create_rw_signal(LeadSnapshot::default());
    let (ready, set_ready) = create_signal(false);

    create_effect(move |_| {
        spawn_local(async move {
            state.loading.set(true);
            let (loaded, report) = LeadSnapshot::load(&api::api_client()).await;
            log_report(&report);
            snapshot.set(loaded);
            state.loading.set(false);
            set_ready.set(true);
        });
    });

    view! {
        <div class="min-h-screen bg-slate-50 text-slate-800">
            <header class="bg-white border-b border-slate-200">
                <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                    <div>
                        <h1 class="text-xl font-bold">"Lead Command Center"</h1>
                        <p class="text-xs text-slate-500">"Inventory, conversions and lead health"</p>
                    </div>
                    <nav class="flex bg-slate-100 rounded-lg p-1">
                        {LeadTab::ALL
                            .into_iter()
                            .map(|t| view! {
                                <button
                                    on:click=move |_| tab.set(t)
                                    class=move || {
                                        if tab.get() == t {
                                            "px-4 py-2 rounded-md text-sm font-medium bg-white shadow text-slate-900"
                                        } else {
                                            "px-4 py-2 rounded-md text-sm font-medium text-slate-500"
                                        }
                                    }
                                >
                                    {t.label()}
                                </button>
                            })
                            .collect_view()}
                    </nav>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-6 py-8 space-y-6">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {move || snapshot.with(|s| {
                        s.kpis()
                            .into_iter()
                            .map(|kpi| view! {
                                <KpiCard label=kpi.title value=kpi.value sub=Some(kpi.sub.to_string()) />
                            })
                            .collect_view()
                    })}
                </div>

                <Show when=move || ready.get() fallback=|| view! { <Loading label="Loading lead analytics..." /> }>
                    {move || match tab.get() {
                        LeadTab::Overview => view! { <OverviewTab snapshot=snapshot /> }.into_view(),
                        LeadTab::Conversions => view! { <ConversionsTab snapshot=snapshot /> }.into_view(),
                        LeadTab::Health => view! { <HealthTab snapshot=snapshot /> }.into_view(),
                    }}
                </Show>
            </main>
        </div>
    }
}

#[component]
fn OverviewTab(snapshot: RwSignal<LeadSnapshot>) -> impl IntoView {
    let monthly = Signal::derive(move || {
        snapshot.with(|s| {
            s.monthly
                .iter()
                .map(|m| ChartPoint::new(m.month.clone().unwrap_or_default(), m.count as f64))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <section class="lg:col-span-2 bg-white border border-slate-200 rounded-2xl p-6">
                <h3 class="font-bold mb-4">"Lead Velocity"</h3>
                <Chart kind=ChartKind::Area data=monthly />
            </section>

            <section class="bg-white border border-slate-200 rounded-2xl p-6">
                <h3 class="font-bold mb-4">"Regional Density"</h3>
                <div class="space-y-4">
                    {move || snapshot.with(|s| {
                        s.location_density()
                            .into_iter()
                            .map(|share| view! {
                                <div>
                                    <div class="flex justify-between text-sm mb-1">
                                        <span class="font-medium">{share.location}</span>
                                        <span class="text-slate-500">{share.count}</span>
                                    </div>
                                    <div class="w-full h-2 bg-slate-100 rounded-full overflow-hidden">
                                        <div
                                            class="h-full bg-blue-500"
                                            style=format!("width: {}%", share.percent)
                                        />
                                    </div>
                                </div>
                            })
                            .collect_view()
                    })}
                </div>
            </section>
        </div>
    }
}

#[component]
fn ConversionsTab(snapshot: RwSignal<LeadSnapshot>) -> impl IntoView {
    let statuses = Signal::derive(move || {
        snapshot.with(|s| {
            s.status_distribution()
                .into_iter()
                .map(|slice| ChartPoint {
                    label: slice.name.to_string(),
                    value: slice.value as f64,
                    color: Some(slice.color),
                })
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <section class="bg-white border border-slate-200 rounded-2xl p-6">
                <h3 class="font-bold mb-4">"Deal Status"</h3>
                <Chart kind=ChartKind::Pie data=statuses />
            </section>

            <section class="bg-white border border-slate-200 rounded-2xl p-6">
                <h3 class="font-bold mb-4">"Top Performing Companies"</h3>
                <Show
                    when=move || snapshot.with(|s| !s.top_companies().is_empty())
                    fallback=|| view! { <p class="text-sm text-slate-400 italic">"No conversions yet."</p> }
                >
                    <ol class="space-y-3">
                        {move || snapshot.with(|s| {
                            s.top_companies()
                                .iter()
                                .enumerate()
                                .map(|(rank, company)| view! {
                                    <li class="flex items-center justify-between p-3 bg-slate-50 rounded-lg">
                                        <div class="flex items-center gap-3">
                                            <span class="w-6 h-6 rounded-full bg-slate-800 text-white text-xs flex items-center justify-center">
                                                {rank + 1}
                                            </span>
                                            <span class="font-medium">{company.company_name.clone().unwrap_or_default()}</span>
                                        </div>
                                        <span class="text-emerald-600 font-bold text-sm">
                                            {format!("{}%", company.conversion_rate)}
                                        </span>
                                    </li>
                                })
                                .collect_view()
                        })}
                    </ol>
                </Show>
            </section>
        </div>
    }
}

#[component]
fn HealthTab(snapshot: RwSignal<LeadSnapshot>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <section class="bg-white border border-slate-200 rounded-2xl overflow-hidden">
                <div class="p-4 border-b border-slate-200">
                    <h3 class="font-bold">"Most Viewed Leads"</h3>
                </div>
                <table class="w-full text-left text-sm">
                    <thead class="bg-slate-50 text-slate-500 uppercase text-xs">
                        <tr>
                            <th class="p-4">"Lead"</th>
                            <th class="p-4">"Company"</th>
                            <th class="p-4 text-right">"Views"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-100">
                        {move || snapshot.with(|s| {
                            s.most_viewed
                                .iter()
                                .map(|lead| view! {
                                    <tr>
                                        <td class="p-4 font-medium">{lead.title_text().to_string()}</td>
                                        <td class="p-4 text-slate-500">{lead.company_name().unwrap_or("-").to_string()}</td>
                                        <td class="p-4 text-right font-mono">{lead.view_count}</td>
                                    </tr>
                                })
                                .collect_view()
                        })}
                    </tbody>
                </table>
            </section>

            <section class="bg-white border border-slate-200 rounded-2xl overflow-hidden">
                <div class="p-4 border-b border-slate-200">
                    <h3 class="font-bold">"Deactivated Leads"</h3>
                </div>
                <table class="w-full text-left text-sm">
                    <thead class="bg-slate-50 text-slate-500 uppercase text-xs">
                        <tr>
                            <th class="p-4">"Lead"</th>
                            <th class="p-4">"Reason"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-100">
                        {move || snapshot.with(|s| {
                            s.deactivated
                                .iter()
                                .map(|lead| view! {
                                    <tr>
                                        <td class="p-4 font-medium">{lead.title_text().to_string()}</td>
                                        <td class="p-4">
                                            <span class="px-2 py-1 rounded bg-red-50 text-red-600 text-xs">
                                                {lead.deactivation_reason().to_string()}
                                            </span>
                                        </td>
                                    </tr>
                                })
                                .collect_view()
                        })}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
