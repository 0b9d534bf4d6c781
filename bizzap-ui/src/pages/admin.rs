//! Admin Dashboard Page
//!
//! Business growth, daily signups, app usage and company management tabs.

use leptos::*;

use bizzap::companies::DetailSlot;
use bizzap::dashboard::{delete_and_refetch, fetch_signups};
use bizzap::model::{usage_bar_percent, DaySignups, COMPLETION_RING};
use bizzap::{
    fetch_company_detail, CompaniesPanel, Company, DashboardSnapshot, DashboardTab, DateRange,
    EntityId, Toggle,
};

use crate::api;
use crate::components::{CardSkeleton, Chart, ChartKind, ChartPoint, ChartSkeleton, DateFilter, KpiCard};
use crate::state::global::{log_report, GlobalState};

#[component]
pub fn Admin() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let tab = create_rw_signal(DashboardTab::Growth);
    let range = create_rw_signal(DateRange::default());
    let snapshot = create_rw_signal(DashboardSnapshot::default());
    let (ready, set_ready) = create_signal(false);

    create_effect(move |_| {
        spawn_local(async move {
            state.loading.set(true);
            let requested = range.get_untracked();
            let (loaded, report) = DashboardSnapshot::load_initial(&api::api_client(), &requested).await;
            log_report(&report);
            snapshot.update(|s| s.adopt_initial(loaded, &requested, &range.get_untracked()));
            state.loading.set(false);
            set_ready.set(true);
        });
    });

    let on_range = Callback::new(move |next: DateRange| {
        spawn_local(async move {
            let (signups, report) = fetch_signups(&api::api_client(), &next).await;
            log_report(&report);
            if let Some(signups) = signups {
                snapshot.update(|s| {
                    s.apply_signups(&next, &range.get_untracked(), signups);
                });
            }
        });
    });

    view! {
        <div class="min-h-screen bg-slate-50 text-slate-800">
            <header class="sticky top-0 z-40 bg-white/90 backdrop-blur border-b border-slate-200">
                <div class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                    <h1 class="text-xl font-bold">"Bizzap Admin"</h1>
                    <nav class="flex space-x-2">
                        {DashboardTab::ALL
                            .into_iter()
                            .map(|t| view! {
                                <button
                                    on:click=move |_| tab.set(t)
                                    class=move || {
                                        if tab.get() == t {
                                            "px-4 py-2 rounded-lg text-sm font-medium bg-slate-800 text-white"
                                        } else {
                                            "px-4 py-2 rounded-lg text-sm font-medium text-slate-500 hover:bg-slate-100"
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
                <Show when=move || tab.get().shows_date_filter()>
                    <DateFilter range=range on_change=on_range />
                </Show>

                <Show
                    when=move || ready.get()
                    fallback=|| view! {
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                        </div>
                        <ChartSkeleton />
                    }
                >
                    {move || match tab.get() {
                        DashboardTab::Growth => view! { <GrowthTab snapshot=snapshot /> }.into_view(),
                        DashboardTab::Signups => view! { <SignupsTab snapshot=snapshot range=range /> }.into_view(),
                        DashboardTab::Usage => view! { <UsageTab snapshot=snapshot /> }.into_view(),
                        DashboardTab::Companies => view! { <CompaniesTab snapshot=snapshot /> }.into_view(),
                    }}
                </Show>
            </main>
        </div>
    }
}

fn signup_points(days: &[DaySignups]) -> Vec<ChartPoint> {
    days.iter()
        .map(|day| {
            let label = day
                .day()
                .map(|d| d.format("%b %-d").to_string())
                .unwrap_or_else(|| day.heading());
            ChartPoint::new(label, day.count as f64)
        })
        .collect()
}

#[component]
fn GrowthTab(snapshot: RwSignal<DashboardSnapshot>) -> impl IntoView {
    let acquisition = Signal::derive(move || snapshot.with(|s| signup_points(&s.signups.daily_breakdown)));
    let live = Signal::derive(move || {
        snapshot.with(|s| {
            s.live_distribution
                .iter()
                .map(|bucket| ChartPoint::new(bucket.label.clone().unwrap_or_default(), bucket.count as f64))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {move || snapshot.with(|s| {
                    s.kpis()
                        .into_iter()
                        .map(|kpi| view! {
                            <KpiCard label=kpi.label value=kpi.value.to_string() sub=kpi.sub />
                        })
                        .collect_view()
                })}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <section class="lg:col-span-2 bg-white border border-slate-200 rounded-2xl p-6">
                    <h3 class="font-bold mb-4">"User Acquisition"</h3>
                    <Chart kind=ChartKind::Area data=acquisition />
                </section>

                <section class="bg-white border border-slate-200 rounded-2xl p-6">
                    <h3 class="font-bold mb-4">"Growth Rate"</h3>
                    <div class="space-y-3">
                        {move || snapshot.with(|s| {
                            s.growth_rows()
                                .into_iter()
                                .map(|(label, period)| view! {
                                    <div class="flex items-center justify-between p-3 bg-slate-50 rounded-lg">
                                        <span class="text-sm font-medium text-slate-500">{label}</span>
                                        <div class="text-right">
                                            <div class="text-xl font-bold">{period.count}</div>
                                            <div class={if period.is_growing() {
                                                "text-xs font-bold text-emerald-600"
                                            } else {
                                                "text-xs font-bold text-red-500"
                                            }}>
                                                {period.growth_label()}
                                            </div>
                                        </div>
                                    </div>
                                })
                                .collect_view()
                        })}
                    </div>
                </section>
            </div>

            <section class="bg-white border border-slate-200 rounded-2xl p-6">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="font-bold">"Live Distribution"</h3>
                    <span class="text-sm text-slate-500">
                        {move || snapshot.with(|s| s.live_count())} " active now"
                    </span>
                </div>
                <Chart kind=ChartKind::Bar data=live height=240 />
            </section>
        </div>
    }
}

#[component]
fn SignupsTab(snapshot: RwSignal<DashboardSnapshot>, range: RwSignal<DateRange>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="bg-gradient-to-r from-emerald-50 to-white border border-emerald-200 rounded-2xl p-6 flex items-center justify-between">
                <div>
                    <h3 class="text-2xl font-bold">"New Registrations"</h3>
                    <p class="text-slate-500 mt-1 text-sm">
                        "Showing signups from "
                        <span class="text-emerald-600 font-medium">{move || range.get().start.to_string()}</span>
                        " to "
                        <span class="text-emerald-600 font-medium">{move || range.get().end.to_string()}</span>
                    </p>
                </div>
                <div class="text-right">
                    <div class="text-4xl font-black">{move || snapshot.with(|s| s.signups.total_signups)}</div>
                    <div class="text-xs font-bold text-slate-500 uppercase tracking-wider">"Total Signups"</div>
                </div>
            </div>

            <Show
                when=move || snapshot.with(|s| s.signups.has_data())
                fallback=|| view! {
                    <div class="text-center py-20 bg-white rounded-2xl border border-slate-200 border-dashed">
                        <h3 class="text-lg font-bold text-slate-500">"No Signups Found"</h3>
                        <p class="text-slate-400 text-sm mt-1">"Try adjusting the date range above."</p>
                    </div>
                }
            >
                <div class="space-y-8">
                    {move || snapshot.with(|s| {
                        s.signups
                            .daily_breakdown
                            .iter()
                            .map(|day| view! { <SignupDay day=day.clone() /> })
                            .collect_view()
                    })}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn SignupDay(day: DaySignups) -> impl IntoView {
    view! {
        <div class="bg-white border border-slate-200 rounded-2xl overflow-hidden">
            <div class="bg-slate-50 p-4 border-b border-slate-200 flex justify-between items-center">
                <h4 class="font-bold text-lg">{day.heading()}</h4>
                <span class="bg-slate-200 text-slate-600 px-3 py-1 rounded-full text-xs font-bold">
                    {day.count} " Signups"
                </span>
            </div>
            <div class="p-4 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {day.companies
                    .iter()
                    .map(|company| {
                        let joined = company
                            .created()
                            .map(|t| t.format("%H:%M").to_string())
                            .unwrap_or_default();
                        view! {
                            <div class="border border-slate-200 rounded-xl p-4">
                                <div class="flex justify-between items-start mb-3">
                                    <div class="w-10 h-10 rounded-lg bg-emerald-50 flex items-center justify-center text-emerald-600 font-bold text-lg">
                                        {company.initial()}
                                    </div>
                                    <div class="text-[10px] text-slate-500 font-mono">{joined}</div>
                                </div>
                                <h5 class="font-bold truncate">{company.name().to_string()}</h5>
                                <div class="text-xs text-blue-600 font-medium mt-1">
                                    {company.category_label().to_string()}
                                </div>
                                <div class="space-y-1 pt-3 mt-3 border-t border-slate-100 text-xs text-slate-500">
                                    <div>{company.phone_number.clone().unwrap_or_default()}</div>
                                    <div class="font-mono">{company.gst_number.clone().unwrap_or_default()}</div>
                                    <div>"Ref: " {company.referral_code.clone().unwrap_or_default()}</div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn UsageTab(snapshot: RwSignal<DashboardSnapshot>) -> impl IntoView {
    let screens = Signal::derive(move || {
        snapshot.with(|s| {
            s.screens
                .iter()
                .map(|screen| ChartPoint::new(screen.screen_name.clone().unwrap_or_default(), screen.visit_count as f64))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="space-y-6">
            <div class="bg-gradient-to-r from-blue-50 to-white border border-blue-200 rounded-2xl p-6 flex items-center justify-between">
                <div>
                    <h3 class="text-2xl font-bold">"Live Now"</h3>
                    <p class="text-slate-500 mt-1">"Real-time active sessions in the last 5 minutes"</p>
                </div>
                <div class="text-6xl font-black tracking-tighter">{move || snapshot.with(|s| s.live_count())}</div>
            </div>

            <Show when=move || snapshot.with(|s| s.live_count() > 0)>
                <section class="bg-white border border-slate-200 rounded-2xl p-6">
                    <h4 class="text-sm font-bold text-slate-500 uppercase tracking-wider mb-4">"Active Sessions"</h4>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {move || snapshot.with(|s| {
                            s.live_users
                                .iter()
                                .map(|user| view! {
                                    <div class="flex items-center gap-3 p-3 bg-slate-50 rounded-xl">
                                        <div class="w-2 h-2 rounded-full bg-emerald-500 animate-pulse" />
                                        <div class="overflow-hidden">
                                            <div class="text-sm font-bold truncate">{user.company_name.clone().unwrap_or_default()}</div>
                                            <div class="text-xs text-blue-600 font-mono">{user.screen_name.clone().unwrap_or_default()}</div>
                                        </div>
                                    </div>
                                })
                                .collect_view()
                        })}
                    </div>
                </section>
            </Show>

            <section class="bg-white border border-slate-200 rounded-2xl p-6">
                <h3 class="font-bold mb-4">"Screen Popularity"</h3>
                <Chart kind=ChartKind::Bar data=screens />
            </section>

            <section class="bg-white border border-slate-200 rounded-2xl overflow-hidden">
                <div class="p-4 border-b border-slate-200">
                    <h3 class="font-bold">"Top Power Users (Weekly)"</h3>
                </div>
                <table class="w-full text-left text-sm">
                    <thead class="bg-slate-50 text-slate-500 uppercase text-xs">
                        <tr>
                            <th class="p-4">"User / Company"</th>
                            <th class="p-4">"Total Time"</th>
                            <th class="p-4">"Peak Hour"</th>
                            <th class="p-4">"Top Screen"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-100">
                        {move || snapshot.with(|s| {
                            s.power_users()
                                .into_iter()
                                .map(|row| view! {
                                    <tr class="hover:bg-slate-50">
                                        <td class="p-4 font-medium">{row.company}</td>
                                        <td class="p-4 text-emerald-600 font-bold">{row.total_time}</td>
                                        <td class="p-4 text-slate-500">{row.peak_time}</td>
                                        <td class="p-4 text-slate-500">{row.top_screen}</td>
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

#[component]
fn CompaniesTab(snapshot: RwSignal<DashboardSnapshot>) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let panel = create_rw_signal(CompaniesPanel::new());

    let on_toggle = Callback::new(move |id: EntityId| {
        let mut outcome = Toggle::Collapsed;
        panel.update(|p| outcome = p.toggle(&id));
        if outcome == (Toggle::Expanded { fetch: true }) {
            spawn_local(async move {
                let (detail, report) = fetch_company_detail(&api::api_client(), &id).await;
                log_report(&report);
                panel.update(|p| p.complete(&id, detail));
            });
        }
    });

    let on_delete = Callback::new(move |company: Company| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete {}? This cannot be undone.", company.name()))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match delete_and_refetch(&api::api_client(), &company.id).await {
                Ok((companies, report)) => {
                    log_report(&report);
                    if let Some(companies) = companies {
                        snapshot.update(|s| s.companies = companies);
                    }
                    state.show_success("Company deleted");
                }
                Err(e) => state.show_error(&format!("Failed to delete company: {}", e)),
            }
        });
    });

    let visible = move || {
        snapshot.with(|s| {
            panel.with(|p| p.filtered(&s.companies).into_iter().cloned().collect::<Vec<_>>())
        })
    };

    view! {
        <div class="space-y-6">
            <div class="bg-white p-4 rounded-xl border border-slate-200 flex items-center gap-3">
                <span class="text-slate-400">"🔍"</span>
                <input
                    type="text"
                    placeholder="Search by Company Name or Phone..."
                    class="flex-1 outline-none placeholder:text-slate-400"
                    prop:value=move || panel.with(|p| p.search_term.clone())
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        panel.update(|p| p.search_term = term);
                    }
                />
                <Show when=move || panel.with(|p| !p.search_term.is_empty())>
                    <div class="text-xs text-slate-500 font-bold uppercase">
                        {move || visible().len()} " Found"
                    </div>
                </Show>
            </div>

            <div class="bg-white border border-slate-200 rounded-2xl overflow-x-auto">
                <table class="w-full text-left border-collapse">
                    <thead class="bg-slate-50 text-xs uppercase tracking-wider text-slate-500">
                        <tr>
                            <th class="p-4">"Company"</th>
                            <th class="p-4">"Contact"</th>
                            <th class="p-4">"Quota (Used/Total)"</th>
                            <th class="p-4">"Joined"</th>
                            <th class="p-4"></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-100">
                        {move || visible()
                            .into_iter()
                            .map(|company| view! {
                                <CompanyRow company=company panel=panel on_toggle=on_toggle on_delete=on_delete />
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn CompanyRow(
    company: Company,
    panel: RwSignal<CompaniesPanel>,
    on_toggle: Callback<EntityId>,
    on_delete: Callback<Company>,
) -> impl IntoView {
    let id = company.id.clone();
    let expanded = {
        let id = id.clone();
        move || panel.with(|p| p.is_expanded(&id))
    };
    let joined = company
        .created()
        .map(|t| t.format("%-d/%-m/%Y").to_string())
        .unwrap_or_default();
    let arrow = {
        let expanded = expanded.clone();
        move || if expanded() { "▲" } else { "▼" }
    };
    let quota_width = format!("width: {}%", company.quota_used_percent());
    let detail_company = company.clone();

    view! {
        <tr class="hover:bg-slate-50">
            <td class="p-4">
                <div class="flex items-center gap-3">
                    <div class="w-8 h-8 rounded bg-slate-100 flex items-center justify-center text-xs font-bold text-blue-600 uppercase">
                        {company.initial()}
                    </div>
                    <div>
                        <div class="font-bold text-sm">{company.name().to_string()}</div>
                        <div class="text-[10px] text-slate-500">{company.category_label().to_string()}</div>
                    </div>
                </div>
            </td>
            <td class="p-4">
                <div class="text-sm">{company.phone_number.clone().unwrap_or_default()}</div>
                <div class="text-[10px] text-slate-500 font-mono">{company.gst_number.clone().unwrap_or_default()}</div>
            </td>
            <td class="p-4">
                <div class="flex items-center gap-2">
                    <div class="w-16 h-2 bg-slate-100 rounded-full overflow-hidden">
                        <div class="h-full bg-emerald-500" style=quota_width />
                    </div>
                    <span class="text-xs font-mono text-slate-500">{company.quota_label()}</span>
                </div>
            </td>
            <td class="p-4 text-sm text-slate-500">{joined}</td>
            <td class="p-4 text-right">
                <button
                    class="p-1 hover:bg-slate-100 rounded text-slate-500"
                    on:click={
                        let id = id.clone();
                        move |_| on_toggle.call(id.clone())
                    }
                >
                    {arrow}
                </button>
            </td>
        </tr>
        <Show when=expanded>
            <CompanyDetailRow company=detail_company.clone() panel=panel on_delete=on_delete />
        </Show>
    }
}

#[component]
fn CompanyDetailRow(
    company: Company,
    panel: RwSignal<CompaniesPanel>,
    on_delete: Callback<Company>,
) -> impl IntoView {
    let id = company.id.clone();
    let detail = move || {
        panel.with(|p| match p.slot(&id) {
            Some(DetailSlot::Ready(detail)) => Some(detail.clone()),
            _ => None,
        })
    };
    let recent = company.recent_leads().to_vec();
    let referral = company.referral_code.clone().unwrap_or_default();
    let posted = company.posted_leads;
    let doomed = company.clone();
    let ring_detail = detail.clone();

    view! {
        <tr class="bg-slate-50">
            <td colspan="5" class="p-4 border-b border-slate-200">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <div class="bg-white p-4 rounded-xl border border-slate-200">
                        <h4 class="text-xs font-bold text-slate-500 uppercase mb-4">"Profile Health"</h4>
                        <div class="flex items-center gap-4">
                            {move || {
                                let (percent, offset) = ring_detail()
                                    .map(|d| (d.completion_percent(), d.ring_offset()))
                                    .unwrap_or((0.0, COMPLETION_RING));
                                view! {
                                    <div class="relative w-12 h-12 flex items-center justify-center">
                                        <svg class="w-full h-full -rotate-90">
                                            <circle cx="24" cy="24" r="20" stroke="#e2e8f0" stroke-width="4" fill="transparent" />
                                            <circle
                                                cx="24" cy="24" r="20"
                                                stroke="#3b82f6" stroke-width="4" fill="transparent"
                                                stroke-dasharray={COMPLETION_RING.to_string()}
                                                stroke-dashoffset={offset.to_string()}
                                            />
                                        </svg>
                                        <span class="absolute text-[10px] font-bold">{format!("{}%", percent.round())}</span>
                                    </div>
                                }
                            }}
                            <div class="text-xs text-slate-500">
                                <div>"Referral: " <span class="text-emerald-600 font-mono">{referral}</span></div>
                                <div>"Leads Posted: " <span class="font-medium">{posted}</span></div>
                            </div>
                        </div>
                    </div>

                    <div class="bg-white p-4 rounded-xl border border-slate-200">
                        {move || match detail() {
                            None => view! { <div class="text-xs text-slate-500">"Loading usage..."</div> }.into_view(),
                            Some(detail) => view! {
                                <h4 class="text-xs font-bold text-slate-500 uppercase mb-4 flex justify-between">
                                    <span>"Today's Activity"</span>
                                    <span class="text-emerald-600">{detail.usage.minutes_label()} " Total"</span>
                                </h4>
                                <div class="space-y-2 max-h-[100px] overflow-y-auto pr-2">
                                    {detail.usage.screen_visits.is_empty().then(|| view! {
                                        <div class="text-xs text-slate-400 italic">"No activity recorded today"</div>
                                    })}
                                    {detail.usage.screen_visits
                                        .iter()
                                        .map(|(screen, visits)| view! {
                                            <div class="flex justify-between items-center text-xs">
                                                <span class="text-slate-500">{screen.clone()}</span>
                                                <div class="flex items-center gap-2">
                                                    <div class="w-16 h-1 bg-slate-100 rounded-full overflow-hidden">
                                                        <div
                                                            class="h-full bg-blue-500"
                                                            style=format!("width: {}%", usage_bar_percent(*visits))
                                                        />
                                                    </div>
                                                    <span class="font-mono">{*visits}</span>
                                                </div>
                                            </div>
                                        })
                                        .collect_view()}
                                </div>
                            }
                            .into_view(),
                        }}
                    </div>

                    <div class="bg-white p-4 rounded-xl border border-slate-200">
                        <h4 class="text-xs font-bold text-slate-500 uppercase mb-4">"Recent Leads"</h4>
                        {if recent.is_empty() {
                            view! { <div class="text-xs text-slate-400 italic">"No requirements posted yet."</div> }.into_view()
                        } else {
                            recent
                                .iter()
                                .map(|lead| view! {
                                    <div class="flex justify-between items-center text-xs bg-slate-50 p-2 rounded border border-slate-200 mb-2">
                                        <span class="font-medium truncate max-w-[100px]">{lead.title_text().to_string()}</span>
                                        <span class="text-slate-500">
                                            {lead.quantity.clone().unwrap_or_default()} " • " {lead.location.clone().unwrap_or_default()}
                                        </span>
                                    </div>
                                })
                                .collect_view()
                        }}
                        <button
                            class="mt-4 w-full text-xs font-bold text-red-600 border border-red-200 rounded-lg py-2 hover:bg-red-50"
                            on:click=move |_| on_delete.call(doomed.clone())
                        >
                            "Delete Company"
                        </button>
                    </div>
                </div>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_points_label_by_day() {
        let days = vec![
            DaySignups {
                date: Some("2026-02-03T00:00:00.000Z".to_string()),
                count: 4,
                companies: Vec::new(),
            },
            DaySignups {
                date: Some("someday".to_string()),
                count: 1,
                companies: Vec::new(),
            },
        ];

        let points = signup_points(&days);
        assert_eq!(points[0], ChartPoint::new("Feb 3", 4.0));
        assert_eq!(points[1].label, "someday");
    }
}
