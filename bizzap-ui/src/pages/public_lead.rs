//! Public Lead Page
//!
//! Read-only view of a shared lead, with the app download prompt.

use leptos::*;

use bizzap::content::{LOGO_URL, PLAY_STORE_URL, SITE_URL};
use bizzap::{EntityId, LeadCard, PublicLeadState};

use crate::api;
use crate::components::Loading;

const APP_PERKS: [&str; 3] = [
    "Connect with verified buyers instantly",
    "Get free leads matching your business",
    "Build your company profile & catalog",
];

#[component]
pub fn PublicLead(id: Option<EntityId>) -> impl IntoView {
    let state = create_rw_signal(PublicLeadState::Loading);
    let (show_download, set_show_download) = create_signal(false);
    let (zoomed, set_zoomed) = create_signal(false);

    create_effect(move |_| {
        let id = id.clone();
        spawn_local(async move {
            let loaded = PublicLeadState::load(&api::api_client(), id.as_ref()).await;
            if let PublicLeadState::Missing(message) = &loaded {
                web_sys::console::error_1(&(*message).into());
            }
            state.set(loaded);
        });
    });

    let open_store = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(PLAY_STORE_URL, "_blank");
        }
    };

    view! {
        <div class="min-h-screen bg-gradient-to-br from-gray-900 via-blue-900 to-gray-900 p-4 md:p-8 text-white">
            {move || match state.get() {
                PublicLeadState::Loading => view! { <Loading label="Loading lead..." /> }.into_view(),
                PublicLeadState::Missing(message) => view! { <NotFoundCard message=message /> }.into_view(),
                PublicLeadState::Loaded(lead) => {
                    let card = LeadCard::new(&lead, chrono::Utc::now());
                    view! {
                        <LeadView
                            card=card
                            on_download=Callback::new(move |_| set_show_download.set(true))
                            on_zoom=Callback::new(move |_| set_zoomed.set(true))
                        />
                    }
                    .into_view()
                }
            }}

            <Show when=move || show_download.get()>
                <div class="fixed inset-0 bg-black/80 flex items-center justify-center p-4 z-50">
                    <div class="bg-gray-800 rounded-2xl p-6 max-w-md w-full border border-gray-700 relative text-center">
                        <button
                            class="absolute top-4 right-4 text-gray-400 hover:text-white"
                            on:click=move |_| set_show_download.set(false)
                        >
                            "✕"
                        </button>
                        <h2 class="text-2xl font-bold mb-3">"Get the Bizzap App"</h2>
                        <p class="text-gray-300 mb-6">
                            "Download our app to connect with this buyer, access thousands of leads, and grow your business!"
                        </p>
                        <div class="space-y-3 mb-6 text-left">
                            {APP_PERKS.iter().map(|perk| view! {
                                <div class="flex items-center gap-3">
                                    <span class="w-8 h-8 bg-blue-600 rounded-full flex items-center justify-center">"✓"</span>
                                    <span class="text-gray-300 text-sm">{*perk}</span>
                                </div>
                            }).collect_view()}
                        </div>
                        <button
                            class="w-full bg-green-600 hover:bg-green-700 font-bold py-4 rounded-xl mb-3"
                            on:click=open_store
                        >
                            "Open Play Store"
                        </button>
                        <button
                            class="text-gray-400 hover:text-white text-sm"
                            on:click=move |_| set_show_download.set(false)
                        >
                            "Maybe later"
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=move || zoomed.get()>
                <div class="fixed inset-0 bg-black/95 flex items-center justify-center p-4 z-50">
                    <button
                        class="absolute top-4 right-4 w-12 h-12 bg-gray-800 rounded-full"
                        on:click=move |_| set_zoomed.set(false)
                    >
                        "✕"
                    </button>
                    {move || match state.get() {
                        PublicLeadState::Loaded(lead) => {
                            let card = LeadCard::new(&lead, chrono::Utc::now());
                            view! {
                                <img src=card.image alt=card.title class="max-w-full max-h-[90vh] object-contain rounded-lg" />
                            }
                            .into_view()
                        }
                        _ => ().into_view(),
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn NotFoundCard(message: &'static str) -> impl IntoView {
    view! {
        <div class="min-h-[80vh] flex items-center justify-center">
            <div class="bg-gray-800 rounded-2xl p-8 max-w-md w-full text-center border border-gray-700">
                <div class="text-4xl mb-4 text-red-400">"✕"</div>
                <h2 class="text-xl font-bold mb-2">"Lead Not Found"</h2>
                <p class="text-gray-400 mb-6">{message}</p>
                <a href=SITE_URL class="bg-blue-600 hover:bg-blue-700 font-semibold py-3 px-6 rounded-lg">
                    "Go to Bizzap"
                </a>
            </div>
        </div>
    }
}

#[component]
fn LeadView(card: LeadCard, on_download: Callback<()>, on_zoom: Callback<()>) -> impl IntoView {
    let has_company = card.company_name.is_some();

    view! {
        <div class="max-w-2xl mx-auto">
            <div class="flex items-center justify-between mb-6">
                <img src=LOGO_URL alt="Bizzap" class="h-10 rounded-lg" />
                <button
                    class="bg-green-600 hover:bg-green-700 font-semibold py-2 px-4 rounded-lg"
                    on:click=move |_| on_download.call(())
                >
                    "Get App"
                </button>
            </div>

            <div class="bg-gray-800 rounded-2xl p-6 border border-gray-700 shadow-2xl">
                <h1 class="text-xl font-bold mb-3">{card.title.clone()}</h1>
                <div class="flex flex-wrap gap-4 text-sm text-gray-400 mb-6">
                    <span>"📍 "{card.location.clone()}</span>
                    <span>"🕒 "{card.posted.clone()}</span>
                </div>

                <div class="flex items-center gap-4 mb-6">
                    <button on:click=move |_| on_zoom.call(())>
                        <img
                            src=card.image.clone()
                            alt=card.title.clone()
                            class="w-24 h-24 rounded-full object-cover border-2 border-gray-600 hover:border-blue-400"
                        />
                    </button>
                    <div class="flex-1 grid grid-cols-2 gap-3">
                        <Fact label="Quantity" value=card.quantity.clone() />
                        <Fact label="Budget" value=card.budget.clone() />
                    </div>
                </div>

                {card.description.clone().map(|description| view! {
                    <div class="bg-gray-900/50 rounded-xl p-4 mb-6 border border-gray-700">
                        <h3 class="text-gray-300 text-sm font-semibold mb-2">"Description"</h3>
                        <p class="leading-relaxed">{description}</p>
                    </div>
                })}

                {has_company.then(|| view! {
                    <div class="bg-blue-900/30 rounded-xl p-4 border border-blue-700/50 mb-6 flex items-start gap-3">
                        {match card.logo.clone() {
                            Some(logo) => view! { <img src=logo class="w-12 h-12 rounded-lg object-cover" /> }.into_view(),
                            None => view! { <div class="w-12 h-12 rounded-lg bg-blue-600 flex items-center justify-center">"🏢"</div> }.into_view(),
                        }}
                        <div class="flex-1">
                            <h3 class="font-bold">{card.company_name.clone()}</h3>
                            {card.category.clone().map(|c| view! { <p class="text-blue-300 text-sm">{c}</p> })}
                            {card.user_name.clone().map(|u| view! { <p class="text-gray-400 text-xs mt-1">"👤 "{u}</p> })}
                        </div>
                    </div>
                })}

                <button
                    class="w-full bg-blue-600 hover:bg-blue-700 font-bold py-4 rounded-xl"
                    on:click=move |_| on_download.call(())
                >
                    "Download App to Connect"
                </button>
                <p class="text-center text-gray-400 text-sm mt-4">"🚀 Join 100+ businesses already using Bizzap"</p>
            </div>
        </div>
    }
}

#[component]
fn Fact(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-gray-900/50 rounded-lg p-3 border border-gray-700 text-center">
            <span class="text-gray-400 text-xs font-semibold">{label}</span>
            <p class="text-sm font-bold">{value}</p>
        </div>
    }
}
