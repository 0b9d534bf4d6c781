//! App Root Component
//!
//! Resolves the current location to a [`Route`] and renders its page.

use leptos::*;
use leptos_router::{use_location, Router, A};

use bizzap::Route;

use crate::components::Toast;
use crate::pages::{Admin, Guide, Landing, LeadAdmin, Login, Privacy, PublicLead, Report, Support};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    let state = expect_context::<GlobalState>();

    view! {
        <Router>
            <div class="min-h-screen bg-white text-slate-900 flex flex-col">
                <Show when=move || state.loading.get()>
                    <div class="fixed top-0 inset-x-0 h-1 bg-blue-500 animate-pulse z-50" />
                </Show>
                <Pages />
                <Toast />
            </div>
        </Router>
    }
}

/// Page for the current location; `?leadId=` wins over the path
#[component]
fn Pages() -> impl IntoView {
    let location = use_location();
    let route = create_memo(move |_| {
        Route::resolve(&location.pathname.get(), &location.search.get())
    });

    move || match route.get() {
        Route::Landing => view! { <Landing /> }.into_view(),
        Route::Login => view! { <Login /> }.into_view(),
        Route::Guide(tab) => view! { <Guide tab=tab /> }.into_view(),
        Route::Support => view! { <Support /> }.into_view(),
        Route::Report => view! { <Report /> }.into_view(),
        Route::Privacy => view! { <Privacy /> }.into_view(),
        Route::Admin => view! { <Admin /> }.into_view(),
        Route::LeadAdmin => view! { <LeadAdmin /> }.into_view(),
        Route::PublicLead(id) => view! { <PublicLead id=Some(id) /> }.into_view(),
        Route::NotFound => view! { <NotFound /> }.into_view(),
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-slate-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}

