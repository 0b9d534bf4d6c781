//! Navigation Component
//!
//! Header and footer of the public pages.

use leptos::*;
use leptos_router::*;

use bizzap::content::{COPYRIGHT, LOGO_URL, PLAY_STORE_URL, TAGLINE, WHATSAPP_GROUP_URL};
use bizzap::{GuideTab, Route};

/// Navigation header component
#[component]
pub fn SiteNav() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-slate-200 sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href=Route::Landing.href() class="flex items-center space-x-3">
                        <img src=LOGO_URL alt="Bizzap" class="h-8 w-8 rounded" />
                        <span class="text-xl font-bold">"Bizzap"</span>
                    </A>

                    <div class="hidden md:flex items-center space-x-1">
                        <NavLink route=Route::Guide(GuideTab::Login) label="Guide" />
                        <NavLink route=Route::Support label="Support" />
                        <NavLink route=Route::Report label="Report" />
                        <NavLink route=Route::Privacy label="Privacy" />
                    </div>

                    <A
                        href=Route::Login.href()
                        class="px-4 py-2 rounded-lg bg-blue-600 hover:bg-blue-700 text-white text-sm font-medium"
                    >
                        "Login"
                    </A>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(route: Route, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=route.href()
            class="px-4 py-2 rounded-lg text-slate-600 hover:text-slate-900 hover:bg-slate-100 transition-colors"
            active_class="bg-slate-100 text-slate-900"
        >
            {label}
        </A>
    }
}

/// Footer with community links
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-900 text-slate-300 py-10 mt-16">
            <div class="container mx-auto px-4 grid md:grid-cols-3 gap-8">
                <div>
                    <div class="text-white text-lg font-bold">"Bizzap"</div>
                    <p class="text-sm mt-2">{TAGLINE}</p>
                </div>
                <div class="flex flex-col space-y-2 text-sm">
                    <A href=Route::Support.href()>"Support"</A>
                    <A href=Route::Report.href()>"Report an Issue"</A>
                    <A href=Route::Guide(GuideTab::Delete).href()>"Delete Account"</A>
                    <A href=Route::Privacy.href()>"Privacy Policy"</A>
                </div>
                <div class="flex flex-col space-y-2 text-sm">
                    <a href=WHATSAPP_GROUP_URL target="_blank" rel="noopener noreferrer">"Join our WhatsApp community"</a>
                    <a href=PLAY_STORE_URL target="_blank" rel="noopener noreferrer">"Get it on Google Play"</a>
                </div>
            </div>
            <div class="container mx-auto px-4 mt-8 text-xs text-slate-500">{COPYRIGHT}</div>
        </footer>
    }
}
