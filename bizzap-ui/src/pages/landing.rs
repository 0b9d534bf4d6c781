//! Landing Page
//!
//! Hero, premium benefits and the waitlist form.

use leptos::*;

use bizzap::content::{landing, LOGO_URL, TAGLINE};

use crate::components::{Footer, SiteNav, WaitlistPhoneForm};

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <SiteNav />
        <main class="container mx-auto px-4 py-12 text-center space-y-10">
            <header>
                <img src=LOGO_URL alt="Bizzap Logo" class="h-12 mx-auto rounded-xl shadow-lg object-cover" />
                <p class="text-sm opacity-90 mt-2">{TAGLINE}</p>
            </header>

            <h1 class="text-3xl md:text-4xl font-bold max-w-2xl mx-auto">{landing::HERO}</h1>

            <section class="max-w-md mx-auto bg-slate-50 border border-slate-200 rounded-2xl p-6 text-left">
                <h3 class="font-semibold mb-3">"Bizzap Premium Benefits"</h3>
                <ul class="space-y-2">
                    {landing::PREMIUM_BENEFITS
                        .iter()
                        .map(|benefit| view! { <li class="flex items-center space-x-2"><span>"✓"</span><span>{*benefit}</span></li> })
                        .collect_view()}
                </ul>
            </section>

            <WaitlistPhoneForm />

            <p class="text-sm text-slate-500">{landing::TRUSTED_BY}</p>
        </main>
        <Footer />
    }
}
