//! Support Page

use leptos::*;

use bizzap::content::support::{
    mailto, ADMIN_EMAIL, DAYS, HOURS, INSTRUCTIONS, OFFICE, PHONE_DISPLAY, PHONE_TEL, STANDARD_RESPONSE,
    SUPPORT_EMAIL, URGENT_RESPONSE,
};
use bizzap::content::WHATSAPP_GROUP_URL;

use crate::components::{Footer, SiteNav};

#[component]
pub fn Support() -> impl IntoView {
    view! {
        <SiteNav />
        <main class="container mx-auto px-4 py-10 max-w-4xl space-y-10">
            <div class="text-center">
                <h1 class="text-3xl font-bold">"How can we help?"</h1>
                <p class="text-slate-500 mt-2">"Reach the Bizzap team through any of the channels below."</p>
            </div>

            <div class="grid md:grid-cols-3 gap-4">
                <ContactCard icon="✉️" title="Email Us">
                    <a class="block underline" href=mailto(SUPPORT_EMAIL)>{SUPPORT_EMAIL}</a>
                    <a class="block underline" href=mailto(ADMIN_EMAIL)>{ADMIN_EMAIL}</a>
                </ContactCard>
                <ContactCard icon="📞" title="Call Us">
                    <a class="block underline" href=PHONE_TEL>{PHONE_DISPLAY}</a>
                    <p class="text-xs text-slate-500">{format!("{}, {}", DAYS, HOURS)}</p>
                </ContactCard>
                <ContactCard icon="💬" title="Community">
                    <a class="block underline" href=WHATSAPP_GROUP_URL target="_blank" rel="noopener noreferrer">
                        "Join our WhatsApp group"
                    </a>
                </ContactCard>
            </div>

            <section>
                <h2 class="text-xl font-bold mb-4">"Common Questions"</h2>
                <div class="space-y-3">
                    {INSTRUCTIONS
                        .iter()
                        .map(|(topic, answer)| view! {
                            <div class="bg-slate-50 rounded-lg p-4">
                                <h3 class="font-semibold">{*topic}</h3>
                                <p class="text-sm text-slate-600 mt-1">{*answer}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <div class="grid md:grid-cols-2 gap-4">
                <section class="border border-slate-200 rounded-lg p-4">
                    <h3 class="font-semibold mb-2">"Office"</h3>
                    {OFFICE.iter().map(|line| view! { <p class="text-sm">{*line}</p> }).collect_view()}
                </section>
                <section class="border border-slate-200 rounded-lg p-4">
                    <h3 class="font-semibold mb-2">"Response Times"</h3>
                    <p class="text-sm">"Standard: "{STANDARD_RESPONSE}</p>
                    <p class="text-sm">"Urgent: "{URGENT_RESPONSE}</p>
                </section>
            </div>
        </main>
        <Footer />
    }
}

#[component]
fn ContactCard(icon: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="border border-slate-200 rounded-xl p-5 text-center space-y-1">
            <div class="text-3xl">{icon}</div>
            <h3 class="font-semibold">{title}</h3>
            {children()}
        </div>
    }
}
