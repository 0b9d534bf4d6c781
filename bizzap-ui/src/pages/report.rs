//! Report an Issue Page

use leptos::*;

use bizzap::content::report::{mailto, COMMITMENTS, GUIDELINES};

use crate::components::{Footer, SiteNav};

#[component]
pub fn Report() -> impl IntoView {
    view! {
        <SiteNav />
        <main class="container mx-auto px-4 py-10 max-w-3xl space-y-10">
            <div class="text-center">
                <h1 class="text-3xl font-bold">"Report an Issue"</h1>
                <p class="text-slate-500 mt-2">
                    "Help us keep Bizzap safe. Report fraud, fake leads or abusive behaviour."
                </p>
            </div>

            <section>
                <h2 class="text-xl font-bold mb-4">"What to include"</h2>
                <div class="grid md:grid-cols-3 gap-4">
                    {GUIDELINES.iter().map(|(heading, detail)| view! {
                        <div class="bg-slate-50 rounded-lg p-4">
                            <h3 class="font-semibold">{*heading}</h3>
                            <p class="text-sm text-slate-600 mt-1">{*detail}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <div class="text-center">
                <a
                    href=mailto()
                    class="inline-block px-6 py-3 rounded-lg bg-red-600 hover:bg-red-700 text-white font-semibold"
                >
                    "Email a Report"
                </a>
            </div>

            <section>
                <h2 class="text-xl font-bold mb-4">"Our Commitment"</h2>
                <div class="space-y-3">
                    {COMMITMENTS.iter().map(|(heading, detail)| view! {
                        <div class="border-l-4 border-slate-900 pl-4">
                            <h3 class="font-semibold">{*heading}</h3>
                            <p class="text-sm text-slate-600">{*detail}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </main>
        <Footer />
    }
}
