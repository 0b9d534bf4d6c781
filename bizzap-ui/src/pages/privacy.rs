//! Privacy Policy Page

use leptos::*;

use bizzap::content::privacy::{CONTACT, DEVELOPER, EFFECTIVE_DATE, INTRO, SECTIONS};
use bizzap::content::PolicyBlock;

use crate::components::{Footer, SiteNav};

#[component]
pub fn Privacy() -> impl IntoView {
    view! {
        <SiteNav />
        <main class="container mx-auto px-4 py-10 max-w-3xl">
            <h1 class="text-3xl font-bold">"Privacy Policy"</h1>
            <p class="text-sm text-slate-500 mt-2">
                "Effective Date: "{EFFECTIVE_DATE}" · Developer: "{DEVELOPER}" · Contact: "
                <a class="underline" href=format!("mailto:{}", CONTACT)>{CONTACT}</a>
            </p>

            <div class="mt-6 space-y-3 text-slate-700">
                {INTRO.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
            </div>

            {SECTIONS
                .iter()
                .map(|section| view! {
                    <section class="mt-8">
                        <h2 class="text-xl font-bold mb-3">{section.title}</h2>
                        {section.blocks.iter().map(|block| render_block(*block)).collect_view()}
                    </section>
                })
                .collect_view()}
        </main>
        <Footer />
    }
}

fn render_block(block: PolicyBlock) -> View {
    match block {
        PolicyBlock::Heading(text) => view! { <h3 class="font-semibold mt-4 mb-1">{text}</h3> }.into_view(),
        PolicyBlock::Text(text) => view! { <p class="text-slate-700 mb-2">{text}</p> }.into_view(),
        PolicyBlock::Bullets(items) => view! {
            <ul class="list-disc pl-6 mb-2 text-slate-700">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        }
        .into_view(),
    }
}
