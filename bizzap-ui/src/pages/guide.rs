//! User Guide Page
//!
//! Login and account deletion walkthroughs, one per tab.

use leptos::*;
use leptos_router::A;

use bizzap::content::{Guide as GuideContent, GuideStep, DELETE_GUIDE, LOGIN_GUIDE, TAGLINE};
use bizzap::content::support::SUPPORT_EMAIL;
use bizzap::{GuideTab, Route};

use crate::components::{Footer, SiteNav};

#[component]
pub fn Guide(tab: GuideTab) -> impl IntoView {
    let guide = match tab {
        GuideTab::Login => LOGIN_GUIDE,
        GuideTab::Delete => DELETE_GUIDE,
    };

    view! {
        <SiteNav />
        <main class="container mx-auto px-4 py-10 max-w-3xl">
            <div class="text-center mb-8">
                <h1 class="text-3xl font-bold">"Bizzap"</h1>
                <p class="text-slate-500">{TAGLINE}</p>
                <p class="text-slate-600 mt-2">"User Guide for Login & Account Management"</p>
            </div>

            <div class="flex gap-2 mb-8">
                <TabLink tab=GuideTab::Login active=tab label="🔑 How to Login" />
                <TabLink tab=GuideTab::Delete active=tab label="🗑 How to Delete Account" />
            </div>

            <GuideBody guide=guide />
        </main>
        <Footer />
    }
}

#[component]
fn TabLink(tab: GuideTab, active: GuideTab, label: &'static str) -> impl IntoView {
    let class = if tab == active {
        "flex-1 text-center py-3 rounded-lg bg-slate-900 text-white font-semibold"
    } else {
        "flex-1 text-center py-3 rounded-lg bg-slate-100 text-slate-600 font-semibold"
    };

    view! {
        <A href=Route::Guide(tab).href() class=class>{label}</A>
    }
}

#[component]
fn GuideBody(guide: GuideContent) -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div class="text-center">
                <h2 class="text-2xl font-bold">{guide.title}</h2>
                <p class="text-slate-600 mt-2">{guide.subtitle}</p>
            </div>

            {guide.warning.map(|warning| view! {
                <div class="bg-red-50 border border-red-300 rounded-lg p-4 text-red-800 text-sm">
                    <strong>"Warning: "</strong>{warning}
                </div>
            })}

            {(!guide.deleted_items.is_empty()).then(|| view! {
                <div class="bg-slate-50 rounded-lg p-4">
                    <h3 class="font-semibold mb-2">"What gets deleted"</h3>
                    <ul class="list-disc pl-6 text-sm space-y-1">
                        {guide.deleted_items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                </div>
            })}

            {guide
                .steps
                .iter()
                .enumerate()
                .map(|(i, step)| view! { <Step number=i + 1 step=*step /> })
                .collect_view()}

            {(!guide.troubleshooting.is_empty()).then(|| view! {
                <section>
                    <h3 class="text-xl font-bold mb-3">"Troubleshooting"</h3>
                    {guide
                        .troubleshooting
                        .iter()
                        .map(|faq| view! {
                            <div class="bg-slate-50 rounded-lg p-4 mb-3">
                                <p class="font-semibold">{faq.question}</p>
                                {faq.answers.iter().map(|a| view! { <p class="text-sm text-slate-600">"• "{*a}</p> }).collect_view()}
                            </div>
                        })
                        .collect_view()}
                </section>
            })}

            {(!guide.alternatives.is_empty()).then(|| view! {
                <section class="bg-blue-50 rounded-lg p-4">
                    <h3 class="font-semibold mb-2">"Alternatives to deleting"</h3>
                    <ul class="list-disc pl-6 text-sm space-y-1">
                        {guide.alternatives.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}
                    </ul>
                </section>
            })}

            <p class="text-center text-sm text-slate-500">
                "Need help? Contact "
                <a class="underline" href=format!("mailto:{}", SUPPORT_EMAIL)>{SUPPORT_EMAIL}</a>
            </p>
        </div>
    }
}

#[component]
fn Step(number: usize, step: GuideStep) -> impl IntoView {
    view! {
        <div class="flex gap-4">
            <div class="w-10 h-10 shrink-0 rounded-full bg-slate-900 text-white flex items-center justify-center font-bold">
                {number}
            </div>
            <div class="flex-1">
                <h3 class="text-lg font-semibold">{step.title}</h3>
                <p class="text-slate-600 mt-1">{step.description}</p>

                {(!step.example.is_empty()).then(|| view! {
                    <div class="bg-slate-50 border border-slate-200 rounded-lg p-3 mt-3 text-sm">
                        <p class="font-semibold mb-1">"Example:"</p>
                        {step.example.iter().map(|(label, value)| view! {
                            <p>{*label}": "<strong>{*value}</strong></p>
                        }).collect_view()}
                    </div>
                })}

                {step.note.map(|note| view! {
                    <div class="bg-amber-50 border border-amber-200 rounded-lg p-3 mt-3 text-sm">
                        <strong>"Note: "</strong>{note}
                    </div>
                })}

                <ul class="list-disc pl-6 mt-3 text-sm text-slate-600 space-y-1">
                    {step.tips.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
