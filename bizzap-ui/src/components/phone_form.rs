//! Waitlist Phone Form
//!
//! Country code plus phone number inputs posting to the waitlist form
//! backend, followed by the welcome popup.

use leptos::*;

use bizzap::content::{landing, WHATSAPP_GROUP_URL};
use bizzap::endpoints::WAITLIST_FORM_URL;
use bizzap::{Transport, WaitlistForm};

use crate::api::GlooTransport;

#[component]
pub fn WaitlistPhoneForm() -> impl IntoView {
    let form = create_rw_signal(WaitlistForm::new());
    let (code_focused, set_code_focused) = create_signal(false);
    let phone_ref = create_node_ref::<html::Input>();

    let on_country_code = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        let mut advance = false;
        form.update(|f| advance = f.set_country_code(&value));
        if advance {
            if let Some(input) = phone_ref.get() {
                let _ = input.focus();
            }
        }
    };

    let on_phone = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.set_phone(&value));
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut fields = None;
        form.update(|f| fields = Some(f.begin_submit()));

        match fields {
            Some(Ok(fields)) => spawn_local(async move {
                let outcome = GlooTransport.post_form(WAITLIST_FORM_URL, &fields).await;
                if let Err(e) = &outcome {
                    web_sys::console::error_1(&format!("Waitlist submission failed: {}", e).into());
                }
                form.update(|f| f.finish_submit(outcome));
            }),
            Some(Err(rejection)) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(rejection.message());
                }
            }
            None => {}
        }
    };

    let join_whatsapp = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(WHATSAPP_GROUP_URL, "_blank");
        }
        form.update(|f| f.dismiss_success());
    };

    let invalid = move || form.with(|f| !f.phone.is_empty() && !f.is_valid());

    view! {
        <form on:submit=on_submit class="space-y-3 max-w-md mx-auto">
            <div class=move || {
                let base = "flex items-center bg-white border rounded-xl px-4 py-3 shadow-sm";
                if invalid() {
                    format!("{} border-red-400", base)
                } else {
                    format!("{} border-slate-300", base)
                }
            }>
                <span class="mr-2">"📞"</span>
                <input
                    type="text"
                    class="w-14 outline-none"
                    placeholder="+91"
                    prop:value=move || form.with(|f| f.country_code.clone())
                    on:input=on_country_code
                    on:focus=move |_| set_code_focused.set(true)
                    on:blur=move |_| set_code_focused.set(false)
                />
                <span class="text-slate-300 mx-2">"|"</span>
                <input
                    node_ref=phone_ref
                    type="tel"
                    class="flex-1 outline-none"
                    placeholder="Enter your phone number"
                    required=true
                    prop:value=move || form.with(|f| f.phone.clone())
                    on:input=on_phone
                />
            </div>

            <Show when=move || code_focused.get()>
                <p class="text-xs text-slate-500">{landing::COUNTRY_HINT}</p>
            </Show>

            <button
                type="submit"
                class="w-full py-3 rounded-xl bg-slate-900 text-white font-semibold disabled:opacity-50"
                disabled=move || form.with(|f| !f.can_submit())
            >
                {move || if form.with(|f| f.loading) { "Processing..." } else { "Join Waitlist Now" }}
            </button>
        </form>

        <Show when=move || form.with(|f| f.show_success)>
            <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
                <div class="bg-white rounded-2xl p-8 max-w-sm w-full text-center relative">
                    <button
                        class="absolute top-3 right-3 text-slate-400"
                        on:click=move |_| form.update(|f| f.dismiss_success())
                    >
                        "✕"
                    </button>
                    <div class="text-5xl mb-4">"✅"</div>
                    <h3 class="text-xl font-bold">{landing::SUCCESS_TITLE}</h3>
                    <p class="text-slate-600 mt-2">{landing::SUCCESS_MESSAGE}</p>
                    <div class="mt-6 space-y-2">
                        <button
                            class="w-full py-2 rounded-lg bg-green-600 text-white font-medium"
                            on:click=join_whatsapp
                        >
                            "Join WhatsApp Group →"
                        </button>
                        <button
                            class="w-full py-2 rounded-lg text-slate-500"
                            on:click=move |_| form.update(|f| f.dismiss_success())
                        >
                            "Skip for now"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
