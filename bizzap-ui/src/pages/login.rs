//! Login Page
//!
//! Phone number entry with a simulated OTP send.

use leptos::*;

use bizzap::content::{landing, COPYRIGHT};
use bizzap::forms::OTP_SEND_DELAY;
use bizzap::{OtpLoginForm, OtpStep};

#[component]
pub fn Login() -> impl IntoView {
    let form = create_rw_signal(OtpLoginForm::new());

    let send = move || {
        spawn_local(async move {
            gloo_timers::future::sleep(OTP_SEND_DELAY).await;
            form.update(|f| f.finish_send());
        });
    };

    let on_send = move |_| {
        let mut started = false;
        form.update(|f| started = f.begin_send().is_ok());
        if started {
            send();
        }
    };

    let on_key = move |ev: ev::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let mut started = false;
        form.update(|f| started = f.on_enter());
        if started {
            send();
        }
    };

    let show_terms = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(landing::TERMS_PLACEHOLDER);
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-slate-50 px-4">
            <div class="bg-white border-2 border-slate-900 rounded-2xl p-8 w-full max-w-md">
                {move || match form.with(|f| f.step) {
                    OtpStep::Phone => view! {
                        <div class="text-center mb-6">
                            <h1 class="text-2xl font-bold">{landing::LOGIN_TITLE}</h1>
                            <p class="text-slate-500 mt-1">{landing::LOGIN_SUBTITLE}</p>
                        </div>

                        {move || form.with(|f| f.error).map(|e| view! {
                            <div class="bg-red-50 border border-red-300 rounded-lg p-3 mb-4">
                                <p class="text-sm text-red-700">{e.message()}</p>
                            </div>
                        })}

                        <label class="text-sm font-semibold">"Phone Number"</label>
                        <div class="flex items-center border-2 border-slate-900 rounded-lg px-3 mt-2">
                            <input
                                type="text"
                                class="w-14 py-2 outline-none"
                                placeholder="+91"
                                prop:value=move || form.with(|f| f.country_code.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.set_country_code(&value));
                                }
                                on:keydown=on_key
                            />
                            <span class="text-slate-300 mx-2">"|"</span>
                            <input
                                type="tel"
                                class="flex-1 py-2 outline-none"
                                placeholder="Enter phone number"
                                autofocus=true
                                prop:value=move || form.with(|f| f.phone.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.set_phone(&value));
                                }
                                on:keydown=on_key
                            />
                        </div>
                        <p class="text-xs text-slate-500 mt-1">{landing::LOGIN_HINT}</p>

                        <div class="flex items-start space-x-2 my-5">
                            <input
                                type="checkbox"
                                id="terms"
                                prop:checked=move || form.with(|f| f.agreed_to_terms)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    form.update(|f| f.set_terms(checked));
                                }
                            />
                            <label for="terms" class="text-sm">
                                "I agree to the "
                                <a href="#terms" class="font-semibold underline" on:click=show_terms>"Terms and Conditions"</a>
                                " "
                                <a href="#terms" class="text-xs text-slate-500 underline" on:click=show_terms>"Read more"</a>
                            </label>
                        </div>

                        <button
                            class="w-full py-3 rounded-lg bg-slate-900 text-white font-semibold disabled:opacity-50"
                            disabled=move || form.with(|f| !f.can_submit())
                            on:click=on_send
                        >
                            {move || if form.with(|f| f.loading) { "Sending..." } else { "Send OTP" }}
                        </button>
                    }
                    .into_view(),
                    OtpStep::Sent => view! {
                        <div class="text-center py-5">
                            <div class="text-6xl mb-6">"✅"</div>
                            <h2 class="text-2xl font-bold">{landing::OTP_SENT_TITLE}</h2>
                            <p class="text-slate-500 mt-3">
                                "We've sent a verification code to"
                                <br />
                                <strong>{move || form.with(|f| format!("{} {}", f.country_code, f.phone))}</strong>
                            </p>
                            <button
                                class="mt-6 text-sm underline text-slate-500"
                                on:click=move |_| form.update(|f| f.reset())
                            >
                                "Use a different number"
                            </button>
                        </div>
                    }
                    .into_view(),
                }}

                <div class="mt-10 pt-5 border-t border-slate-200 text-center">
                    <p class="text-xs text-slate-400 font-semibold">{COPYRIGHT}</p>
                </div>
            </div>
        </div>
    }
}
