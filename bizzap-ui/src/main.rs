//! Bizzap Web
//!
//! Public site and admin dashboards for the Bizzap B2B networking platform,
//! built with Leptos (WASM).
//!
//! # Pages
//!
//! - Landing page with the waitlist form and the OTP login page
//! - Login and account deletion guides, support, reporting, privacy policy
//! - Public lead view opened from shared `?leadId=` links
//! - Admin analytics and lead analytics dashboards
//!
//! Page state lives in the `bizzap` core crate; this crate only renders it
//! and supplies the browser [`Transport`](bizzap::Transport).

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
