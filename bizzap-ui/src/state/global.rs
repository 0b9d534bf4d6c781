//! Global Application State
//!
//! Reactive state management using Leptos signals. Page-specific state
//! (dashboard snapshots, forms) lives in the pages themselves.

use leptos::*;

use bizzap::LoadReport;

/// Context shared by every page
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// A dashboard load is in flight
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState {
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    });
}

const SUCCESS_MS: u32 = 3_000;
const ERROR_MS: u32 = 5_000;

/// Set `slot`, clearing it again after `millis` unless replaced meanwhile
fn flash(slot: RwSignal<Option<String>>, message: &str, millis: u32) {
    let message = message.to_string();
    slot.set(Some(message.clone()));
    gloo_timers::callback::Timeout::new(millis, move || {
        if slot.with_untracked(|current| current.as_deref() == Some(message.as_str())) {
            slot.set(None);
        }
    })
    .forget();
}

impl GlobalState {
    pub fn show_success(&self, message: &str) {
        flash(self.success, message, SUCCESS_MS);
    }

    pub fn show_error(&self, message: &str) {
        flash(self.error, message, ERROR_MS);
    }
}

/// Mirror endpoint failures to the browser console
pub fn log_report(report: &LoadReport) {
    for failure in &report.failures {
        web_sys::console::warn_1(&format!("{} failed: {}", failure.endpoint, failure.message).into());
    }
}
