//! Phone Number Forms
//!
//! State machines behind the waitlist signup and the OTP login stub. Both
//! keep every rule the front-end enforces so the CLI and the browser submit
//! exactly the same way.
//!
//! The waitlist posts to a Google Forms endpoint in `no-cors` mode, where the
//! response cannot be read. Submission therefore always ends on the success
//! popup, whatever happened on the wire; the outcome is only logged.

use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

use crate::endpoints::{WAITLIST_FORM_URL, WAITLIST_PHONE_FIELD};
use crate::error::{ClientResult, FormRejection};
use crate::transport::Transport;

pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// Minimum digits for the strict policy
pub const STRICT_MIN_DIGITS: usize = 10;

/// Simulated OTP send time
pub const OTP_SEND_DELAY: Duration = Duration::from_millis(1500);

pub const WAITLIST_EMPTY: FormRejection = FormRejection("Please enter your phone number.");
pub const OTP_INVALID_PHONE: FormRejection = FormRejection("Please enter a valid phone number");
pub const OTP_TERMS_REQUIRED: FormRejection = FormRejection("Please agree to the Terms and Conditions");

/// Phone number validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonePolicy {
    /// Anything non-blank
    Lenient,
    /// Digits only, at least ten of them
    Strict,
}

impl PhonePolicy {
    /// Normalize raw input the way the field does on every keystroke
    pub fn sanitize(&self, input: &str) -> String {
        match self {
            PhonePolicy::Lenient => input.to_string(),
            PhonePolicy::Strict => input.chars().filter(char::is_ascii_digit).collect(),
        }
    }

    pub fn is_valid(&self, phone: &str) -> bool {
        match self {
            PhonePolicy::Lenient => !phone.trim().is_empty(),
            PhonePolicy::Strict => {
                phone.len() >= STRICT_MIN_DIGITS && phone.chars().all(|c| c.is_ascii_digit())
            }
        }
    }
}

fn pattern(cell: &'static OnceLock<Option<Regex>>, source: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(source).ok()).as_ref()
}

/// A country code that looks complete, e.g. "+91" or "+1234"
fn is_complete_country_code(code: &str) -> bool {
    static COMPLETE: OnceLock<Option<Regex>> = OnceLock::new();
    code.len() >= 3
        && pattern(&COMPLETE, r"^\+\d{1,4}$")
            .map(|re| re.is_match(code))
            .unwrap_or(false)
}

/// Strict country code input: optional leading `+` then digits
fn is_country_code_input(code: &str) -> bool {
    static INPUT: OnceLock<Option<Regex>> = OnceLock::new();
    pattern(&INPUT, r"^\+?\d*$")
        .map(|re| re.is_match(code))
        .unwrap_or(false)
}

/// Waitlist signup on the landing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistForm {
    pub country_code: String,
    pub phone: String,
    pub loading: bool,
    pub show_success: bool,
    auto_advanced: bool,
}

impl Default for WaitlistForm {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            phone: String::new(),
            loading: false,
            show_success: false,
            auto_advanced: false,
        }
    }
}

impl WaitlistForm {
    const POLICY: PhonePolicy = PhonePolicy::Lenient;

    pub fn new() -> Self {
        Self::default()
    }

    /// Update the country code; returns `true` when focus should move to
    /// the phone field (at most once per form)
    pub fn set_country_code(&mut self, value: &str) -> bool {
        self.country_code = value.to_string();
        if !self.auto_advanced && is_complete_country_code(value) {
            self.auto_advanced = true;
            return true;
        }
        false
    }

    pub fn set_phone(&mut self, value: &str) {
        self.phone = Self::POLICY.sanitize(value);
    }

    pub fn is_valid(&self) -> bool {
        Self::POLICY.is_valid(&self.phone)
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.loading
    }

    /// Number sent to the form backend
    pub fn full_number(&self) -> String {
        format!("{}{}", self.country_code, self.phone)
    }

    /// Validate and enter the loading state; returns the form fields to post
    pub fn begin_submit(&mut self) -> Result<Vec<(String, String)>, FormRejection> {
        if !self.is_valid() {
            return Err(WAITLIST_EMPTY);
        }
        self.loading = true;
        Ok(vec![(WAITLIST_PHONE_FIELD.to_string(), self.full_number())])
    }

    /// Leave the loading state; the success popup shows regardless of outcome
    pub fn finish_submit(&mut self, outcome: ClientResult<()>) {
        match outcome {
            Ok(()) => tracing::info!("Waitlist submission sent"),
            Err(e) => tracing::error!(error = %e, "Failed to submit waitlist form"),
        }
        self.loading = false;
        self.show_success = true;
        self.phone.clear();
    }

    pub fn dismiss_success(&mut self) {
        self.show_success = false;
    }

    /// Validate, post to `form_url` and finish
    pub async fn submit<T: Transport>(&mut self, transport: &T, form_url: &str) -> Result<(), FormRejection> {
        let fields = self.begin_submit()?;
        let outcome = transport.post_form(form_url, &fields).await;
        self.finish_submit(outcome);
        Ok(())
    }

    /// Submit to the production form
    pub async fn submit_default<T: Transport>(&mut self, transport: &T) -> Result<(), FormRejection> {
        self.submit(transport, WAITLIST_FORM_URL).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpStep {
    Phone,
    Sent,
}

/// Phone login form with a simulated OTP send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpLoginForm {
    pub country_code: String,
    pub phone: String,
    pub agreed_to_terms: bool,
    pub loading: bool,
    pub error: Option<FormRejection>,
    pub step: OtpStep,
}

impl Default for OtpLoginForm {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            phone: String::new(),
            agreed_to_terms: false,
            loading: false,
            error: None,
            step: OtpStep::Phone,
        }
    }
}

impl OtpLoginForm {
    const POLICY: PhonePolicy = PhonePolicy::Strict;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_phone(&mut self, value: &str) {
        self.phone = Self::POLICY.sanitize(value);
        self.error = None;
    }

    /// Input that is not `+` followed by digits is rejected unchanged
    pub fn set_country_code(&mut self, value: &str) {
        if !is_country_code_input(value) {
            return;
        }
        self.country_code = if value.starts_with('+') {
            value.to_string()
        } else {
            format!("+{}", value)
        };
        self.error = None;
    }

    pub fn set_terms(&mut self, agreed: bool) {
        self.agreed_to_terms = agreed;
        self.error = None;
    }

    pub fn is_valid_phone(&self) -> bool {
        Self::POLICY.is_valid(&self.phone)
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid_phone() && self.agreed_to_terms && !self.loading
    }

    /// Validate and enter the loading state
    pub fn begin_send(&mut self) -> Result<(), FormRejection> {
        let rejection = if !self.is_valid_phone() {
            Some(OTP_INVALID_PHONE)
        } else if !self.agreed_to_terms {
            Some(OTP_TERMS_REQUIRED)
        } else {
            None
        };

        if let Some(rejection) = rejection {
            self.error = Some(rejection);
            return Err(rejection);
        }

        self.loading = true;
        self.error = None;
        Ok(())
    }

    /// Called once [`OTP_SEND_DELAY`] has elapsed
    pub fn finish_send(&mut self) {
        self.loading = false;
        self.step = OtpStep::Sent;
        tracing::debug!(phone = %self.full_number(), "OTP send simulated");
    }

    /// Enter submits only when the button would be enabled
    pub fn on_enter(&mut self) -> bool {
        self.can_submit() && self.begin_send().is_ok()
    }

    pub fn full_number(&self) -> String {
        format!("{}{}", self.country_code, self.phone)
    }

    /// Restart from the phone step
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    #[test]
    fn test_policies() {
        assert!(PhonePolicy::Lenient.is_valid("1"));
        assert!(!PhonePolicy::Lenient.is_valid("   "));
        assert!(PhonePolicy::Strict.is_valid("9876543210"));
        assert!(!PhonePolicy::Strict.is_valid("987654321"));
        assert_eq!(PhonePolicy::Strict.sanitize("98-765 43(210)"), "9876543210");
        assert_eq!(PhonePolicy::Lenient.sanitize(" 98 76 "), " 98 76 ");
    }

    #[test]
    fn test_waitlist_auto_advance_once() {
        let mut form = WaitlistForm::new();
        assert!(!form.set_country_code("+9"));
        assert!(form.set_country_code("+91"));
        assert!(!form.set_country_code("+1"));
        assert!(!form.set_country_code("+44"));
    }

    #[test]
    fn test_waitlist_rejects_blank() {
        let mut form = WaitlistForm::new();
        form.set_phone("  ");
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(WAITLIST_EMPTY));
        assert!(!form.loading);

        let alert = form.begin_submit().unwrap_err();
        assert_eq!(alert.message(), "Please enter your phone number.");
        assert!(!form.show_success);
    }

    #[tokio::test]
    async fn test_waitlist_posts_full_number() {
        let transport = MockTransport::new();
        let mut form = WaitlistForm::new();
        form.set_phone("9876543210");
        assert!(form.can_submit());

        form.submit_default(&transport).await.unwrap();

        let posts = transport.posts.borrow();
        assert_eq!(posts[0].0, WAITLIST_FORM_URL);
        assert_eq!(
            posts[0].1,
            vec![("entry.1658933364".to_string(), "+919876543210".to_string())]
        );
        assert!(form.show_success);
        assert!(form.phone.is_empty());
        assert!(!form.loading);
    }

    #[tokio::test]
    async fn test_waitlist_blind_success_on_network_failure() {
        let transport = MockTransport::new().failing_posts();
        let mut form = WaitlistForm::new();
        form.set_phone("12345");

        assert!(form.submit(&transport, "https://forms.example/submit").await.is_ok());
        assert!(form.show_success);
        assert_eq!(transport.posts.borrow().len(), 1);
    }

    #[test]
    fn test_otp_validation_order() {
        let mut form = OtpLoginForm::new();
        form.set_phone("98765");
        assert_eq!(form.begin_send(), Err(OTP_INVALID_PHONE));
        assert_eq!(form.error, Some(OTP_INVALID_PHONE));

        form.set_phone("98765 43210");
        assert_eq!(form.error, None);
        assert_eq!(form.begin_send(), Err(OTP_TERMS_REQUIRED));

        form.set_terms(true);
        assert!(form.can_submit());
        assert!(form.begin_send().is_ok());
        assert!(form.loading);
        assert!(!form.can_submit());

        form.finish_send();
        assert_eq!(form.step, OtpStep::Sent);
        assert!(!form.loading);
    }

    #[test]
    fn test_otp_enter_requires_enabled_button() {
        let mut form = OtpLoginForm::new();
        form.set_phone("9876543210");
        assert!(!form.on_enter());
        assert_eq!(form.error, None);

        form.set_terms(true);
        assert!(form.on_enter());
        assert!(!form.on_enter());
    }

    #[test]
    fn test_otp_country_code_input() {
        let mut form = OtpLoginForm::new();
        form.set_country_code("44");
        assert_eq!(form.country_code, "+44");
        form.set_country_code("+4a");
        assert_eq!(form.country_code, "+44");
        form.set_country_code("");
        assert_eq!(form.country_code, "+");
    }
}
