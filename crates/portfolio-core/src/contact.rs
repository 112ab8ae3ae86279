//! Contact form validation and submission.
//!
//! [`ContactSubmitter`] drives one submission end to end against two
//! collaborators: the form on the page ([`ContactForm`]) and the third-party
//! relay that forwards the message ([`Relay`]). Only one submission may be
//! in flight; the submit control is disabled for its duration.

use std::cell::Cell;
use std::future::Future;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ContactConfig;
use crate::error::{PortfolioError, PortfolioResult};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Browser `\s` also covers U+FEFF; Unicode `\s` here does not.
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is a valid regex")
});

/// Loose structural check: something, an `@`, something, a dot, something,
/// with no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Trimmed snapshot of the form fields taken at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> PortfolioResult<()> {
        if is_valid_email(&self.email) {
            Ok(())
        } else {
            Err(PortfolioError::InvalidEmail(self.email.clone()))
        }
    }
}

/// Status line returned by the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
}

impl RelayResponse {
    /// The 2xx range.
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// External endpoint that receives the form.
pub trait Relay {
    /// Post the form. Transport failures and timeouts are errors; any HTTP
    /// status is a response.
    fn send(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = PortfolioResult<RelayResponse>>;
}

/// The form's visible state.
pub trait ContactForm {
    /// Read the three fields.
    fn read(&self) -> PortfolioResult<ContactSubmission>;

    /// Blocking message to the visitor.
    fn alert(&self, message: &str);

    /// Disable the submit control and show `label`. Returns the label it
    /// replaced.
    fn begin_pending(&self, label: &str) -> String;

    /// Re-enable the submit control with `label`.
    fn restore_submit(&self, label: &str);

    fn show_success(&self);

    /// Clear every field.
    fn reset(&self);

    fn scroll_to_success(&self);
}

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The relay accepted the message
    Sent,
    /// Nothing was sent: the input was invalid, or another submission was
    /// still in flight ([`PortfolioError::Busy`])
    Rejected(PortfolioError),
    /// The relay refused the message or could not be reached
    Failed(PortfolioError),
}

/// Runs submissions against a form and a relay.
pub struct ContactSubmitter<F, R> {
    form: F,
    relay: R,
    config: ContactConfig,
    in_flight: Cell<bool>,
}

impl<F: ContactForm, R: Relay> ContactSubmitter<F, R> {
    pub fn new(form: F, relay: R, config: ContactConfig) -> Self {
        Self {
            form,
            relay,
            config,
            in_flight: Cell::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    /// Handle one submit event.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.in_flight.get() {
            debug!("Submission already in flight, ignoring submit");
            return SubmitOutcome::Rejected(PortfolioError::Busy);
        }

        let submission = match self.form.read() {
            Ok(submission) => submission,
            Err(e) => {
                warn!(error = %e, "Could not read contact form");
                return SubmitOutcome::Failed(e);
            }
        };

        if let Err(e) = submission.validate() {
            debug!(email = %submission.email, "Rejected contact submission");
            self.form.alert(&self.config.invalid_email_message);
            return SubmitOutcome::Rejected(e);
        }

        self.in_flight.set(true);
        let original_label = self.form.begin_pending(&self.config.pending_label);

        let result = match self.relay.send(&submission).await {
            Ok(response) if response.is_ok() => Ok(()),
            Ok(response) => Err(PortfolioError::Relay {
                status: response.status,
            }),
            Err(e) => Err(e),
        };

        let outcome = match result {
            Ok(()) => {
                info!(name = %submission.name, "Contact message sent");
                self.form.show_success();
                self.form.reset();
                self.form.scroll_to_success();
                // The form is empty again, so the control goes back to its
                // idle state; a resend needs new input.
                self.form.restore_submit(&original_label);
                SubmitOutcome::Sent
            }
            Err(e) => {
                warn!(error = %e, "Contact submission failed");
                self.form.alert(&self.config.failure_message);
                self.form.restore_submit(&original_label);
                SubmitOutcome::Failed(e)
            }
        };
        self.in_flight.set(false);
        outcome
    }
}
