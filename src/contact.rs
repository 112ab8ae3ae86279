//! Contact form bound to the page and posted with `fetch`.

use std::cell::Cell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::net::http::Request;
use gloo::timers::callback::Timeout;
use portfolio_core::config::ContactConfig;
use portfolio_core::{
    ContactForm, ContactSubmission, ContactSubmitter, PortfolioError, PortfolioResult, Relay,
    RelayResponse,
};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    AbortController, Document, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlTextAreaElement,
};

use crate::dom::{self, js_error};

/// The form and its fields as they exist in the document.
pub struct DomContactForm {
    document: Document,
    form: HtmlFormElement,
    config: ContactConfig,
}

impl DomContactForm {
    pub fn new(document: &Document, form: &HtmlFormElement, config: &ContactConfig) -> Self {
        Self {
            document: document.clone(),
            form: form.clone(),
            config: config.clone(),
        }
    }

    fn field_value(&self, id: &str) -> PortfolioResult<String> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| PortfolioError::MissingElement(format!("#{}", id)))?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Ok(input.value());
        }
        if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            return Ok(area.value());
        }
        Err(PortfolioError::MissingElement(format!("#{} is not a text field", id)))
    }

    fn submit_button(&self) -> Option<HtmlButtonElement> {
        dom::query(&self.form, &self.config.submit_selector)
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    }

    fn success_message(&self) -> Option<HtmlElement> {
        let found = dom::by_id::<HtmlElement>(&self.document, &self.config.success_id);
        if found.is_none() {
            debug!(id = %self.config.success_id, "No success message element");
        }
        found
    }
}

impl ContactForm for DomContactForm {
    fn read(&self) -> PortfolioResult<ContactSubmission> {
        Ok(ContactSubmission::new(
            &self.field_value(&self.config.name_id)?,
            &self.field_value(&self.config.email_id)?,
            &self.field_value(&self.config.message_id)?,
        ))
    }

    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn begin_pending(&self, label: &str) -> String {
        let Some(button) = self.submit_button() else {
            return String::new();
        };
        let original = button.text_content().unwrap_or_default();
        button.set_text_content(Some(label));
        button.set_disabled(true);
        original
    }

    fn restore_submit(&self, label: &str) {
        if let Some(button) = self.submit_button() {
            button.set_text_content(Some(label));
            button.set_disabled(false);
        }
    }

    fn show_success(&self) {
        if let Some(success) = self.success_message() {
            if let Err(e) = success.style().set_property("display", "block") {
                warn!(error = %js_error(e), "Failed to show success message");
            }
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn scroll_to_success(&self) {
        if let Some(success) = self.success_message() {
            dom::scroll_smoothly(&success);
        }
    }
}

/// Posts the form's `FormData` to its `action` URL.
pub struct FetchRelay {
    form: HtmlFormElement,
    timeout_ms: u32,
}

impl FetchRelay {
    /// The request is aborted after `timeout_ms`.
    pub fn new(form: &HtmlFormElement, timeout_ms: u32) -> Self {
        Self {
            form: form.clone(),
            timeout_ms,
        }
    }
}

impl Relay for FetchRelay {
    async fn send(&self, _submission: &ContactSubmission) -> PortfolioResult<RelayResponse> {
        let endpoint = self.form.action();
        let body = FormData::new_with_form(&self.form).map_err(js_error)?;
        let controller = AbortController::new().map_err(js_error)?;

        let timed_out = Rc::new(Cell::new(false));
        let expire = {
            let controller = controller.clone();
            let timed_out = Rc::clone(&timed_out);
            move || {
                timed_out.set(true);
                controller.abort();
            }
        };
        // A zero budget is spent before the request starts.
        let _deadline = if self.timeout_ms == 0 {
            expire();
            None
        } else {
            Some(Timeout::new(self.timeout_ms, expire))
        };

        let request = Request::post(&endpoint)
            .abort_signal(Some(&controller.signal()))
            .body(body)
            .map_err(|e| PortfolioError::Network(e.to_string()))?;
        debug!(%endpoint, "Posting contact form");

        match request.send().await {
            Ok(response) => Ok(RelayResponse {
                status: response.status(),
            }),
            Err(_) if timed_out.get() => Err(PortfolioError::Timeout(self.timeout_ms)),
            Err(e) => Err(PortfolioError::Network(e.to_string())),
        }
    }
}

/// Submit listener for the contact form.
pub struct ContactHandler {
    submitter: Rc<ContactSubmitter<DomContactForm, FetchRelay>>,
    _listener: EventListener,
}

impl ContactHandler {
    /// `None` when the page has no contact form.
    pub fn install(document: &Document, config: &ContactConfig) -> Option<Self> {
        let Some(form) = dom::by_id::<HtmlFormElement>(document, &config.form_id) else {
            debug!(id = %config.form_id, "No contact form on page");
            return None;
        };

        let submitter = Rc::new(ContactSubmitter::new(
            DomContactForm::new(document, &form, config),
            FetchRelay::new(&form, config.submit_timeout_ms),
            config.clone(),
        ));

        let listener = {
            let submitter = Rc::clone(&submitter);
            EventListener::new_with_options(
                &form,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    let submitter = Rc::clone(&submitter);
                    wasm_bindgen_futures::spawn_local(async move {
                        let outcome = submitter.submit().await;
                        debug!(?outcome, "Contact submit handled");
                    });
                },
            )
        };

        Some(Self {
            submitter,
            _listener: listener,
        })
    }

    pub fn is_in_flight(&self) -> bool {
        self.submitter.is_in_flight()
    }
}
