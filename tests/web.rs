//! Browser tests for the DOM bindings.
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};

use gloo::timers::future::TimeoutFuture;
use portfolio::anchors::AnchorScroller;
use portfolio::contact::{ContactHandler, DomContactForm, FetchRelay};
use portfolio::dom;
use portfolio::sidebar::SidebarHandle;
use portfolio::theme::ThemeToggle;
use portfolio::tilt::CardTilt;
use portfolio::typing::{TypingAnimator, TypingOnLoad};
use portfolio_core::config::{
    AnchorConfig, ContactConfig, SidebarConfig, ThemeConfig, TiltConfig, TypingConfig,
};
use portfolio_core::{
    ContactForm, ContactSubmission, ContactSubmitter, PortfolioError, PortfolioResult, Relay,
    RelayResponse, SubmitOutcome, Theme,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    DocumentReadyState, Event, EventInit, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlTextAreaElement, MouseEvent, MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> HtmlElement {
    let document = dom::document().unwrap();
    let host: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    host.set_inner_html(html);
    document.body().unwrap().append_child(&host).unwrap();
    host
}

fn theme_config(suffix: &str) -> ThemeConfig {
    ThemeConfig {
        storage_key: format!("portfolio-theme-test-{}", suffix),
        toggle_id: format!("theme-toggle-{}", suffix),
        dark_class: format!("dark-{}", suffix),
    }
}

#[wasm_bindgen_test]
fn stored_dark_preference_is_applied_and_toggles() {
    let config = theme_config("stored");
    let host = mount(&format!(r#"<input type="checkbox" id="{}">"#, config.toggle_id));
    let window = dom::window().unwrap();
    let document = dom::document().unwrap();
    let storage = window.local_storage().unwrap().unwrap();
    storage.set_item(&config.storage_key, "dark").unwrap();

    let toggle = ThemeToggle::install(&window, &document, &config).unwrap();
    let root = document.document_element().unwrap();
    let checkbox: HtmlInputElement = dom::by_id(&document, &config.toggle_id).unwrap();

    assert_eq!(toggle.current(), Theme::Dark);
    assert!(root.class_list().contains(&config.dark_class));
    assert!(checkbox.checked());

    checkbox
        .dispatch_event(&Event::new("change").unwrap())
        .unwrap();

    assert_eq!(toggle.current(), Theme::Light);
    assert!(!root.class_list().contains(&config.dark_class));
    assert!(!checkbox.checked());
    assert_eq!(
        storage.get_item(&config.storage_key).unwrap().as_deref(),
        Some("light")
    );

    storage.remove_item(&config.storage_key).unwrap();
    host.remove();
}

#[wasm_bindgen_test]
fn missing_toggle_still_applies_theme() {
    let config = theme_config("absent");
    let window = dom::window().unwrap();
    let document = dom::document().unwrap();
    let storage = window.local_storage().unwrap().unwrap();
    storage.set_item(&config.storage_key, "dark").unwrap();

    let toggle = ThemeToggle::install(&window, &document, &config).unwrap();

    assert_eq!(toggle.current(), Theme::Dark);
    let root = document.document_element().unwrap();
    root.class_list().remove_1(&config.dark_class).unwrap();
    storage.remove_item(&config.storage_key).unwrap();
}

#[wasm_bindgen_test]
fn card_tilts_toward_pointer_and_resets() {
    let host = mount(
        r#"<div class="tilt-test-card" style="position:fixed;left:0;top:0;width:200px;height:100px"></div>"#,
    );
    let document = dom::document().unwrap();
    let config = TiltConfig {
        selector: ".tilt-test-card".to_string(),
        ..TiltConfig::default()
    };
    let _tilt = CardTilt::install(&document, &config);
    let card: HtmlElement = dom::query_document(&document, ".tilt-test-card")
        .unwrap()
        .dyn_into()
        .unwrap();

    let init = MouseEventInit::new();
    init.set_client_x(0);
    init.set_client_y(0);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    card.dispatch_event(&event).unwrap();
    assert_eq!(
        card.style().get_property_value("transform").unwrap(),
        "rotateX(7.5deg) rotateY(-7.5deg) translateZ(10px)"
    );

    card.dispatch_event(&MouseEvent::new("mouseleave").unwrap())
        .unwrap();
    let reset = card.style().get_property_value("transform").unwrap();
    assert!(reset.starts_with("rotateX(0"), "transform = {}", reset);
    assert!(!reset.contains("7.5"));

    host.remove();
}

#[wasm_bindgen_test]
async fn typing_appends_after_existing_text_and_stops() {
    let host = mount(r#"<p class="typing-test">I am a </p>"#);
    let document = dom::document().unwrap();
    let target = dom::query_document(&document, ".typing-test").unwrap();
    let config = TypingConfig {
        selector: ".typing-test".to_string(),
        text: "Dev".to_string(),
        interval_ms: 10,
    };

    let animator = TypingAnimator::new(target.clone(), &config);
    animator.start();
    assert_eq!(target.text_content().unwrap(), "I am a D");

    TimeoutFuture::new(100).await;
    assert_eq!(target.text_content().unwrap(), "I am a Dev");
    assert!(animator.is_done());
    assert!(!animator.is_running());

    host.remove();
}

#[wasm_bindgen_test]
async fn stopped_typing_leaves_partial_text() {
    let host = mount(r#"<p class="typing-stop-test"></p>"#);
    let document = dom::document().unwrap();
    let target = dom::query_document(&document, ".typing-stop-test").unwrap();
    let config = TypingConfig {
        selector: ".typing-stop-test".to_string(),
        text: "Full Stack Developer".to_string(),
        interval_ms: 50,
    };

    let animator = TypingAnimator::new(target.clone(), &config);
    animator.start();
    animator.stop();
    TimeoutFuture::new(150).await;

    assert_eq!(target.text_content().unwrap(), "F");
    host.remove();
}

#[wasm_bindgen_test]
fn absent_markup_installs_nothing() {
    let window = dom::window().unwrap();
    let document = dom::document().unwrap();

    let sidebar = SidebarHandle::install(
        &window,
        &document,
        &SidebarConfig {
            sidebar_id: "no-such-sidebar".to_string(),
            ..SidebarConfig::default()
        },
    );
    assert!(sidebar.is_none());

    let contact = ContactHandler::install(
        &document,
        &ContactConfig {
            form_id: "no-such-form".to_string(),
            ..ContactConfig::default()
        },
    );
    assert!(contact.is_none());
}

fn cancelable_click() -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict("click", &init).unwrap()
}

#[wasm_bindgen_test]
fn in_page_links_never_navigate_even_without_target() {
    let host = mount(
        r##"<nav class="anchor-test">
            <a id="anchor-missing" href="#no-such-section">Gone</a>
            <a id="anchor-bare" href="#">Top</a>
            <a id="anchor-present" href="#anchor-test-section">Here</a>
        </nav>
        <section id="anchor-test-section">Section</section>"##,
    );
    let document = dom::document().unwrap();
    let _anchors = AnchorScroller::install(
        &document,
        &AnchorConfig {
            selector: r##".anchor-test a[href^="#"]"##.to_string(),
        },
    );

    for id in ["anchor-missing", "anchor-bare", "anchor-present"] {
        let link = document.get_element_by_id(id).unwrap();
        let click = cancelable_click();
        let not_cancelled = link.dispatch_event(&click).unwrap();
        assert!(!not_cancelled, "{} was not cancelled", id);
        assert!(click.default_prevented(), "{} navigated", id);
    }

    host.remove();
}

async fn wait_for_load() {
    let document = dom::document().unwrap();
    for _ in 0..100 {
        if document.ready_state() == DocumentReadyState::Complete {
            return;
        }
        TimeoutFuture::new(20).await;
    }
}

#[wasm_bindgen_test]
async fn typing_starts_at_once_after_page_load() {
    wait_for_load().await;
    let host = mount(r#"<p class="typing-loaded-test"></p>"#);
    let window = dom::window().unwrap();
    let document = dom::document().unwrap();
    let config = TypingConfig {
        selector: ".typing-loaded-test".to_string(),
        text: "Hi".to_string(),
        interval_ms: 10,
    };

    let typing = TypingOnLoad::install(&window, &document, &config).unwrap();
    let target = dom::query_document(&document, ".typing-loaded-test").unwrap();
    assert_eq!(target.text_content().unwrap(), "H");
    assert!(typing.animator().is_running());

    host.remove();
}

// ============================================================================
// Contact form against real markup
// ============================================================================

fn contact_config(suffix: &str) -> ContactConfig {
    ContactConfig {
        form_id: format!("cf-form-{}", suffix),
        name_id: format!("cf-name-{}", suffix),
        email_id: format!("cf-email-{}", suffix),
        message_id: format!("cf-message-{}", suffix),
        success_id: format!("cf-success-{}", suffix),
        ..ContactConfig::default()
    }
}

fn mount_contact_form(config: &ContactConfig, email: &str) -> HtmlElement {
    let host = mount(&format!(
        r#"<form id="{form}" action="/contact-relay-test" method="post">
            <input id="{name}" name="name">
            <input id="{email}" name="email">
            <textarea id="{message}" name="message"></textarea>
            <button type="submit">Send Message</button>
        </form>
        <div id="{success}" style="display: none">Thanks</div>"#,
        form = config.form_id,
        name = config.name_id,
        email = config.email_id,
        message = config.message_id,
        success = config.success_id,
    ));
    let document = dom::document().unwrap();
    dom::by_id::<HtmlInputElement>(&document, &config.name_id)
        .unwrap()
        .set_value("  Ada ");
    dom::by_id::<HtmlInputElement>(&document, &config.email_id)
        .unwrap()
        .set_value(email);
    dom::by_id::<HtmlTextAreaElement>(&document, &config.message_id)
        .unwrap()
        .set_value(" Hello ");
    host
}

fn contact_parts(config: &ContactConfig) -> (HtmlFormElement, HtmlButtonElement) {
    let document = dom::document().unwrap();
    let form: HtmlFormElement = dom::by_id(&document, &config.form_id).unwrap();
    let button: HtmlButtonElement = dom::query(&form, &config.submit_selector)
        .unwrap()
        .dyn_into()
        .unwrap();
    (form, button)
}

/// Page form that records alerts instead of opening a dialog.
struct QuietForm {
    inner: DomContactForm,
    alerts: RefCell<Vec<String>>,
}

impl ContactForm for QuietForm {
    fn read(&self) -> PortfolioResult<ContactSubmission> {
        self.inner.read()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn begin_pending(&self, label: &str) -> String {
        self.inner.begin_pending(label)
    }

    fn restore_submit(&self, label: &str) {
        self.inner.restore_submit(label)
    }

    fn show_success(&self) {
        self.inner.show_success()
    }

    fn reset(&self) {
        self.inner.reset()
    }

    fn scroll_to_success(&self) {
        self.inner.scroll_to_success()
    }
}

struct CountingRelay {
    calls: Cell<u32>,
}

impl Relay for CountingRelay {
    async fn send(&self, _submission: &ContactSubmission) -> PortfolioResult<RelayResponse> {
        self.calls.set(self.calls.get() + 1);
        Ok(RelayResponse { status: 200 })
    }
}

#[wasm_bindgen_test]
fn page_form_reads_trimmed_fields() {
    let config = contact_config("read");
    let host = mount_contact_form(&config, " ada@example.com ");
    let document = dom::document().unwrap();
    let (form, _button) = contact_parts(&config);

    let submission = DomContactForm::new(&document, &form, &config).read().unwrap();
    assert_eq!(
        submission,
        ContactSubmission::new("Ada", "ada@example.com", "Hello")
    );

    host.remove();
}

#[wasm_bindgen_test]
async fn invalid_email_on_page_sends_nothing_and_keeps_button() {
    let config = contact_config("invalid");
    let host = mount_contact_form(&config, "not-an-email");
    let document = dom::document().unwrap();
    let (form, button) = contact_parts(&config);

    let submitter = ContactSubmitter::new(
        QuietForm {
            inner: DomContactForm::new(&document, &form, &config),
            alerts: RefCell::new(Vec::new()),
        },
        CountingRelay {
            calls: Cell::new(0),
        },
        config.clone(),
    );

    let outcome = submitter.submit().await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Rejected(PortfolioError::InvalidEmail(_))
    ));
    assert_eq!(submitter.relay().calls.get(), 0);
    assert_eq!(
        *submitter.form().alerts.borrow(),
        vec![config.invalid_email_message.clone()]
    );
    assert!(!button.disabled());
    assert_eq!(button.text_content().unwrap(), "Send Message");

    host.remove();
}

#[wasm_bindgen_test]
async fn accepted_message_shows_success_and_restores_button() {
    let config = contact_config("sent");
    let host = mount_contact_form(&config, "ada@example.com");
    let document = dom::document().unwrap();
    let (form, button) = contact_parts(&config);
    let page_form = DomContactForm::new(&document, &form, &config);

    let original = page_form.begin_pending(&config.pending_label);
    assert_eq!(original, "Send Message");
    assert!(button.disabled());
    assert_eq!(button.text_content().unwrap(), "Sending...");

    let submitter = ContactSubmitter::new(
        QuietForm {
            inner: DomContactForm::new(&document, &form, &config),
            alerts: RefCell::new(Vec::new()),
        },
        CountingRelay {
            calls: Cell::new(0),
        },
        config.clone(),
    );
    page_form.restore_submit(&original);

    assert_eq!(submitter.submit().await, SubmitOutcome::Sent);

    let success: HtmlElement = dom::by_id(&document, &config.success_id).unwrap();
    assert_eq!(
        success.style().get_property_value("display").unwrap(),
        "block"
    );
    let email: HtmlInputElement = dom::by_id(&document, &config.email_id).unwrap();
    assert_eq!(email.value(), "");
    assert!(!button.disabled());
    assert_eq!(button.text_content().unwrap(), "Send Message");
    assert_eq!(submitter.relay().calls.get(), 1);

    host.remove();
}

#[wasm_bindgen_test]
async fn zero_timeout_aborts_the_request() {
    let config = contact_config("timeout");
    let host = mount_contact_form(&config, "ada@example.com");
    let (form, _button) = contact_parts(&config);

    let relay = FetchRelay::new(&form, 0);
    let result = relay
        .send(&ContactSubmission::new("Ada", "ada@example.com", "Hello"))
        .await;

    assert_eq!(result, Err(PortfolioError::Timeout(0)));

    host.remove();
}
