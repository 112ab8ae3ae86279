//! Typewriter effect for the hero subtitle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use portfolio_core::config::TypingConfig;
use portfolio_core::Typewriter;
use tracing::debug;
use web_sys::{Document, Element, Window};

use crate::dom;

struct TypingState {
    target: Element,
    writer: RefCell<Typewriter>,
    interval_ms: u32,
    running: Cell<bool>,
    pending: RefCell<Option<Timeout>>,
}

/// Cancelable chain of timeouts, one character per tick.
pub struct TypingAnimator {
    state: Rc<TypingState>,
}

impl TypingAnimator {
    pub fn new(target: Element, config: &TypingConfig) -> Self {
        Self {
            state: Rc::new(TypingState {
                target,
                writer: RefCell::new(Typewriter::new(&config.text)),
                interval_ms: config.interval_ms,
                running: Cell::new(false),
                pending: RefCell::new(None),
            }),
        }
    }

    /// Type the first character now and the rest on the timer.
    pub fn start(&self) {
        if self.state.running.replace(true) {
            return;
        }
        debug!(remaining = self.state.writer.borrow().remaining(), "Typing started");
        tick(&self.state);
    }

    /// Drop the pending tick. Text typed so far stays.
    pub fn stop(&self) {
        self.state.running.set(false);
        self.state.pending.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    pub fn is_done(&self) -> bool {
        self.state.writer.borrow().is_done()
    }
}

impl Drop for TypingAnimator {
    fn drop(&mut self) {
        self.stop();
    }
}

fn tick(state: &Rc<TypingState>) {
    state.pending.borrow_mut().take();
    if !state.running.get() {
        return;
    }
    let next = state.writer.borrow_mut().tick();
    let Some(c) = next else {
        state.running.set(false);
        debug!("Typing finished");
        return;
    };

    let mut text = state.target.text_content().unwrap_or_default();
    text.push(c);
    state.target.set_text_content(Some(&text));

    if state.writer.borrow().is_done() {
        state.running.set(false);
        return;
    }
    let next_state = Rc::clone(state);
    let timeout = Timeout::new(state.interval_ms, move || tick(&next_state));
    *state.pending.borrow_mut() = Some(timeout);
}

fn is_loaded(document: &Document) -> bool {
    document.ready_state() == "complete"
}

/// Starts the animator once the page has finished loading.
pub struct TypingOnLoad {
    animator: Rc<TypingAnimator>,
    _listener: Option<EventListener>,
}

impl TypingOnLoad {
    /// `None` when the page has no subtitle element.
    pub fn install(window: &Window, document: &Document, config: &TypingConfig) -> Option<Self> {
        let Some(target) = dom::query_document(document, &config.selector) else {
            debug!(selector = %config.selector, "No subtitle element, typing disabled");
            return None;
        };
        let animator = Rc::new(TypingAnimator::new(target, config));

        // The module may initialise after `load` has already fired.
        let listener = if is_loaded(document) {
            animator.start();
            None
        } else {
            let animator = Rc::clone(&animator);
            Some(EventListener::once(window, "load", move |_event| {
                animator.start();
            }))
        };

        Some(Self {
            animator,
            _listener: listener,
        })
    }

    pub fn animator(&self) -> &TypingAnimator {
        &self.animator
    }
}
