//! Popup Session
//!
//! Orchestrates one payment attempt end to end: builds the overlay,
//! initializes the remote checkout session, relays cross-document
//! messages through the lifecycle machine and tears everything down
//! on terminal states. Each `initialize` call owns its own session
//! object; nothing routes through global state.

use std::cell::RefCell;
use std::rc::Rc;

use monnify_core::{
    Disposition, Endpoints, InboundMessage, Lifecycle, LifecycleState, OutboundMessage,
    PaymentConfig, RuntimePaymentData, SdkError,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlIFrameElement, MessageEvent, Window};

use crate::dom::{self, WRAPPER_ID};
use crate::handlers::EventHandlers;
use crate::interop::to_js;
use crate::{api, browser_window, fingerprint, styles};

/// Session knobs beyond the payment config
#[derive(Clone, Debug, Default)]
pub struct SessionOptions {
    /// When set, inbound messages from any other origin are dropped.
    /// Unset accepts any origin and relies on message shape alone,
    /// matching the hosted app's own trust model.
    pub allowed_origin: Option<String>,
}

/// One live checkout popup.
///
/// Dropping the handle does not dismiss the popup; the session ends
/// when the hosted app posts a terminal message, and cleanup then
/// removes both the overlay and the message listener.
pub struct PopupSession {
    shared: Rc<SessionShared>,
}

struct SessionShared {
    payment: RuntimePaymentData,
    handlers: EventHandlers,
    allowed_origin: Option<String>,
    state: RefCell<SessionState>,
}

struct SessionState {
    lifecycle: Lifecycle,
    iframe: Option<HtmlIFrameElement>,
    preloader: Option<Element>,
    on_load: Option<Closure<dyn FnMut()>>,
    on_message: Option<Closure<dyn FnMut(MessageEvent)>>,
}

impl PopupSession {
    pub fn state(&self) -> LifecycleState {
        self.shared.state.borrow().lifecycle.state()
    }

    pub fn is_terminated(&self) -> bool {
        self.state() == LifecycleState::Terminated
    }

    /// Transaction reference for this session
    pub fn reference(&self) -> Option<String> {
        self.shared.payment.reference().map(String::from)
    }
}

/// Open a checkout popup for a validated configuration.
///
/// Validation failures return before any DOM or network side effect;
/// transport failures during session initialization degrade to the
/// bare checkout host instead of aborting.
pub fn initialize(config: PaymentConfig, handlers: EventHandlers) -> Result<PopupSession, SdkError> {
    initialize_with_options(config, handlers, SessionOptions::default())
}

pub fn initialize_with_options(
    config: PaymentConfig,
    handlers: EventHandlers,
    options: SessionOptions,
) -> Result<PopupSession, SdkError> {
    config.validate()?;

    let window = browser_window()?;
    let document = window
        .document()
        .ok_or_else(|| SdkError::Dom("window has no document".into()))?;

    // The wrapper id is contractual and cannot be made unique, so a
    // second session before the first terminates is rejected instead
    // of fighting over DOM identity.
    if document.get_element_by_id(WRAPPER_ID).is_some() {
        return Err(SdkError::SessionActive);
    }

    let finalized = config.finalize();
    let endpoints = Endpoints::resolve(finalized.environment(), finalized.compatibility_mode());
    styles::ensure_styles_injected(&document)?;

    let payment = RuntimePaymentData::new(finalized.clone(), fingerprint::collect(&window));
    tracing::info!(
        reference = payment.reference().unwrap_or_default(),
        environment = ?finalized.environment(),
        "Opening checkout popup"
    );

    handlers.load_start();

    let elements = dom::build_popup(&document, finalized.show_loading_state.unwrap_or(true))?;

    let shared = Rc::new(SessionShared {
        handlers,
        allowed_origin: options.allowed_origin,
        state: RefCell::new(SessionState {
            lifecycle: Lifecycle::new(finalized.redirect_url.clone()),
            iframe: Some(elements.iframe.clone()),
            preloader: elements.preloader,
            on_load: None,
            on_message: None,
        }),
        payment,
    });

    wire_frame_load(&shared, &window, &elements.iframe);

    document
        .body()
        .ok_or_else(|| SdkError::Dom("document has no body".into()))?
        .append_child(&elements.wrapper)
        .map_err(|error| dom::js_error("attach overlay", &error))?;

    spawn_session_init(&shared, endpoints);

    Ok(PopupSession { shared })
}

/// Point the frame at the initialized checkout page, or at the bare
/// host when initialization fails. Runs on the event loop once the
/// request settles; a session terminated in the meantime is left alone.
fn spawn_session_init(shared: &Rc<SessionShared>, endpoints: Endpoints) {
    let shared = Rc::clone(shared);
    wasm_bindgen_futures::spawn_local(async move {
        let target = match api::init_transaction(&endpoints, &shared.payment).await {
            Ok(reference) => endpoints.checkout_url(&reference),
            Err(error) => {
                tracing::warn!(error = %error, "Session initialization failed, degrading to bare checkout");
                endpoints.fallback_url().to_string()
            }
        };

        let state = shared.state.borrow();
        if !state.lifecycle.is_terminated() {
            if let Some(iframe) = &state.iframe {
                iframe.set_src(&target);
            }
        }
    });
}

/// On frame load: notify the caller, hand the payment payload to the
/// hosted app and start listening for its lifecycle messages.
fn wire_frame_load(shared: &Rc<SessionShared>, window: &Window, iframe: &HtmlIFrameElement) {
    let on_load = {
        let shared = Rc::clone(shared);
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            {
                let mut state = shared.state.borrow_mut();
                state.lifecycle.frame_loaded();
                if let Some(preloader) = state.preloader.take() {
                    preloader.set_class_name("hide");
                }
            }

            shared.handlers.load_complete();
            post_init_message(&shared);
            attach_message_listener(&shared, &window);
        })
    };

    iframe.set_onload(Some(on_load.as_ref().unchecked_ref()));
    shared.state.borrow_mut().on_load = Some(on_load);
}

fn post_init_message(shared: &Rc<SessionShared>) {
    let content = shared
        .state
        .borrow()
        .iframe
        .as_ref()
        .and_then(HtmlIFrameElement::content_window);
    let Some(content) = content else { return };

    match to_js(&OutboundMessage::init_popup(&shared.payment)) {
        // The hosted app validates messages by shape, not sender origin
        Ok(message) => {
            if let Err(error) = content.post_message(&message, "*") {
                tracing::warn!(?error, "Posting init payload into checkout frame failed");
            }
        }
        Err(error) => tracing::warn!(%error, "Init payload not serializable"),
    }
}

fn attach_message_listener(shared: &Rc<SessionShared>, window: &Window) {
    if shared.state.borrow().on_message.is_some() {
        return;
    }

    let on_message = {
        let shared = Rc::clone(shared);
        let window = window.clone();
        Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            handle_message(&shared, &window, &event);
        })
    };

    match window.add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref()) {
        Ok(()) => shared.state.borrow_mut().on_message = Some(on_message),
        Err(error) => tracing::warn!(?error, "Registering message listener failed"),
    }
}

fn handle_message(shared: &Rc<SessionShared>, window: &Window, event: &MessageEvent) {
    if let Some(allowed) = &shared.allowed_origin {
        if event.origin() != *allowed {
            tracing::debug!(origin = %event.origin(), "Dropping message from disallowed origin");
            return;
        }
    }

    // Unrelated cross-document traffic rarely matches the envelope
    // shape; anything that doesn't is ignored without a callback.
    let Ok(message) = serde_wasm_bindgen::from_value::<InboundMessage>(event.data()) else {
        return;
    };

    let disposition = shared.state.borrow_mut().lifecycle.dispatch(&message);

    // Overlay removal precedes every callback, so a callback that
    // starts a new session never collides with stale markup.
    match disposition {
        Disposition::Ignored => {}
        Disposition::Cancelled(response) => {
            teardown(shared, window);
            shared.handlers.close(&response);
        }
        Disposition::Completed(response) => {
            teardown(shared, window);
            shared.handlers.complete(&response);
            shared.handlers.close(&response);
        }
    }
}

/// Remove the overlay and deregister the message listener. Dropping
/// the stored closures here breaks the session's reference cycle.
fn teardown(shared: &Rc<SessionShared>, window: &Window) {
    if let Some(document) = window.document() {
        dom::remove_popup(&document);
    }

    let (on_message, on_load) = {
        let mut state = shared.state.borrow_mut();
        state.iframe = None;
        state.preloader = None;
        (state.on_message.take(), state.on_load.take())
    };

    if let Some(closure) = &on_message {
        let _ = window
            .remove_event_listener_with_callback("message", closure.as_ref().unchecked_ref());
    }
    drop(on_message);
    drop(on_load);
}
