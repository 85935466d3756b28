//! Page context: the controller and the signals it drives.

use std::rc::Rc;

use api::HttpBackend;
use dioxus::prelude::*;
use portal::{ComplaintPanel, PageController, PageView, PortalConfig, Section};

/// The controller as the web app instantiates it.
pub type Page = PageController<HttpBackend, SignalView>;

/// Everything the controller can change on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub section: Section,
    pub welcome: String,
    /// Pending notification, cleared when the student dismisses it.
    pub notice: Option<String>,
    pub complaint: ComplaintPanel,
}

/// [`PageView`] that writes into the shared [`PageState`] signal.
#[derive(Clone, Copy)]
pub struct SignalView {
    state: Signal<PageState>,
}

impl SignalView {
    pub fn new(state: Signal<PageState>) -> Self {
        Self { state }
    }
}

impl PageView for SignalView {
    fn set_welcome(&self, text: &str) {
        let mut state = self.state;
        state.write().welcome = text.to_string();
    }

    fn show_section(&self, section: Section) {
        let mut state = self.state;
        state.write().section = section;
    }

    fn notify(&self, message: &str) {
        let mut state = self.state;
        state.write().notice = Some(message.to_string());
    }

    fn set_complaint_panel(&self, panel: &ComplaintPanel) {
        let mut state = self.state;
        state.write().complaint = panel.clone();
    }
}

/// Get the page controller.
pub fn use_page() -> Rc<Page> {
    use_context::<Rc<Page>>()
}

/// Get the page state.
/// Returns a signal that updates whenever the controller changes the view.
pub fn use_page_state() -> Signal<PageState> {
    use_context::<Signal<PageState>>()
}

/// Provider component that owns the controller for the lifetime of the page.
/// Wrap the login section and dashboard with this component.
#[component]
pub fn PageProvider(config: PortalConfig, children: Element) -> Element {
    let state = use_signal(PageState::default);

    let page = use_hook(move || {
        let backend = HttpBackend::new(config.endpoints.clone());
        Rc::new(PageController::new(backend, SignalView::new(state), config))
    });

    use_context_provider(|| page);
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}
