//! Global Application State
//!
//! Reactive state management using Leptos signals. The store itself is not
//! reactive; writes go through [`GlobalState::refresh`] so every view that
//! called [`GlobalState::track`] recomputes from the store.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;
use marketing_bot::config::GeneratorConfig;
use marketing_bot::generator::{GeneratedContent, Generator};
use marketing_bot::navigation::{Navigator, View};
use marketing_bot::store::{Platform, Status, Store, StoreResult};
use marketing_bot::views::GenerateRequest;

use crate::storage::BrowserBackend;

/// How long a success toast stays up
pub const SUCCESS_TOAST_MS: u32 = 3000;
/// How long an error toast stays up
pub const ERROR_TOAST_MS: u32 = 5000;

/// Kind of notification, each with its own lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn duration_ms(self) -> u32 {
        match self {
            ToastKind::Success => SUCCESS_TOAST_MS,
            ToastKind::Error => ERROR_TOAST_MS,
        }
    }
}

/// Generated copy waiting for "Send to queue"
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedDraft {
    pub content: GeneratedContent,
    pub platform: Platform,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Calendar and content persisted in the browser
    pub store: Store<BrowserBackend>,
    /// Active view and generation tickets
    pub navigator: RwSignal<Navigator>,
    /// Fired after every store write
    pub changed: Trigger,
    /// Values of the generate form
    pub generate_form: RwSignal<GenerateRequest>,
    /// Latest generation result
    pub generated: RwSignal<Option<GeneratedDraft>>,
    /// Simulated generation time
    pub generate_delay_ms: u32,
    pending_timer: Rc<RefCell<Option<Timeout>>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    success_timer: Rc<RefCell<Option<Timeout>>>,
    error_timer: Rc<RefCell<Option<Timeout>>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState::new(
        Store::new(BrowserBackend::open()),
        timer_delay(GeneratorConfig::default().delay_ms),
    );

    if let Some(true) = state.report(state.store.init()) {
        web_sys::console::log_1(&"Seeded default marketing data".into());
    }

    provide_context(state);
}

fn timer_delay(ms: u64) -> u32 {
    u32::try_from(ms).unwrap_or(u32::MAX)
}

impl GlobalState {
    pub fn new(store: Store<BrowserBackend>, generate_delay_ms: u32) -> Self {
        Self {
            store,
            navigator: create_rw_signal(Navigator::new()),
            changed: create_trigger(),
            generate_form: create_rw_signal(GenerateRequest::default()),
            generated: create_rw_signal(None),
            generate_delay_ms,
            pending_timer: Rc::new(RefCell::new(None)),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            success_timer: Rc::new(RefCell::new(None)),
            error_timer: Rc::new(RefCell::new(None)),
        }
    }

    /// Subscribe the current reactive scope to store writes
    pub fn track(&self) {
        self.changed.track();
    }

    /// Announce a store write
    pub fn refresh(&self) {
        self.changed.notify();
    }

    pub fn active_view(&self) -> Option<View> {
        self.navigator.with(|n| n.active())
    }

    /// Switch views; leaving generate abandons a pending result
    ///
    /// A refused move changes nothing.
    pub fn navigate(&self, view: View) -> bool {
        let moved = self.navigator.try_update(|n| n.go(view)).unwrap_or(false);
        if !moved {
            return false;
        }
        self.drop_timer();
        if view == View::Generate {
            self.generated.set(None);
        }
        true
    }

    /// Show `id` in the detail view
    pub fn open_detail(&self, id: &str) {
        self.navigator.update(|n| {
            n.open_detail(id);
        });
        self.drop_timer();
    }

    /// Prefill the generate form and switch to it
    pub fn generate_from(&self, request: GenerateRequest) {
        self.generate_form.set(request);
        self.navigate(View::Generate);
    }

    /// Start the delayed generation for the current form values
    ///
    /// The result is only shown if the request is still current when the
    /// delay elapses.
    pub fn start_generation(&self) {
        let request = self.generate_form.get_untracked();
        let Some(ticket) = self.navigator.try_update(|n| n.begin_generation()) else {
            return;
        };
        self.generated.set(None);

        let navigator = self.navigator;
        let generated = self.generated;
        let timer = Timeout::new(self.generate_delay_ms, move || {
            if navigator.try_update(|n| n.complete_generation(ticket)) != Some(true) {
                return;
            }
            let content = Generator::new().generate(
                request.content_type,
                &request.topic,
                &request.principal,
            );
            generated.set(Some(GeneratedDraft {
                content,
                platform: request.platform,
            }));
        });

        // Replacing the handle cancels an older timer
        *self.pending_timer.borrow_mut() = Some(timer);
    }

    /// Back to the generate form
    pub fn discard_generated(&self) {
        self.generated.set(None);
    }

    /// Save the generated copy as a queued item and open the review queue
    pub fn send_to_queue(&self) {
        let Some(draft) = self.generated.get_untracked() else {
            return;
        };
        let item = draft.content.into_new_item(draft.platform, Status::Queued);

        if self.report(self.store.add_content(item)).is_some() {
            self.refresh();
            self.generated.set(None);
            self.show_success("Content sent to review queue");
            self.navigate(View::Review);
        }
    }

    /// Restore the default data and go to the dashboard
    pub fn reset(&self) {
        if self.report(self.store.reset()).is_some() {
            self.refresh();
            self.show_success("Data reset to defaults");
            self.navigate(View::Dashboard);
        }
    }

    /// Unwrap a store result, surfacing failures as an error toast
    pub fn report<T>(&self, result: StoreResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                web_sys::console::error_1(&format!("Storage error: {}", e).into());
                self.show_error(&e.to_string());
                None
            }
        }
    }

    /// Stop the generate timer; its ticket goes with it
    fn drop_timer(&self) {
        self.pending_timer.borrow_mut().take();
        self.navigator.update(|n| n.cancel_generation());
    }

    pub fn toast(&self, kind: ToastKind) -> RwSignal<Option<String>> {
        match kind {
            ToastKind::Success => self.success,
            ToastKind::Error => self.error,
        }
    }

    fn toast_timer(&self, kind: ToastKind) -> &Rc<RefCell<Option<Timeout>>> {
        match kind {
            ToastKind::Success => &self.success_timer,
            ToastKind::Error => &self.error_timer,
        }
    }

    /// Show a message that clears itself after the kind's duration
    pub fn show_toast(&self, kind: ToastKind, message: &str) {
        let signal = self.toast(kind);
        signal.set(Some(message.to_string()));

        let timer = Timeout::new(kind.duration_ms(), move || signal.set(None));
        // An older timer must not clear the newer message
        *self.toast_timer(kind).borrow_mut() = Some(timer);
    }

    /// Hide a message before its timer fires
    pub fn dismiss_toast(&self, kind: ToastKind) {
        self.toast_timer(kind).borrow_mut().take();
        self.toast(kind).set(None);
    }

    pub fn show_success(&self, message: &str) {
        self.show_toast(ToastKind::Success, message);
    }

    pub fn show_error(&self, message: &str) {
        self.show_toast(ToastKind::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use marketing_bot::store::MemoryBackend;

    fn session_state() -> GlobalState {
        GlobalState::new(Store::new(BrowserBackend::Session(MemoryBackend::new())), 0)
    }

    #[test]
    fn test_timer_delay() {
        assert_eq!(timer_delay(2500), 2500);
        assert_eq!(timer_delay(u64::MAX), u32::MAX);
    }

    #[test]
    fn test_toast_durations() {
        assert_eq!(ToastKind::Success.duration_ms(), 3000);
        assert_eq!(ToastKind::Error.duration_ms(), 5000);
    }

    #[test]
    fn test_refused_navigation_keeps_generation() {
        let runtime = create_runtime();
        let state = session_state();

        assert!(state.navigate(View::Generate));
        state.navigator.update(|n| {
            n.begin_generation();
        });

        // Detail is only reachable from review
        assert!(!state.navigate(View::Detail));
        assert_eq!(state.active_view(), Some(View::Generate));
        assert!(state.navigator.with(|n| n.is_generating()));

        assert!(state.navigate(View::Review));
        assert!(!state.navigator.with(|n| n.is_generating()));

        runtime.dispose();
    }

    #[test]
    fn test_dismiss_toast_clears_message() {
        let runtime = create_runtime();
        let state = session_state();

        state.error.set(Some("Storage error".to_string()));
        state.dismiss_toast(ToastKind::Error);
        assert_eq!(state.toast(ToastKind::Error).get_untracked(), None);

        runtime.dispose();
    }
}
