//! Toast Notifications
//!
//! One slot per [`ToastKind`]; a new message replaces the old one and
//! restarts its timer.

use leptos::*;

use crate::state::global::{GlobalState, ToastKind};

fn style(kind: ToastKind) -> (&'static str, &'static str) {
    match kind {
        ToastKind::Success => ("✓", "bg-green-600"),
        ToastKind::Error => ("✕", "bg-red-600"),
    }
}

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            <ToastSlot kind=ToastKind::Success />
            <ToastSlot kind=ToastKind::Error />
        </div>
    }
}

#[component]
fn ToastSlot(kind: ToastKind) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let message = state.toast(kind);
    let (icon, bg_class) = style(kind);

    move || {
        let state = state.clone();
        message.get().map(|msg| view! {
            <div class=format!(
                "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg animate-slide-in",
                bg_class
            )>
                <span class="text-lg">{icon}</span>
                <span class="text-sm font-medium">{msg}</span>
                <button
                    class="ml-2 text-white/70 hover:text-white"
                    title="Dismiss"
                    on:click=move |_| state.dismiss_toast(kind)
                >
                    "×"
                </button>
            </div>
        })
    }
}
