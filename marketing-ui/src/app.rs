//! App Root Component
//!
//! Main application component with view switching and global providers.

use leptos::*;
use marketing_bot::navigation::View;

use crate::components::{Nav, Toast};
use crate::pages::{Calendar, ContentDetail, Dashboard, Generate, Knowledge, Review};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Only re-render when the view itself changes, not on ticket updates
    let active = create_memo(move |_| state.navigator.with(|n| n.active()));

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Navigation header
            <Nav />

            // Main content area
            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                {move || match active.get() {
                    Some(View::Dashboard) => view! { <Dashboard /> }.into_view(),
                    Some(View::Calendar) => view! { <Calendar /> }.into_view(),
                    Some(View::Generate) => view! { <Generate /> }.into_view(),
                    Some(View::Review) => view! { <Review /> }.into_view(),
                    Some(View::Detail) => view! { <ContentDetail /> }.into_view(),
                    Some(View::Knowledge) => view! { <Knowledge /> }.into_view(),
                    None => view! {}.into_view(),
                }}
            </main>

            // Footer with storage status
            <Footer />

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Footer with storage status and the reset button
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let persistent = state.store.backend().is_persistent();

    let on_reset = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Reset all data to defaults? This cannot be undone.")
                    .ok()
            })
            .unwrap_or(false);
        if confirmed {
            state.reset();
        }
    };

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="flex items-center space-x-2">
                    {if persistent {
                        view! {
                            <span class="flex items-center space-x-1 text-green-400">
                                <span class="w-2 h-2 bg-green-400 rounded-full" />
                                <span>"Saved in this browser"</span>
                            </span>
                        }
                    } else {
                        view! {
                            <span class="flex items-center space-x-1 text-yellow-400">
                                <span class="w-2 h-2 bg-yellow-400 rounded-full" />
                                <span>"Storage unavailable, changes last for this session"</span>
                            </span>
                        }
                    }}
                </div>

                <button
                    on:click=on_reset
                    class="px-3 py-1 rounded-lg text-gray-400 hover:text-white hover:bg-gray-700 transition-colors"
                >
                    "Reset Data"
                </button>
            </div>
        </footer>
    }
}
