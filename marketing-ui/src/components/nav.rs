//! Navigation Component
//!
//! Header navigation bar with logo and view tabs.

use leptos::*;
use marketing_bot::navigation::View;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let on_logo = move |_| {
        state.navigate(View::Dashboard);
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <button on:click=on_logo class="flex items-center space-x-3">
                        <span class="text-xl font-bold text-white">"RC Marketing Bot"</span>
                    </button>

                    // View tabs
                    <div class="flex items-center space-x-1">
                        {View::tabs()
                            .iter()
                            .map(|&view| view! { <NavTab view=view /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual view tab; the review tab stays lit while detail is shown
#[component]
fn NavTab(view: View) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let highlighted = create_memo({
        let navigator = state.navigator;
        move |_| navigator.with(|n| n.highlighted_tab()) == Some(view)
    });
    let label = if view == View::Review { "Review" } else { view.label() };

    view! {
        <button
            on:click=move |_| {
                state.navigate(view);
            }
            class=move || {
                let base = "px-4 py-2 rounded-lg transition-colors";
                if highlighted.get() {
                    format!("{} bg-gray-700 text-white", base)
                } else {
                    format!("{} text-gray-300 hover:text-white hover:bg-gray-700", base)
                }
            }
        >
            {label}
        </button>
    }
}
