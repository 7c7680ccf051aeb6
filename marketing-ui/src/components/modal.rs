//! Modal Component

use leptos::*;

/// Dialog over a dimmed backdrop; clicking the backdrop closes it
#[component]
pub fn Modal(
    #[prop(into)]
    title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-40 bg-black/60 flex items-center justify-center p-4"
            on:click=move |_| on_close.call(())
        >
            <div
                class="bg-gray-800 rounded-xl p-6 w-full max-w-2xl max-h-[90vh] overflow-y-auto"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">{title}</h2>
                    <button
                        class="text-gray-400 hover:text-white text-2xl leading-none"
                        on:click=move |_| on_close.call(())
                    >
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
