//! Generate Page
//!
//! Form, simulated processing delay, then the generated copy with its
//! compliance result.

use leptos::*;
use marketing_bot::compliance;
use marketing_bot::store::{ContentType, Platform};

use crate::components::{ComplianceDetail, Loading};
use crate::state::global::GlobalState;

/// Generate page component
#[component]
pub fn Generate() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let generating = create_memo({
        let navigator = state.navigator;
        move |_| navigator.with(|n| n.is_generating())
    });
    let has_result = create_memo({
        let generated = state.generated;
        move |_| generated.with(Option::is_some)
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Generate Content"</h1>
                <p class="text-gray-400 mt-1">"Draft copy from the template library"</p>
            </div>

            {move || {
                if generating.get() {
                    view! { <Loading message="Generating content..." /> }.into_view()
                } else if has_result.get() {
                    view! { <GeneratedResult /> }.into_view()
                } else {
                    view! { <GenerateForm /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn GenerateForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = state.generate_form;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.start_generation();
    };

    let input_class = "w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600 \
                       focus:border-primary-500 focus:outline-none";

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <form on:submit=on_submit class="space-y-4">
                <div class="grid md:grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Content Type"</label>
                        <select
                            class=input_class
                            prop:value=move || form.with(|f| f.content_type.as_str())
                            on:change=move |ev| {
                                if let Ok(content_type) = event_target_value(&ev).parse::<ContentType>() {
                                    form.update(|f| f.content_type = content_type);
                                }
                            }
                        >
                            {ContentType::all()
                                .iter()
                                .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Platform"</label>
                        <select
                            class=input_class
                            prop:value=move || form.with(|f| f.platform.as_str())
                            on:change=move |ev| {
                                if let Ok(platform) = event_target_value(&ev).parse::<Platform>() {
                                    form.update(|f| f.platform = platform);
                                }
                            }
                        >
                            {Platform::all()
                                .iter()
                                .map(|p| view! { <option value=p.as_str()>{p.as_str()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Topic"</label>
                        <input
                            type="text"
                            class=input_class
                            placeholder="e.g. Houston Q4 2025 Market Update"
                            prop:value=move || form.with(|f| f.topic.clone())
                            on:input=move |ev| form.update(|f| f.topic = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Principal"</label>
                        <input
                            type="text"
                            class=input_class
                            prop:value=move || form.with(|f| f.principal.clone())
                            on:input=move |ev| form.update(|f| f.principal = event_target_value(&ev))
                        />
                    </div>
                </div>

                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3 font-semibold transition-colors"
                >
                    "Generate"
                </button>
            </form>
        </section>
    }
}

#[component]
fn GeneratedResult() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let Some(draft) = state.generated.get_untracked() else {
        return view! {}.into_view();
    };
    let content = draft.content;
    let report = compliance::check_content(&content.body, content.content_type);

    let meta = format!(
        "{} \u{b7} {} \u{b7} {}",
        content.content_type.label(),
        draft.platform,
        content.principal
    );

    let on_queue = {
        let state = state.clone();
        move |_| state.send_to_queue()
    };
    let on_regenerate = move |_| state.discard_generated();

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-6">
            <div>
                <h2 class="text-2xl font-semibold">{content.title}</h2>
                <p class="text-sm text-gray-400 mt-1">{meta}</p>
            </div>

            <pre class="whitespace-pre-wrap font-sans text-gray-200 bg-gray-900 rounded-lg p-4">
                {content.body.clone()}
            </pre>

            <ComplianceDetail report=report />

            <div class="flex space-x-2">
                <button
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-semibold"
                    on:click=on_queue
                >
                    "Send to Queue"
                </button>
                <button
                    class="px-6 py-3 rounded-lg border border-gray-500 hover:bg-gray-700"
                    on:click=on_regenerate
                >
                    "Regenerate"
                </button>
            </div>
        </section>
    }
    .into_view()
}
