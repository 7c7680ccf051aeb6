//! Content Detail Page
//!
//! One content item with its metadata, compliance result and the review
//! actions its status allows.

use leptos::*;
use marketing_bot::compliance;
use marketing_bot::navigation::View;
use marketing_bot::store::{ContentAction, ContentItem, StoreResult};
use marketing_bot::views;

use crate::components::{ComplianceDetail, Modal};
use crate::state::global::GlobalState;

/// Content detail page component
#[component]
pub fn ContentDetail() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let item = create_memo({
        let state = state.clone();
        move |_| {
            state.track();
            let id = state.navigator.with(|n| n.detail_id().map(str::to_string))?;
            state.report(state.store.content_by_id(&id)).flatten()
        }
    });

    let editing = create_rw_signal(false);
    let back = move |_| {
        state.navigate(View::Review);
    };

    view! {
        <div class="space-y-6">
            <button on:click=back class="text-gray-400 hover:text-white">
                "← Back to Review"
            </button>

            {move || match item.get() {
                Some(item) => view! { <DetailBody item=item editing=editing /> }.into_view(),
                None => view! {
                    <p class="text-gray-400">"This content item no longer exists."</p>
                }
                .into_view(),
            }}
        </div>
    }
}

#[component]
fn DetailBody(item: ContentItem, editing: RwSignal<bool>) -> impl IntoView {
    let fields = views::detail_fields(&item);
    let actions = views::detail_actions(&item);
    let id = item.id.clone();
    let edit_item = item.clone();
    let report = compliance::check_content(&item.body, item.content_type);

    view! {
        <div class="grid md:grid-cols-3 gap-8">
            <section class="md:col-span-2 bg-gray-800 rounded-xl p-6 space-y-4">
                <h1 class="text-2xl font-bold">{item.title.clone()}</h1>
                <pre class="whitespace-pre-wrap font-sans text-gray-200">{item.body.clone()}</pre>
            </section>

            <aside class="space-y-6">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-lg font-semibold mb-3">"Details"</h2>
                    <ul class="space-y-2 text-sm">
                        {fields
                            .into_iter()
                            .map(|(label, value)| view! {
                                <li class="flex justify-between">
                                    <span class="text-gray-400">{label}</span>
                                    <span>{value}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-lg font-semibold mb-3">"Compliance"</h2>
                    <ComplianceDetail report=report />
                </section>

                <section class="bg-gray-800 rounded-xl p-6 flex flex-col space-y-2">
                    {actions
                        .into_iter()
                        .map(|(action, label)| view! {
                            <ActionButton id=id.clone() action=action label=label editing=editing />
                        })
                        .collect_view()}
                </section>
            </aside>
        </div>

        {move || editing.get().then(|| view! { <EditContent item=edit_item.clone() editing=editing /> })}
    }
}

fn button_class(action: ContentAction) -> &'static str {
    match action {
        ContentAction::Approve | ContentAction::Publish => {
            "px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 font-medium"
        }
        ContentAction::Reject | ContentAction::Delete => {
            "px-4 py-2 rounded-lg bg-red-700 hover:bg-red-600 font-medium"
        }
        ContentAction::Edit => "px-4 py-2 rounded-lg border border-gray-500 hover:bg-gray-700",
    }
}

#[component]
fn ActionButton(
    id: String,
    action: ContentAction,
    label: &'static str,
    editing: RwSignal<bool>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_click = move |_| {
        let result: StoreResult<bool> = match action {
            ContentAction::Edit => {
                editing.set(true);
                return;
            }
            ContentAction::Approve => state.store.approve_content(&id).map(|i| i.is_some()),
            ContentAction::Reject => state.store.reject_content(&id).map(|i| i.is_some()),
            ContentAction::Publish => state.store.publish_content(&id).map(|i| i.is_some()),
            ContentAction::Delete => state.store.delete_content(&id),
        };

        if let Some(true) = state.report(result) {
            state.refresh();
            state.show_success(action.done_message());
            if action == ContentAction::Delete {
                state.navigate(View::Review);
            }
        }
    };

    view! {
        <button class=button_class(action) on:click=on_click>
            {label}
        </button>
    }
}

/// Modal editing title and body
#[component]
fn EditContent(item: ContentItem, editing: RwSignal<bool>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let title = create_rw_signal(item.title.clone());
    let body = create_rw_signal(item.body.clone());
    let id = item.id;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let result = state
            .store
            .edit_content(&id, title.get_untracked(), body.get_untracked());

        if state.report(result).is_some() {
            state.refresh();
            editing.set(false);
            state.show_success(ContentAction::Edit.done_message());
        }
    };

    let close = Callback::new(move |_| editing.set(false));
    let input_class = "w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600 \
                       focus:border-primary-500 focus:outline-none";

    view! {
        <Modal title="Edit Content" on_close=close>
            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Title"</label>
                    <input
                        type="text"
                        required
                        class=input_class
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Body"</label>
                    <textarea
                        rows="14"
                        class=input_class
                        prop:value=move || body.get()
                        on:input=move |ev| body.set(event_target_value(&ev))
                    />
                </div>
                <div class="flex justify-end space-x-2">
                    <button
                        type="button"
                        class="px-4 py-2 rounded-lg border border-gray-500 hover:bg-gray-700"
                        on:click=move |_| close.call(())
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700">
                        "Save"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
