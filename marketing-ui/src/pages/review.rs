//! Review Page
//!
//! Every content item, pending first. Clicking a row opens the detail view.

use leptos::*;
use marketing_bot::views::{self, ReviewRow, TITLE_CHARS};

use crate::components::{ComplianceBadge, StatusBadge};
use crate::state::global::GlobalState;

/// Review queue page component
#[component]
pub fn Review() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let rows = create_memo(move |_| {
        state.track();
        let content = state.report(state.store.content()).unwrap_or_default();
        views::review_queue(&content)
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Review Queue"</h1>
                <p class="text-gray-400 mt-1">"Approve, reject and publish generated content"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 overflow-x-auto">
                <table class="w-full text-sm">
                    <thead class="text-gray-400 text-left">
                        <tr>
                            <th class="pb-2">"Title"</th>
                            <th class="pb-2">"Type"</th>
                            <th class="pb-2">"Platform"</th>
                            <th class="pb-2">"Status"</th>
                            <th class="pb-2">"Compliance"</th>
                            <th class="pb-2">"Principal"</th>
                            <th class="pb-2">"Created"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = rows.get();
                            if rows.is_empty() {
                                return view! {
                                    <tr><td colspan="7" class="py-2 text-gray-400">"No content items."</td></tr>
                                }
                                .into_view();
                            }
                            rows.into_iter()
                                .map(|row| view! { <QueueRow row=row /> })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>
        </div>
    }
}

#[component]
fn QueueRow(row: ReviewRow) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let ReviewRow { item, compliance } = row;

    let id = item.id.clone();

    view! {
        <tr
            class="border-t border-gray-700 cursor-pointer hover:bg-gray-700"
            on:click=move |_| state.open_detail(&id)
        >
            <td class="py-2">{views::truncate(&item.title, TITLE_CHARS)}</td>
            <td class="py-2">{item.content_type.label()}</td>
            <td class="py-2">{item.platform.as_str()}</td>
            <td class="py-2"><StatusBadge status=item.status /></td>
            <td class="py-2"><ComplianceBadge report=compliance /></td>
            <td class="py-2">{item.principal}</td>
            <td class="py-2">{views::format_date(Some(item.created))}</td>
        </tr>
    }
}
