//! Dashboard Page
//!
//! Review stats, recent activity and the next few calendar entries.

use leptos::*;
use marketing_bot::views::{self, TITLE_CHARS, TOPIC_CHARS};

use crate::components::StatusBadge;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let dashboard = create_memo(move |_| {
        state.track();
        let calendar = state.report(state.store.calendar()).unwrap_or_default();
        let content = state.report(state.store.content()).unwrap_or_default();
        views::dashboard(&calendar, &content, state.store.today())
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Content pipeline at a glance"</p>
            </div>

            // Stat cards
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard label="Pending Review" value=Signal::derive(move || dashboard.with(|d| d.stats.pending)) />
                <StatCard label="Published" value=Signal::derive(move || dashboard.with(|d| d.stats.published)) />
                <StatCard label="Upcoming" value=Signal::derive(move || dashboard.with(|d| d.stats.upcoming)) />
                <StatCard label="Total Content" value=Signal::derive(move || dashboard.with(|d| d.stats.total)) />
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                // Recent activity
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Recent Activity"</h2>
                    <ul class="space-y-3">
                        {move || {
                            let recent = dashboard.with(|d| d.recent.clone());
                            if recent.is_empty() {
                                return view! { <li class="text-gray-400">"No content yet."</li> }.into_view();
                            }
                            recent
                                .into_iter()
                                .map(|item| view! {
                                    <li class="flex items-center justify-between">
                                        <span>{views::truncate(&item.title, TITLE_CHARS)}</span>
                                        <StatusBadge status=item.status />
                                    </li>
                                })
                                .collect_view()
                        }}
                    </ul>
                </section>

                // Upcoming calendar
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Upcoming Calendar"</h2>
                    <table class="w-full text-sm">
                        <thead class="text-gray-400 text-left">
                            <tr>
                                <th class="pb-2">"Date"</th>
                                <th class="pb-2">"Topic"</th>
                                <th class="pb-2">"Type"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let upcoming = dashboard.with(|d| d.upcoming.clone());
                                if upcoming.is_empty() {
                                    return view! {
                                        <tr><td colspan="3" class="py-2 text-gray-400">"No upcoming entries."</td></tr>
                                    }
                                    .into_view();
                                }
                                upcoming
                                    .into_iter()
                                    .map(|entry| view! {
                                        <tr class="border-t border-gray-700">
                                            <td class="py-2">{views::format_date(Some(entry.date))}</td>
                                            <td class="py-2">{views::clip(&entry.topic, TOPIC_CHARS).to_string()}</td>
                                            <td class="py-2">{entry.content_type.label()}</td>
                                        </tr>
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </section>
            </div>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <div class="text-3xl font-bold">{move || value.get()}</div>
            <div class="text-sm text-gray-400 mt-1">{label}</div>
        </div>
    }
}
