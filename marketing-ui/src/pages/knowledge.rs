//! Knowledge Page
//!
//! Firm facts, market data, data sources and brand rules.

use leptos::*;
use marketing_bot::knowledge::{DataSource, FactCategory, KnowledgeBase, MarketSnapshot, RuleGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Facts,
    Market,
    Sources,
    Rules,
}

impl Section {
    const ALL: [Section; 4] = [Section::Facts, Section::Market, Section::Sources, Section::Rules];

    fn label(self) -> &'static str {
        match self {
            Section::Facts => "Firm Facts",
            Section::Market => "Market Data",
            Section::Sources => "Data Sources",
            Section::Rules => "Brand Rules",
        }
    }
}

/// Knowledge base page component
#[component]
pub fn Knowledge() -> impl IntoView {
    let knowledge = match KnowledgeBase::load() {
        Ok(kb) => kb,
        Err(e) => {
            web_sys::console::error_1(&format!("Knowledge base failed to load: {}", e).into());
            return view! {
                <p class="text-red-400">"Knowledge base unavailable."</p>
            }
            .into_view();
        }
    };

    let section = create_rw_signal(Section::Facts);
    let summary = format!(
        "{} facts, {} rules, {} sources",
        knowledge.fact_count(),
        knowledge.rule_count(),
        knowledge.data_sources.len()
    );

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Knowledge Base"</h1>
                <p class="text-gray-400 mt-1">{summary}</p>
            </div>

            <div class="flex space-x-1 border-b border-gray-700">
                {Section::ALL
                    .iter()
                    .map(|&s| {
                        let class = move || {
                            if section.get() == s {
                                "px-4 py-2 border-b-2 border-primary-500 text-white"
                            } else {
                                "px-4 py-2 text-gray-400 hover:text-white"
                            }
                        };
                        view! {
                            <button class=class on:click=move |_| section.set(s)>
                                {s.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || match section.get() {
                Section::Facts => view! { <Facts categories=knowledge.firm_facts.clone() /> }.into_view(),
                Section::Market => view! { <Market snapshots=knowledge.market_data.clone() /> }.into_view(),
                Section::Sources => view! { <Sources sources=knowledge.data_sources.clone() /> }.into_view(),
                Section::Rules => view! { <Rules groups=knowledge.brand_rules.clone() /> }.into_view(),
            }}
        </div>
    }
    .into_view()
}

#[component]
fn Facts(categories: Vec<FactCategory>) -> impl IntoView {
    categories
        .into_iter()
        .map(|category| view! {
            <section class="bg-gray-800 rounded-xl p-6 mb-4">
                <h2 class="text-lg font-semibold mb-3">{category.label}</h2>
                <table class="w-full text-sm">
                    <tbody>
                        {category
                            .facts
                            .into_iter()
                            .map(|fact| view! {
                                <tr class="border-t border-gray-700">
                                    <td class="py-2 text-gray-400">{fact.label}</td>
                                    <td class="py-2 font-medium">{fact.value}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>
        })
        .collect_view()
}

#[component]
fn Market(snapshots: Vec<MarketSnapshot>) -> impl IntoView {
    snapshots
        .into_iter()
        .map(|snapshot| {
            let title = snapshot.title();
            view! {
                <section class="bg-gray-800 rounded-xl p-6 mb-4">
                    <h2 class="text-lg font-semibold mb-3">{title}</h2>
                    <table class="w-full text-sm">
                        <thead class="text-gray-400 text-left">
                            <tr>
                                <th class="pb-2">"Metric"</th>
                                <th class="pb-2">"Value"</th>
                                <th class="pb-2">"Source"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {snapshot
                                .points
                                .into_iter()
                                .map(|point| view! {
                                    <tr class="border-t border-gray-700">
                                        <td class="py-2">{point.metric}</td>
                                        <td class="py-2 font-medium">{point.value}</td>
                                        <td class="py-2 text-gray-400">{point.source}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </section>
            }
        })
        .collect_view()
}

#[component]
fn Sources(sources: Vec<DataSource>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6 overflow-x-auto">
            <table class="w-full text-sm">
                <thead class="text-gray-400 text-left">
                    <tr>
                        <th class="pb-2">"Source"</th>
                        <th class="pb-2">"Frequency"</th>
                        <th class="pb-2">"Notes"</th>
                    </tr>
                </thead>
                <tbody>
                    {sources
                        .into_iter()
                        .map(|source| {
                            let name = match source.url {
                                Some(url) => view! {
                                    <a href=url target="_blank" class="text-primary-400 hover:underline">
                                        {source.name}
                                    </a>
                                }
                                .into_view(),
                                None => source.name.into_view(),
                            };
                            view! {
                                <tr class="border-t border-gray-700">
                                    <td class="py-2">{name}</td>
                                    <td class="py-2">{source.frequency}</td>
                                    <td class="py-2 text-gray-400">{source.notes}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn Rules(groups: Vec<RuleGroup>) -> impl IntoView {
    groups
        .into_iter()
        .map(|group| {
            let with_examples = group.has_examples();
            view! {
                <section class="bg-gray-800 rounded-xl p-6 mb-4">
                    <h2 class="text-lg font-semibold mb-3">{group.label}</h2>
                    <ul class="space-y-3 text-sm">
                        {group
                            .rules
                            .into_iter()
                            .map(|rule| {
                                let example = rule
                                    .example
                                    .filter(|_| with_examples)
                                    .map(|e| view! { <p class="text-gray-400 italic mt-1">{e}</p> });
                                view! {
                                    <li>
                                        <p>{rule.rule}</p>
                                        {example}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            }
        })
        .collect_view()
}
