//! Calendar Page
//!
//! Planned content by date, with add, edit, delete and "generate from entry".

use chrono::NaiveDate;
use leptos::*;
use marketing_bot::store::{CalendarEntry, CalendarUpdate, ContentType, NewCalendarEntry};
use marketing_bot::views::{self, GenerateRequest};

use crate::components::{Modal, StatusBadge};
use crate::state::global::GlobalState;

/// Editable calendar fields, as typed into the form
#[derive(Clone, Debug, PartialEq)]
struct CalendarFields {
    date: String,
    content_type: ContentType,
    topic: String,
    principal: String,
    notes: String,
}

impl Default for CalendarFields {
    fn default() -> Self {
        Self {
            date: String::new(),
            content_type: ContentType::BlogPost,
            topic: String::new(),
            principal: String::new(),
            notes: String::new(),
        }
    }
}

impl CalendarFields {
    fn from_entry(entry: &CalendarEntry) -> Self {
        Self {
            date: entry.date.to_string(),
            content_type: entry.content_type,
            topic: entry.topic.clone(),
            principal: entry.principal.clone(),
            notes: entry.notes.clone(),
        }
    }

    fn parse_date(&self) -> Result<NaiveDate, String> {
        self.date
            .parse()
            .map_err(|_| format!("Invalid date: {:?}", self.date))
    }
}

/// Calendar page component
#[component]
pub fn Calendar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let entries = create_memo({
        let state = state.clone();
        move |_| {
            state.track();
            let calendar = state.report(state.store.calendar()).unwrap_or_default();
            views::calendar_rows(&calendar)
        }
    });

    // Entry being edited in the modal
    let editing = create_rw_signal(None::<String>);

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Content Calendar"</h1>
                <p class="text-gray-400 mt-1">"Plan upcoming posts and reports"</p>
            </div>

            <AddEntry />

            <section class="bg-gray-800 rounded-xl p-6 overflow-x-auto">
                <table class="w-full text-sm">
                    <thead class="text-gray-400 text-left">
                        <tr>
                            <th class="pb-2">"Date"</th>
                            <th class="pb-2">"Type"</th>
                            <th class="pb-2">"Topic"</th>
                            <th class="pb-2">"Principal"</th>
                            <th class="pb-2">"Status"</th>
                            <th class="pb-2">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = entries.get();
                            if rows.is_empty() {
                                return view! {
                                    <tr><td colspan="6" class="py-2 text-gray-400">"No calendar entries."</td></tr>
                                }
                                .into_view();
                            }
                            rows.into_iter()
                                .map(|entry| view! { <EntryRow entry=entry editing=editing /> })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>

            {move || editing.get().map(|id| view! { <EditEntry id=id editing=editing /> })}
        </div>
    }
}

#[component]
fn EntryRow(entry: CalendarEntry, editing: RwSignal<Option<String>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_delete = {
        let state = state.clone();
        let id = entry.id.clone();
        move |_| {
            if let Some(true) = state.report(state.store.delete_calendar_entry(&id)) {
                state.refresh();
                state.show_success("Entry deleted");
            }
        }
    };

    let on_generate = {
        let request = GenerateRequest::from_calendar(&entry);
        move |_| state.generate_from(request.clone())
    };

    let id = entry.id.clone();

    view! {
        <tr class="border-t border-gray-700">
            <td class="py-2">{views::format_date(Some(entry.date))}</td>
            <td class="py-2">{entry.content_type.label()}</td>
            <td class="py-2">{entry.topic}</td>
            <td class="py-2">{entry.principal}</td>
            <td class="py-2"><StatusBadge status=entry.status /></td>
            <td class="py-2">
                <div class="flex space-x-2">
                    <button
                        class="px-2 py-1 rounded border border-gray-500 hover:bg-gray-700"
                        on:click=move |_| editing.set(Some(id.clone()))
                    >
                        "Edit"
                    </button>
                    <button class="px-2 py-1 rounded bg-red-700 hover:bg-red-600" on:click=on_delete>
                        "Delete"
                    </button>
                    <button class="px-2 py-1 rounded bg-primary-600 hover:bg-primary-700" on:click=on_generate>
                        "Generate"
                    </button>
                </div>
            </td>
        </tr>
    }
}

/// "Add Entry" card
#[component]
fn AddEntry() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let fields = create_rw_signal(CalendarFields::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let values = fields.get_untracked();
        let date = match values.parse_date() {
            Ok(date) => date,
            Err(e) => return state.show_error(&e),
        };

        let entry = NewCalendarEntry {
            date,
            content_type: values.content_type,
            topic: values.topic,
            principal: values.principal,
            notes: values.notes,
        };
        if state.report(state.store.add_calendar_entry(entry)).is_some() {
            state.refresh();
            fields.set(CalendarFields::default());
            state.show_success("Calendar entry added");
        }
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Add Entry"</h2>
            <form on:submit=on_submit class="space-y-4">
                <CalendarFieldInputs fields=fields />
                <button
                    type="submit"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-semibold transition-colors"
                >
                    "Add to Calendar"
                </button>
            </form>
        </section>
    }
}

/// Modal editing an existing entry
#[component]
fn EditEntry(id: String, editing: RwSignal<Option<String>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let existing = state
        .report(state.store.calendar_entry(&id))
        .flatten()
        .map(|entry| CalendarFields::from_entry(&entry));
    let Some(initial) = existing else {
        editing.set(None);
        return view! {}.into_view();
    };
    let fields = create_rw_signal(initial);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let values = fields.get_untracked();
        let date = match values.parse_date() {
            Ok(date) => date,
            Err(e) => return state.show_error(&e),
        };

        let update = CalendarUpdate {
            date: Some(date),
            content_type: Some(values.content_type),
            topic: Some(values.topic),
            principal: Some(values.principal),
            notes: Some(values.notes),
            status: None,
        };
        if state.report(state.store.update_calendar_entry(&id, update)).is_some() {
            state.refresh();
            editing.set(None);
            state.show_success("Entry updated");
        }
    };

    let close = Callback::new(move |_| editing.set(None));

    view! {
        <Modal title="Edit Calendar Entry" on_close=close>
            <form on:submit=on_submit class="space-y-4">
                <CalendarFieldInputs fields=fields />
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
    .into_view()
}

#[component]
fn CalendarFieldInputs(fields: RwSignal<CalendarFields>) -> impl IntoView {
    let input_class = "w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600 \
                       focus:border-primary-500 focus:outline-none";

    view! {
        <div class="grid md:grid-cols-2 gap-4">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Date"</label>
                <input
                    type="date"
                    required
                    class=input_class
                    prop:value=move || fields.with(|f| f.date.clone())
                    on:input=move |ev| fields.update(|f| f.date = event_target_value(&ev))
                />
            </div>
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Type"</label>
                <select
                    class=input_class
                    prop:value=move || fields.with(|f| f.content_type.as_str())
                    on:change=move |ev| {
                        if let Ok(content_type) = event_target_value(&ev).parse() {
                            fields.update(|f| f.content_type = content_type);
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
                <label class="block text-sm text-gray-400 mb-2">"Topic"</label>
                <input
                    type="text"
                    required
                    class=input_class
                    prop:value=move || fields.with(|f| f.topic.clone())
                    on:input=move |ev| fields.update(|f| f.topic = event_target_value(&ev))
                />
            </div>
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Principal"</label>
                <input
                    type="text"
                    required
                    class=input_class
                    prop:value=move || fields.with(|f| f.principal.clone())
                    on:input=move |ev| fields.update(|f| f.principal = event_target_value(&ev))
                />
            </div>
        </div>
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Notes"</label>
            <textarea
                rows="2"
                class=input_class
                prop:value=move || fields.with(|f| f.notes.clone())
                on:input=move |ev| fields.update(|f| f.notes = event_target_value(&ev))
            />
        </div>
    }
}
