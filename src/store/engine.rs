//! Store
//!
//! Owns the two persisted collections. Every operation reads the whole
//! collection, modifies it, and writes it back; there is no caching between
//! calls, so two stores over the same backend always observe each other's
//! writes (last writer wins).

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::backend::KeyValueBackend;
use super::error::{StoreError, StoreResult};
use super::lifecycle::ContentAction;
use super::seed::seed_data;
use super::types::{
    CalendarEntry, CalendarUpdate, ContentItem, ContentUpdate, NewCalendarEntry, NewContentItem,
    Status,
};

/// Key holding the calendar entries collection
pub const CALENDAR_KEY: &str = "rc_bot_calendar";
/// Key holding the content items collection
pub const CONTENT_KEY: &str = "rc_bot_content";
/// Key set once default data has been written
pub const INITIALIZED_KEY: &str = "rc_bot_init";

const CALENDAR_ID_PREFIX: &str = "cal";
const CONTENT_ID_PREFIX: &str = "content";

/// Today's date in UTC
pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Calendar and content repository over a key-value backend
#[derive(Debug, Clone)]
pub struct Store<B> {
    backend: B,
    clock: fn() -> NaiveDate,
}

impl<B: KeyValueBackend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            clock: utc_today,
        }
    }

    /// Replace the source of "today" used for created/published dates
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    // ============ Lifecycle ============

    pub fn is_initialized(&self) -> StoreResult<bool> {
        Ok(self.backend.get_item(INITIALIZED_KEY)?.is_some())
    }

    /// Seed default data unless it has been written before
    ///
    /// Returns `true` when seeding happened.
    pub fn init(&self) -> StoreResult<bool> {
        if self.is_initialized()? {
            tracing::debug!("Store already initialized");
            return Ok(false);
        }
        self.seed()?;
        Ok(true)
    }

    /// Overwrite both collections with the default data
    pub fn seed(&self) -> StoreResult<()> {
        let seed = seed_data()?;
        self.save_calendar(&seed.calendar)?;
        self.save_content(&seed.content)?;
        self.backend.set_item(INITIALIZED_KEY, "1")?;

        tracing::info!(
            calendar = seed.calendar.len(),
            content = seed.content.len(),
            "Store seeded with default data"
        );
        Ok(())
    }

    /// Drop everything and seed again
    pub fn reset(&self) -> StoreResult<()> {
        self.backend.remove_item(CALENDAR_KEY)?;
        self.backend.remove_item(CONTENT_KEY)?;
        self.backend.remove_item(INITIALIZED_KEY)?;
        tracing::info!("Store reset");
        self.seed()
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Vec<T>> {
        match self.backend.get_item(key)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save<T: Serialize>(&self, key: &str, items: &[T]) -> StoreResult<()> {
        let json = serde_json::to_string(items)?;
        self.backend.set_item(key, &json)
    }

    // ============ Calendar ============

    /// All calendar entries in stored order
    pub fn calendar(&self) -> StoreResult<Vec<CalendarEntry>> {
        self.load(CALENDAR_KEY)
    }

    pub fn save_calendar(&self, entries: &[CalendarEntry]) -> StoreResult<()> {
        self.save(CALENDAR_KEY, entries)
    }

    pub fn calendar_entry(&self, id: &str) -> StoreResult<Option<CalendarEntry>> {
        Ok(self.calendar()?.into_iter().find(|e| e.id == id))
    }

    /// Append a new entry in `draft` status
    pub fn add_calendar_entry(&self, entry: NewCalendarEntry) -> StoreResult<CalendarEntry> {
        let mut entries = self.calendar()?;
        let id = next_id(CALENDAR_ID_PREFIX, entries.iter().map(|e| e.id.as_str()));

        let entry = CalendarEntry {
            id,
            date: entry.date,
            content_type: entry.content_type,
            topic: entry.topic,
            principal: entry.principal,
            notes: entry.notes,
            status: Status::Draft,
        };
        entries.push(entry.clone());
        self.save_calendar(&entries)?;

        tracing::debug!(id = %entry.id, date = %entry.date, "Calendar entry added");
        Ok(entry)
    }

    /// Merge `update` into the entry with `id`
    ///
    /// Returns the updated entry, or `None` (and writes nothing) if no entry
    /// has that id.
    pub fn update_calendar_entry(
        &self,
        id: &str,
        update: CalendarUpdate,
    ) -> StoreResult<Option<CalendarEntry>> {
        let mut entries = self.calendar()?;
        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            tracing::debug!(id, "Calendar update ignored: no such entry");
            return Ok(None);
        };

        update.apply(entry);
        let updated = entry.clone();
        self.save_calendar(&entries)?;
        Ok(Some(updated))
    }

    /// Remove the entry with `id`; returns whether anything was removed
    pub fn delete_calendar_entry(&self, id: &str) -> StoreResult<bool> {
        let mut entries = self.calendar()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);

        if entries.len() == before {
            return Ok(false);
        }
        self.save_calendar(&entries)?;
        Ok(true)
    }

    // ============ Content ============

    /// All content items in stored order
    pub fn content(&self) -> StoreResult<Vec<ContentItem>> {
        self.load(CONTENT_KEY)
    }

    pub fn save_content(&self, items: &[ContentItem]) -> StoreResult<()> {
        self.save(CONTENT_KEY, items)
    }

    pub fn content_by_id(&self, id: &str) -> StoreResult<Option<ContentItem>> {
        Ok(self.content()?.into_iter().find(|c| c.id == id))
    }

    /// Append a new item created today, without metrics
    pub fn add_content(&self, item: NewContentItem) -> StoreResult<ContentItem> {
        let mut items = self.content()?;
        let id = next_id(CONTENT_ID_PREFIX, items.iter().map(|c| c.id.as_str()));
        let today = self.today();

        let item = ContentItem {
            id,
            title: item.title,
            body: item.body,
            content_type: item.content_type,
            platform: item.platform,
            status: item.status,
            principal: item.principal,
            created: today,
            published: (item.status == Status::Published).then_some(today),
            metrics: None,
        };
        items.push(item.clone());
        self.save_content(&items)?;

        tracing::debug!(id = %item.id, status = %item.status, "Content item added");
        Ok(item)
    }

    /// Merge `update` into the item with `id`
    ///
    /// This is an unchecked merge; use the review helpers below to respect
    /// the lifecycle.
    pub fn update_content(
        &self,
        id: &str,
        update: ContentUpdate,
    ) -> StoreResult<Option<ContentItem>> {
        let mut items = self.content()?;
        let today = self.today();
        let Some(item) = items.iter_mut().find(|c| c.id == id) else {
            tracing::debug!(id, "Content update ignored: no such item");
            return Ok(None);
        };

        update.apply(item, today);
        let updated = item.clone();
        self.save_content(&items)?;
        Ok(Some(updated))
    }

    /// Remove the item with `id`; returns whether anything was removed
    pub fn delete_content(&self, id: &str) -> StoreResult<bool> {
        let mut items = self.content()?;
        let before = items.len();
        items.retain(|c| c.id != id);

        if items.len() == before {
            return Ok(false);
        }
        self.save_content(&items)?;
        Ok(true)
    }

    // ============ Review ============

    pub fn approve_content(&self, id: &str) -> StoreResult<Option<ContentItem>> {
        self.transition(id, ContentAction::Approve, ContentUpdate::default())
    }

    pub fn reject_content(&self, id: &str) -> StoreResult<Option<ContentItem>> {
        self.transition(id, ContentAction::Reject, ContentUpdate::default())
    }

    /// Publish an approved item, stamping today's date
    pub fn publish_content(&self, id: &str) -> StoreResult<Option<ContentItem>> {
        self.transition(id, ContentAction::Publish, ContentUpdate::default())
    }

    /// Replace title and body; a rejected item goes back to the queue
    pub fn edit_content(
        &self,
        id: &str,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> StoreResult<Option<ContentItem>> {
        let update = ContentUpdate {
            title: Some(title.into()),
            body: Some(body.into()),
            ..Default::default()
        };
        self.transition(id, ContentAction::Edit, update)
    }

    fn transition(
        &self,
        id: &str,
        action: ContentAction,
        mut update: ContentUpdate,
    ) -> StoreResult<Option<ContentItem>> {
        let Some(current) = self.content_by_id(id)? else {
            return Ok(None);
        };

        let target = match action.target(current.status) {
            Some(target) if action.is_allowed(current.status) => target,
            _ => {
                return Err(StoreError::InvalidTransition {
                    id: id.to_string(),
                    from: current.status,
                    action,
                })
            }
        };

        if target != current.status {
            update.status = Some(target);
        }

        tracing::info!(id, from = %current.status, to = %target, "Content {}", action);
        self.update_content(id, update)
    }
}

/// Time-based id, bumped past any id already taken in the collection
fn next_id<'a>(prefix: &str, existing: impl Iterator<Item = &'a str>) -> String {
    let taken: HashSet<&str> = existing.collect();
    let mut token = Utc::now().timestamp_millis();

    loop {
        let id = format!("{}-{}", prefix, token);
        if !taken.contains(id.as_str()) {
            return id;
        }
        tracing::trace!(%id, "Id collision, bumping token");
        token += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::MemoryBackend;
    use crate::store::types::{ContentType, Metrics, Platform};

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn create_test_store() -> Store<MemoryBackend> {
        let store = Store::new(MemoryBackend::new()).with_clock(fixed_today);
        store.init().unwrap();
        store
    }

    fn new_item(status: Status) -> NewContentItem {
        NewContentItem {
            title: "Houston absorption update".to_string(),
            body: "Houston's multifamily market continues to demonstrate strengthening fundamentals.".to_string(),
            content_type: ContentType::BlogPost,
            platform: Platform::Website,
            status,
            principal: "Jane".to_string(),
        }
    }

    #[test]
    fn test_init_seeds_once() {
        let store = Store::new(MemoryBackend::new());
        assert!(!store.is_initialized().unwrap());

        assert!(store.init().unwrap());
        let calendar = store.calendar().unwrap();
        let content = store.content().unwrap();
        assert_eq!(calendar.len(), 12);
        assert_eq!(content.len(), 11);

        assert!(!store.init().unwrap());
        assert_eq!(store.calendar().unwrap(), calendar);
        assert_eq!(store.content().unwrap(), content);
    }

    #[test]
    fn test_init_keeps_user_changes() {
        let store = create_test_store();
        store.delete_calendar_entry("cal-1").unwrap();

        store.init().unwrap();
        assert!(store.calendar_entry("cal-1").unwrap().is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let store = create_test_store();
        store.delete_content("content-1").unwrap();
        store.add_content(new_item(Status::Queued)).unwrap();

        store.reset().unwrap();
        let content = store.content().unwrap();
        assert_eq!(content.len(), 11);
        assert!(content.iter().any(|c| c.id == "content-1"));
        assert!(store.is_initialized().unwrap());
    }

    #[test]
    fn test_empty_backend_reads_empty() {
        let store = Store::new(MemoryBackend::new());
        assert!(store.calendar().unwrap().is_empty());
        assert!(store.content().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_collection_is_an_error() {
        let backend = MemoryBackend::new();
        backend.set_item(CONTENT_KEY, "[{\"id\":").unwrap();
        let store = Store::new(backend);

        assert!(matches!(store.content(), Err(StoreError::Serialization(_))));
    }

    #[test]
    fn test_add_content_roundtrip() {
        let store = create_test_store();
        let input = new_item(Status::Queued);

        let added = store.add_content(input.clone()).unwrap();
        let fetched = store.content_by_id(&added.id).unwrap().unwrap();

        assert!(fetched.id.starts_with("content-"));
        assert_eq!(fetched.title, input.title);
        assert_eq!(fetched.body, input.body);
        assert_eq!(fetched.content_type, input.content_type);
        assert_eq!(fetched.platform, input.platform);
        assert_eq!(fetched.status, input.status);
        assert_eq!(fetched.principal, input.principal);
        assert_eq!(fetched.created, fixed_today());
        assert_eq!(fetched.published, None);
        assert_eq!(fetched.metrics, None);
    }

    #[test]
    fn test_rapid_adds_get_unique_ids() {
        let store = create_test_store();
        let ids: HashSet<String> = (0..20)
            .map(|_| store.add_content(new_item(Status::Draft)).unwrap().id)
            .collect();
        assert_eq!(ids.len(), 20);

        let all = store.content().unwrap();
        let unique: HashSet<_> = all.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn test_update_content_merges_only_given_fields() {
        let store = create_test_store();
        let before = store.content_by_id("content-8").unwrap().unwrap();

        let updated = store
            .update_content(
                "content-8",
                ContentUpdate {
                    title: Some("Leverage discipline".to_string()),
                    metrics: Some(Metrics {
                        views: 10,
                        shares: 1,
                        engagement: "1.0%".to_string(),
                    }),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.title, "Leverage discipline");
        assert_eq!(updated.metrics.as_ref().unwrap().views, 10);
        assert_eq!(updated.body, before.body);
        assert_eq!(updated.status, before.status);
        assert_eq!(updated.principal, before.principal);
        assert_eq!(updated.created, before.created);
        assert_eq!(updated.published, before.published);
        assert_eq!(store.content_by_id("content-8").unwrap().unwrap(), updated);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let store = create_test_store();
        let before = store.content().unwrap();

        let result = store
            .update_content("content-404", ContentUpdate::status(Status::Approved))
            .unwrap();
        assert!(result.is_none());
        assert_eq!(store.content().unwrap(), before);

        let result = store
            .update_calendar_entry("cal-404", CalendarUpdate::default())
            .unwrap();
        assert!(result.is_none());
        assert!(!store.delete_calendar_entry("cal-404").unwrap());
        assert!(!store.delete_content("content-404").unwrap());
    }

    #[test]
    fn test_calendar_add_then_delete() {
        let store = create_test_store();
        let before = store.calendar().unwrap();

        let entry = store
            .add_calendar_entry(NewCalendarEntry {
                date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
                content_type: ContentType::BlogPost,
                topic: "X".to_string(),
                principal: "Y".to_string(),
                notes: String::new(),
            })
            .unwrap();
        assert_eq!(entry.status, Status::Draft);
        assert!(entry.id.starts_with("cal-"));
        assert_eq!(store.calendar().unwrap().len(), before.len() + 1);

        assert!(store.delete_calendar_entry(&entry.id).unwrap());
        let after = store.calendar().unwrap();
        assert!(after.iter().all(|e| e.id != entry.id));
        assert_eq!(after, before);
    }

    #[test]
    fn test_update_calendar_entry() {
        let store = create_test_store();
        let updated = store
            .update_calendar_entry(
                "cal-8",
                CalendarUpdate {
                    topic: Some("Phoenix deep dive".to_string()),
                    notes: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.topic, "Phoenix deep dive");
        assert_eq!(updated.notes, "");
        assert_eq!(updated.principal, "Michael Rosen");
        assert_eq!(store.calendar_entry("cal-8").unwrap().unwrap(), updated);
    }

    #[test]
    fn test_review_flow() {
        let store = create_test_store();
        let item = store.add_content(new_item(Status::Queued)).unwrap();

        let approved = store.approve_content(&item.id).unwrap().unwrap();
        assert_eq!(approved.status, Status::Approved);
        assert_eq!(approved.published, None);

        let published = store.publish_content(&item.id).unwrap().unwrap();
        assert_eq!(published.status, Status::Published);
        assert_eq!(published.published, Some(fixed_today()));
    }

    #[test]
    fn test_publish_requires_approval() {
        let store = create_test_store();
        let err = store.publish_content("content-10").unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidTransition {
                from: Status::Draft,
                action: ContentAction::Publish,
                ..
            }
        ));
        let item = store.content_by_id("content-10").unwrap().unwrap();
        assert_eq!(item.status, Status::Draft);
    }

    #[test]
    fn test_edit_rejected_requeues() {
        let store = create_test_store();
        store.reject_content("content-9").unwrap();

        let edited = store
            .edit_content("content-9", "Off-market sourcing", "Every property was sourced directly.")
            .unwrap()
            .unwrap();
        assert_eq!(edited.status, Status::Queued);
        assert_eq!(edited.title, "Off-market sourcing");
    }

    #[test]
    fn test_edit_approved_keeps_status() {
        let store = create_test_store();
        let edited = store
            .edit_content("content-7", "Houston migration", "Body")
            .unwrap()
            .unwrap();
        assert_eq!(edited.status, Status::Approved);
    }

    #[test]
    fn test_transition_on_missing_id_is_noop() {
        let store = create_test_store();
        assert!(store.approve_content("content-404").unwrap().is_none());
    }

    #[test]
    fn test_stores_share_backend() {
        let backend = MemoryBackend::new();
        let first = Store::new(backend.clone());
        let second = Store::new(backend);

        first.init().unwrap();
        assert!(!second.init().unwrap());

        let item = first.add_content(new_item(Status::Queued)).unwrap();
        assert!(second.content_by_id(&item.id).unwrap().is_some());
    }

    #[test]
    fn test_next_id_skips_taken() {
        let first = next_id("cal", std::iter::empty());
        let second = next_id("cal", std::iter::once(first.as_str()));
        assert_ne!(first, second);
        assert!(second.starts_with("cal-"));
    }
}
