//! Marketing Bot Store
//!
//! This module owns everything that is persisted:
//!
//! - **types**: Calendar entries, content items and their enums
//! - **backend**: Key-value backends (memory, JSON file, and the trait the
//!   browser `localStorage` wrapper implements)
//! - **engine**: The `Store` repository with seeding and CRUD
//! - **lifecycle**: Which review actions are allowed from which status
//! - **seed**: Default demo data
//! - **error**: Error types
//!
//! # Layout
//!
//! ```text
//! rc_bot_calendar  -> JSON array of CalendarEntry
//! rc_bot_content   -> JSON array of ContentItem
//! rc_bot_init      -> "1" once seeded
//! ```
//!
//! # Example
//!
//! ```rust
//! use marketing_bot::store::{MemoryBackend, Store};
//!
//! let store = Store::new(MemoryBackend::new());
//! store.init().unwrap();
//!
//! let queued = store.content().unwrap()
//!     .into_iter()
//!     .filter(|c| c.status.is_pending())
//!     .count();
//! assert!(queued > 0);
//! ```

pub mod backend;
pub mod engine;
pub mod error;
pub mod lifecycle;
pub mod seed;
pub mod types;

// Re-export commonly used types
pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use engine::{utc_today, Store, CALENDAR_KEY, CONTENT_KEY, INITIALIZED_KEY};
pub use error::{StoreError, StoreResult};
pub use lifecycle::ContentAction;
pub use seed::{seed_data, SeedData};
pub use types::{
    CalendarEntry, CalendarUpdate, ContentItem, ContentType, ContentUpdate, Metrics,
    NewCalendarEntry, NewContentItem, ParseEnumError, Platform, Status,
};
