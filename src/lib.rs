//! # Marketing Bot
//!
//! Content calendar, copy generation, compliance review and publishing
//! workflow for a real estate investment firm's marketing team.
//!
//! ## Features
//!
//! - **Pluggable persistence**: One `Store` over any key-value backend
//!   (memory, JSON file, browser `localStorage`)
//! - **Review lifecycle**: draft/queued items are approved or rejected,
//!   approved items published, rejected items edited back into the queue
//! - **Template generation**: Randomized copy from per-type template sets
//! - **Compliance**: Advisory forbidden-term and length checks
//!
//! ## Modules
//!
//! - [`store`]: Records, backends and the `Store` repository
//! - [`compliance`]: Brand compliance checker
//! - [`generator`]: Template-based content generator
//! - [`navigation`]: Active view and generation request tracking
//! - [`views`]: Per-screen view models
//! - [`knowledge`]: Bundled reference material
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use marketing_bot::compliance;
//! use marketing_bot::generator::Generator;
//! use marketing_bot::store::{ContentType, MemoryBackend, Platform, Status, Store};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new(MemoryBackend::new());
//! store.init()?;
//!
//! let draft = Generator::new().generate(ContentType::BlogPost, "Houston Q4", "Jane Doe");
//! let report = compliance::check(&draft.body);
//! println!("compliance: {}", report.label());
//!
//! let item = store.add_content(draft.into_new_item(Platform::Website, Status::Queued))?;
//! store.approve_content(&item.id)?;
//! let published = store.publish_content(&item.id)?.unwrap();
//! assert_eq!(published.published, Some(store.today()));
//! # Ok(())
//! # }
//! ```

pub mod compliance;
pub mod config;
pub mod generator;
pub mod knowledge;
pub mod navigation;
pub mod store;
pub mod views;

// Re-export top-level types for convenience
pub use store::{
    CalendarEntry, CalendarUpdate, ContentAction, ContentItem, ContentType, ContentUpdate,
    FileBackend, KeyValueBackend, MemoryBackend, Metrics, NewCalendarEntry, NewContentItem,
    Platform, Status, Store, StoreError, StoreResult,
};

pub use compliance::{check, check_content, ComplianceIssue, ComplianceReport, ComplianceSuggestion};

pub use generator::{GeneratedContent, Generator, Placeholder};

pub use navigation::{GenerationGuard, GenerationTicket, Navigator, View};

pub use knowledge::KnowledgeBase;

pub use config::{Config, ConfigError, GeneratorConfig, LoggingConfig, StorageConfig};
