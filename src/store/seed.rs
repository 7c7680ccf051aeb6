//! Default demo data written on first run

use serde::Deserialize;

use super::error::StoreResult;
use super::types::{CalendarEntry, ContentItem};

const SEED_JSON: &str = include_str!("../../data/seed.json");

/// Collections the store starts from
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub calendar: Vec<CalendarEntry>,
    pub content: Vec<ContentItem>,
}

/// Parse the bundled seed data
pub fn seed_data() -> StoreResult<SeedData> {
    Ok(serde_json::from_str(SEED_JSON)?)
}
