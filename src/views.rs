//! View models
//!
//! Pure functions that turn the store's collections into what each screen
//! shows. Both front ends render from these, recomputing on every render.

use chrono::NaiveDate;
use serde::Serialize;

use crate::compliance::{self, ComplianceReport};
use crate::store::{CalendarEntry, ContentAction, ContentItem, ContentType, Platform, Status};

/// Items listed under "Recent Activity"
pub const RECENT_LIMIT: usize = 6;
/// Entries listed under "Upcoming"
pub const UPCOMING_LIMIT: usize = 5;
/// Title characters shown in lists before truncation
pub const TITLE_CHARS: usize = 50;
/// Topic characters shown on the dashboard calendar
pub const TOPIC_CHARS: usize = 40;

/// Shown in place of a missing value
pub const EMPTY_CELL: &str = "\u{2014}";

/// Dashboard stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Drafts plus queued items
    pub pending: usize,
    pub published: usize,
    /// Calendar entries dated today or later
    pub upcoming: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub stats: DashboardStats,
    /// Most recently created items, newest first
    pub recent: Vec<ContentItem>,
    /// Next calendar entries from today on, soonest first
    pub upcoming: Vec<CalendarEntry>,
}

pub fn dashboard(calendar: &[CalendarEntry], content: &[ContentItem], today: NaiveDate) -> Dashboard {
    let stats = DashboardStats {
        pending: content.iter().filter(|c| c.status.is_pending()).count(),
        published: content
            .iter()
            .filter(|c| c.status == Status::Published)
            .count(),
        upcoming: calendar.iter().filter(|e| e.date >= today).count(),
        total: content.len(),
    };

    let mut recent = content.to_vec();
    recent.sort_by(|a, b| b.created.cmp(&a.created));
    recent.truncate(RECENT_LIMIT);

    let upcoming = calendar_rows(calendar)
        .into_iter()
        .filter(|e| e.date >= today)
        .take(UPCOMING_LIMIT)
        .collect();

    Dashboard {
        stats,
        recent,
        upcoming,
    }
}

/// Calendar entries by date; entries on the same date keep stored order
pub fn calendar_rows(calendar: &[CalendarEntry]) -> Vec<CalendarEntry> {
    let mut rows = calendar.to_vec();
    rows.sort_by_key(|e| e.date);
    rows
}

/// One line of the review queue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRow {
    pub item: ContentItem,
    pub compliance: ComplianceReport,
}

/// All content ordered draft, queued, approved, rejected, published
pub fn review_queue(content: &[ContentItem]) -> Vec<ReviewRow> {
    let mut items = content.to_vec();
    items.sort_by_key(|c| c.status.review_rank());
    items
        .into_iter()
        .map(|item| ReviewRow {
            compliance: compliance::check_content(&item.body, item.content_type),
            item,
        })
        .collect()
}

/// Label/value pairs listed beside a content item
pub fn detail_fields(item: &ContentItem) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("Type", item.content_type.label().to_string()),
        ("Platform", item.platform.to_string()),
        ("Status", item.status.to_string()),
        ("Author", item.principal.clone()),
        ("Created", format_date(Some(item.created))),
        ("Published", format_date(item.published)),
    ];
    if let Some(metrics) = &item.metrics {
        let engagement = if metrics.engagement.is_empty() {
            EMPTY_CELL.to_string()
        } else {
            metrics.engagement.clone()
        };
        fields.push(("Views", metrics.views.to_string()));
        fields.push(("Shares", metrics.shares.to_string()));
        fields.push(("Engagement", engagement));
    }
    fields
}

/// Actions offered on the detail view, with their button labels
pub fn detail_actions(item: &ContentItem) -> Vec<(ContentAction, &'static str)> {
    ContentAction::available_for(item.status)
        .iter()
        .map(|&action| (action, action.label(item.status)))
        .collect()
}

/// Values of the generate form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub content_type: ContentType,
    pub topic: String,
    pub principal: String,
    pub platform: Platform,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            content_type: ContentType::BlogPost,
            topic: String::new(),
            principal: String::new(),
            platform: ContentType::BlogPost.default_platform(),
        }
    }
}

impl GenerateRequest {
    /// Prefill from a calendar entry's "Generate" button
    pub fn from_calendar(entry: &CalendarEntry) -> Self {
        Self {
            content_type: entry.content_type,
            topic: entry.topic.clone(),
            principal: entry.principal.clone(),
            platform: entry.content_type.default_platform(),
        }
    }
}

/// Cut `text` to `max` characters, marking the cut with "..."
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

/// Cut `text` to `max` characters without a marker
pub fn clip(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// "Jan 15, 2026", or a dash when there is no date
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => EMPTY_CELL.to_string(),
    }
}
