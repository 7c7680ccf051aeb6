//! Core data types for the marketing bot store
//!
//! This module defines the records persisted by the store:
//! - `CalendarEntry`: A planned piece of content, not yet generated
//! - `ContentItem`: Generated or seeded copy moving through review
//! - `ContentType`, `Status` and `Platform`: Classification enums
//! - `CalendarUpdate` / `ContentUpdate`: Partial updates merged into records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of marketing content
///
/// Shared by calendar entries, content items and template selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Long-form article for the website blog
    BlogPost,
    /// Short-form post for LinkedIn
    LinkedinPost,
    /// Quarterly market report
    MarketReport,
}

impl ContentType {
    /// Get all content types for iteration
    pub fn all() -> &'static [ContentType] {
        &[
            ContentType::BlogPost,
            ContentType::LinkedinPost,
            ContentType::MarketReport,
        ]
    }

    /// Wire name as persisted
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::BlogPost => "blog_post",
            ContentType::LinkedinPost => "linkedin_post",
            ContentType::MarketReport => "market_report",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::BlogPost => "Blog Post",
            ContentType::LinkedinPost => "LinkedIn Post",
            ContentType::MarketReport => "Market Report",
        }
    }

    /// Platform the generate form preselects for this type
    pub fn default_platform(&self) -> Platform {
        match self {
            ContentType::LinkedinPost => Platform::Linkedin,
            _ => Platform::Website,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("content type", s))
    }
}

/// Lifecycle status of a calendar entry or content item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Draft,
    Queued,
    Approved,
    Rejected,
    Published,
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[
            Status::Draft,
            Status::Queued,
            Status::Approved,
            Status::Rejected,
            Status::Published,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Queued => "queued",
            Status::Approved => "approved",
            Status::Rejected => "rejected",
            Status::Published => "published",
        }
    }

    /// Position in the review queue (drafts first, published last)
    pub fn review_rank(&self) -> u8 {
        match self {
            Status::Draft => 0,
            Status::Queued => 1,
            Status::Approved => 2,
            Status::Rejected => 3,
            Status::Published => 4,
        }
    }

    /// Still waiting on a reviewer decision
    pub fn is_pending(&self) -> bool {
        matches!(self, Status::Draft | Status::Queued)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::all()
            .iter()
            .copied()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("status", s))
    }
}

/// Where a content item is published
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Website,
    Linkedin,
    Twitter,
}

impl Platform {
    pub fn all() -> &'static [Platform] {
        &[Platform::Website, Platform::Linkedin, Platform::Twitter]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Website => "website",
            Platform::Linkedin => "linkedin",
            Platform::Twitter => "twitter",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("platform", s))
    }
}

/// Unrecognized enum name in user input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// A planned piece of content on the editorial calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarEntry {
    pub id: String,
    /// Planned publication date
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub topic: String,
    pub principal: String,
    #[serde(default)]
    pub notes: String,
    pub status: Status,
}

/// Engagement numbers for published content
///
/// Only ever present on seeded demo data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metrics {
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub shares: u64,
    /// Engagement rate as displayed, e.g. "3.6%"
    #[serde(default)]
    pub engagement: String,
}

/// A generated or seeded piece of marketing copy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub platform: Platform,
    pub status: Status,
    pub principal: String,
    pub created: NaiveDate,
    /// Set exactly when `status` is `Published`
    #[serde(default)]
    pub published: Option<NaiveDate>,
    #[serde(default)]
    pub metrics: Option<Metrics>,
}

/// Fields supplied when adding a calendar entry
#[derive(Debug, Clone, PartialEq)]
pub struct NewCalendarEntry {
    pub date: NaiveDate,
    pub content_type: ContentType,
    pub topic: String,
    pub principal: String,
    pub notes: String,
}

/// Fields supplied when adding a content item
#[derive(Debug, Clone, PartialEq)]
pub struct NewContentItem {
    pub title: String,
    pub body: String,
    pub content_type: ContentType,
    pub platform: Platform,
    pub status: Status,
    pub principal: String,
}

/// Partial update for a calendar entry; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarUpdate {
    pub date: Option<NaiveDate>,
    pub content_type: Option<ContentType>,
    pub topic: Option<String>,
    pub principal: Option<String>,
    pub notes: Option<String>,
    pub status: Option<Status>,
}

impl CalendarUpdate {
    pub fn is_empty(&self) -> bool {
        *self == CalendarUpdate::default()
    }

    pub(crate) fn apply(self, entry: &mut CalendarEntry) {
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(content_type) = self.content_type {
            entry.content_type = content_type;
        }
        if let Some(topic) = self.topic {
            entry.topic = topic;
        }
        if let Some(principal) = self.principal {
            entry.principal = principal;
        }
        if let Some(notes) = self.notes {
            entry.notes = notes;
        }
        if let Some(status) = self.status {
            entry.status = status;
        }
    }
}

/// Partial update for a content item; `None` fields are left untouched
///
/// The publication date is not directly settable. It follows `status`:
/// moving to `Published` stamps it, moving anywhere else clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    pub content_type: Option<ContentType>,
    pub platform: Option<Platform>,
    pub principal: Option<String>,
    pub status: Option<Status>,
    pub metrics: Option<Metrics>,
}

impl ContentUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ContentUpdate::default()
    }

    /// Update that only changes status
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub(crate) fn apply(self, item: &mut ContentItem, today: NaiveDate) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(body) = self.body {
            item.body = body;
        }
        if let Some(content_type) = self.content_type {
            item.content_type = content_type;
        }
        if let Some(platform) = self.platform {
            item.platform = platform;
        }
        if let Some(principal) = self.principal {
            item.principal = principal;
        }
        if let Some(metrics) = self.metrics {
            item.metrics = Some(metrics);
        }
        if let Some(status) = self.status {
            if status == Status::Published {
                item.published.get_or_insert(today);
            } else {
                item.published = None;
            }
            item.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> ContentItem {
        ContentItem {
            id: "content-1".to_string(),
            title: "Title".to_string(),
            body: "Body".to_string(),
            content_type: ContentType::BlogPost,
            platform: Platform::Website,
            status: Status::Approved,
            principal: "Michael Rosen".to_string(),
            created: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            published: None,
            metrics: None,
        }
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&ContentType::LinkedinPost).unwrap(),
            "\"linkedin_post\""
        );
        assert_eq!(serde_json::to_string(&Status::Queued).unwrap(), "\"queued\"");
        assert_eq!("market_report".parse::<ContentType>().unwrap(), ContentType::MarketReport);
        assert_eq!("twitter".parse::<Platform>().unwrap(), Platform::Twitter);

        let err = "podcast".parse::<ContentType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown content type: \"podcast\"");
    }

    #[test]
    fn test_unknown_status_rejected_on_load() {
        let json = r#"{"id":"cal-1","date":"2026-01-15","type":"blog_post","topic":"T","principal":"P","status":"archived"}"#;
        assert!(serde_json::from_str::<CalendarEntry>(json).is_err());
    }

    #[test]
    fn test_calendar_entry_json_shape() {
        let json = r#"{"id":"cal-1","date":"2026-01-15","type":"blog_post","topic":"T","principal":"P","status":"draft"}"#;
        let entry: CalendarEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        assert_eq!(entry.notes, "");

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "blog_post");
        assert_eq!(value["date"], "2026-01-15");
    }

    #[test]
    fn test_content_update_publish_stamps_date() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let mut item = sample_item();

        ContentUpdate::status(Status::Published).apply(&mut item, today);
        assert_eq!(item.status, Status::Published);
        assert_eq!(item.published, Some(today));

        // Re-publishing keeps the original date
        let later = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        ContentUpdate::status(Status::Published).apply(&mut item, later);
        assert_eq!(item.published, Some(today));

        ContentUpdate::status(Status::Queued).apply(&mut item, later);
        assert_eq!(item.published, None);
    }

    #[test]
    fn test_content_update_leaves_other_fields() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let mut item = sample_item();
        let before = item.clone();

        ContentUpdate {
            title: Some("New title".to_string()),
            ..Default::default()
        }
        .apply(&mut item, today);

        assert_eq!(item.title, "New title");
        assert_eq!(item.body, before.body);
        assert_eq!(item.status, before.status);
        assert_eq!(item.published, before.published);
    }

    #[test]
    fn test_default_platform() {
        assert_eq!(ContentType::LinkedinPost.default_platform(), Platform::Linkedin);
        assert_eq!(ContentType::BlogPost.default_platform(), Platform::Website);
        assert_eq!(ContentType::MarketReport.default_platform(), Platform::Website);
    }
}
