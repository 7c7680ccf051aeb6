//! Content review lifecycle
//!
//! ```text
//! draft ──┐          ┌─> approved ──> published
//!         ├─ review ─┤
//! queued ─┘          └─> rejected ──(edit)──> queued
//! ```

use std::fmt;

use super::types::Status;

/// Reviewer action on a content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentAction {
    Approve,
    Reject,
    Publish,
    Edit,
    Delete,
}

impl ContentAction {
    /// Actions offered for an item in the given status, in display order
    pub fn available_for(status: Status) -> &'static [ContentAction] {
        match status {
            Status::Draft | Status::Queued => &[
                ContentAction::Approve,
                ContentAction::Reject,
                ContentAction::Edit,
                ContentAction::Delete,
            ],
            Status::Approved => &[
                ContentAction::Publish,
                ContentAction::Edit,
                ContentAction::Delete,
            ],
            Status::Rejected => &[ContentAction::Edit, ContentAction::Delete],
            Status::Published => &[ContentAction::Delete],
        }
    }

    /// Status an item moves to when this action is applied, if allowed
    ///
    /// Delete has no target status; it is allowed from anywhere.
    pub fn target(&self, from: Status) -> Option<Status> {
        match (self, from) {
            (ContentAction::Approve, Status::Draft | Status::Queued) => Some(Status::Approved),
            (ContentAction::Reject, Status::Draft | Status::Queued) => Some(Status::Rejected),
            (ContentAction::Publish, Status::Approved) => Some(Status::Published),
            (ContentAction::Edit, Status::Rejected) => Some(Status::Queued),
            (ContentAction::Edit, Status::Draft | Status::Queued | Status::Approved) => Some(from),
            _ => None,
        }
    }

    pub fn is_allowed(&self, from: Status) -> bool {
        ContentAction::available_for(from).contains(self)
    }

    /// Button label for this action on an item in `status`
    pub fn label(&self, status: Status) -> &'static str {
        match self {
            ContentAction::Approve => "Approve",
            ContentAction::Reject => "Reject",
            ContentAction::Publish => "Publish",
            ContentAction::Edit if status == Status::Rejected => "Edit & Resubmit",
            ContentAction::Edit => "Edit",
            ContentAction::Delete => "Delete",
        }
    }

    /// Notification shown once the action succeeds
    pub fn done_message(&self) -> &'static str {
        match self {
            ContentAction::Approve => "Content approved",
            ContentAction::Reject => "Content rejected",
            ContentAction::Publish => "Content published",
            ContentAction::Edit => "Content updated",
            ContentAction::Delete => "Content deleted",
        }
    }
}

impl fmt::Display for ContentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            ContentAction::Approve => "approve",
            ContentAction::Reject => "reject",
            ContentAction::Publish => "publish",
            ContentAction::Edit => "edit",
            ContentAction::Delete => "delete",
        };
        f.write_str(verb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_agree_with_available_actions() {
        for &status in Status::all() {
            for action in [
                ContentAction::Approve,
                ContentAction::Reject,
                ContentAction::Publish,
                ContentAction::Edit,
            ] {
                assert_eq!(
                    action.target(status).is_some(),
                    action.is_allowed(status),
                    "{action} from {status}"
                );
            }
            assert!(ContentAction::Delete.is_allowed(status));
        }
    }

    #[test]
    fn test_publish_only_from_approved() {
        assert_eq!(ContentAction::Publish.target(Status::Approved), Some(Status::Published));
        assert_eq!(ContentAction::Publish.target(Status::Draft), None);
        assert_eq!(ContentAction::Publish.target(Status::Queued), None);
        assert_eq!(ContentAction::Publish.target(Status::Rejected), None);
    }

    #[test]
    fn test_edit_requeues_rejected() {
        assert_eq!(ContentAction::Edit.target(Status::Rejected), Some(Status::Queued));
        assert_eq!(ContentAction::Edit.target(Status::Approved), Some(Status::Approved));
        assert_eq!(ContentAction::Edit.target(Status::Published), None);
        assert_eq!(ContentAction::Edit.label(Status::Rejected), "Edit & Resubmit");
        assert_eq!(ContentAction::Edit.label(Status::Draft), "Edit");
    }
}
