//! View navigation
//!
//! Tracks which view is active, which content item the detail view shows,
//! and whether a delayed generation result is still wanted. Front ends keep
//! one [`Navigator`] and render whatever [`Navigator::active`] reports.

use std::fmt;

/// A top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    Calendar,
    Generate,
    Review,
    Detail,
    Knowledge,
}

impl View {
    pub fn all() -> &'static [View] {
        &[
            View::Dashboard,
            View::Calendar,
            View::Generate,
            View::Review,
            View::Detail,
            View::Knowledge,
        ]
    }

    /// Views that have their own nav tab, in display order
    pub fn tabs() -> &'static [View] {
        &[
            View::Dashboard,
            View::Calendar,
            View::Generate,
            View::Review,
            View::Knowledge,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Calendar => "calendar",
            View::Generate => "generate",
            View::Review => "review",
            View::Detail => "detail",
            View::Knowledge => "knowledge",
        }
    }

    pub fn from_name(name: &str) -> Option<View> {
        View::all().iter().copied().find(|v| v.name() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Calendar => "Calendar",
            View::Generate => "Generate",
            View::Review => "Review Queue",
            View::Detail => "Content Detail",
            View::Knowledge => "Knowledge",
        }
    }

    /// Tab highlighted while this view is shown
    pub fn tab(&self) -> View {
        match self {
            View::Detail => View::Review,
            other => *other,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Proof that a generation request was started
///
/// Only the most recent ticket completes, and only if nothing cancelled it
/// in the meantime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket(u64);

/// Hands out generation tickets and decides whether a result may be shown
#[derive(Debug, Clone, Default)]
pub struct GenerationGuard {
    issued: u64,
    pending: Option<u64>,
}

impl GenerationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, superseding any outstanding one
    pub fn begin(&mut self) -> GenerationTicket {
        self.issued += 1;
        if let Some(stale) = self.pending.replace(self.issued) {
            tracing::debug!(stale, ticket = self.issued, "Superseded generation request");
        }
        GenerationTicket(self.issued)
    }

    /// Drop the outstanding request, if any
    pub fn cancel(&mut self) {
        if let Some(ticket) = self.pending.take() {
            tracing::debug!(ticket, "Cancelled generation request");
        }
    }

    /// Returns true if `ticket` is still the outstanding request
    ///
    /// A successful completion clears it, so a ticket completes at most once.
    pub fn complete(&mut self, ticket: GenerationTicket) -> bool {
        if self.pending == Some(ticket.0) {
            self.pending = None;
            true
        } else {
            tracing::debug!(ticket = ticket.0, "Discarded stale generation result");
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Active view plus the state that travels with it
#[derive(Debug, Clone)]
pub struct Navigator {
    active: Option<View>,
    detail_id: Option<String>,
    generation: GenerationGuard,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Starts on the dashboard
    pub fn new() -> Self {
        Self {
            active: Some(View::Dashboard),
            detail_id: None,
            generation: GenerationGuard::new(),
        }
    }

    pub fn active(&self) -> Option<View> {
        self.active
    }

    pub fn is_active(&self, view: View) -> bool {
        self.active == Some(view)
    }

    /// Tab to highlight; the review tab while detail is shown
    pub fn highlighted_tab(&self) -> Option<View> {
        self.active.map(|v| v.tab())
    }

    /// Content item shown by the detail view
    pub fn detail_id(&self) -> Option<&str> {
        self.detail_id.as_deref()
    }

    /// Switch by view name
    ///
    /// Every view is deactivated first; an unknown name leaves none active.
    /// Returns the view now active.
    pub fn switch_view(&mut self, name: &str) -> Option<View> {
        match View::from_name(name) {
            Some(view) => {
                self.go(view);
            }
            None => {
                tracing::warn!(view = name, "Unknown view");
                self.leave();
                self.active = None;
            }
        }
        self.active
    }

    /// Switch to `view`
    ///
    /// Detail can only be re-entered while review or detail is showing and
    /// an item is selected; otherwise nothing changes and false is returned.
    pub fn go(&mut self, view: View) -> bool {
        if view == View::Detail && !(self.can_enter_detail() && self.detail_id.is_some()) {
            tracing::debug!(from = ?self.active, "Detail view not reachable");
            return false;
        }
        self.leave();
        if view != View::Detail {
            self.detail_id = None;
        }
        self.active = Some(view);
        true
    }

    /// Show `id` in the detail view; allowed from review or detail only
    pub fn open_detail(&mut self, id: impl Into<String>) -> bool {
        if !self.can_enter_detail() {
            tracing::debug!(from = ?self.active, "Detail view not reachable");
            return false;
        }
        self.leave();
        self.detail_id = Some(id.into());
        self.active = Some(View::Detail);
        true
    }

    /// Start a generation request for the generate view
    pub fn begin_generation(&mut self) -> GenerationTicket {
        self.generation.begin()
    }

    /// Whether a delayed result for `ticket` should be shown
    pub fn complete_generation(&mut self, ticket: GenerationTicket) -> bool {
        self.generation.complete(ticket)
    }

    pub fn cancel_generation(&mut self) {
        self.generation.cancel();
    }

    pub fn is_generating(&self) -> bool {
        self.generation.is_pending()
    }

    fn can_enter_detail(&self) -> bool {
        matches!(self.active, Some(View::Review) | Some(View::Detail))
    }

    // Any navigation abandons an in-flight generation
    fn leave(&mut self) {
        self.generation.cancel();
    }
}
