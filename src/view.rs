//! Shared view state primitives
//!
//! `ViewState` is what a view renders, `UserNotice` is the only form in
//! which a failure reaches the user, and `RequestTracker` lets a view drop
//! responses that arrive after a newer request was issued.

use std::fmt;

/// Message shown when the student dashboard cannot be loaded
pub const DASHBOARD_LOAD_FAILED: &str = "Failed to load dashboard data. Ensure backend is running.";

/// Message shown when an adviser lookup fails
pub const STUDENT_NOT_FOUND: &str = "Student not found";

/// Transcript entry appended when the advisory endpoint fails
pub const ADVISOR_UNREACHABLE: &str = "Error: Could not reach the advisor AI.";

/// Message shown when the student id field is not numeric
pub const INVALID_STUDENT_ID: &str = "Student ID must be a positive number";

/// Category of a user-facing failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Network unreachable, timeout, non-2xx or bad payload
    TransportFailure,
    /// Adviser lookup found no such student
    NotFound,
    /// Local input rejected before any request
    InvalidInput,
}

/// Static user-facing failure message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserNotice {
    pub kind: NoticeKind,
    pub message: String,
}

impl UserNotice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn dashboard_failed() -> Self {
        Self::new(NoticeKind::TransportFailure, DASHBOARD_LOAD_FAILED)
    }

    pub fn student_not_found() -> Self {
        Self::new(NoticeKind::NotFound, STUDENT_NOT_FOUND)
    }

    pub fn invalid_student_id() -> Self {
        Self::new(NoticeKind::InvalidInput, INVALID_STUDENT_ID)
    }
}

impl fmt::Display for UserNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Lifecycle of data a view fetches
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(UserNotice),
}

impl<T> ViewState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&UserNotice> {
        match self {
            ViewState::Failed(notice) => Some(notice),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// Handle for one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Monotonic request generation counter
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket; every earlier ticket becomes stale
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket {
            generation: self.latest,
        }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.generation == self.latest
    }

    /// Make every outstanding ticket stale
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
