//! Student dashboard controller
//!
//! Loads `GET /dashboard/student/{id}` into a `ViewState`. Failures of any
//! kind become the same static notice; results from superseded loads are
//! dropped.

use crate::api::AdvisorBackend;
use crate::course_table::CourseTable;
use crate::errors::Result;
use crate::standing::{derive_status, StatusBadge};
use crate::types::{DashboardResponse, StudentId, DEFAULT_CGPA_SCALE};
use crate::view::{RequestTicket, RequestTracker, UserNotice, ViewState};

/// Pending dashboard load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub student_id: StudentId,
    request: RequestTicket,
}

/// Whether a completed load was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Stale,
}

/// Student dashboard view state
#[derive(Debug)]
pub struct StudentDashboard {
    student_id: Option<StudentId>,
    state: ViewState<DashboardResponse>,
    tracker: RequestTracker,
    cgpa_scale: f64,
}

impl StudentDashboard {
    pub fn new() -> Self {
        Self::with_scale(DEFAULT_CGPA_SCALE)
    }

    pub fn with_scale(cgpa_scale: f64) -> Self {
        Self {
            student_id: None,
            state: ViewState::Idle,
            tracker: RequestTracker::new(),
            cgpa_scale,
        }
    }

    /// Mark a load as started and hand back its ticket
    pub fn begin_load(&mut self, student_id: StudentId) -> LoadTicket {
        self.student_id = Some(student_id);
        self.state = ViewState::Loading;
        LoadTicket {
            student_id,
            request: self.tracker.begin(),
        }
    }

    /// Apply a finished load unless a newer one has started since
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<DashboardResponse>,
    ) -> LoadOutcome {
        if !self.tracker.is_current(ticket.request) {
            log::info!(
                "Discarding stale dashboard response for student {}",
                ticket.student_id
            );
            return LoadOutcome::Stale;
        }

        let checked = result.and_then(|data| {
            data.validate(self.cgpa_scale)?;
            Ok(data)
        });

        self.state = match checked {
            Ok(data) => ViewState::Loaded(data),
            Err(e) => {
                log::warn!("Dashboard load for student {} failed: {}", ticket.student_id, e);
                ViewState::Failed(UserNotice::dashboard_failed())
            }
        };
        LoadOutcome::Applied
    }

    /// Fetch fresh dashboard data for a student
    pub async fn load<B: AdvisorBackend + ?Sized>(
        &mut self,
        backend: &B,
        student_id: StudentId,
    ) -> &ViewState<DashboardResponse> {
        let ticket = self.begin_load(student_id);
        let result = backend.fetch_dashboard(student_id).await;
        self.complete_load(ticket, result);
        &self.state
    }

    pub fn state(&self) -> &ViewState<DashboardResponse> {
        &self.state
    }

    pub fn student_id(&self) -> Option<StudentId> {
        self.student_id
    }

    pub fn data(&self) -> Option<&DashboardResponse> {
        self.state.data()
    }

    /// Standing badge for the loaded student
    pub fn standing(&self) -> Option<StatusBadge> {
        self.data()
            .map(|d| derive_status(d.academic_performance.cgpa))
    }

    /// Course eligibility table for the loaded student
    pub fn course_table(&self) -> Option<CourseTable> {
        self.data()
            .map(|d| CourseTable::new(&d.course_recommendations))
    }
}

impl Default for StudentDashboard {
    fn default() -> Self {
        Self::new()
    }
}
