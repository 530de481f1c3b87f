//! Adviser student lookup
//!
//! The adviser types a student id and loads that student's record. A
//! failed lookup clears whatever was loaded before. While a student is
//! loaded the adviser can chat on their behalf.

use crate::api::AdvisorBackend;
use crate::chat::{ChatRole, ChatSession, SendOutcome};
use crate::errors::Result;
use crate::standing::{derive_status, StatusBadge};
use crate::types::{AdviserStudentResponse, StudentId, DEFAULT_CGPA_SCALE};
use crate::view::{RequestTicket, RequestTracker, UserNotice};

/// Student currently shown to the adviser
#[derive(Debug)]
pub struct LoadedStudent {
    pub student_id: StudentId,
    pub data: AdviserStudentResponse,
    pub chat: ChatSession,
}

impl LoadedStudent {
    pub fn standing(&self) -> StatusBadge {
        derive_status(self.data.academic_performance.cgpa)
    }
}

/// Pending lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket {
    pub student_id: StudentId,
    request: RequestTicket,
}

/// Adviser lookup view state
#[derive(Debug)]
pub struct AdviserLookup {
    student_id_input: String,
    student: Option<LoadedStudent>,
    loading: bool,
    notice: Option<UserNotice>,
    tracker: RequestTracker,
    cgpa_scale: f64,
}

impl AdviserLookup {
    pub fn new(initial_id: StudentId) -> Self {
        Self::with_scale(initial_id, DEFAULT_CGPA_SCALE)
    }

    pub fn with_scale(initial_id: StudentId, cgpa_scale: f64) -> Self {
        Self {
            student_id_input: initial_id.to_string(),
            student: None,
            loading: false,
            notice: None,
            tracker: RequestTracker::new(),
            cgpa_scale,
        }
    }

    /// Update the student id field
    pub fn set_student_id_input(&mut self, input: &str) {
        self.student_id_input = input.trim().to_string();
    }

    pub fn student_id_input(&self) -> &str {
        &self.student_id_input
    }

    pub fn student(&self) -> Option<&LoadedStudent> {
        self.student.as_ref()
    }

    pub fn student_mut(&mut self) -> Option<&mut LoadedStudent> {
        self.student.as_mut()
    }

    pub fn student_data(&self) -> Option<&AdviserStudentResponse> {
        self.student.as_ref().map(|s| &s.data)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&UserNotice> {
        self.notice.as_ref()
    }

    /// Validate the id field and start a lookup
    pub fn begin_lookup(&mut self) -> std::result::Result<LookupTicket, UserNotice> {
        let student_id = match self.student_id_input.parse::<StudentId>() {
            Ok(id) if id > 0 => id,
            _ => {
                let notice = UserNotice::invalid_student_id();
                self.notice = Some(notice.clone());
                return Err(notice);
            }
        };

        self.loading = true;
        self.notice = None;
        Ok(LookupTicket {
            student_id,
            request: self.tracker.begin(),
        })
    }

    /// Apply a finished lookup; returns the notice on failure
    pub fn complete_lookup(
        &mut self,
        ticket: LookupTicket,
        result: Result<AdviserStudentResponse>,
    ) -> Option<UserNotice> {
        if !self.tracker.is_current(ticket.request) {
            log::info!(
                "Discarding stale adviser lookup for student {}",
                ticket.student_id
            );
            return None;
        }
        self.loading = false;

        let checked = result.and_then(|data| {
            data.validate(self.cgpa_scale)?;
            Ok(data)
        });

        match checked {
            Ok(data) => {
                let same_student =
                    self.student.as_ref().map(|s| s.student_id) == Some(ticket.student_id);
                if same_student {
                    if let Some(current) = self.student.as_mut() {
                        current.data = data;
                    }
                } else {
                    self.student = Some(LoadedStudent {
                        student_id: ticket.student_id,
                        data,
                        chat: ChatSession::new(ChatRole::Adviser),
                    });
                }
                None
            }
            Err(e) => {
                if e.is_not_found() {
                    log::info!("Student {} not found", ticket.student_id);
                } else {
                    log::warn!("Adviser lookup for student {} failed: {}", ticket.student_id, e);
                }
                self.student = None;
                let notice = UserNotice::student_not_found();
                self.notice = Some(notice.clone());
                Some(notice)
            }
        }
    }

    /// Run the `Load Student` action
    pub async fn load_student<B: AdvisorBackend + ?Sized>(
        &mut self,
        backend: &B,
    ) -> Option<UserNotice> {
        let ticket = match self.begin_lookup() {
            Ok(ticket) => ticket,
            Err(notice) => return Some(notice),
        };
        let result = backend.fetch_adviser_student(ticket.student_id).await;
        self.complete_lookup(ticket, result)
    }

    /// Ask on behalf of the loaded student; `None` when nobody is loaded
    pub async fn ask<B: AdvisorBackend + ?Sized>(
        &mut self,
        backend: &B,
        question: &str,
    ) -> Option<SendOutcome> {
        let student = self.student.as_mut()?;
        let id = student.student_id;
        Some(student.chat.send(backend, id, question).await)
    }
}
