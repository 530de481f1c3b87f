//! Top-level view controller
//!
//! Owns the active role, the signed-in student's id and every view's
//! state. Exactly one of the student and adviser views is active.

use crate::adviser::AdviserLookup;
use crate::api::AdvisorBackend;
use crate::chat::{ChatRole, ChatSession, SendOutcome};
use crate::dashboard::StudentDashboard;
use crate::errors::DashboardError;
use crate::types::{StudentId, DEFAULT_CGPA_SCALE};
use std::fmt;
use std::str::FromStr;

/// Which top-level view is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Adviser,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Adviser => "adviser",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "adviser" | "advisor" => Ok(Role::Adviser),
            other => Err(DashboardError::InvalidInput(format!(
                "Unknown role '{}' (expected student or adviser)",
                other
            ))),
        }
    }
}

/// Application state shared by the CLI and the REPL
#[derive(Debug)]
pub struct AppController {
    role: Role,
    student_id: StudentId,
    dashboard: StudentDashboard,
    student_chat: ChatSession,
    adviser: AdviserLookup,
}

impl AppController {
    pub fn new(student_id: StudentId) -> Self {
        Self::with_scale(student_id, DEFAULT_CGPA_SCALE)
    }

    pub fn with_scale(student_id: StudentId, cgpa_scale: f64) -> Self {
        Self {
            role: Role::Student,
            student_id,
            dashboard: StudentDashboard::with_scale(cgpa_scale),
            student_chat: ChatSession::new(ChatRole::Student),
            adviser: AdviserLookup::with_scale(student_id, cgpa_scale),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn student_id(&self) -> StudentId {
        self.student_id
    }

    pub fn dashboard(&self) -> &StudentDashboard {
        &self.dashboard
    }

    pub fn adviser(&self) -> &AdviserLookup {
        &self.adviser
    }

    pub fn adviser_mut(&mut self) -> &mut AdviserLookup {
        &mut self.adviser
    }

    pub fn student_chat(&self) -> &ChatSession {
        &self.student_chat
    }

    /// Select a view; true when the student dashboard should be fetched
    pub fn switch_role(&mut self, role: Role) -> bool {
        if self.role != role {
            log::info!("Switching view from {} to {}", self.role, role);
        }
        self.role = role;
        role == Role::Student
    }

    /// Select a view and fetch what it needs
    pub async fn enter_role<B: AdvisorBackend + ?Sized>(&mut self, backend: &B, role: Role) {
        if self.switch_role(role) {
            self.load_dashboard(backend).await;
        }
    }

    /// Fetch the signed-in student's dashboard
    pub async fn load_dashboard<B: AdvisorBackend + ?Sized>(&mut self, backend: &B) {
        let id = self.student_id;
        self.dashboard.load(backend, id).await;
    }

    /// Chat transcript of the active view, if it has one
    pub fn active_chat(&self) -> Option<&ChatSession> {
        match self.role {
            Role::Student => Some(&self.student_chat),
            Role::Adviser => self.adviser.student().map(|s| &s.chat),
        }
    }

    /// Send a question through the active view's chat
    ///
    /// `None` in the adviser view when no student is loaded.
    pub async fn ask<B: AdvisorBackend + ?Sized>(
        &mut self,
        backend: &B,
        question: &str,
    ) -> Option<SendOutcome> {
        match self.role {
            Role::Student => {
                let id = self.student_id;
                Some(self.student_chat.send(backend, id, question).await)
            }
            Role::Adviser => self.adviser.ask(backend, question).await,
        }
    }

    /// Start the active view's chat over
    pub fn reset_chat(&mut self) {
        match self.role {
            Role::Student => self.student_chat.reset(),
            Role::Adviser => {
                if let Some(student) = self.adviser.student_mut() {
                    student.chat.reset();
                }
            }
        }
    }
}
