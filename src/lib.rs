//! Advisor Dashboard - academic standing and advisory chat client
//!
//! Terminal client for an academic-advising backend. Students see their
//! CGPA, credits, standing and course eligibility and can chat with an AI
//! advisor. Advisers look up any student and chat on their behalf.
//!
//! # Layout
//!
//! - **Data**: `types`, `standing`, `course_table`
//! - **Backend**: `api` (routes, HTTP client, `AdvisorBackend` seam)
//! - **Views**: `view`, `dashboard`, `chat`, `adviser`, `app`
//! - **Interface**: `cli`, `repl`, `doctor`

pub mod errors;
pub mod types;
pub mod standing;
pub mod course_table;

pub mod api;

pub mod view;
pub mod dashboard;
pub mod chat;
pub mod adviser;
pub mod app;

pub mod cli;
pub mod repl;
pub mod doctor;

// Re-export commonly used types
pub use errors::{DashboardError, Result};
pub use api::{AdvisorBackend, ApiClient, ApiProfile, Endpoints};
pub use app::{AppController, Role};
pub use standing::{derive_status, AcademicStanding, StatusBadge};
