//! Backend abstraction used by the view controllers

use crate::errors::Result;
use crate::types::{AdviserStudentResponse, DashboardResponse, StudentId};
use async_trait::async_trait;

/// Operations the dashboard backend exposes
///
/// `ApiClient` is the HTTP implementation; tests substitute in-memory fakes.
#[async_trait]
pub trait AdvisorBackend: Send + Sync {
    /// `GET /dashboard/student/{id}`
    async fn fetch_dashboard(&self, id: StudentId) -> Result<DashboardResponse>;

    /// `GET /adviser/student/{id}`
    async fn fetch_adviser_student(&self, id: StudentId) -> Result<AdviserStudentResponse>;

    /// `POST /ask/{id}`, returning the advisor's reply text
    async fn ask(&self, id: StudentId, question: &str) -> Result<String>;
}
