//! Type definitions module
//! 
//! Wire types for the dashboard backend and the chat transcript.

pub mod academic;
pub mod chat;

// Re-export commonly used types
pub use academic::{
    AcademicPerformance, AdviserStudentResponse, CourseRecommendation, DashboardResponse,
    StudentId, StudentProfile, DEFAULT_CGPA_SCALE,
};
pub use chat::{AskRequest, AskResponse, ChatMessage, Sender};
