//! Backend client module
//! 
//! Provides the HTTP client for the dashboard backend and the trait
//! views are written against.

pub mod backend;
pub mod client;
pub mod endpoints;

// Re-export commonly used types
pub use backend::AdvisorBackend;
pub use client::{ApiClient, REQUEST_TIMEOUT};
pub use endpoints::{ApiProfile, Endpoints, CURRENT_ORIGIN, LEGACY_BASE_URL};
