//! Academic record types returned by the dashboard backend
//!
//! These mirror the JSON the backend sends for the student dashboard and
//! the adviser lookup. Course order is the display order and is never
//! re-sorted on the client.

use crate::errors::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// External student identifier
pub type StudentId = u64;

/// Upper bound of the grading scale when none is configured
pub const DEFAULT_CGPA_SCALE: f64 = 4.0;

/// Student identity as shown in the dashboard header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_year: Option<u32>,
}

/// Backend-computed performance metrics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AcademicPerformance {
    pub cgpa: f64,
    pub total_credits_attempted: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_grade_points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<StudentId>,
}

impl AcademicPerformance {
    /// CGPA formatted to two decimals, as every view displays it
    pub fn cgpa_display(&self) -> String {
        format!("{:.2}", self.cgpa)
    }

    fn validate(&self, scale: f64) -> Result<()> {
        if !self.cgpa.is_finite() {
            return Err(DashboardError::InvalidPayload(format!(
                "cgpa is not a finite number: {}",
                self.cgpa
            )));
        }
        if self.cgpa < 0.0 || self.cgpa > scale {
            return Err(DashboardError::InvalidPayload(format!(
                "cgpa {} outside [0.0, {}]",
                self.cgpa, scale
            )));
        }
        Ok(())
    }
}

/// Eligibility verdict for one course
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseRecommendation {
    pub course_code: String,
    pub course_name: String,
    pub credits: u32,
    /// Opaque status echoed into a style key; not checked against a closed set
    pub status: String,
    pub reason: String,
}

impl CourseRecommendation {
    /// Style key derived from the status, e.g. `status-Blocked`
    pub fn style_key(&self) -> String {
        format!("status-{}", self.status)
    }
}

/// Payload of `GET /dashboard/student/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardResponse {
    pub student_profile: StudentProfile,
    pub academic_performance: AcademicPerformance,
    #[serde(default)]
    pub course_recommendations: Vec<CourseRecommendation>,
}

impl DashboardResponse {
    /// Check the payload against the data contract
    pub fn validate(&self, scale: f64) -> Result<()> {
        self.academic_performance.validate(scale)?;
        validate_courses(&self.course_recommendations)
    }
}

/// Payload of `GET /adviser/student/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdviserStudentResponse {
    pub student_profile: StudentProfile,
    pub academic_performance: AcademicPerformance,
    #[serde(default)]
    pub course_recommendations: Vec<CourseRecommendation>,
}

impl AdviserStudentResponse {
    /// Check the payload against the data contract
    pub fn validate(&self, scale: f64) -> Result<()> {
        self.academic_performance.validate(scale)?;
        validate_courses(&self.course_recommendations)
    }
}

fn validate_courses(courses: &[CourseRecommendation]) -> Result<()> {
    let mut seen = HashSet::with_capacity(courses.len());
    for course in courses {
        if course.credits == 0 {
            return Err(DashboardError::InvalidPayload(format!(
                "course {} has zero credits",
                course.course_code
            )));
        }
        if !seen.insert(course.course_code.as_str()) {
            return Err(DashboardError::InvalidPayload(format!(
                "duplicate course code {}",
                course.course_code
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, credits: u32) -> CourseRecommendation {
        CourseRecommendation {
            course_code: code.to_string(),
            course_name: "Data Structures".to_string(),
            credits,
            status: "Blocked".to_string(),
            reason: "Missing prerequisites: CSC101".to_string(),
        }
    }

    fn dashboard(cgpa: f64, courses: Vec<CourseRecommendation>) -> DashboardResponse {
        DashboardResponse {
            student_profile: StudentProfile {
                name: "John Doe".to_string(),
                level: Some(300),
                enrollment_year: Some(2023),
            },
            academic_performance: AcademicPerformance {
                cgpa,
                total_credits_attempted: 8,
                total_grade_points: None,
                student_id: Some(1),
            },
            course_recommendations: courses,
        }
    }

    #[test]
    fn test_decode_backend_dashboard() {
        let json = r#"{
            "student_profile": {"name": "John Doe", "level": 300, "enrollment_year": 2023},
            "academic_performance": {"student_id": 1, "cgpa": 2.25, "total_credits_attempted": 8, "total_grade_points": 18.0},
            "course_recommendations": [
                {"course_code": "MTH101", "course_name": "Calculus I", "credits": 3, "status": "Completed", "reason": "Passed with A"},
                {"course_code": "CSC201", "course_name": "Data Structures", "credits": 3, "status": "Blocked", "reason": "Missing prerequisites: CSC101"}
            ]
        }"#;

        let data: DashboardResponse = serde_json::from_str(json).unwrap();
        assert_eq!(data.student_profile.name, "John Doe");
        assert_eq!(data.academic_performance.total_credits_attempted, 8);
        assert_eq!(data.course_recommendations.len(), 2);
        assert_eq!(data.course_recommendations[0].course_code, "MTH101");
        assert_eq!(data.course_recommendations[1].status, "Blocked");
        assert!(data.validate(DEFAULT_CGPA_SCALE).is_ok());
    }

    #[test]
    fn test_decode_minimal_adviser_payload() {
        let json = r#"{
            "student_profile": {"name": "Jane Roe"},
            "academic_performance": {"cgpa": 1.5, "total_credits_attempted": 12}
        }"#;

        let data: AdviserStudentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(data.student_profile.level, None);
        assert!(data.course_recommendations.is_empty());
        assert_eq!(data.academic_performance.cgpa_display(), "1.50");
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let json = r#"{"student_profile": {}, "academic_performance": {"cgpa": 3.0, "total_credits_attempted": 1}}"#;
        assert!(serde_json::from_str::<AdviserStudentResponse>(json).is_err());
    }

    #[test]
    fn test_validate_cgpa_out_of_scale() {
        assert!(dashboard(4.5, vec![]).validate(4.0).is_err());
        assert!(dashboard(4.5, vec![]).validate(5.0).is_ok());
        assert!(dashboard(-0.1, vec![]).validate(4.0).is_err());
        assert!(dashboard(f64::NAN, vec![]).validate(4.0).is_err());
    }

    #[test]
    fn test_validate_zero_credits() {
        let data = dashboard(3.0, vec![course("CSC201", 0)]);
        assert!(matches!(
            data.validate(DEFAULT_CGPA_SCALE),
            Err(DashboardError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_validate_duplicate_codes() {
        let data = dashboard(3.0, vec![course("CSC201", 3), course("CSC201", 3)]);
        let err = data.validate(DEFAULT_CGPA_SCALE).unwrap_err();
        assert!(err.to_string().contains("duplicate course code CSC201"));
    }

    #[test]
    fn test_style_key_echoes_status() {
        let mut c = course("CSC499", 6);
        c.status = "waitlisted".to_string();
        assert_eq!(c.style_key(), "status-waitlisted");
    }
}
