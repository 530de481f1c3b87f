//! Display manager for the terminal UI
//!
//! Renders dashboards, adviser views and chat transcripts, and drives the
//! "Thinking..." spinner while a question is in flight.

use colored::*;
use crossterm::{
    cursor,
    execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::time::Duration;

use crate::adviser::AdviserLookup;
use crate::chat::{ChatSession, THINKING};
use crate::course_table::CourseTable;
use crate::standing::derive_status;
use crate::types::{ChatMessage, DashboardResponse, Sender, StudentId};
use crate::view::{UserNotice, ViewState};

/// Display manager for terminal output
pub struct DisplayManager {
    current_bar: Option<ProgressBar>,
    update_interval: Duration,
    show_progress: bool,
}

impl DisplayManager {
    /// Create new display manager
    ///
    /// Spinner tick: 10 FPS (100ms interval)
    pub fn new() -> Self {
        DisplayManager {
            current_bar: None,
            update_interval: Duration::from_millis(100),
            show_progress: true,
        }
    }

    /// Enable or disable the spinner
    pub fn set_show_progress(&mut self, show: bool) {
        self.show_progress = show;
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, role: &str, backend: &str) {
        let width = 64;
        let title = format!("  Academic Advisor {} - Interactive Dashboard", version);
        let info = format!("  View: {} | Backend: {}", role, backend);

        println!("\n{}", "=".repeat(width).cyan());
        println!("{}", title.bold().cyan());
        println!("{}", info.dimmed());
        println!("{}\n", "=".repeat(width).cyan());
        println!("Type a question for the advisor (or {} for commands, {} to quit)\n",
            "/help".green(), "/exit".green());
    }

    /// Start the thinking spinner
    pub fn start_thinking(&mut self) {
        self.finish_current();
        if !self.show_progress {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
        );
        pb.set_message(THINKING);
        pb.enable_steady_tick(self.update_interval);
        self.current_bar = Some(pb);
    }

    /// Stop any spinner
    pub fn finish_current(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
    }

    /// Render a dashboard view state
    pub fn show_dashboard_state(&self, state: &ViewState<DashboardResponse>) {
        match state {
            ViewState::Idle => {}
            ViewState::Loading => println!("{}", "Loading...".dimmed()),
            ViewState::Loaded(data) => print!("{}", format_dashboard(data)),
            ViewState::Failed(notice) => self.show_notice(notice),
        }
    }

    /// Render the adviser view
    pub fn show_adviser(&self, lookup: &AdviserLookup) {
        print!("{}", format_adviser(lookup));
    }

    /// Render a whole transcript
    pub fn show_transcript(&self, session: &ChatSession) {
        self.show_section(session.role().title());
        for message in session.messages() {
            self.show_chat_message(message);
        }
        if session.is_thinking() {
            println!("  {}", THINKING.dimmed());
        }
        println!();
    }

    /// Render one transcript entry
    pub fn show_chat_message(&self, message: &ChatMessage) {
        println!("{}", format_chat_message(message));
    }

    /// Display a user-facing failure
    pub fn show_notice(&self, notice: &UserNotice) {
        self.show_error(&notice.message);
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(
            io::stdout(),
            Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DisplayManager {
    fn drop(&mut self) {
        self.finish_current();
    }
}

/// Student dashboard: greeting, KPIs and course eligibility
pub fn format_dashboard(data: &DashboardResponse) -> String {
    let perf = &data.academic_performance;
    let badge = derive_status(perf.cgpa);
    let table = CourseTable::new(&data.course_recommendations);

    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "My Dashboard".bold().cyan()));
    out.push_str(&format!("Welcome back, {}\n\n", data.student_profile.name.bold()));
    out.push_str(&format!("  {:<16} {}  {}\n", "Current CGPA", perf.cgpa_display().bold(), "All-time average".dimmed()));
    out.push_str(&format!("  {:<16} {}  {}\n", "Credits Earned", perf.total_credits_attempted.to_string().bold(), "Total Units".dimmed()));
    out.push_str(&format!("  {:<16} {}  {}\n", "Status", badge.paint(), "Academic Standing".dimmed()));
    out.push_str(&format!("\n{}\n", "Course Eligibility".bold().cyan()));
    out.push_str(&table.render());
    out
}

/// Adviser view: lookup field, loaded student and standing
pub fn format_adviser(lookup: &AdviserLookup) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "Adviser Portal".bold().cyan()));
    out.push_str(&format!("{}\n", "Managing Students".dimmed()));
    out.push_str(&format!("Student ID: {}\n", lookup.student_id_input()));

    if lookup.is_loading() {
        out.push_str(&format!("{}\n", "Loading...".dimmed()));
    }

    if let Some(student) = lookup.student() {
        out.push_str(&format!("\n{}\n", viewing_line(&student.data.student_profile.name, student.student_id).bold()));
        out.push_str(&format!("  CGPA:     {}\n", student.data.academic_performance.cgpa_display()));
        out.push_str(&format!("  Standing: {}\n", student.standing().paint()));
        out.push_str(&format!("{}\n", "Ask a question on behalf of this student to verify advisory logic.".dimmed()));
    } else if lookup.notice().is_none() {
        out.push_str(&format!("{}\n", "No student loaded. Use /load <id>.".dimmed()));
    }
    out
}

fn viewing_line(name: &str, id: StudentId) -> String {
    format!("Viewing: {} (ID: {})", name, id)
}

/// One transcript line with sender tag and local time
pub fn format_chat_message(message: &ChatMessage) -> String {
    let time = message.sent_at.with_timezone(&chrono::Local).format("%H:%M");
    let tag = match message.sender {
        Sender::User => "You".green().bold(),
        Sender::Ai => "Advisor".cyan().bold(),
    };
    format!("  {} {} {}", format!("[{}]", time).dimmed(), tag, message.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AcademicPerformance, CourseRecommendation, StudentProfile};

    fn sample() -> DashboardResponse {
        DashboardResponse {
            student_profile: StudentProfile {
                name: "John Doe".to_string(),
                level: Some(300),
                enrollment_year: Some(2023),
            },
            academic_performance: AcademicPerformance {
                cgpa: 1.875,
                total_credits_attempted: 8,
                total_grade_points: Some(15.0),
                student_id: Some(1),
            },
            course_recommendations: vec![CourseRecommendation {
                course_code: "CSC201".to_string(),
                course_name: "Data Structures".to_string(),
                credits: 3,
                status: "Blocked".to_string(),
                reason: "Missing prerequisites: CSC101".to_string(),
            }],
        }
    }

    #[test]
    fn test_format_dashboard() {
        colored::control::set_override(false);
        let text = format_dashboard(&sample());

        assert!(text.contains("Welcome back, John Doe"));
        assert!(text.contains("1.88"));
        assert!(text.contains("Probation"));
        assert!(text.contains("CSC201"));
        assert!(text.contains("Missing prerequisites: CSC101"));
    }

    #[test]
    fn test_format_adviser_without_student() {
        colored::control::set_override(false);
        let lookup = AdviserLookup::new(4);
        let text = format_adviser(&lookup);
        assert!(text.contains("Student ID: 4"));
        assert!(text.contains("No student loaded"));
    }

    #[test]
    fn test_viewing_line() {
        assert_eq!(viewing_line("John Doe", 1), "Viewing: John Doe (ID: 1)");
    }

    #[test]
    fn test_format_chat_message() {
        colored::control::set_override(false);
        let line = format_chat_message(&ChatMessage::ai("CSC401 requires CSC301."));
        assert!(line.contains("Advisor"));
        assert!(line.ends_with("CSC401 requires CSC301."));
    }

    #[test]
    fn test_thinking_spinner_lifecycle() {
        let mut manager = DisplayManager::new();
        manager.start_thinking();
        assert!(manager.current_bar.is_some());

        manager.finish_current();
        assert!(manager.current_bar.is_none());
    }

    #[test]
    fn test_spinner_disabled() {
        let mut manager = DisplayManager::new();
        manager.set_show_progress(false);
        manager.start_thinking();
        assert!(manager.current_bar.is_none());
    }

    #[test]
    fn test_message_display() {
        let manager = DisplayManager::new();
        manager.show_error("Test error");
        manager.show_warning("Test warning");
        manager.show_info("Test info");
        manager.show_notice(&UserNotice::student_not_found());
    }
}
