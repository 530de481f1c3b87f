//! Course eligibility table
//!
//! Projects the backend's ordered recommendations into rows and renders
//! them as a fixed-width terminal table. Rows keep input order.

use crate::types::CourseRecommendation;
use colored::{ColoredString, Colorize};

/// Column headers in display order
pub const HEADERS: [&str; 5] = ["Code", "Course", "Credits", "Status", "Reason"];

/// Terminal style for the statuses the backend is known to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Eligible,
    Blocked,
    Completed,
}

impl BadgeStyle {
    /// Look up a style by exact status; anything else gets none
    pub fn for_status(status: &str) -> Option<Self> {
        match status {
            "Eligible" => Some(BadgeStyle::Eligible),
            "Blocked" => Some(BadgeStyle::Blocked),
            "Completed" => Some(BadgeStyle::Completed),
            _ => None,
        }
    }

    fn paint(&self, text: &str) -> ColoredString {
        match self {
            BadgeStyle::Eligible => text.green(),
            BadgeStyle::Blocked => text.red(),
            BadgeStyle::Completed => text.blue(),
        }
    }
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRow {
    pub code: String,
    pub name: String,
    pub credits: String,
    pub status: String,
    pub style_key: String,
    pub reason: String,
}

impl CourseRow {
    fn cells(&self) -> [&str; 5] {
        [&self.code, &self.name, &self.credits, &self.status, &self.reason]
    }
}

impl From<&CourseRecommendation> for CourseRow {
    fn from(course: &CourseRecommendation) -> Self {
        CourseRow {
            code: course.course_code.clone(),
            name: course.course_name.clone(),
            credits: course.credits.to_string(),
            status: course.status.clone(),
            style_key: course.style_key(),
            reason: course.reason.clone(),
        }
    }
}

/// Course eligibility table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseTable {
    rows: Vec<CourseRow>,
}

impl CourseTable {
    pub fn new(courses: &[CourseRecommendation]) -> Self {
        Self {
            rows: courses.iter().map(CourseRow::from).collect(),
        }
    }

    pub fn rows(&self) -> &[CourseRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> [usize; 5] {
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Render header, separator and one line per row
    ///
    /// Padding is computed before coloring so escape codes never shift columns.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        let header: Vec<String> = HEADERS
            .iter()
            .zip(widths)
            .map(|(h, w)| format!("{:<w$}", h, w = w))
            .collect();
        out.push_str(&header.join("  ").bold().to_string());
        out.push('\n');

        let total = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        out.push_str(&"-".repeat(total));
        out.push('\n');

        for row in &self.rows {
            let mut cells = Vec::with_capacity(5);
            for (i, (cell, w)) in row.cells().into_iter().zip(widths).enumerate() {
                let padded = format!("{:<w$}", cell, w = w);
                let styled = match i {
                    0 => padded.bold().to_string(),
                    3 => match BadgeStyle::for_status(&row.status) {
                        Some(style) => style.paint(&padded).to_string(),
                        None => padded,
                    },
                    _ => padded,
                };
                cells.push(styled);
            }
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        out
    }
}
