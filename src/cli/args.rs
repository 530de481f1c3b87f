//! Command-line argument parsing for the advisor dashboard
//!
//! Provides clap-based CLI with subcommands, backend overrides and
//! verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use crate::api::ApiProfile;
use crate::app::Role;
use crate::cli::config::Config;
use crate::types::StudentId;

/// Advisor Dashboard - academic standing, course eligibility and AI advice in the terminal
#[derive(Parser, Debug)]
#[command(name = "advisor-dashboard")]
#[command(version)]
#[command(about = "Student/adviser academic dashboard with an AI advisory chat", long_about = None)]
pub struct Args {
    /// Endpoint variant: legacy (direct backend) or current (/api prefix)
    #[arg(long, global = true)]
    pub profile: Option<ApiProfile>,

    /// Backend base URL (overrides profile and config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path prefix placed before every backend route, e.g. /api
    #[arg(long, global = true)]
    pub api_prefix: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Show a student's dashboard: CGPA, credits, standing and course eligibility
    Dashboard {
        /// Student ID (defaults to the configured student)
        #[arg(short, long)]
        student: Option<StudentId>,
    },

    /// Adviser lookup of a student record
    Lookup {
        /// Student ID to look up
        student_id: String,
    },

    /// Ask the AI advisor one question about a student
    Ask {
        /// Student ID the question is about
        student_id: StudentId,

        /// Question text
        question: String,
    },

    /// Start interactive mode
    Start {
        /// Initial view
        #[arg(long, default_value = "student")]
        role: Role,
    },

    /// Display current configuration
    Config,

    /// Check configuration and backend reachability
    Doctor,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Apply command-line overrides on top of file configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(profile) = self.profile {
            config.apply_profile(profile);
        }
        if let Some(base_url) = &self.base_url {
            config.backend.base_url = Some(base_url.clone());
        }
        if let Some(prefix) = &self.api_prefix {
            config.backend.api_prefix = Some(prefix.clone());
        }
        if let Some(timeout) = self.timeout {
            config.backend.timeout_secs = timeout;
        }
        if self.no_color {
            config.display.color_output = false;
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Default log filter for this verbosity
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }

    /// Check if should show the thinking spinner
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}
