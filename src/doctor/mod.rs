//! Doctor command for setup diagnostics
//!
//! Checks the configuration, the state directory and whether the backend
//! answers the dashboard and adviser routes.

use colored::*;

use crate::api::AdvisorBackend;
use crate::cli::Config;
use crate::errors::DashboardError;

/// Health check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Pass,
    Warn(String),
    Fail(String),
}

/// Individual health check
#[derive(Debug)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
}

impl HealthCheck {
    fn new(name: &str, status: HealthStatus) -> Self {
        Self {
            name: name.to_string(),
            status,
        }
    }
}

/// Doctor diagnostics
pub struct Doctor<'a, B: AdvisorBackend + ?Sized> {
    config: &'a Config,
    backend: &'a B,
}

impl<'a, B: AdvisorBackend + ?Sized> Doctor<'a, B> {
    pub fn new(config: &'a Config, backend: &'a B) -> Self {
        Self { config, backend }
    }

    /// Run all health checks
    pub async fn run_diagnostics(&self) -> Vec<HealthCheck> {
        vec![
            self.check_config(),
            self.check_state_dir(),
            self.check_dashboard_route().await,
            self.check_adviser_route().await,
        ]
    }

    fn check_config(&self) -> HealthCheck {
        match self.config.validate() {
            Ok(()) => HealthCheck::new("Configuration", HealthStatus::Pass),
            Err(e) => HealthCheck::new("Configuration", HealthStatus::Fail(e.to_string())),
        }
    }

    fn check_state_dir(&self) -> HealthCheck {
        let name = "State Directory";
        let dir = match Config::state_dir() {
            Some(dir) => dir,
            None => {
                return HealthCheck::new(
                    name,
                    HealthStatus::Warn("No home directory; history is not saved".to_string()),
                )
            }
        };

        if !dir.exists() {
            return HealthCheck::new(
                name,
                HealthStatus::Warn(format!("{} will be created on first use", dir.display())),
            );
        }

        let probe = dir.join(".write_test");
        match std::fs::write(&probe, "ok") {
            Ok(()) => {
                let _ = std::fs::remove_file(&probe);
                HealthCheck::new(name, HealthStatus::Pass)
            }
            Err(e) => HealthCheck::new(
                name,
                HealthStatus::Fail(format!("{} is not writable: {}", dir.display(), e)),
            ),
        }
    }

    async fn check_dashboard_route(&self) -> HealthCheck {
        let id = self.config.student.default_id;
        let result = self.backend.fetch_dashboard(id).await;
        route_check("Dashboard Route", id, result.map(|_| ()))
    }

    async fn check_adviser_route(&self) -> HealthCheck {
        let id = self.config.student.default_id;
        let result = self.backend.fetch_adviser_student(id).await;
        route_check("Adviser Route", id, result.map(|_| ()))
    }
}

/// Display diagnostics results
pub fn display_results(checks: &[HealthCheck]) {
    println!("\n{}\n", "Advisor Dashboard Diagnostics".bold().cyan());
    println!("{:<20} {}", "Check", "Status");
    println!("{}", "=".repeat(50));

    for check in checks {
        let message = match &check.status {
            HealthStatus::Pass => "PASS".green(),
            HealthStatus::Warn(msg) => format!("WARN: {}", msg).yellow(),
            HealthStatus::Fail(msg) => format!("FAIL: {}", msg).red(),
        };
        println!("{:<20} {}", check.name, message);
    }

    println!();
}

/// True when no check failed
pub fn overall_status(checks: &[HealthCheck]) -> bool {
    !checks.iter().any(|c| matches!(c.status, HealthStatus::Fail(_)))
}

fn route_check(name: &str, id: u64, result: Result<(), DashboardError>) -> HealthCheck {
    match result {
        Ok(()) => HealthCheck::new(name, HealthStatus::Pass),
        Err(e) if e.is_not_found() => HealthCheck::new(
            name,
            HealthStatus::Warn(format!("Backend reachable but student {} not found", id)),
        ),
        Err(e) => HealthCheck::new(name, HealthStatus::Fail(e.to_string())),
    }
}
