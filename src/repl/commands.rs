//! Slash commands of the interactive dashboard
//!
//! Parsing only; the session runs the commands that need the backend.

use colored::*;

use crate::app::Role;

/// REPL command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Switch view
    Role { role: Role },
    /// Adviser lookup of a student id, validated on load
    Load { student_id: String },
    /// Refetch and show the active view
    Dashboard,
    Transcript,
    /// Start the active chat over
    Reset,
    Clear,
    Exit,
    /// Known command with bad arguments
    Invalid { message: String },
    Unknown { input: String },
}

/// Parser for REPL commands
pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        CommandHandler
    }

    /// Parse input string into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        if !trimmed.starts_with('/') {
            return Command::Unknown { input: input.to_string() };
        }

        let parts: Vec<&str> = trimmed[1..].split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown { input: input.to_string() };
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "role" | "view" => match parts.get(1) {
                Some(value) => match value.parse::<Role>() {
                    Ok(role) => Command::Role { role },
                    Err(e) => Command::Invalid { message: e.to_string() },
                },
                None => Command::Invalid {
                    message: "Usage: /role <student|adviser>".to_string(),
                },
            },
            "load" => match parts.get(1) {
                Some(id) => Command::Load { student_id: id.to_string() },
                None => Command::Invalid {
                    message: "Usage: /load <student id>".to_string(),
                },
            },
            "dashboard" | "refresh" => Command::Dashboard,
            "transcript" | "chat" => Command::Transcript,
            "reset" => Command::Reset,
            "clear" | "cls" => Command::Clear,
            _ => Command::Unknown { input: input.to_string() },
        }
    }

    /// Display help information
    pub fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = vec![
            ("/help, /h", "Show this help message"),
            ("/role <student|adviser>", "Switch view"),
            ("/load <id>", "Adviser: load a student record"),
            ("/dashboard", "Reload and show the current view"),
            ("/transcript", "Show the chat transcript"),
            ("/reset", "Start the current chat over"),
            ("/clear, /cls", "Clear screen"),
            ("/exit, /quit, /q", "Exit"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<26} {}", cmd.green(), desc);
        }

        println!("\n{}", "Usage:".bold());
        println!("  - Type a question for the advisor directly (no / prefix)");
        println!("  - Use {} for input history", "UP/DOWN arrows".cyan());
        println!("  - Press {} or {} to exit", "Ctrl-D".cyan(), "/exit".cyan());
        println!();
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if input is a command (starts with /)
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}
