//! Input handler for the REPL using rustyline
//!
//! Line editing with persistent history. The prompt names the active view.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::history::History;
use rustyline::DefaultEditor;
use std::path::PathBuf;

use crate::app::Role;

/// History file name inside the state directory
pub const HISTORY_FILE: &str = "history";

/// Prompt shown for a view
pub fn prompt_for(role: Role) -> String {
    format!(">{}: ", role)
}

/// Readline interface and command history
pub struct InputHandler {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
    prompt: String,
}

impl InputHandler {
    /// Create input handler without persistent history
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler {
            editor,
            history_path: None,
            prompt: prompt_for(Role::Student),
        })
    }

    /// Create input handler with persistent history
    ///
    /// History file: ~/.advisor-dashboard/history
    pub fn with_history(history_file: PathBuf) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if history_file.exists() {
            if let Err(e) = editor.load_history(&history_file) {
                log::warn!("Could not load history from {}: {}", history_file.display(), e);
            }
        }

        Ok(InputHandler {
            editor,
            history_path: Some(history_file),
            prompt: prompt_for(Role::Student),
        })
    }

    pub fn set_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Read a line of input from user
    ///
    /// Returns:
    /// - Ok(Some(input)) for normal input, empty after Ctrl-C
    /// - Ok(None) for EOF (Ctrl-D)
    /// - Err on other readline errors
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    return Ok(Some(String::new()));
                }

                let _ = self.editor.add_history_entry(trimmed);
                Ok(Some(trimmed.to_string()))
            }
            // Ctrl-C abandons the current line
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }

    /// Save history to disk
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            self.editor.save_history(path)?;
        }
        Ok(())
    }

    pub fn history_len(&self) -> usize {
        self.editor.history().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_handler_creation() {
        assert!(InputHandler::new().is_ok());
    }

    #[test]
    fn test_prompt_follows_role() {
        assert_eq!(prompt_for(Role::Student), ">student: ");
        assert_eq!(prompt_for(Role::Adviser), ">adviser: ");

        let mut handler = InputHandler::new().unwrap();
        assert_eq!(handler.prompt(), ">student: ");
        handler.set_prompt(prompt_for(Role::Adviser));
        assert_eq!(handler.prompt(), ">adviser: ");
    }

    #[test]
    fn test_history_persistence() {
        let temp_dir = TempDir::new().unwrap();
        let history_path = temp_dir.path().join("state").join(HISTORY_FILE);

        {
            let mut handler = InputHandler::with_history(history_path.clone()).unwrap();
            let _ = handler.editor.add_history_entry("/load 2");
            let _ = handler.editor.add_history_entry("Why can't I take CSC401?");
            handler.save_history().unwrap();
        }

        assert!(history_path.exists());

        let handler = InputHandler::with_history(history_path).unwrap();
        assert_eq!(handler.history_len(), 2);
    }

    #[test]
    fn test_history_path() {
        let handler = InputHandler::new().unwrap();
        assert!(handler.history_path.is_none());

        let temp_dir = TempDir::new().unwrap();
        let history_path = temp_dir.path().join(HISTORY_FILE);
        let handler = InputHandler::with_history(history_path.clone()).unwrap();
        assert_eq!(handler.history_path, Some(history_path));
    }
}
