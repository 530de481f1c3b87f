//! REPL (Read-Eval-Print Loop) for the interactive dashboard
//!
//! Plain lines go to the advisory chat of the active view, slash commands
//! switch views, load students and show transcripts.

pub mod commands;
pub mod display;
pub mod input;

use anyhow::Result;
use std::path::PathBuf;

use crate::api::AdvisorBackend;
use crate::app::{AppController, Role};
use crate::chat::SendOutcome;
use crate::repl::commands::{is_command, Command, CommandHandler};
pub use crate::repl::display::DisplayManager;
use crate::repl::input::{prompt_for, InputHandler};

/// Interactive session over one backend
pub struct ReplSession<B: AdvisorBackend> {
    input_handler: InputHandler,
    command_handler: CommandHandler,
    display_manager: DisplayManager,
    app: AppController,
    backend: B,
}

impl<B: AdvisorBackend> ReplSession<B> {
    /// Create REPL session without persistent history
    pub fn new(app: AppController, backend: B) -> Result<Self> {
        Ok(Self::assemble(InputHandler::new()?, app, backend))
    }

    /// Create REPL session with persistent history
    pub fn with_history(app: AppController, backend: B, history_path: PathBuf) -> Result<Self> {
        Ok(Self::assemble(InputHandler::with_history(history_path)?, app, backend))
    }

    fn assemble(input_handler: InputHandler, app: AppController, backend: B) -> Self {
        ReplSession {
            input_handler,
            command_handler: CommandHandler::new(),
            display_manager: DisplayManager::new(),
            app,
            backend,
        }
    }

    /// Show welcome banner
    pub fn show_welcome(&self, version: &str, backend_root: &str) {
        self.display_manager
            .show_banner(version, self.app.role().as_str(), backend_root);
    }

    /// Enter the initial view
    pub async fn start(&mut self, role: Role) {
        self.switch_role(role).await;
    }

    /// Read, dispatch and render until exit or EOF
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let input = match self.input_handler.read_line()? {
                Some(input) => input,
                None => break,
            };

            if !self.handle_input(&input).await? {
                break;
            }
        }
        self.save()
    }

    /// Handle one line (command or question)
    ///
    /// Returns true if the session should continue, false to exit
    pub async fn handle_input(&mut self, input: &str) -> Result<bool> {
        if input.trim().is_empty() {
            return Ok(true);
        }

        if is_command(input) {
            let command = self.command_handler.parse(input);
            return self.execute(command).await;
        }

        self.ask(input).await;
        Ok(true)
    }

    async fn execute(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Help => self.command_handler.show_help(),
            Command::Exit => {
                println!("Goodbye!");
                return Ok(false);
            }
            Command::Role { role } => self.switch_role(role).await,
            Command::Load { student_id } => self.load_student(&student_id).await,
            Command::Dashboard => {
                match self.app.role() {
                    Role::Student => self.app.load_dashboard(&self.backend).await,
                    Role::Adviser => {
                        if self.app.adviser().student().is_some() {
                            self.app.adviser_mut().load_student(&self.backend).await;
                        }
                    }
                }
                self.render_view();
            }
            Command::Transcript => match self.app.active_chat() {
                Some(chat) => self.display_manager.show_transcript(chat),
                None => self.display_manager.show_warning("No student loaded."),
            },
            Command::Reset => {
                self.app.reset_chat();
                self.display_manager.show_info("Chat cleared.");
            }
            Command::Clear => self.display_manager.clear_screen()?,
            Command::Invalid { message } => self.display_manager.show_error(&message),
            Command::Unknown { input } => {
                self.display_manager
                    .show_error(&format!("Unknown command: {}", input.trim()));
                self.display_manager.show_info("Type /help for available commands");
            }
        }
        Ok(true)
    }

    async fn switch_role(&mut self, role: Role) {
        self.app.enter_role(&self.backend, role).await;
        self.input_handler.set_prompt(prompt_for(role));
        self.render_view();
    }

    async fn load_student(&mut self, student_id: &str) {
        if self.app.role() != Role::Adviser {
            self.display_manager
                .show_warning("Switch to the adviser view first: /role adviser");
            return;
        }
        self.app.adviser_mut().set_student_id_input(student_id);
        self.app.adviser_mut().load_student(&self.backend).await;
        self.render_view();
    }

    async fn ask(&mut self, question: &str) {
        if self.app.active_chat().is_none() {
            self.display_manager
                .show_warning("Load a student with /load <id> before asking.");
            return;
        }

        self.display_manager.start_thinking();
        let outcome = self.app.ask(&self.backend, question).await;
        self.display_manager.finish_current();

        match outcome {
            Some(SendOutcome::Answered(_)) | Some(SendOutcome::Failed) => {
                if let Some(last) = self.app.active_chat().and_then(|c| c.messages().last()) {
                    self.display_manager.show_chat_message(last);
                }
            }
            Some(SendOutcome::Busy) => self
                .display_manager
                .show_warning("Still waiting for the previous answer."),
            Some(SendOutcome::Ignored) | Some(SendOutcome::Discarded) | None => {}
        }
    }

    fn render_view(&self) {
        match self.app.role() {
            Role::Student => self
                .display_manager
                .show_dashboard_state(self.app.dashboard().state()),
            Role::Adviser => {
                let lookup = self.app.adviser();
                self.display_manager.show_adviser(lookup);
                if let Some(notice) = lookup.notice() {
                    self.display_manager.show_notice(notice);
                }
            }
        }
    }

    pub fn app(&self) -> &AppController {
        &self.app
    }

    pub fn display_mut(&mut self) -> &mut DisplayManager {
        &mut self.display_manager
    }

    /// Persist input history
    pub fn save(&mut self) -> Result<()> {
        self.input_handler.save_history()
    }
}
