//! Advisory chat session
//!
//! Keeps an append-only transcript seeded with a greeting. A question is
//! appended as soon as it is submitted; the reply (or a fixed error line)
//! follows when the request settles. Only one question may be in flight.

use crate::api::AdvisorBackend;
use crate::errors::Result;
use crate::types::{ChatMessage, Sender, StudentId};
use crate::view::{RequestTicket, RequestTracker, ADVISOR_UNREACHABLE};

/// First transcript entry of every session
pub const GREETING: &str =
    "Hello! I can help you with course planning or explain your GPA. Ask me anything!";

/// Indicator shown while a question is in flight
pub const THINKING: &str = "Thinking...";

/// Which view hosts the chat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    Student,
    Adviser,
}

impl ChatRole {
    pub fn title(&self) -> &'static str {
        match self {
            ChatRole::Student => "Ask AI Advisor",
            ChatRole::Adviser => "AI Simulation",
        }
    }
}

/// Question accepted and waiting for a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAsk {
    pub student_id: StudentId,
    pub question: String,
    request: RequestTicket,
}

/// Result of a send attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank question; transcript untouched
    Ignored,
    /// Another question is still in flight; transcript untouched
    Busy,
    /// Reply appended
    Answered(String),
    /// Error line appended
    Failed,
    /// Session was reset while the request was in flight
    Discarded,
}

/// Append-only transcript for one chat view
#[derive(Debug)]
pub struct ChatSession {
    role: ChatRole,
    messages: Vec<ChatMessage>,
    in_flight: bool,
    tracker: RequestTracker,
}

impl ChatSession {
    pub fn new(role: ChatRole) -> Self {
        Self {
            role,
            messages: vec![ChatMessage::ai(GREETING)],
            in_flight: false,
            tracker: RequestTracker::new(),
        }
    }

    pub fn role(&self) -> ChatRole {
        self.role
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True while a question awaits its reply
    pub fn is_thinking(&self) -> bool {
        self.in_flight
    }

    /// Accept a question, appending it right away
    ///
    /// Returns `Err` with the outcome when nothing was submitted.
    pub fn submit(
        &mut self,
        student_id: StudentId,
        question: &str,
    ) -> std::result::Result<PendingAsk, SendOutcome> {
        let question = question.trim();
        if question.is_empty() {
            return Err(SendOutcome::Ignored);
        }
        if self.in_flight {
            return Err(SendOutcome::Busy);
        }

        self.messages.push(ChatMessage::user(question));
        self.in_flight = true;

        Ok(PendingAsk {
            student_id,
            question: question.to_string(),
            request: self.tracker.begin(),
        })
    }

    /// Settle a pending question with the backend's answer
    pub fn resolve(&mut self, pending: PendingAsk, reply: Result<String>) -> SendOutcome {
        if !self.tracker.is_current(pending.request) {
            log::info!(
                "Dropping advisor reply for student {} after session reset",
                pending.student_id
            );
            return SendOutcome::Discarded;
        }
        self.in_flight = false;

        match reply {
            Ok(text) => {
                self.messages.push(ChatMessage::ai(text.clone()));
                SendOutcome::Answered(text)
            }
            Err(e) => {
                log::warn!("Advisor request for student {} failed: {}", pending.student_id, e);
                self.messages.push(ChatMessage::ai(ADVISOR_UNREACHABLE));
                SendOutcome::Failed
            }
        }
    }

    /// Submit a question and wait for the reply
    pub async fn send<B: AdvisorBackend + ?Sized>(
        &mut self,
        backend: &B,
        student_id: StudentId,
        question: &str,
    ) -> SendOutcome {
        let pending = match self.submit(student_id, question) {
            Ok(pending) => pending,
            Err(outcome) => return outcome,
        };
        let reply = backend.ask(student_id, &pending.question).await;
        self.resolve(pending, reply)
    }

    /// Start over with only the greeting; in-flight replies are dropped
    pub fn reset(&mut self) {
        self.messages = vec![ChatMessage::ai(GREETING)];
        self.in_flight = false;
        self.tracker.invalidate();
    }

    /// Transcript as (sender, text) pairs
    pub fn transcript(&self) -> Vec<(Sender, &str)> {
        self.messages
            .iter()
            .map(|m| (m.sender, m.text.as_str()))
            .collect()
    }
}
