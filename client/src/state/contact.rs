//! Contact form state machine.
//!
//! Submission is simulated: `begin_submit` validates and hands back the
//! payload, the component waits [`SEND_DELAY_MS`], calls `complete`, shows
//! the confirmation for [`SENT_BANNER_MS`], then calls `reset`.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

/// Simulated network latency before the form reports success.
pub const SEND_DELAY_MS: u32 = 1_500;

/// How long the "message sent" state stays visible.
pub const SENT_BANNER_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("please enter your name")]
    MissingName,
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("please write a message")]
    MissingMessage,
    #[error("a message is already being sent")]
    Busy,
    #[error("no message is being sent")]
    NotSending,
}

/// Payload that would be sent to a mail endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: SubmitStatus,
}

impl ContactForm {
    /// Validate the fields and move `Idle -> Sending`.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Busy`] when a submission is in flight or just
    /// finished, otherwise the first failing field check.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactError> {
        if self.status != SubmitStatus::Idle {
            return Err(ContactError::Busy);
        }
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        let payload = ContactMessage {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        };
        self.status = SubmitStatus::Sending;
        Ok(payload)
    }

    /// Move `Sending -> Sent` and clear the fields.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::NotSending`] unless a submission is in flight.
    pub fn complete(&mut self) -> Result<(), ContactError> {
        if self.status != SubmitStatus::Sending {
            return Err(ContactError::NotSending);
        }
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.status = SubmitStatus::Sent;
        Ok(())
    }

    /// Move `Sent -> Idle`. No-op in any other state.
    pub fn reset(&mut self) {
        if self.status == SubmitStatus::Sent {
            self.status = SubmitStatus::Idle;
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.status == SubmitStatus::Idle
    }

    /// Submit button label for the current status.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        match self.status {
            SubmitStatus::Idle => "Send Message",
            SubmitStatus::Sending => "Sending...",
            SubmitStatus::Sent => "Sent Successfully!",
        }
    }
}

/// `local@domain.tld` with no whitespace and a single `@`.
#[must_use]
pub fn is_plausible_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !host.starts_with('.'),
        None => false,
    }
}
