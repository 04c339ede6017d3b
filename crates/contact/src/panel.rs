use std::time::Duration;

use tokio::time::Instant;

use crate::{ContactFormState, Handoff, Mailbox, dispatch};

/// How long the "message sent" banner stays up after a submit.
pub const SUCCESS_WINDOW: Duration = Duration::from_secs(5);

/// Contact form plus its post-submit confirmation.
///
/// The confirmation is cosmetic: it turns on as soon as the handoff is built,
/// regardless of what the mail client does afterwards.
#[derive(Clone, Debug, Default)]
pub struct ContactPanel {
    pub form: ContactFormState,
    submitted_at: Option<Instant>,
}

impl ContactPanel {
    pub fn new(form: ContactFormState) -> Self {
        Self {
            form,
            submitted_at: None,
        }
    }

    pub fn submit(&mut self, user_agent: &str, mailbox: &Mailbox) -> Handoff {
        let handoff = dispatch(&self.form, user_agent, mailbox);

        self.form = ContactFormState::default();
        self.submitted_at = Some(Instant::now());

        handoff
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted_at
            .is_some_and(|at| at.elapsed() < SUCCESS_WINDOW)
    }

    /// Milliseconds left before the confirmation clears, zero when hidden.
    ///
    /// Rounded up, so a page timer built from it never fires early.
    pub fn remaining_ms(&self) -> u64 {
        self.submitted_at
            .map(|at| {
                let left = SUCCESS_WINDOW.saturating_sub(at.elapsed());
                left.as_micros().div_ceil(1_000) as u64
            })
            .unwrap_or_default()
    }
}
