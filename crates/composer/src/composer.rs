use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use strum::{AsRefStr, Display};

use crate::{Error, Result};

/// Artificial latency standing in for a network round trip.
pub const SIMULATED_LATENCY: Duration = Duration::from_secs(2);

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    Sending,
    Scheduling,
}

/// Observable state of the widget.
#[derive(Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    #[default]
    Closed,
    Idle,
    Sending,
    Scheduling,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    pub open: bool,
    pub message: String,
    pub scheduled_time: String,
    pub loading: Option<Action>,
}

impl ComposerState {
    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    pub fn phase(&self) -> Phase {
        match (self.open, self.loading) {
            (false, _) => Phase::Closed,
            (true, None) => Phase::Idle,
            (true, Some(Action::Sending)) => Phase::Sending,
            (true, Some(Action::Scheduling)) => Phase::Scheduling,
        }
    }

    fn discard(&mut self) {
        self.open = false;
        self.message.clear();
        self.scheduled_time.clear();
    }
}

/// What the visitor is told once the simulated action completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Sent,
    Scheduled(String),
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confirmation::Sent => f.write_str("Message sent!"),
            Confirmation::Scheduled(time) => write!(f, "Message scheduled for {time}!"),
        }
    }
}

/// Floating "send now / schedule" widget.
///
/// Nothing is transmitted or scheduled: both actions wait for the configured
/// latency and report success. Clones share the same widget instance.
#[derive(Clone, Debug)]
pub struct Composer {
    state: Arc<Mutex<ComposerState>>,
    latency: Duration,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    pub fn new() -> Self {
        Self::with_latency(SIMULATED_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            state: Arc::default(),
            latency,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ComposerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn snapshot(&self) -> ComposerState {
        self.lock().clone()
    }

    pub fn phase(&self) -> Phase {
        self.lock().phase()
    }

    pub fn is_open(&self) -> bool {
        self.lock().open
    }

    pub fn is_busy(&self) -> bool {
        self.lock().is_loading()
    }

    pub fn open(&self) {
        let mut state = self.lock();
        if !state.open {
            state.open = true;
            tracing::debug!(phase = %state.phase(), "composer opened");
        }
    }

    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Closes the widget and drops whatever was typed. An action already in
    /// flight is not cancelled.
    pub fn close(&self) {
        let mut state = self.lock();
        state.discard();
        tracing::debug!(loading = state.is_loading(), "composer closed");
    }

    pub fn click_outside(&self) {
        if self.is_open() {
            self.close();
        }
    }

    pub fn set_message(&self, message: impl Into<String>) -> Result<()> {
        let mut state = self.editable()?;
        state.message = message.into();

        Ok(())
    }

    pub fn set_scheduled_time(&self, time: impl Into<String>) -> Result<()> {
        let mut state = self.editable()?;
        state.scheduled_time = time.into();

        Ok(())
    }

    fn editable(&self) -> Result<MutexGuard<'_, ComposerState>> {
        let state = self.lock();
        if !state.open {
            return Err(Error::Closed);
        }
        if state.is_loading() {
            return Err(Error::Busy);
        }

        Ok(state)
    }

    pub async fn send_now(&self) -> Result<Confirmation> {
        self.simulate(Action::Sending).await?;

        Ok(Confirmation::Sent)
    }

    /// Reports the message as scheduled for `time`, taken literally.
    pub async fn schedule_for(&self, time: impl Into<String>) -> Result<Confirmation> {
        let time = time.into();
        self.set_scheduled_time(time.clone())?;
        self.simulate(Action::Scheduling).await?;

        Ok(Confirmation::Scheduled(time))
    }

    async fn simulate(&self, action: Action) -> Result<()> {
        {
            let mut state = self.editable()?;
            state.loading = Some(action);
            tracing::debug!(action = %action, "composer busy");
        }

        let _in_flight = InFlight(self);
        tokio::time::sleep(self.latency).await;

        Ok(())
    }
}

/// Clears the busy flag and closes the widget, whether the simulated action
/// ran to completion or its future was dropped.
struct InFlight<'a>(&'a Composer);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.0.lock();
        state.loading = None;
        state.discard();
        tracing::debug!("composer action finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_follows_open_and_loading() {
        let mut state = ComposerState::default();
        assert_eq!(state.phase(), Phase::Closed);

        state.open = true;
        assert_eq!(state.phase(), Phase::Idle);

        state.loading = Some(Action::Scheduling);
        assert_eq!(state.phase(), Phase::Scheduling);

        state.open = false;
        assert_eq!(state.phase(), Phase::Closed);
        assert!(state.is_loading());
    }

    #[test]
    fn confirmation_text() {
        assert_eq!(Confirmation::Sent.to_string(), "Message sent!");
        assert_eq!(
            Confirmation::Scheduled("2026-10-18T09:30".to_owned()).to_string(),
            "Message scheduled for 2026-10-18T09:30!"
        );
    }

    #[test]
    fn edits_require_an_open_idle_widget() {
        let composer = Composer::new();
        assert_eq!(composer.set_message("hi"), Err(Error::Closed));

        composer.open();
        composer.set_message("hi").expect("open widget accepts input");
        assert_eq!(composer.snapshot().message, "hi");

        composer.toggle();
        assert_eq!(composer.phase(), Phase::Closed);
        assert!(composer.snapshot().message.is_empty());
    }
}
