// SPDX-License-Identifier: MPL-2.0
//! Copy-to-clipboard button.
//!
//! Pressing the button runs the clipboard [`FallbackChain`] on the blocking
//! pool. The label then shows the outcome and reverts to "Copy" after a
//! delay. Every outcome bumps a generation counter and the revert message
//! carries the generation it was scheduled for, so a newer outcome cancels
//! the pending revert of an older one.

use crate::clipboard::{CopyOutcome, FallbackChain};
use crate::config::ClipboardConfig;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, tooltip};
use iced::{Element, Task};
use std::sync::Arc;
use std::time::Duration;

/// Tooltip of the idle button.
pub const COPY_TOOLTIP: &str = "Copy to clipboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CopyStatus::Idle => "Copy",
            CopyStatus::Copied => "Copied",
            CopyStatus::Failed => "Copy failed",
        }
    }

    /// Polite status announcement, `None` while idle.
    #[must_use]
    pub fn announcement(self) -> Option<&'static str> {
        match self {
            CopyStatus::Idle => None,
            CopyStatus::Copied => Some("Copied to clipboard"),
            CopyStatus::Failed => Some("Copy to clipboard failed"),
        }
    }
}

impl From<CopyOutcome> for CopyStatus {
    fn from(outcome: CopyOutcome) -> Self {
        match outcome {
            CopyOutcome::Copied => CopyStatus::Copied,
            CopyOutcome::Failed => CopyStatus::Failed,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Pressed,
    Finished(CopyOutcome),
    /// Scheduled revert for the given generation.
    Revert(u64),
}

pub struct State {
    text: String,
    status: CopyStatus,
    generation: u64,
    chain: Arc<FallbackChain>,
    copied_delay: Duration,
    failed_delay: Duration,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("status", &self.status)
            .field("generation", &self.generation)
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Creates an idle button copying `text` verbatim.
    #[must_use]
    pub fn new(text: impl Into<String>, chain: Arc<FallbackChain>, config: &ClipboardConfig) -> Self {
        Self::with_delays(text, chain, config.copied_delay(), config.failed_delay())
    }

    #[must_use]
    pub fn with_delays(
        text: impl Into<String>,
        chain: Arc<FallbackChain>,
        copied_delay: Duration,
        failed_delay: Duration,
    ) -> Self {
        Self {
            text: text.into(),
            status: CopyStatus::Idle,
            generation: 0,
            chain,
            copied_delay,
            failed_delay,
        }
    }

    #[must_use]
    pub fn status(&self) -> CopyStatus {
        self.status
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Delay until the current status reverts, `None` while idle.
    #[must_use]
    pub fn revert_delay(&self) -> Option<Duration> {
        match self.status {
            CopyStatus::Idle => None,
            CopyStatus::Copied => Some(self.copied_delay),
            CopyStatus::Failed => Some(self.failed_delay),
        }
    }

    /// Records an outcome and returns the generation its revert belongs to.
    fn complete(&mut self, outcome: CopyOutcome) -> u64 {
        self.status = outcome.into();
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    fn revert(&mut self, generation: u64) {
        if generation == self.generation {
            self.status = CopyStatus::Idle;
        } else {
            tracing::trace!(generation, current = self.generation, "stale revert ignored");
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Pressed => Task::perform(
                copy_off_thread(Arc::clone(&self.chain), self.text.clone()),
                Message::Finished,
            ),
            Message::Finished(outcome) => {
                let generation = self.complete(outcome);
                match self.revert_delay() {
                    Some(delay) => {
                        Task::perform(revert_after(delay, generation), Message::Revert)
                    }
                    None => Task::none(),
                }
            }
            Message::Revert(generation) => {
                self.revert(generation);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let label = text(self.status.label()).size(typography::BODY_SM);
        let label = match self.status {
            CopyStatus::Idle => label,
            CopyStatus::Copied => label.style(styles::text::success),
            CopyStatus::Failed => label.style(styles::text::danger),
        };

        let copy = button(label)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::secondary)
            .on_press(Message::Pressed);

        styles::tooltip::styled(
            copy,
            self.status.announcement().unwrap_or(COPY_TOOLTIP),
            tooltip::Position::Left,
        )
        .into()
    }
}

/// Runs the chain on the blocking pool. A panicked or cancelled copy counts
/// as a failure.
pub async fn copy_off_thread(chain: Arc<FallbackChain>, text: String) -> CopyOutcome {
    match tokio::task::spawn_blocking(move || chain.copy(&text)).await {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::warn!(%err, "clipboard task did not complete");
            CopyOutcome::Failed
        }
    }
}

/// Sleeps for `delay` and yields the generation to revert.
pub async fn revert_after(delay: Duration, generation: u64) -> u64 {
    tokio::time::sleep(delay).await;
    generation
}
