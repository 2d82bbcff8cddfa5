// SPDX-License-Identifier: MPL-2.0
//! Clipboard access with an ordered fallback chain.
//!
//! Each [`CopyStrategy`] is probed for availability and then asked to write
//! the payload. The [`FallbackChain`] stops at the first strategy that
//! succeeds:
//!
//! 1. [`SystemClipboard`] - native clipboard, local sessions only
//! 2. [`StagedCommand`] - legacy copy command fed from a staging file
//!
//! Errors stay inside this module; callers only see a [`CopyOutcome`].

pub mod staged;
pub mod system;

pub use staged::StagedCommand;
pub use system::SystemClipboard;

use crate::config::ClipboardConfig;
use std::fmt;

/// Clipboard operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The strategy cannot run in this session.
    Unavailable,
    /// The native clipboard rejected the write.
    System(String),
    /// The staging file could not be prepared.
    Staging(String),
    /// The legacy copy command failed to run or reported failure.
    Command(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable => write!(f, "clipboard unavailable"),
            ClipboardError::System(msg) => write!(f, "system clipboard failed: {}", msg),
            ClipboardError::Staging(msg) => write!(f, "staging file failed: {}", msg),
            ClipboardError::Command(msg) => write!(f, "copy command failed: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// One way of placing text on the clipboard.
pub trait CopyStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Capability probe. Unavailable strategies are skipped without a write.
    fn is_available(&self) -> bool;

    /// Writes `text` verbatim. Any cleanup the strategy needs happens before
    /// this returns, whatever the result.
    fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Terminal result of a copy attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// Ordered list of strategies, short-circuiting on the first success.
pub struct FallbackChain {
    strategies: Vec<Box<dyn CopyStrategy>>,
}

impl fmt::Debug for FallbackChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.strategies.iter().map(|s| s.name()))
            .finish()
    }
}

impl FallbackChain {
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn CopyStrategy>>) -> Self {
        Self { strategies }
    }

    /// Native clipboard first, then the configured legacy command.
    #[must_use]
    pub fn from_config(config: &ClipboardConfig) -> Self {
        let staged = match &config.fallback_command {
            Some(command) => StagedCommand::new(command.clone()),
            None => StagedCommand::platform_default(),
        };
        Self::new(vec![
            Box::new(SystemClipboard::new(config.require_local_session)),
            Box::new(staged),
        ])
    }

    /// Copies `text`, trying each strategy in order.
    pub fn copy(&self, text: &str) -> CopyOutcome {
        for strategy in &self.strategies {
            if !strategy.is_available() {
                tracing::debug!(strategy = strategy.name(), "copy strategy unavailable");
                continue;
            }
            match strategy.write(text) {
                Ok(()) => {
                    tracing::debug!(strategy = strategy.name(), "copied to clipboard");
                    return CopyOutcome::Copied;
                }
                Err(err) => {
                    tracing::debug!(strategy = strategy.name(), %err, "copy strategy failed");
                }
            }
        }
        tracing::warn!("every copy strategy failed");
        CopyOutcome::Failed
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory strategies shared by the clipboard and copy control tests.

    use super::{ClipboardError, CopyStrategy};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Strategy writing into a shared in-memory store.
    #[derive(Clone, Default)]
    pub struct MemoryStore {
        pub contents: Arc<Mutex<Option<String>>>,
        pub writes: Arc<AtomicUsize>,
        pub available: bool,
        pub fail: bool,
    }

    impl MemoryStore {
        pub fn working() -> Self {
            Self {
                available: true,
                ..Self::default()
            }
        }

        pub fn unavailable() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                available: true,
                fail: true,
                ..Self::default()
            }
        }

        pub fn contents(&self) -> Option<String> {
            self.contents.lock().expect("store lock").clone()
        }

        pub fn writes(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }
    }

    impl CopyStrategy for MemoryStore {
        fn name(&self) -> &'static str {
            "memory"
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn write(&self, text: &str) -> Result<(), ClipboardError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ClipboardError::System("denied".to_string()));
            }
            *self.contents.lock().expect("store lock") = Some(text.to_string());
            Ok(())
        }
    }
}
