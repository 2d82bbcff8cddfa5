// SPDX-License-Identifier: MPL-2.0
//! Native clipboard through `arboard`.

use super::{ClipboardError, CopyStrategy};
use std::sync::Mutex;

/// Environment variables set by SSH for remote sessions.
const REMOTE_SESSION_VARS: [&str; 3] = ["SSH_CONNECTION", "SSH_TTY", "SSH_CLIENT"];

/// The platform clipboard.
///
/// The handle is opened lazily and kept for the life of the strategy: on
/// X11 and Wayland the copied text is served by the process that owns the
/// clipboard object, so dropping it right after a write would lose the
/// contents.
pub struct SystemClipboard {
    clipboard: Mutex<Option<arboard::Clipboard>>,
    require_local_session: bool,
}

impl SystemClipboard {
    #[must_use]
    pub fn new(require_local_session: bool) -> Self {
        Self {
            clipboard: Mutex::new(None),
            require_local_session,
        }
    }

    fn with_clipboard<T>(
        &self,
        f: impl FnOnce(&mut arboard::Clipboard) -> Result<T, ClipboardError>,
    ) -> Result<T, ClipboardError> {
        let mut slot = self
            .clipboard
            .lock()
            .map_err(|_| ClipboardError::System("clipboard lock poisoned".to_string()))?;
        if slot.is_none() {
            let opened =
                arboard::Clipboard::new().map_err(|e| ClipboardError::System(e.to_string()))?;
            *slot = Some(opened);
        }
        match slot.as_mut() {
            Some(clipboard) => f(clipboard),
            None => Err(ClipboardError::Unavailable),
        }
    }
}

/// True when none of the SSH session markers are set.
#[must_use]
pub fn is_local_session() -> bool {
    session_is_local(|name| std::env::var_os(name).is_some())
}

fn session_is_local(is_set: impl Fn(&str) -> bool) -> bool {
    !REMOTE_SESSION_VARS.iter().any(|name| is_set(name))
}

impl CopyStrategy for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn is_available(&self) -> bool {
        if self.require_local_session && !is_local_session() {
            return false;
        }
        self.with_clipboard(|_| Ok(())).is_ok()
    }

    fn write(&self, text: &str) -> Result<(), ClipboardError> {
        self.with_clipboard(|clipboard| {
            clipboard
                .set_text(text.to_string())
                .map_err(|e| ClipboardError::System(e.to_string()))
        })
    }
}
