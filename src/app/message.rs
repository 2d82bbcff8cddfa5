// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::copy_button;
use crate::ui::figure;
use iced::Size;
use std::path::PathBuf;

/// Index of a figure in the page's figure list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FigureId(pub usize);

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded with the instance they belong to.
#[derive(Debug, Clone)]
pub enum Message {
    Figure(FigureId, figure::Message),
    Citation(copy_button::Message),
    /// Escape pressed while at least one lightbox is open.
    EscapePressed,
    WindowResized(Size),
    ToggleTheme,
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Directory holding `settings.toml`.
    pub config_dir: Option<PathBuf>,
    /// Directory holding the paper sources and the served directory.
    pub root: Option<PathBuf>,
    /// Image locator prefix replacing `site.base_path` for this run.
    pub base_path: Option<String>,
}
