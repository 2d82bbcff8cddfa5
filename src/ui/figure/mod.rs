// SPDX-License-Identifier: MPL-2.0
//! Figure thumbnail with a full-window lightbox.
//!
//! Each figure renders as a bordered card that opens an overlay with the
//! enlarged image. The overlay closes on a backdrop press, a close-button
//! press, a press on the enlarged image, or Escape. A press on the frame
//! around the image is captured and does nothing.
//!
//! Open state is the presence of a [`ScrollLockGuard`]: opening takes a
//! share of the page scroll lock, and every close path (including dropping
//! the state while open) gives it back.

mod view;

pub use view::{CLOSE_LABEL, VIEW_FULL_SIZE_LABEL};

use crate::config::{DEFAULT_FIGURE_MAX_WIDTH, LIGHTBOX_VIEWPORT_FRACTION};
use crate::ui::design_tokens::sizing;
use crate::ui::scroll_lock::{ScrollLock, ScrollLockGuard};
use iced::widget::image::Handle;
use iced::{Element, Size, Task};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Horizontal placement of the thumbnail card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Center,
    Left,
}

/// Immutable description of a figure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FigureSpec {
    /// Image locator relative to the site root, e.g. `/paper/fig1.png`.
    #[serde(alias = "src")]
    pub source: String,
    pub alt: String,
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
    #[serde(default)]
    pub caption: Option<String>,
    /// Preload the image at startup instead of decoding on first draw.
    #[serde(default)]
    pub priority: bool,
    #[serde(default = "default_max_display_width")]
    pub max_display_width: f32,
    #[serde(default)]
    pub alignment: Alignment,
}

fn default_max_display_width() -> f32 {
    DEFAULT_FIGURE_MAX_WIDTH
}

impl FigureSpec {
    #[must_use]
    pub fn new(source: impl Into<String>, alt: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            source: source.into(),
            alt: alt.into(),
            width,
            height,
            caption: None,
            priority: false,
            max_display_width: DEFAULT_FIGURE_MAX_WIDTH,
            alignment: Alignment::Center,
        }
    }

    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: bool) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_max_display_width(mut self, width: f32) -> Self {
        self.max_display_width = width;
        self
    }

    #[must_use]
    pub fn without_caption(mut self) -> Self {
        self.caption = None;
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn intrinsic_size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// Prefixes an image locator with the configured base path.
///
/// Plain concatenation: `("/SimVLA", "/paper/a.png")` gives
/// `/SimVLA/paper/a.png`, and an empty base leaves the locator unchanged.
#[must_use]
pub fn resolve_source(base_path: &str, source: &str) -> String {
    format!("{base_path}{source}")
}

/// Maps an unprefixed source onto a file under the served directory. The
/// base path is where that directory is mounted, so it never appears on disk.
#[must_use]
pub fn locator_path(public_dir: &Path, source: &str) -> PathBuf {
    public_dir.join(source.trim_start_matches('/'))
}

/// Largest size with the intrinsic aspect ratio that fits `bounds`, never
/// upscaling past the intrinsic size.
#[must_use]
pub fn fitted_size(intrinsic: Size, bounds: Size) -> Size {
    if intrinsic.width <= 0.0 || intrinsic.height <= 0.0 {
        return Size::ZERO;
    }
    let scale = 1.0_f32
        .min(bounds.width.max(0.0) / intrinsic.width)
        .min(bounds.height.max(0.0) / intrinsic.height);
    Size::new(intrinsic.width * scale, intrinsic.height * scale)
}

/// Bounds available to the enlarged image inside a window of `window` size.
#[must_use]
pub fn lightbox_bounds(window: Size) -> Size {
    Size::new(
        window.width * LIGHTBOX_VIEWPORT_FRACTION,
        window.height * LIGHTBOX_VIEWPORT_FRACTION,
    )
}

/// Size reserved for the thumbnail image inside its card.
///
/// The card takes the narrower of `max_display_width` and the column width
/// the page offers, and the image height follows the intrinsic aspect ratio
/// so the layout does not shift once the image has been decoded.
#[must_use]
pub fn thumbnail_size(spec: &FigureSpec, available_width: f32) -> Size {
    let card_width = spec.max_display_width.min(available_width);
    let width = (card_width - 2.0 * sizing::CARD_PADDING).max(0.0);
    if spec.width == 0 {
        return Size::new(width, 0.0);
    }
    Size::new(width, width * spec.height as f32 / spec.width as f32)
}

#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailPressed,
    BackdropPressed,
    CloseButtonPressed,
    ImagePressed,
    /// Press on the frame around the enlarged image. Captured, never closes.
    ContentPressed,
    EscapePressed,
    Preloaded(Result<Handle, String>),
}

/// Per-figure state.
#[derive(Debug)]
pub struct State {
    spec: FigureSpec,
    locator: String,
    path: PathBuf,
    handle: Handle,
    scroll_lock: ScrollLock,
    open: Option<ScrollLockGuard>,
}

impl State {
    /// Creates a closed figure whose image lives under `public_dir`.
    #[must_use]
    pub fn new(spec: FigureSpec, base_path: &str, public_dir: &Path, scroll_lock: ScrollLock) -> Self {
        let locator = resolve_source(base_path, &spec.source);
        let path = locator_path(public_dir, &spec.source);
        let handle = Handle::from_path(&path);
        Self {
            spec,
            locator,
            path,
            handle,
            scroll_lock,
            open: None,
        }
    }

    #[must_use]
    pub fn spec(&self) -> &FigureSpec {
        &self.spec
    }

    /// The image locator after base-path resolution.
    #[must_use]
    pub fn locator(&self) -> &str {
        &self.locator
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Whether Escape should currently be routed to this figure.
    #[must_use]
    pub fn listens_for_escape(&self) -> bool {
        self.is_open()
    }

    fn open(&mut self) {
        if self.open.is_none() {
            tracing::debug!(source = %self.locator, "lightbox opened");
            self.open = Some(self.scroll_lock.acquire());
        }
    }

    fn close(&mut self) {
        if self.open.take().is_some() {
            tracing::debug!(source = %self.locator, "lightbox closed");
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ThumbnailPressed => self.open(),
            Message::BackdropPressed
            | Message::CloseButtonPressed
            | Message::ImagePressed
            | Message::EscapePressed => self.close(),
            Message::ContentPressed => {}
            Message::Preloaded(Ok(handle)) => self.handle = handle,
            Message::Preloaded(Err(err)) => {
                tracing::warn!(%err, "priority image preload failed; decoding on draw");
            }
        }
    }

    /// Reads priority images ahead of the first frame. Other figures decode
    /// lazily from their path when first drawn.
    #[must_use]
    pub fn preload_task(&self) -> Task<Message> {
        if !self.spec.priority {
            return Task::none();
        }
        let path = self.path.clone();
        Task::perform(
            async move {
                tokio::fs::read(&path)
                    .await
                    .map(Handle::from_bytes)
                    .map_err(|err| format!("{}: {}", path.display(), err))
            },
            Message::Preloaded,
        )
    }

    /// The thumbnail card and its caption, fitted to a column of
    /// `available_width`.
    pub fn view_thumbnail(&self, available_width: f32) -> Element<'_, Message> {
        view::thumbnail(&self.spec, &self.handle, available_width)
    }

    /// The lightbox overlay, or `None` while closed.
    pub fn view_overlay(&self) -> Option<Element<'_, Message>> {
        self.is_open().then(|| view::overlay(&self.spec, &self.handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figure(lock: &ScrollLock) -> State {
        State::new(
            FigureSpec::new("/paper/fig1.png", "Architecture", 1600, 900),
            "",
            Path::new("public"),
            lock.clone(),
        )
    }

    #[test]
    fn content_fields_match_builders() {
        let parsed: FigureSpec = toml::from_str(
            r#"
            src = "/paper/Table1.png"
            alt = "Performance and efficiency summary."
            width = 717
            height = 234
            caption = "Performance summary."
            priority = true
            alignment = "left"
            "#,
        )
        .expect("figure spec");

        let built = FigureSpec::new("/paper/Table1.png", "Performance and efficiency summary.", 717, 234)
            .with_caption("Performance summary.")
            .with_priority(true)
            .with_alignment(Alignment::Left);
        assert_eq!(parsed, built);
    }

    #[test]
    fn starts_closed_without_lock() {
        let lock = ScrollLock::new();
        let state = figure(&lock);
        assert!(!state.is_open());
        assert!(!lock.is_locked());
        assert!(state.view_overlay().is_none());
    }

    #[test]
    fn open_close_sequences_track_expected_state() {
        let close_messages = [
            Message::BackdropPressed,
            Message::CloseButtonPressed,
            Message::ImagePressed,
            Message::EscapePressed,
        ];
        for close in close_messages {
            let lock = ScrollLock::new();
            let mut state = figure(&lock);

            state.update(Message::ThumbnailPressed);
            state.update(Message::ThumbnailPressed);
            assert!(state.is_open());
            assert_eq!(lock.holders(), 1);

            state.update(close.clone());
            assert!(!state.is_open(), "{close:?} should close");
            assert!(!lock.is_locked());

            state.update(close.clone());
            assert!(!state.is_open());
            assert_eq!(lock.holders(), 0);
        }
    }

    #[test]
    fn frame_press_does_not_close() {
        let lock = ScrollLock::new();
        let mut state = figure(&lock);
        state.update(Message::ThumbnailPressed);
        state.update(Message::ContentPressed);
        assert!(state.is_open());
        assert!(lock.is_locked());
    }

    #[test]
    fn escape_is_ignored_while_closed() {
        let lock = ScrollLock::new();
        let mut state = figure(&lock);
        assert!(!state.listens_for_escape());
        state.update(Message::EscapePressed);
        assert!(!state.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn escape_listener_follows_open_state() {
        let lock = ScrollLock::new();
        let mut state = figure(&lock);
        state.update(Message::ThumbnailPressed);
        assert!(state.listens_for_escape());
        state.update(Message::EscapePressed);
        assert!(!state.listens_for_escape());
    }

    #[test]
    fn dropping_open_figure_releases_lock() {
        let lock = ScrollLock::new();
        let mut state = figure(&lock);
        state.update(Message::ThumbnailPressed);
        assert!(lock.is_locked());
        drop(state);
        assert!(!lock.is_locked());
    }

    #[test]
    fn two_figures_lock_independently() {
        let lock = ScrollLock::new();
        let mut first = figure(&lock);
        let mut second = figure(&lock);

        first.update(Message::ThumbnailPressed);
        second.update(Message::ThumbnailPressed);
        assert!(first.is_open() && second.is_open());

        first.update(Message::EscapePressed);
        assert!(lock.is_locked());
        second.update(Message::BackdropPressed);
        assert!(!lock.is_locked());
    }

    #[test]
    fn base_path_prefixes_locator() {
        let state = State::new(
            FigureSpec::new("/paper/fig1.png", "", 10, 10),
            "/SimVLA",
            Path::new("/srv/public"),
            ScrollLock::new(),
        );
        assert_eq!(state.locator(), "/SimVLA/paper/fig1.png");
        assert_eq!(state.path(), Path::new("/srv/public/paper/fig1.png"));
    }

    #[test]
    fn empty_base_path_leaves_locator_unchanged() {
        assert_eq!(resolve_source("", "/paper/a.png"), "/paper/a.png");
    }

    #[test]
    fn fitted_size_preserves_aspect_ratio() {
        let fitted = fitted_size(Size::new(2000.0, 1000.0), Size::new(900.0, 900.0));
        assert_eq!(fitted, Size::new(900.0, 450.0));

        let tall = fitted_size(Size::new(500.0, 1000.0), Size::new(900.0, 400.0));
        assert_eq!(tall, Size::new(200.0, 400.0));
    }

    #[test]
    fn fitted_size_never_upscales() {
        let small = Size::new(300.0, 200.0);
        assert_eq!(fitted_size(small, Size::new(1000.0, 1000.0)), small);
    }

    #[test]
    fn fitted_size_handles_degenerate_input() {
        assert_eq!(fitted_size(Size::new(0.0, 10.0), Size::new(100.0, 100.0)), Size::ZERO);
        assert_eq!(
            fitted_size(Size::new(10.0, 10.0), Size::new(-5.0, 100.0)),
            Size::new(0.0, 0.0)
        );
    }

    #[test]
    fn lightbox_bounds_use_ninety_percent_of_window() {
        let bounds = lightbox_bounds(Size::new(1000.0, 800.0));
        assert!((bounds.width - 900.0).abs() < 1e-3);
        assert!((bounds.height - 720.0).abs() < 1e-3);
    }

    #[test]
    fn thumbnail_keeps_intrinsic_ratio_within_card() {
        let spec = FigureSpec::new("/a.png", "", 1600, 800).with_max_display_width(424.0);
        let size = thumbnail_size(&spec, 1000.0);
        assert_eq!(size.width, 424.0 - 2.0 * sizing::CARD_PADDING);
        assert_eq!(size.height, size.width / 2.0);
    }

    #[test]
    fn thumbnail_shrinks_to_narrow_columns() {
        let spec = FigureSpec::new("/a.png", "", 800, 400).with_max_display_width(800.0);
        let size = thumbnail_size(&spec, 424.0);
        assert_eq!(size.width, 424.0 - 2.0 * sizing::CARD_PADDING);
        assert_eq!(size.height, size.width / 2.0);
    }

    #[test]
    fn spec_deserializes_with_defaults() {
        let spec: FigureSpec = toml::from_str(
            r#"
            src = "/paper/fig1.png"
            alt = "Overview"
            width = 1200
            height = 600
            "#,
        )
        .expect("figure spec");
        assert_eq!(spec.source, "/paper/fig1.png");
        assert!(spec.caption.is_none());
        assert!(!spec.priority);
        assert_eq!(spec.max_display_width, DEFAULT_FIGURE_MAX_WIDTH);
        assert_eq!(spec.alignment, Alignment::Center);
    }
}
