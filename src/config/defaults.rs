// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Site**: image locator prefix and served directory
//! - **Clipboard**: status revert delays of the copy control
//! - **Sync**: source locations of the build-time asset sync
//! - **Figure**: thumbnail and lightbox geometry

// ==========================================================================
// Site Defaults
// ==========================================================================

/// Prefix prepended to every image locator. Empty means "served at root".
pub const DEFAULT_BASE_PATH: &str = "";

/// Directory (relative to the project root) that is served as the site root.
pub const DEFAULT_PUBLIC_DIR: &str = "public";

// ==========================================================================
// Clipboard Defaults
// ==========================================================================

/// Delay before a "Copied" label reverts to "Copy" (milliseconds).
pub const DEFAULT_COPIED_REVERT_MS: u64 = 1200;

/// Delay before a "Copy failed" label reverts to "Copy" (milliseconds).
pub const DEFAULT_FAILED_REVERT_MS: u64 = 2000;

/// Lower bound for either revert delay.
pub const MIN_REVERT_MS: u64 = 100;

/// Upper bound for either revert delay.
pub const MAX_REVERT_MS: u64 = 30_000;

// ==========================================================================
// Sync Defaults
// ==========================================================================

/// Paper PDF copied into the public directory.
pub const DEFAULT_SOURCE_DOCUMENT: &str = "simVLA.pdf";

/// Directory holding the paper figures.
pub const DEFAULT_ASSET_DIR: &str = "paper";

/// Image extensions the sync copies (lowercase, without the dot).
pub const ALLOWED_ASSET_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "svg"];

// ==========================================================================
// Figure Defaults
// ==========================================================================

/// Default maximum thumbnail card width in logical pixels.
pub const DEFAULT_FIGURE_MAX_WIDTH: f32 = 600.0;

/// Thumbnail width for result tables and real-robot figures.
pub const WIDE_FIGURE_MAX_WIDTH: f32 = 800.0;

/// Share of the window the enlarged image may occupy on each axis.
pub const LIGHTBOX_VIEWPORT_FRACTION: f32 = 0.9;

const _: () = {
    assert!(DEFAULT_COPIED_REVERT_MS < DEFAULT_FAILED_REVERT_MS);
    assert!(MIN_REVERT_MS <= DEFAULT_COPIED_REVERT_MS);
    assert!(DEFAULT_FAILED_REVERT_MS <= MAX_REVERT_MS);
    assert!(DEFAULT_FIGURE_MAX_WIDTH < WIDE_FIGURE_MAX_WIDTH);
    assert!(LIGHTBOX_VIEWPORT_FRACTION > 0.0 && LIGHTBOX_VIEWPORT_FRACTION <= 1.0);
};
