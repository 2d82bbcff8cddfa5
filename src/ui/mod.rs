// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`figure`] - Thumbnail card and full-size lightbox for one image
//! - [`copy_button`] - Copy-to-clipboard control with a reverting status
//!
//! # Shared Infrastructure
//!
//! - [`scroll_lock`] - Reference-counted page scroll lock
//! - [`widgets`] - Custom Iced widgets (scroll-locked container)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod copy_button;
pub mod design_tokens;
pub mod figure;
pub mod scroll_lock;
pub mod styles;
pub mod theming;
pub mod widgets;
