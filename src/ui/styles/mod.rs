// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the page widgets.

pub mod button;
pub mod container;
pub mod overlay;
pub mod text;
pub mod tooltip;
