// SPDX-License-Identifier: MPL-2.0
//! `simvla_page` renders the SimVLA paper's project page with the Iced GUI
//! framework.
//!
//! The page shows the paper's figures and result tables as thumbnails that
//! enlarge into a lightbox, and a citation block with a copy-to-clipboard
//! control. The `sync-assets` command copies the paper PDF and figures into
//! the served directory before the page is shown.

pub mod app;
pub mod asset_sync;
pub mod clipboard;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod ui;
