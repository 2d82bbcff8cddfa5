// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` owns the page, the shared scroll lock and the theme mode. It routes
//! component messages to the figure or copy control they belong to, turns
//! Escape into a close for every open lightbox, and stacks the open
//! lightboxes above the page.

mod message;
mod page;
pub mod paths;
mod subscription;
mod view;

pub use message::{FigureId, Flags, Message};
pub use page::Page;
pub use view::{ColumnWidths, TWO_COLUMN_MIN_WIDTH};

use crate::config::{self, Config};
use crate::content::PaperContent;
use crate::error::Result;
use crate::ui::scroll_lock::ScrollLock;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::scroll_locked;
use iced::widget::Stack;
use iced::{window, Element, Length, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Window title used when the content could not be loaded.
pub const FALLBACK_TITLE: &str = "SimVLA";

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const MIN_WINDOW_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 700;

/// Root Iced application state.
pub struct App {
    config: Config,
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    window_size: Size,
    scroll_lock: ScrollLock,
    /// The page, or the reason it could not be built.
    page: std::result::Result<Page, String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("window_size", &self.window_size)
            .field("scroll_locked", &self.scroll_lock.is_locked())
            .field("page", &self.page.as_ref().map(|_| ()))
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Loads the configured external content, falling back to the embedded copy
/// when it is unset or unreadable.
fn load_content(root: &Path, config: &Config) -> Result<PaperContent> {
    let Some(configured) = &config.site.content_path else {
        return PaperContent::embedded();
    };

    let path = config::resolve_against(root, configured);
    match PaperContent::load(Some(&path)) {
        Ok(content) => Ok(content),
        Err(err) => {
            tracing::warn!(%err, "external content ignored, using embedded content");
            PaperContent::embedded()
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        // A launcher override applies to this run only and is never saved.
        let base_path = flags
            .base_path
            .clone()
            .unwrap_or_else(|| config.site.base_path.clone());
        let root = paths::project_root_with_override(flags.root.clone());
        let public_dir = config::resolve_against(&root, &config.site.public_dir);
        tracing::info!(
            root = %root.display(),
            public_dir = %public_dir.display(),
            base_path = %base_path,
            "starting page"
        );

        let scroll_lock = ScrollLock::new();
        let built = load_content(&root, &config).and_then(|content| {
            Page::new(
                content,
                &base_path,
                &public_dir,
                &scroll_lock,
                &config.clipboard,
            )
        });

        let (page, task) = match built {
            Ok((page, task)) => (Ok(page), task),
            Err(err) => {
                tracing::error!(%err, "page content unavailable");
                (Err(err.to_string()), Task::none())
            }
        };

        let app = App {
            theme_mode: config.general.theme_mode,
            config,
            config_dir: flags.config_dir,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            scroll_lock,
            page,
        };

        (app, task)
    }

    fn any_lightbox_open(&self) -> bool {
        self.page.as_ref().is_ok_and(Page::any_lightbox_open)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Figure(id, message) => {
                if let Ok(page) = &mut self.page {
                    page.update_figure(id, message);
                }
                Task::none()
            }
            Message::Citation(message) => match &mut self.page {
                Ok(page) => page.update_citation(message),
                Err(_) => Task::none(),
            },
            Message::EscapePressed => {
                if let Ok(page) = &mut self.page {
                    page.escape();
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
            Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.next();
                self.persist_theme_mode();
                Task::none()
            }
        }
    }

    fn persist_theme_mode(&mut self) {
        self.config.general.theme_mode = self.theme_mode;
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!(%err, "theme mode not saved");
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let page = match &self.page {
            Ok(page) => page,
            Err(message) => return view::load_error(message),
        };

        let body = scroll_locked(
            view::view(view::ViewContext {
                page,
                theme_mode: self.theme_mode,
                window_width: self.window_size.width,
            }),
            self.scroll_lock.is_locked(),
        );

        page.overlays()
            .fold(
                Stack::new()
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .push(body),
                |stack, overlay| stack.push(overlay),
            )
            .into()
    }

    fn title(&self) -> String {
        match &self.page {
            Ok(page) => page.content().title.clone(),
            Err(_) => FALLBACK_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(self.any_lightbox_open())
    }
}
