// SPDX-License-Identifier: MPL-2.0
//! Page state: the loaded content, one figure state per placed image, and
//! the citation copy control.

use super::message::{FigureId, Message};
use crate::clipboard::FallbackChain;
use crate::config::{ClipboardConfig, WIDE_FIGURE_MAX_WIDTH};
use crate::content::PaperContent;
use crate::error::{Error, Result};
use crate::ui::copy_button;
use crate::ui::figure::{self, FigureSpec};
use crate::ui::scroll_lock::ScrollLock;
use iced::Task;
use std::path::Path;
use std::sync::Arc;

/// A result table placed on the page.
#[derive(Debug, Clone, Copy)]
pub(super) struct TableSlot {
    pub figure: FigureId,
    /// Index into `PaperContent::tables`.
    pub table: usize,
}

/// Where each figure sits in the page layout.
#[derive(Debug, Clone, Copy)]
pub(super) struct FigureSlots {
    pub architecture: FigureId,
    pub simulation: [TableSlot; 2],
    pub robot_benchmarks: [TableSlot; 2],
    pub real_robot_examples: FigureId,
    pub real_robot_results: FigureId,
    pub ablations: TableSlot,
    pub performance: TableSlot,
}

pub struct Page {
    content: PaperContent,
    figures: Vec<figure::State>,
    slots: FigureSlots,
    citation: copy_button::State,
    document_locator: String,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("title", &self.content.title)
            .field("figures", &self.figures.len())
            .field("citation", &self.citation)
            .finish_non_exhaustive()
    }
}

struct FigureBuilder<'a> {
    base_path: &'a str,
    public_dir: &'a Path,
    scroll_lock: &'a ScrollLock,
    figures: Vec<figure::State>,
}

impl FigureBuilder<'_> {
    fn add(&mut self, spec: FigureSpec) -> FigureId {
        self.figures.push(figure::State::new(
            spec,
            self.base_path,
            self.public_dir,
            self.scroll_lock.clone(),
        ));
        FigureId(self.figures.len() - 1)
    }

    fn add_table(
        &mut self,
        content: &PaperContent,
        id: &str,
        shape: impl FnOnce(FigureSpec) -> FigureSpec,
    ) -> Result<TableSlot> {
        let table = content
            .tables
            .iter()
            .position(|table| table.id == id)
            .ok_or_else(|| Error::Content(format!("missing table `{id}`")))?;
        let spec = shape(content.tables[table].figure.clone());
        Ok(TableSlot {
            figure: self.add(spec),
            table,
        })
    }
}

impl Page {
    /// Builds the page and returns the preload work for priority figures.
    pub fn new(
        content: PaperContent,
        base_path: &str,
        public_dir: &Path,
        scroll_lock: &ScrollLock,
        clipboard: &ClipboardConfig,
    ) -> Result<(Self, Task<Message>)> {
        let mut builder = FigureBuilder {
            base_path,
            public_dir,
            scroll_lock,
            figures: Vec::new(),
        };

        let wide = |spec: FigureSpec| spec.with_max_display_width(WIDE_FIGURE_MAX_WIDTH);

        // Real-robot captions are shown as prose above the figure, and the
        // performance table sits next to its own description.
        let slots = FigureSlots {
            architecture: builder.add(content.figure("architecture")?.clone()),
            simulation: [
                builder.add_table(&content, "table2", wide)?,
                builder.add_table(&content, "table3", wide)?,
            ],
            robot_benchmarks: [
                builder.add_table(&content, "table4", wide)?,
                builder.add_table(&content, "table5", wide)?,
            ],
            real_robot_examples: builder.add(
                content
                    .figure("real_robot_examples")?
                    .clone()
                    .without_caption()
                    .with_max_display_width(WIDE_FIGURE_MAX_WIDTH),
            ),
            real_robot_results: builder.add(
                content
                    .figure("real_robot_results")?
                    .clone()
                    .without_caption()
                    .with_max_display_width(WIDE_FIGURE_MAX_WIDTH),
            ),
            ablations: builder.add_table(&content, "table6", wide)?,
            performance: builder.add_table(&content, "table1", FigureSpec::without_caption)?,
        };

        let figures = builder.figures;
        let preload = Task::batch(figures.iter().enumerate().map(|(index, state)| {
            state
                .preload_task()
                .map(move |message| Message::Figure(FigureId(index), message))
        }));

        let chain = Arc::new(FallbackChain::from_config(clipboard));
        let citation = copy_button::State::new(content.bibtex.clone(), chain, clipboard);
        let document_locator = figure::resolve_source(base_path, &content.document);

        tracing::debug!(figures = figures.len(), "page built");

        Ok((
            Self {
                content,
                figures,
                slots,
                citation,
                document_locator,
            },
            preload,
        ))
    }

    #[must_use]
    pub fn content(&self) -> &PaperContent {
        &self.content
    }

    pub(super) fn slots(&self) -> &FigureSlots {
        &self.slots
    }

    #[must_use]
    pub fn figures(&self) -> &[figure::State] {
        &self.figures
    }

    #[must_use]
    pub fn figure(&self, id: FigureId) -> Option<&figure::State> {
        self.figures.get(id.0)
    }

    #[must_use]
    pub fn citation(&self) -> &copy_button::State {
        &self.citation
    }

    /// Locator of the paper PDF, base path included.
    #[must_use]
    pub fn document_locator(&self) -> &str {
        &self.document_locator
    }

    #[must_use]
    pub fn any_lightbox_open(&self) -> bool {
        self.figures.iter().any(figure::State::listens_for_escape)
    }

    pub fn update_figure(&mut self, id: FigureId, message: figure::Message) {
        match self.figures.get_mut(id.0) {
            Some(state) => state.update(message),
            None => tracing::warn!(figure = id.0, "message for unknown figure"),
        }
    }

    /// Routes Escape to every figure that is listening for it.
    pub fn escape(&mut self) {
        for state in self
            .figures
            .iter_mut()
            .filter(|state| state.listens_for_escape())
        {
            state.update(figure::Message::EscapePressed);
        }
    }

    pub fn update_citation(&mut self, message: copy_button::Message) -> Task<Message> {
        self.citation.update(message).map(Message::Citation)
    }

    pub(super) fn citation_view(&self) -> iced::Element<'_, Message> {
        self.citation.view().map(Message::Citation)
    }

    pub(super) fn thumbnail(&self, id: FigureId, available_width: f32) -> iced::Element<'_, Message> {
        match self.figures.get(id.0) {
            Some(state) => state
                .view_thumbnail(available_width)
                .map(move |message| Message::Figure(id, message)),
            None => iced::widget::Space::new().into(),
        }
    }

    /// Overlays of every open figure, in page order.
    pub(super) fn overlays(&self) -> impl Iterator<Item = iced::Element<'_, Message>> {
        self.figures.iter().enumerate().filter_map(|(index, state)| {
            state
                .view_overlay()
                .map(move |overlay| overlay.map(move |message| Message::Figure(FigureId(index), message)))
        })
    }
}
