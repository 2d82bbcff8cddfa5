// SPDX-License-Identifier: MPL-2.0
//! Page layout.
//!
//! The page is a single scrollable column, at most
//! [`sizing::PAGE_MAX_WIDTH`] wide: header, hero, overview, architecture,
//! training recipe, evaluation, citation and footer. Figures receive the
//! width of the column they sit in so their cards never overflow a row.

use super::message::Message;
use super::page::{Page, TableSlot};
use crate::content::{Point, Section};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, rule, scrollable, text, Column, Row, Space};
use iced::{Element, Length};

/// Below this content width, two-column rows stack vertically.
pub const TWO_COLUMN_MIN_WIDTH: f32 = 720.0;

/// Context required to render the page.
pub struct ViewContext<'a> {
    pub page: &'a Page,
    pub theme_mode: ThemeMode,
    pub window_width: f32,
}

/// Widths available to full-width and half-width blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnWidths {
    pub full: f32,
    /// `None` when rows stack into a single column.
    pub half: Option<f32>,
}

impl ColumnWidths {
    #[must_use]
    pub fn for_window(window_width: f32) -> Self {
        let full = (window_width.min(sizing::PAGE_MAX_WIDTH) - 2.0 * spacing::LG).max(0.0);
        let half = (full >= TWO_COLUMN_MIN_WIDTH).then(|| (full - spacing::LG) / 2.0);
        Self { full, half }
    }

    /// Width of one cell in a two-cell row.
    #[must_use]
    pub fn cell(&self) -> f32 {
        self.half.unwrap_or(self.full)
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let widths = ColumnWidths::for_window(ctx.window_width);
    let page = ctx.page;

    let body = Column::new()
        .spacing(spacing::XXL)
        .padding(spacing::LG)
        .max_width(sizing::PAGE_MAX_WIDTH)
        .push(header(page, ctx.theme_mode))
        .push(hero(page))
        .push(overview(page))
        .push(architecture(page, widths))
        .push(recipe(page))
        .push(evaluation(page, widths))
        .push(citation(page))
        .push(footer(page));

    scrollable(container(body).center_x(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Shown instead of the page when the content could not be loaded.
pub fn load_error(message: &str) -> Element<'_, Message> {
    container(
        Column::new()
            .spacing(spacing::SM)
            .max_width(sizing::PROSE_MAX_WIDTH)
            .push(text("The page content could not be loaded.").size(typography::TITLE_MD))
            .push(text(message).size(typography::BODY_SM).style(styles::text::danger)),
    )
    .center(Length::Fill)
    .into()
}

fn header(page: &Page, theme_mode: ThemeMode) -> Element<'_, Message> {
    let toggle = button(text(theme_mode.label()).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary)
        .on_press(Message::ToggleTheme);

    Row::new()
        .align_y(iced::Alignment::Center)
        .push(text(short_title(&page.content().title)).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(toggle)
        .into()
}

/// Part of the title before the first colon.
fn short_title(title: &str) -> &str {
    title.split(':').next().unwrap_or(title).trim()
}

fn hero(page: &Page) -> Element<'_, Message> {
    let content = page.content();

    let links = Row::new()
        .spacing(spacing::SM)
        .push(badge(format!("Paper: {}", page.document_locator())))
        .push(badge(format!("Code: {}", content.code_url)));

    Column::new()
        .spacing(spacing::MD)
        .align_x(iced::Alignment::Center)
        .width(Length::Fill)
        .push(text(&content.title).size(typography::DISPLAY).center())
        .push(text(&content.authors).size(typography::BODY_LG).center())
        .push(
            text(&content.tagline)
                .size(typography::BODY)
                .style(styles::text::muted)
                .center(),
        )
        .push(links)
        .into()
}

fn badge<'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge)
        .into()
}

fn overview(page: &Page) -> Element<'_, Message> {
    let content = page.content();

    let summary = content
        .summary
        .trim()
        .split("\n\n")
        .fold(Column::new().spacing(spacing::SM), |column, paragraph| {
            column.push(text(paragraph.trim()).size(typography::BODY))
        });

    Column::new()
        .spacing(spacing::LG)
        .push(heading("Abstract"))
        .push(prose(summary))
        .push(heading("Contributions"))
        .push(points(&content.contributions))
        .push(heading("Highlights"))
        .push(points(&content.highlights))
        .into()
}

fn architecture(page: &Page, widths: ColumnWidths) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::LG)
        .push(heading("Architecture"))
        .push(page.thumbnail(page.slots().architecture, widths.full))
        .into()
}

fn recipe(page: &Page) -> Element<'_, Message> {
    section(&page.content().recipe)
}

fn evaluation(page: &Page, widths: ColumnWidths) -> Element<'_, Message> {
    let slots = page.slots();
    let content = page.content();

    let real_robot = Column::new()
        .spacing(spacing::MD)
        .push(subheading("Real-robot evaluation"))
        .push(prose(text(caption_of(page, "real_robot_examples")).size(typography::BODY)))
        .push(page.thumbnail(slots.real_robot_examples, widths.full))
        .push(prose(text(caption_of(page, "real_robot_results")).size(typography::BODY)))
        .push(page.thumbnail(slots.real_robot_results, widths.full));

    let ablations = Column::new()
        .spacing(spacing::MD)
        .push(table_block(page, slots.ablations, widths.full))
        .push(section(&content.findings));

    Column::new()
        .spacing(spacing::XL)
        .push(heading("Evaluation"))
        .push(pair(page, slots.simulation, widths))
        .push(pair(page, slots.robot_benchmarks, widths))
        .push(real_robot)
        .push(ablations)
        .push(table_block(page, slots.performance, widths.full))
        .into()
}

/// Caption of a content figure, shown as prose when its card has none.
fn caption_of<'a>(page: &'a Page, figure: &str) -> &'a str {
    page.content()
        .figures
        .get(figure)
        .and_then(|spec| spec.caption.as_deref())
        .unwrap_or_default()
}

fn pair(page: &Page, slots: [TableSlot; 2], widths: ColumnWidths) -> Element<'_, Message> {
    let [first, second] = slots;
    let cell = widths.cell();

    match widths.half {
        Some(_) => Row::new()
            .spacing(spacing::LG)
            .push(table_block(page, first, cell))
            .push(table_block(page, second, cell))
            .into(),
        None => Column::new()
            .spacing(spacing::XL)
            .push(table_block(page, first, cell))
            .push(table_block(page, second, cell))
            .into(),
    }
}

fn table_block(page: &Page, slot: TableSlot, width: f32) -> Element<'_, Message> {
    let Some(table) = page.content().tables.get(slot.table) else {
        return Space::new().into();
    };

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(width))
        .push(subheading(&table.title))
        .push(
            text(&table.description)
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        )
        .push(page.thumbnail(slot.figure, width))
        .into()
}

fn citation(page: &Page) -> Element<'_, Message> {
    let bibtex = container(
        text(page.citation().text().trim())
            .size(typography::BODY_SM)
            .font(iced::Font::MONOSPACE),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::code_block);

    Column::new()
        .spacing(spacing::MD)
        .push(
            Row::new()
                .align_y(iced::Alignment::Center)
                .push(heading("Citation"))
                .push(Space::new().width(Length::Fill))
                .push(page.citation_view()),
        )
        .push(bibtex)
        .into()
}

fn footer(page: &Page) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::MD)
        .push(rule::horizontal(1))
        .push(
            text(&page.content().footer)
                .size(typography::CAPTION)
                .style(styles::text::muted)
                .width(Length::Fill)
                .center(),
        )
        .into()
}

fn section(block: &Section) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::LG)
        .push(heading(&block.title))
        .push(prose(text(&block.intro).size(typography::BODY)))
        .push(points(&block.points))
        .into()
}

fn points(points: &[Point]) -> Element<'_, Message> {
    points
        .iter()
        .fold(Column::new().spacing(spacing::MD), |column, point| {
            column.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(text(&point.title).size(typography::TITLE_SM))
                    .push(
                        text(&point.content)
                            .size(typography::BODY)
                            .style(styles::text::muted),
                    ),
            )
        })
        .into()
}

fn prose<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .max_width(sizing::PROSE_MAX_WIDTH)
        .into()
}

fn heading(label: &str) -> Element<'_, Message> {
    text(label).size(typography::TITLE_LG).into()
}

fn subheading(label: &str) -> Element<'_, Message> {
    text(label).size(typography::TITLE_MD).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_window_is_capped_at_page_width() {
        let widths = ColumnWidths::for_window(1920.0);
        assert_eq!(widths.full, sizing::PAGE_MAX_WIDTH - 2.0 * spacing::LG);
        let half = widths.half.expect("two columns");
        assert!((2.0 * half + spacing::LG - widths.full).abs() < 1e-3);
    }

    #[test]
    fn narrow_window_stacks_rows() {
        let widths = ColumnWidths::for_window(600.0);
        assert!(widths.half.is_none());
        assert_eq!(widths.cell(), widths.full);
    }

    #[test]
    fn minimum_window_keeps_two_columns() {
        let widths = ColumnWidths::for_window(super::super::MIN_WINDOW_WIDTH as f32);
        assert!(widths.half.is_some());
    }

    #[test]
    fn zero_width_window_does_not_go_negative() {
        let widths = ColumnWidths::for_window(0.0);
        assert_eq!(widths.full, 0.0);
        assert!(widths.half.is_none());
    }

    #[test]
    fn short_title_stops_at_colon() {
        assert_eq!(short_title("SimVLA: A Simple VLA Baseline"), "SimVLA");
        assert_eq!(short_title("Untitled"), "Untitled");
    }
}
