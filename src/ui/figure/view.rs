// SPDX-License-Identifier: MPL-2.0
//! Thumbnail card and lightbox overlay rendering.

use super::{fitted_size, lightbox_bounds, thumbnail_size, Alignment, FigureSpec, Message};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::image::Handle;
use iced::widget::{
    button, container, image, mouse_area, opaque, responsive, text, tooltip, Column, Stack,
};
use iced::{ContentFit, Element, Length, Size};

/// Tooltip of the thumbnail button.
pub const VIEW_FULL_SIZE_LABEL: &str = "View full size image";

/// Tooltip of the lightbox close button.
pub const CLOSE_LABEL: &str = "Close preview";

const CLOSE_GLYPH: &str = "\u{2715}";

pub(super) fn thumbnail<'a>(
    spec: &'a FigureSpec,
    handle: &Handle,
    available_width: f32,
) -> Element<'a, Message> {
    let size = thumbnail_size(spec, available_width);

    let picture = image(handle.clone())
        .width(size.width)
        .height(size.height)
        .content_fit(ContentFit::Contain);

    let trigger = button(container(picture).style(styles::container::image_well))
        .padding(0)
        .style(styles::button::thumbnail)
        .on_press(Message::ThumbnailPressed);

    let trigger = styles::tooltip::styled(trigger, VIEW_FULL_SIZE_LABEL, tooltip::Position::Bottom);

    let mut card = Column::new().spacing(spacing::XS).push(trigger);
    if let Some(caption) = spec.caption.as_deref() {
        card = card.push(
            text(caption)
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );
    }

    let card = container(card)
        .padding(sizing::CARD_PADDING)
        .max_width(spec.max_display_width)
        .style(styles::container::card);

    let align = match spec.alignment {
        Alignment::Center => Horizontal::Center,
        Alignment::Left => Horizontal::Left,
    };

    container(card).width(Length::Fill).align_x(align).into()
}

/// Full-window overlay. The caller stacks it above the page.
///
/// Layers, bottom to top:
/// - backdrop (closes) with an inset stage (captures, never closes)
/// - the enlarged image inside the stage (closes)
/// - the caption pill inside the stage, if any
/// - the close button in the top-right corner
pub(super) fn overlay<'a>(spec: &'a FigureSpec, handle: &Handle) -> Element<'a, Message> {
    let handle = handle.clone();
    let intrinsic = spec.intrinsic_size();
    let caption = spec.caption.as_deref();

    let content = responsive(move |window: Size| {
        let fitted = fitted_size(intrinsic, lightbox_bounds(window));

        let picture = mouse_area(
            image(handle.clone())
                .width(fitted.width)
                .height(fitted.height)
                .content_fit(ContentFit::Contain),
        )
        .on_press(Message::ImagePressed)
        .interaction(mouse::Interaction::Pointer);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(container(picture).center(Length::Fill));

        if let Some(caption) = caption {
            let pill = container(
                text(caption)
                    .size(typography::BODY_SM)
                    .style(styles::text::on_overlay),
            )
            .padding([spacing::XS - 2.0, spacing::SM])
            .style(styles::overlay::caption_pill);

            layers = layers.push(
                container(pill)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .padding(spacing::LG)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Bottom),
            );
        }

        let stage = mouse_area(layers).on_press(Message::ContentPressed);

        let backdrop = mouse_area(
            container(stage)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .style(styles::overlay::backdrop),
        )
        .on_press(Message::BackdropPressed);

        let close = styles::tooltip::styled(
            button(text(CLOSE_GLYPH).size(sizing::ICON_MD).center())
                .padding(spacing::XS)
                .style(styles::button::overlay_close)
                .on_press(Message::CloseButtonPressed),
            CLOSE_LABEL,
            tooltip::Position::Left,
        );

        let close_layer = container(close)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Top);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(close_layer)
            .into()
    });

    opaque(content)
}
