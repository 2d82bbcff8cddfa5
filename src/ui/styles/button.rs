// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Borderless button wrapping a figure thumbnail.
pub fn thumbnail(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.base.color,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: None,
        text_color: palette.background.base.text,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Round translucent close button on the lightbox backdrop.
pub fn overlay_close(_theme: &Theme, status: button::Status) -> button::Style {
    let (alpha, text_alpha) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (opacity::OVERLAY_HOVER, opacity::OPAQUE)
        }
        _ => (opacity::OVERLAY_SUBTLE, opacity::TEXT_MUTED),
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        })),
        text_color: Color {
            a: text_alpha,
            ..palette::WHITE
        },
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Small bordered button used by the copy control and the header actions.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => palette.background.weak.color,
        button::Status::Pressed => palette.background.strong.color,
        _ => palette.background.base.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.background.base.text,
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}
