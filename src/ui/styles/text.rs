// SPDX-License-Identifier: MPL-2.0
//! Text color styles.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::text;
use iced::{Color, Theme};

/// Secondary text such as captions and author affiliations.
pub fn muted(theme: &Theme) -> text::Style {
    let color = if theme.extended_palette().is_dark {
        palette::SLATE_200
    } else {
        palette::SLATE_600
    };
    text::Style { color: Some(color) }
}

/// Light text on the dark lightbox backdrop.
pub fn on_overlay(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color {
            a: opacity::TEXT_STRONG,
            ..palette::WHITE
        }),
    }
}

/// Confirmation color of the copy control after a successful copy.
pub fn success(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::SUCCESS_500),
    }
}

/// Warning color of the copy control after a failed copy.
pub fn danger(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}
