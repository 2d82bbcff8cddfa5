// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Near-opaque dimmed layer behind the enlarged image.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Semi-opaque pill carrying the caption at the bottom of the lightbox.
pub fn caption_pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        text_color: Some(Color {
            a: opacity::TEXT_STRONG,
            ..WHITE
        }),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_dims_the_page() {
        let style = backdrop(&Theme::Light);
        let Some(Background::Color(color)) = style.background else {
            panic!("Expected color background")
        };
        assert_eq!(color.a, opacity::BACKDROP);
    }

    #[test]
    fn caption_pill_is_translucent() {
        let style = caption_pill(&Theme::Dark);
        let Some(Background::Color(color)) = style.background else {
            panic!("Expected color background")
        };
        assert!(color.a < opacity::BACKDROP);
    }
}
