// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Background for the whole home screen.
pub fn screen(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);
    container::Style {
        background: Some(Background::Color(if is_light {
            palette::TAUPE_100
        } else {
            palette::GRAY_900
        })),
        ..Default::default()
    }
}

/// Surface-variant background used by the bottom navigation bar.
pub fn chrome(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);
    container::Style {
        background: Some(Background::Color(if is_light {
            palette::TAUPE_200
        } else {
            palette::GRAY_700
        })),
        ..Default::default()
    }
}

/// Screen background used by the side navigation rail.
///
/// The rail intentionally blends into the screen instead of using the
/// surface variant, matching the bottom bar / rail asymmetry of the layout.
pub fn rail(theme: &Theme) -> container::Style {
    screen(theme)
}

/// Rounded surface for a collection card.
pub fn card(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);
    container::Style {
        background: Some(Background::Color(if is_light {
            palette::TAUPE_200
        } else {
            palette::GRAY_700
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Near-opaque surface holding the search icon and input.
///
/// The color is derived from white (or the dark surface) with a slight
/// opacity so the field reads as a panel over the screen background.
pub fn search_field(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);
    let base = if is_light {
        palette::WHITE
    } else {
        palette::GRAY_700
    };

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}
