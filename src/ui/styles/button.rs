// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for a navigation entry in the bottom bar or side rail.
///
/// The selected entry gets a pill-shaped indicator; unselected entries stay
/// flat and dim until hovered.
pub fn nav_entry(is_selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let is_light = matches!(theme, Theme::Light);

        let (indicator, text_selected, text_unselected) = if is_light {
            (palette::TAUPE_200, palette::GRAY_900, palette::GRAY_400)
        } else {
            (palette::GRAY_700, palette::WHITE, palette::GRAY_200)
        };

        if is_selected {
            button::Style {
                background: Some(Background::Color(indicator)),
                text_color: text_selected,
                border: Border {
                    radius: radius::FULL.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                snap: true,
            }
        } else {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Some(Background::Color(Color {
                        a: 0.5,
                        ..indicator
                    }))
                }
                _ => None,
            };
            button::Style {
                background,
                text_color: text_unselected,
                border: Border {
                    radius: radius::FULL.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
    }
}
