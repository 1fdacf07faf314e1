// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::text_input::{Status, Style};
use iced::{Background, Border, Theme};

/// Style for the home screen search input.
///
/// The surrounding container paints the field surface, so the input itself
/// stays transparent and only contributes text and caret colors.
pub fn search(theme: &Theme, status: Status) -> Style {
    let is_light = matches!(theme, Theme::Light);

    let (value, placeholder, selection) = if is_light {
        (palette::GRAY_900, palette::GRAY_400, palette::TAUPE_200)
    } else {
        (palette::WHITE, palette::GRAY_200, palette::GRAY_700)
    };

    let border = match status {
        Status::Focused { .. } => Border {
            color: palette::TAUPE_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        _ => Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
    };

    Style {
        background: Background::Color(iced::Color::TRANSPARENT),
        border,
        icon: placeholder,
        placeholder,
        value,
        selection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_search_field_shows_accent_border() {
        let theme = Theme::Light;
        let idle = search(&theme, Status::Active);
        let focused = search(&theme, Status::Focused { is_hovered: false });
        assert_eq!(idle.border.width, 0.0);
        assert_eq!(focused.border.width, 1.0);
        assert_eq!(focused.border.color, palette::TAUPE_500);
    }
}
