// SPDX-License-Identifier: MPL-2.0
//! Titled section wrapper.

use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{text, Column, Container, Text};
use iced::{Element, Length, Padding, Theme};

/// Wraps arbitrary content under a section header. The content slot keeps
/// the wrapper reusable for both home sections.
pub fn section<'a, Message: 'a>(
    title: String,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let header = Text::new(title)
        .size(typography::TITLE_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(if matches!(theme, Theme::Light) {
                palette::TAUPE_700
            } else {
                palette::TAUPE_200
            }),
        });

    Column::new()
        .width(Length::Fill)
        .push(Container::new(header).padding(Padding {
            top: spacing::XL,
            bottom: spacing::MD,
            left: spacing::MD,
            right: spacing::MD,
        }))
        .push(content)
        .into()
}
