// SPDX-License-Identifier: MPL-2.0
//! Search bar with a leading icon and localized placeholder.

use super::{Message, ViewContext};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::glyphs;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{text_input, Container, Row};
use iced::{Element, Length};

/// Render the search field. The typed text is echoed back through
/// [`Message::SearchChanged`] but drives no query.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let icon = glyphs::tinted(
        glyphs::sized(glyphs::search(), sizing::ICON_MD),
        palette::GRAY_400,
    );

    let input = text_input(&ctx.i18n.tr("placeholder-search"), ctx.search_query)
        .on_input(Message::SearchChanged)
        .size(typography::BODY_LG)
        .style(styles::text_input::search)
        .width(Length::Fill);

    let field = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icon)
        .push(input);

    let surface = Container::new(field)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SEARCH_BAR_HEIGHT))
        .padding([spacing::XS, spacing::SM])
        .align_y(Vertical::Center)
        .style(styles::container::search_field);

    Container::new(surface)
        .width(Length::Fill)
        .padding([0.0, spacing::MD])
        .into()
}
