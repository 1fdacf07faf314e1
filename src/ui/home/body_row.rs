// SPDX-License-Identifier: MPL-2.0
//! Horizontally scrollable row of body-element avatars.

use super::{Message, ViewContext};
use crate::catalog::{self, CatalogEntry};
use crate::illustration::{self, Crop};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::alignment::Horizontal;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{Column, Container, Image, Row, Scrollable, Text};
use iced::{Element, Length, Padding};

/// Render the "align your body" row: six circular avatars with captions,
/// in table order, behind a horizontal scrollable.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for entry in &catalog::BODY_ACTIVITIES {
        row = row.push(body_element(ctx, entry));
    }

    Scrollable::new(Container::new(row).padding([0.0, spacing::MD]))
        .direction(Direction::Horizontal(Scrollbar::new()))
        .width(Length::Fill)
        .into()
}

/// One avatar: a circular cropped illustration above a centered caption.
fn body_element<'a>(ctx: &ViewContext<'a>, entry: &CatalogEntry) -> Element<'a, Message> {
    let avatar = Image::new(illustration::handle(
        entry.image,
        Crop::Circle,
        sizing::AVATAR_DIAMETER as u32,
    ))
    .width(Length::Fixed(sizing::AVATAR_DIAMETER))
    .height(Length::Fixed(sizing::AVATAR_DIAMETER));

    let caption = Text::new(ctx.i18n.tr(entry.caption)).size(typography::BODY);

    Column::new()
        .align_x(Horizontal::Center)
        .push(avatar)
        .push(Container::new(caption).padding(Padding {
            top: spacing::LG,
            bottom: spacing::XS,
            ..Padding::ZERO
        }))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn body_row_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            search_query: "",
        };
        let _element = view(&ctx);
    }
}
