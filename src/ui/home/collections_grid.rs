// SPDX-License-Identifier: MPL-2.0
//! Two-row, horizontally scrollable grid of collection cards.

use super::{Message, ViewContext};
use crate::catalog::{self, CatalogEntry};
use crate::illustration::{self, Crop};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::alignment::Vertical;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{Column, Container, Image, Row, Scrollable, Text};
use iced::{Element, Length};

/// Splits entries into the grid's two rows, column-major: item N lands in
/// row N mod 2, so the visual column order matches the table order.
pub fn split_rows(entries: &[CatalogEntry]) -> (Vec<CatalogEntry>, Vec<CatalogEntry>) {
    let mut top = Vec::with_capacity(entries.len().div_ceil(2));
    let mut bottom = Vec::with_capacity(entries.len() / 2);
    for (index, entry) in entries.iter().enumerate() {
        if index % 2 == 0 {
            top.push(*entry);
        } else {
            bottom.push(*entry);
        }
    }
    (top, bottom)
}

/// Render the "favorite collections" grid.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (top, bottom) = split_rows(&catalog::FAVORITE_COLLECTIONS);

    let grid = Column::new()
        .spacing(spacing::XS)
        .push(card_row(ctx, top))
        .push(card_row(ctx, bottom));

    Scrollable::new(Container::new(grid).padding([0.0, spacing::MD]))
        .direction(Direction::Horizontal(Scrollbar::new()))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::GRID_HEIGHT))
        .into()
}

fn card_row<'a>(ctx: &ViewContext<'a>, entries: Vec<CatalogEntry>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::MD);
    for entry in entries {
        row = row.push(collection_card(ctx, entry));
    }
    row.into()
}

/// One card: a rounded surface with a square illustration beside its label.
fn collection_card<'a>(ctx: &ViewContext<'a>, entry: CatalogEntry) -> Element<'a, Message> {
    let image = Image::new(illustration::handle(
        entry.image,
        Crop::Square,
        sizing::CARD_IMAGE as u32,
    ))
    .width(Length::Fixed(sizing::CARD_IMAGE))
    .height(Length::Fixed(sizing::CARD_IMAGE));

    let label = Text::new(ctx.i18n.tr(entry.caption)).size(typography::BODY_LG);

    let content = Row::new()
        .align_y(Vertical::Center)
        .push(image)
        .push(Container::new(label).padding([0.0, spacing::MD]));

    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_IMAGE))
        .style(crate::ui::styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn split_rows_distributes_column_major() {
        let entries = catalog::FAVORITE_COLLECTIONS;
        let (top, bottom) = split_rows(&entries);

        assert_eq!(top.len(), 3);
        assert_eq!(bottom.len(), 3);
        assert_eq!(top[0], entries[0]);
        assert_eq!(bottom[0], entries[1]);
        assert_eq!(top[1], entries[2]);
        assert_eq!(bottom[1], entries[3]);
        assert_eq!(top[2], entries[4]);
        assert_eq!(bottom[2], entries[5]);
    }

    #[test]
    fn split_rows_keeps_every_entry() {
        let entries = catalog::FAVORITE_COLLECTIONS;
        let (top, bottom) = split_rows(&entries);
        assert_eq!(top.len() + bottom.len(), entries.len());
    }

    #[test]
    fn split_rows_handles_odd_counts() {
        let entries = &catalog::FAVORITE_COLLECTIONS[..5];
        let (top, bottom) = split_rows(entries);
        assert_eq!(top.len(), 3);
        assert_eq!(bottom.len(), 2);
    }

    #[test]
    fn collections_grid_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            search_query: "",
        };
        let _element = view(&ctx);
    }
}
