// SPDX-License-Identifier: MPL-2.0
//! Home screen: search bar plus the two content sections in one scrollable
//! column.
//!
//! The screen itself owns no state; it renders from the static catalog and
//! the ephemeral search text held by the app root.

mod body_row;
mod collections_grid;
mod search_bar;
mod section;

pub use collections_grid::split_rows;

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use iced::widget::{Column, Scrollable, Space};
use iced::{Element, Length};

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub search_query: &'a str,
}

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// The search text changed. The text is kept as ephemeral UI state;
    /// nothing consumes it.
    SearchChanged(String),
}

/// Render the scrollable home screen.
pub fn screen<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body_section = section::section(
        ctx.i18n.tr("section-align-your-body"),
        body_row::view(&ctx),
    );
    let collections_section = section::section(
        ctx.i18n.tr("section-favorite-collections"),
        collections_grid::view(&ctx),
    );

    let content = Column::new()
        .width(Length::Fill)
        .push(Space::new().height(Length::Fixed(spacing::MD)))
        .push(search_bar::view(&ctx))
        .push(body_section)
        .push(collections_section)
        .push(Space::new().height(Length::Fixed(spacing::MD)));

    Scrollable::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_screen_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            search_query: "",
        };
        let _element = screen(ctx);
    }

    #[test]
    fn home_screen_renders_with_query_text() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            search_query: "yoga",
        };
        let _element = screen(ctx);
    }
}
