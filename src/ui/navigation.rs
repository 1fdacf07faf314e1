// SPDX-License-Identifier: MPL-2.0
//! Navigation chrome: bottom bar and side rail.
//!
//! Both render the same two destinations (home, profile). Narrow windows get
//! the bottom bar, wide windows the vertically centered rail; the selected
//! entry is highlighted from real selection state. Neither entry routes
//! anywhere — the home screen is the only screen.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::glyphs;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::svg::{self, Svg};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Color, Element, Length, Padding, Theme};

/// Destinations offered by the navigation chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Profile,
}

impl Destination {
    pub const ALL: [Destination; 2] = [Destination::Home, Destination::Profile];

    /// Fluent key of the entry label.
    pub fn label_key(self) -> &'static str {
        match self {
            Destination::Home => "nav-home",
            Destination::Profile => "nav-profile",
        }
    }

    fn glyph(self) -> Svg<'static> {
        match self {
            Destination::Home => glyphs::spa(),
            Destination::Profile => glyphs::account_circle(),
        }
    }
}

/// Contextual data needed to render either chrome.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selected: Destination,
}

/// Messages emitted by the navigation chrome.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Selected(Destination),
}

/// Applies a navigation message to the current selection.
pub fn update(message: Message, selected: &mut Destination) {
    match message {
        Message::Selected(destination) => *selected = destination,
    }
}

/// Render the bottom navigation bar for narrow windows.
pub fn bottom_bar<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut entries = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .width(Length::Fill);

    for destination in Destination::ALL {
        entries = entries.push(entry(&ctx, destination));
    }

    Container::new(entries)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAV_BAR_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .style(styles::container::chrome)
        .into()
}

/// Render the side navigation rail for wide windows.
pub fn side_rail<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut entries = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center);

    for destination in Destination::ALL {
        entries = entries.push(entry(&ctx, destination));
    }

    Container::new(entries)
        .width(Length::Fixed(sizing::NAV_RAIL_WIDTH))
        .height(Length::Fill)
        .padding(Padding {
            left: spacing::XS,
            right: spacing::XS,
            ..Padding::ZERO
        })
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::rail)
        .into()
}

/// Build one navigation entry: glyph above a caption, highlighted when
/// selected.
fn entry<'a>(ctx: &ViewContext<'a>, destination: Destination) -> Element<'a, Message> {
    let is_selected = ctx.selected == destination;

    let glyph = glyphs::sized(destination.glyph(), sizing::ICON_MD).style(
        move |theme: &Theme, _status: svg::Status| svg::Style {
            color: Some(entry_tint(theme, is_selected)),
        },
    );

    let label = Text::new(ctx.i18n.tr(destination.label_key())).size(typography::CAPTION);

    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(glyph)
        .push(label);

    button(content)
        .on_press(Message::Selected(destination))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav_entry(is_selected))
        .into()
}

/// Glyph tint for an entry: the sage accent when selected, dimmed otherwise.
fn entry_tint(theme: &Theme, is_selected: bool) -> Color {
    let is_light = matches!(theme, Theme::Light);
    match (is_light, is_selected) {
        (true, true) => palette::SAGE_700,
        (true, false) => palette::GRAY_400,
        (false, true) => palette::SAGE_500,
        (false, false) => palette::GRAY_200,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_destinations_with_distinct_labels() {
        assert_eq!(Destination::ALL.len(), 2);
        assert_ne!(
            Destination::Home.label_key(),
            Destination::Profile.label_key()
        );
    }

    #[test]
    fn update_changes_selection() {
        let mut selected = Destination::Home;
        update(Message::Selected(Destination::Profile), &mut selected);
        assert_eq!(selected, Destination::Profile);

        update(Message::Selected(Destination::Home), &mut selected);
        assert_eq!(selected, Destination::Home);
    }

    #[test]
    fn update_with_current_selection_is_a_no_op() {
        let mut selected = Destination::Home;
        update(Message::Selected(Destination::Home), &mut selected);
        assert_eq!(selected, Destination::Home);
    }

    #[test]
    fn selected_entries_use_the_accent_tint() {
        assert_eq!(entry_tint(&Theme::Light, true), palette::SAGE_700);
        assert_eq!(entry_tint(&Theme::Dark, true), palette::SAGE_500);
        assert_ne!(
            entry_tint(&Theme::Light, false),
            entry_tint(&Theme::Light, true)
        );
    }

    #[test]
    fn bottom_bar_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            selected: Destination::Home,
        };
        let _element = bottom_bar(ctx);
    }

    #[test]
    fn side_rail_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            selected: Destination::Profile,
        };
        let _element = side_rail(ctx);
    }
}
