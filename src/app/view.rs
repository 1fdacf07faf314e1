// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the home screen
//! inside the shell picked from the current width classification.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::home;
use crate::ui::layout::WidthClass;
use crate::ui::navigation::{self, Destination};
use crate::ui::shell::{self, Chrome};
use crate::ui::styles;
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub width_class: WidthClass,
    pub selected: Destination,
    pub search_query: &'a str,
}

/// Renders the home screen with the chrome matching the width class.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let home = home::screen(home::ViewContext {
        i18n: ctx.i18n,
        search_query: ctx.search_query,
    })
    .map(Message::Home);

    let nav_ctx = navigation::ViewContext {
        i18n: ctx.i18n,
        selected: ctx.selected,
    };

    let shell_view = match Chrome::for_width(ctx.width_class) {
        Chrome::BottomBar => {
            let bar = navigation::bottom_bar(nav_ctx).map(Message::Navigation);
            shell::portrait(home, bar)
        }
        Chrome::SideRail => {
            let rail = navigation::side_rail(nav_ctx).map(Message::Navigation);
            shell::landscape(rail, home)
        }
    };

    Container::new(shell_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen)
        .into()
}
