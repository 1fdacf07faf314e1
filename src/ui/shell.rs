// SPDX-License-Identifier: MPL-2.0
//! Top-level layout shells.
//!
//! A compact window stacks the home content over a bottom navigation bar; an
//! expanded window places a side rail next to it. [`Chrome::for_width`] is
//! the whole two-way branch.

use crate::ui::layout::WidthClass;
use iced::widget::{Column, Row};
use iced::{Element, Length};

/// Which navigation chrome a window width gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    /// Bottom navigation bar (compact windows).
    BottomBar,
    /// Side navigation rail (expanded windows).
    SideRail,
}

impl Chrome {
    #[must_use]
    pub fn for_width(class: WidthClass) -> Self {
        match class {
            WidthClass::Compact => Chrome::BottomBar,
            WidthClass::Expanded => Chrome::SideRail,
        }
    }
}

/// Narrow shell: home content above the bottom bar.
pub fn portrait<'a, Message: 'a>(
    home: Element<'a, Message>,
    bottom_bar: Element<'a, Message>,
) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(home)
        .push(bottom_bar)
        .into()
}

/// Wide shell: side rail next to the home content.
pub fn landscape<'a, Message: 'a>(
    side_rail: Element<'a, Message>,
    home: Element<'a, Message>,
) -> Element<'a, Message> {
    Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(side_rail)
        .push(home)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_windows_get_the_bottom_bar() {
        assert_eq!(Chrome::for_width(WidthClass::Compact), Chrome::BottomBar);
    }

    #[test]
    fn expanded_windows_get_the_side_rail() {
        assert_eq!(Chrome::for_width(WidthClass::Expanded), Chrome::SideRail);
    }
}
