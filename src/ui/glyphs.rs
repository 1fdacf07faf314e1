// SPDX-License-Identifier: MPL-2.0
//! Centralized UI glyphs.
//!
//! Glyphs are single-color SVG symbols embedded at compile time via
//! `include_bytes!`; handles are cached using `OnceLock` so repeated views
//! reuse the parsed asset. Drawn in black, they are tinted at the call site
//! with [`tinted`].

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Macro to define a glyph function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_glyph {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/svg/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_glyph!(search, "search.svg", "Search icon: magnifying glass.");
define_glyph!(spa, "spa.svg", "Spa icon: lotus leaves, marks the home destination.");
define_glyph!(
    account_circle,
    "account_circle.svg",
    "Account icon: person in a circle, marks the profile destination."
);

/// Creates a glyph with specified dimensions.
pub fn sized(glyph: Svg<'static>, size: f32) -> Svg<'static> {
    glyph.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Recolors a glyph with a fixed tint.
pub fn tinted(glyph: Svg<'static>, color: Color) -> Svg<'static> {
    glyph.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_glyphs_load_successfully() {
        // These calls verify that all include_bytes! paths are valid
        let _ = search();
        let _ = spa();
        let _ = account_circle();
    }

    #[test]
    fn sized_helper_works() {
        let glyph = sized(search(), 24.0);
        let _ = glyph;
    }

    #[test]
    fn tinted_helper_works() {
        let glyph = tinted(spa(), Color::BLACK);
        let _ = glyph;
    }
}
