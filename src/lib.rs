// SPDX-License-Identifier: MPL-2.0
//! `iced_soothe` renders the MySoothe wellness home screen with the Iced GUI
//! framework.
//!
//! It reproduces a classic responsive-layout exercise (search bar, a row of
//! circular activity avatars, a two-row grid of collection cards, and a
//! bottom bar or side rail chosen from the window width) and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod illustration;
pub mod ui;
