// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together localization, theming, and the little UI
//! state the home screen has (width classification, navigation selection,
//! search text). This file keeps policy decisions (window sizing, locale
//! resolution, the resize-to-width-class mapping) close to the update loop
//! so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::home;
use crate::ui::layout::WidthClass;
use crate::ui::navigation::{self, Destination};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state bridging UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    width_class: WidthClass,
    selected: Destination,
    search_query: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("width_class", &self.width_class)
            .field("selected", &self.selected)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 460;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            width_class: WidthClass::classify(WINDOW_DEFAULT_WIDTH as f32),
            selected: Destination::Home,
            search_query: String::new(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` and the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            theme_mode: config.theme_mode,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Home(home::Message::SearchChanged(query)) => {
                self.search_query = query;
            }
            Message::Navigation(nav_message) => {
                navigation::update(nav_message, &mut self.selected);
            }
            Message::WindowResized(size) => {
                self.width_class = WidthClass::classify(size.width);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            width_class: self.width_class,
            selected: self.selected,
            search_query: &self.search_query,
        })
    }
}
