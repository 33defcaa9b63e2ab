// SPDX-License-Identifier: MPL-2.0
//! Application root: one window hosting a clock face and a toggle button.
//!
//! The `App` owns the [`ClockFace`] and lays it out whenever the window
//! geometry changes. Flipping between portrait and landscape rebuilds the
//! face from configuration and carries its colors and the toggle over via a
//! serialized snapshot.

mod message;
mod orientation;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use orientation::Orientation;

use crate::clock::{ClockFace, SystemClock, TimeSource};
use crate::config::{
    self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT,
    WINDOW_DEFAULT_WIDTH,
};
use crate::ui::theming::ThemeMode;
use iced::widget::canvas::Cache;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    config: Config,
    face: ClockFace,
    cache: Cache,
    clock: Box<dyn TimeSource>,
    /// Whether the second hand currently wears the highlight color.
    highlighted: bool,
    window_size: Size,
    orientation: Orientation,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("face", &self.face)
            .field("highlighted", &self.highlighted)
            .field("window_size", &self.window_size)
            .field("orientation", &self.orientation)
            .field("theme_mode", &self.theme_mode)
            .finish_non_exhaustive()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_override(flags.config_dir);

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the initial face.
    fn new() -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        if let Some(key) = warning {
            tracing::warn!(%key, "falling back to default settings");
        }
        (Self::with_clock(config, Box::new(SystemClock)), Task::none())
    }

    /// Builds the application around an explicit time source.
    pub fn with_clock(config: Config, clock: Box<dyn TimeSource>) -> Self {
        let window_size = Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT);
        let mut app = Self {
            face: build_face(&config),
            theme_mode: config.general.theme_mode,
            config,
            cache: Cache::new(),
            clock,
            highlighted: false,
            window_size,
            orientation: Orientation::of(window_size),
        };
        app.layout_face();
        app
    }

    fn title(&self) -> String {
        String::from("Iced Clock")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    #[must_use]
    pub fn face(&self) -> &ClockFace {
        &self.face
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

fn build_face(config: &Config) -> ClockFace {
    ClockFace::from_config(&config.clock.style).with_density(config.clock.density())
}
