// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use iced::Size;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The toggle button under the clock was pressed.
    ToggleSecondHand,
    /// The window was opened or resized to the given logical size.
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_CLOCK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Print the effective configuration as TOML and exit.
    pub dump_config: bool,
}
