// SPDX-License-Identifier: MPL-2.0
//! `iced_clock` is an analog clock face widget built with the Iced GUI framework.
//!
//! The face itself lives in [`clock`] and draws into any [`clock::Surface`];
//! [`ui::clock_canvas`] adapts it to an Iced canvas and [`app`] hosts it in a
//! window with a second-hand toggle.

#![doc(html_root_url = "https://docs.rs/iced_clock/0.1.0")]

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod ui;
