// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::viewer;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// An event for the viewer core, from a widget or a keyboard shortcut.
    Viewer(viewer::Event),
    /// Raw window, mouse, touch or modifier event, turned into gestures by
    /// the pointer tracker.
    RawEvent(iced::Event),
    /// Animation frame while a transition or gesture is running.
    Tick(Instant),
    /// Press on the chrome that no control handled. Swallowed so it never
    /// starts a gesture on the image underneath.
    ChromePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PINCH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional page catalog file, overriding `[catalog] path`.
    pub catalog: Option<String>,
    /// Optional page image directory, overriding `[catalog] assets_dir`.
    pub assets_dir: Option<String>,
}
