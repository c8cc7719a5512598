// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the viewer core to localization, settings and the
//! iced runtime: it resolves the catalog and its image files at startup,
//! feeds widget and pointer events to the viewer, and keeps the tweened
//! presentation in step with each new snapshot.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{self, AssetLibrary, Catalog};
use crate::config::{self, Config, ANIMATION_TICK, DEFAULT_SHOW_INFO_PANEL};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::animation::Presentation;
use crate::ui::pointer;
use crate::ui::theming::ThemeMode;
use crate::viewer::{self, Viewer};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    viewer: Viewer,
    assets: AssetLibrary,
    presentation: Presentation,
    pointer: pointer::State,
    theme_mode: ThemeMode,
    now: Instant,
    /// Window size, kept in step with resize events.
    viewport: Size,
    /// Startup warning key (bad settings file, unreadable catalog).
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("snapshot", &self.viewer.snapshot())
            .field("assets", &self.assets.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 360;

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
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
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Loads the catalog named by the CLI or the settings, falling back to the
/// built-in one. Returns the catalog and an optional warning key.
fn load_catalog(flags: &Flags, config: &Config) -> (Catalog, Option<String>) {
    let path = flags
        .catalog
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.catalog.path.clone());

    let Some(path) = path else {
        return (Catalog::builtin(), None);
    };

    match catalog::load_from_path(&path) {
        Ok(catalog) => {
            log::info!("Loaded {} page(s) from {}", catalog.len(), path.display());
            (catalog, None)
        }
        Err(error) => {
            log::warn!("Using built-in catalog, {} failed: {}", path.display(), error);
            let key = match &error {
                Error::Catalog(reason) => reason.i18n_key(),
                Error::Io(_) => "error-catalog-unreadable",
                Error::Config(_) => "error-catalog-malformed",
            };
            (Catalog::builtin(), Some(key.to_string()))
        }
    }
}

impl App {
    /// Initializes application state from the settings file and the CLI
    /// flags, then schedules the entry animation.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let (catalog, catalog_warning) = load_catalog(&flags, &config);
        let assets_dir = paths::get_assets_dir_with_override(
            flags
                .assets_dir
                .as_ref()
                .map(PathBuf::from)
                .or_else(|| config.catalog.assets_dir.clone()),
        );
        let assets = AssetLibrary::load(assets_dir.as_deref(), &catalog);

        let show_info_panel = config
            .display
            .show_info_panel
            .unwrap_or(DEFAULT_SHOW_INFO_PANEL);
        let viewer = Viewer::new(catalog).with_info_panel(show_info_panel);

        let now = Instant::now();
        let app = App {
            i18n,
            presentation: Presentation::new(&viewer.snapshot(), now),
            viewer,
            assets,
            pointer: pointer::State::default(),
            theme_mode: config.general.theme_mode,
            now,
            viewport: default_window_size(),
            notice: config_warning.or(catalog_warning),
        };

        (app, Task::done(Message::Viewer(viewer::Event::Mount)))
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.presentation.is_animating(self.now) || self.pointer.is_gesturing(),
            ANIMATION_TICK,
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let aspect_ratio = self
            .assets
            .get(self.viewer.current_page().image_name())
            .map(|asset| asset.aspect_ratio());

        let mut ctx = update::UpdateContext {
            viewer: &mut self.viewer,
            presentation: &mut self.presentation,
            pointer: &mut self.pointer,
            now: &mut self.now,
            viewport: &mut self.viewport,
            aspect_ratio,
        };

        match message {
            Message::Viewer(event) => update::handle_viewer_event(&mut ctx, event, Instant::now()),
            Message::RawEvent(event) => {
                update::handle_raw_event(&mut ctx, &event, Instant::now())
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::ChromePressed => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let notice = self.notice.as_deref().map(|key| self.i18n.tr(key));

        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: &self.viewer,
            assets: &self.assets,
            frame: self.presentation.frame(self.now),
            notice,
        })
    }
}
