// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! view takes a `ViewContext` and emits [`crate::viewer::Event`]s, which the
//! application feeds to the viewer core.
//!
//! # Components
//!
//! - [`page_image`] - Custom widget drawing the transformed page
//! - [`control_bar`] - Zoom out / reset / zoom in buttons
//! - [`info_panel`] - Scale and offset readout
//! - [`drawer`] - Thumbnail drawer
//!
//! # Shared Infrastructure
//!
//! - [`pointer`] - Raw mouse/touch events to gestures
//! - [`animation`] - Tweening toward each new snapshot
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod animation;
pub mod control_bar;
pub mod design_tokens;
pub mod drawer;
pub mod info_panel;
pub mod page_image;
pub mod pointer;
pub mod styles;
pub mod theming;
