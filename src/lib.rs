// SPDX-License-Identifier: MPL-2.0
//! `pinch` is a single-screen image viewer built with the Iced GUI framework.
//!
//! It supports pinch-to-zoom, drag-to-pan, double-tap zoom toggling, a scale
//! control bar and a thumbnail drawer for switching pages. The interaction
//! logic lives in [`viewer`] and is free of rendering concerns; [`app`] and
//! [`ui`] are the Iced shell around it.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod viewer;
