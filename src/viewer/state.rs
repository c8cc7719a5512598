// SPDX-License-Identifier: MPL-2.0
//! Viewer state: zoom scale, pan offset, active page and panel flags.
//!
//! All mutations go through the named operations below so the invariants are
//! enforced in one place:
//! - the scale never leaves `[MIN_SCALE, MAX_SCALE]`;
//! - once an operation commits with the scale back at `MIN_SCALE`, the
//!   offset is zero (a drag may hold an offset at rest until it ends);
//! - the current page id always resolves in the catalog.

pub use crate::config::{DOUBLE_TAP_SCALE, MAX_SCALE, MIN_SCALE, SCALE_STEP};

use crate::catalog::{Catalog, PageId};

/// Zoom multiplier, guaranteed to be within `[MIN_SCALE, MAX_SCALE]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f32);

impl Scale {
    /// Creates a new scale, clamping the value to the valid range.
    /// NaN collapses to the minimum.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(MIN_SCALE);
        }
        Self(value.clamp(MIN_SCALE, MAX_SCALE))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Natural size.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_SCALE
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_SCALE
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(MIN_SCALE)
    }
}

/// Pan translation in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

/// Mutable viewer record. Created at mount, discarded at unmount.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    scale: Scale,
    offset: Offset,
    current_page_id: PageId,
    drawer_open: bool,
    entry_animation_done: bool,
    info_panel_visible: bool,
}

impl ViewerState {
    /// Initial state for the given catalog: natural size, no pan, default
    /// page, drawer closed, entry animation pending.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            scale: Scale::default(),
            offset: Offset::ZERO,
            current_page_id: catalog.default_page_id(),
            drawer_open: false,
            entry_animation_done: false,
            info_panel_visible: crate::config::DEFAULT_SHOW_INFO_PANEL,
        }
    }

    #[must_use]
    pub fn with_info_panel(mut self, visible: bool) -> Self {
        self.info_panel_visible = visible;
        self
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    #[must_use]
    pub fn current_page_id(&self) -> PageId {
        self.current_page_id
    }

    #[must_use]
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    #[must_use]
    pub fn entry_animation_done(&self) -> bool {
        self.entry_animation_done
    }

    #[must_use]
    pub fn info_panel_visible(&self) -> bool {
        self.info_panel_visible
    }

    // ---------------------------------------------------------------------
    // Operations
    // ---------------------------------------------------------------------

    /// Back to natural size with no pan.
    pub fn reset(&mut self) {
        self.scale = Scale::default();
        self.offset = Offset::ZERO;
    }

    /// Stores a clamped scale; reaching the minimum also clears the pan.
    pub fn set_scale(&mut self, value: f32) {
        let scale = Scale::new(value);
        if scale.is_min() {
            self.reset();
        } else {
            self.scale = scale;
        }
    }

    /// Replaces the offset with the gesture translation since its start.
    pub fn apply_pan_delta(&mut self, delta: Offset) {
        self.offset = delta;
    }

    /// Commits a pan: at natural size the image snaps back to center.
    pub fn end_pan(&mut self) {
        if self.scale.is_min() {
            self.reset();
        }
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn toggle_info_panel(&mut self) {
        self.info_panel_visible = !self.info_panel_visible;
    }

    /// Switches to `id` if the catalog knows it. Unknown ids leave the state
    /// untouched and return `false`.
    pub fn select_page(&mut self, catalog: &Catalog, id: PageId) -> bool {
        if !catalog.contains(id) {
            log::debug!("Ignoring selection of unknown page {id}");
            return false;
        }
        self.current_page_id = id;
        self.reveal_after_selection();
        true
    }

    /// Selecting a page always makes the image visible, even when the entry
    /// fade-in has not run yet.
    fn reveal_after_selection(&mut self) {
        self.entry_animation_done = true;
    }

    /// Records that the view has appeared. Never reverts.
    pub fn mark_mounted(&mut self) {
        self.entry_animation_done = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_names(["one", "two", "three"]).expect("valid catalog")
    }

    #[test]
    fn scale_clamps_to_range() {
        assert_eq!(Scale::new(0.2).value(), MIN_SCALE);
        assert_eq!(Scale::new(9.0).value(), MAX_SCALE);
        assert_eq!(Scale::new(2.5).value(), 2.5);
        assert_eq!(Scale::new(f32::NAN).value(), MIN_SCALE);
        assert_eq!(Scale::new(f32::INFINITY).value(), MAX_SCALE);
    }

    #[test]
    fn new_state_uses_defaults() {
        let state = ViewerState::new(&catalog());
        assert_eq!(state.scale().value(), MIN_SCALE);
        assert!(state.offset().is_zero());
        assert_eq!(state.current_page_id(), PageId::new(2));
        assert!(!state.drawer_open());
        assert!(!state.entry_animation_done());
    }

    #[test]
    fn set_scale_above_min_keeps_offset() {
        let mut state = ViewerState::new(&catalog());
        state.set_scale(3.0);
        state.apply_pan_delta(Offset::new(10.0, -5.0));
        state.set_scale(4.0);

        assert_eq!(state.scale().value(), 4.0);
        assert_eq!(state.offset(), Offset::new(10.0, -5.0));
    }

    #[test]
    fn set_scale_to_min_clears_offset() {
        let mut state = ViewerState::new(&catalog());
        state.set_scale(3.0);
        state.apply_pan_delta(Offset::new(10.0, 10.0));
        state.set_scale(0.4);

        assert_eq!(state.scale().value(), MIN_SCALE);
        assert!(state.offset().is_zero());
    }

    #[test]
    fn pan_is_absolute_not_additive() {
        let mut state = ViewerState::new(&catalog());
        state.apply_pan_delta(Offset::new(10.0, 10.0));
        state.apply_pan_delta(Offset::new(12.0, 15.0));
        assert_eq!(state.offset(), Offset::new(12.0, 15.0));
    }

    #[test]
    fn end_pan_only_snaps_back_at_rest() {
        let mut state = ViewerState::new(&catalog());
        state.set_scale(2.0);
        state.apply_pan_delta(Offset::new(30.0, 40.0));
        state.end_pan();
        assert_eq!(state.offset(), Offset::new(30.0, 40.0));

        state.reset();
        state.apply_pan_delta(Offset::new(30.0, 40.0));
        state.end_pan();
        assert!(state.offset().is_zero());
    }

    #[test]
    fn toggles_flip_flags() {
        let mut state = ViewerState::new(&catalog());
        state.toggle_drawer();
        assert!(state.drawer_open());
        state.toggle_drawer();
        assert!(!state.drawer_open());

        let shown = state.info_panel_visible();
        state.toggle_info_panel();
        assert_eq!(state.info_panel_visible(), !shown);
    }

    #[test]
    fn select_known_page_reveals_image() {
        let catalog = catalog();
        let mut state = ViewerState::new(&catalog);

        assert!(state.select_page(&catalog, PageId::new(3)));
        assert_eq!(state.current_page_id(), PageId::new(3));
        assert!(state.entry_animation_done());
    }

    #[test]
    fn select_unknown_page_is_noop() {
        let catalog = catalog();
        let mut state = ViewerState::new(&catalog);
        let before = state.clone();

        assert!(!state.select_page(&catalog, PageId::new(99)));
        assert_eq!(state, before);
    }

    #[test]
    fn mark_mounted_is_sticky() {
        let mut state = ViewerState::new(&catalog());
        state.mark_mounted();
        state.reset();
        state.toggle_drawer();
        assert!(state.entry_animation_done());
    }
}
