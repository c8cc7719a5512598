// SPDX-License-Identifier: MPL-2.0
//! Interaction core of the viewer.
//!
//! [`Viewer`] owns the page catalog and the [`ViewerState`]. The UI feeds it
//! [`Event`]s and re-renders from [`Viewer::snapshot`] after each one. Every
//! event returns a [`Transition`] describing whether anything changed and
//! how the change should be animated.

pub mod controls;
pub mod gesture;
pub mod state;
pub mod transition;

pub use controls::ControlKind;
pub use gesture::Gesture;
pub use state::{Offset, Scale, ViewerState};
pub use transition::{Transition, TransitionHint};

use crate::catalog::{Catalog, Page, PageId};

/// Inbound events from the UI layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    DoubleTap,
    /// Drag translation since the drag started.
    DragChanged { dx: f32, dy: f32 },
    DragEnded,
    /// Magnification since the pinch started.
    PinchChanged(f32),
    PinchEnded,
    ControlPressed(ControlKind),
    ThumbnailSelected(PageId),
    DrawerHandleTapped,
    InfoPanelToggled,
    /// The view appeared on screen.
    Mount,
}

/// Read-only copy of the state handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub scale: f32,
    pub offset: Offset,
    pub current_page_id: PageId,
    pub drawer_open: bool,
    pub entry_animation_done: bool,
    pub info_panel_visible: bool,
}

/// Owner of the catalog and the viewer state.
#[derive(Debug, Clone)]
pub struct Viewer {
    catalog: Catalog,
    state: ViewerState,
}

impl Viewer {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let state = ViewerState::new(&catalog);
        Self { catalog, state }
    }

    /// Sets whether the info panel starts visible.
    #[must_use]
    pub fn with_info_panel(mut self, visible: bool) -> Self {
        self.state = self.state.with_info_panel(visible);
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// The page currently displayed.
    #[must_use]
    pub fn current_page(&self) -> &Page {
        match self.catalog.page(self.state.current_page_id()) {
            Some(page) => page,
            // The state only ever holds ids taken from this catalog.
            None => unreachable!("current page id left the catalog"),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            scale: self.state.scale().value(),
            offset: self.state.offset(),
            current_page_id: self.state.current_page_id(),
            drawer_open: self.state.drawer_open(),
            entry_animation_done: self.state.entry_animation_done(),
            info_panel_visible: self.state.info_panel_visible(),
        }
    }

    /// Applies one inbound event.
    pub fn handle(&mut self, event: Event) -> Transition {
        let before = self.snapshot();

        let hint = match event {
            Event::DoubleTap => gesture::interpret(&mut self.state, Gesture::DoubleTap),
            Event::DragChanged { dx, dy } => gesture::interpret(
                &mut self.state,
                Gesture::DragChanged(Offset::new(dx, dy)),
            ),
            Event::DragEnded => gesture::interpret(&mut self.state, Gesture::DragEnded),
            Event::PinchChanged(factor) => {
                gesture::interpret(&mut self.state, Gesture::PinchChanged(factor))
            }
            Event::PinchEnded => gesture::interpret(&mut self.state, Gesture::PinchEnded),
            Event::ControlPressed(kind) => controls::apply(&mut self.state, kind),
            Event::ThumbnailSelected(id) => {
                self.state.select_page(&self.catalog, id);
                TransitionHint::Immediate
            }
            Event::DrawerHandleTapped => {
                self.state.toggle_drawer();
                TransitionHint::ease_out()
            }
            Event::InfoPanelToggled => {
                self.state.toggle_info_panel();
                TransitionHint::Immediate
            }
            Event::Mount => {
                self.state.mark_mounted();
                TransitionHint::linear()
            }
        };

        let changed = self.snapshot() != before;
        if changed {
            log::trace!("{event:?} -> {:?}", self.snapshot());
        }
        Transition::new(changed, hint)
    }
}
