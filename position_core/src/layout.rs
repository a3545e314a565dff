//! # Preview Layout
//!
//! Where the demo box lands inside the preview container for each mode.
//! Coordinates are CSS pixels from the container's top-left corner; the
//! container itself is the positioned ancestor (it is `position: relative`
//! in the page being imitated).
//!
//! | Mode     | Anchor              | Placement                             |
//! |----------|---------------------|---------------------------------------|
//! | static   | normal flow         | padding box origin                    |
//! | relative | normal flow         | normal slot + (left, top)             |
//! | absolute | positioned ancestor | container edge + (left, top)          |
//! | fixed    | viewport            | viewport origin + (left, top)         |
//! | sticky   | normal flow         | normal slot, pushed to (left, top)    |
//!
//! The container clips its overflow, which makes it the scrollport for a
//! sticky box. Unscrolled, the box keeps its slot unless an offset asks for
//! more distance from the scrollport edge than the padding gives; then it
//! is pushed to that offset, but never past the bottom of the content box.
//! The container width is unknown here, so the horizontal push is not
//! limited.

use serde::{Deserialize, Serialize};

use crate::mode::PositionMode;
use crate::state::UiState;
use crate::units::PxRect;

/// Dimensions of the preview container and demo box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewGeometry {
    /// Container height (px)
    pub height: f32,
    /// Container padding (px), which is where the normal flow starts
    pub padding: f32,
    /// Side length of the square demo box (px)
    pub box_size: f32,
}

impl Default for PreviewGeometry {
    fn default() -> Self {
        Self {
            height: 300.0,
            padding: 16.0,
            box_size: 128.0,
        }
    }
}

/// What the box's offsets are measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    NormalFlow,
    PositionedAncestor,
    Viewport,
}

impl Anchor {
    pub fn description(&self) -> &'static str {
        match self {
            Anchor::NormalFlow => "normal flow",
            Anchor::PositionedAncestor => "positioned ancestor",
            Anchor::Viewport => "viewport",
        }
    }
}

/// Laid-out demo box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxPlacement {
    pub rect: PxRect,
    pub anchor: Anchor,
    /// Whether the box still occupies its normal-flow slot
    pub reserves_space: bool,
}

impl PreviewGeometry {
    /// Where the box sits with `position: static`
    pub fn normal_flow_slot(&self) -> PxRect {
        PxRect::new(self.padding, self.padding, self.box_size, self.box_size)
    }

    /// Place the box, treating the container as the viewport
    pub fn place(&self, state: &UiState) -> BoxPlacement {
        self.place_in_viewport(state, (0.0, 0.0))
    }

    /// Place the box given the container's origin inside the viewport.
    /// Only `fixed` depends on it.
    pub fn place_in_viewport(
        &self,
        state: &UiState,
        viewport_origin: (f32, f32),
    ) -> BoxPlacement {
        let slot = self.normal_flow_slot();
        let offsets = state.offsets();
        let (dx, dy) = (offsets.left as f32, offsets.top as f32);
        let at_origin = PxRect::new(0.0, 0.0, self.box_size, self.box_size);

        let (rect, anchor) = match state.mode() {
            PositionMode::Static => (slot, Anchor::NormalFlow),
            PositionMode::Sticky => (self.stick(slot, dx, dy), Anchor::NormalFlow),
            PositionMode::Relative => (slot.translate(dx, dy), Anchor::NormalFlow),
            PositionMode::Absolute => (at_origin.translate(dx, dy), Anchor::PositionedAncestor),
            PositionMode::Fixed => (
                at_origin.translate(dx - viewport_origin.0, dy - viewport_origin.1),
                Anchor::Viewport,
            ),
        };

        BoxPlacement {
            rect,
            anchor,
            reserves_space: !state.mode().removes_from_flow(),
        }
    }

    /// Sticky box in an unscrolled scrollport: at least `(left, top)` from
    /// the container edge, kept above the bottom padding
    fn stick(&self, slot: PxRect, left: f32, top: f32) -> PxRect {
        let lowest = self.height - self.padding - self.box_size;
        PxRect {
            x: slot.x.max(left),
            y: top.min(lowest).max(slot.y),
            ..slot
        }
    }

    /// Whether a ghost outline of the normal-flow slot is worth drawing
    pub fn shows_ghost(&self, placement: &BoxPlacement) -> bool {
        placement.rect != self.normal_flow_slot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offsets::Axis;

    fn state(mode: PositionMode, top: i32, left: i32) -> UiState {
        let mut state = UiState::new();
        state.set_mode(mode);
        state.set_offset(Axis::Top, top);
        state.set_offset(Axis::Left, left);
        state
    }

    #[test]
    fn test_static_ignores_offsets() {
        let geometry = PreviewGeometry::default();
        let placement = geometry.place(&state(PositionMode::Static, 40, -40));
        assert_eq!(placement.rect, PxRect::new(16.0, 16.0, 128.0, 128.0));
        assert_eq!(placement.anchor, Anchor::NormalFlow);
        assert!(placement.reserves_space);
        assert!(!geometry.shows_ghost(&placement));
    }

    #[test]
    fn test_relative_shifts_from_slot() {
        let geometry = PreviewGeometry::default();
        let placement = geometry.place(&state(PositionMode::Relative, -30, 15));
        assert_eq!(placement.rect, PxRect::new(31.0, -14.0, 128.0, 128.0));
        assert!(placement.reserves_space);
        assert!(geometry.shows_ghost(&placement));
    }

    #[test]
    fn test_absolute_from_container_edge() {
        let geometry = PreviewGeometry::default();
        let placement = geometry.place(&state(PositionMode::Absolute, -30, 15));
        assert_eq!(placement.rect, PxRect::new(15.0, -30.0, 128.0, 128.0));
        assert_eq!(placement.anchor, Anchor::PositionedAncestor);
        assert!(!placement.reserves_space);
    }

    #[test]
    fn test_fixed_uses_viewport_origin() {
        let geometry = PreviewGeometry::default();
        let s = state(PositionMode::Fixed, 10, 10);

        let in_preview = geometry.place(&s);
        assert_eq!(in_preview.rect.x, 10.0);
        assert_eq!(in_preview.anchor, Anchor::Viewport);

        let scrolled_page = geometry.place_in_viewport(&s, (40.0, 200.0));
        assert_eq!(scrolled_page.rect.x, -30.0);
        assert_eq!(scrolled_page.rect.y, -190.0);
    }

    #[test]
    fn test_sticky_within_padding_stays_in_slot() {
        let geometry = PreviewGeometry::default();
        let placement = geometry.place(&state(PositionMode::Sticky, 10, -25));
        assert_eq!(placement.rect, geometry.normal_flow_slot());
        assert!(placement.reserves_space);
        assert!(!geometry.shows_ghost(&placement));
    }

    #[test]
    fn test_sticky_pushed_past_padding() {
        let geometry = PreviewGeometry::default();
        let placement = geometry.place(&state(PositionMode::Sticky, 40, 40));
        assert_eq!(placement.rect, PxRect::new(40.0, 40.0, 128.0, 128.0));
        assert_eq!(placement.anchor, Anchor::NormalFlow);
        assert!(placement.reserves_space);
        assert!(geometry.shows_ghost(&placement));
    }

    #[test]
    fn test_sticky_stops_at_content_bottom() {
        let geometry = PreviewGeometry {
            height: 180.0,
            ..PreviewGeometry::default()
        };
        // Content box ends at 164, so the box top can go no lower than 36
        let placement = geometry.place(&state(PositionMode::Sticky, 50, 0));
        assert_eq!(placement.rect.y, 36.0);
        assert_eq!(placement.rect.x, 16.0);
    }
}
