//! # Selection State
//!
//! `UiState` is the one piece of mutable data in a session: the selected
//! mode and the two offsets. Front ends own one instance each and rebuild
//! their views from it after every mutation.

use serde::{Deserialize, Serialize};

use crate::mode::PositionMode;
use crate::offsets::{Axis, OffsetPair};
use crate::style::BoxStyle;

/// Current mode and offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiState {
    mode: PositionMode,
    offsets: OffsetPair,
}

impl UiState {
    /// Fresh state: static, top 0, left 0
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> PositionMode {
        self.mode
    }

    pub fn offsets(&self) -> OffsetPair {
        self.offsets
    }

    /// Replace the mode. Offsets are kept as they are.
    pub fn set_mode(&mut self, mode: PositionMode) {
        log::debug!("position mode {} -> {}", self.mode.value(), mode.value());
        self.mode = mode;
    }

    /// Replace one offset
    pub fn set_offset(&mut self, axis: Axis, value: i32) {
        self.offsets.set(axis, value);
        log::debug!("{} offset = {}", axis.css_property(), self.offsets.get(axis));
    }

    /// Move one offset by whole slider steps
    pub fn nudge_offset(&mut self, axis: Axis, steps: i32) {
        self.offsets.nudge(axis, steps);
        log::debug!("{} offset = {}", axis.css_property(), self.offsets.get(axis));
    }

    /// Back to static, 0, 0
    pub fn reset(&mut self) {
        log::debug!("state reset");
        *self = Self::default();
    }

    /// Offset sliders are hidden while static is selected
    pub fn offset_controls_visible(&self) -> bool {
        self.mode.applies_offsets()
    }

    pub fn explanation(&self) -> &'static str {
        self.mode.explanation()
    }

    pub fn box_style(&self) -> BoxStyle {
        BoxStyle::for_state(self)
    }

    /// Text shown inside the demo box
    pub fn box_label(&self) -> String {
        format!("position: {}", self.mode.value())
    }
}
