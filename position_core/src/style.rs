//! # Box Style
//!
//! The style descriptor applied to the demo box, and the static reference
//! frame drawn behind it.
//!
//! `top`/`left` are only emitted when the mode applies offsets, so a static
//! box never carries them no matter what the sliders hold.
//!
//! ## Example
//!
//! ```rust
//! use position_core::{Axis, BoxStyle, PositionMode, UiState};
//!
//! let mut state = UiState::new();
//! state.set_mode(PositionMode::Absolute);
//! state.set_offset(Axis::Top, -30);
//! state.set_offset(Axis::Left, 15);
//!
//! let style = BoxStyle::for_state(&state);
//! assert_eq!(style.to_string(), "position: absolute; top: -30px; left: 15px;");
//! ```

use serde::{Deserialize, Serialize};

use crate::mode::PositionMode;
use crate::state::UiState;
use crate::units::Px;

/// Style of the demo box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxStyle {
    pub position: PositionMode,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub top: Option<Px>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub left: Option<Px>,
}

impl BoxStyle {
    /// Derive the style from the current selection
    pub fn for_state(state: &UiState) -> Self {
        let mode = state.mode();
        let offsets = state.offsets();

        if mode.applies_offsets() {
            Self {
                position: mode,
                top: Some(Px(offsets.top)),
                left: Some(Px(offsets.left)),
            }
        } else {
            Self {
                position: mode,
                top: None,
                left: None,
            }
        }
    }

    /// Declarations in source order; omitted properties are absent
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut decls = vec![("position", self.position.value().to_string())];
        if let Some(top) = self.top {
            decls.push(("top", top.to_string()));
        }
        if let Some(left) = self.left {
            decls.push(("left", left.to_string()));
        }
        decls
    }
}

impl std::fmt::Display for BoxStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = self
            .declarations()
            .iter()
            .map(|(prop, value)| format!("{}: {};", prop, value))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", body)
    }
}

/// Border line style of the reference frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderLine {
    Solid,
    Dashed,
}

/// Dashed outline covering the whole preview, used only as a visual anchor.
/// It carries no state; every render gets the same value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceFrame {
    pub border_width: Px,
    pub line: BorderLine,
    /// Dash and gap lengths in pixels
    pub dash: [f32; 2],
    /// RGB in 0..=1
    pub color: [f32; 3],
}

impl Default for ReferenceFrame {
    fn default() -> Self {
        Self {
            border_width: Px(2),
            line: BorderLine::Dashed,
            dash: [6.0, 4.0],
            color: [0.82, 0.84, 0.86],
        }
    }
}
