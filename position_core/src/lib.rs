//! # position_core - CSS Position Visualizer Model
//!
//! `position_core` holds everything the visualizer front ends share: the
//! five CSS position modes with their explanations, the `top`/`left` offset
//! pair, the selection state, the style descriptor applied to the demo box,
//! and the preview geometry both renderers draw from.
//!
//! ## Design Philosophy
//!
//! - **One list of modes**: selectors and the explanation lookup both come
//!   from `PositionMode`, so they cannot drift apart
//! - **State in, view out**: front ends mutate a `UiState` and re-derive
//!   everything else from it
//! - **No persistence**: a new session always starts at static, 0, 0
//!
//! ## Quick Start
//!
//! ```rust
//! use position_core::{Axis, PositionMode, UiState};
//!
//! let mut state = UiState::new();
//! state.set_mode(PositionMode::Relative);
//! state.set_offset(Axis::Left, 20);
//!
//! assert_eq!(state.box_style().to_string(), "position: relative; top: 0px; left: 20px;");
//! println!("{}", state.explanation());
//! ```
//!
//! ## Modules
//!
//! - [`mode`] - Position modes and explanation lookup
//! - [`offsets`] - Offset pair, slider range and parsing
//! - [`state`] - Selection state holder
//! - [`style`] - Box style descriptor and reference frame
//! - [`layout`] - Preview placement per mode
//! - [`units`] - CSS pixel wrappers
//! - [`config`] - Presentation settings
//! - [`errors`] - Structured error types

pub mod config;
pub mod errors;
pub mod layout;
pub mod mode;
pub mod offsets;
pub mod state;
pub mod style;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use config::{load_config, VisualizerConfig};
pub use errors::{VisualizerError, VisualizerResult};
pub use layout::{Anchor, BoxPlacement, PreviewGeometry};
pub use mode::{explanation_for, PositionMode};
pub use offsets::{Axis, OffsetPair, OFFSET_MAX, OFFSET_MIN, OFFSET_RANGE, OFFSET_STEP};
pub use state::UiState;
pub use style::{BoxStyle, ReferenceFrame};
pub use units::{Px, PxRect};

/// Header copy shown above the controls
pub mod copy {
    pub const BADGE: &str = "CSS Position Property";
    pub const TITLE: &str = "Position Property Visualizer";
    pub const INTRO: &str = "Explore how CSS position properties work through this \
                             interactive visualization. Adjust the position and offset \
                             values to see real-time changes.";
    pub const SELECT_PLACEHOLDER: &str = "Select position property";
}
