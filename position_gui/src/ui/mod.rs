//! UI module for the Position Visualizer GUI
//!
//! The window is a single column: header above a card holding the panels.
//!
//! # Panel Structure
//! - `header` - Badge, title, intro paragraph
//! - `controls` - Mode picker, offset sliders (hidden under static), reset
//! - `preview_panel` - "Live Preview" heading over the preview canvas
//! - `style_bar` - Current CSS declarations and placement anchor
//! - `explanation_panel` - Caption for the selected mode
//!
//! # Shared Components
//! - `shared/preview` - Canvas drawing for the reference frame and demo box

pub mod header;
pub mod controls;
pub mod preview_panel;
pub mod style_bar;
pub mod explanation_panel;

pub mod shared;
