//! # Unit Types
//!
//! Newtype wrappers for CSS pixel quantities.
//!
//! - `Px` is a whole-pixel offset as written in a declaration (`top: 15px`).
//! - `PxRect` is a laid-out rectangle in preview coordinates, using `f32`
//!   so renderers can scale it without converting twice.
//!
//! ## Example
//!
//! ```rust
//! use position_core::units::{Px, PxRect};
//!
//! assert_eq!(Px(-30).to_string(), "-30px");
//!
//! let slot = PxRect::new(16.0, 16.0, 128.0, 128.0);
//! assert_eq!(slot.translate(15.0, -30.0).y, -14.0);
//! ```

use serde::{Deserialize, Serialize};

/// Length in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Px(pub i32);

impl Px {
    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

impl std::fmt::Display for Px {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Axis-aligned rectangle in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PxRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PxRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Shift by a pair of offsets
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_display() {
        assert_eq!(Px(50).to_string(), "50px");
        assert_eq!(Px(-50).to_string(), "-50px");
        assert_eq!(Px(0).to_string(), "0px");
    }

    #[test]
    fn test_px_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Px(15)).unwrap(), "15");
    }

    #[test]
    fn test_rect_translate() {
        let rect = PxRect::new(16.0, 16.0, 128.0, 128.0).translate(15.0, -30.0);
        assert_eq!(rect, PxRect::new(31.0, -14.0, 128.0, 128.0));
    }
}
