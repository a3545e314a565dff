//! # Offsets
//!
//! The `top`/`left` pair driven by the two sliders. Values are whole CSS
//! pixels in `[OFFSET_MIN, OFFSET_MAX]`, stepping by `OFFSET_STEP`.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::errors::{VisualizerError, VisualizerResult};

/// Smallest slider value (px)
pub const OFFSET_MIN: i32 = -50;
/// Largest slider value (px)
pub const OFFSET_MAX: i32 = 50;
/// Slider step (px)
pub const OFFSET_STEP: i32 = 1;
/// Slider range as used by the GUI
pub const OFFSET_RANGE: RangeInclusive<i32> = OFFSET_MIN..=OFFSET_MAX;

/// Which offset a control edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Top,
    Left,
}

impl Axis {
    /// Both axes in control order
    pub const ALL: [Axis; 2] = [Axis::Top, Axis::Left];

    /// Control label (e.g., "Top")
    pub fn label(&self) -> &'static str {
        match self {
            Axis::Top => "Top",
            Axis::Left => "Left",
        }
    }

    /// CSS property name
    pub fn css_property(&self) -> &'static str {
        match self {
            Axis::Top => "top",
            Axis::Left => "left",
        }
    }

    /// The other axis
    pub fn toggle(&self) -> Self {
        match self {
            Axis::Top => Axis::Left,
            Axis::Left => Axis::Top,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Clamp a value into the slider range
pub fn clamp_offset(value: i32) -> i32 {
    value.clamp(OFFSET_MIN, OFFSET_MAX)
}

/// Parse typed offset text. Out-of-range integers are rejected rather
/// than clamped so a typo is reported instead of silently changed.
pub fn parse_offset(axis: Axis, input: &str) -> VisualizerResult<i32> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    let value: i64 = trimmed.parse().map_err(|_| {
        VisualizerError::invalid_offset(
            axis.css_property(),
            input,
            "expected a whole number of pixels",
        )
    })?;

    if value < i64::from(OFFSET_MIN) || value > i64::from(OFFSET_MAX) {
        return Err(VisualizerError::OffsetOutOfRange {
            value,
            min: OFFSET_MIN,
            max: OFFSET_MAX,
        });
    }

    // Range-checked above, so the narrowing cannot truncate.
    Ok(value as i32)
}

/// Top and left offsets in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawOffsetPair")]
pub struct OffsetPair {
    pub top: i32,
    pub left: i32,
}

/// Offsets as read, before clamping
#[derive(Deserialize)]
struct RawOffsetPair {
    top: i32,
    left: i32,
}

impl From<RawOffsetPair> for OffsetPair {
    fn from(raw: RawOffsetPair) -> Self {
        OffsetPair::new(raw.top, raw.left)
    }
}

impl OffsetPair {
    pub fn new(top: i32, left: i32) -> Self {
        Self {
            top: clamp_offset(top),
            left: clamp_offset(left),
        }
    }

    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Top => self.top,
            Axis::Left => self.left,
        }
    }

    /// Replace one offset. Slider input is already in range; clamping here
    /// keeps the pair valid for any other caller.
    pub fn set(&mut self, axis: Axis, value: i32) {
        let value = clamp_offset(value);
        match axis {
            Axis::Top => self.top = value,
            Axis::Left => self.left = value,
        }
    }

    /// Move one offset by `steps` slider steps
    pub fn nudge(&mut self, axis: Axis, steps: i32) {
        let current = self.get(axis);
        self.set(axis, current.saturating_add(steps.saturating_mul(OFFSET_STEP)));
    }
}
