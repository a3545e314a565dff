//! # Position Modes
//!
//! The five CSS positioning schemes and the explanation shown for each.
//!
//! `PositionMode::ALL` is the only list of modes in the workspace. Selectors
//! are built from it and the explanation lookup is an exhaustive match, so a
//! mode without a caption does not compile.
//!
//! ## Example
//!
//! ```rust
//! use position_core::mode::{explanation_for, PositionMode};
//!
//! let mode = PositionMode::from_str_flexible("Absolute").unwrap();
//! assert_eq!(mode.value(), "absolute");
//! assert!(explanation_for(mode).contains("closest positioned ancestor"));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{VisualizerError, VisualizerResult};

/// CSS `position` property values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionMode {
    /// Normal document flow; offsets have no effect
    #[default]
    Static,
    /// Offset from the normal position
    Relative,
    /// Offset from the nearest positioned ancestor
    Absolute,
    /// Offset from the viewport
    Fixed,
    /// Relative until a scroll threshold, then fixed
    Sticky,
}

impl PositionMode {
    /// All modes in selector order
    pub const ALL: [PositionMode; 5] = [
        PositionMode::Static,
        PositionMode::Relative,
        PositionMode::Absolute,
        PositionMode::Fixed,
        PositionMode::Sticky,
    ];

    /// CSS keyword (e.g., "static", "absolute")
    pub fn value(&self) -> &'static str {
        match self {
            PositionMode::Static => "static",
            PositionMode::Relative => "relative",
            PositionMode::Absolute => "absolute",
            PositionMode::Fixed => "fixed",
            PositionMode::Sticky => "sticky",
        }
    }

    /// Label shown in the mode selector
    pub fn label(&self) -> &'static str {
        match self {
            PositionMode::Static => "Static (Default)",
            PositionMode::Relative => "Relative",
            PositionMode::Absolute => "Absolute",
            PositionMode::Fixed => "Fixed",
            PositionMode::Sticky => "Sticky",
        }
    }

    /// One-sentence description of how the mode places an element
    pub fn explanation(&self) -> &'static str {
        match self {
            PositionMode::Static => {
                "Default position. Elements are placed in the normal document flow."
            }
            PositionMode::Relative => {
                "Positioned relative to its normal position. \
                 Creates a positioning context for absolute children."
            }
            PositionMode::Absolute => {
                "Positioned relative to its closest positioned ancestor. \
                 Removed from normal document flow."
            }
            PositionMode::Fixed => {
                "Positioned relative to the viewport. Stays in place during scrolling."
            }
            PositionMode::Sticky => {
                "Toggles between relative and fixed depending on scroll position."
            }
        }
    }

    /// Whether `top`/`left` take effect in this mode
    pub fn applies_offsets(&self) -> bool {
        !matches!(self, PositionMode::Static)
    }

    /// Whether the element gives up its slot in the normal flow
    pub fn removes_from_flow(&self) -> bool {
        matches!(self, PositionMode::Absolute | PositionMode::Fixed)
    }

    /// Next mode in selector order, wrapping around
    pub fn next(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous mode in selector order, wrapping around
    pub fn previous(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Position of this mode within `ALL`
    pub fn index(&self) -> usize {
        match self {
            PositionMode::Static => 0,
            PositionMode::Relative => 1,
            PositionMode::Absolute => 2,
            PositionMode::Fixed => 3,
            PositionMode::Sticky => 4,
        }
    }

    /// Parse from the CSS keyword or selector label, ignoring case
    pub fn from_str_flexible(s: &str) -> VisualizerResult<Self> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|mode| {
                needle.eq_ignore_ascii_case(mode.value())
                    || needle.eq_ignore_ascii_case(mode.label())
            })
            .ok_or_else(|| VisualizerError::unknown_mode(s))
    }
}

impl std::fmt::Display for PositionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Explanation caption for a mode
pub fn explanation_for(mode: PositionMode) -> &'static str {
    mode.explanation()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_explanations_distinct_and_non_empty() {
        let texts: HashSet<&str> = PositionMode::ALL.iter().map(|m| explanation_for(*m)).collect();
        assert_eq!(texts.len(), PositionMode::ALL.len());
        assert!(texts.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn test_explanation_semantics() {
        assert!(PositionMode::Static.explanation().contains("normal document flow"));
        assert!(PositionMode::Relative.explanation().contains("positioning context"));
        assert!(PositionMode::Absolute.explanation().contains("Removed from normal document flow"));
        assert!(PositionMode::Fixed.explanation().contains("viewport"));
        assert!(PositionMode::Sticky.explanation().contains("relative and fixed"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(PositionMode::Static.label(), "Static (Default)");
        assert_eq!(PositionMode::Sticky.to_string(), "Sticky");
        assert_eq!(PositionMode::default(), PositionMode::Static);
    }

    #[test]
    fn test_index_matches_all() {
        for (i, mode) in PositionMode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), i);
        }
    }

    #[test]
    fn test_cycle() {
        assert_eq!(PositionMode::Static.next(), PositionMode::Relative);
        assert_eq!(PositionMode::Sticky.next(), PositionMode::Static);
        assert_eq!(PositionMode::Static.previous(), PositionMode::Sticky);
        assert_eq!(PositionMode::Fixed.previous(), PositionMode::Absolute);
    }

    #[test]
    fn test_flags() {
        assert!(!PositionMode::Static.applies_offsets());
        assert!(PositionMode::Sticky.applies_offsets());
        assert!(PositionMode::Absolute.removes_from_flow());
        assert!(PositionMode::Fixed.removes_from_flow());
        assert!(!PositionMode::Relative.removes_from_flow());
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(PositionMode::from_str_flexible("FIXED").unwrap(), PositionMode::Fixed);
        assert_eq!(PositionMode::from_str_flexible(" sticky ").unwrap(), PositionMode::Sticky);
        assert_eq!(
            PositionMode::from_str_flexible("static (default)").unwrap(),
            PositionMode::Static
        );
        let err = PositionMode::from_str_flexible("float").unwrap_err();
        assert_eq!(err, VisualizerError::unknown_mode("float"));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PositionMode::Absolute).unwrap();
        assert_eq!(json, "\"absolute\"");
        let roundtrip: PositionMode = serde_json::from_str("\"sticky\"").unwrap();
        assert_eq!(roundtrip, PositionMode::Sticky);
    }
}
