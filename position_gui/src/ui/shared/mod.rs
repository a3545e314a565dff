//! Shared UI components
//!
//! Contains:
//! - `preview` - Canvas drawing for the positioned demo box

pub mod preview;
