//! Style Bar
//!
//! Displays:
//! - The CSS declarations applied to the demo box
//! - What the box is currently anchored to

use iced::widget::{row, text, Space};
use iced::{Element, Font, Length, Padding};

use position_core::{PreviewGeometry, UiState};

use crate::Message;

/// Render the style bar
pub fn view_style_bar<'a>(state: &UiState, geometry: &PreviewGeometry) -> Element<'a, Message> {
    let placement = geometry.place(state);

    row![
        text(state.box_style().to_string()).size(12).font(Font::MONOSPACE),
        Space::new().width(Length::Fill),
        text(format!("anchored to {}", placement.anchor.description()))
            .size(11)
            .color([0.5, 0.5, 0.5]),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
