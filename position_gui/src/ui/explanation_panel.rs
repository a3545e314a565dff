//! Explanation Panel
//!
//! Shows the caption for the selected position mode.

use iced::widget::{column, container, text};
use iced::{Element, Length};

use position_core::UiState;

use crate::Message;

/// Render the explanation panel
pub fn view_explanation_panel<'a>(state: &UiState) -> Element<'a, Message> {
    let content = column![
        text("Explanation").size(16),
        text(state.explanation()).size(14).color([0.45, 0.45, 0.5]),
    ]
    .spacing(8);

    container(content)
        .width(Length::Fill)
        .padding(16)
        .style(container::bordered_box)
        .into()
}
