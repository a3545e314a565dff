//! Live Preview panel
//!
//! Heading plus the preview canvas, sized from the configured geometry.

use iced::widget::{column, text, Canvas};
use iced::{Element, Length};

use position_core::{PreviewGeometry, UiState};

use crate::Message;
use super::shared::preview::{PositionPreview, PreviewData};

/// Render the preview panel
pub fn view_preview_panel<'a>(state: &UiState, geometry: &PreviewGeometry) -> Element<'a, Message> {
    let preview = PositionPreview::new(PreviewData::new(state, geometry));

    let canvas_widget: Element<'a, Message> = Canvas::new(preview)
        .width(Length::Fill)
        .height(Length::Fixed(geometry.height))
        .into();

    column![text("Live Preview").size(18), canvas_widget]
        .spacing(16)
        .into()
}
