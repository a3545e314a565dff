//! Controls panel
//!
//! Displays:
//! - Position mode picker
//! - Top/left offset sliders (only when the mode applies offsets)
//! - Reset button

use iced::widget::{button, column, pick_list, row, slider, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use position_core::{copy, Axis, PositionMode, UiState, OFFSET_RANGE, OFFSET_STEP};

use crate::Message;

/// Render the controls
pub fn view_controls(state: &UiState) -> Element<'_, Message> {
    let picker = column![
        text("Position Property").size(14),
        pick_list(
            &PositionMode::ALL[..],
            Some(state.mode()),
            Message::ModeSelected
        )
        .placeholder(copy::SELECT_PLACEHOLDER)
        .width(Length::Fill)
        .text_size(14),
    ]
    .spacing(8);

    let mut panel: Column<'_, Message> = column![picker].spacing(16);

    if state.offset_controls_visible() {
        let sliders = Axis::ALL
            .iter()
            .fold(column![].spacing(16), |col, axis| col.push(view_offset_slider(state, *axis)));
        panel = panel.push(sliders);
    }

    let reset_row = row![
        Space::new().width(Length::Fill),
        button(text("Reset").size(12))
            .on_press(Message::Reset)
            .padding(Padding::from([4, 12]))
            .style(button::secondary),
    ]
    .align_y(Alignment::Center);

    panel.push(reset_row).into()
}

/// One labelled slider for an axis
fn view_offset_slider(state: &UiState, axis: Axis) -> Element<'static, Message> {
    let value = state.offsets().get(axis);

    column![
        text(format!("{} Offset: {}px", axis.label(), value)).size(14),
        slider(OFFSET_RANGE, value, move |v| Message::OffsetChanged(axis, v))
            .step(OFFSET_STEP)
            .width(Length::Fill),
    ]
    .spacing(8)
    .into()
}
