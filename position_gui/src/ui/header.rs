//! Header component
//!
//! Badge, title and intro text above the card.

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Padding};

use position_core::copy;

use crate::Message;

/// Render the page header
pub fn view_header() -> Element<'static, Message> {
    let badge = container(text(copy::BADGE).size(12))
        .padding(Padding::from([4, 12]))
        .style(container::rounded_box);

    column![
        badge,
        text(copy::TITLE).size(36),
        text(copy::INTRO).size(14).color([0.45, 0.45, 0.5]),
    ]
    .spacing(12)
    .align_x(Alignment::Center)
    .into()
}
