//! # Position Visualizer GUI Application
//!
//! Interactive demonstration of the CSS `position` property.
//! Built with Iced framework for cross-platform support (Windows, macOS, Linux, WASM).
//!
//! Pick a mode, drag the offset sliders, and the live preview and
//! explanation follow on every change.

mod ui;

use iced::widget::{column, container, scrollable, Space};
use iced::{Alignment, Element, Length, Task, Theme};

use position_core::{Axis, PositionMode, UiState, VisualizerConfig};

/// Widest the content column grows (px)
const CONTENT_MAX_WIDTH: f32 = 896.0;

/// Application state
pub struct App {
    pub state: UiState,
    pub config: VisualizerConfig,
}

/// Events from the controls
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ModeSelected(PositionMode),
    OffsetChanged(Axis, i32),
    Reset,
}

impl App {
    pub fn new(config: VisualizerConfig) -> Self {
        Self {
            state: UiState::new(),
            config,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ModeSelected(mode) => self.state.set_mode(mode),
            Message::OffsetChanged(axis, value) => self.state.set_offset(axis, value),
            Message::Reset => self.state.reset(),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let card = column![
            ui::controls::view_controls(&self.state),
            ui::preview_panel::view_preview_panel(&self.state, &self.config.preview),
            ui::style_bar::view_style_bar(&self.state, &self.config.preview),
            ui::explanation_panel::view_explanation_panel(&self.state),
        ]
        .spacing(24)
        .padding(24);

        let content = column![
            ui::header::view_header(),
            Space::new().height(32),
            container(card).style(container::bordered_box),
        ]
        .max_width(CONTENT_MAX_WIDTH)
        .align_x(Alignment::Center);

        container(scrollable(container(content).center_x(Length::Fill).padding(24)))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        if self.config.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn load_config() -> VisualizerConfig {
    match position_core::config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}; falling back to default settings", e);
            VisualizerConfig::default()
        }
    }
}

fn main() -> iced::Result {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let config = load_config();
    let window_size = (config.window_width, config.window_height);

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title("Position Property Visualizer")
        .theme(App::theme)
        .window_size(window_size)
        .run()
}
