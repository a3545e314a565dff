//! Terminal application state and key handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use position_core::{Axis, UiState, VisualizerConfig};

/// Steps per Shift+arrow press
const COARSE_STEPS: i32 = 10;

/// Terminal session state
pub struct TuiApp {
    pub state: UiState,
    pub config: VisualizerConfig,
    /// Axis the arrow keys adjust
    pub focus: Axis,
    pub should_quit: bool,
}

impl TuiApp {
    pub fn new(state: UiState, config: VisualizerConfig) -> Self {
        Self {
            state,
            config,
            focus: Axis::Top,
            should_quit: false,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let steps = if key.modifiers.contains(KeyModifiers::SHIFT) {
            COARSE_STEPS
        } else {
            1
        };

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let mode = self.state.mode().previous();
                self.state.set_mode(mode);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let mode = self.state.mode().next();
                self.state.set_mode(mode);
            }
            KeyCode::Char('r') => {
                self.state.reset();
                self.focus = Axis::Top;
            }
            // Offsets are hidden under static, so their keys are too
            _ if !self.state.offset_controls_visible() => {}
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => {
                self.state.nudge_offset(self.focus, -steps);
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => {
                self.state.nudge_offset(self.focus, steps);
            }
            _ => {}
        }
    }
}
