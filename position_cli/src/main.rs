//! # Position Visualizer CLI Application
//!
//! Terminal interface for the CSS position visualizer.
//! Built with Ratatui for a rich TUI experience.
//!
//! Log output goes to stderr. It is switched off while the terminal is in
//! the alternate screen and comes back after the terminal is restored.

mod app;
mod args;
mod preview;
mod view;

use std::process::ExitCode;

use crossterm::event::{self, Event};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::DefaultTerminal;

use position_core::{config, UiState, VisualizerConfig, VisualizerError, VisualizerResult};

use crate::app::TuiApp;
use crate::args::{CliArgs, USAGE};
use crate::preview::{buffer_to_string, preview_rows, PreviewWidget};

/// Columns used by `--print`
const PRINT_WIDTH: u16 = 64;

fn load_config(args: &CliArgs) -> VisualizerResult<VisualizerConfig> {
    match &args.config {
        Some(path) => config::load_config(path),
        None => config::load_from_env(),
    }
}

/// Render style, explanation and preview as plain text
fn print_once(state: &UiState, config: &VisualizerConfig) -> String {
    let rows = preview_rows(&config.preview, config.cell_height_px);
    let area = Rect::new(0, 0, PRINT_WIDTH, rows);
    let mut buf = Buffer::empty(area);
    PreviewWidget {
        state,
        geometry: &config.preview,
        cell_width_px: config.cell_width_px,
        cell_height_px: config.cell_height_px,
    }
    .render(area, &mut buf);

    let mut out = String::new();
    out.push_str(&state.box_style().to_string());
    out.push('\n');
    out.push_str(state.explanation());
    out.push_str("\n\n");
    out.push_str(&buffer_to_string(&buf));
    out
}

/// Run `f` with logging off, then restore the previous level
fn with_logging_suspended<T>(f: impl FnOnce() -> T) -> T {
    let level = log::max_level();
    log::set_max_level(log::LevelFilter::Off);
    let result = f();
    log::set_max_level(level);
    result
}

fn run(mut terminal: DefaultTerminal, mut app: TuiApp) -> VisualizerResult<()> {
    while !app.should_quit {
        terminal
            .draw(|frame| view::draw(frame, &app))
            .map_err(|e| VisualizerError::io("drawing frame", &e))?;

        // Resize and other events just fall through to a redraw
        let event = event::read().map_err(|e| VisualizerError::io("reading input", &e))?;
        if let Event::Key(key) = event {
            app.handle_key(key);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let state = args.initial_state();

    if args.print {
        print!("{}", print_once(&state, &config));
        return ExitCode::SUCCESS;
    }

    log::info!("starting terminal session in {} mode", state.mode().value());
    let result = with_logging_suspended(|| {
        let terminal = ratatui::init();
        let result = run(terminal, TuiApp::new(state, config));
        ratatui::restore();
        result
    });
    log::info!("terminal session ended");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use position_core::{Axis, PositionMode};

    #[test]
    fn test_print_once_scenario() {
        let mut state = UiState::new();
        state.set_mode(PositionMode::Absolute);
        state.set_offset(Axis::Top, -30);
        state.set_offset(Axis::Left, 15);

        let out = print_once(&state, &VisualizerConfig::default());
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("position: absolute; top: -30px; left: 15px;"));
        assert!(lines.next().unwrap().contains("closest positioned ancestor"));
        assert!(out.contains('┄'));
    }

    #[test]
    fn test_print_once_static() {
        let out = print_once(&UiState::new(), &VisualizerConfig::default());
        assert!(out.starts_with("position: static;\n"));
    }

    #[test]
    fn test_print_once_tiny_cells() {
        let config = VisualizerConfig {
            cell_width_px: 1e-30,
            ..VisualizerConfig::default()
        };
        let out = print_once(&UiState::new(), &config);
        assert!(out.starts_with("position: static;\n"));
    }

    #[test]
    fn test_logging_off_during_session() {
        log::set_max_level(log::LevelFilter::Debug);

        let mut app = TuiApp::new(UiState::new(), VisualizerConfig::default());
        let mode = with_logging_suspended(|| {
            assert_eq!(log::max_level(), log::LevelFilter::Off);
            app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
            app.state.mode()
        });

        assert_eq!(mode, PositionMode::Relative);
        assert_eq!(log::max_level(), log::LevelFilter::Debug);
    }
}
