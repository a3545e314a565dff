//! Terminal layout
//!
//! Same panels as the GUI, top to bottom: header, mode list, offsets
//! (hidden under static), preview, CSS line, explanation, key help.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, LineGauge, Paragraph, Wrap};
use ratatui::Frame;

use position_core::{copy, Axis, PositionMode, OFFSET_MAX, OFFSET_MIN};

use crate::app::TuiApp;
use crate::preview::{preview_rows, PreviewWidget};

const KEY_HELP: &str = "↑/↓ mode   Tab axis   ←/→ offset (Shift ×10)   r reset   q quit";

/// Draw one frame
pub fn draw(frame: &mut Frame, app: &TuiApp) {
    let offsets_height = if app.state.offset_controls_visible() { 4 } else { 0 };
    let preview_height = preview_rows(&app.config.preview, app.config.cell_height_px) + 2;

    let [header, modes, offsets, preview, css, explanation, help] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(PositionMode::ALL.len() as u16 + 2),
        Constraint::Length(offsets_height),
        Constraint::Length(preview_height),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, header);
    draw_modes(frame, modes, app);
    if app.state.offset_controls_visible() {
        draw_offsets(frame, offsets, app);
    }
    draw_preview(frame, preview, app);

    frame.render_widget(
        Paragraph::new(app.state.box_style().to_string()).style(Style::default().fg(Color::Yellow)),
        css,
    );

    frame.render_widget(
        Paragraph::new(app.state.explanation())
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(" Explanation ")),
        explanation,
    );

    frame.render_widget(Paragraph::new(KEY_HELP).dark_gray(), help);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(copy::TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(format!("[{}]", copy::BADGE), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(copy::INTRO).dark_gray(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_modes(frame: &mut Frame, area: Rect, app: &TuiApp) {
    let selected = app.state.mode();
    let lines: Vec<Line> = PositionMode::ALL
        .iter()
        .map(|mode| {
            if *mode == selected {
                Line::from(format!("▶ {}", mode.label()))
                    .style(Style::default().fg(Color::Cyan).bold())
            } else {
                Line::from(format!("  {}", mode.label()))
            }
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" Position Property ")),
        area,
    );
}

fn draw_offsets(frame: &mut Frame, area: Rect, app: &TuiApp) {
    let rows = Layout::vertical([Constraint::Length(2), Constraint::Length(2)]).split(area);

    for (axis, row) in Axis::ALL.iter().zip(rows.iter()) {
        let value = app.state.offsets().get(*axis);
        let ratio = f64::from(value - OFFSET_MIN) / f64::from(OFFSET_MAX - OFFSET_MIN);
        let focused = *axis == app.focus;

        let label = format!(
            "{} {} Offset: {}px",
            if focused { "▶" } else { " " },
            axis.label(),
            value
        );
        let filled = if focused { Color::Cyan } else { Color::Gray };

        frame.render_widget(
            LineGauge::default()
                .label(label)
                .ratio(ratio)
                .filled_style(Style::default().fg(filled))
                .unfilled_style(Style::default().fg(Color::DarkGray)),
            *row,
        );
    }
}

fn draw_preview(frame: &mut Frame, area: Rect, app: &TuiApp) {
    let block = Block::bordered().title(" Live Preview ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        PreviewWidget {
            state: &app.state,
            geometry: &app.config.preview,
            cell_width_px: app.config.cell_width_px,
            cell_height_px: app.config.cell_height_px,
        },
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use position_core::{UiState, VisualizerConfig};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &TuiApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 50)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        crate::preview::buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_static_hides_offsets() {
        let app = TuiApp::new(UiState::new(), VisualizerConfig::default());
        let screen = render(&app);
        assert!(screen.contains("▶ Static (Default)"));
        assert!(screen.contains("position: static;"));
        assert!(!screen.contains("Top Offset"));
        assert!(screen.contains("normal document flow"));
    }

    #[test]
    fn test_absolute_shows_offsets() {
        let mut state = UiState::new();
        state.set_mode(PositionMode::Absolute);
        state.set_offset(Axis::Top, -30);
        state.set_offset(Axis::Left, 15);
        let app = TuiApp::new(state, VisualizerConfig::default());

        let screen = render(&app);
        assert!(screen.contains("Top Offset: -30px"));
        assert!(screen.contains("Left Offset: 15px"));
        assert!(screen.contains("position: absolute; top: -30px; left: 15px;"));
        assert!(screen.contains("closest positioned ancestor"));
    }
}
