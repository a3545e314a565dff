//! Terminal preview widget
//!
//! Draws the same picture as the GUI canvas with box-drawing characters:
//! a dashed reference frame, a dotted ghost of the normal-flow slot when
//! the box has left it, and the demo box. CSS pixels map to cells by the
//! configured cell size; anything outside the area is clipped.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use position_core::{PreviewGeometry, PxRect, UiState};

/// Rectangle in cell units relative to the widget area; may extend past it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Convert a pixel rectangle to cells, keeping at least 1x1
pub fn to_cells(rect: PxRect, cell_width_px: f32, cell_height_px: f32) -> CellRect {
    CellRect {
        x: (rect.x / cell_width_px).round() as i32,
        y: (rect.y / cell_height_px).round() as i32,
        width: ((rect.width / cell_width_px).round() as i32).max(1),
        height: ((rect.height / cell_height_px).round() as i32).max(1),
    }
}

/// Rows needed to show a preview of the configured height
pub fn preview_rows(geometry: &PreviewGeometry, cell_height_px: f32) -> u16 {
    (geometry.height / cell_height_px).ceil().max(3.0) as u16
}

pub struct PreviewWidget<'a> {
    pub state: &'a UiState,
    pub geometry: &'a PreviewGeometry,
    pub cell_width_px: f32,
    pub cell_height_px: f32,
}

impl Widget for PreviewWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        let frame_style = Style::default().fg(Color::DarkGray);
        draw_outline(
            buf,
            area,
            CellRect {
                x: 0,
                y: 0,
                width: i32::from(area.width),
                height: i32::from(area.height),
            },
            ["┌", "┐", "└", "┘", "┄", "┆"],
            frame_style,
        );

        let placement = self.geometry.place(self.state);

        if self.geometry.shows_ghost(&placement) {
            let slot = to_cells(
                self.geometry.normal_flow_slot(),
                self.cell_width_px,
                self.cell_height_px,
            );
            draw_outline(buf, area, slot, ["·", "·", "·", "·", "·", "·"], frame_style);
        }

        let body = to_cells(placement.rect, self.cell_width_px, self.cell_height_px);
        let box_style = Style::default().fg(Color::Cyan);
        fill(buf, area, body, Style::default().bg(Color::Rgb(20, 50, 70)));
        draw_outline(buf, area, body, ["┌", "┐", "└", "┘", "─", "│"], box_style);

        // "position:" over the keyword; the box is too narrow for one line
        let label_style = box_style.add_modifier(Modifier::BOLD);
        let lines = ["position:", self.state.mode().value()];
        let first_row = body.y.saturating_add(body.height / 2 - 1);
        let inner_right = body.x.saturating_add(body.width - 1);
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count() as i32;
            let start = body.x.saturating_add((body.width - len).max(2) / 2);
            let y = first_row.saturating_add(row as i32);
            for (i, ch) in line.chars().enumerate() {
                let x = start.saturating_add(i as i32);
                if x >= inner_right {
                    break;
                }
                put(buf, area, x, y, &ch.to_string(), label_style);
            }
        }
    }
}

/// Write one symbol if the cell lies inside `area`
fn put(buf: &mut Buffer, area: Rect, x: i32, y: i32, symbol: &str, style: Style) {
    if x < 0 || y < 0 || x >= i32::from(area.width) || y >= i32::from(area.height) {
        return;
    }
    let (cx, cy) = (area.x + x as u16, area.y + y as u16);
    if let Some(cell) = buf.cell_mut((cx, cy)) {
        cell.set_symbol(symbol).set_style(style);
    }
}

/// Outline with [top-left, top-right, bottom-left, bottom-right, horizontal, vertical]
fn draw_outline(buf: &mut Buffer, area: Rect, r: CellRect, symbols: [&str; 6], style: Style) {
    let [tl, tr, bl, br, h, v] = symbols;
    let right = r.x.saturating_add(r.width.saturating_sub(1));
    let bottom = r.y.saturating_add(r.height.saturating_sub(1));
    let (cols, rows) = (i32::from(area.width), i32::from(area.height));

    // Only walk the part of each edge that can land in the area
    for x in r.x.saturating_add(1).max(0)..right.min(cols) {
        put(buf, area, x, r.y, h, style);
        put(buf, area, x, bottom, h, style);
    }
    for y in r.y.saturating_add(1).max(0)..bottom.min(rows) {
        put(buf, area, r.x, y, v, style);
        put(buf, area, right, y, v, style);
    }
    put(buf, area, r.x, r.y, tl, style);
    put(buf, area, right, r.y, tr, style);
    put(buf, area, r.x, bottom, bl, style);
    put(buf, area, right, bottom, br, style);
}

fn fill(buf: &mut Buffer, area: Rect, r: CellRect, style: Style) {
    let rows = r.y.max(0)..r.y.saturating_add(r.height).min(i32::from(area.height));
    for y in rows {
        let cols = r.x.max(0)..r.x.saturating_add(r.width).min(i32::from(area.width));
        for x in cols {
            put(buf, area, x, y, " ", style);
        }
    }
}

/// Plain-text rendering of a buffer, one line per row
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use position_core::{Axis, PositionMode};

    fn render(state: &UiState) -> Buffer {
        let geometry = PreviewGeometry::default();
        let area = Rect::new(0, 0, 60, preview_rows(&geometry, 16.0));
        let mut buf = Buffer::empty(area);
        PreviewWidget {
            state,
            geometry: &geometry,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
        }
        .render(area, &mut buf);
        buf
    }

    #[test]
    fn test_to_cells() {
        let cells = to_cells(PxRect::new(16.0, 16.0, 128.0, 128.0), 8.0, 16.0);
        assert_eq!(cells, CellRect { x: 2, y: 1, width: 16, height: 8 });
    }

    #[test]
    fn test_preview_rows() {
        assert_eq!(preview_rows(&PreviewGeometry::default(), 16.0), 19);
    }

    #[test]
    fn test_reference_frame_is_dashed() {
        let buf = render(&UiState::new());
        assert_eq!(buf[(0, 0)].symbol(), "┌");
        assert_eq!(buf[(5, 0)].symbol(), "┄");
        assert_eq!(buf[(0, 5)].symbol(), "┆");
    }

    #[test]
    fn test_static_box_in_slot() {
        let buf = render(&UiState::new());
        assert_eq!(buf[(2, 1)].symbol(), "┌");
        let text = buffer_to_string(&buf);
        assert!(text.contains("position:"));
        assert!(text.contains("static"));
        assert!(!text.contains('·'));
    }

    #[test]
    fn test_relative_leaves_ghost() {
        let mut state = UiState::new();
        state.set_mode(PositionMode::Relative);
        state.set_offset(Axis::Left, 40);
        state.set_offset(Axis::Top, 32);

        let buf = render(&state);
        // Box moved 5 columns right and 2 rows down from (2, 1)
        assert_eq!(buf[(7, 3)].symbol(), "┌");
        assert_eq!(buf[(2, 1)].symbol(), "·");
    }

    #[test]
    fn test_clipped_box_does_not_panic() {
        let mut state = UiState::new();
        state.set_mode(PositionMode::Absolute);
        state.set_offset(Axis::Top, -50);
        state.set_offset(Axis::Left, -50);
        let buf = render(&state);
        // Box spans cells (-6, -3) to (9, 4); only its bottom-right survives
        assert_eq!(buf[(9, 4)].symbol(), "┘");
        assert_eq!(buf[(10, 4)].symbol(), " ");
    }

    #[test]
    fn test_tiny_cell_size_saturates_without_overflow() {
        let geometry = PreviewGeometry::default();
        let mut state = UiState::new();
        state.set_mode(PositionMode::Relative);
        state.set_offset(Axis::Left, 20);

        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        PreviewWidget {
            state: &state,
            geometry: &geometry,
            cell_width_px: 1e-30,
            cell_height_px: 16.0,
        }
        .render(area, &mut buf);

        // Box and ghost land far to the right; only the frame is visible
        assert_eq!(buf[(0, 0)].symbol(), "┌");
        assert_eq!(buf[(39, 9)].symbol(), "┘");
        assert!(!buffer_to_string(&buf).contains("position:"));
    }
}
