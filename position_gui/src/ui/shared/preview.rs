//! Canvas drawing for the live preview
//!
//! Renders the dashed reference frame, a ghost outline of the normal-flow
//! slot when the box has moved away from it, and the demo box itself.
//! Everything outside the container is clipped, like `overflow: hidden`.

use iced::widget::canvas::{self, Frame, Geometry, LineDash, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use position_core::{PreviewGeometry, PxRect, ReferenceFrame, UiState};

use crate::Message;

/// Data needed to draw one preview
pub struct PreviewData {
    pub state: UiState,
    pub geometry: PreviewGeometry,
    pub frame_style: ReferenceFrame,
}

impl PreviewData {
    pub fn new(state: &UiState, geometry: &PreviewGeometry) -> Self {
        Self {
            state: *state,
            geometry: *geometry,
            frame_style: ReferenceFrame::default(),
        }
    }
}

/// Canvas program for the preview
pub struct PositionPreview {
    data: PreviewData,
}

impl PositionPreview {
    pub fn new(data: PreviewData) -> Self {
        Self { data }
    }

    fn draw_reference_frame(&self, frame: &mut Frame, width: f32, height: f32) {
        let style = &self.data.frame_style;
        let inset = style.border_width.as_f32() / 2.0;
        let dash = style.dash;

        let outline = Path::rectangle(
            Point::new(inset, inset),
            Size::new(width - 2.0 * inset, height - 2.0 * inset),
        );
        let stroke = Stroke {
            line_dash: LineDash {
                segments: &dash,
                offset: 0,
            },
            ..Stroke::default()
                .with_color(rgb(style.color))
                .with_width(style.border_width.as_f32())
        };
        frame.stroke(&outline, stroke);
    }

    fn draw_ghost(&self, frame: &mut Frame, slot: PxRect, caption: &str, color: Color) {
        let ghost = rect_path(slot);
        frame.stroke(
            &ghost,
            Stroke {
                line_dash: LineDash {
                    segments: &[3.0, 3.0],
                    offset: 0,
                },
                ..Stroke::default().with_color(Color { a: 0.5, ..color }).with_width(1.0)
            },
        );

        let label = Text {
            content: caption.to_string(),
            position: Point::new(slot.x + 4.0, slot.y + 4.0),
            color: Color { a: 0.6, ..color },
            size: iced::Pixels(10.0),
            ..Text::default()
        };
        frame.fill_text(label);
    }

    fn draw_box(&self, frame: &mut Frame, rect: PxRect, color: Color) {
        let body = rect_path(rect);
        frame.fill(&body, Color { a: 0.2, ..color });
        frame.stroke(&body, Stroke::default().with_color(color).with_width(2.0));

        let label = Text {
            content: self.data.state.box_label(),
            position: Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0),
            color,
            size: iced::Pixels(12.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            align_y: iced::alignment::Vertical::Center.into(),
            ..Text::default()
        };
        frame.fill_text(label);
    }
}

impl canvas::Program<Message> for PositionPreview {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let width = bounds.width;
        let height = bounds.height;

        let palette = theme.extended_palette();
        let background = palette.background.weak.color;
        let box_color = palette.primary.base.color;
        let ghost_color = palette.background.strong.color;

        let container = Path::rectangle(Point::ORIGIN, bounds.size());
        frame.fill(&container, background);

        self.draw_reference_frame(&mut frame, width, height);

        let geometry = &self.data.geometry;
        let placement = geometry.place(&self.data.state);

        frame.with_clip(Rectangle::new(Point::ORIGIN, bounds.size()), |clipped| {
            if geometry.shows_ghost(&placement) {
                let caption = if placement.reserves_space {
                    "normal position (space kept)"
                } else {
                    "normal position (space released)"
                };
                self.draw_ghost(clipped, geometry.normal_flow_slot(), caption, ghost_color);
            }
            self.draw_box(clipped, placement.rect, box_color);
        });

        vec![frame.into_geometry()]
    }
}

fn rect_path(rect: PxRect) -> Path {
    Path::rectangle(Point::new(rect.x, rect.y), Size::new(rect.width, rect.height))
}

fn rgb(c: [f32; 3]) -> Color {
    Color::from_rgb(c[0], c[1], c[2])
}
