// src/renderer.rs
use eframe::egui::{self, Color32, Painter, Rect, Stroke};

use crate::shape::{Shape, ShapeStyle};
use crate::state::Board;

const SELECTION_COLOR: Color32 = Color32::from_rgb(33, 150, 243);
const HANDLE_SIZE: f32 = 8.0;
const SELECTION_PADDING: f32 = 4.0;

/// Paints a [`Board`] onto the canvas area
#[derive(Debug, Clone)]
pub struct Renderer {
    style: ShapeStyle,
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(ShapeStyle::default(), Color32::WHITE)
    }
}

impl Renderer {
    pub fn new(style: ShapeStyle, background: Color32) -> Self {
        Self { style, background }
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Renders the board into `rect`.
    ///
    /// Shapes are painted back-to-front, then the selection outline on top.
    pub fn render(&self, painter: &Painter, rect: Rect, board: &Board) {
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, self.background);

        let offset = rect.min.to_vec2();
        for shape in board.shapes() {
            shape.draw(&painter, offset, &self.style);
        }

        if let Some(selected) = board.selection().and_then(|s| board.shape_rect(s)) {
            self.draw_selection(&painter, selected.translate(offset));
        }
    }

    /// Outline with corner handles around the selected shape
    fn draw_selection(&self, painter: &Painter, bounds: Rect) {
        let outline = bounds.expand(SELECTION_PADDING + self.style.stroke.width / 2.0);
        painter.rect_stroke(outline, 0.0, Stroke::new(1.0, SELECTION_COLOR));

        for corner in [
            outline.left_top(),
            outline.right_top(),
            outline.left_bottom(),
            outline.right_bottom(),
        ] {
            let handle = Rect::from_center_size(corner, egui::Vec2::splat(HANDLE_SIZE));
            painter.rect(handle, 0.0, Color32::WHITE, Stroke::new(1.0, SELECTION_COLOR));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::Tool;

    #[test]
    fn test_render_basics() {
        let mut board = Board::default();
        for tool in [Tool::Rectangle, Tool::Circle, Tool::Arrow, Tool::Scribble] {
            board.set_tool(tool);
            board.begin_gesture(egui::pos2(10.0, 10.0));
            board.update_gesture(egui::pos2(40.0, 30.0));
            board.end_gesture();
        }
        board.set_tool(Tool::Select);
        board.click(egui::pos2(40.0, 30.0));
        assert!(board.selection().is_some());

        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = egui::Painter::new(ctx.clone(), layer_id, rect);

        Renderer::default().render(&painter, rect, &board);
    }

    #[test]
    fn test_render_empty_board() {
        let ctx = egui::Context::default();
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(10.0, 10.0));
        let painter = egui::Painter::new(ctx, egui::LayerId::background(), rect);
        let renderer = Renderer::default();
        assert_eq!(renderer.background(), Color32::WHITE);
        renderer.render(&painter, rect, &Board::default());
    }
}
