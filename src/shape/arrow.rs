use egui::{Color32, Painter, Pos2, Rect, Shape as EguiShape, Vec2};

use super::{Shape, ShapeKind, ShapeStyle, common};
use crate::id_generator::ShapeId;

const HEAD_LENGTH: f32 = 10.0;
const HEAD_WIDTH: f32 = 10.0;

/// Straight arrow from `points[0]` (fixed) to `points[1]` (follows the pointer)
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    id: ShapeId,
    fill: Color32,
    pub points: [Pos2; 2],
}

impl Arrow {
    pub fn new(id: ShapeId, start: Pos2, end: Pos2, fill: Color32) -> Self {
        Self {
            id,
            fill,
            points: [start, end],
        }
    }

    pub fn start(&self) -> Pos2 {
        self.points[0]
    }

    pub fn end(&self) -> Pos2 {
        self.points[1]
    }

    /// Triangle of the arrow head, `None` when the arrow has no length
    fn head(&self) -> Option<[Pos2; 3]> {
        let dir = self.end() - self.start();
        if dir.length() == 0.0 {
            return None;
        }
        let dir = dir.normalized();
        let base = self.end() - dir * HEAD_LENGTH;
        let side = dir.rot90() * (HEAD_WIDTH / 2.0);
        Some([self.end(), base + side, base - side])
    }
}

impl Shape for Arrow {
    fn begin(id: ShapeId, pos: Pos2, fill: Color32, default_size: f32) -> Self {
        Self::new(id, pos, pos + Vec2::splat(default_size), fill)
    }

    fn update(&mut self, pointer: Pos2) {
        self.points[1] = pointer;
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Arrow
    }

    fn id(&self) -> ShapeId {
        self.id
    }

    fn fill(&self) -> Color32 {
        self.fill
    }

    fn rect(&self) -> Rect {
        Rect::from_two_pos(self.start(), self.end())
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        common::distance_to_line_segment(pos, self.start(), self.end()) <= common::HIT_TOLERANCE
    }

    fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }

    fn draw(&self, painter: &Painter, offset: Vec2, style: &ShapeStyle) {
        painter.line_segment([self.start() + offset, self.end() + offset], style.stroke);
        if let Some(head) = self.head() {
            let head = head.iter().map(|p| *p + offset).collect();
            painter.add(EguiShape::convex_polygon(head, self.fill, style.stroke));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::generate_id;

    #[test]
    fn test_begin_creates_diagonal_stub() {
        let arrow = Arrow::begin(generate_id(), Pos2::new(5.0, 5.0), Color32::RED, 20.0);
        assert_eq!(arrow.points, [Pos2::new(5.0, 5.0), Pos2::new(25.0, 25.0)]);
    }

    #[test]
    fn test_update_moves_only_end() {
        let mut arrow = Arrow::begin(generate_id(), Pos2::new(5.0, 5.0), Color32::RED, 20.0);
        arrow.update(Pos2::new(40.0, -3.0));
        arrow.update(Pos2::new(60.0, 7.0));
        assert_eq!(arrow.points, [Pos2::new(5.0, 5.0), Pos2::new(60.0, 7.0)]);
    }

    #[test]
    fn test_zero_length_arrow_has_no_head() {
        let p = Pos2::new(1.0, 1.0);
        let arrow = Arrow::new(generate_id(), p, p, Color32::RED);
        assert!(arrow.head().is_none());
        assert!(arrow.hit_test(p));
    }
}
