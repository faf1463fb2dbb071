use egui::{Color32, Pos2, Rect, Vec2};

use super::{GestureState, Selection};
use crate::id_generator::{ShapeId, generate_id};
use crate::shape::{Arrow, Circle, Rectangle, Scribble, Shape, ShapeKind, ShapeRef};
use crate::tool::Tool;

pub const DEFAULT_FILL: Color32 = Color32::from_rgb(0xff, 0x00, 0x00);
pub const DEFAULT_SHAPE_SIZE: f32 = 20.0;

/// Everything the whiteboard knows: the active tool and fill color, one
/// ordered collection per shape kind, the gesture in progress and the
/// selection.
///
/// Each collection is kept in insertion order, which is also the order the
/// shapes are painted in. Shapes never move between collections and are
/// never removed.
#[derive(Debug, Clone)]
pub struct Board {
    tool: Tool,
    fill: Color32,
    default_size: f32,

    rectangles: Vec<Rectangle>,
    circles: Vec<Circle>,
    arrows: Vec<Arrow>,
    scribbles: Vec<Scribble>,

    gesture: GestureState,
    selection: Selection,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_FILL, DEFAULT_SHAPE_SIZE)
    }
}

impl Board {
    pub fn new(fill: Color32, default_size: f32) -> Self {
        Self {
            tool: Tool::default(),
            fill,
            default_size,
            rectangles: Vec::new(),
            circles: Vec::new(),
            arrows: Vec::new(),
            scribbles: Vec::new(),
            gesture: GestureState::Idle,
            selection: Selection::default(),
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Change the active tool.
    ///
    /// Any gesture in progress ends here; the shape it drew so far is kept.
    /// Leaving the select tool drops the selection.
    pub fn set_tool(&mut self, tool: Tool) {
        if let Some(target) = self.gesture.target() {
            log::debug!("Tool switched mid-gesture, finishing {} {}", target.kind.name(), target.id);
        }
        self.gesture = GestureState::Idle;

        if !tool.is_select() {
            self.selection.clear();
        }

        if tool != self.tool {
            log::info!("Tool changed: {} -> {}", self.tool.name(), tool.name());
            self.tool = tool;
        }
    }

    pub fn fill_color(&self) -> Color32 {
        self.fill
    }

    /// Change the fill used for shapes created from now on
    pub fn set_fill_color(&mut self, fill: Color32) {
        if fill != self.fill {
            log::info!("Fill color changed: {} -> {}", self.fill.to_hex(), fill.to_hex());
            self.fill = fill;
        }
    }

    pub fn default_size(&self) -> f32 {
        self.default_size
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_drawing()
    }

    /// Pointer-down: create a shape for the active tool at `pos`.
    ///
    /// Returns the new shape, or `None` when the select tool is active.
    pub fn begin_gesture(&mut self, pos: Pos2) -> Option<ShapeRef> {
        let kind = self.tool.shape_kind()?;
        let (fill, size) = (self.fill, self.default_size);

        let target = match kind {
            ShapeKind::Rectangle => begin_in(&mut self.rectangles, pos, fill, size),
            ShapeKind::Circle => begin_in(&mut self.circles, pos, fill, size),
            ShapeKind::Arrow => begin_in(&mut self.arrows, pos, fill, size),
            ShapeKind::Scribble => begin_in(&mut self.scribbles, pos, fill, size),
        };

        log::debug!("Began {} {} at {:?}", kind.name(), target.id, pos);
        self.gesture = GestureState::Drawing { target };
        Some(target)
    }

    /// Pointer-move: reshape the shape of the current gesture.
    ///
    /// Returns true if a shape changed. Without a gesture in progress, or
    /// with the select tool active, nothing happens.
    pub fn update_gesture(&mut self, pointer: Pos2) -> bool {
        if self.tool.is_select() {
            return false;
        }
        let Some(target) = self.gesture.target() else {
            return false;
        };

        match target.kind {
            ShapeKind::Rectangle => update_in(&mut self.rectangles, target.id, pointer),
            ShapeKind::Circle => update_in(&mut self.circles, target.id, pointer),
            ShapeKind::Arrow => update_in(&mut self.arrows, target.id, pointer),
            ShapeKind::Scribble => update_in(&mut self.scribbles, target.id, pointer),
        }
    }

    /// Pointer-up: return to idle. Shapes are left exactly as they are.
    ///
    /// Returns the shape the finished gesture drew, if there was one.
    pub fn end_gesture(&mut self) -> Option<ShapeRef> {
        std::mem::take(&mut self.gesture).target()
    }

    pub fn selection(&self) -> Option<ShapeRef> {
        self.selection.target()
    }

    pub fn is_selected(&self, shape: ShapeRef) -> bool {
        self.selection.is_selected(shape)
    }

    /// Make `shape` the sole selection target.
    ///
    /// Only honoured with the select tool active and for shapes on the board.
    pub fn select(&mut self, shape: ShapeRef) -> bool {
        if !self.tool.is_select() || !self.contains(shape) {
            return false;
        }
        self.selection.set(shape);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// A click with the select tool: select the top-most shape under `pos`,
    /// or clear the selection when the background was clicked.
    pub fn click(&mut self, pos: Pos2) -> Option<ShapeRef> {
        if !self.tool.is_select() {
            return None;
        }
        match self.shape_at(pos) {
            Some(hit) => {
                self.selection.set(hit);
                Some(hit)
            }
            None => {
                self.selection.clear();
                None
            }
        }
    }

    /// Move a shape by `delta`. Only the select tool drags shapes around.
    pub fn translate(&mut self, shape: ShapeRef, delta: Vec2) -> bool {
        if !self.tool.is_select() {
            return false;
        }
        match shape.kind {
            ShapeKind::Rectangle => translate_in(&mut self.rectangles, shape.id, delta),
            ShapeKind::Circle => translate_in(&mut self.circles, shape.id, delta),
            ShapeKind::Arrow => translate_in(&mut self.arrows, shape.id, delta),
            ShapeKind::Scribble => translate_in(&mut self.scribbles, shape.id, delta),
        }
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    pub fn scribbles(&self) -> &[Scribble] {
        &self.scribbles
    }

    /// All shapes of one kind, in paint order
    pub fn shapes_of(&self, kind: ShapeKind) -> Vec<&dyn Shape> {
        match kind {
            ShapeKind::Rectangle => as_dyn(&self.rectangles),
            ShapeKind::Circle => as_dyn(&self.circles),
            ShapeKind::Arrow => as_dyn(&self.arrows),
            ShapeKind::Scribble => as_dyn(&self.scribbles),
        }
    }

    /// Every shape back-to-front
    pub fn shapes(&self) -> impl Iterator<Item = &dyn Shape> + '_ {
        ShapeKind::RENDER_ORDER
            .into_iter()
            .flat_map(move |kind| self.shapes_of(kind))
    }

    pub fn shape(&self, shape: ShapeRef) -> Option<&dyn Shape> {
        self.shapes_of(shape.kind)
            .into_iter()
            .find(|s| s.id() == shape.id)
    }

    pub fn contains(&self, shape: ShapeRef) -> bool {
        self.shape(shape).is_some()
    }

    /// Bounds of a shape in canvas space
    pub fn shape_rect(&self, shape: ShapeRef) -> Option<Rect> {
        self.shape(shape).map(|s| s.rect())
    }

    /// The top-most shape covering `pos`
    pub fn shape_at(&self, pos: Pos2) -> Option<ShapeRef> {
        ShapeKind::RENDER_ORDER
            .into_iter()
            .rev()
            .flat_map(|kind| self.shapes_of(kind).into_iter().rev())
            .find(|s| s.hit_test(pos))
            .map(|s| s.shape_ref())
    }

    pub fn len(&self) -> usize {
        self.rectangles.len() + self.circles.len() + self.arrows.len() + self.scribbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn begin_in<S: Shape>(shapes: &mut Vec<S>, pos: Pos2, fill: Color32, size: f32) -> ShapeRef {
    let shape = S::begin(generate_id(), pos, fill, size);
    let shape_ref = shape.shape_ref();
    shapes.push(shape);
    shape_ref
}

fn update_in<S: Shape>(shapes: &mut [S], id: ShapeId, pointer: Pos2) -> bool {
    match shapes.iter_mut().find(|s| s.id() == id) {
        Some(shape) => {
            shape.update(pointer);
            true
        }
        None => false,
    }
}

fn translate_in<S: Shape>(shapes: &mut [S], id: ShapeId, delta: Vec2) -> bool {
    match shapes.iter_mut().find(|s| s.id() == id) {
        Some(shape) => {
            shape.translate(delta);
            true
        }
        None => false,
    }
}

fn as_dyn<S: Shape>(shapes: &[S]) -> Vec<&dyn Shape> {
    shapes.iter().map(|s| s as &dyn Shape).collect()
}
