use serde::{Deserialize, Serialize};

use crate::shape::ShapeKind;

/// The drawing mode controlling what a pointer gesture does on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    /// Click to select, drag to move. Gestures create nothing.
    #[default]
    Select,
    Rectangle,
    Circle,
    Arrow,
    Scribble,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::Select,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Arrow,
        Tool::Scribble,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Arrow => "Arrow",
            Tool::Scribble => "Scribble",
        }
    }

    /// Glyph shown on the toolbar button
    pub fn icon(&self) -> &'static str {
        match self {
            Tool::Select => "🖱",
            Tool::Rectangle => "⬜",
            Tool::Circle => "⭕",
            Tool::Arrow => "➡",
            Tool::Scribble => "✏",
        }
    }

    /// Keyboard shortcut that activates this tool
    pub fn shortcut(&self) -> egui::Key {
        match self {
            Tool::Select => egui::Key::V,
            Tool::Rectangle => egui::Key::R,
            Tool::Circle => egui::Key::C,
            Tool::Arrow => egui::Key::A,
            Tool::Scribble => egui::Key::P,
        }
    }

    /// The shape kind a gesture with this tool creates, `None` for [`Tool::Select`]
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Tool::Select => None,
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Circle => Some(ShapeKind::Circle),
            Tool::Arrow => Some(ShapeKind::Arrow),
            Tool::Scribble => Some(ShapeKind::Scribble),
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Tool::Select)
    }
}
