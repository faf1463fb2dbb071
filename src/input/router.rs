use egui::{PointerButton, Pos2};

use super::InputEvent;
use crate::shape::ShapeRef;
use crate::state::Board;
use crate::tool::Tool;

/// Pointer state that lives between events but outside the board: the shape
/// being dragged with the select tool.
#[derive(Debug, Default)]
pub struct PointerRouter {
    drag: Option<Drag>,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    target: ShapeRef,
    last: Pos2,
}

impl PointerRouter {
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_target(&self) -> Option<ShapeRef> {
        self.drag.map(|drag| drag.target)
    }
}

/// Apply one input event to the board.
///
/// Returns true if the board changed and needs a repaint.
pub fn route_event(event: &InputEvent, board: &mut Board, router: &mut PointerRouter) -> bool {
    match event {
        InputEvent::PointerDown {
            location,
            button: PointerButton::Primary,
        } if location.is_in_canvas => {
            if board.tool().is_select() {
                let pos = location.position;
                router.drag = board.click(pos).map(|target| Drag { target, last: pos });
                true
            } else {
                board.begin_gesture(location.position).is_some()
            }
        }
        InputEvent::PointerMove { location, primary_down } => match &mut router.drag {
            Some(drag) if *primary_down => {
                let delta = location.position - drag.last;
                drag.last = location.position;
                board.translate(drag.target, delta)
            }
            Some(_) => false,
            None => board.update_gesture(location.position),
        },
        InputEvent::PointerUp { .. } => {
            router.drag = None;
            board.end_gesture().is_some()
        }
        InputEvent::KeyDown { key, modifiers } if modifiers.is_none() => {
            match Tool::ALL.into_iter().find(|tool| tool.shortcut() == *key) {
                Some(tool) => {
                    router.drag = None;
                    board.set_tool(tool);
                    true
                }
                None => false,
            }
        }
        _ => false,
    }
}
