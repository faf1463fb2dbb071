//! Pointer gesture tracking for the board.
//!
//! A gesture is one pointer-down, any number of pointer-moves and one
//! pointer-up. While a gesture is in progress the board remembers which
//! shape it created, so moves update that shape and nothing else.
//!
//! ```text
//!             begin_gesture            end_gesture
//! ┌──────────┐  (drawing tool)  ┌───────────┐        ┌──────────┐
//! │   Idle   ├─────────────────►│  Drawing  ├───────►│   Idle   │
//! └──────────┘                  └─────┬─────┘        └──────────┘
//!                                     │ ▲
//!                                     └─┘ update_gesture
//! ```
//!
//! Switching tools while drawing also returns to `Idle`.
use crate::shape::ShapeRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A gesture is drawing `target`
    Drawing { target: ShapeRef },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, GestureState::Drawing { .. })
    }

    /// The shape being drawn, if any
    pub fn target(&self) -> Option<ShapeRef> {
        match self {
            GestureState::Drawing { target } => Some(*target),
            GestureState::Idle => None,
        }
    }
}
