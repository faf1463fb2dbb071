#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod tool;

pub use app::WhiteboardApp;
pub use config::BoardConfig;
pub use error::{ConfigError, ExportError};
pub use id_generator::ShapeId;
pub use input::{InputEvent, InputLocation};
pub use renderer::Renderer;
pub use shape::{Arrow, Circle, Rectangle, Scribble, Shape, ShapeKind, ShapeRef};
pub use state::{Board, GestureState};
pub use tool::Tool;
