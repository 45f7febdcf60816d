#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod tools;
pub mod util;

pub use app::SketchApp;
pub use command::{Command, PaintRequest};
pub use config::CanvasConfig;
pub use document::Document;
pub use engine::DrawingEngine;
pub use error::{ConfigError, EngineError, RenderError, StoreError};
pub use id_generator::StrokeId;
pub use input::{InputEvent, InputHandler};
pub use renderer::{InkShape, PaintOp, RecordingSurface, Renderer, ShapeBuffer, Surface};
pub use state::EditorState;
pub use stroke::{MutableStroke, Stroke, StrokeRef};
pub use tools::{Tool, ToolMode, ToolType};
