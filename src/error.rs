use thiserror::Error;

/// Invariant violations reported by the stroke store.
///
/// These only occur when the caller drives the store out of order, so the
/// engine treats them as bugs rather than recoverable conditions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("a pending stroke already exists")]
    PendingStrokeExists,

    #[error("no pending stroke to append to")]
    NoPendingStroke,
}

/// Errors raised while painting to a surface
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    #[error("drawing surface is not available")]
    SurfaceUnavailable,
}

/// Errors surfaced by the drawing engine to its collaborators
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Tool switches are refused while a gesture is in progress
    #[error("tool busy: cannot switch from {active} while a gesture is active")]
    ToolBusy { active: &'static str },

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors that can occur while loading canvas settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting {field}: {value}")]
    InvalidValue { field: &'static str, value: f32 },
}
