//! Error types
//!
//! Startup failures are fatal; per-frame draw failures are skipped.

use thiserror::Error;

/// Failure to bring up the window, renderer or font. The game never starts.
#[derive(Debug, Error)]
pub enum InitError {
    /// SDL core or its video subsystem
    #[error("video subsystem could not initialize: {0}")]
    Video(String),

    /// SDL_ttf
    #[error("text subsystem could not initialize: {0}")]
    Ttf(String),

    #[error("window could not be created: {0}")]
    Window(String),

    #[error("renderer could not be created: {0}")]
    Renderer(String),

    #[error("event pump unavailable: {0}")]
    EventPump(String),

    #[error("timer subsystem unavailable: {0}")]
    Timer(String),

    #[error("failed to load font {path}: {reason}")]
    Font { path: String, reason: String },
}

/// A single frame's draw call failed. Logged and skipped.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unable to render text surface: {0}")]
    TextSurface(String),

    #[error("unable to create texture from rendered text: {0}")]
    TextTexture(String),

    #[error("draw call failed: {0}")]
    Draw(String),
}

/// Problems reading the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
