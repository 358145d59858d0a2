//! Errors surfaced by the renderer and its SDL2 front end.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid viewport: real [{real_min}, {real_max}], imag [{imag_min}, {imag_max}]")]
    InvalidViewport {
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    },
    #[error("raster must be at least 1x1, got {width}x{height}")]
    EmptyRaster { width: u32, height: u32 },
    #[error("iteration budget must be at least 1")]
    ZeroBudget,
    #[error("unknown profile {0:?} (expected one of: {1})")]
    UnknownProfile(String, String),
    #[error("unknown color policy {0:?} (expected banded or grayscale)")]
    UnknownPolicy(String),
    #[error("draw failed at ({x},{y}): {reason}")]
    Draw { x: u32, y: u32, reason: String },
    #[error("sdl: {0}")]
    Sdl(String),
}
