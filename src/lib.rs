//! Escape-time Mandelbrot renderer drawing into an SDL2 canvas.

pub mod driver;
pub mod error;
pub mod escape;
pub mod palette;
pub mod profile;
pub mod renderer;
pub mod surface;
pub mod viewport;

pub use error::{Error, Result};
pub use escape::{escape_time, evaluate};
pub use palette::{ColorPolicy, Rgb};
pub use profile::Profile;
pub use renderer::FrameRenderer;
pub use surface::{PixelBuffer, Surface};
pub use viewport::{Raster, Viewport};
