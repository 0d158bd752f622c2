//! Rendering module
//!
//! Flat shapes and text on an abstract [`Surface`]; a canvas 2D context in the
//! browser, a recording surface everywhere else.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use scene::{brick_color, draw_frame};
pub use surface::{Color, Font, LinearGradient, Paint, Shadow, Surface, colors};
