//! Rendering module
//!
//! Frames are built as plain draw commands, then replayed on a surface
//! (HTML canvas in the browser, a recorder in tests and the native runner).

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod color;
pub mod commands;
pub mod surface;
pub mod wheel;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use color::{Rgba, WHEEL_PALETTE, shade_color, slice_color};
pub use commands::{ColorStop, DrawCommand, Paint, Shadow, Stroke, TextAlign};
pub use surface::{DrawingSurface, RecordingSurface, Viewport};
pub use wheel::{WheelLayout, render_confetti, render_wheel};
