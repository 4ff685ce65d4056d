//! 窗口运行时

pub(crate) mod display;
mod handler;
pub(crate) mod surface;
pub mod window;

pub use display::{display_available, is_headless, HEADLESS_ENV};
pub use surface::SurfaceState;
pub use window::{WindowConfig, FALLBACK_FPS, MAX_CANVAS_BYTES};
