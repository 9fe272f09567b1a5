//! # parscale-render
//!
//! Draws planned figures with plotters and persists rendering preferences.

mod draw;
pub mod format;
pub mod io;
pub mod palette;
pub mod profile;
pub mod renderer;

pub use format::ImageFormat;
pub use profile::RenderProfile;
pub use renderer::PlottersRenderer;
