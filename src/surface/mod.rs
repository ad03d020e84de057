//! Off-screen drawing surfaces
//!
//! Provides the drawing surface capability the extractor renders through,
//! split into a trait seam and the pixel-buffer implementation.

pub mod surface_traits;
pub mod pixel_surface;
mod tests;

pub use surface_traits::{DrawingSurface, SurfaceFactory};
pub use pixel_surface::{PixelSurface, PixelSurfaceFactory};
