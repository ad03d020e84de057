pub mod crop;
pub mod surface;
pub mod provider;
pub mod encoding;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{CropKit, PayloadSummary};

pub use crop::{CroppedImageExtractor, CropRequest, CropRegion, CropError, CropResult};
pub use surface::{DrawingSurface, SurfaceFactory, PixelSurface, PixelSurfaceFactory};
pub use provider::{BitmapProvider, ImageRegistry};
pub use encoding::EncodedImage;
