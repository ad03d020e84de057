//! Crop request handling and extraction
//!
//! Holds the request and region value objects, the error types, and the
//! extractor that runs the two-stage draw.

pub mod errors;
pub mod region;
pub mod request;
pub mod extractor;
pub(crate) mod tests;

pub use errors::{CropError, CropResult};
pub use region::CropRegion;
pub use request::CropRequest;
pub use extractor::CroppedImageExtractor;
