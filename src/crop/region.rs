//! Region structure for defining the crop area
//!
//! This module defines the CropRegion structure that specifies a rectangular
//! area of a bitmap. The coordinates are in pixels and follow the typical
//! image coordinate system where (0,0) is the top-left corner of the bitmap.

/// Rectangular crop area (in pixel coordinates)
///
/// Represents a rectangular area defined by its top-left corner coordinates
/// and dimensions. This is the portion of the source bitmap that ends up in
/// the output, resampled to the requested output size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl CropRegion {
    /// Create a new region
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width of the region in pixels
    /// * `height` - Height of the region in pixels
    ///
    /// # Returns
    /// A new CropRegion instance with the specified coordinates and dimensions
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        CropRegion { x, y, width, height }
    }

    /// Create a region covering an entire bitmap of the given size
    pub fn full(width: u32, height: u32) -> Self {
        CropRegion { x: 0, y: 0, width, height }
    }

    /// Get the rightmost X coordinate (exclusive)
    ///
    /// Returns the X-coordinate immediately to the right of the region.
    /// This is useful for boundary checks.
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Get the bottommost Y coordinate (exclusive)
    ///
    /// Returns the Y-coordinate immediately below the region.
    /// This is useful for boundary checks.
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    /// Check whether the region lies entirely within a bitmap of the given size
    ///
    /// The comparison is done in 64-bit space so that degenerate requests near
    /// `u32::MAX` cannot overflow.
    ///
    /// # Arguments
    /// * `width` - Bitmap width in pixels
    /// * `height` - Bitmap height in pixels
    ///
    /// # Returns
    /// `true` if every pixel of the region is inside the bitmap
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x as u64 + self.width as u64 <= width as u64
            && self.y as u64 + self.height as u64 <= height as u64
    }

    /// Parse a region from a string (format: "x,y,width,height")
    pub fn from_string(region_str: &str) -> Result<Self, String> {
        let parts: Vec<&str> = region_str.split(',').collect();
        if parts.len() != 4 {
            return Err("Region must have 4 comma-separated values".to_string());
        }

        let x = parts[0].trim().parse::<u32>()
            .map_err(|_| "Invalid x value".to_string())?;
        let y = parts[1].trim().parse::<u32>()
            .map_err(|_| "Invalid y value".to_string())?;
        let width = parts[2].trim().parse::<u32>()
            .map_err(|_| "Invalid width value".to_string())?;
        let height = parts[3].trim().parse::<u32>()
            .map_err(|_| "Invalid height value".to_string())?;

        Ok(CropRegion::new(x, y, width, height))
    }
}
