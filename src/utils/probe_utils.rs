//! Encoded payload probing
//!
//! Lightweight header inspection of encoded image payloads. Reads just
//! enough of each container header to report pixel dimensions without
//! running a full decode.

use std::io::Cursor;
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use image::ImageFormat;

/// Pixel dimensions read from an encoded payload header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadInfo {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

/// Probe an encoded payload for its pixel dimensions
///
/// Recognizes the containers that keep their size fields near the start of
/// the stream. Formats that bury their dimensions deeper return None and
/// the caller falls back to a full decode.
///
/// # Arguments
/// * `bytes` - The encoded payload
///
/// # Returns
/// The dimensions, or None when the header cannot be read cheaply
pub fn probe_dimensions(bytes: &[u8]) -> Option<PayloadInfo> {
    match image::guess_format(bytes).ok()? {
        ImageFormat::Png => probe_png(bytes),
        ImageFormat::Jpeg => probe_jpeg(bytes),
        ImageFormat::Gif => probe_gif(bytes),
        ImageFormat::Bmp => probe_bmp(bytes),
        _ => None,
    }
}

/// Read the IHDR dimensions of a PNG stream
///
/// The IHDR chunk is required to come first, so the width and height are
/// big-endian u32 values at fixed offsets after the signature.
fn probe_png(bytes: &[u8]) -> Option<PayloadInfo> {
    if bytes.len() < 24 || &bytes[12..16] != b"IHDR" {
        return None;
    }

    let mut cursor = Cursor::new(&bytes[16..24]);
    let width = cursor.read_u32::<BigEndian>().ok()?;
    let height = cursor.read_u32::<BigEndian>().ok()?;
    Some(PayloadInfo { width, height })
}

/// Read the logical screen size of a GIF stream
fn probe_gif(bytes: &[u8]) -> Option<PayloadInfo> {
    if bytes.len() < 10 {
        return None;
    }

    let mut cursor = Cursor::new(&bytes[6..10]);
    let width = cursor.read_u16::<LittleEndian>().ok()?;
    let height = cursor.read_u16::<LittleEndian>().ok()?;
    Some(PayloadInfo {
        width: u32::from(width),
        height: u32::from(height),
    })
}

/// Read the pixel size from a BMP info header
///
/// Only the 40-byte info header family stores i32 dimensions at fixed
/// offsets; files with the short core header keep u16 fields instead and
/// are left to the full decode. The height is stored signed; top-down
/// bitmaps encode it negative.
fn probe_bmp(bytes: &[u8]) -> Option<PayloadInfo> {
    if bytes.len() < 26 {
        return None;
    }

    let mut cursor = Cursor::new(&bytes[14..26]);
    let header_size = cursor.read_u32::<LittleEndian>().ok()?;
    if header_size < 40 {
        return None;
    }

    let width = cursor.read_i32::<LittleEndian>().ok()?;
    let height = cursor.read_i32::<LittleEndian>().ok()?;
    Some(PayloadInfo {
        width: width.unsigned_abs(),
        height: height.unsigned_abs(),
    })
}

/// Walk JPEG segment markers until a frame header reports the dimensions
///
/// Frame headers (the SOF family) store precision, height and width right
/// after the segment length. Entropy-coded data and the end marker
/// terminate the walk.
fn probe_jpeg(bytes: &[u8]) -> Option<PayloadInfo> {
    let mut cursor = Cursor::new(bytes);
    if cursor.read_u16::<BigEndian>().ok()? != 0xFFD8 {
        return None;
    }

    loop {
        // Resync to the next marker byte
        let mut byte = cursor.read_u8().ok()?;
        while byte != 0xFF {
            byte = cursor.read_u8().ok()?;
        }

        // Skip fill bytes before the marker code
        let mut marker = cursor.read_u8().ok()?;
        while marker == 0xFF {
            marker = cursor.read_u8().ok()?;
        }

        match marker {
            // Standalone markers carry no length field
            0x01 | 0xD0..=0xD7 => continue,

            // End of image or start of entropy-coded data
            0xD9 | 0xDA => return None,

            // Frame headers carry the pixel dimensions
            0xC0..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF => {
                let _length = cursor.read_u16::<BigEndian>().ok()?;
                let _precision = cursor.read_u8().ok()?;
                let height = cursor.read_u16::<BigEndian>().ok()?;
                let width = cursor.read_u16::<BigEndian>().ok()?;
                return Some(PayloadInfo {
                    width: u32::from(width),
                    height: u32::from(height),
                });
            }

            _ => {
                let length = cursor.read_u16::<BigEndian>().ok()?;
                if length < 2 {
                    return None;
                }
                cursor.set_position(cursor.position() + u64::from(length) - 2);
            }
        }
    }
}
