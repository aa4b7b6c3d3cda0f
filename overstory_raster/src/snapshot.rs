// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! PNG snapshot round-trip for pixel buffers.
//!
//! The resize path preserves prior raster content best-effort: snapshot the
//! buffer as an encoded image, resize the backing store, then decode and
//! blit the snapshot back. PNG is lossless for RGBA8, so the round trip
//! reproduces the prior pixels exactly — including the hit buffer's encoded
//! colors, which must survive byte-for-byte to keep decoding valid.

use std::io::Cursor;

use image::{ImageFormat, ImageReader, RgbaImage};

use crate::pixmap::Pixmap;

/// Failure to serialize or deserialize a buffer snapshot.
///
/// Snapshot failures are tolerated by callers (the resized buffer simply
/// stays cleared); the variants exist so the condition can be logged with a
/// cause rather than swallowed.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The buffer has a zero dimension and cannot be encoded.
    #[error("cannot snapshot a zero-sized buffer")]
    EmptyBuffer,
    /// PNG encoding failed.
    #[error("snapshot encode failed: {0}")]
    Encode(#[source] image::ImageError),
    /// PNG decoding failed (truncated or corrupt snapshot bytes).
    #[error("snapshot decode failed: {0}")]
    Decode(#[source] image::ImageError),
}

/// Serialize a buffer to PNG bytes.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, SnapshotError> {
    if pixmap.width() == 0 || pixmap.height() == 0 {
        return Err(SnapshotError::EmptyBuffer);
    }
    let img = RgbaImage::from_raw(pixmap.width(), pixmap.height(), pixmap.data().to_vec())
        .ok_or(SnapshotError::EmptyBuffer)?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(SnapshotError::Encode)?;
    Ok(out.into_inner())
}

/// Deserialize PNG bytes back into a buffer.
pub fn decode_png(bytes: &[u8]) -> Result<Pixmap, SnapshotError> {
    let img = ImageReader::with_format(Cursor::new(bytes), ImageFormat::Png)
        .decode()
        .map_err(SnapshotError::Decode)?
        .into_rgba8();
    let (width, height) = img.dimensions();
    Ok(Pixmap::from_rgba_bytes(width, height, img.into_raw()))
}
