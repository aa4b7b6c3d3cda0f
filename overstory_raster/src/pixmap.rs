// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! RGBA8 pixel buffers.

use overstory_scene::Rgba8;

/// A row-major RGBA8 raster buffer.
///
/// This is the backing store for both the visible buffer and the offscreen
/// hit buffer. It supports exactly what the render/hit-test pipeline needs:
/// flat fills, single-pixel reads and writes, horizontal span fills for the
/// rasterizer, and a clipped, unscaled [`blit`](Self::blit) used to restore
/// a snapshot after a resize.
///
/// Equality compares dimensions and every pixel, which is what "re-rendering
/// unchanged inputs is idempotent" means in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Create a buffer cleared to transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Wrap raw row-major RGBA8 bytes. `data` must hold exactly
    /// `width * height * 4` bytes; mismatched lengths are a caller bug and
    /// fall back to a cleared buffer in release builds.
    pub fn from_rgba_bytes(width: u32, height: u32, data: Vec<u8>) -> Self {
        let expected = width as usize * height as usize * 4;
        debug_assert_eq!(data.len(), expected);
        if data.len() != expected {
            return Self::new(width, height);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Create a buffer cleared to `background`.
    pub fn with_background(width: u32, height: u32, background: Rgba8) -> Self {
        let mut pixmap = Self::new(width, height);
        pixmap.fill(background);
        pixmap
    }

    /// Buffer width in device pixels.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in device pixels.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Total number of device pixels.
    pub const fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Flood the whole buffer with one color.
    pub fn fill(&mut self, color: Rgba8) {
        for px in self.data.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = color.a;
        }
    }

    /// Read the pixel at device coordinates, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some(Rgba8::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    /// Write the pixel at device coordinates; out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
        self.data[i + 3] = color.a;
    }

    /// Fill the horizontal span `[x0, x1]` on row `y`. Callers pass
    /// already-clipped coordinates.
    pub(crate) fn fill_span(&mut self, y: u32, x0: u32, x1: u32, color: Rgba8) {
        debug_assert!(y < self.height && x0 <= x1 && x1 < self.width);
        let row = y as usize * self.width as usize;
        let start = (row + x0 as usize) * 4;
        let end = (row + x1 as usize) * 4 + 4;
        for px in self.data[start..end].chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = color.a;
        }
    }

    /// Copy `src` over this buffer with its top-left corner at `(x, y)`,
    /// clipped to this buffer's bounds, without scaling.
    ///
    /// Source pixels replace destination pixels (no blending): this is a
    /// restore primitive, not a compositing operation.
    pub fn blit(&mut self, src: &Self, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let copy_w = src.width.min(self.width - x) as usize;
        let copy_h = src.height.min(self.height - y);
        for row in 0..copy_h {
            let src_start = row as usize * src.width as usize * 4;
            let dst_start = ((y + row) as usize * self.width as usize + x as usize) * 4;
            self.data[dst_start..dst_start + copy_w * 4]
                .copy_from_slice(&src.data[src_start..src_start + copy_w * 4]);
        }
    }
}
