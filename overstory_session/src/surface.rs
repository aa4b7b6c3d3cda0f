// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen-to-device coordinate mapping for the displayed surface.

use kurbo::Point;

/// Where and how large the visible surface is on screen.
///
/// The backing buffers have a device-pixel size, while pointer events arrive
/// in screen (CSS) coordinates relative to some origin; the surface may be
/// displayed stretched. This maps one to the other. It is independent of the
/// camera: pan and zoom are already baked into the buffers at render time,
/// so a hit test needs only the device pixel under the pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceMetrics {
    /// Screen position of the surface's top-left corner.
    pub origin: Point,
    /// Displayed width in screen units.
    pub css_width: f64,
    /// Displayed height in screen units.
    pub css_height: f64,
    /// Backing buffer width in device pixels.
    pub device_width: u32,
    /// Backing buffer height in device pixels.
    pub device_height: u32,
}

impl SurfaceMetrics {
    /// A surface displayed at its device size, at the screen origin.
    pub fn one_to_one(width: u32, height: u32) -> Self {
        Self {
            origin: Point::ORIGIN,
            css_width: f64::from(width),
            css_height: f64::from(height),
            device_width: width,
            device_height: height,
        }
    }

    /// Map a screen coordinate to the device pixel under it, or `None` when
    /// the point lies outside the surface (or the surface is degenerate).
    pub fn device_pixel(&self, screen: Point) -> Option<(u32, u32)> {
        if self.css_width <= 0.0 || self.css_height <= 0.0 {
            return None;
        }
        let fx = (screen.x - self.origin.x) / self.css_width * f64::from(self.device_width);
        let fy = (screen.y - self.origin.y) / self.css_height * f64::from(self.device_height);
        if fx < 0.0 || fy < 0.0 {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "non-negative and bounds-checked against the device size below"
        )]
        let (x, y) = (fx.floor() as u32, fy.floor() as u32);
        (x < self.device_width && y < self.device_height).then_some((x, y))
    }
}
