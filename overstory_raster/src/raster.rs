// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hard-edged scanline rasterization of circular arcs.
//!
//! ## No antialiasing, on purpose
//!
//! Every covered pixel is written with the exact fill color and full alpha;
//! no edge pixel is ever blended. The hit-test pipeline depends on this:
//! a blended hit-buffer pixel would decode to an id belonging to no shape.
//! Coverage is decided at pixel centers, so rasterizing the same geometry
//! twice touches exactly the same pixels.

use core::f64::consts::TAU;
use kurbo::{Affine, Point};
use overstory_scene::{CircleGeometry, Rgba8};

use crate::pixmap::Pixmap;

/// Fill a circular arc into `pixmap` under `transform`.
///
/// `transform` is expected to be a similarity (translate plus uniform scale,
/// as produced by the camera): the center maps through the affine and the
/// radius scales by `sqrt(|det|)`, so a non-uniform affine rasterizes a
/// circle of equivalent area rather than an ellipse.
///
/// A sweep of `TAU` or more fills the whole disc via span fills; smaller
/// sweeps fill the wedge between `start_angle` and `start_angle +
/// sweep_angle`, measured like the source geometry with y pointing down.
/// Degenerate radii and fully offscreen geometry write nothing.
pub fn fill_circle(pixmap: &mut Pixmap, geometry: CircleGeometry, transform: Affine, color: Rgba8) {
    let center = transform * Point::new(geometry.cx, geometry.cy);
    let radius = geometry.radius * uniform_scale(transform);
    if !(radius > 0.0) || !center.x.is_finite() || !center.y.is_finite() {
        return;
    }

    let (w, h) = (pixmap.width(), pixmap.height());
    if w == 0 || h == 0 {
        return;
    }

    // Rows whose pixel centers can fall inside the disc, clipped to the buffer.
    let y_min = clamp_coord(center.y - radius, h);
    let y_max = clamp_coord(center.y + radius, h);
    let full = geometry.sweep_angle >= TAU;

    for py in y_min..=y_max {
        let dy = (f64::from(py) + 0.5) - center.y;
        let half_sq = radius * radius - dy * dy;
        if half_sq < 0.0 {
            continue;
        }
        let half = half_sq.sqrt();
        // Pixel center coverage: |px + 0.5 - cx| <= half.
        let x_lo = center.x - half - 0.5;
        let x_hi = center.x + half - 0.5;
        if x_hi < 0.0 || x_lo > f64::from(w - 1) {
            continue;
        }
        let x_min = clamp_coord(x_lo.ceil(), w);
        let x_max = clamp_coord(x_hi.floor(), w);
        if x_min > x_max {
            continue;
        }
        if full {
            pixmap.fill_span(py, x_min, x_max, color);
        } else {
            for px in x_min..=x_max {
                let dx = (f64::from(px) + 0.5) - center.x;
                if angle_in_sweep(dx, dy, geometry.start_angle, geometry.sweep_angle) {
                    pixmap.set_pixel(px, py, color);
                }
            }
        }
    }
}

/// The uniform scale factor of a similarity transform.
fn uniform_scale(transform: Affine) -> f64 {
    transform.determinant().abs().sqrt()
}

/// Whether the direction `(dx, dy)` lies within the arc's angular range.
fn angle_in_sweep(dx: f64, dy: f64, start: f64, sweep: f64) -> bool {
    if dx == 0.0 && dy == 0.0 {
        // The exact center belongs to every wedge.
        return true;
    }
    let angle = dy.atan2(dx);
    (angle - start).rem_euclid(TAU) <= sweep
}

/// Clamp a device-space coordinate to a valid pixel index in `[0, extent)`.
fn clamp_coord(v: f64, extent: u32) -> u32 {
    if v <= 0.0 {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "value is clamped to the buffer extent, which fits u32"
    )]
    let v = v as u32;
    v.min(extent - 1)
}
