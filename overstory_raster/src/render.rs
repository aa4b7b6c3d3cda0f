// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dual-buffer scene renderer.
//!
//! One pass paints the whole scene twice in lockstep: display colors into
//! the visible buffer, encoded hit colors into the offscreen hit buffer,
//! with identical geometry and the identical view transform. Shapes are
//! painted in scene order, so later shapes occlude earlier ones in both
//! buffers the same way and the topmost visible shape is also the one a hit
//! pixel resolves to.

use std::time::{Duration, Instant};

use kurbo::Affine;
use overstory_scene::{PaletteColor, Rgba8, Scene, ShapeId};

use crate::pixmap::Pixmap;
use crate::raster::fill_circle;

/// The visible buffer's background.
pub const BACKGROUND: Rgba8 = Rgba8::WHITE;

/// Timing for one full repaint. Diagnostic only; not part of the
/// functional contract.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    /// Wall-clock duration of the repaint.
    pub elapsed: Duration,
    /// Number of shapes painted.
    pub shapes: usize,
}

impl FrameStats {
    /// Shape fills per second extrapolated from the last frame, or `None`
    /// for an instantaneous (unmeasurable) frame.
    pub fn draws_per_second(&self) -> Option<f64> {
        let secs = self.elapsed.as_secs_f64();
        (secs > 0.0).then(|| self.shapes as f64 / secs)
    }
}

/// Repaint `scene` under `transform` into `visible` and, when present, `hit`.
///
/// Both buffers are cleared first: visible to [`BACKGROUND`], hit to
/// transparent (the "no shape" signal for decoding). The highlighted shape,
/// if any, is painted [`PaletteColor::Red`] in the visible buffer; its hit
/// color is unaffected, so a highlighted shape still picks as itself.
///
/// The pass is a pure function of its inputs: repainting unchanged inputs
/// produces pixel-identical buffers.
pub fn render_scene(
    scene: &Scene,
    transform: Affine,
    visible: &mut Pixmap,
    mut hit: Option<&mut Pixmap>,
    highlight: Option<ShapeId>,
) -> FrameStats {
    let started = Instant::now();

    visible.fill(BACKGROUND);
    if let Some(hit) = hit.as_deref_mut() {
        hit.fill(Rgba8::TRANSPARENT);
    }

    for shape in scene {
        let display = if highlight == Some(shape.id) {
            PaletteColor::Red
        } else {
            shape.color
        };
        fill_circle(visible, shape.geometry, transform, display.rgba());
        if let Some(hit) = hit.as_deref_mut() {
            fill_circle(hit, shape.geometry, transform, shape.hit_color());
        }
    }

    let stats = FrameStats {
        elapsed: started.elapsed(),
        shapes: scene.len(),
    };
    log::debug!(
        "rendered {} shapes in {:?} ({}x{})",
        stats.shapes,
        stats.elapsed,
        visible.width(),
        visible.height(),
    );
    stats
}
