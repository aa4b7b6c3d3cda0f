// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view transform: pan offset, zoom factor, and drag state.
//!
//! ## Drag is absolute, not incremental
//!
//! A drag records the offset between the pointer and the current translate
//! once, at press time; every subsequent move sets the translate to
//! `pointer − anchor` outright. A dropped or late move event therefore
//! never accumulates drift — the next event lands the view exactly where
//! the pointer says it should be.
//!
//! ## Zoom is anchored at the origin
//!
//! Zooming multiplies the scale and leaves the translate untouched, so the
//! view zooms about the coordinate origin rather than the pointer. When
//! panned far from the origin this is disorienting; it is the observed
//! behavior of this sandbox and is preserved as-is, not corrected.

use kurbo::{Affine, Point, Vec2};

/// Per-step zoom factor: zooming out multiplies the scale by this,
/// zooming in divides by it.
pub const SCALE_MULTIPLIER: f64 = 0.8;

/// Pan/zoom state applied identically to both raster buffers at render time.
///
/// The camera never clamps: scale may shrink toward zero or grow without
/// bound, and the translate is unrestricted. Hosts wanting sanity limits
/// impose them outside.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    translate: Vec2,
    scale: f64,
    drag_anchor: Option<Vec2>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// The identity camera: no pan, scale 1.0, not dragging.
    pub const fn new() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
            drag_anchor: None,
        }
    }

    /// Current pan offset.
    pub const fn translate(&self) -> Vec2 {
        self.translate
    }

    /// Current zoom factor.
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Whether a drag is in progress.
    pub const fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Reset to the identity view and end any drag.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Begin a drag: the anchor is the offset between the pointer and the
    /// current translate.
    pub fn begin_drag(&mut self, pointer: Point) {
        self.drag_anchor = Some(pointer.to_vec2() - self.translate);
    }

    /// Move the drag: the translate becomes `pointer − anchor`, absolutely.
    /// Ignored when no drag is in progress.
    pub fn drag_to(&mut self, pointer: Point) {
        if let Some(anchor) = self.drag_anchor {
            self.translate = pointer.to_vec2() - anchor;
        }
    }

    /// End the drag, keeping the current translate.
    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Zoom in one step (about the origin).
    pub fn zoom_in(&mut self) {
        self.scale /= SCALE_MULTIPLIER;
    }

    /// Zoom out one step (about the origin).
    pub fn zoom_out(&mut self) {
        self.scale *= SCALE_MULTIPLIER;
    }

    /// Wheel input: a positive `delta_y` (scrolling down) zooms out, any
    /// other value zooms in.
    pub fn wheel(&mut self, delta_y: f64) {
        if delta_y > 0.0 {
            self.zoom_out();
        } else {
            self.zoom_in();
        }
    }

    /// The affine this camera applies to scene geometry: scale, then
    /// translate — the order both buffers are rendered with.
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }
}
