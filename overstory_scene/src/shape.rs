// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shapes and ordered scenes.

use alloc::vec::Vec;

use crate::color::{PaletteColor, Rgba8, encode_hit_color};

/// Identifier for a shape: its dense index within one generated scene.
///
/// Identifiers are the generation index, so they double as direct offsets
/// into the owning [`Scene`] and as the domain of the hit-color codec. They
/// are only meaningful for the scene that produced them; a regenerated scene
/// reuses the same indices for entirely different shapes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ShapeId(pub(crate) u32);

impl ShapeId {
    /// Construct an id from a dense scene index.
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// The dense scene index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The kind of a shape.
///
/// Only circles exist today; the field is kept on [`Shape`] so scenes can
/// grow other kinds without reshaping the model.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ShapeKind {
    /// A filled circular arc.
    Circle,
}

/// Parameters sufficient to rasterize a circular arc.
///
/// Angles are radians; the generator always emits a full circle
/// (`start_angle = 0`, `sweep_angle = TAU`), but partial sweeps are honored
/// by the rasterizer as filled wedges.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CircleGeometry {
    /// Center x, in scene (pre-transform) coordinates.
    pub cx: f64,
    /// Center y, in scene coordinates.
    pub cy: f64,
    /// Radius, in scene units.
    pub radius: f64,
    /// Arc start angle, radians.
    pub start_angle: f64,
    /// Arc sweep, radians. A sweep of `TAU` or more is a full circle.
    pub sweep_angle: f64,
}

impl CircleGeometry {
    /// A full circle at `(cx, cy)` with the given radius.
    pub const fn full(cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            cx,
            cy,
            radius,
            start_angle: 0.0,
            sweep_angle: core::f64::consts::TAU,
        }
    }
}

/// One shape descriptor. Immutable after creation.
///
/// The display color is part of the descriptor; the hit color is not stored
/// but derived from the id on demand via [`Shape::hit_color`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shape {
    /// Dense identifier within the owning scene.
    pub id: ShapeId,
    /// Display color, drawn in the visible buffer.
    pub color: PaletteColor,
    /// Shape kind; currently always [`ShapeKind::Circle`].
    pub kind: ShapeKind,
    /// Rasterization parameters.
    pub geometry: CircleGeometry,
}

impl Shape {
    /// A full-circle shape, the only kind the generator produces.
    pub const fn circle(id: ShapeId, color: PaletteColor, cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            id,
            color,
            kind: ShapeKind::Circle,
            geometry: CircleGeometry::full(cx, cy, radius),
        }
    }

    /// The unique flat color painted for this shape in the hit buffer.
    pub const fn hit_color(&self) -> Rgba8 {
        encode_hit_color(self.id.0)
    }
}

/// An ordered sequence of shapes.
///
/// Order is paint order: later shapes occlude earlier ones at overlapping
/// pixels, in the visible and hit buffers identically, so the topmost
/// painted shape is also the one a pixel read resolves to.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// An empty scene.
    pub const fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Build a scene from shapes in paint order.
    ///
    /// Intended for tests and demos; generated scenes come from
    /// [`generate`](crate::generate::generate). Ids are taken as given, so
    /// callers wanting pick support should keep them dense and in range.
    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the scene has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Look up a shape by id, if the id is in range for this scene.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.index())
    }

    /// Iterate shapes in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Shape;
    type IntoIter = core::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
