// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic scene generation.
//!
//! Scenes are populated with uniform-random circles: a palette color, an
//! integer center within the given bounds, and an integer radius below
//! [`MAX_RADIUS`]. Generation is generic over [`rand::Rng`] so interactive
//! callers can hand in a thread-local or small fast generator while tests
//! use a seeded one and get reproducible scenes.

use rand::Rng;

use crate::color::{DISPLAY_PALETTE, HIT_COLOR_CAPACITY};
use crate::shape::{Scene, Shape, ShapeId};

/// Exclusive upper bound for generated radii, in scene units.
///
/// A radius of zero is valid output: such a shape paints no pixels and can
/// never be picked, which is fine.
pub const MAX_RADIUS: u32 = 20;

/// Generate a scene of `count` random circles within `bounds_w` × `bounds_h`.
///
/// Ids are the generation indices `0..count`, which makes the hit-color
/// mapping injective for the whole scene as long as `count` does not exceed
/// [`HIT_COLOR_CAPACITY`]; run raw user input through [`coerce_count`] first.
/// Zero-sized bounds degenerate to centers at the origin rather than failing.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: u32, bounds_w: u32, bounds_h: u32) -> Scene {
    let count = count.min(HIT_COLOR_CAPACITY);
    let mut shapes = alloc::vec::Vec::with_capacity(count as usize);
    for index in 0..count {
        let color = DISPLAY_PALETTE[rng.gen_range(0..DISPLAY_PALETTE.len())];
        let cx = random_up_to(rng, bounds_w);
        let cy = random_up_to(rng, bounds_h);
        let radius = random_up_to(rng, MAX_RADIUS);
        shapes.push(Shape::circle(
            ShapeId::from_index(index),
            color,
            cx,
            cy,
            radius,
        ));
    }
    Scene::from_shapes(shapes)
}

/// Coerce a raw shape count (for example parsed UI input) into the supported
/// domain: negatives clamp to zero, and the result is capped at
/// [`HIT_COLOR_CAPACITY`] so every shape keeps a distinct hit color.
pub fn coerce_count(raw: i64) -> u32 {
    raw.clamp(0, i64::from(HIT_COLOR_CAPACITY)) as u32
}

/// Uniform integer in `[0, to)` as f64; `to == 0` yields 0.
fn random_up_to<R: Rng + ?Sized>(rng: &mut R, to: u32) -> f64 {
    if to == 0 {
        return 0.0;
    }
    f64::from(rng.gen_range(0..to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PaletteColor;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn generates_requested_count_with_dense_ids() {
        let mut rng = SmallRng::seed_from_u64(7);
        let scene = generate(&mut rng, 100, 500, 500);
        assert_eq!(scene.len(), 100);
        for (i, shape) in scene.iter().enumerate() {
            assert_eq!(shape.id.index(), i);
        }
    }

    #[test]
    fn shapes_respect_bounds_and_radius_limit() {
        let mut rng = SmallRng::seed_from_u64(42);
        let scene = generate(&mut rng, 1000, 300, 200);
        for shape in &scene {
            let g = shape.geometry;
            assert!((0.0..300.0).contains(&g.cx));
            assert!((0.0..200.0).contains(&g.cy));
            assert!((0.0..f64::from(MAX_RADIUS)).contains(&g.radius));
            assert_ne!(shape.color, PaletteColor::Red, "highlight color is reserved");
        }
    }

    #[test]
    fn same_seed_same_scene() {
        let a = generate(&mut SmallRng::seed_from_u64(3), 50, 500, 500);
        let b = generate(&mut SmallRng::seed_from_u64(3), 50, 500, 500);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_bounds_do_not_panic() {
        let mut rng = SmallRng::seed_from_u64(0);
        let scene = generate(&mut rng, 10, 0, 0);
        assert_eq!(scene.len(), 10);
        for shape in &scene {
            assert_eq!((shape.geometry.cx, shape.geometry.cy), (0.0, 0.0));
        }
    }

    #[test]
    fn coerce_count_clamps() {
        assert_eq!(coerce_count(-5), 0);
        assert_eq!(coerce_count(0), 0);
        assert_eq!(coerce_count(2500), 2500);
        assert_eq!(coerce_count(i64::MAX), HIT_COLOR_CAPACITY);
    }
}
