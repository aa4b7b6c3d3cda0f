// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_raster --heading-base-level=0

//! Overstory Raster: software rasterization for the color-picking pipeline.
//!
//! Overstory Raster paints [`overstory_scene`] scenes into plain RGBA8
//! buffers.
//!
//! - [`Pixmap`]: a row-major RGBA8 buffer with pixel reads, fills, and a
//!   clipped unscaled blit.
//! - [`fill_circle`]: hard-edged (never antialiased) scanline disc and wedge
//!   fills under a similarity transform.
//! - [`render_scene`]: one pass painting display colors into the visible
//!   buffer and encoded hit colors into the offscreen hit buffer, in
//!   lockstep, in painter's-algorithm order.
//! - `snapshot` (default feature): lossless PNG round-trip of a buffer, the
//!   primitive behind resize-preserving restores.
//!
//! Hit testing never happens here; it is a single [`Pixmap::pixel`] read
//! plus [`overstory_scene::decode_hit_color`], owned by the session layer.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Affine;
//! use overstory_raster::{Pixmap, render_scene};
//! use overstory_scene::{PaletteColor, Scene, Shape, ShapeId, decode_hit_color};
//!
//! let scene = Scene::from_shapes(vec![
//!     Shape::circle(ShapeId::from_index(0), PaletteColor::Blue, 20.0, 20.0, 10.0),
//! ]);
//!
//! let mut visible = Pixmap::new(64, 64);
//! let mut hit = Pixmap::new(64, 64);
//! render_scene(&scene, Affine::IDENTITY, &mut visible, Some(&mut hit), None);
//!
//! // The hit pixel under the circle's center decodes to the shape's index.
//! assert_eq!(decode_hit_color(hit.pixel(20, 20).unwrap()), Some(0));
//! ```

pub mod pixmap;
pub mod raster;
pub mod render;
#[cfg(feature = "snapshot")]
pub mod snapshot;

pub use pixmap::Pixmap;
pub use raster::fill_circle;
pub use render::{BACKGROUND, FrameStats, render_scene};
#[cfg(feature = "snapshot")]
pub use snapshot::{SnapshotError, decode_png, encode_png};

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Affine;
    use overstory_scene::{decode_hit_color, generate};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    // Scenario: a 100-shape seeded scene rendered at identity. Every painted
    // hit pixel decodes to a valid id, and every shape with a paintable
    // radius that is not fully occluded is recoverable somewhere.
    #[test]
    fn every_painted_hit_pixel_decodes_to_a_valid_id() {
        let mut rng = SmallRng::seed_from_u64(99);
        let scene = generate(&mut rng, 100, 500, 500);
        let mut visible = Pixmap::new(500, 500);
        let mut hit = Pixmap::new(500, 500);
        render_scene(&scene, Affine::IDENTITY, &mut visible, Some(&mut hit), None);

        let mut seen = [false; 100];
        for y in 0..500 {
            for x in 0..500 {
                if let Some(index) = decode_hit_color(hit.pixel(x, y).unwrap()) {
                    assert!(index < 100, "decoded id {index} out of range at ({x}, {y})");
                    seen[index as usize] = true;
                }
            }
        }
        assert!(
            seen.iter().filter(|&&s| s).count() > 50,
            "most shapes of a sparse scene should be recoverable"
        );
    }
}
