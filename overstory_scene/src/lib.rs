// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_scene --heading-base-level=0

//! Overstory Scene: generated circle scenes and the reversible hit-color codec.
//!
//! Overstory Scene is the model layer of a color-picking canvas sandbox.
//!
//! - Generate scenes of N random circles with palette display colors.
//! - Derive a unique, reversible "hit color" from each shape's dense index.
//! - Order is paint order: later shapes occlude earlier ones.
//!
//! It knows nothing about rasterization or input; higher layers paint a
//! scene into a visible buffer and, in lockstep, into an offscreen hit
//! buffer using [`Shape::hit_color`], then resolve clicks with a single
//! pixel read and [`decode_hit_color`].
//!
//! # Example
//!
//! ```rust
//! use overstory_scene::{decode_hit_color, generate};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! // Generate a reproducible scene.
//! let mut rng = SmallRng::seed_from_u64(1);
//! let scene = generate(&mut rng, 100, 500, 500);
//! assert_eq!(scene.len(), 100);
//!
//! // Every shape's hit color decodes back to its own index.
//! for shape in &scene {
//!     assert_eq!(decode_hit_color(shape.hit_color()), Some(shape.id.index() as u32));
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod color;
pub mod generate;
pub mod shape;

pub use color::{
    DISPLAY_PALETTE, HIT_COLOR_CAPACITY, PaletteColor, Rgba8, decode_hit_color, encode_hit_color,
};
pub use generate::{MAX_RADIUS, coerce_count, generate};
pub use shape::{CircleGeometry, Scene, Shape, ShapeId, ShapeKind};
