// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display colors and the reversible hit-color codec.
//!
//! ## Two unrelated color spaces
//!
//! A shape carries a *display* color picked from a small fixed palette, and
//! derives a *hit* color from its index. The two never interact: hit testing
//! reads only the hit buffer, so a display color may coincide with another
//! shape's hit color (or with the background) without ambiguity.
//!
//! ## Hit-color encoding
//!
//! An index is formatted as a fixed-width 24-bit value and split into the
//! red, green, and blue channel bytes, with alpha forced to opaque. This is
//! pure and injective on `[0, HIT_COLOR_CAPACITY)`, so a pixel sampled from
//! the hit buffer maps back to at most one shape. Decoding rejects any pixel
//! that is not fully opaque: cleared (transparent) background pixels would
//! otherwise alias index 0.

/// An 8-bit-per-channel RGBA color, the pixel format of all buffers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel. Hit-color decoding requires `0xFF` here.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black; the hit buffer's clear color.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque white; the visible buffer's clear color.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Construct a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Construct an opaque color from RGB channel values.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// A display color for a shape.
///
/// The first five entries form the generation palette; [`Red`](Self::Red) is
/// reserved for highlighting the most recently picked shape and is never
/// produced by the generator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    /// CSS `blue`.
    Blue,
    /// CSS `green`.
    Green,
    /// CSS `black`.
    Black,
    /// CSS `gray`.
    Gray,
    /// CSS `cyan`.
    Cyan,
    /// CSS `red`; the picked-shape highlight, not part of the palette.
    Red,
}

/// The palette the generator draws display colors from, uniformly.
pub const DISPLAY_PALETTE: [PaletteColor; 5] = [
    PaletteColor::Blue,
    PaletteColor::Green,
    PaletteColor::Black,
    PaletteColor::Gray,
    PaletteColor::Cyan,
];

impl PaletteColor {
    /// The RGBA value of this palette entry (CSS named-color values).
    pub const fn rgba(self) -> Rgba8 {
        match self {
            Self::Blue => Rgba8::opaque(0, 0, 255),
            Self::Green => Rgba8::opaque(0, 128, 0),
            Self::Black => Rgba8::opaque(0, 0, 0),
            Self::Gray => Rgba8::opaque(128, 128, 128),
            Self::Cyan => Rgba8::opaque(0, 255, 255),
            Self::Red => Rgba8::opaque(255, 0, 0),
        }
    }
}

/// Number of distinct hit colors: 24 bits, one per RGB byte triple.
///
/// Scene sizes are capped to this (see [`crate::generate::coerce_count`]) so
/// hit-color uniqueness holds by construction for a whole scene.
pub const HIT_COLOR_CAPACITY: u32 = 1 << 24;

/// Encode a shape index as its unique, fully opaque hit color.
///
/// Injective on `[0, HIT_COLOR_CAPACITY)`. Indices outside the domain are a
/// caller bug; debug builds assert.
pub const fn encode_hit_color(index: u32) -> Rgba8 {
    debug_assert!(index < HIT_COLOR_CAPACITY);
    Rgba8::opaque((index >> 16) as u8, (index >> 8) as u8, index as u8)
}

/// Decode a sampled hit-buffer pixel back to a shape index.
///
/// Returns `None` for any pixel that is not fully opaque: the cleared
/// background, or an edge pixel a blending rasterizer might produce. The
/// rasterizer used here is hard-edged, so in practice every painted pixel
/// decodes. The returned index is *not* range-checked against a scene; the
/// caller does that (see the session's pick path).
pub const fn decode_hit_color(px: Rgba8) -> Option<u32> {
    if px.a != 0xFF {
        return None;
    }
    Some(((px.r as u32) << 16) | ((px.g as u32) << 8) | (px.b as u32))
}
