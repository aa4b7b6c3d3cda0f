// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_session --heading-base-level=0

//! Overstory Session: the interactive layer of the color-picking sandbox.
//!
//! A [`Session`] owns a generated [`overstory_scene`] scene, a pan/zoom
//! [`Camera`], and the visible/hit buffer pair painted by
//! [`overstory_raster`]. The host UI feeds it pointer, wheel, click, and
//! resize events and drives it from a single event loop:
//!
//! - input handlers mutate state and accumulate [`RedrawFlags`];
//! - [`Session::render`] repaints once per batch of changes;
//! - [`Session::click`] resolves a screen point to the shape under it by
//!   reading one hit-buffer pixel, independent of scene size;
//! - [`Session::notify_resize`] / [`Session::tick`] debounce resizes and
//!   preserve content via a PNG snapshot that
//!   [`Session::complete_restore`] applies afterwards.
//!
//! Nothing here owns a timer or an event source. All timing enters through
//! explicit [`std::time::Instant`] arguments, so the whole layer is
//! deterministic under test.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use overstory_session::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig {
//!     shape_count: 200,
//!     seed: Some(42),
//!     ..SessionConfig::default()
//! });
//! session.render();
//!
//! // Picking is a single pixel read; a background click is simply no match.
//! if let Some(id) = session.click(Point::new(250.0, 250.0)) {
//!     println!("picked shape {}", id.index());
//! }
//! ```

pub mod camera;
pub mod debounce;
pub mod session;
pub mod surface;

pub use camera::{Camera, SCALE_MULTIPLIER};
pub use debounce::Debouncer;
pub use session::{PickingMode, RedrawFlags, Session, SessionConfig, Stats};
pub use surface::SurfaceMetrics;
