// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounced resize with snapshot-based content restore.
//!
//! A burst of resize notifications collapses into one applied resize. The
//! prior buffer content comes back via a PNG snapshot, re-anchored at the
//! top-left, clipped but never rescaled.
//!
//! Run:
//! - `cargo run -p overstory_demos --example resize_restore`

use std::time::{Duration, Instant};

use overstory_session::{Session, SessionConfig};

fn main() {
    let mut session = Session::new(SessionConfig {
        shape_count: 500,
        seed: Some(3),
        ..SessionConfig::default()
    });
    session.render();
    println!(
        "initial surface: {}x{} ({} pixels)",
        session.visible().width(),
        session.visible().height(),
        session.pixel_count(),
    );

    // Simulate a resize drag: a burst of intermediate sizes, then quiet.
    let t0 = Instant::now();
    for (ms, w, h) in [(0u64, 520, 480), (20, 600, 420), (40, 700, 350), (60, 800, 300)] {
        session.notify_resize(w, h, t0 + Duration::from_millis(ms));
    }
    let mut now = t0;
    let mut fired = 0;
    while now < t0 + Duration::from_millis(300) {
        if session.tick(now) {
            fired += 1;
            println!(
                "resize applied at +{:?}: {}x{} in {:?}",
                now.duration_since(t0),
                session.visible().width(),
                session.visible().height(),
                session.stats().last_resize.unwrap_or_default(),
            );
        }
        now += Duration::from_millis(10);
    }
    println!("burst of 4 notifications fired {fired} resize(s)");

    // The deferred restore brings the old content back at the top-left.
    let restored = session.complete_restore();
    println!("snapshot restore ran: {restored}");
    println!(
        "final surface: {}x{} ({} pixels)",
        session.visible().width(),
        session.visible().height(),
        session.pixel_count(),
    );
}
