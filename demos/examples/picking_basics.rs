// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generate a scene, render both buffers, and resolve a few clicks.
//!
//! This example walks the core pipeline: a seeded scene of random circles,
//! one dual-buffer render, then picking by reading single hit-buffer pixels.
//!
//! Run:
//! - `cargo run -p overstory_demos --example picking_basics`

use kurbo::Point;
use overstory_session::{Session, SessionConfig};

fn main() {
    let mut session = Session::new(SessionConfig {
        shape_count: 2500,
        seed: Some(7),
        ..SessionConfig::default()
    });

    let frame = session.render().expect("initial render is pending");
    println!(
        "rendered {} shapes into a {}x{} surface in {:?}",
        frame.shapes,
        session.visible().width(),
        session.visible().height(),
        frame.elapsed,
    );
    if let Some(rate) = frame.draws_per_second() {
        println!("  ({rate:.0} fills/sec)");
    }

    // Probe a diagonal of points; dense scenes hit shapes almost everywhere.
    for i in 0..5 {
        let p = Point::new(f64::from(i) * 100.0 + 50.0, f64::from(i) * 100.0 + 50.0);
        match session.click(p) {
            Some(id) => {
                let shape = session.scene().get(id).expect("picked ids are in range");
                println!(
                    "click at ({:.0}, {:.0}) picked shape {} ({:?}, r={:.1})",
                    p.x,
                    p.y,
                    id.index(),
                    shape.color,
                    shape.geometry.radius,
                );
            }
            None => println!("click at ({:.0}, {:.0}) hit the background", p.x, p.y),
        }
    }

    // The most recent pick renders highlighted.
    session.render();
    if let Some(id) = session.stats().last_picked {
        println!("shape {} is now highlighted in red", id.index());
    }
}
