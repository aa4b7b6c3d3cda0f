// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan and zoom a scene and show that picking tracks the view.
//!
//! The camera is baked into both buffers at render time, so a click needs no
//! inverse transform: the hit buffer already shows the world as displayed.
//!
//! Run:
//! - `cargo run -p overstory_demos --example pan_zoom`

use kurbo::Point;
use overstory_scene::{PaletteColor, Scene, Shape, ShapeId};
use overstory_session::{SCALE_MULTIPLIER, Session, SessionConfig};

fn main() {
    let mut session = Session::new(SessionConfig {
        shape_count: 0,
        seed: Some(1),
        ..SessionConfig::default()
    });

    // One known circle at (100, 100) with radius 20.
    session.load_scene(Scene::from_shapes(vec![Shape::circle(
        ShapeId::from_index(0),
        PaletteColor::Cyan,
        100.0,
        100.0,
        20.0,
    )]));
    session.render();
    println!("shape at (100, 100): pick at center = {:?}", session.click(Point::new(100.0, 100.0)));

    // Drag the view 150 right and 50 down.
    session.pointer_down(Point::new(200.0, 200.0));
    session.pointer_move(Point::new(350.0, 250.0));
    session.pointer_up();
    println!(
        "panned by {:?}; pick at old center = {:?}, at new center = {:?}",
        session.camera().translate(),
        session.click(Point::new(100.0, 100.0)),
        session.click(Point::new(250.0, 150.0)),
    );

    // Zoom out twice. Zoom is anchored at the origin and the translate is
    // untouched, so the shape now sits at scale * (100, 100) + translate.
    session.zoom_out();
    session.zoom_out();
    let scale = session.camera().scale();
    let center = Point::new(scale * 100.0 + 150.0, scale * 100.0 + 50.0);
    println!(
        "zoomed out twice (x{SCALE_MULTIPLIER} per step): scale = {scale}, pick at scaled center = {:?}",
        session.click(center),
    );

    // Wheel input maps sign to direction.
    session.wheel(-1.0);
    session.wheel(-1.0);
    println!("two wheel-up steps restore scale = {}", session.camera().scale());
}
