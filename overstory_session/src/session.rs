// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive session: one scene, one camera, two buffers.
//!
//! ## Ownership model
//!
//! Everything mutable lives in one explicit [`Session`] owned by the UI
//! layer and driven from a single event loop; there is no ambient or static
//! state. Handlers mutate the session, mark what changed via redraw flags,
//! and the host calls [`Session::render`] once per batch, so rapid pan/zoom
//! updates coalesce into one repaint instead of one per input event.
//!
//! ## Picking
//!
//! A click maps the screen coordinate to a device pixel (camera-independent;
//! the camera is baked into the buffers), samples exactly one hit-buffer
//! pixel, and decodes it. This is O(1) in scene size, which is the entire
//! reason the hit buffer exists instead of a geometric scan over all shapes. A
//! background or out-of-range pixel is a normal no-match, not an error.
//!
//! ## Resize
//!
//! Resize notifications are debounced. When one fires, the current buffers
//! are snapshot as PNG, the backing stores are recreated at the new size,
//! and the snapshot is restored later by [`Session::complete_restore`], the
//! deferred decode step the host runs after the resize handler returns. The
//! restore is best-effort and lossy by design: content is re-anchored at the
//! top-left, clipped, never rescaled, and never recomputed from the scene.
//! A second resize before the restore completes supersedes it.

use std::time::{Duration, Instant};

use bitflags::bitflags;
use kurbo::Point;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use overstory_raster::{BACKGROUND, FrameStats, Pixmap, render_scene, snapshot};
use overstory_scene::{HIT_COLOR_CAPACITY, Scene, ShapeId, coerce_count, decode_hit_color, generate};

use crate::camera::Camera;
use crate::debounce::Debouncer;
use crate::surface::SurfaceMetrics;

bitflags! {
    /// Reasons a repaint is pending. Flags accumulate between renders, so a
    /// burst of input produces one repaint.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct RedrawFlags: u8 {
        /// The scene was replaced.
        const SCENE     = 0b0000_0001;
        /// The view transform changed (pan or zoom).
        const TRANSFORM = 0b0000_0010;
        /// The highlighted shape changed.
        const HIGHLIGHT = 0b0000_0100;
    }
}

/// How clicks are resolved.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PickingMode {
    /// Maintain the offscreen hit buffer; clicks resolve to shapes via a
    /// single pixel read.
    #[default]
    HitBuffer,
    /// Degraded mode: no hit buffer is kept, clicks only record their device
    /// coordinates and never match a shape.
    CoordinatesOnly,
}

/// Construction parameters for a [`Session`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SessionConfig {
    /// Initial buffer width in device pixels.
    pub width: u32,
    /// Initial buffer height in device pixels.
    pub height: u32,
    /// Number of shapes in the initial scene.
    pub shape_count: u32,
    /// Click resolution mode.
    pub mode: PickingMode,
    /// Quiet period for resize debouncing.
    pub debounce_delay: Duration,
    /// RNG seed for scene generation; `None` seeds from the wall clock.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            shape_count: 2500,
            mode: PickingMode::default(),
            debounce_delay: Duration::from_millis(100),
            seed: None,
        }
    }
}

/// Diagnostic counters surfaced to the host UI. Purely observational.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Stats {
    /// Timing of the last repaint.
    pub last_frame: FrameStats,
    /// Duration of the last applied resize (snapshot + buffer recreation).
    pub last_resize: Option<Duration>,
    /// Device coordinates of the last click.
    pub last_click: Option<(u32, u32)>,
    /// Device coordinates of the last pointer move over the surface.
    pub last_pointer: Option<(u32, u32)>,
    /// The last shape a click resolved to.
    pub last_picked: Option<ShapeId>,
}

/// A snapshot awaiting its deferred restore after a resize.
struct PendingRestore {
    visible_png: Vec<u8>,
    hit_png: Option<Vec<u8>>,
    epoch: u64,
}

/// One interactive sandbox session.
pub struct Session {
    scene: Scene,
    camera: Camera,
    visible: Pixmap,
    hit: Option<Pixmap>,
    surface: SurfaceMetrics,
    highlight: Option<ShapeId>,
    pending: RedrawFlags,
    stats: Stats,
    debouncer: Debouncer,
    pending_size: Option<(u32, u32)>,
    restore: Option<PendingRestore>,
    restore_epoch: u64,
    rng: SmallRng,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("shapes", &self.scene.len())
            .field("camera", &self.camera)
            .field("size", &(self.visible.width(), self.visible.height()))
            .field("mode", &self.mode())
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session with a freshly generated scene. The first
    /// [`render`](Self::render) paints it.
    pub fn new(config: SessionConfig) -> Self {
        let seed = config.seed.unwrap_or_else(wall_clock_seed);
        let mut rng = SmallRng::seed_from_u64(seed);
        let count = config.shape_count.min(HIT_COLOR_CAPACITY);
        let scene = generate(&mut rng, count, config.width, config.height);
        let hit = matches!(config.mode, PickingMode::HitBuffer)
            .then(|| Pixmap::new(config.width, config.height));
        Self {
            scene,
            camera: Camera::new(),
            visible: Pixmap::with_background(config.width, config.height, BACKGROUND),
            hit,
            surface: SurfaceMetrics::one_to_one(config.width, config.height),
            highlight: None,
            pending: RedrawFlags::all(),
            stats: Stats::default(),
            debouncer: Debouncer::new(config.debounce_delay),
            pending_size: None,
            restore: None,
            restore_epoch: 0,
            rng,
        }
    }

    /// The current scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The current view transform.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The visible buffer.
    pub fn visible(&self) -> &Pixmap {
        &self.visible
    }

    /// The hit buffer, absent in [`PickingMode::CoordinatesOnly`].
    pub fn hit_buffer(&self) -> Option<&Pixmap> {
        self.hit.as_ref()
    }

    /// The click resolution mode.
    pub fn mode(&self) -> PickingMode {
        if self.hit.is_some() {
            PickingMode::HitBuffer
        } else {
            PickingMode::CoordinatesOnly
        }
    }

    /// Diagnostic counters.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Device pixels in the visible buffer.
    pub fn pixel_count(&self) -> u64 {
        self.visible.pixel_count()
    }

    /// How the surface is currently displayed on screen.
    pub fn surface(&self) -> SurfaceMetrics {
        self.surface
    }

    /// Update the on-screen placement/stretch of the surface. Hosts with CSS
    /// scaling call this whenever the displayed size moves independently of
    /// the device size.
    pub fn set_surface(&mut self, surface: SurfaceMetrics) {
        self.surface = surface;
    }

    /// Whether a repaint is pending.
    pub fn needs_redraw(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Replace the scene with `count` freshly generated shapes (raw input;
    /// negatives clamp to zero). The camera resets to identity, the
    /// highlight is dropped, and a repaint is scheduled.
    pub fn regenerate(&mut self, count: i64) {
        let count = coerce_count(count);
        self.scene = generate(
            &mut self.rng,
            count,
            self.visible.width(),
            self.visible.height(),
        );
        self.reset_view_for_new_scene();
    }

    /// Replace the scene wholesale (tests and demos). Same view reset as
    /// [`regenerate`](Self::regenerate). Ids are taken as given; picking
    /// expects them dense and in range, as [`Scene::from_shapes`] documents.
    pub fn load_scene(&mut self, scene: Scene) {
        self.scene = scene;
        self.reset_view_for_new_scene();
    }

    fn reset_view_for_new_scene(&mut self) {
        self.camera.reset();
        self.highlight = None;
        self.stats.last_picked = None;
        self.pending |= RedrawFlags::SCENE | RedrawFlags::TRANSFORM;
    }

    /// Pointer pressed: start a pan drag.
    pub fn pointer_down(&mut self, screen: Point) {
        self.camera.begin_drag(screen);
    }

    /// Pointer moved: record the device coordinate and, while dragging, pan.
    pub fn pointer_move(&mut self, screen: Point) {
        self.stats.last_pointer = self.surface.device_pixel(screen);
        if self.camera.is_dragging() {
            self.camera.drag_to(screen);
            self.pending |= RedrawFlags::TRANSFORM;
        }
    }

    /// Pointer released: end the drag.
    pub fn pointer_up(&mut self) {
        self.camera.end_drag();
    }

    /// Wheel input: positive `delta_y` zooms out, otherwise in.
    pub fn wheel(&mut self, delta_y: f64) {
        self.camera.wheel(delta_y);
        self.pending |= RedrawFlags::TRANSFORM;
    }

    /// Zoom in one step (the "+" button).
    pub fn zoom_in(&mut self) {
        self.camera.zoom_in();
        self.pending |= RedrawFlags::TRANSFORM;
    }

    /// Zoom out one step (the "−" button).
    pub fn zoom_out(&mut self) {
        self.camera.zoom_out();
        self.pending |= RedrawFlags::TRANSFORM;
    }

    /// Resolve a click at a screen coordinate to the shape under it.
    ///
    /// Returns `None` for clicks outside the surface, on the background, on
    /// stale out-of-range pixels, and always in
    /// [`PickingMode::CoordinatesOnly`]. A match becomes the highlighted
    /// shape (replacing any previous highlight) and is recorded in stats.
    pub fn click(&mut self, screen: Point) -> Option<ShapeId> {
        let (x, y) = self.surface.device_pixel(screen)?;
        self.stats.last_click = Some((x, y));
        // Sample a buffer that reflects all pending changes.
        self.render();

        let hit = self.hit.as_ref()?;
        let index = decode_hit_color(hit.pixel(x, y)?)?;
        if index as usize >= self.scene.len() {
            // Possible after a lossy resize restore of an older scene.
            log::debug!("hit pixel at ({x}, {y}) decoded stale id {index}");
            return None;
        }
        let id = ShapeId::from_index(index);
        if self.highlight != Some(id) {
            self.highlight = Some(id);
            self.pending |= RedrawFlags::HIGHLIGHT;
        }
        self.stats.last_picked = Some(id);
        Some(id)
    }

    /// Repaint both buffers if any redraw reason is pending. Returns the
    /// frame timing when a repaint happened.
    pub fn render(&mut self) -> Option<FrameStats> {
        if self.pending.is_empty() {
            return None;
        }
        let reasons = self.pending;
        self.pending = RedrawFlags::empty();
        let stats = render_scene(
            &self.scene,
            self.camera.to_affine(),
            &mut self.visible,
            self.hit.as_mut(),
            self.highlight,
        );
        self.stats.last_frame = stats;
        log::trace!("repaint for {reasons:?}");
        Some(stats)
    }

    /// Note that the containing surface resized. The actual work is
    /// debounced; call [`tick`](Self::tick) from the event loop.
    pub fn notify_resize(&mut self, width: u32, height: u32, now: Instant) {
        self.pending_size = Some((width, height));
        self.debouncer.trigger(now);
    }

    /// Drive the debounced resize. Returns true when a resize was applied
    /// this tick; the host should then schedule
    /// [`complete_restore`](Self::complete_restore).
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.debouncer.poll(now)
            && let Some((width, height)) = self.pending_size.take()
        {
            self.apply_resize(width, height);
            return true;
        }
        false
    }

    /// Run the deferred snapshot restore, if one is pending. Returns whether
    /// a restore was attempted. Decode failures leave the buffers cleared
    /// for that region; the artifact is transient, so this is tolerated and
    /// only logged.
    pub fn complete_restore(&mut self) -> bool {
        let Some(pending) = self.restore.take() else {
            return false;
        };
        match snapshot::decode_png(&pending.visible_png) {
            Ok(img) => self.visible.blit(&img, 0, 0),
            Err(err) => log::debug!("restore {} of visible buffer failed: {err}", pending.epoch),
        }
        if let (Some(hit), Some(bytes)) = (self.hit.as_mut(), pending.hit_png.as_deref()) {
            match snapshot::decode_png(bytes) {
                Ok(img) => hit.blit(&img, 0, 0),
                Err(err) => log::debug!("restore {} of hit buffer failed: {err}", pending.epoch),
            }
        }
        true
    }

    /// Resize both backing stores in lockstep, preserving prior content via
    /// a snapshot that [`complete_restore`](Self::complete_restore) applies.
    fn apply_resize(&mut self, width: u32, height: u32) {
        let started = Instant::now();
        self.restore_epoch += 1;

        let visible_png = snapshot::encode_png(&self.visible)
            .inspect_err(|err| log::debug!("visible snapshot failed: {err}"))
            .ok();
        let hit_png = self.hit.as_ref().and_then(|hit| {
            snapshot::encode_png(hit)
                .inspect_err(|err| log::debug!("hit snapshot failed: {err}"))
                .ok()
        });

        self.visible = Pixmap::with_background(width, height, BACKGROUND);
        if self.hit.is_some() {
            self.hit = Some(Pixmap::new(width, height));
        }
        self.surface = SurfaceMetrics::one_to_one(width, height);

        // A newer resize supersedes any restore still pending.
        self.restore = visible_png.map(|visible_png| PendingRestore {
            visible_png,
            hit_png,
            epoch: self.restore_epoch,
        });

        self.stats.last_resize = Some(started.elapsed());
        log::debug!(
            "resized to {width}x{height} in {:?} (restore pending: {})",
            self.stats.last_resize.unwrap_or_default(),
            self.restore.is_some(),
        );
    }
}

fn wall_clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the low nanosecond bits are exactly the entropy wanted"
    )]
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use overstory_scene::{PaletteColor, Shape};

    fn config() -> SessionConfig {
        SessionConfig {
            shape_count: 0,
            seed: Some(7),
            ..SessionConfig::default()
        }
    }

    /// Ten non-overlapping circles in a row: shape `i` centered at
    /// `(30 i + 15, 50)` with radius 10.
    fn row_scene() -> Scene {
        Scene::from_shapes(
            (0..10)
                .map(|i| {
                    Shape::circle(
                        ShapeId::from_index(i),
                        PaletteColor::Blue,
                        f64::from(i) * 30.0 + 15.0,
                        50.0,
                        10.0,
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn click_inside_a_shape_picks_it_and_background_does_not() {
        let mut s = Session::new(config());
        s.load_scene(row_scene());
        assert_eq!(s.click(Point::new(15.0, 50.0)), Some(ShapeId::from_index(0)));
        assert_eq!(s.stats().last_picked, Some(ShapeId::from_index(0)));
        assert_eq!(s.click(Point::new(490.0, 490.0)), None);
        // A no-match records the click but keeps the previous pick.
        assert_eq!(s.stats().last_click, Some((490, 490)));
        assert_eq!(s.stats().last_picked, Some(ShapeId::from_index(0)));
    }

    // Scenario: pan by (+50, −30), then click where shape 7's center lands.
    #[test]
    fn pick_follows_the_pan() {
        let mut s = Session::new(config());
        s.load_scene(row_scene());
        s.pointer_down(Point::new(200.0, 200.0));
        s.pointer_move(Point::new(250.0, 170.0));
        s.pointer_up();

        // Shape 7 sits at (225, 50) in scene space; the pan moves it to
        // (275, 20) on screen.
        assert_eq!(s.click(Point::new(275.0, 20.0)), Some(ShapeId::from_index(7)));
    }

    // Scenario: zoom out twice (scale 0.64), then click the background.
    #[test]
    fn background_click_after_zoom_is_none() {
        let mut s = Session::new(config());
        s.load_scene(row_scene());
        s.zoom_out();
        s.zoom_out();
        assert!((s.camera().scale() - 0.64).abs() < 1e-12);
        // The whole row now ends by x ≈ 190; far corners are background.
        assert_eq!(s.click(Point::new(400.0, 400.0)), None);
    }

    #[test]
    fn pick_matches_under_zoom() {
        let mut s = Session::new(config());
        s.load_scene(row_scene());
        s.zoom_out();
        s.zoom_out();
        // Shape 7's center (225, 50) maps to (144, 32) at scale 0.64.
        assert_eq!(s.click(Point::new(144.0, 32.0)), Some(ShapeId::from_index(7)));
    }

    #[test]
    fn highlight_moves_between_picks() {
        let mut s = Session::new(config());
        s.load_scene(row_scene());
        s.click(Point::new(15.0, 50.0));
        s.render();
        assert_eq!(s.visible().pixel(15, 50), Some(PaletteColor::Red.rgba()));

        s.click(Point::new(45.0, 50.0));
        s.render();
        // The previous pick reverts to its own display color.
        assert_eq!(s.visible().pixel(15, 50), Some(PaletteColor::Blue.rgba()));
        assert_eq!(s.visible().pixel(45, 50), Some(PaletteColor::Red.rgba()));
    }

    #[test]
    fn input_bursts_coalesce_into_one_repaint() {
        let mut s = Session::new(config());
        s.load_scene(row_scene());
        s.render();

        s.wheel(1.0);
        s.wheel(1.0);
        s.pointer_down(Point::ORIGIN);
        s.pointer_move(Point::new(10.0, 10.0));
        s.pointer_move(Point::new(20.0, 20.0));
        s.pointer_up();
        assert!(s.needs_redraw());
        assert!(s.render().is_some());
        assert!(s.render().is_none(), "no second repaint without new input");
    }

    #[test]
    fn regenerate_clamps_and_resets_the_view() {
        let mut s = Session::new(config());
        s.wheel(1.0);
        s.regenerate(-5);
        assert!(s.scene().is_empty());
        assert_eq!(s.camera().scale(), 1.0);

        s.regenerate(100);
        assert_eq!(s.scene().len(), 100);
    }

    #[test]
    fn coordinates_only_mode_reports_coordinates_but_never_matches() {
        let mut s = Session::new(SessionConfig {
            mode: PickingMode::CoordinatesOnly,
            ..config()
        });
        s.load_scene(row_scene());
        assert!(s.hit_buffer().is_none());
        assert_eq!(s.click(Point::new(15.0, 50.0)), None);
        assert_eq!(s.stats().last_click, Some((15, 50)));
        assert_eq!(s.stats().last_picked, None);
    }

    // Scenario: resize 500x500 → 800x300 mid-session; both buffers adopt the
    // new size and prior content reappears unscaled at the top-left.
    #[test]
    fn debounced_resize_preserves_content_best_effort() {
        let mut s = Session::new(config());
        s.load_scene(row_scene());
        s.render();
        let t0 = Instant::now();

        s.notify_resize(800, 300, t0);
        assert!(!s.tick(t0 + Duration::from_millis(50)), "too early to fire");
        assert!(s.tick(t0 + Duration::from_millis(100)));
        assert_eq!((s.visible().width(), s.visible().height()), (800, 300));
        let hit = s.hit_buffer().expect("hit buffer resizes in lockstep");
        assert_eq!((hit.width(), hit.height()), (800, 300));
        // Cleared until the deferred restore runs.
        assert_eq!(s.visible().pixel(15, 50), Some(BACKGROUND));

        assert!(s.complete_restore());
        assert_eq!(s.visible().pixel(15, 50), Some(PaletteColor::Blue.rgba()));
        assert_eq!(s.visible().pixel(700, 100), Some(BACKGROUND));
        // The restored hit buffer still resolves clicks, with no repaint.
        assert_eq!(s.click(Point::new(15.0, 50.0)), Some(ShapeId::from_index(0)));
    }

    #[test]
    fn newer_resize_supersedes_pending_restore() {
        let mut s = Session::new(config());
        s.load_scene(row_scene());
        s.render();
        let t0 = Instant::now();

        s.notify_resize(600, 600, t0);
        assert!(s.tick(t0 + Duration::from_millis(100)));
        // Before the restore runs, another resize arrives and fires.
        s.notify_resize(700, 200, t0 + Duration::from_millis(150));
        assert!(s.tick(t0 + Duration::from_millis(250)));

        assert_eq!((s.visible().width(), s.visible().height()), (700, 200));
        assert!(s.complete_restore(), "the newer restore runs");
        assert!(!s.complete_restore(), "the older restore was discarded");
    }

    #[test]
    fn resize_bursts_debounce_to_the_last_size() {
        let mut s = Session::new(config());
        s.render();
        let t0 = Instant::now();
        for (i, w) in [510, 520, 530, 540].into_iter().enumerate() {
            s.notify_resize(w, 500, t0 + Duration::from_millis(10 * i as u64));
        }
        assert!(!s.tick(t0 + Duration::from_millis(100)), "burst still quieting");
        assert!(s.tick(t0 + Duration::from_millis(130)));
        assert_eq!(s.visible().width(), 540);
    }

    #[test]
    fn seeded_sessions_generate_identical_scenes() {
        let a = Session::new(SessionConfig {
            shape_count: 50,
            seed: Some(11),
            ..SessionConfig::default()
        });
        let b = Session::new(SessionConfig {
            shape_count: 50,
            seed: Some(11),
            ..SessionConfig::default()
        });
        assert_eq!(a.scene(), b.scene());
    }
}
