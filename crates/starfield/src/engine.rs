use glam::Vec2;

use crate::api::config::StarfieldConfig;
use crate::components::{Comet, Galaxy, Star};
use crate::core::bounds::SceneBounds;
use crate::core::rng::Rng;
use crate::core::scheduler::{FrameLoop, Scheduler};
use crate::core::time::clamp_delta;
use crate::input::{orientation_to_screen, InputEvent, InputQueue, Pointer, ResizeDebouncer, ResizeRequest};
use crate::renderer::Canvas2d;
use crate::systems::draw::{draw_background, draw_comets, draw_galaxies, draw_stars};
use crate::systems::update::{maybe_spawn_comet, update_comets, update_galaxies, update_stars};
use crate::systems::Population;

/// The starfield engine. Owns every piece of animation state.
///
/// Hosts drive it in one of two ways:
/// - manually: `resize`, then `update(dt)` + `draw(canvas)` per tick;
/// - looped: `start(scheduler)`, then `frame(now_ms, scheduler, canvas)` each
///   time the scheduler fires.
pub struct Starfield {
    config: StarfieldConfig,
    bounds: SceneBounds,
    population: Population,
    pointer: Pointer,
    input: InputQueue,
    rng: Rng,
    frames: FrameLoop,
    resize_debounce: ResizeDebouncer,
}

impl Starfield {
    /// Create an engine with an empty scene. Call `resize` before the first frame.
    pub fn new(config: StarfieldConfig) -> Self {
        let config = config.sanitized();
        let rng = Rng::new(config.seed_or_default());
        let resize_debounce = ResizeDebouncer::new(config.resize_debounce_ms);
        Self {
            config,
            bounds: SceneBounds::default(),
            population: Population::empty(),
            pointer: Pointer::default(),
            input: InputQueue::new(),
            rng,
            frames: FrameLoop::new(),
            resize_debounce,
        }
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn bounds(&self) -> &SceneBounds {
        &self.bounds
    }

    pub fn stars(&self) -> &[Star] {
        &self.population.stars
    }

    pub fn galaxies(&self) -> &[Galaxy] {
        &self.population.galaxies
    }

    pub fn comets(&self) -> &[Comet] {
        &self.population.comets
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    // -- Scene --

    /// Set the viewport and rebuild the scene. Comets are discarded.
    pub fn resize(&mut self, width: f32, height: f32, dpr: f32) {
        self.bounds = SceneBounds::new(width, height, dpr);
        // Built aside and swapped in whole.
        self.population = Population::generate(&self.bounds, &self.config, &mut self.rng);
        log::info!(
            "starfield resized to {}x{} @{}x: {} stars, {} galaxies",
            self.bounds.width,
            self.bounds.height,
            self.bounds.dpr,
            self.population.stars.len(),
            self.population.galaxies.len()
        );
    }

    /// Resize, then size the canvas backing store and scale its transform so
    /// drawing works in logical units.
    pub fn resize_surface<C: Canvas2d + ?Sized>(&mut self, canvas: &mut C, width: f32, height: f32, dpr: f32) {
        self.resize(width, height, dpr);
        let render_scale = self.config.render_scale;
        let (w, h) = self.bounds.backing_size(render_scale);
        canvas.resize_backing_store(w, h, self.bounds.width, self.bounds.height);
        canvas.set_scale(self.bounds.pixel_scale(render_scale));
    }

    /// Queue a resize to apply once notifications settle (see `resize_debounce_ms`).
    pub fn request_resize(&mut self, width: f32, height: f32, dpr: f32, now_ms: f64) {
        self.resize_debounce.push(ResizeRequest { width, height, dpr }, now_ms);
    }

    /// Apply a queued resize immediately, if any.
    pub fn flush_resize<C: Canvas2d + ?Sized>(&mut self, canvas: &mut C) -> bool {
        match self.resize_debounce.flush() {
            Some(req) => {
                self.resize_surface(canvas, req.width, req.height, req.dpr);
                true
            }
            None => false,
        }
    }

    // -- Input --

    /// Point the parallax at (x, y). Non-finite coordinates are ignored.
    pub fn set_pointer_target(&mut self, x: f32, y: f32) {
        if !self.pointer.set_target(x, y) {
            log::warn!("ignoring non-finite pointer target ({}, {})", x, y);
        }
    }

    /// Point the parallax using device tilt. Missing angles are ignored.
    pub fn set_orientation(&mut self, gamma: Option<f32>, beta: Option<f32>) {
        if let Some(target) = orientation_to_screen(gamma, beta, &self.bounds) {
            self.pointer.target = target;
        }
    }

    /// Queue an input event for the start of the next update. While the loop
    /// is stopped nothing drains the queue, so the event is applied at once.
    pub fn push_input(&mut self, event: InputEvent) {
        if self.frames.is_running() {
            self.input.push(event);
        } else {
            self.apply_event(event);
        }
    }

    /// Events waiting for the next update.
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    fn apply_input(&mut self) {
        for event in self.input.drain() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } | InputEvent::TouchMove { x, y } => {
                self.set_pointer_target(x, y)
            }
            InputEvent::Orientation { gamma, beta } => self.set_orientation(gamma, beta),
        }
    }

    // -- Simulation --

    /// Advance the simulation by `dt` seconds (clamped to at most 1 s).
    pub fn update(&mut self, dt: f32) {
        let dt = clamp_delta(dt);
        self.apply_input();

        self.pointer.ease(self.config.pointer_smoothing);
        let parallax: Vec2 =
            self.pointer.offset_from(self.bounds.center()) * self.config.parallax_strength;

        let bounds = self.bounds;
        let pop = &mut self.population;
        update_stars(&mut pop.stars, parallax, &bounds, dt);
        update_galaxies(&mut pop.galaxies, &bounds, dt);
        update_comets(&mut pop.comets, &bounds, dt);
        maybe_spawn_comet(&mut pop.comets, self.config.comet_chance, &mut self.rng, &bounds);
    }

    /// Draw the current state. Does not mutate anything.
    pub fn draw<C: Canvas2d + ?Sized>(&self, canvas: &mut C) {
        draw_background(canvas, &self.bounds);
        draw_galaxies(canvas, &self.population.galaxies);
        draw_stars(canvas, &self.population.stars);
        draw_comets(canvas, &self.population.comets);
    }

    // -- Loop --

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    /// Begin the frame loop.
    pub fn start<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.frames.start(scheduler) {
            log::debug!("starfield started");
        }
    }

    /// Stop the frame loop, cancelling the pending frame. Queued input is
    /// applied so the pointer target stays current.
    pub fn stop<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.frames.stop(scheduler) {
            self.apply_input();
            log::debug!("starfield stopped");
        }
    }

    /// Run one scheduled frame: settle resizes, update, draw, schedule the next.
    /// Frames arriving after `stop` are ignored.
    pub fn frame<S, C>(&mut self, now_ms: f64, scheduler: &mut S, canvas: &mut C)
    where
        S: Scheduler + ?Sized,
        C: Canvas2d + ?Sized,
    {
        let Some(dt) = self.frames.begin_frame(now_ms) else {
            return;
        };
        if let Some(req) = self.resize_debounce.poll(now_ms) {
            self.resize_surface(canvas, req.width, req.height, req.dpr);
        }
        self.update(dt);
        self.draw(canvas);
        self.frames.end_frame(scheduler);
    }
}
