use glam::Vec2;

use crate::api::config::GameConfig;
use crate::api::types::{PanelEvent, StarInfo};
use crate::catalog::Catalog;
use crate::core::schedule::{Schedule, Timer};
use crate::core::session::{Interaction, Session};
use crate::core::time::{Clock, FixedTimestep};
use crate::input::queue::{InputEvent, InputQueue};
use crate::layout::{DeviceClass, Layout, Viewport};
use crate::renderer::paint::{paint, Frame};
use crate::renderer::surface::Surface;
use crate::systems::effects::EffectsState;

/// The single controller for one play session.
///
/// Owns the catalog, the discovery session, effects, layout and timers.
/// The host feeds it input and frame deltas, paints it onto a surface and
/// forwards the panel events it emits.
pub struct ConstellationGame {
    config: GameConfig,
    catalog: Catalog,
    session: Session,
    effects: EffectsState,
    layout: Layout,
    schedule: Schedule,
    clock: Clock,
    timestep: FixedTimestep,
    input: InputQueue,
    events: Vec<PanelEvent>,
    twinkle: f32,
    /// Star whose info panel is open.
    info_star: Option<usize>,
}

impl ConstellationGame {
    pub fn new(mut catalog: Catalog, config: GameConfig, viewport: Viewport) -> Self {
        catalog.ensure_background(
            config.background_count,
            config.design_width,
            config.design_height,
            config.rng_seed,
        );
        let session = Session::new(&catalog);
        let layout = Layout::compute(viewport, &config);
        let mut game = Self {
            effects: EffectsState::new(config.rng_seed),
            timestep: FixedTimestep::new(config.fixed_dt),
            catalog,
            session,
            layout,
            schedule: Schedule::new(),
            clock: Clock::default(),
            input: InputQueue::new(),
            events: Vec::with_capacity(8),
            twinkle: 0.0,
            info_star: None,
            config,
        };
        game.layout.apply(game.session.stars_mut());
        game.announce_progress();
        game.announce_objective();
        game.events.push(PanelEvent::HintAvailable(true));
        game
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn effects(&self) -> &EffectsState {
        &self.effects
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Fixed ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.clock.ticks()
    }

    /// A hint flash is showing and further hints are locked out.
    pub fn is_hint_active(&self) -> bool {
        self.schedule.is_pending(Timer::HintReady)
    }

    pub fn is_celebrating(&self) -> bool {
        self.effects.is_celebrating()
    }

    /// Star whose info panel is open, if any.
    pub fn info_star(&self) -> Option<usize> {
        self.info_star
    }

    /// Objective line for the current state.
    pub fn objective(&self) -> String {
        if self.session.is_completed() {
            return "All Stars Found!".to_string();
        }
        match self.session.target_star() {
            Some(star) => format!("Find {}", star.name()),
            None => "Find Unknown Star".to_string(),
        }
    }

    // ── Input ───────────────────────────────────────────────────────

    /// Queue input for the next [`tick`](Self::tick).
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Take the panel updates emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<PanelEvent> {
        std::mem::take(&mut self.events)
    }

    fn apply_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Click { x, y, touch } => self.click(Vec2::new(x, y), touch),
            InputEvent::Resize { width, height } => self.resize(Viewport::new(width, height)),
            InputEvent::Reset => self.reset(),
            InputEvent::Hint => {
                self.request_hint();
            }
            InputEvent::CloseInfo => self.close_info(),
        }
    }

    /// Hit radius for a click.
    fn hit_tolerance(&self, touch: bool) -> f32 {
        if touch || self.layout.device == DeviceClass::Mobile {
            self.config.hit_tolerance_touch
        } else {
            self.config.hit_tolerance_pointer
        }
    }

    /// Resolve a canvas-local click to a star and apply it.
    pub fn click(&mut self, point: Vec2, touch: bool) {
        let Some(index) = self.session.hit_test(point, self.hit_tolerance(touch)) else {
            return;
        };
        match self.session.interact(index) {
            Interaction::Discovered { star, completed } => {
                log::info!(
                    "discovered {} ({}/{})",
                    self.session.stars()[star].id(),
                    self.session.current_index(),
                    self.session.sequence_len()
                );
                self.open_info(star);
                self.announce_progress();
                if completed {
                    log::info!("all stars discovered");
                    self.schedule.schedule(
                        self.clock.now() + self.config.completion_delay as f64,
                        Timer::RevealCompletion,
                    );
                }
                self.announce_objective();
            }
            Interaction::Rejected { star } => {
                log::debug!("wrong star {}", self.session.stars()[star].id());
                self.schedule.schedule(
                    self.clock.now() + self.config.jiggle_duration as f64,
                    Timer::ClearJiggle { star },
                );
            }
            Interaction::Revisited { star } => self.open_info(star),
            Interaction::Ignored => {}
        }
    }

    /// Flash the current target. Returns false when refused.
    pub fn request_hint(&mut self) -> bool {
        if self.session.is_completed() || self.is_hint_active() {
            log::debug!("hint refused");
            return false;
        }
        let Some(target) = self.session.target_star() else {
            log::warn!("hint requested with no target star");
            return false;
        };
        self.effects.add_flash(target, &self.config);
        self.schedule.schedule(
            self.clock.now() + self.config.hint_duration as f64,
            Timer::HintReady,
        );
        self.events.push(PanelEvent::HintAvailable(false));
        true
    }

    /// Start over from the first star.
    pub fn reset(&mut self) {
        log::info!("reset");
        self.effects.clear();
        self.schedule.clear();
        self.timestep.reset();
        self.session = Session::new(&self.catalog);
        self.info_star = None;

        self.layout = Layout::compute(self.layout.viewport, &self.config);
        self.layout.apply(self.session.stars_mut());

        self.events.push(PanelEvent::HideStarInfo);
        self.events.push(PanelEvent::HideCompletion);
        self.events.push(PanelEvent::HintAvailable(true));
        self.announce_progress();
        self.announce_objective();
    }

    /// Viewport changed: redo layout.
    pub fn resize(&mut self, viewport: Viewport) {
        self.layout = Layout::compute(viewport, &self.config);
        self.layout.apply(self.session.stars_mut());
    }

    /// Close the info panel.
    pub fn close_info(&mut self) {
        if self.info_star.take().is_some() {
            self.events.push(PanelEvent::HideStarInfo);
            self.relayout();
        }
    }

    fn open_info(&mut self, star: usize) {
        self.info_star = Some(star);
        self.events
            .push(PanelEvent::ShowStarInfo(StarInfo::from_star(&self.session.stars()[star])));
        self.relayout();
    }

    /// Overlay visibility changed; the available space may have too.
    fn relayout(&mut self) {
        self.resize(self.layout.viewport);
    }

    fn announce_progress(&mut self) {
        self.events.push(PanelEvent::Progress {
            discovered: self.session.current_index(),
            total: self.session.sequence_len(),
        });
    }

    fn announce_objective(&mut self) {
        let objective = self.objective();
        self.events.push(PanelEvent::Objective(objective));
    }

    // ── Frame loop ──────────────────────────────────────────────────

    /// Apply queued input, then run as many fixed ticks as `frame_dt` covers.
    pub fn tick(&mut self, frame_dt: f32) {
        for event in self.input.drain() {
            self.apply_input(event);
        }
        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.update();
        }
    }

    /// One fixed tick. The only place time-based state changes.
    pub fn update(&mut self) {
        self.clock.advance(self.timestep.dt());
        self.twinkle += self.config.twinkle_step;

        for timer in self.schedule.take_due(self.clock.now()) {
            self.fire(timer);
        }

        let half = self.config.jiggle_amplitude / 2.0;
        for star in self.session.stars_mut().iter_mut().filter(|s| s.jiggling) {
            star.jiggle_offset = Vec2::new(self.effects.rng.spread(half), self.effects.rng.spread(half));
        }

        self.effects.tick(self.session.stars(), &self.config);
    }

    fn fire(&mut self, timer: Timer) {
        match timer {
            Timer::ClearJiggle { star } => self.session.clear_jiggle(star),
            Timer::HintReady => self.events.push(PanelEvent::HintAvailable(true)),
            Timer::RevealCompletion => {
                if !self.session.is_completed() || self.effects.is_celebrating() {
                    return;
                }
                log::info!("celebration started");
                self.info_star = None;
                self.events.push(PanelEvent::ShowCompletion);
                self.events.push(PanelEvent::HideStarInfo);
                self.session.set_celebrating(true);
                self.effects.start_celebration(self.session.stars(), &self.config);
            }
        }
    }

    /// Paint the current state. Never mutates the game.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let frame = Frame {
            viewport: self.layout.viewport,
            design: Vec2::new(self.config.design_width, self.config.design_height),
            background: &self.catalog.background,
            stars: self.session.stars(),
            connections: self.session.connections(),
            effects: &self.effects,
            twinkle: self.twinkle,
            ray_count: self.config.ray_count,
        };
        paint(&frame, surface);
    }
}
