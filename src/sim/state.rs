//! Game state and core simulation types
//!
//! Everything a step reads or mutates lives here. Collaborators see it
//! read-only through [`crate::session::Snapshot`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::generate;
use super::rng::LcgRng;
use super::store::EntityStore;
use crate::consts::*;
use crate::tuning::{GravityModel, Tuning};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// World built, waiting for the first start
    Idle,
    /// Active gameplay (includes the dead sub-state)
    Playing,
    /// Loop suspended, deadlines frozen
    Paused,
    /// Run ended
    GameOver,
}

/// Global gravity direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GravityDir {
    #[default]
    Down,
    Up,
}

impl GravityDir {
    /// +1 when pulling toward larger y (down the screen), -1 otherwise
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            GravityDir::Down => 1.0,
            GravityDir::Up => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            GravityDir::Down => GravityDir::Up,
            GravityDir::Up => GravityDir::Down,
        }
    }
}

/// Hazard types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    /// Costs a life and adds damage
    Drop,
    /// Heals: restores a life and removes damage
    Fire,
}

impl HazardKind {
    pub fn is_harmful(self) -> bool {
        matches!(self, HazardKind::Drop)
    }

    pub fn size(self) -> Vec2 {
        match self {
            HazardKind::Drop => Vec2::new(DROP_WIDTH, DROP_HEIGHT),
            HazardKind::Fire => Vec2::new(FIRE_WIDTH, FIRE_HEIGHT),
        }
    }
}

/// Which face of its platform a hazard sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardFace {
    Above,
    Below,
}

/// A single-use hazard attached to a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hazard {
    pub kind: HazardKind,
    pub face: HazardFace,
}

impl Hazard {
    pub const fn new(kind: HazardKind, face: HazardFace) -> Self {
        Self { kind, face }
    }

    /// Hazard box, centred on the platform and clear of its collision skin
    pub fn bounds_on(&self, platform: &Platform) -> Aabb {
        let size = self.kind.size();
        let x = platform.center_x() - size.x / 2.0;
        let y = match self.face {
            HazardFace::Above => platform.pos.y - size.y - PLATFORM_PAD,
            HazardFace::Below => platform.pos.y + PLATFORM_HEIGHT + PLATFORM_PAD,
        };
        Aabb::from_pos_size(Vec2::new(x, y), size)
    }
}

/// A platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Strictly increasing in generation order, starting at 1
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    /// Latched once the runner's trailing edge clears the platform
    pub passed: bool,
    pub hazard: Option<Hazard>,
}

impl Platform {
    pub fn new(id: u32, x: f32, y: f32, width: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, y),
            width,
            passed: false,
            hazard: None,
        }
    }

    pub fn with_hazard(mut self, hazard: Option<Hazard>) -> Self {
        self.hazard = hazard;
        self
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width, PLATFORM_HEIGHT)
    }

    /// Bounds used for contact resolution (skin added top and bottom)
    pub fn collision_bounds(&self) -> Aabb {
        self.bounds().padded_y(PLATFORM_PAD)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    pub fn hazard_bounds(&self) -> Option<Aabb> {
        self.hazard.map(|h| h.bounds_on(self))
    }
}

/// Collectible types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    /// +1 score
    Coin,
    /// +1 life (capped)
    Heart,
}

impl CollectibleKind {
    pub fn size(self) -> Vec2 {
        match self {
            CollectibleKind::Coin => Vec2::splat(COIN_SIZE),
            CollectibleKind::Heart => Vec2::new(HEART_WIDTH, HEART_HEIGHT),
        }
    }
}

/// A coin or heart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub kind: CollectibleKind,
    pub pos: Vec2,
    pub collected: bool,
    /// Platform this item was placed against, if any
    pub platform_id: Option<u32>,
}

impl Collectible {
    pub fn new(id: u32, kind: CollectibleKind, pos: Vec2, platform_id: Option<u32>) -> Self {
        Self {
            id,
            kind,
            pos,
            collected: false,
            platform_id,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.kind.size())
    }
}

/// Background cloud (cosmetic)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    pub size: Vec2,
    pub opacity: f32,
}

/// Visual effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    CoinBurst,
    HeartBurst,
    /// Runner glow after touching a fire
    Heal,
}

/// A short-lived effect record; hosts animate it, the sim only expires it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub pos: Vec2,
    pub started_ms: f64,
    pub duration_ms: f64,
}

impl Effect {
    pub fn age(&self, now_ms: f64) -> f64 {
        (now_ms - self.started_ms).max(0.0)
    }

    /// 0 at spawn, 1 once the duration has elapsed
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.age(now_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    pub fn is_expired(&self, now_ms: f64) -> bool {
        self.age(now_ms) >= self.duration_ms
    }
}

/// Signpost for an upcoming level transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelMarker {
    pub x: f32,
    pub level: u32,
}

/// The player-controlled runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runner {
    /// Top-left corner
    pub pos: Vec2,
    /// Per nominal frame
    pub vel: Vec2,
    pub size: Vec2,
    pub on_ground: bool,
    /// Ground flag from the previous step
    pub was_on_ground: bool,
    /// Cumulative harmful hits (healing removes one)
    pub damage: u8,
    /// Absolute deadline of the current invulnerability window
    pub invulnerable_until: Option<f64>,
    /// When the runner died; `Some` means the dead sub-state is active
    pub dead_since: Option<f64>,
    /// Last time a landing was reported
    pub last_landed_ms: Option<f64>,
}

impl Runner {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size: Vec2::new(RUNNER_WIDTH, RUNNER_HEIGHT),
            on_ground: false,
            was_on_ground: false,
            damage: 0,
            invulnerable_until: None,
            dead_since: None,
            last_landed_ms: None,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn is_dead(&self) -> bool {
        self.dead_since.is_some()
    }

    pub fn is_invulnerable(&self, now_ms: f64) -> bool {
        self.invulnerable_until.is_some_and(|t| now_ms < t)
    }
}

/// Notifications for audio/UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Landed,
    Flipped,
    HazardHit { kind: HazardKind },
    HazardHealed,
    CollectiblePicked { kind: CollectibleKind },
    PlatformPassed { id: u32 },
    LevelUp { level: u32 },
    Died,
    GameOver { final_score: u64 },
}

/// Complete run state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    /// Level RNG, reseeded for every run
    pub rng: LcgRng,
    pub phase: GamePhase,
    pub runner: Runner,
    pub gravity: GravityDir,
    pub store: EntityStore,
    /// Camera offset; y never scrolls
    pub camera: Vec2,
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub platforms_passed: u32,
    /// Current auto-scroll speed (per nominal frame)
    pub speed: f32,
    /// Score at which the next heart is offered
    pub next_heart_score: u64,
    pub start_ms: f64,
    pub last_tick_ms: f64,
    paused_at: Option<f64>,
    /// Pending notifications (drained by the session)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a fresh world in the `Idle` phase
    pub fn new(tuning: Tuning) -> Self {
        let mut rng = LcgRng::for_level();
        let mut store = EntityStore::default();
        generate::build_opening(&mut rng, &mut store, &tuning);

        // Stand the runner on platform 1
        let floor_y = store
            .platforms
            .first()
            .map(|p| p.pos.y)
            .unwrap_or(BOTTOM_BOUND / 2.0);
        let mut runner = Runner::new(Vec2::new(
            RUNNER_START_X,
            floor_y - PLATFORM_PAD - RUNNER_HEIGHT,
        ));
        runner.on_ground = true;

        let speed = tuning.speed_for_level(1);
        let next_heart_score = tuning.heart_interval;

        Self {
            tuning,
            rng,
            phase: GamePhase::Idle,
            camera: Vec2::new(runner.pos.x - CAMERA_LEAD, 0.0),
            runner,
            gravity: GravityDir::Down,
            store,
            score: 0,
            lives: MAX_LIVES,
            level: 1,
            platforms_passed: 0,
            speed,
            next_heart_score,
            start_ms: 0.0,
            last_tick_ms: 0.0,
            paused_at: None,
            events: Vec::new(),
        }
    }

    /// Leave `Idle` and start the clock
    pub fn start(&mut self, now_ms: f64) {
        if self.phase != GamePhase::Idle {
            return;
        }
        self.phase = GamePhase::Playing;
        self.start_ms = now_ms;
        self.last_tick_ms = now_ms;
        log::info!(
            "Run started: {} platforms, {} collectibles",
            self.store.platforms.len(),
            self.store.collectibles.len()
        );
    }

    /// Invert gravity. Returns false when the flip was ignored.
    pub fn flip(&mut self) -> bool {
        if self.phase != GamePhase::Playing || self.runner.is_dead() {
            return false;
        }
        self.gravity = self.gravity.flipped();
        self.runner.on_ground = false;
        if let GravityModel::ConstantPull { pull_speed, .. } = self.tuning.gravity {
            self.runner.vel.y = self.gravity.sign() * pull_speed;
        }
        self.events.push(GameEvent::Flipped);
        true
    }

    /// Suspend the run, freezing every deadline
    pub fn pause(&mut self, now_ms: f64) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
            self.paused_at = Some(now_ms);
            log::info!("Paused at score {}", self.score);
        }
    }

    /// Resume a paused run, shifting deadlines by the time spent paused
    pub fn resume(&mut self, now_ms: f64) {
        if self.phase != GamePhase::Paused {
            return;
        }
        let paused_for = self
            .paused_at
            .take()
            .map(|t| (now_ms - t).max(0.0))
            .unwrap_or(0.0);

        let shift = |t: &mut Option<f64>| {
            if let Some(t) = t {
                *t += paused_for;
            }
        };
        shift(&mut self.runner.invulnerable_until);
        shift(&mut self.runner.dead_since);
        shift(&mut self.runner.last_landed_ms);
        for effect in &mut self.store.effects {
            effect.started_ms += paused_for;
        }
        self.start_ms += paused_for;
        self.last_tick_ms = now_ms;
        self.phase = GamePhase::Playing;
    }

    pub fn is_dead(&self) -> bool {
        self.runner.is_dead()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Play time since `start`, frozen while paused
    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        let now_ms = self.paused_at.unwrap_or(now_ms);
        (now_ms - self.start_ms).max(0.0)
    }

    /// Enter the dead sub-state; game over follows after the configured delay
    pub(crate) fn enter_dead(&mut self, now_ms: f64) {
        if self.runner.is_dead() {
            return;
        }
        self.runner.dead_since = Some(now_ms);
        self.runner.invulnerable_until = None;
        self.runner.on_ground = false;
        self.events.push(GameEvent::Died);
        log::info!(
            "Runner died (damage {}, lives {}) at score {}",
            self.runner.damage,
            self.lives,
            self.score
        );
    }

    /// Terminal transition
    pub(crate) fn end_run(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
        });
        log::info!("Game over: score {}, level {}", self.score, self.level);
    }

    /// Take all pending notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Level reached after passing `platforms_passed` platforms (1-based)
pub fn level_for(platforms_passed: u32) -> u32 {
    platforms_passed / PLATFORMS_PER_LEVEL + 1
}
