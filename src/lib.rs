//! Flip Runner - a gravity-flipping side-scroller
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level generation, physics, game state)
//! - `session`: Frame loop scheduling, input intents, read-only snapshots
//! - `highscores`: Top-N score history
//! - `persistence`: Storage backends for the score history
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod persistence;
pub mod session;
pub mod sim;
pub mod tuning;

pub use highscores::ScoreHistory;
pub use session::{Session, Snapshot, TickHandle};
pub use tuning::{Difficulty, GravityModel, Tuning};

/// Fixed world geometry
pub mod consts {
    /// Nominal simulation rate; per-frame tunables are expressed against it
    pub const NOMINAL_FPS: f64 = 60.0;
    /// Duration of one nominal frame in milliseconds
    pub const FRAME_MS: f64 = 1000.0 / NOMINAL_FPS;
    /// Largest frame multiplier a single step may apply (long stalls are clamped)
    pub const MAX_FRAME_SCALE: f32 = 3.0;

    /// Viewport dimensions
    pub const VIEW_WIDTH: f32 = 390.0;
    pub const VIEW_HEIGHT: f32 = 640.0;
    /// Vertical play bounds
    pub const TOP_BOUND: f32 = 0.0;
    pub const BOTTOM_BOUND: f32 = VIEW_HEIGHT;
    /// Camera keeps the runner this far from the left edge of the view
    pub const CAMERA_LEAD: f32 = VIEW_WIDTH / 3.0;

    /// Runner bounding box
    pub const RUNNER_WIDTH: f32 = 44.0;
    pub const RUNNER_HEIGHT: f32 = 44.0;
    /// Runner start position (standing on platform 1)
    pub const RUNNER_START_X: f32 = 20.0;

    /// Body height used for clearance math (sprite box is larger than the body)
    pub const RUNNER_BODY_HEIGHT: f32 = 33.0;
    /// Minimum vertical gap between horizontally overlapping platforms
    pub const MIN_CLEARANCE: f32 = RUNNER_BODY_HEIGHT * 2.0;

    /// Platform thickness
    pub const PLATFORM_HEIGHT: f32 = 6.0;
    /// Extra collision skin above and below every platform
    pub const PLATFORM_PAD: f32 = 1.0;
    /// Platform width limits
    pub const PLATFORM_MIN_WIDTH: f32 = 60.0;
    pub const PLATFORM_MAX_WIDTH: f32 = 300.0;
    /// Minimum horizontal step between consecutive platforms
    pub const PLATFORM_MIN_STEP: f32 = 40.0;

    /// Hazard boxes
    pub const FIRE_WIDTH: f32 = 27.0;
    pub const FIRE_HEIGHT: f32 = 32.0;
    pub const DROP_WIDTH: f32 = 30.0;
    pub const DROP_HEIGHT: f32 = 34.0;

    /// Collectible boxes
    pub const COIN_SIZE: f32 = 18.0;
    pub const HEART_WIDTH: f32 = 14.0;
    pub const HEART_HEIGHT: f32 = 12.0;
    /// Gap between a coin and the platform face it floats over
    pub const COIN_GAP: f32 = 8.0;

    /// Upper bound on lives
    pub const MAX_LIVES: u8 = 3;
    /// Platforms that must be passed per level
    pub const PLATFORMS_PER_LEVEL: u32 = 20;
}
