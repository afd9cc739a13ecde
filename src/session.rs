//! Run session: frame scheduling, input intents and snapshots
//!
//! Hosts drive the loop by asking for a [`TickHandle`] after each frame and
//! handing it back on the next animation frame. Restarting cancels the
//! outstanding handle first, so a callback from an earlier run can never
//! advance the new one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::highscores::ScoreHistory;
use crate::sim::{
    Cloud, Collectible, EffectKind, GameEvent, GamePhase, GameState, GravityDir, Horizontal,
    LevelMarker, Platform, Runner, TickInput, tick,
};
use crate::tuning::Tuning;

/// Token for one scheduled frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickHandle {
    run: u64,
    seq: u64,
}

/// Effect as presented to renderers
#[derive(Debug, Clone, Serialize)]
pub struct EffectView {
    pub kind: EffectKind,
    pub pos: Vec2,
    pub age_ms: f64,
    pub duration_ms: f64,
    /// 0 at spawn, 1 when expiring
    pub progress: f32,
}

/// Read-only view of a run for rendering and UI
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub runner: &'a Runner,
    pub gravity: GravityDir,
    pub camera: Vec2,
    pub platforms: &'a [Platform],
    pub collectibles: &'a [Collectible],
    pub clouds: &'a [Cloud],
    pub markers: &'a [LevelMarker],
    pub effects: Vec<EffectView>,
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub speed: f32,
    /// Play time, excluding pauses
    pub elapsed_ms: f64,
    pub dead: bool,
    pub game_over: bool,
    pub invulnerable: bool,
}

#[derive(Debug)]
pub struct Session {
    state: GameState,
    tuning: Tuning,
    horizontal: Horizontal,
    jump_queued: bool,
    /// Bumped on every restart
    run: u64,
    next_seq: u64,
    scheduled: Option<TickHandle>,
    /// Final score already written to a history
    recorded: bool,
}

impl Session {
    /// A session with a freshly built, idle world
    pub fn new(tuning: Tuning) -> Self {
        Self {
            state: GameState::new(tuning.clone()),
            tuning,
            horizontal: Horizontal::None,
            jump_queued: false,
            run: 0,
            next_seq: 0,
            scheduled: None,
            recorded: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Cancel any pending frame, rebuild the world and start playing
    pub fn restart(&mut self, now_ms: f64) {
        self.cancel_tick();
        self.run += 1;
        self.next_seq = 0;
        self.horizontal = Horizontal::None;
        self.jump_queued = false;
        self.recorded = false;

        self.state = GameState::new(self.tuning.clone());
        self.state.start(now_ms);
        log::info!("Run {} started ({})", self.run, self.tuning.difficulty.as_str());
    }

    /// Request the next frame. Only one frame is outstanding at a time;
    /// nothing is scheduled unless the run is playing.
    pub fn schedule_tick(&mut self) -> Option<TickHandle> {
        if self.state.phase != GamePhase::Playing {
            return None;
        }
        if let Some(handle) = self.scheduled {
            return Some(handle);
        }
        self.next_seq += 1;
        let handle = TickHandle {
            run: self.run,
            seq: self.next_seq,
        };
        self.scheduled = Some(handle);
        Some(handle)
    }

    /// Drop the outstanding frame, if any
    pub fn cancel_tick(&mut self) -> Option<TickHandle> {
        self.scheduled.take()
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled.is_some()
    }

    /// Run a scheduled frame. Stale or cancelled handles are ignored and
    /// return false.
    pub fn run_tick(&mut self, handle: TickHandle, now_ms: f64) -> bool {
        if self.scheduled != Some(handle) {
            log::debug!("Ignoring stale tick {:?}", handle);
            return false;
        }
        self.scheduled = None;

        let input = TickInput {
            horizontal: self.horizontal,
            jump: std::mem::take(&mut self.jump_queued),
        };
        tick(&mut self.state, &input, now_ms);
        true
    }

    /// Schedule and immediately run one frame (headless hosts)
    pub fn step(&mut self, now_ms: f64) -> bool {
        match self.schedule_tick() {
            Some(handle) => self.run_tick(handle, now_ms),
            None => false,
        }
    }

    pub fn move_left(&mut self) {
        self.horizontal = Horizontal::Left;
    }

    pub fn move_right(&mut self) {
        self.horizontal = Horizontal::Right;
    }

    pub fn stop_horizontal(&mut self) {
        self.horizontal = Horizontal::None;
    }

    /// Queue a jump for the next frame
    pub fn jump(&mut self) {
        if self.state.phase == GamePhase::Playing {
            self.jump_queued = true;
        }
    }

    /// Flip gravity now. Returns false when ignored.
    pub fn flip(&mut self) -> bool {
        self.state.flip()
    }

    /// Pause and cancel the outstanding frame
    pub fn pause(&mut self, now_ms: f64) {
        if self.state.phase == GamePhase::Playing {
            self.cancel_tick();
            self.state.pause(now_ms);
        }
    }

    pub fn resume(&mut self, now_ms: f64) {
        self.state.resume(now_ms);
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    pub fn snapshot(&self, now_ms: f64) -> Snapshot<'_> {
        let state = &self.state;
        Snapshot {
            phase: state.phase,
            runner: &state.runner,
            gravity: state.gravity,
            camera: state.camera,
            platforms: &state.store.platforms,
            collectibles: &state.store.collectibles,
            clouds: &state.store.clouds,
            markers: &state.store.markers,
            effects: state
                .store
                .effects
                .iter()
                .map(|e| EffectView {
                    kind: e.kind,
                    pos: e.pos,
                    age_ms: e.age(now_ms),
                    duration_ms: e.duration_ms,
                    progress: e.progress(now_ms),
                })
                .collect(),
            score: state.score,
            lives: state.lives,
            level: state.level,
            speed: state.speed,
            elapsed_ms: state.elapsed_ms(now_ms),
            dead: state.is_dead(),
            game_over: state.is_game_over(),
            invulnerable: state.runner.is_invulnerable(now_ms),
        }
    }

    /// Record the final score once the run is over. Returns whether it is a
    /// new best, or None while the run is still going or once this run has
    /// already been recorded.
    pub fn record_final_score(&mut self, history: &mut ScoreHistory) -> Option<bool> {
        if !self.state.is_game_over() || self.recorded {
            return None;
        }
        self.recorded = true;
        let is_new_best = history.record(self.state.score);
        if is_new_best {
            log::info!("New best score: {}", self.state.score);
        }
        Some(is_new_best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_MS;

    fn started() -> Session {
        let mut session = Session::new(Tuning::default());
        session.restart(0.0);
        session
    }

    #[test]
    fn test_new_session_is_idle() {
        let mut session = Session::new(Tuning::default());
        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.tuning().difficulty, crate::Difficulty::Normal);
        assert!(session.schedule_tick().is_none());
    }

    #[test]
    fn test_single_outstanding_tick() {
        let mut session = started();
        let a = session.schedule_tick().unwrap();
        let b = session.schedule_tick().unwrap();
        assert_eq!(a, b);
        assert!(session.run_tick(a, FRAME_MS));
        // Already consumed
        assert!(!session.run_tick(a, 2.0 * FRAME_MS));
    }

    #[test]
    fn test_restart_invalidates_pending_tick() {
        let mut session = started();
        let stale = session.schedule_tick().unwrap();
        session.restart(1000.0);
        assert!(!session.is_scheduled());

        let x = session.state().runner.pos.x;
        assert!(!session.run_tick(stale, 1016.0));
        assert_eq!(session.state().runner.pos.x, x);

        // New handles from the new run work
        let fresh = session.schedule_tick().unwrap();
        assert_ne!(fresh, stale);
        assert!(session.run_tick(fresh, 1016.0));
    }

    #[test]
    fn test_restart_rebuilds_identical_course() {
        let mut session = started();
        let first: Vec<Platform> = session.state().store.platforms.clone();
        let mut now = 0.0;
        for _ in 0..120 {
            now += FRAME_MS;
            session.step(now);
        }
        session.restart(now);
        assert_eq!(session.state().store.platforms, first);
        assert_eq!(session.state().score, 0);
        assert_eq!(session.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_jump_intent_is_consumed() {
        let mut session = started();
        session.jump();
        assert!(session.step(FRAME_MS));
        assert!(session.state().runner.vel.y < 0.0);
        assert!(!session.jump_queued);
    }

    #[test]
    fn test_pause_cancels_and_resume_continues() {
        let mut session = started();
        let handle = session.schedule_tick().unwrap();
        session.pause(100.0);
        assert_eq!(session.phase(), GamePhase::Paused);
        assert!(!session.run_tick(handle, 200.0));
        assert!(session.schedule_tick().is_none());

        session.resume(5000.0);
        assert_eq!(session.phase(), GamePhase::Playing);
        let x = session.state().runner.pos.x;
        assert!(session.step(5000.0 + FRAME_MS));
        // One frame of motion, not the whole pause
        assert!(session.state().runner.pos.x - x < 2.0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = started();
        session.move_right();
        session.step(FRAME_MS);
        let snapshot = session.snapshot(FRAME_MS);
        assert_eq!(snapshot.phase, GamePhase::Playing);
        assert_eq!(snapshot.lives, 3);
        assert_eq!(snapshot.level, 1);
        assert!(!snapshot.dead && !snapshot.game_over);
        assert_eq!(snapshot.platforms.len(), session.state().store.platforms.len());
        assert!(serde_json::to_string(&snapshot).is_ok());
    }

    #[test]
    fn test_snapshot_effect_timing() {
        let mut session = started();
        session.state.store.effects.push(crate::sim::Effect {
            kind: EffectKind::CoinBurst,
            pos: Vec2::new(10.0, 20.0),
            started_ms: 100.0,
            duration_ms: 400.0,
        });
        let snapshot = session.snapshot(200.0);
        let effect = &snapshot.effects[0];
        assert_eq!(effect.kind, EffectKind::CoinBurst);
        assert_eq!(effect.age_ms, 100.0);
        assert_eq!(effect.duration_ms, 400.0);
        assert!((effect.progress - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_elapsed_excludes_pause() {
        let mut session = started();
        session.step(1000.0);
        session.pause(1000.0);
        assert_eq!(session.snapshot(3000.0).elapsed_ms, 1000.0);
        session.resume(3000.0);
        assert_eq!(session.snapshot(3500.0).elapsed_ms, 1500.0);
    }

    #[test]
    fn test_record_final_score_only_after_game_over() {
        let mut session = started();
        let mut history = ScoreHistory::new();
        assert_eq!(session.record_final_score(&mut history), None);

        let mut now = 0.0;
        while session.phase() != GamePhase::GameOver && now < 120_000.0 {
            now += FRAME_MS;
            session.step(now);
        }
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(session.record_final_score(&mut history), Some(true));
        assert_eq!(history.best(), Some(session.state().score));

        // Polling again does not record the same run twice
        assert_eq!(session.record_final_score(&mut history), None);
        assert_eq!(history.scores().len(), 1);

        // A fresh run can be recorded again
        session.restart(now);
        while session.phase() != GamePhase::GameOver && now < 240_000.0 {
            now += FRAME_MS;
            session.step(now);
        }
        assert!(session.record_final_score(&mut history).is_some());
        assert_eq!(history.scores().len(), 2);
        assert!(session
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. })));
    }
}
