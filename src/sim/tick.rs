//! Per-frame simulation step
//!
//! Advances a run by one animation frame. Motion is scaled by the measured
//! frame time against the nominal 60 Hz frame (clamped so a stalled host
//! cannot teleport the runner); every timer is an absolute deadline in ms.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Contact, hazard_hit, is_supported, out_of_bounds, resolve_platform};
use super::generate::{self, Progress};
use super::state::{
    CollectibleKind, Effect, EffectKind, GameEvent, GamePhase, GameState, HazardKind, LevelMarker,
    level_for,
};
use crate::consts::*;
use crate::tuning::GravityModel;

/// Held horizontal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Horizontal {
    #[default]
    None,
    Left,
    Right,
}

/// Input commands for a single step
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub horizontal: Horizontal,
    /// Jump (only honoured while grounded)
    pub jump: bool,
}

/// Motion multiplier for a frame that took `now_ms - last_ms`
pub fn frame_scale(last_ms: f64, now_ms: f64) -> f32 {
    (((now_ms - last_ms) / FRAME_MS) as f32).clamp(0.0, MAX_FRAME_SCALE)
}

/// Advance the run to `now_ms`
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let k = frame_scale(state.last_tick_ms, now_ms);
    state.last_tick_ms = now_ms;

    // Dead runners only count down to game over
    if let Some(dead_since) = state.runner.dead_since {
        if now_ms - dead_since >= state.tuning.dead_delay_ms {
            state.end_run();
            return;
        }
    }

    if state
        .runner
        .invulnerable_until
        .is_some_and(|until| now_ms >= until)
    {
        state.runner.invulnerable_until = None;
    }

    update_level(state);
    update_level_markers(state);
    extend_world(state);
    state.store.evict_behind(state.camera.x, &state.tuning);
    drift_clouds(state, k);

    let dead = state.runner.is_dead();
    if dead {
        state.runner.vel = Vec2::new(0.0, state.tuning.dead_fall_speed);
    } else {
        apply_horizontal(state, input.horizontal, k);
        apply_vertical(state, input.jump, k);
    }
    state.runner.pos += state.runner.vel * k;

    if !dead {
        resolve_platforms(state, now_ms);
        resolve_hazards(state, now_ms);
    }
    // Nothing scores once the runner is dead
    if !state.runner.is_dead() {
        score_passed_platforms(state);
        spawn_heart(state);
        collect_pickups(state, now_ms);
    }
    state.store.expire_effects(now_ms);

    if !state.runner.is_dead() {
        if out_of_bounds(&state.runner.bounds(), state.tuning.out_of_bounds_fraction) {
            log::debug!("Runner left the play area at y={:.1}", state.runner.pos.y);
            state.end_run();
            return;
        }
        state.runner.pos.x += state.speed * k;
    }

    state.camera = Vec2::new(state.runner.pos.x - CAMERA_LEAD, 0.0);
    state.store.normalize_order();
}

fn update_level(state: &mut GameState) {
    let level = level_for(state.platforms_passed);
    if level == state.level {
        return;
    }
    state.level = level;
    state.speed = state.tuning.speed_for_level(level);
    state.events.push(GameEvent::LevelUp { level });
    log::info!("Level {} (speed {:.2})", level, state.speed);
}

/// Post a signpost once the next level is close
fn update_level_markers(state: &mut GameState) {
    let next_boundary = (state.platforms_passed / PLATFORMS_PER_LEVEL + 1) * PLATFORMS_PER_LEVEL;
    let ahead = next_boundary - state.platforms_passed;
    if ahead > state.tuning.marker_lookahead {
        return;
    }

    let level = next_boundary / PLATFORMS_PER_LEVEL + 1;
    if state.store.markers.iter().any(|m| m.level == level) {
        return;
    }
    let x = state.runner.pos.x + ahead as f32 * state.tuning.marker_spacing;
    state.store.markers.push(LevelMarker { x, level });
}

fn extend_world(state: &mut GameState) {
    let runner_x = state.runner.pos.x;
    let trigger = state.tuning.generation_trigger;

    if state.store.needs_platforms(runner_x, trigger) {
        let progress = Progress {
            platforms_passed: state.platforms_passed,
            score: state.score,
        };
        generate::extend_platforms(&mut state.rng, &mut state.store, &state.tuning, progress);
    }
    if state.store.needs_clouds(runner_x, trigger) {
        generate::extend_clouds(&mut state.rng, &mut state.store, &state.tuning);
    }
}

/// Clouds drift at half the scroll speed
fn drift_clouds(state: &mut GameState, k: f32) {
    let drift = state.speed * 0.5 * k;
    for cloud in &mut state.store.clouds {
        cloud.pos.x += drift;
    }
}

fn apply_horizontal(state: &mut GameState, horizontal: Horizontal, k: f32) {
    let tuning = &state.tuning;
    let vel = &mut state.runner.vel;
    match horizontal {
        Horizontal::Left => {
            vel.x = (vel.x - tuning.horizontal_accel * k).max(tuning.max_speed_left);
        }
        Horizontal::Right => {
            vel.x = (vel.x + tuning.horizontal_accel * k).min(tuning.max_speed_right);
        }
        Horizontal::None => {
            vel.x *= tuning.horizontal_decay.powf(k);
        }
    }
}

fn apply_vertical(state: &mut GameState, jump: bool, k: f32) {
    let dir = state.gravity.sign();
    let tuning = &state.tuning;
    let runner = &mut state.runner;

    if jump && runner.on_ground {
        runner.vel.y = -dir * tuning.jump_speed;
        runner.on_ground = false;
        return;
    }
    if runner.on_ground {
        runner.vel.y = 0.0;
        return;
    }

    match tuning.gravity {
        GravityModel::ConstantPull {
            pull_speed,
            pull_accel,
            max_pull_speed,
        } => {
            // Speed along the gravity direction
            let along = runner.vel.y * dir;
            if along < 0.0 {
                // Still rising from a jump
                runner.vel.y += dir * tuning.jump_gravity * k;
            } else if along < pull_speed {
                runner.vel.y = dir * pull_speed;
            } else {
                let max = max_pull_speed.max(pull_speed);
                runner.vel.y = dir * (along + pull_accel * k).min(max);
            }
        }
        GravityModel::Accelerating {
            gravity,
            max_fall_speed,
        } => {
            runner.vel.y =
                (runner.vel.y + dir * gravity * k).clamp(-max_fall_speed, max_fall_speed);
        }
    }
}

fn resolve_platforms(state: &mut GameState, now_ms: f64) {
    let gravity = state.gravity;
    let runner = &mut state.runner;
    runner.was_on_ground = runner.on_ground;
    runner.on_ground = false;

    for platform in &state.store.platforms {
        if resolve_platform(runner, platform, gravity) == Contact::Floor {
            runner.on_ground = true;
        }
    }
    if !runner.on_ground {
        runner.on_ground = state
            .store
            .platforms
            .iter()
            .any(|p| is_supported(runner, p, gravity));
    }

    if runner.on_ground && !runner.was_on_ground {
        let cooldown = state.tuning.landing_cooldown_ms;
        if runner.last_landed_ms.is_none_or(|t| now_ms - t >= cooldown) {
            runner.last_landed_ms = Some(now_ms);
            state.events.push(GameEvent::Landed);
        }
    }
}

fn resolve_hazards(state: &mut GameState, now_ms: f64) {
    let body = state.runner.bounds();
    let min_fraction = state.tuning.hazard_hit_fraction;

    for i in 0..state.store.platforms.len() {
        let platform = &state.store.platforms[i];
        let Some(hazard) = platform.hazard else {
            continue;
        };
        if !hazard_hit(&body, &hazard.bounds_on(platform), min_fraction) {
            continue;
        }

        if hazard.kind.is_harmful() {
            if state.runner.is_invulnerable(now_ms) {
                continue;
            }
            state.store.platforms[i].hazard = None;
            take_damage(state, hazard.kind, now_ms);
            if state.runner.is_dead() {
                return;
            }
        } else {
            state.store.platforms[i].hazard = None;
            heal(state, now_ms);
        }
    }
}

fn take_damage(state: &mut GameState, kind: HazardKind, now_ms: f64) {
    state.lives = state.lives.saturating_sub(1);
    state.runner.damage = state.runner.damage.saturating_add(1);
    state.events.push(GameEvent::HazardHit { kind });
    log::debug!(
        "Hit {:?}: lives {}, damage {}",
        kind,
        state.lives,
        state.runner.damage
    );

    if state.runner.damage >= state.tuning.fatal_damage || state.lives == 0 {
        state.enter_dead(now_ms);
    } else {
        state.runner.invulnerable_until = Some(now_ms + state.tuning.invulnerability_ms);
    }
}

fn heal(state: &mut GameState, now_ms: f64) {
    state.lives = (state.lives + 1).min(MAX_LIVES);
    state.runner.damage = state.runner.damage.saturating_sub(1);
    state.runner.invulnerable_until = None;
    state.store.effects.push(Effect {
        kind: EffectKind::Heal,
        pos: state.runner.bounds().center(),
        started_ms: now_ms,
        duration_ms: state.tuning.heal_effect_ms,
    });
    state.events.push(GameEvent::HazardHealed);
}

/// Latch platforms whose right edge the runner has cleared
fn score_passed_platforms(state: &mut GameState) {
    let runner_x = state.runner.pos.x;
    for platform in &mut state.store.platforms {
        if platform.passed || runner_x <= platform.right() {
            continue;
        }
        platform.passed = true;
        state.platforms_passed += 1;
        state.score += 1;
        state.events.push(GameEvent::PlatformPassed { id: platform.id });
    }
}

fn spawn_heart(state: &mut GameState) {
    if state.score < state.next_heart_score {
        return;
    }
    if generate::try_spawn_heart(&mut state.store, state.runner.pos.x, &state.tuning) {
        state.next_heart_score += state.tuning.heart_interval;
    }
}

fn collect_pickups(state: &mut GameState, now_ms: f64) {
    let body = state.runner.bounds();
    for item in &mut state.store.collectibles {
        if item.collected || !body.intersects(&item.bounds()) {
            continue;
        }
        item.collected = true;
        let (kind, duration_ms) = match item.kind {
            CollectibleKind::Coin => {
                state.score += 1;
                (EffectKind::CoinBurst, state.tuning.coin_effect_ms)
            }
            CollectibleKind::Heart => {
                state.lives = (state.lives + 1).min(MAX_LIVES);
                (EffectKind::HeartBurst, state.tuning.heart_effect_ms)
            }
        };
        state.store.effects.push(Effect {
            kind,
            pos: item.bounds().center(),
            started_ms: now_ms,
            duration_ms,
        });
        state.events.push(GameEvent::CollectiblePicked { kind: item.kind });
    }
}
