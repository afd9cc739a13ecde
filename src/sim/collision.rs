//! Collision detection and response
//!
//! Platforms are solid boxes with a thin skin above and below. A contact is
//! resolved along the face with the smallest penetration, but only when the
//! runner is actually moving into that face. Which face counts as the floor
//! depends on the gravity direction.

use super::aabb::Aabb;
use super::state::{GravityDir, Platform, Runner};
use crate::consts::{BOTTOM_BOUND, TOP_BOUND};

/// Distance within which a runner resting on a face still counts as supported
pub const SUPPORT_TOLERANCE: f32 = 0.5;

/// Outcome of resolving the runner against one platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// No overlap, or overlap the runner is already leaving
    None,
    /// Landed on the face gravity pulls toward
    Floor,
    /// Bumped the face opposite to gravity
    Ceiling,
    /// Ran into a side
    Wall,
}

/// Penetration depth into each face of `solid`
#[derive(Debug, Clone, Copy)]
struct Penetration {
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
}

impl Penetration {
    fn between(body: &Aabb, solid: &Aabb) -> Self {
        Self {
            left: body.right() - solid.left(),
            right: solid.right() - body.left(),
            top: body.bottom() - solid.top(),
            bottom: solid.bottom() - body.top(),
        }
    }

    fn min(&self) -> f32 {
        self.left.min(self.right).min(self.top).min(self.bottom)
    }
}

/// Push the runner out of `platform` and zero the velocity into the face hit
pub fn resolve_platform(runner: &mut Runner, platform: &Platform, gravity: GravityDir) -> Contact {
    let solid = platform.collision_bounds();
    let body = runner.bounds();
    if !body.intersects(&solid) {
        return Contact::None;
    }

    let pen = Penetration::between(&body, &solid);
    let min = pen.min();
    let vel = runner.vel;

    let onto_top = pen.top == min && vel.y > 0.0;
    let onto_bottom = pen.bottom == min && vel.y < 0.0;

    if onto_top {
        runner.pos.y = solid.top() - runner.size.y;
        runner.vel.y = 0.0;
        return match gravity {
            GravityDir::Down => Contact::Floor,
            GravityDir::Up => Contact::Ceiling,
        };
    }
    if onto_bottom {
        runner.pos.y = solid.bottom();
        runner.vel.y = 0.0;
        return match gravity {
            GravityDir::Down => Contact::Ceiling,
            GravityDir::Up => Contact::Floor,
        };
    }

    if pen.left == min && vel.x > 0.0 {
        runner.pos.x = solid.left() - runner.size.x;
        runner.vel.x = 0.0;
        return Contact::Wall;
    }
    if pen.right == min && vel.x < 0.0 {
        runner.pos.x = solid.right();
        runner.vel.x = 0.0;
        return Contact::Wall;
    }

    Contact::None
}

/// Runner rests on `platform`'s floor-side face (with horizontal overlap)
pub fn is_supported(runner: &Runner, platform: &Platform, gravity: GravityDir) -> bool {
    let solid = platform.collision_bounds();
    let body = runner.bounds();
    if body.left() >= solid.right() || body.right() <= solid.left() {
        return false;
    }
    match gravity {
        GravityDir::Down => (body.bottom() - solid.top()).abs() <= SUPPORT_TOLERANCE,
        GravityDir::Up => (body.top() - solid.bottom()).abs() <= SUPPORT_TOLERANCE,
    }
}

/// A hazard registers once it covers at least `min_fraction` of the body
pub fn hazard_hit(body: &Aabb, hazard: &Aabb, min_fraction: f32) -> bool {
    body.overlap_fraction(hazard) >= min_fraction
}

/// Slack for f32 rounding when a body sits exactly on the bounds threshold
const BOUNDS_EPSILON: f32 = 1e-6;

/// Body has left the play area by at least `min_fraction` of its height
pub fn out_of_bounds(body: &Aabb, min_fraction: f32) -> bool {
    body.outside_fraction_y(TOP_BOUND, BOTTOM_BOUND) >= min_fraction - BOUNDS_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    fn platform() -> Platform {
        Platform::new(1, 100.0, 300.0, 200.0)
    }

    fn runner_at(x: f32, y: f32, vel: Vec2) -> Runner {
        let mut runner = Runner::new(Vec2::new(x, y));
        runner.vel = vel;
        runner
    }

    #[test]
    fn test_lands_on_top_with_gravity_down() {
        // Bottom edge 3 units into the skin
        let mut runner = runner_at(150.0, 300.0 - 1.0 - RUNNER_HEIGHT + 3.0, Vec2::new(0.0, 5.2));
        let contact = resolve_platform(&mut runner, &platform(), GravityDir::Down);
        assert_eq!(contact, Contact::Floor);
        assert_eq!(runner.bounds().bottom(), 299.0);
        assert_eq!(runner.vel.y, 0.0);
    }

    #[test]
    fn test_lands_on_underside_with_gravity_up() {
        let mut runner = runner_at(150.0, 307.0 - 3.0, Vec2::new(0.0, -5.2));
        let contact = resolve_platform(&mut runner, &platform(), GravityDir::Up);
        assert_eq!(contact, Contact::Floor);
        assert_eq!(runner.pos.y, 307.0);
    }

    #[test]
    fn test_head_bump_is_ceiling() {
        let mut runner = runner_at(150.0, 307.0 - 3.0, Vec2::new(0.0, -5.0));
        let contact = resolve_platform(&mut runner, &platform(), GravityDir::Down);
        assert_eq!(contact, Contact::Ceiling);
        assert_eq!(runner.vel.y, 0.0);
    }

    #[test]
    fn test_moving_away_is_not_resolved() {
        let start = Vec2::new(150.0, 300.0 - 1.0 - RUNNER_HEIGHT + 3.0);
        let mut runner = runner_at(start.x, start.y, Vec2::new(0.0, -5.0));
        let contact = resolve_platform(&mut runner, &platform(), GravityDir::Down);
        assert_eq!(contact, Contact::None);
        assert_eq!(runner.pos, start);
    }

    #[test]
    fn test_side_hit_stops_horizontal_motion() {
        // 2 units into the left face, vertically centred on the platform
        let mut runner = runner_at(100.0 - RUNNER_WIDTH + 2.0, 285.0, Vec2::new(2.0, 0.0));
        let contact = resolve_platform(&mut runner, &platform(), GravityDir::Down);
        assert_eq!(contact, Contact::Wall);
        assert_eq!(runner.bounds().right(), 100.0);
        assert_eq!(runner.vel.x, 0.0);
    }

    #[test]
    fn test_support_depends_on_gravity() {
        let standing = runner_at(150.0, 299.0 - RUNNER_HEIGHT, Vec2::ZERO);
        assert!(is_supported(&standing, &platform(), GravityDir::Down));
        assert!(!is_supported(&standing, &platform(), GravityDir::Up));

        let hanging = runner_at(150.0, 307.0, Vec2::ZERO);
        assert!(is_supported(&hanging, &platform(), GravityDir::Up));
        assert!(!is_supported(&hanging, &platform(), GravityDir::Down));

        // Past the right edge
        let off = runner_at(300.0, 299.0 - RUNNER_HEIGHT, Vec2::ZERO);
        assert!(!is_supported(&off, &platform(), GravityDir::Down));
    }

    #[test]
    fn test_hazard_threshold() {
        let body = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let at = |w: f32| Aabb::new(100.0 - w, 0.0, w, 100.0);
        assert!(!hazard_hit(&body, &at(29.0), 0.3));
        assert!(hazard_hit(&body, &at(31.0), 0.3));
        assert!(hazard_hit(&body, &at(50.0), 0.3));
    }

    #[test]
    fn test_hazard_threshold_on_runner_box() {
        let body = Aabb::new(0.0, 0.0, RUNNER_WIDTH, RUNNER_HEIGHT);
        let strip = |fraction: f32| Aabb::new(0.0, 0.0, RUNNER_WIDTH * fraction, RUNNER_HEIGHT);
        assert!(!hazard_hit(&body, &strip(0.29), 0.3));
        assert!(hazard_hit(&body, &strip(0.31), 0.3));
    }

    #[test]
    fn test_out_of_bounds_threshold() {
        let below = |fraction: f32| {
            let y = BOTTOM_BOUND - RUNNER_HEIGHT * (1.0 - fraction);
            Aabb::new(0.0, y, RUNNER_WIDTH, RUNNER_HEIGHT)
        };
        assert!(!out_of_bounds(&below(0.59), 0.6));
        assert!(out_of_bounds(&below(0.60), 0.6));
        assert!(out_of_bounds(&below(0.61), 0.6));

        let above = |fraction: f32| {
            Aabb::new(0.0, TOP_BOUND - RUNNER_HEIGHT * fraction, RUNNER_WIDTH, RUNNER_HEIGHT)
        };
        assert!(!out_of_bounds(&above(0.59), 0.6));
        assert!(out_of_bounds(&above(0.60), 0.6));
        assert!(out_of_bounds(&above(0.61), 0.6));
    }
}
