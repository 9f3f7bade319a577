//! The physics half of the court: a rapier3d world
//!
//! Owns the rigid bodies (floor, backboard, rim contact disc, ball), the
//! per-frame pipeline step, and the one-shot scoring window that makes sure
//! each fired shot produces at most one Hit/Miss verdict. Scoring is
//! contact-based: the rim collider is a solid disc, so a made basket is a
//! touch on rim or backboard, not a pass-through test.

use std::collections::HashMap;
use std::sync::Mutex;

use macroquad::math::{Quat, Vec3, vec3};
use macroquad::rand::gen_range;
use rapier3d::prelude::*;

use crate::consts::*;
use crate::game::judge::{Surface, Verdict, judge};

/// Convert the 10..100 shot values into an impulse vector.
///
/// Base direction aims from the ball straight at the rim, then yaw rotates
/// it about the vertical axis and pitch about the shot's right axis. The
/// vertical component is floored at 0.1 before renormalizing so no shot
/// travels purely horizontally.
pub fn shot_impulse(origin: Vec3, power: f32, yaw_deg: f32, pitch_deg: f32) -> Vec3 {
    let yaw = yaw_deg.to_radians();
    let pitch = pitch_deg.to_radians();

    let hoop = vec3(0.0, HOOP_HEIGHT, 0.0);
    let mut dir = (hoop - origin).normalize_or_zero();

    dir = Quat::from_rotation_y(-yaw) * dir;

    let flat = vec3(dir.x, 0.0, dir.z).normalize_or_zero();
    if flat != Vec3::ZERO {
        let right = flat.cross(Vec3::Y).normalize();
        dir = Quat::from_axis_angle(right, pitch) * dir;
    }

    // Original tuning: vertical lift follows sin(pitch * pi/2), never below 0.1
    dir.y = (pitch * std::f32::consts::FRAC_PI_2).sin().max(0.1);
    dir = dir.normalize();

    dir * power * SHOT_POWER_MULTIPLIER
}

/// Scoring window for the ball in play.
///
/// One fire opens one window; the first Hit/Miss verdict credits it and
/// closes it. With no window open (before the first shot, or after a
/// respawn) contacts carry no scoring meaning: the ball settling onto the
/// floor is not a missed shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShotCredit {
    NoShot,
    Open,
    Credited,
}

/// Buffers collision events raised during a pipeline step
#[derive(Default)]
struct CollisionLog {
    events: Mutex<Vec<CollisionEvent>>,
}

impl EventHandler for CollisionLog {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}

/// Rapier world for one court
pub struct CourtWorld {
    gravity: Vector<Real>,
    integration_params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    events: CollisionLog,

    ball_body: RigidBodyHandle,
    ball_collider: ColliderHandle,
    surfaces: HashMap<ColliderHandle, Surface>,

    shot: ShotCredit,
}

impl CourtWorld {
    pub fn new() -> Self {
        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();
        let mut surfaces = HashMap::new();

        // Floor: thin slab whose top face sits at y = 0
        let floor_body = RigidBodyBuilder::fixed()
            .translation(vector![0.0, -0.1, 0.0])
            .build();
        let floor_collider = ColliderBuilder::cuboid(COURT_SIZE / 2.0, 0.1, COURT_SIZE / 2.0)
            .friction(0.4)
            .build();
        let fh = bodies.insert(floor_body);
        let floor = colliders.insert_with_parent(floor_collider, fh, &mut bodies);
        surfaces.insert(floor, Surface::Ground);

        // Backboard: generous depth so fast balls cannot tunnel past it
        let backboard_body = RigidBodyBuilder::fixed()
            .translation(vector![
                0.0,
                HOOP_HEIGHT + BACKBOARD_HEIGHT / 2.0 - 0.1,
                -HOOP_RADIUS * 1.5
            ])
            .build();
        let backboard_collider =
            ColliderBuilder::cuboid(BACKBOARD_WIDTH / 2.0, BACKBOARD_HEIGHT / 2.0, 0.5).build();
        let bh = bodies.insert(backboard_body);
        let backboard = colliders.insert_with_parent(backboard_collider, bh, &mut bodies);
        surfaces.insert(backboard, Surface::Backboard);

        // Rim: solid contact disc slightly wider than the rim itself
        let rim_body = RigidBodyBuilder::fixed()
            .translation(vector![0.0, HOOP_HEIGHT, 0.0])
            .build();
        let rim_collider = ColliderBuilder::cylinder(
            BALL_RADIUS * 0.5,
            HOOP_RADIUS + BALL_RADIUS * 0.5,
        )
        .build();
        let rh = bodies.insert(rim_body);
        let rim = colliders.insert_with_parent(rim_collider, rh, &mut bodies);
        surfaces.insert(rim, Surface::Rim);

        // Ball: kept awake so every contact is reported
        let ball_body = bodies.insert(
            RigidBodyBuilder::dynamic()
                .translation(vector![0.0, RESET_POS_Y + 0.5, 4.0])
                .can_sleep(false)
                .build(),
        );
        let ball_collider = colliders.insert_with_parent(
            ColliderBuilder::ball(BALL_RADIUS)
                .mass(BALL_MASS)
                .restitution(BALL_RESTITUTION)
                .friction(BALL_FRICTION)
                .active_events(ActiveEvents::COLLISION_EVENTS)
                .build(),
            ball_body,
            &mut bodies,
        );

        let mut world = Self {
            gravity: vector![0.0, -9.81, 0.0],
            integration_params: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies,
            colliders,
            joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            events: CollisionLog::default(),
            ball_body,
            ball_collider,
            surfaces,
            shot: ShotCredit::NoShot,
        };
        world.reset_ball();
        world
    }

    /// Advance the simulation by one fixed step
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_params,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            None,
            &(),
            &self.events,
        );
    }

    /// Current ball center
    pub fn ball_position(&self) -> Vec3 {
        let t = self.bodies[self.ball_body].translation();
        vec3(t.x, t.y, t.z)
    }

    /// Apply the shot impulse and open a fresh (uncredited) shot
    pub fn shoot(&mut self, power: f32, yaw_deg: f32, pitch_deg: f32) {
        let impulse = shot_impulse(self.ball_position(), power, yaw_deg, pitch_deg);
        let body = &mut self.bodies[self.ball_body];
        body.apply_impulse(vector![impulse.x, impulse.y, impulse.z], true);
        self.shot = ShotCredit::Open;
        log::debug!(
            "shot fired: power={power} yaw={yaw_deg} pitch={pitch_deg} impulse={impulse:?}"
        );
    }

    /// Teleport the ball to a random point in the spawn envelope, zeroing
    /// its velocity. Spawned a little above the floor, with a touch of
    /// vertical jitter, to avoid ground clipping.
    pub fn reset_ball(&mut self) {
        let x = gen_range(RESET_POS_X_MIN, RESET_POS_X_MAX);
        let z = gen_range(RESET_POS_Z_MIN, RESET_POS_Z_MAX);
        let y = RESET_POS_Y + 0.5 + gen_range(0.0, 0.1);

        let body = &mut self.bodies[self.ball_body];
        body.set_translation(vector![x, y, z], true);
        body.set_linvel(vector![0.0, 0.0, 0.0], true);
        body.set_angvel(vector![0.0, 0.0, 0.0], true);
        body.wake_up(true);
        self.shot = ShotCredit::NoShot;
    }

    /// Clear any credited or in-flight shot state
    pub fn clear_credit(&mut self) {
        self.shot = ShotCredit::NoShot;
    }

    /// Drain this step's new contacts and judge them.
    ///
    /// Contact-started events only, and only while a fired shot's scoring
    /// window is open: the first Hit/Miss verdict credits the shot, and
    /// everything after it (including the respawned ball settling onto the
    /// floor) is dropped until the next `shoot`.
    pub fn drain_verdicts(&mut self) -> Vec<Verdict> {
        let mut verdicts = Vec::new();
        for (surface, ball_y) in self.drain_contacts() {
            if self.shot != ShotCredit::Open {
                continue;
            }
            match judge(surface, ball_y) {
                Verdict::Ignore => {}
                verdict => {
                    self.shot = ShotCredit::Credited;
                    verdicts.push(verdict);
                }
            }
        }
        verdicts
    }

    /// Raw contact-started events involving the ball, paired with the ball
    /// height at delivery
    fn drain_contacts(&mut self) -> Vec<(Surface, f32)> {
        let drained: Vec<CollisionEvent> = match self.events.events.lock() {
            Ok(mut events) => events.drain(..).collect(),
            Err(_) => Vec::new(),
        };

        let ball_y = self.ball_position().y;
        let mut contacts = Vec::new();
        for event in drained {
            let CollisionEvent::Started(a, b, _) = event else {
                continue;
            };
            let other = if a == self.ball_collider {
                b
            } else if b == self.ball_collider {
                a
            } else {
                continue;
            };
            let surface = self.surfaces.get(&other).copied().unwrap_or(Surface::Other);
            contacts.push((surface, ball_y));
        }
        contacts
    }
}

impl Default for CourtWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impulse_magnitude_tracks_power() {
        let origin = vec3(0.0, 0.7, 4.0);
        let imp = shot_impulse(origin, 50.0, 0.0, 0.0);
        let expected = 50.0 * SHOT_POWER_MULTIPLIER;
        assert!((imp.length() - expected).abs() < 1e-4);
    }

    #[test]
    fn test_impulse_never_purely_horizontal() {
        let origin = vec3(0.0, 0.7, 4.0);
        // Even aimed hard downward, vertical lift is floored
        let imp = shot_impulse(origin, 80.0, 0.0, -MAX_ANGLE_DEG);
        assert!(imp.y > 0.0);
    }

    #[test]
    fn test_straight_shot_heads_toward_hoop() {
        // Ball in front of the hoop on +Z, hoop at the origin
        let imp = shot_impulse(vec3(0.0, 0.7, 4.0), 50.0, 0.0, 0.0);
        assert!(imp.z < 0.0);
        assert!(imp.x.abs() < 1e-4);
    }

    #[test]
    fn test_yaw_is_mirror_symmetric() {
        let origin = vec3(0.0, 0.7, 4.0);
        let left = shot_impulse(origin, 50.0, -20.0, 10.0);
        let right = shot_impulse(origin, 50.0, 20.0, 10.0);
        assert!((left.x + right.x).abs() < 1e-4);
        assert!((left.z - right.z).abs() < 1e-4);
        assert!((left.y - right.y).abs() < 1e-4);
    }

    fn settle(world: &mut CourtWorld, steps: u32) -> Vec<Verdict> {
        let mut verdicts = Vec::new();
        for _ in 0..steps {
            world.step();
            verdicts.extend(world.drain_verdicts());
        }
        verdicts
    }

    #[test]
    fn test_no_verdict_without_a_fired_shot() {
        let mut world = CourtWorld::new();
        // The spawned ball settles onto the floor; that is not a miss
        assert!(settle(&mut world, 600).is_empty());
    }

    #[test]
    fn test_weak_shot_lands_as_single_miss() {
        let mut world = CourtWorld::new();
        // Minimum power barely lifts the ball; it lands well short of the
        // hoop and bounces on the floor, which must be judged exactly once
        world.shoot(MIN_POWER, 0.0, 0.0);
        assert_eq!(settle(&mut world, 600), vec![Verdict::Miss]);
    }

    #[test]
    fn test_respawn_then_refire_opens_one_new_window() {
        let mut world = CourtWorld::new();
        world.shoot(MIN_POWER, 0.0, 0.0);
        settle(&mut world, 600);

        // Post-credit settling and the respawn drop carry no verdicts
        world.reset_ball();
        assert!(settle(&mut world, 600).is_empty());

        // Lofted but weak: clears the floor, lands well short of the hoop
        world.shoot(50.0, 0.0, 30.0);
        assert_eq!(settle(&mut world, 600), vec![Verdict::Miss]);
    }

    #[test]
    fn test_ball_collider_radius_matches_constant() {
        let world = CourtWorld::new();
        let ball = world.colliders[world.ball_collider]
            .shape()
            .as_ball()
            .unwrap();
        assert!((ball.radius - BALL_RADIUS).abs() < 1e-6);
    }

    #[test]
    fn test_ball_spawns_inside_envelope() {
        let mut world = CourtWorld::new();
        for _ in 0..20 {
            world.reset_ball();
            let pos = world.ball_position();
            assert!(pos.x >= RESET_POS_X_MIN && pos.x <= RESET_POS_X_MAX);
            assert!(pos.z >= RESET_POS_Z_MIN && pos.z <= RESET_POS_Z_MAX);
            assert!(pos.y >= RESET_POS_Y + 0.5 && pos.y <= RESET_POS_Y + 0.6);
        }
    }
}
