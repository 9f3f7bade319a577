//! Match session: the Idle → Playing → Ended state machine
//!
//! The session owns the countdown, the post-shot lockout, score and streak.
//! It never touches the physics world directly; anything the boundary must
//! do comes back to the caller as `BoundaryCmd` values, and anything the
//! rest of the app should react to comes back as `GameEvent`s. Starting or
//! resetting a match drops the outstanding lockout and zeroes the countdown
//! accumulator, so a stale timer can never fire into fresh state.

use crate::consts::*;
use crate::game::input::InputAction;
use crate::game::judge::Verdict;
use crate::game::shot::ShotParams;

/// Match lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Title screen, nothing running
    Idle,
    /// Countdown active, input live
    Playing,
    /// Timer expired; score recorded, waiting for restart
    Ended,
}

/// Instruction for the physics/render boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryCmd {
    /// Apply a shot impulse from the current ball position
    Shoot {
        power: f32,
        yaw_deg: f32,
        pitch_deg: f32,
    },
    /// Teleport the ball to a random spawn point, zeroing velocity
    ResetBall,
    /// Clear the one-shot "already credited" flag
    ClearCredit,
}

/// Something the app layer may want to react to (HUD flash, persistence)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A shot was credited as a basket; `bonus` marks every third in a row
    ShotScored { bonus: bool },
    /// A shot was credited as a miss; the streak is gone
    ShotMissed,
    /// The countdown hit zero
    MatchEnded { final_score: u32 },
}

/// One match worth of mutable state
#[derive(Debug, Clone)]
pub struct Session {
    pub phase: MatchPhase,
    pub score: u32,
    /// Consecutive credited hits since the last credited miss
    pub streak: u32,
    pub remaining_secs: u32,
    pub shot: ShotParams,
    /// Fractional progress toward the next 1-second countdown tick
    second_acc: f32,
    /// Seconds left on the post-shot lockout; `None` = input live
    lockout: Option<f32>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: MatchPhase::Idle,
            score: 0,
            streak: 0,
            remaining_secs: GAME_DURATION_SECS,
            shot: ShotParams::default(),
            second_acc: 0.0,
            lockout: None,
        }
    }

    /// Whether aiming/firing input is currently ignored
    pub fn locked(&self) -> bool {
        self.lockout.is_some()
    }

    /// Remaining time as MM:SS for the scoreboard
    pub fn clock_label(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }

    /// Begin a fresh match. Valid from any phase; cancels pending timers.
    pub fn start(&mut self) -> Vec<BoundaryCmd> {
        self.wipe();
        self.phase = MatchPhase::Playing;
        vec![BoundaryCmd::ResetBall, BoundaryCmd::ClearCredit]
    }

    /// Back to the title screen. Valid from any phase; cancels pending timers.
    pub fn reset(&mut self) -> Vec<BoundaryCmd> {
        self.wipe();
        self.phase = MatchPhase::Idle;
        vec![BoundaryCmd::ResetBall, BoundaryCmd::ClearCredit]
    }

    fn wipe(&mut self) {
        self.score = 0;
        self.streak = 0;
        self.remaining_secs = GAME_DURATION_SECS;
        self.shot.reset();
        self.second_acc = 0.0;
        self.lockout = None;
    }

    /// Route one input action through the phase/lockout guards.
    ///
    /// Guards are re-checked per event; actions arriving while locked or
    /// outside Playing are dropped, never queued.
    pub fn apply(&mut self, action: InputAction) -> Vec<BoundaryCmd> {
        if self.phase != MatchPhase::Playing || self.locked() {
            return Vec::new();
        }
        match action {
            InputAction::PowerUp => self.shot.power_up(),
            InputAction::PowerDown => self.shot.power_down(),
            InputAction::AimLeft => self.shot.aim_left(),
            InputAction::AimRight => self.shot.aim_right(),
            InputAction::AimUp => self.shot.aim_up(),
            InputAction::AimDown => self.shot.aim_down(),
            InputAction::Fire => {
                // Lock out further input until the ball has settled
                self.lockout = Some(BALL_RESET_TIME_SECS);
                return vec![BoundaryCmd::Shoot {
                    power: self.shot.power,
                    yaw_deg: self.shot.yaw_deg,
                    pitch_deg: self.shot.pitch_deg,
                }];
            }
        }
        Vec::new()
    }

    /// Advance timers by one frame.
    ///
    /// The countdown emits exactly one logical tick per elapsed second while
    /// Playing; crossing zero transitions to Ended exactly once. Lockout
    /// expiry respawns the ball, clears the credit flag and resets the shot
    /// parameters unconditionally.
    pub fn advance(&mut self, dt: f32) -> (Vec<BoundaryCmd>, Vec<GameEvent>) {
        let mut cmds = Vec::new();
        let mut events = Vec::new();

        if let Some(remaining) = self.lockout {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.lockout = None;
                self.shot.reset();
                cmds.push(BoundaryCmd::ResetBall);
                cmds.push(BoundaryCmd::ClearCredit);
            } else {
                self.lockout = Some(remaining);
            }
        }

        if self.phase == MatchPhase::Playing {
            self.second_acc += dt;
            while self.second_acc >= 1.0 && self.phase == MatchPhase::Playing {
                self.second_acc -= 1.0;
                self.remaining_secs = self.remaining_secs.saturating_sub(1);
                if self.remaining_secs == 0 {
                    self.phase = MatchPhase::Ended;
                    self.second_acc = 0.0;
                    events.push(GameEvent::MatchEnded {
                        final_score: self.score,
                    });
                }
            }
        }

        (cmds, events)
    }

    /// Record a judged shot outcome.
    ///
    /// Hits score a base point plus a bonus point on every third consecutive
    /// hit; misses zero the streak. No-op outside Playing.
    pub fn record_verdict(&mut self, verdict: Verdict) -> Option<GameEvent> {
        if self.phase != MatchPhase::Playing {
            return None;
        }
        match verdict {
            Verdict::Hit => {
                self.score += 1;
                self.streak += 1;
                let bonus = self.streak % 3 == 0;
                if bonus {
                    self.score += 1;
                }
                Some(GameEvent::ShotScored { bonus })
            }
            Verdict::Miss => {
                self.streak = 0;
                Some(GameEvent::ShotMissed)
            }
            Verdict::Ignore => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_session() -> Session {
        let mut s = Session::new();
        s.start();
        s
    }

    #[test]
    fn test_start_resets_everything() {
        let mut s = Session::new();
        s.score = 7;
        s.streak = 2;
        s.remaining_secs = 13;
        s.shot.power_up();
        s.lockout = Some(2.0);

        let cmds = s.start();
        assert_eq!(s.phase, MatchPhase::Playing);
        assert_eq!(s.score, 0);
        assert_eq!(s.streak, 0);
        assert_eq!(s.remaining_secs, GAME_DURATION_SECS);
        assert_eq!(s.shot, ShotParams::default());
        assert!(!s.locked());
        assert_eq!(cmds, vec![BoundaryCmd::ResetBall, BoundaryCmd::ClearCredit]);
    }

    #[test]
    fn test_reset_goes_idle_without_countdown() {
        let mut s = playing_session();
        s.reset();
        assert_eq!(s.phase, MatchPhase::Idle);

        // No countdown while Idle
        let (_, events) = s.advance(5.0);
        assert!(events.is_empty());
        assert_eq!(s.remaining_secs, GAME_DURATION_SECS);
    }

    #[test]
    fn test_countdown_ticks_once_per_second() {
        let mut s = playing_session();
        s.advance(0.4);
        assert_eq!(s.remaining_secs, GAME_DURATION_SECS);
        s.advance(0.7);
        assert_eq!(s.remaining_secs, GAME_DURATION_SECS - 1);
        s.advance(2.0);
        assert_eq!(s.remaining_secs, GAME_DURATION_SECS - 3);
    }

    #[test]
    fn test_countdown_ends_match_exactly_once() {
        let mut s = playing_session();
        s.remaining_secs = 1;
        let (_, events) = s.advance(1.0);
        assert_eq!(s.remaining_secs, 0);
        assert_eq!(s.phase, MatchPhase::Ended);
        assert_eq!(events, vec![GameEvent::MatchEnded { final_score: 0 }]);

        // Further ticks are no-ops
        let (_, events) = s.advance(10.0);
        assert!(events.is_empty());
        assert_eq!(s.remaining_secs, 0);
    }

    #[test]
    fn test_streak_bonus_every_third_hit() {
        let mut s = playing_session();
        assert_eq!(
            s.record_verdict(Verdict::Hit),
            Some(GameEvent::ShotScored { bonus: false })
        );
        assert_eq!(s.score, 1);
        s.record_verdict(Verdict::Hit);
        assert_eq!(s.score, 2);
        assert_eq!(
            s.record_verdict(Verdict::Hit),
            Some(GameEvent::ShotScored { bonus: true })
        );
        // Third hit in a row: base point plus bonus
        assert_eq!(s.score, 4);
        assert_eq!(s.streak, 3);
    }

    #[test]
    fn test_miss_zeroes_streak() {
        let mut s = playing_session();
        s.record_verdict(Verdict::Hit);
        s.record_verdict(Verdict::Hit);
        assert_eq!(s.streak, 2);
        assert_eq!(s.record_verdict(Verdict::Miss), Some(GameEvent::ShotMissed));
        assert_eq!(s.streak, 0);
        assert_eq!(s.score, 2);
    }

    #[test]
    fn test_ignore_changes_nothing() {
        let mut s = playing_session();
        s.record_verdict(Verdict::Hit);
        assert_eq!(s.record_verdict(Verdict::Ignore), None);
        assert_eq!(s.score, 1);
        assert_eq!(s.streak, 1);
    }

    #[test]
    fn test_verdicts_dropped_outside_playing() {
        let mut s = Session::new();
        assert_eq!(s.record_verdict(Verdict::Hit), None);
        assert_eq!(s.score, 0);

        let mut s = playing_session();
        s.remaining_secs = 1;
        s.advance(1.0);
        assert_eq!(s.record_verdict(Verdict::Hit), None);
        assert_eq!(s.score, 0);
    }

    #[test]
    fn test_fire_locks_and_emits_shot() {
        let mut s = playing_session();
        s.apply(InputAction::PowerUp);
        s.apply(InputAction::AimRight);
        let cmds = s.apply(InputAction::Fire);
        assert_eq!(
            cmds,
            vec![BoundaryCmd::Shoot {
                power: MIN_POWER + POWER_STEP,
                yaw_deg: ANGLE_STEP_DEG,
                pitch_deg: 0.0,
            }]
        );
        assert!(s.locked());

        // Locked: aim and fire are silently dropped
        assert!(s.apply(InputAction::PowerUp).is_empty());
        assert!(s.apply(InputAction::Fire).is_empty());
        assert_eq!(s.shot.power, MIN_POWER + POWER_STEP);
    }

    #[test]
    fn test_lockout_expiry_resets_ball_and_params() {
        let mut s = playing_session();
        s.apply(InputAction::PowerUp);
        s.apply(InputAction::Fire);

        let (cmds, _) = s.advance(BALL_RESET_TIME_SECS - 0.5);
        assert!(cmds.is_empty());
        assert!(s.locked());

        let (cmds, _) = s.advance(0.6);
        assert_eq!(cmds, vec![BoundaryCmd::ResetBall, BoundaryCmd::ClearCredit]);
        assert!(!s.locked());
        assert_eq!(s.shot, ShotParams::default());
    }

    #[test]
    fn test_restart_cancels_pending_lockout() {
        let mut s = playing_session();
        s.apply(InputAction::Fire);
        assert!(s.locked());

        s.start();
        assert!(!s.locked());
        // The superseded lockout never fires
        let (cmds, _) = s.advance(BALL_RESET_TIME_SECS + 1.0);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_input_dropped_outside_playing() {
        let mut s = Session::new();
        assert!(s.apply(InputAction::Fire).is_empty());
        assert!(s.apply(InputAction::PowerUp).is_empty());
        assert_eq!(s.shot, ShotParams::default());
    }

    #[test]
    fn test_clock_label() {
        let mut s = Session::new();
        s.remaining_secs = 120;
        assert_eq!(s.clock_label(), "02:00");
        s.remaining_secs = 61;
        assert_eq!(s.clock_label(), "01:01");
        s.remaining_secs = 9;
        assert_eq!(s.clock_label(), "00:09");
    }
}
