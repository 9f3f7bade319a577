//! Hoopshot - a 3D arcade basketball game
//!
//! Core modules:
//! - `game`: Match loop, shot parameters, input routing, collision judging
//! - `court`: Rapier physics world (ball, hoop, backboard, floor)
//! - `scene`: 3D scene drawing
//! - `hud`: 2D overlays (scoreboard, control panel, menus)
//! - `highscores`: Persisted top-10 leaderboard

pub mod court;
pub mod game;
pub mod highscores;
pub mod hud;
pub mod scene;

pub use game::{GameEvent, InputAction, MatchPhase, Session, ShotParams, Surface, Verdict};
pub use highscores::{HighScores, ScoreEntry};

/// Game configuration constants
pub mod consts {
    use macroquad::color::Color;

    /// Match length in seconds (2 minutes)
    pub const GAME_DURATION_SECS: u32 = 120;
    /// Lockout after a shot before the ball respawns (5 seconds)
    pub const BALL_RESET_TIME_SECS: f32 = 5.0;

    /// Scale from the 10..100 power value to a rapier impulse
    pub const SHOT_POWER_MULTIPLIER: f32 = 0.03;
    pub const MIN_POWER: f32 = 10.0;
    pub const MAX_POWER: f32 = 100.0;
    pub const POWER_STEP: f32 = 2.5;

    /// Aim adjustment per key press (degrees)
    pub const ANGLE_STEP_DEG: f32 = 5.0;
    /// Horizontal and vertical aim limit (degrees, symmetric)
    pub const MAX_ANGLE_DEG: f32 = 50.0;

    /// Ball radius (meters)
    pub const BALL_RADIUS: f32 = 0.2;
    pub const BALL_MASS: f32 = 0.5;
    pub const BALL_RESTITUTION: f32 = 0.7;
    pub const BALL_FRICTION: f32 = 0.5;

    /// Rim height above the floor
    pub const HOOP_HEIGHT: f32 = 3.0;
    /// Rim radius (shrunk ~50% in area from a regulation 0.45)
    pub const HOOP_RADIUS: f32 = 0.318;
    pub const BACKBOARD_WIDTH: f32 = 2.4;
    pub const BACKBOARD_HEIGHT: f32 = 1.8;
    /// Side length of the square court
    pub const COURT_SIZE: f32 = 15.0;

    /// Spawn envelope: the ball respawns at a uniform random point in this
    /// rectangle. Z stays inside the court half that faces the hoop (the
    /// hoop sits at z = 0).
    pub const RESET_POS_X_MIN: f32 = -1.5;
    pub const RESET_POS_X_MAX: f32 = 1.5;
    pub const RESET_POS_Z_MIN: f32 = 1.0;
    pub const RESET_POS_Z_MAX: f32 = 7.0;
    /// Base spawn height; lifted a little on respawn to avoid floor clipping
    pub const RESET_POS_Y: f32 = BALL_RADIUS;

    pub const BASKETBALL_ORANGE: Color = Color::new(1.0, 0.498, 0.0, 1.0);
    pub const HOOP_RED: Color = Color::new(0.8, 0.0, 0.0, 1.0);
    pub const BACKBOARD_WHITE: Color = Color::new(0.941, 0.941, 0.941, 1.0);
    pub const COURT_BLUE: Color = Color::new(0.188, 0.314, 0.565, 1.0);
    pub const COURT_LINES_WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const SKY_BLUE: Color = Color::new(0.529, 0.808, 0.922, 1.0);

    /// High-score file, relative to the working directory
    pub const HIGH_SCORES_FILE: &str = "hoopshot_high_scores.json";
}
