//! Hoopshot entry point
//!
//! Wires the match session, the rapier court and the overlays into the
//! macroquad frame loop.

use std::path::PathBuf;

use macroquad::miniquad::date;
use macroquad::prelude::*;

use hoopshot::court::CourtWorld;
use hoopshot::game::input::{self, MenuAction};
use hoopshot::game::{BoundaryCmd, GameEvent, MatchPhase, Session};
use hoopshot::highscores::{HighScores, ScoreEntry};
use hoopshot::{consts, hud, scene};

fn window_conf() -> Conf {
    Conf {
        window_title: "Hoopshot".to_string(),
        window_width: 1280,
        window_height: 720,
        high_dpi: true,
        window_resizable: true,
        sample_count: 4, // MSAA
        ..Default::default()
    }
}

/// Forward session commands to the physics world
fn run_commands(court: &mut CourtWorld, cmds: Vec<BoundaryCmd>) {
    for cmd in cmds {
        match cmd {
            BoundaryCmd::Shoot {
                power,
                yaw_deg,
                pitch_deg,
            } => court.shoot(power, yaw_deg, pitch_deg),
            BoundaryCmd::ResetBall => court.reset_ball(),
            BoundaryCmd::ClearCredit => court.clear_credit(),
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    rand::srand(date::now() as u64);

    let scores_path = PathBuf::from(consts::HIGH_SCORES_FILE);
    let mut high_scores = HighScores::load(&scores_path);
    let mut session = Session::new();
    let mut court = CourtWorld::new();

    loop {
        let dt = get_frame_time();

        // Keyboard: in-match keys route through the session's guards, menu
        // keys only exist on the idle/game-over screens
        for key in get_keys_pressed() {
            match session.phase {
                MatchPhase::Playing => {
                    if let Some(action) = input::match_action(key) {
                        let cmds = session.apply(action);
                        run_commands(&mut court, cmds);
                    }
                }
                MatchPhase::Idle | MatchPhase::Ended => match input::menu_action(key) {
                    Some(MenuAction::Start) => {
                        let cmds = session.start();
                        run_commands(&mut court, cmds);
                    }
                    Some(MenuAction::Reset) => {
                        let cmds = session.reset();
                        run_commands(&mut court, cmds);
                    }
                    Some(MenuAction::ClearScores) if session.phase == MatchPhase::Idle => {
                        high_scores = HighScores::clear(&scores_path);
                    }
                    _ => {}
                },
            }
        }

        // Countdown and lockout timers
        let (cmds, events) = session.advance(dt);
        run_commands(&mut court, cmds);

        // Physics step, then judge this frame's contacts
        court.step();
        for verdict in court.drain_verdicts() {
            if let Some(event) = session.record_verdict(verdict) {
                match event {
                    GameEvent::ShotScored { bonus: true } => {
                        log::info!("basket +1, streak bonus +1")
                    }
                    GameEvent::ShotScored { bonus: false } => log::info!("basket +1"),
                    GameEvent::ShotMissed => log::info!("miss, streak reset"),
                    GameEvent::MatchEnded { .. } => {}
                }
            }
        }

        for event in events {
            if let GameEvent::MatchEnded { final_score } = event {
                log::info!("match over, final score {final_score}");
                high_scores = high_scores.record(ScoreEntry::now(final_score), &scores_path);
            }
        }

        // Draw: 3D court, then the phase's overlay
        scene::draw(court.ball_position());
        match session.phase {
            MatchPhase::Playing => {
                hud::draw_scoreboard(&session);
                hud::draw_control_panel(&session);
            }
            MatchPhase::Idle => hud::draw_idle_screen(&high_scores),
            MatchPhase::Ended => {
                hud::draw_scoreboard(&session);
                hud::draw_ended_screen(session.score, &high_scores);
            }
        }

        next_frame().await;
    }
}
