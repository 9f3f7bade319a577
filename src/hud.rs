//! 2D overlays: scoreboard, control panel, menus
//!
//! Immediate-mode drawing over the 3D scene. Layout mirrors the game's
//! original UI: scoreboard top right, control panel top left, full-screen
//! dimmed panels for the title and game-over states.

use macroquad::prelude::*;

use crate::consts::*;
use crate::game::Session;
use crate::highscores::HighScores;

const PANEL_BG: Color = Color::new(0.12, 0.14, 0.18, 0.8);
const DIM_BG: Color = Color::new(0.05, 0.06, 0.09, 0.85);
const LABEL: Color = Color::new(0.55, 0.7, 1.0, 1.0);

/// Score, streak and remaining time, top right
pub fn draw_scoreboard(session: &Session) {
    let w = 300.0;
    let h = 74.0;
    let x = screen_width() - w - 16.0;
    let y = 16.0;
    draw_rectangle(x, y, w, h, PANEL_BG);

    let cells = [
        ("Score", format!("{}", session.score), YELLOW),
        ("Streak", format!("{}", session.streak), GREEN),
        ("Time", session.clock_label(), RED),
    ];
    for (i, (label, value, color)) in cells.iter().enumerate() {
        let cx = x + 14.0 + i as f32 * (w / 3.0);
        draw_text(label, cx, y + 26.0, 20.0, LABEL);
        draw_text(value, cx, y + 56.0, 30.0, *color);
    }
}

/// Power bar and aim readouts, top left
pub fn draw_control_panel(session: &Session) {
    let x = 16.0;
    let y = 16.0;
    let w = 280.0;
    draw_rectangle(x, y, w, 170.0, PANEL_BG);

    draw_text("Arrows: aim  1/2: power  Enter: shoot", x + 12.0, y + 24.0, 17.0, GRAY);

    // Power bar
    let shot = &session.shot;
    let frac = (shot.power - MIN_POWER) / (MAX_POWER - MIN_POWER);
    draw_text(
        &format!("Power  {:.1} / {MAX_POWER:.0}", shot.power),
        x + 12.0,
        y + 56.0,
        20.0,
        WHITE,
    );
    draw_rectangle(x + 12.0, y + 66.0, w - 24.0, 10.0, DARKGRAY);
    draw_rectangle(x + 12.0, y + 66.0, (w - 24.0) * frac, 10.0, ORANGE);

    let yaw = if shot.yaw_deg == 0.0 {
        "Center".to_string()
    } else if shot.yaw_deg > 0.0 {
        format!("Right {:.0}\u{b0}", shot.yaw_deg)
    } else {
        format!("Left {:.0}\u{b0}", -shot.yaw_deg)
    };
    let pitch = if shot.pitch_deg == 0.0 {
        "Straight".to_string()
    } else if shot.pitch_deg > 0.0 {
        format!("Up {:.0}\u{b0}", shot.pitch_deg)
    } else {
        format!("Down {:.0}\u{b0}", -shot.pitch_deg)
    };
    draw_text(&format!("Horizontal  {yaw}"), x + 12.0, y + 104.0, 20.0, SKYBLUE);
    draw_text(&format!("Vertical    {pitch}"), x + 12.0, y + 132.0, 20.0, VIOLET);

    if session.locked() {
        draw_text("Ball resetting...", x + 12.0, y + 160.0, 20.0, ORANGE);
    }
}

/// Title screen with instructions
pub fn draw_idle_screen(scores: &HighScores) {
    dim_screen();
    let cx = screen_width() / 2.0;
    let mut y = screen_height() * 0.25;

    centered("BASKETBALL CHALLENGE 3D", cx, y, 52.0, GOLD);
    y += 70.0;
    centered("Press Enter to start", cx, y, 30.0, WHITE);
    y += 60.0;

    for line in [
        "Arrow keys aim the shot",
        "1 lowers power, 2 raises power",
        "Enter shoots the ball",
        "Backboard or rim: 1 point",
        "Every 3 hits in a row: bonus point",
        "2-minute timer - high score wins",
    ] {
        centered(line, cx, y, 22.0, LIGHTGRAY);
        y += 30.0;
    }

    y += 20.0;
    if let Some(top) = scores.top_score() {
        centered(&format!("Best so far: {top}"), cx, y, 24.0, YELLOW);
        y += 30.0;
        centered("C clears the high-score list", cx, y, 18.0, GRAY);
    }
}

/// Game-over screen with the leaderboard
pub fn draw_ended_screen(final_score: u32, scores: &HighScores) {
    dim_screen();
    let cx = screen_width() / 2.0;
    let mut y = screen_height() * 0.18;

    centered("GAME OVER", cx, y, 52.0, GREEN);
    y += 60.0;
    centered(&format!("Final score: {final_score}"), cx, y, 36.0, YELLOW);
    y += 50.0;
    centered("Enter: play again    R: back to title", cx, y, 24.0, WHITE);
    y += 56.0;

    centered("High Scores", cx, y, 28.0, VIOLET);
    y += 34.0;
    if scores.is_empty() {
        centered("(none yet)", cx, y, 20.0, GRAY);
    }
    for (i, entry) in scores.entries.iter().enumerate() {
        centered(
            &format!("{:>2}.  {:<12}  {:>4}", i + 1, entry.date_label(), entry.score),
            cx,
            y,
            22.0,
            LIGHTGRAY,
        );
        y += 26.0;
    }
}

fn dim_screen() {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), DIM_BG);
}

fn centered(text: &str, cx: f32, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, cx - dims.width / 2.0, y, size, color);
}
