//! 3D scene drawing
//!
//! Declarative glue only: camera plus court, hoop and ball meshes drawn
//! straight from physics state. No game rules live here.

use macroquad::prelude::*;

use crate::consts::*;

/// Camera above and behind the spawn area, looking at the hoop
pub fn court_camera() -> Camera3D {
    Camera3D {
        position: vec3(0.0, HOOP_HEIGHT + 2.0, 8.0),
        target: vec3(0.0, HOOP_HEIGHT / 2.0, 0.0),
        up: vec3(0.0, 1.0, 0.0),
        ..Default::default()
    }
}

/// Draw the whole court with the ball at `ball_pos`
pub fn draw(ball_pos: Vec3) {
    clear_background(SKY_BLUE);
    set_camera(&court_camera());

    draw_floor();
    draw_hoop();
    draw_sphere(ball_pos, BALL_RADIUS, None, BASKETBALL_ORANGE);

    set_default_camera();
}

fn draw_floor() {
    draw_plane(
        vec3(0.0, 0.0, 0.0),
        vec2(COURT_SIZE / 2.0, COURT_SIZE / 2.0),
        None,
        COURT_BLUE,
    );

    // Center line and free-throw circle, slightly above the floor to avoid
    // z-fighting
    let y = 0.01;
    draw_line_3d(
        vec3(-COURT_SIZE / 2.0, y, 0.0),
        vec3(COURT_SIZE / 2.0, y, 0.0),
        COURT_LINES_WHITE,
    );
    let segments = 48;
    let radius = 1.8;
    let center = vec3(0.0, y, 4.0);
    for i in 0..segments {
        let a0 = i as f32 / segments as f32 * std::f32::consts::TAU;
        let a1 = (i + 1) as f32 / segments as f32 * std::f32::consts::TAU;
        draw_line_3d(
            center + vec3(a0.cos() * radius, 0.0, a0.sin() * radius),
            center + vec3(a1.cos() * radius, 0.0, a1.sin() * radius),
            COURT_LINES_WHITE,
        );
    }
}

fn draw_hoop() {
    // Pole
    draw_cylinder(
        vec3(0.0, 0.0, -HOOP_RADIUS * 2.0),
        0.05,
        0.05,
        HOOP_HEIGHT + 0.5,
        None,
        HOOP_RED,
    );

    // Backboard
    draw_cube(
        vec3(
            0.0,
            HOOP_HEIGHT + BACKBOARD_HEIGHT / 2.0 - 0.1,
            -HOOP_RADIUS * 1.5,
        ),
        vec3(BACKBOARD_WIDTH, BACKBOARD_HEIGHT, 0.05),
        None,
        BACKBOARD_WHITE,
    );

    // Rim, drawn as a ring of segments
    let segments = 32;
    for i in 0..segments {
        let a0 = i as f32 / segments as f32 * std::f32::consts::TAU;
        let a1 = (i + 1) as f32 / segments as f32 * std::f32::consts::TAU;
        let p0 = vec3(a0.cos() * HOOP_RADIUS, HOOP_HEIGHT, a0.sin() * HOOP_RADIUS);
        let p1 = vec3(a1.cos() * HOOP_RADIUS, HOOP_HEIGHT, a1.sin() * HOOP_RADIUS);
        draw_line_3d(p0, p1, HOOP_RED);
    }
}
