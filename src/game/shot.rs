//! Shot parameters: power and the two aim angles
//!
//! Three bounded values adjusted in discrete steps by the input router.
//! Every adjustment clamps, so no sequence of key presses can escape the
//! configured ranges.

use crate::consts::*;

/// Power and aim for the next shot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotParams {
    /// Shot strength in `[MIN_POWER, MAX_POWER]`
    pub power: f32,
    /// Horizontal aim in degrees, `[-MAX_ANGLE_DEG, MAX_ANGLE_DEG]`,
    /// positive = right of the hoop
    pub yaw_deg: f32,
    /// Vertical aim in degrees, `[-MAX_ANGLE_DEG, MAX_ANGLE_DEG]`,
    /// positive = higher arc
    pub pitch_deg: f32,
}

impl Default for ShotParams {
    fn default() -> Self {
        Self {
            power: MIN_POWER,
            yaw_deg: 0.0,
            pitch_deg: 0.0,
        }
    }
}

impl ShotParams {
    /// Back to minimum power, aimed dead center
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn power_up(&mut self) {
        self.power = (self.power + POWER_STEP).min(MAX_POWER);
    }

    pub fn power_down(&mut self) {
        self.power = (self.power - POWER_STEP).max(MIN_POWER);
    }

    pub fn aim_left(&mut self) {
        self.yaw_deg = (self.yaw_deg - ANGLE_STEP_DEG).max(-MAX_ANGLE_DEG);
    }

    pub fn aim_right(&mut self) {
        self.yaw_deg = (self.yaw_deg + ANGLE_STEP_DEG).min(MAX_ANGLE_DEG);
    }

    pub fn aim_up(&mut self) {
        self.pitch_deg = (self.pitch_deg + ANGLE_STEP_DEG).min(MAX_ANGLE_DEG);
    }

    pub fn aim_down(&mut self) {
        self.pitch_deg = (self.pitch_deg - ANGLE_STEP_DEG).max(-MAX_ANGLE_DEG);
    }
}
