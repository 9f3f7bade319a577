//! Collision judging: which contacts count as baskets
//!
//! A pure rule over `(surface, ball height)`. The court world applies it to
//! the first relevant contact after each shot; once a Hit or Miss verdict is
//! produced the shot is credited and later contacts are ignored until the
//! next fire.

use crate::consts::{HOOP_HEIGHT, HOOP_RADIUS};

/// Named surfaces the ball can touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Backboard,
    Rim,
    Ground,
    /// Anything without scoring meaning (pole, court walls)
    Other,
}

/// Scoring decision for one collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Hit,
    Miss,
    Ignore,
}

/// Minimum ball height for a rim touch to count as a basket.
///
/// Half a rim radius below rim height. This is deliberately not an exact
/// arc-intersection test: it only has to reject balls clipping the rim's
/// underside on the way up.
pub fn rim_score_threshold() -> f32 {
    HOOP_HEIGHT - HOOP_RADIUS * 0.5
}

/// Classify a single collision for an uncredited shot.
///
/// - Backboard contact always scores.
/// - Rim contact scores only at-or-above the rim threshold; below it the
///   touch is an underside graze and the shot is a miss.
/// - Ground contact before any verdict is a miss.
/// - Everything else leaves the shot open.
pub fn judge(surface: Surface, ball_height: f32) -> Verdict {
    match surface {
        Surface::Backboard => Verdict::Hit,
        Surface::Rim => {
            if ball_height > rim_score_threshold() {
                Verdict::Hit
            } else {
                Verdict::Miss
            }
        }
        Surface::Ground => Verdict::Miss,
        Surface::Other => Verdict::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backboard_always_hits() {
        assert_eq!(judge(Surface::Backboard, 0.0), Verdict::Hit);
        assert_eq!(judge(Surface::Backboard, 100.0), Verdict::Hit);
        assert_eq!(judge(Surface::Backboard, -1.0), Verdict::Hit);
    }

    #[test]
    fn test_rim_at_hoop_height_hits() {
        assert_eq!(judge(Surface::Rim, HOOP_HEIGHT), Verdict::Hit);
    }

    #[test]
    fn test_rim_below_threshold_misses() {
        assert_eq!(judge(Surface::Rim, HOOP_HEIGHT - 10.0), Verdict::Miss);
        // Just under the threshold is still a miss
        assert_eq!(
            judge(Surface::Rim, rim_score_threshold() - 0.001),
            Verdict::Miss
        );
    }

    #[test]
    fn test_rim_just_above_threshold_hits() {
        assert_eq!(
            judge(Surface::Rim, rim_score_threshold() + 0.001),
            Verdict::Hit
        );
    }

    #[test]
    fn test_ground_misses() {
        assert_eq!(judge(Surface::Ground, 0.2), Verdict::Miss);
    }

    #[test]
    fn test_other_surfaces_ignored() {
        assert_eq!(judge(Surface::Other, 0.0), Verdict::Ignore);
        assert_eq!(judge(Surface::Other, HOOP_HEIGHT), Verdict::Ignore);
    }
}
