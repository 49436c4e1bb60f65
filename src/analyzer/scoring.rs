//! Per-frame form scores and the qualitative feedback lookup
//!
//! Both curves are piecewise linear on a 0-100 scale. Depth rewards a knee
//! angle at or below 90° and decays faster past 110°. Back posture rewards
//! a moderate forward lean and penalizes both bolt-upright and collapsed
//! torsos.

use serde::Serialize;

/// Depth score for one frame from the knee flexion angle
///
/// - ≤ 90°: full depth, 100
/// - 90°–110°: linear decay, 2.5 points per degree (50 at 110°)
/// - > 110°: steeper decay, 1.5 points per degree from 50, floored at 0
pub fn depth_score(knee_angle: f32) -> f32 {
    if knee_angle <= 90.0 {
        100.0
    } else if knee_angle <= 110.0 {
        (100.0 - (knee_angle - 90.0) * 2.5).max(0.0)
    } else {
        (50.0 - (knee_angle - 110.0) * 1.5).max(0.0)
    }
}

/// Back posture score for one frame from the torso lean angle
///
/// - 10°–50° (exclusive): acceptable lean band, 100
/// - ≤ 10°: too upright, 5 points per degree below 10°
/// - ≥ 50°: too much forward lean, 3 points per degree past 50°
pub fn back_posture_score(torso_angle: f32) -> f32 {
    if torso_angle > 10.0 && torso_angle < 50.0 {
        100.0
    } else if torso_angle <= 10.0 {
        (100.0 - (10.0 - torso_angle) * 5.0).max(0.0)
    } else {
        (100.0 - (torso_angle - 50.0) * 3.0).max(0.0)
    }
}

/// Rounded per-rep averages reported at the end of a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FinalScores {
    pub depth: i32,
    pub back_posture: i32,
    pub total: i32,
}

/// Map a total score to its fixed coaching message
///
/// Tier lower bounds are inclusive: a total of exactly 90 lands in the
/// top tier.
pub fn qualitative_feedback(total_score: i32) -> &'static str {
    if total_score >= 90 {
        "Near-perfect squat! This form belongs in a textbook. 👏"
    } else if total_score >= 80 {
        "Excellent! Really stable form. You won't stop here, right? 😉"
    } else if total_score >= 70 {
        "Good! Solid fundamentals. A bit more attention to depth and it's perfect."
    } else if total_score >= 50 {
        "Nice work! Keep at it and it will come together fast. Fighting!"
    } else if total_score >= 30 {
        "Hmm, was that a squat? 🕺 Full marks for enthusiasm! Let's build the form together!"
    } else {
        "Did you sit down and change your mind? 😅 It's fine, every start is humble!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_score_full_at_90_and_below() {
        assert_eq!(depth_score(70.0), 100.0);
        assert_eq!(depth_score(90.0), 100.0);
    }

    #[test]
    fn test_depth_score_first_decay_band() {
        assert!((depth_score(100.0) - 75.0).abs() < 1e-4);
        assert!((depth_score(110.0) - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_depth_score_steep_band_and_floor() {
        assert!((depth_score(130.0) - 20.0).abs() < 1e-4);
        assert_eq!(depth_score(170.0), 0.0);
    }

    #[test]
    fn test_back_score_band() {
        assert_eq!(back_posture_score(11.0), 100.0);
        assert_eq!(back_posture_score(49.0), 100.0);
    }

    #[test]
    fn test_back_score_too_upright() {
        // 10° is outside the open band: zero degrees of margin, still 100
        assert_eq!(back_posture_score(10.0), 100.0);
        assert!((back_posture_score(4.0) - 70.0).abs() < 1e-4);
        assert_eq!(back_posture_score(-15.0), 0.0);
    }

    #[test]
    fn test_back_score_too_much_lean() {
        assert_eq!(back_posture_score(50.0), 100.0);
        assert!((back_posture_score(60.0) - 70.0).abs() < 1e-4);
        assert_eq!(back_posture_score(90.0), 0.0);
    }

    #[test]
    fn test_feedback_boundaries_are_inclusive() {
        let top = qualitative_feedback(90);
        assert_eq!(qualitative_feedback(100), top);
        assert_ne!(qualitative_feedback(89), top);
        assert_eq!(qualitative_feedback(89), qualitative_feedback(80));
        assert_eq!(qualitative_feedback(79), qualitative_feedback(70));
        assert_eq!(qualitative_feedback(69), qualitative_feedback(50));
        assert_eq!(qualitative_feedback(49), qualitative_feedback(30));
        assert_eq!(qualitative_feedback(29), qualitative_feedback(0));
        assert_ne!(qualitative_feedback(30), qualitative_feedback(29));
    }
}
