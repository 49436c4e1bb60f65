//! Composite body angles from a full pose
//!
//! Derives the two metrics the squat analyzer scores on: knee flexion
//! (thigh-shin angle, smaller = deeper) and torso lean relative to vertical.

use crate::pose::{
    Pose, LEFT_ANKLE, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, RIGHT_ANKLE, RIGHT_HIP, RIGHT_KNEE,
    RIGHT_SHOULDER,
};

use super::angles::joint_angle;

fn midpoint(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

/// Knee flexion angle in degrees: mean of the hip–knee–ankle angles of
/// both legs. Averaging the two smooths out single-leg occlusion noise.
pub fn knee_flexion_angle(pose: &Pose) -> f32 {
    let left = joint_angle(
        pose.point(LEFT_HIP),
        pose.point(LEFT_KNEE),
        pose.point(LEFT_ANKLE),
    );
    let right = joint_angle(
        pose.point(RIGHT_HIP),
        pose.point(RIGHT_KNEE),
        pose.point(RIGHT_ANKLE),
    );
    (left + right) / 2.0
}

/// Forward lean of the upper body in degrees
///
/// Angle at the hip midpoint between the torso vector (toward the shoulder
/// midpoint) and a synthetic reference point one unit straight above the
/// hips. 0° = perfectly upright. Image y grows downward, so "above" is -y.
pub fn torso_angle(pose: &Pose) -> f32 {
    let shoulder = midpoint(pose.point(LEFT_SHOULDER), pose.point(RIGHT_SHOULDER));
    let hip = midpoint(pose.point(LEFT_HIP), pose.point(RIGHT_HIP));
    let vertical = (hip.0, hip.1 - 1.0);
    joint_angle(shoulder, hip, vertical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{Landmark, POSE_LANDMARKS};

    /// Pose with both legs bent to `knee_deg` at the knee and the torso
    /// leaning `torso_deg` forward of vertical.
    fn body_pose(knee_deg: f32, torso_deg: f32) -> Vec<Landmark> {
        let mut landmarks = vec![Landmark::default(); POSE_LANDMARKS];

        let knee = (0.5_f32, 0.5_f32);
        let ankle = (0.5, 0.7);
        // knee→ankle points straight down (+y); place the hip at the
        // requested interior angle from it
        let kt = knee_deg.to_radians();
        let hip = (knee.0 + 0.2 * kt.sin(), knee.1 + 0.2 * kt.cos());

        let tt = torso_deg.to_radians();
        let shoulder = (hip.0 + 0.3 * tt.sin(), hip.1 - 0.3 * tt.cos());

        for (index, point) in [
            (LEFT_SHOULDER, shoulder),
            (RIGHT_SHOULDER, shoulder),
            (LEFT_HIP, hip),
            (RIGHT_HIP, hip),
            (LEFT_KNEE, knee),
            (RIGHT_KNEE, knee),
            (LEFT_ANKLE, ankle),
            (RIGHT_ANKLE, ankle),
        ] {
            landmarks[index] = Landmark::new(point.0, point.1);
        }
        landmarks
    }

    #[test]
    fn test_straight_leg_reads_180() {
        let landmarks = body_pose(180.0, 0.0);
        let pose = Pose::new(&landmarks).unwrap();
        assert!((knee_flexion_angle(&pose) - 180.0).abs() < 0.5);
    }

    #[test]
    fn test_deep_bend_reads_90() {
        let landmarks = body_pose(90.0, 20.0);
        let pose = Pose::new(&landmarks).unwrap();
        assert!((knee_flexion_angle(&pose) - 90.0).abs() < 0.5);
    }

    #[test]
    fn test_knee_angle_averages_both_legs() {
        // Left leg straight, right leg square: mean should land at 135
        let straight = body_pose(180.0, 0.0);
        let bent = body_pose(90.0, 0.0);
        let mut landmarks = straight.clone();
        landmarks[RIGHT_HIP] = bent[RIGHT_HIP];
        landmarks[RIGHT_KNEE] = bent[RIGHT_KNEE];
        landmarks[RIGHT_ANKLE] = bent[RIGHT_ANKLE];
        let pose = Pose::new(&landmarks).unwrap();
        assert!((knee_flexion_angle(&pose) - 135.0).abs() < 0.5);
    }

    #[test]
    fn test_upright_torso_reads_zero() {
        let landmarks = body_pose(170.0, 0.0);
        let pose = Pose::new(&landmarks).unwrap();
        assert!(torso_angle(&pose) < 0.5);
    }

    #[test]
    fn test_forward_lean_reads_lean_angle() {
        let landmarks = body_pose(170.0, 35.0);
        let pose = Pose::new(&landmarks).unwrap();
        assert!((torso_angle(&pose) - 35.0).abs() < 0.5);
    }
}
