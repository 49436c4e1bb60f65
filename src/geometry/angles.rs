//! Joint angle calculation using dot product
//!
//! Calculates the angle at a vertex joint from the vectors running to its
//! two neighbour joints (e.g. knee angle from knee→hip and knee→ankle).

/// Calculate the angle at vertex `b` between `b→a` and `b→c`, in degrees
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns angle in degrees, always within [0, 180]:
/// - 180° = joints in a straight line
/// - 0° = both neighbours on the same side
///
/// The cosine is clamped to [-1, 1] so float drift near colinear points
/// never pushes acos out of its domain.
pub fn joint_angle(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    // Vectors from the vertex out to each neighbour
    let v1 = (a.0 - b.0, a.1 - b.1);
    let v2 = (c.0 - b.0, c.1 - b.1);

    let dot = v1.0 * v2.0 + v1.1 * v2.1;

    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();

    // Degenerate case: a neighbour coincides with the vertex
    if mag1 < 0.0001 || mag2 < 0.0001 {
        return 0.0;
    }

    let cos_angle = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);

    cos_angle.acos().to_degrees()
}
