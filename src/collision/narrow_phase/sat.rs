use crate::geometry::box_axes;
use crate::math::{Quat, Vec3};

/// Inflation added to the absolute rotation matrix so near-parallel edge
/// cross products cannot produce a spurious separating axis (Gottschalk).
const AXIS_EPSILON: f32 = 1e-6;

/// Edge-pair cross products with squared length below this are skipped; the
/// inflated face tests already cover those directions.
const PARALLEL_EPSILON: f32 = 1e-8;

/// Minimum translation data for an overlapping box pair.
#[derive(Debug, Clone, Copy)]
pub struct SatResult {
    /// Unit axis of minimum overlap, pointing from A toward B
    pub normal: Vec3,
    /// Overlap depth along `normal`
    pub penetration: f32,
}

/// Separating-axis test between two oriented boxes.
///
/// Tests all 15 candidate axes (3 face axes each, 9 edge cross products) and
/// returns the minimum-overlap axis, or `None` when a separating axis exists.
pub fn box_box(
    center_a: Vec3,
    orientation_a: Quat,
    half_a: Vec3,
    center_b: Vec3,
    orientation_b: Quat,
    half_b: Vec3,
) -> Option<SatResult> {
    let axes_a = box_axes(orientation_a);
    let axes_b = box_axes(orientation_b);
    let translation = center_b - center_a;

    // r[i][j] = A_i . B_j, and its inflated absolute value
    let mut r = [[0.0f32; 3]; 3];
    let mut abs_r = [[0.0f32; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            r[i][j] = axes_a[i].dot(axes_b[j]);
            abs_r[i][j] = r[i][j].abs() + AXIS_EPSILON;
        }
    }

    // Translation expressed in A's frame
    let t = [
        translation.dot(axes_a[0]),
        translation.dot(axes_a[1]),
        translation.dot(axes_a[2]),
    ];

    let mut best_overlap = f32::MAX;
    let mut best_axis = Vec3::Y;

    // A's face axes
    for i in 0..3 {
        let ra = half_a[i];
        let rb = half_b.x * abs_r[i][0] + half_b.y * abs_r[i][1] + half_b.z * abs_r[i][2];
        let dist = t[i].abs();
        if dist > ra + rb {
            return None;
        }
        let overlap = ra + rb - dist;
        if overlap < best_overlap {
            best_overlap = overlap;
            best_axis = if t[i] < 0.0 { -axes_a[i] } else { axes_a[i] };
        }
    }

    // B's face axes
    for j in 0..3 {
        let ra = half_a.x * abs_r[0][j] + half_a.y * abs_r[1][j] + half_a.z * abs_r[2][j];
        let rb = half_b[j];
        let proj = t[0] * r[0][j] + t[1] * r[1][j] + t[2] * r[2][j];
        let dist = proj.abs();
        if dist > ra + rb {
            return None;
        }
        let overlap = ra + rb - dist;
        if overlap < best_overlap {
            best_overlap = overlap;
            best_axis = if proj < 0.0 { -axes_b[j] } else { axes_b[j] };
        }
    }

    // Edge-edge cross products A_i x B_j
    for i in 0..3 {
        for j in 0..3 {
            let axis = axes_a[i].cross(axes_b[j]);
            let len_sq = axis.length_squared();
            if len_sq < PARALLEL_EPSILON {
                continue;
            }

            let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);
            let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);
            let ra = half_a[i1] * abs_r[i2][j] + half_a[i2] * abs_r[i1][j];
            let rb = half_b[j1] * abs_r[i][j2] + half_b[j2] * abs_r[i][j1];
            let dist = (t[i2] * r[i1][j] - t[i1] * r[i2][j]).abs();
            if dist > ra + rb {
                return None;
            }

            // The cross product is not unit length; rescale to true depth
            // before comparing against the face-axis overlaps
            let inv_len = 1.0 / len_sq.sqrt();
            let overlap = (ra + rb - dist) * inv_len;
            if overlap < best_overlap {
                best_overlap = overlap;
                let unit = axis * inv_len;
                best_axis = if unit.dot(translation) < 0.0 { -unit } else { unit };
            }
        }
    }

    Some(SatResult {
        normal: best_axis,
        penetration: best_overlap,
    })
}
