use crate::math::Vec3;

/// Maximum simplex refinement iterations before giving up.
///
/// Hitting the cap is treated as disjoint; the next substep re-examines the
/// pair with updated geometry.
const MAX_ITERATIONS: usize = 30;

/// A simplex of up to 4 points in Minkowski-difference space.
#[derive(Debug, Clone, Copy)]
struct Simplex {
    points: [Vec3; 4],
    len: usize,
}

impl Simplex {
    fn new(first: Vec3) -> Self {
        Self {
            points: [first, Vec3::ZERO, Vec3::ZERO, Vec3::ZERO],
            len: 1,
        }
    }

    fn push(&mut self, point: Vec3) {
        debug_assert!(self.len < 4);
        self.points[self.len] = point;
        self.len += 1;
    }
}

/// Tests whether two convex shapes, given by their support functions,
/// intersect.
///
/// `start_dir` should be the vector from the center of A to the center of B;
/// a near-zero value falls back to the X axis.
pub fn intersects<A, B>(support_a: A, support_b: B, start_dir: Vec3) -> bool
where
    A: Fn(Vec3) -> Vec3,
    B: Fn(Vec3) -> Vec3,
{
    let minkowski = |dir: Vec3| support_a(dir) - support_b(-dir);

    let mut direction = if start_dir.length_squared() < 1e-12 {
        Vec3::X
    } else {
        start_dir
    };

    let first = minkowski(direction);
    if first.dot(direction) <= 0.0 {
        return false;
    }
    let mut simplex = Simplex::new(first);
    direction = -first;

    for _ in 0..MAX_ITERATIONS {
        let point = minkowski(direction);
        if point.dot(direction) <= 0.0 {
            // The support never crossed the origin along this direction
            return false;
        }
        simplex.push(point);

        let enclosed = match simplex.len {
            2 => {
                line_case(&mut simplex, &mut direction);
                false
            }
            3 => {
                triangle_case(&mut simplex, &mut direction);
                false
            }
            4 => tetrahedron_case(&mut simplex, &mut direction),
            _ => return false,
        };
        if enclosed {
            return true;
        }
    }

    false
}

/// Line segment: steer perpendicular to AB toward the origin.
fn line_case(simplex: &mut Simplex, direction: &mut Vec3) {
    let a = simplex.points[1]; // most recently added
    let b = simplex.points[0];

    let ab = b - a;
    let ao = -a;

    let mut dir = ab.cross(ao).cross(ab);
    if dir.length_squared() < 1e-12 {
        // Origin lies on the segment line
        dir = Vec3::new(-ab.y, ab.x, 0.0);
    }
    *direction = dir;
}

/// Triangle: reduce to the closest edge or steer along the face normal.
fn triangle_case(simplex: &mut Simplex, direction: &mut Vec3) {
    let a = simplex.points[2]; // most recently added
    let b = simplex.points[1];
    let c = simplex.points[0];

    let ab = b - a;
    let ac = c - a;
    let ao = -a;
    let abc = ab.cross(ac);

    if abc.cross(ac).dot(ao) > 0.0 {
        // Origin is outside edge AC
        simplex.points[1] = a;
        simplex.len = 2;
        *direction = ac.cross(ao).cross(ac);
    } else if ab.cross(abc).dot(ao) > 0.0 {
        // Origin is outside edge AB
        simplex.points[0] = b;
        simplex.points[1] = a;
        simplex.len = 2;
        *direction = ab.cross(ao).cross(ab);
    } else if abc.dot(ao) > 0.0 {
        // Origin is above the face
        *direction = abc;
    } else {
        // Origin is below the face: flip the winding
        simplex.points[0] = b;
        simplex.points[1] = c;
        *direction = -abc;
    }
}

/// Tetrahedron: pick the face looking at the origin, or conclude containment.
fn tetrahedron_case(simplex: &mut Simplex, direction: &mut Vec3) -> bool {
    let a = simplex.points[3]; // most recently added
    let b = simplex.points[2];
    let c = simplex.points[1];
    let d = simplex.points[0];

    let ab = b - a;
    let ac = c - a;
    let ad = d - a;
    let ao = -a;

    let abc = ab.cross(ac);
    let acd = ac.cross(ad);
    let adb = ad.cross(ab);

    if abc.dot(ao) > 0.0 {
        simplex.points[0] = c;
        simplex.points[1] = b;
        simplex.points[2] = a;
        simplex.len = 3;
        *direction = abc;
        return false;
    }

    if acd.dot(ao) > 0.0 {
        simplex.points[0] = d;
        simplex.points[1] = c;
        simplex.points[2] = a;
        simplex.len = 3;
        *direction = acd;
        return false;
    }

    if adb.dot(ao) > 0.0 {
        simplex.points[0] = b;
        simplex.points[1] = d;
        simplex.points[2] = a;
        simplex.len = 3;
        *direction = adb;
        return false;
    }

    // No face separates the origin from the tetrahedron interior
    true
}
