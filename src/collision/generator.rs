use crate::collision::contact::{combined_friction, combined_restitution, BodyId, Contact};
use crate::collision::narrow_phase::{
    collide_box_box, collide_sphere_box, collide_sphere_sphere, ContactPoint,
};
use crate::dynamics::Body;
use crate::geometry::Shape;

/// Runs narrow-phase detection over every unordered body pair and appends the
/// resulting contacts to `contacts` in pair order.
///
/// Pairs of two static bodies and pairs involving a visual-only line shape
/// are skipped. The fixed `(i, j)` iteration order with `i < j` is what makes
/// the Gauss-Seidel solve deterministic.
pub fn generate_contacts(bodies: &[Body], contacts: &mut Vec<Contact>) {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let a = &bodies[i];
            let b = &bodies[j];

            if a.is_static() && b.is_static() {
                continue;
            }

            if let Some(point) = collide_pair(a, b) {
                contacts.push(Contact {
                    body_a: BodyId::new(i as u32),
                    body_b: BodyId::new(j as u32),
                    normal: point.normal,
                    point: point.point,
                    penetration: point.penetration,
                    friction: combined_friction(a.friction, b.friction),
                    restitution: combined_restitution(a.restitution, b.restitution),
                });
            }
        }
    }
}

/// Dispatches a single pair by shape tag. The returned normal points from
/// `a` toward `b`.
fn collide_pair(a: &Body, b: &Body) -> Option<ContactPoint> {
    match (a.shape, b.shape) {
        (Shape::Sphere { radius: ra }, Shape::Sphere { radius: rb }) => {
            collide_sphere_sphere(a.position, ra, b.position, rb)
        }
        (Shape::Sphere { radius }, Shape::Box { half_extents }) => {
            collide_sphere_box(a.position, radius, b.position, b.orientation, half_extents)
        }
        (Shape::Box { half_extents }, Shape::Sphere { radius }) => {
            // Detect sphere-first, then flip the normal so it still points
            // from the lower-indexed box toward the sphere
            collide_sphere_box(b.position, radius, a.position, a.orientation, half_extents).map(
                |point| ContactPoint {
                    normal: -point.normal,
                    ..point
                },
            )
        }
        (Shape::Box { half_extents: ha }, Shape::Box { half_extents: hb }) => collide_box_box(
            a.position,
            a.orientation,
            ha,
            b.position,
            b.orientation,
            hb,
        ),
        (Shape::Line { .. }, _) | (_, Shape::Line { .. }) => None,
    }
}
