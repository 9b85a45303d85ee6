use crate::collision::Contact;
use crate::dynamics::Body;
use crate::math::Vec3;

/// Tuning constants for the contact solver.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Number of velocity solver iterations per substep
    pub velocity_iterations: usize,
    /// Baumgarte stabilization coefficient
    pub baumgarte: f32,
    /// Penetration below this is ignored by the velocity pass
    pub slop: f32,
    /// Restitution applies only when the closing speed exceeds this,
    /// suppressing jitter at rest
    pub restitution_threshold: f32,
    /// Number of regenerate-and-project iterations after position integration
    pub position_iterations: usize,
    /// Fraction of the remaining penetration corrected per projection
    pub position_correction: f32,
    /// Penetration below this is ignored by the position pass
    pub position_slop: f32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            velocity_iterations: 12,
            baumgarte: 0.3,
            slop: 0.003,
            restitution_threshold: 0.5,
            position_iterations: 10,
            position_correction: 0.2,
            position_slop: 0.005,
        }
    }
}

/// Resolves contact velocities with sequential impulses.
///
/// Iterates all contacts in order, `velocity_iterations` times: each contact
/// reads the velocities already updated by the contacts before it in the same
/// iteration (Gauss-Seidel).
pub fn solve_velocities(contacts: &[Contact], bodies: &mut [Body], dt: f32, config: &SolverConfig) {
    for _ in 0..config.velocity_iterations {
        for contact in contacts {
            let (body_a, body_b) =
                get_two_mut(bodies, contact.body_a.index(), contact.body_b.index());
            solve_contact_velocity(contact, body_a, body_b, dt, config);
        }
    }
}

fn solve_contact_velocity(
    contact: &Contact,
    body_a: &mut Body,
    body_b: &mut Body,
    dt: f32,
    config: &SolverConfig,
) {
    let inv_mass_sum = body_a.inverse_mass + body_b.inverse_mass;
    if inv_mass_sum == 0.0 {
        return;
    }

    let normal = contact.normal.normalize_or(Vec3::Y);
    let relative_velocity = body_b.velocity - body_a.velocity;
    let normal_velocity = relative_velocity.dot(normal);

    let penetration = (contact.penetration - config.slop).max(0.0);
    if normal_velocity > 0.0 && penetration <= 0.0 {
        // Already separating and out of the slop band
        return;
    }

    let restitution = if normal_velocity < -config.restitution_threshold {
        contact.restitution
    } else {
        0.0
    };

    let bias = if dt > 0.0 {
        config.baumgarte * penetration / dt
    } else {
        0.0
    };

    let normal_impulse =
        ((-(1.0 + restitution) * normal_velocity - bias) / inv_mass_sum).max(0.0);

    body_a.velocity -= normal * (normal_impulse * body_a.inverse_mass);
    body_b.velocity += normal * (normal_impulse * body_b.inverse_mass);

    // Friction against the post-impulse relative velocity, clamped to the
    // Coulomb cone of this iteration's normal impulse
    let relative_velocity = body_b.velocity - body_a.velocity;
    let tangent = relative_velocity - normal * relative_velocity.dot(normal);
    if tangent.length_squared() > 1e-12 {
        let tangent = tangent.normalize_or(Vec3::ZERO);
        let max_friction = contact.friction * normal_impulse;
        let tangent_impulse =
            (-relative_velocity.dot(tangent) / inv_mass_sum).clamp(-max_friction, max_friction);

        body_a.velocity -= tangent * (tangent_impulse * body_a.inverse_mass);
        body_b.velocity += tangent * (tangent_impulse * body_b.inverse_mass);
    }
}

/// One projection sweep over the contacts: bodies are shifted apart along the
/// contact normal by a fraction of the remaining penetration, split by
/// inverse mass.
///
/// The world reruns contact generation between sweeps so each projection sees
/// the moved geometry.
pub fn solve_positions(contacts: &[Contact], bodies: &mut [Body], config: &SolverConfig) {
    for contact in contacts {
        let (body_a, body_b) = get_two_mut(bodies, contact.body_a.index(), contact.body_b.index());

        let inv_mass_sum = body_a.inverse_mass + body_b.inverse_mass;
        if inv_mass_sum == 0.0 {
            continue;
        }

        let penetration = (contact.penetration - config.position_slop).max(0.0);
        if penetration <= 0.0 {
            continue;
        }

        let magnitude = config.position_correction * penetration / inv_mass_sum;
        body_a.position -= contact.normal * (magnitude * body_a.inverse_mass);
        body_b.position += contact.normal * (magnitude * body_b.inverse_mass);
    }
}

/// Gets mutable references to two distinct slice elements.
fn get_two_mut(slice: &mut [Body], a: usize, b: usize) -> (&mut Body, &mut Body) {
    assert!(a != b);
    if a < b {
        let (left, right) = slice.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = slice.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::BodyId;
    use crate::dynamics::BodyDef;
    use crate::geometry::Shape;

    fn dynamic_sphere(position: Vec3, velocity: Vec3) -> Body {
        Body::from_def(
            BodyDef::default()
                .with_shape(Shape::sphere(1.0))
                .with_position(position)
                .with_velocity(velocity)
                .with_mass(1.0),
        )
    }

    fn head_on_contact(restitution: f32, friction: f32) -> Contact {
        Contact {
            body_a: BodyId::new(0),
            body_b: BodyId::new(1),
            normal: Vec3::X,
            point: Vec3::ZERO,
            penetration: 0.0,
            friction,
            restitution,
        }
    }

    #[test]
    fn test_elastic_head_on_reversal() {
        let mut bodies = vec![
            dynamic_sphere(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)),
            dynamic_sphere(Vec3::new(1.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)),
        ];
        let contacts = vec![head_on_contact(1.0, 0.0)];
        let config = SolverConfig::default();

        solve_velocities(&contacts, &mut bodies, 1.0 / 240.0, &config);

        assert!((bodies[0].velocity.x + 1.0).abs() < 1e-4);
        assert!((bodies[1].velocity.x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_inelastic_head_on_stops() {
        // Restitution zero: the pair ends with no relative normal velocity
        let mut bodies = vec![
            dynamic_sphere(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)),
            dynamic_sphere(Vec3::new(1.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)),
        ];
        let contacts = vec![head_on_contact(0.0, 0.0)];
        let config = SolverConfig::default();

        solve_velocities(&contacts, &mut bodies, 1.0 / 240.0, &config);

        let relative = bodies[1].velocity.x - bodies[0].velocity.x;
        assert!(relative.abs() < 1e-4);
    }

    #[test]
    fn test_static_pair_untouched() {
        let mut bodies = vec![
            Body::from_def(BodyDef::default()),
            Body::from_def(BodyDef::default().with_position(Vec3::new(1.0, 0.0, 0.0))),
        ];
        let contacts = vec![head_on_contact(0.5, 0.5)];
        let config = SolverConfig::default();

        solve_velocities(&contacts, &mut bodies, 1.0 / 240.0, &config);
        solve_positions(&contacts, &mut bodies, &config);

        assert_eq!(bodies[0].velocity, Vec3::ZERO);
        assert_eq!(bodies[0].position, Vec3::ZERO);
        assert_eq!(bodies[1].position, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_separating_contact_skipped() {
        let mut bodies = vec![
            dynamic_sphere(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)),
            dynamic_sphere(Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)),
        ];
        let contacts = vec![head_on_contact(1.0, 0.0)];
        let config = SolverConfig::default();

        solve_velocities(&contacts, &mut bodies, 1.0 / 240.0, &config);

        assert_eq!(bodies[0].velocity, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(bodies[1].velocity, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_friction_damps_sliding() {
        // B slides along +Z across the contact plane while closing along X
        let mut bodies = vec![
            dynamic_sphere(Vec3::new(-1.0, 0.0, 0.0), Vec3::ZERO),
            dynamic_sphere(Vec3::new(1.0, 0.0, 0.0), Vec3::new(-2.0, 0.0, 1.0)),
        ];
        let contacts = vec![head_on_contact(0.0, 0.8)];
        let config = SolverConfig::default();

        solve_velocities(&contacts, &mut bodies, 1.0 / 240.0, &config);

        let tangential = bodies[1].velocity.z - bodies[0].velocity.z;
        assert!(tangential.abs() < 1.0, "sliding not damped: {}", tangential);
    }

    #[test]
    fn test_frictionless_preserves_tangential_velocity() {
        let mut bodies = vec![
            dynamic_sphere(Vec3::new(-1.0, 0.0, 0.0), Vec3::ZERO),
            dynamic_sphere(Vec3::new(1.0, 0.0, 0.0), Vec3::new(-2.0, 0.0, 1.0)),
        ];
        let contacts = vec![head_on_contact(0.0, 0.0)];
        let config = SolverConfig::default();

        solve_velocities(&contacts, &mut bodies, 1.0 / 240.0, &config);

        // The Z components never change without friction
        assert!((bodies[1].velocity.z - 1.0).abs() < 1e-5);
        assert!(bodies[0].velocity.z.abs() < 1e-5);
    }

    #[test]
    fn test_position_projection_splits_by_mass() {
        // A is static, so only B moves, along +normal
        let mut bodies = vec![
            Body::from_def(BodyDef::default().with_shape(Shape::sphere(1.0))),
            dynamic_sphere(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO),
        ];
        let contact = Contact {
            penetration: 0.105,
            ..head_on_contact(0.0, 0.0)
        };
        let config = SolverConfig::default();

        solve_positions(&[contact], &mut bodies, &config);

        assert_eq!(bodies[0].position, Vec3::ZERO);
        // 0.2 * (0.105 - 0.005) = 0.02 of correction, all on B
        assert!((bodies[1].position.x - 1.02).abs() < 1e-5);
    }

    #[test]
    fn test_position_projection_ignores_slop_band() {
        let mut bodies = vec![
            dynamic_sphere(Vec3::new(-1.0, 0.0, 0.0), Vec3::ZERO),
            dynamic_sphere(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO),
        ];
        let contact = Contact {
            penetration: 0.004,
            ..head_on_contact(0.0, 0.0)
        };
        let config = SolverConfig::default();

        solve_positions(&[contact], &mut bodies, &config);

        assert_eq!(bodies[0].position, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(bodies[1].position, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_no_energy_injected_without_restitution() {
        // Property: with zero restitution and friction, the velocity pass
        // never increases kinetic energy
        let mut bodies = vec![
            dynamic_sphere(Vec3::new(-0.9, 0.0, 0.0), Vec3::new(0.3, 0.0, 0.0)),
            dynamic_sphere(Vec3::new(0.9, 0.0, 0.0), Vec3::new(-0.3, 0.0, 0.0)),
        ];
        let contact = Contact {
            penetration: 0.2,
            ..head_on_contact(0.0, 0.0)
        };
        let config = SolverConfig::default();

        let energy_before: f32 = bodies
            .iter()
            .map(|b| 0.5 * b.mass * b.velocity.length_squared())
            .sum();

        solve_velocities(&[contact], &mut bodies, 1.0 / 240.0, &config);

        let energy_after: f32 = bodies
            .iter()
            .map(|b| 0.5 * b.mass * b.velocity.length_squared())
            .sum();

        assert!(energy_after <= energy_before + 1e-6);
    }
}
