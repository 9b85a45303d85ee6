//! Console demo: a few spheres of different bounciness dropped onto a box.

use rigidsim::prelude::*;

fn main() -> Result<(), WorldError> {
    let mut world = World::new();

    // Static ground, top face at y = 0
    world.create_body(
        BodyDef::default()
            .with_shape(Shape::cuboid(Vec3::new(10.0, 0.5, 10.0)))
            .with_position(Vec3::new(0.0, -0.5, 0.0)),
    )?;

    // Three spheres with increasing restitution
    let mut spheres = Vec::new();
    for (i, restitution) in [0.1, 0.5, 0.9].into_iter().enumerate() {
        let x = -2.0 + 2.0 * i as f32;
        let id = world.create_body(
            BodyDef::default()
                .with_shape(Shape::sphere(0.5))
                .with_position(Vec3::new(x, 4.0, 0.0))
                .with_mass(1.0)
                .with_restitution(restitution),
        )?;
        spheres.push((id, restitution));
    }

    // A couple of line markers; these are drawn by a renderer but never
    // take part in collision detection
    world.create_body(
        BodyDef::default().with_shape(Shape::line(
            Vec3::new(-10.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
        )),
    )?;

    let dt = 1.0 / 60.0;
    let total_time = 4.0;
    let steps = (total_time / dt) as usize;

    println!("Simulating {} spheres for {}s...", spheres.len(), total_time);
    for frame in 0..steps {
        world.step(dt, 4)?;

        if frame % 30 == 0 {
            print!("t={:4.2}s  ", frame as f32 * dt);
            for (id, restitution) in &spheres {
                let y = world.body(*id).map(|b| b.position.y).unwrap_or(0.0);
                print!("e={:.1}: y={:6.3}  ", restitution, y);
            }
            println!();
        }
    }

    println!("\nFinal heights (ball radius 0.5, so ~0.5 means at rest):");
    for (id, restitution) in &spheres {
        let pos = world.body(*id).map(|b| b.position).unwrap_or(Vec3::ZERO);
        println!("  restitution {:.1}: y = {:.3}", restitution, pos.y);
    }

    Ok(())
}
