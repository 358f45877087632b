//! One fixed simulation step.
//!
//! Candidate positions come from the force system; the collision system
//! may veto or transform them. Collider boxes are snapshotted per layer
//! before that layer's particles move, so a layer always collides
//! against its opponents' pre-step positions.

use crate::systems::collision::{Collider, CollisionOptions, CollisionSystem};
use crate::systems::SystemKind;

use super::EngineCore;

pub(super) fn fixed_step(core: &mut EngineCore, elapsed_ms: f64) {
    core.looper.update(elapsed_ms);

    let grid = core.grid;
    let bounds = grid.pixel_bounds();

    for at in 0..core.layers.len() {
        let Some(layer) = core.layers.get_by_index(at) else {
            continue;
        };
        if !layer.visible || !layer.is_registered(SystemKind::Force) {
            continue;
        }

        let name = layer.name().to_string();
        let collision_enabled = layer.is_registered(SystemKind::Collision);

        let force_result = core.forces.layer_force_result(&name);

        // A collision-enabled layer without options configured behaves as
        // if collision were off.
        let options: Option<CollisionOptions> = if collision_enabled {
            core.collisions.layer_options(&name).cloned()
        } else {
            None
        };

        let collider_boxes: Vec<(u64, Collider)> = match options.as_ref() {
            Some(options) if !options.colliders.is_empty() => core
                .layers
                .particles_where(Some(&options.colliders), None)
                .iter()
                .map(|p| {
                    (
                        p.id(),
                        Collider {
                            position: p.position(),
                            size: p.size(),
                        },
                    )
                })
                .collect(),
            _ => Vec::new(),
        };

        let Some(layer) = core.layers.get_by_index_mut(at) else {
            continue;
        };

        'particles: for particle in layer.particles.iter_mut() {
            if particle.is_freezed() {
                continue;
            }

            let candidate = core.forces.apply_to_particle(force_result, particle);

            if let Some(options) = options.as_ref() {
                let moved = Collider {
                    position: candidate,
                    size: particle.size(),
                };

                if options.stop_on_bounds {
                    let out = CollisionSystem::out_of_bounds(&moved, &bounds);
                    if out.out {
                        CollisionSystem::resolve_bounds_collision(
                            particle, options, &out, candidate, &bounds,
                        );
                        continue 'particles;
                    }
                }

                for (id, other) in collider_boxes.iter() {
                    if *id == particle.id() {
                        continue;
                    }
                    if CollisionSystem::is_colliding(&moved, other) {
                        CollisionSystem::resolve_particle_collision(particle, options);
                        continue 'particles;
                    }
                }
            }

            particle.set_position(candidate.x, candidate.y);
        }
    }

    core.looper.check_loop(&mut core.layers);
}
