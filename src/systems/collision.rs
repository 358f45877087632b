//! AABB and bounds collision tests plus the response policy.
//!
//! Response precedence, identical for the bounds and the particle case:
//! destroy wins, then loop; stop-on-bounds only applies to the bounds
//! case, and the particle case falls back to freezing in place.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::particle::Particle;
use crate::domain::vec2::Vec2;
use crate::spatial::grid::Bounds;

/// Axis-aligned box used for overlap and bounds tests.
#[derive(Clone, Copy, Debug)]
pub struct Collider {
    pub position: Vec2,
    pub size: Vec2,
}

/// Resolved per-layer collision behavior.
#[derive(Clone, Debug, Default)]
pub struct CollisionOptions {
    /// Layer names this layer's particles are tested against.
    pub colliders: Vec<String>,
    pub stop_on_bounds: bool,
    pub destroy_on_collision: bool,
    pub loop_on_collision: bool,
}

/// Partial update; absent fields keep their current value.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollisionOptionsUpdate {
    pub colliders: Option<Vec<String>>,
    pub stop_on_bounds: Option<bool>,
    pub destroy_on_collision: Option<bool>,
    pub loop_on_collision: Option<bool>,
}

/// Which bounds edges a candidate position crossed.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutOfBounds {
    pub out: bool,
    pub out_left: bool,
    pub out_right: bool,
    pub out_top: bool,
    pub out_bottom: bool,
}

#[derive(Default)]
pub struct CollisionSystem {
    layer_options: HashMap<String, CollisionOptions>,
}

impl CollisionSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer_options(&self, layer: &str) -> Option<&CollisionOptions> {
        self.layer_options.get(layer)
    }

    /// Configured opposing layers; empty means no particle test runs even
    /// when the layer is collision-enabled.
    pub fn layer_colliders(&self, layer: &str) -> &[String] {
        self.layer_options
            .get(layer)
            .map(|options| options.colliders.as_slice())
            .unwrap_or(&[])
    }

    /// Merge a partial update over the stored options, field by field.
    pub fn set_layer_options(&mut self, layer: &str, update: CollisionOptionsUpdate) {
        let options = self.layer_options.entry(layer.to_string()).or_default();

        if let Some(colliders) = update.colliders {
            options.colliders = colliders;
        }
        if let Some(stop) = update.stop_on_bounds {
            options.stop_on_bounds = stop;
        }
        if let Some(destroy) = update.destroy_on_collision {
            options.destroy_on_collision = destroy;
        }
        if let Some(loop_back) = update.loop_on_collision {
            options.loop_on_collision = loop_back;
        }
    }

    /// Purge a removed layer's configuration.
    pub fn forget_layer(&mut self, layer: &str) {
        self.layer_options.remove(layer);
    }

    /// Half-open AABB overlap: touching edges do not collide.
    pub fn is_colliding(a: &Collider, b: &Collider) -> bool {
        a.position.x < b.position.x + b.size.x
            && a.position.x + a.size.x > b.position.x
            && a.position.y < b.position.y + b.size.y
            && a.position.y + a.size.y > b.position.y
    }

    /// Leading-edge bounds test: only the position is checked, so a
    /// particle can exit partially before being flagged.
    pub fn out_of_bounds(collider: &Collider, bounds: &Bounds) -> OutOfBounds {
        let out_left = collider.position.x < 0.0;
        let out_right = collider.position.x >= bounds.width;
        let out_top = collider.position.y < 0.0;
        let out_bottom = collider.position.y >= bounds.height;

        OutOfBounds {
            out: out_left || out_right || out_top || out_bottom,
            out_left,
            out_right,
            out_top,
            out_bottom,
        }
    }

    /// Particle-particle response: destroy, else loop, else freeze.
    pub fn resolve_particle_collision(particle: &mut Particle, options: &CollisionOptions) {
        if options.destroy_on_collision {
            destroy(particle);
        } else if options.loop_on_collision {
            particle.restore_home();
        } else {
            particle.set_freeze(true);
        }
    }

    /// Bounds response: destroy, else loop, else clamp the candidate to
    /// the crossed edge (far edges subtract the particle size on that
    /// axis) and freeze.
    pub fn resolve_bounds_collision(
        particle: &mut Particle,
        options: &CollisionOptions,
        out: &OutOfBounds,
        candidate: Vec2,
        bounds: &Bounds,
    ) {
        if options.destroy_on_collision {
            destroy(particle);
        } else if options.loop_on_collision {
            particle.restore_home();
        } else if options.stop_on_bounds {
            let size = particle.size();
            if out.out_bottom {
                particle.set_position(candidate.x, bounds.height - size.y);
            } else if out.out_top {
                particle.set_position(candidate.x, 0.0);
            } else if out.out_left {
                particle.set_position(0.0, candidate.y);
            } else if out.out_right {
                particle.set_position(bounds.width - size.x, candidate.y);
            }
            particle.set_freeze(true);
        }
    }
}

// Soft delete: the particle stays resident; only the loop system brings
// it back.
fn destroy(particle: &mut Particle) {
    particle.set_visible(false);
    particle.set_freeze(true);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32) -> Collider {
        Collider {
            position: Vec2::new(x, y),
            size: Vec2::new(20.0, 20.0),
        }
    }

    #[test]
    fn aabb_overlap_is_half_open() {
        let a = boxed(0.0, 0.0);
        assert!(CollisionSystem::is_colliding(&a, &boxed(19.0, 19.0)));
        // Sharing an edge is not a collision.
        assert!(!CollisionSystem::is_colliding(&a, &boxed(20.0, 0.0)));
        assert!(!CollisionSystem::is_colliding(&a, &boxed(0.0, 20.0)));
    }

    #[test]
    fn out_of_bounds_flags_the_crossed_edges() {
        let bounds = Bounds {
            width: 640.0,
            height: 640.0,
        };

        let inside = CollisionSystem::out_of_bounds(&boxed(0.0, 0.0), &bounds);
        assert!(!inside.out);

        let left = CollisionSystem::out_of_bounds(&boxed(-1.0, 10.0), &bounds);
        assert!(left.out && left.out_left && !left.out_right);

        // Leading edge only: the trailing edge may already hang outside.
        let almost_out = CollisionSystem::out_of_bounds(&boxed(639.0, 0.0), &bounds);
        assert!(!almost_out.out);
        let right = CollisionSystem::out_of_bounds(&boxed(640.0, 0.0), &bounds);
        assert!(right.out && right.out_right);
    }

    #[test]
    fn destroy_takes_precedence_over_loop() {
        let mut p = Particle::new(Vec2::new(40.0, 40.0), Vec2::new(20.0, 20.0), "#000000");
        p.set_position(100.0, 100.0);

        let options = CollisionOptions {
            destroy_on_collision: true,
            loop_on_collision: true,
            ..Default::default()
        };
        CollisionSystem::resolve_particle_collision(&mut p, &options);

        assert!(!p.is_visible());
        assert!(p.is_freezed());
        // Destroy never restored the home position.
        assert_eq!(p.position(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn loop_response_restores_home_without_freezing() {
        let mut p = Particle::new(Vec2::new(40.0, 40.0), Vec2::new(20.0, 20.0), "#000000");
        p.set_position(100.0, 100.0);

        let options = CollisionOptions {
            loop_on_collision: true,
            ..Default::default()
        };
        CollisionSystem::resolve_particle_collision(&mut p, &options);

        assert_eq!(p.position(), Vec2::new(40.0, 40.0));
        assert!(!p.is_freezed());
        assert!(p.is_visible());
    }

    #[test]
    fn bounds_stop_clamps_to_the_crossed_edge_and_freezes() {
        let bounds = Bounds {
            width: 640.0,
            height: 640.0,
        };
        let options = CollisionOptions {
            stop_on_bounds: true,
            ..Default::default()
        };

        let mut p = Particle::new(Vec2::new(0.0, 100.0), Vec2::new(20.0, 20.0), "#000000");
        let candidate = Vec2::new(-1.0, 100.0);
        let out = CollisionSystem::out_of_bounds(
            &Collider {
                position: candidate,
                size: p.size(),
            },
            &bounds,
        );
        CollisionSystem::resolve_bounds_collision(&mut p, &options, &out, candidate, &bounds);

        assert_eq!(p.position(), Vec2::new(0.0, 100.0));
        assert!(p.is_freezed());
        assert!(p.is_visible());

        // Far edge subtracts the particle size on that axis.
        let mut p = Particle::new(Vec2::new(620.0, 100.0), Vec2::new(20.0, 20.0), "#000000");
        let candidate = Vec2::new(640.0, 100.0);
        let out = CollisionSystem::out_of_bounds(
            &Collider {
                position: candidate,
                size: p.size(),
            },
            &bounds,
        );
        CollisionSystem::resolve_bounds_collision(&mut p, &options, &out, candidate, &bounds);
        assert_eq!(p.position(), Vec2::new(620.0, 100.0));
        assert!(p.is_freezed());
    }

    #[test]
    fn options_merge_field_by_field() {
        let mut system = CollisionSystem::new();

        system.set_layer_options(
            "a",
            CollisionOptionsUpdate {
                colliders: Some(vec!["walls".to_string()]),
                stop_on_bounds: Some(true),
                ..Default::default()
            },
        );
        system.set_layer_options(
            "a",
            CollisionOptionsUpdate {
                destroy_on_collision: Some(true),
                ..Default::default()
            },
        );

        let options = system.layer_options("a").unwrap();
        assert_eq!(options.colliders, vec!["walls".to_string()]);
        assert!(options.stop_on_bounds);
        assert!(options.destroy_on_collision);
        assert!(!options.loop_on_collision);

        assert!(system.layer_colliders("unconfigured").is_empty());
    }
}
