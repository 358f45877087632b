//! Named constant forces and their per-layer assignments.
//!
//! A force is a grid-unit vector applied once per fixed step. Layers
//! reference forces by name, so removing a force simply makes its
//! assignments resolve to nothing.

use std::collections::HashMap;

use crate::core::log;
use crate::domain::particle::Particle;
use crate::domain::vec2::Vec2;

#[derive(Clone, Debug)]
pub struct Force {
    pub name: String,
    pub intensity: Vec2,
}

#[derive(Default)]
pub struct ForceSystem {
    forces: Vec<Force>,
    layer_forces: HashMap<String, Vec<String>>,
}

impl ForceSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a force, or overwrite the intensity of an existing name.
    pub fn upsert_force(&mut self, name: &str, intensity: Vec2) {
        match self.forces.iter_mut().find(|f| f.name == name) {
            Some(force) => force.intensity = intensity,
            None => self.forces.push(Force {
                name: name.to_string(),
                intensity,
            }),
        }
    }

    /// Delete a force by name; false when it never existed.
    pub fn remove_force(&mut self, name: &str) -> bool {
        let Some(at) = self.forces.iter().position(|f| f.name == name) else {
            log::warn(&format!("cannot find force with name: {}", name));
            return false;
        };
        self.forces.remove(at);
        true
    }

    pub fn force_by_name(&self, name: &str) -> Option<&Force> {
        self.forces.iter().find(|f| f.name == name)
    }

    /// Assign a force to a layer. Duplicate assignments are a no-op.
    pub fn add_force_to_layer(&mut self, layer: &str, force_name: &str) {
        if self.force_by_name(force_name).is_none() {
            log::warn(&format!("cannot find force with name: {}", force_name));
            return;
        }

        let assigned = self.layer_forces.entry(layer.to_string()).or_default();
        if !assigned.iter().any(|n| n == force_name) {
            assigned.push(force_name.to_string());
        }
    }

    pub fn remove_force_from_layer(&mut self, layer: &str, force_name: &str) {
        if let Some(assigned) = self.layer_forces.get_mut(layer) {
            assigned.retain(|n| n != force_name);
        }
    }

    pub fn layer_forces(&self, layer: &str) -> &[String] {
        self.layer_forces
            .get(layer)
            .map(|names| names.as_slice())
            .unwrap_or(&[])
    }

    /// Sum of every force assigned to the layer; zero when none.
    pub fn layer_force_result(&self, layer: &str) -> Vec2 {
        self.layer_forces(layer)
            .iter()
            .filter_map(|name| self.force_by_name(name))
            .fold(Vec2::zero(), |acc, force| acc + force.intensity)
    }

    /// Candidate position after one fixed step: grid units scale by the
    /// particle's pixel size. Does not touch the particle - the caller
    /// commits only after collision checks pass.
    pub fn apply_to_particle(&self, force: Vec2, particle: &Particle) -> Vec2 {
        let size = particle.size();
        particle.position() + Vec2::new(size.x * force.x, size.y * force.y)
    }

    /// Purge a removed layer's assignments.
    pub fn forget_layer(&mut self, layer: &str) {
        self.layer_forces.remove(layer);
    }

    /// Drop every force; layer assignments stay and resolve to nothing.
    pub fn clear(&mut self) {
        self.forces.clear();
    }
}
