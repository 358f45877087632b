//! Ordered layer registry: creation, removal, reordering, aggregation.
//!
//! Owns every Layer and its particles. The systems reference layers by
//! name only, so dropping a layer must be followed by purging its
//! per-layer entries from the force and collision systems.

use std::collections::HashMap;

use crate::core::log;
use crate::domain::particle::Particle;
use crate::layers::layer::Layer;

#[derive(Default)]
pub struct LayerRegistry {
    layers: Vec<Layer>,
    lookup: HashMap<String, usize>,
    active: String,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            lookup: HashMap::new(),
            active: String::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.layers.iter().map(|layer| layer.name().to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Layer> {
        self.layers.iter_mut()
    }

    /// Append a layer; the first one becomes active. Callers validate the
    /// name (non-empty, unique) beforehand.
    pub fn create(&mut self, name: &str) -> &mut Layer {
        if self.layers.is_empty() {
            self.active = name.to_string();
        }

        self.layers.push(Layer::new(name));
        let at = self.layers.len() - 1;
        self.lookup.insert(name.to_string(), at);
        &mut self.layers[at]
    }

    /// Remove a layer and renumber lookup entries above the freed slot.
    pub fn drop_layer(&mut self, name: &str) -> Option<usize> {
        let Some(&at) = self.lookup.get(name) else {
            log::error(&format!("cannot find layer: {}", name));
            return None;
        };

        self.layers.remove(at);
        self.lookup.remove(name);
        for slot in self.lookup.values_mut() {
            if *slot > at {
                *slot -= 1;
            }
        }

        Some(at)
    }

    /// Shift a layer to a new position in the draw order.
    pub fn change_order(&mut self, name: &str, to_index: usize) {
        let Some(&from) = self.lookup.get(name) else {
            return;
        };
        if to_index >= self.layers.len() || from == to_index {
            return;
        }

        let layer = self.layers.remove(from);
        self.layers.insert(to_index, layer);

        // Every slot between from and to shifted by one.
        for (at, layer) in self.layers.iter().enumerate() {
            self.lookup.insert(layer.name().to_string(), at);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Layer> {
        let &at = self.lookup.get(name)?;
        self.layers.get(at)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Layer> {
        let &at = self.lookup.get(name)?;
        self.layers.get_mut(at)
    }

    pub fn get_by_index(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn get_by_index_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    // === Active layer ===

    pub fn set_active(&mut self, name: &str) -> bool {
        if !self.lookup.contains_key(name) {
            log::warn(&format!("cannot find layer: {}", name));
            return false;
        }
        self.active = name.to_string();
        true
    }

    pub fn active_name(&self) -> &str {
        &self.active
    }

    pub fn active_mut(&mut self) -> Option<&mut Layer> {
        let &at = self.lookup.get(&self.active)?;
        self.layers.get_mut(at)
    }

    // === Bulk operations ===

    pub fn set_visible(&mut self, name: &str, visible: bool) {
        if let Some(layer) = self.get_mut(name) {
            layer.visible = visible;
        }
    }

    pub fn clear_layer(&mut self, name: &str) -> bool {
        match self.get_mut(name) {
            Some(layer) => {
                layer.clear();
                true
            }
            None => {
                log::error(&format!("cannot clear layer: {}", name));
                false
            }
        }
    }

    pub fn clear_all(&mut self) {
        for layer in self.layers.iter_mut() {
            layer.clear();
        }
    }

    pub fn total_particle_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.particles.len()).sum()
    }

    // === Aggregation ===

    /// Visible particles of visible layers, in layer order.
    pub fn visible_particles(&self) -> Vec<&Particle> {
        self.particles_where(None, None)
    }

    /// Same, restricted by include/exclude layer-name lists.
    pub fn particles_where(
        &self,
        include: Option<&[String]>,
        exclude: Option<&[String]>,
    ) -> Vec<&Particle> {
        let mut out = Vec::new();

        for layer in self.layers.iter() {
            if !layer.visible {
                continue;
            }

            let name = layer.name();
            if let Some(include) = include {
                if !include.iter().any(|n| n == name) {
                    continue;
                }
            }
            if let Some(exclude) = exclude {
                if exclude.iter().any(|n| n == name) {
                    continue;
                }
            }

            out.extend(layer.particles.iter().filter(|p| p.is_visible()));
        }

        out
    }
}
