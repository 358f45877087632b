//! A layer: named, independently visible particle list plus its cell index.
//!
//! Invariant: `index.get(r, c) == Some(i)` iff `particles[i]` was keyed
//! from its own pixel position; the index is updated in the same call as
//! every particle insert/remove.

use crate::domain::particle::Particle;
use crate::spatial::grid::GridOptions;
use crate::spatial::index::CellIndex;
use crate::systems::{SystemFlags, SystemKind, SYS_NONE};

pub struct Layer {
    name: String,
    pub particles: Vec<Particle>,
    index: CellIndex,
    pub visible: bool,
    systems: SystemFlags,
}

impl Layer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            particles: Vec::new(),
            index: CellIndex::new(),
            visible: true,
            systems: SYS_NONE,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    // === System registration ===

    /// Register or unregister in one call.
    pub fn apply(&mut self, system: SystemKind, apply: bool) {
        if apply {
            self.register(system);
        } else {
            self.unregister(system);
        }
    }

    /// Idempotent: registering an already-registered system changes nothing.
    pub fn register(&mut self, system: SystemKind) {
        self.systems |= system.flag();
    }

    /// Returns false (and does nothing) when the system was not registered.
    pub fn unregister(&mut self, system: SystemKind) -> bool {
        if !self.is_registered(system) {
            return false;
        }
        self.systems &= !system.flag();
        true
    }

    #[inline]
    pub fn is_registered(&self, system: SystemKind) -> bool {
        self.systems & system.flag() != 0
    }

    // === Cell authoring ===

    /// Paint a cell: create a particle on an empty key, otherwise rewrite
    /// the color in place (only when it actually changed).
    pub fn set_cell(&mut self, grid: &GridOptions, row: i32, column: i32, color: &str) {
        match self.index.get(row, column) {
            Some(slot) => {
                let cell = &mut self.particles[slot];
                if cell.color() != color {
                    cell.set_color(color);
                }
            }
            None => {
                let origin = grid.cell_origin(row, column);
                self.particles.push(Particle::new(origin, grid.cell_vec(), color));
                self.index.set(row, column, self.particles.len() - 1);
            }
        }
    }

    /// Erase a cell. O(1) swap-delete: the last particle takes the freed
    /// slot and its index key is recomputed from its own pixel position.
    pub fn remove_cell(&mut self, grid: &GridOptions, row: i32, column: i32) -> bool {
        let Some(slot) = self.index.remove(row, column) else {
            return false;
        };

        let last = self.particles.len() - 1;
        if slot != last {
            self.particles.swap(slot, last);
            let moved = self.particles[slot].position();
            let (moved_row, moved_column) = grid.cell_at(moved.x, moved.y);
            self.index.set(moved_row, moved_column, slot);
        }
        self.particles.pop();
        true
    }

    /// Slot of the particle keyed at (row, column), if any.
    #[inline]
    pub fn cell_index(&self, row: i32, column: i32) -> Option<usize> {
        self.index.get(row, column)
    }

    /// Drop every particle and index entry.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.index.clear();
    }
}
