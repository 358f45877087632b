//! O(1) cell -> particle-slot lookup backing each layer.
//!
//! Removal is swap-delete: the caller moves the last particle into the
//! freed slot and rewrites that particle's key from its own pixel
//! position. List order is therefore never stable and must not be read
//! as z-order or insertion order.

use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct CellIndex {
    slots: HashMap<(i32, i32), usize>,
}

impl CellIndex {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    #[inline]
    pub fn get(&self, row: i32, column: i32) -> Option<usize> {
        self.slots.get(&(row, column)).copied()
    }

    pub fn set(&mut self, row: i32, column: i32, slot: usize) {
        self.slots.insert((row, column), slot);
    }

    pub fn remove(&mut self, row: i32, column: i32) -> Option<usize> {
        self.slots.remove(&(row, column))
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
