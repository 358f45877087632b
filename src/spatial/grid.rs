//! Grid options and pixel <-> cell conversions.
//!
//! Cells are addressed as (row, column); pixel origins are exact
//! multiples of `cell_size`, so the conversions round-trip.

use serde::Deserialize;

use crate::domain::vec2::Vec2;

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridOptions {
    pub rows: u32,
    pub columns: u32,
    pub cell_size: u32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            rows: 32,
            columns: 32,
            cell_size: 20,
        }
    }
}

impl GridOptions {
    /// Cell coordinates of a pixel position.
    #[inline]
    pub fn cell_at(&self, x: f32, y: f32) -> (i32, i32) {
        let cell = self.cell_size as f32;
        ((y / cell).floor() as i32, (x / cell).floor() as i32)
    }

    /// Pixel origin of a cell.
    #[inline]
    pub fn cell_origin(&self, row: i32, column: i32) -> Vec2 {
        let cell = self.cell_size as i32;
        Vec2::new((column * cell) as f32, (row * cell) as f32)
    }

    /// Pixel size of a cell, as a vector.
    #[inline]
    pub fn cell_vec(&self) -> Vec2 {
        Vec2::new(self.cell_size as f32, self.cell_size as f32)
    }

    /// Pixel bounds the collision system tests against.
    #[inline]
    pub fn pixel_bounds(&self) -> Bounds {
        Bounds {
            width: (self.columns * self.cell_size) as f32,
            height: (self.rows * self.cell_size) as f32,
        }
    }
}

/// Pixel-space playfield bounds.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}
