//! A particle is one grid cell: the atomic drawable and simulatable unit.
//!
//! `home` is fixed at creation and is where loop resets and `restore_home`
//! return the particle to. A "destroyed" particle is soft-deleted: it goes
//! invisible and frozen but stays resident until a loop reset or a clear.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::color::{parse_color_rgba, Rgba};
use crate::domain::vec2::Vec2;

static NEXT_PARTICLE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug)]
pub struct Particle {
    id: u64,
    position: Vec2,
    size: Vec2,
    color: String,
    home: Vec2,
    freezed: bool,
    visible: bool,
}

impl Particle {
    pub fn new(position: Vec2, size: Vec2, color: &str) -> Self {
        Self {
            id: NEXT_PARTICLE_ID.fetch_add(1, Ordering::Relaxed),
            position,
            size,
            color: color.to_string(),
            home: position,
            freezed: false,
            visible: true,
        }
    }

    /// Process-unique, stable for the particle's lifetime. Used to skip
    /// self-collision.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn home(&self) -> Vec2 {
        self.home
    }

    #[inline]
    pub fn is_freezed(&self) -> bool {
        self.freezed
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Normalized RGBA for the renderer.
    pub fn parsed_color(&self) -> Rgba {
        parse_color_rgba(&self.color)
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    pub fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }

    pub fn set_freeze(&mut self, freeze: bool) {
        self.freezed = freeze;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Move the particle back to its creation-time position.
    pub fn restore_home(&mut self) -> Vec2 {
        self.position = self.home;
        self.home
    }
}
