//! The three simulation systems and the per-layer capability flags.
//!
//! A layer opts into a system by carrying the matching flag; the step
//! loop only visits layers with the flag set. Registering twice is
//! idempotent, unregistering an absent flag reports failure. The systems
//! themselves are plain structs owned by the engine core - no global
//! instances.

pub mod collision;
pub mod force;
pub mod loop_system;

pub use collision::CollisionSystem;
pub use force::ForceSystem;
pub use loop_system::LoopSystem;

pub type SystemFlags = u8;

pub const SYS_NONE: SystemFlags = 0;
pub const SYS_FORCE: SystemFlags = 1 << 0;
pub const SYS_COLLISION: SystemFlags = 1 << 1;
pub const SYS_LOOP: SystemFlags = 1 << 2;

/// One of the per-layer capabilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemKind {
    Force,
    Collision,
    Loop,
}

impl SystemKind {
    #[inline]
    pub fn flag(self) -> SystemFlags {
        match self {
            SystemKind::Force => SYS_FORCE,
            SystemKind::Collision => SYS_COLLISION,
            SystemKind::Loop => SYS_LOOP,
        }
    }
}
