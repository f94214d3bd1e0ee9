//! Entity layout for the invaders game core.
//!
//! This crate defines the vocabulary shared with the game loop: entity
//! records, their state enumerations, the packed encoding of enemy
//! state, and the value-domain constants. It owns representation only;
//! movement, collision, spawning, rendering, and input live in external
//! collaborators that read and write these records each tick.

pub mod constants;
pub mod entities;
pub mod enums;
pub mod error;
pub mod packed;
pub mod types;
