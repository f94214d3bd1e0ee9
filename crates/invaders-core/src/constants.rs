//! Bit-layout and value-domain constants for the entity records.

/// Bits occupied by the state field in the packed enemy byte.
pub const ENEMY_STATE_BITS: u32 = 2;

/// Mask selecting the state field (bits 0–1) of the packed enemy byte.
pub const ENEMY_STATE_MASK: u8 = 0b0000_0011;

/// Bits occupied by the cooldown field in the packed enemy byte.
pub const COOLDOWN_BITS: u32 = 6;

/// Left shift placing the cooldown field above the state bits.
pub const COOLDOWN_SHIFT: u32 = ENEMY_STATE_BITS;

/// Largest representable cooldown value (6-bit field).
pub const COOLDOWN_MAX: u8 = (1 << COOLDOWN_BITS) - 1;

/// Reserved bullet association value meaning "no enemy".
///
/// The maximum representable index is sacrificed as the sentinel, so
/// legal enemy slots are `0..=254`.
pub const NO_ENEMY: u8 = u8::MAX;

/// Number of addressable enemy slots (the sentinel is not a slot).
pub const MAX_ENEMY_SLOTS: usize = NO_ENEMY as usize;

/// Smallest playfield coordinate representable by the active profile.
pub const COORD_MIN: i32 = crate::types::Coord::MIN as i32;

/// Largest playfield coordinate representable by the active profile.
pub const COORD_MAX: i32 = crate::types::Coord::MAX as i32;
