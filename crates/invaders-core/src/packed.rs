//! The packed enemy state byte.
//!
//! Fixed layout, low bit first:
//!
//! ```text
//! bit  7 6 5 4 3 2 | 1 0
//!      cooldown    | state
//! ```
//!
//! 2 + 6 bits cover the byte exactly, so every `u8` is a legal packed
//! value and decoding is total.

use crate::constants::{COOLDOWN_MAX, COOLDOWN_SHIFT, ENEMY_STATE_MASK};
use crate::enums::EnemyState;
use crate::error::RangeError;

/// Packs a state/cooldown pair into one byte.
///
/// Rejects `cooldown > COOLDOWN_MAX` rather than truncating. Out-of-
/// domain state values are unrepresentable in [`EnemyState`] and get
/// rejected earlier, at `EnemyState::try_from`.
pub fn encode_enemy_state(state: EnemyState, cooldown: u8) -> Result<u8, RangeError> {
    if cooldown > COOLDOWN_MAX {
        return Err(RangeError::Cooldown(cooldown));
    }
    Ok(state.bits() | (cooldown << COOLDOWN_SHIFT))
}

/// Unpacks a state/cooldown pair.
///
/// Total over all 256 byte values, and the exact inverse of
/// [`encode_enemy_state`] over its valid domain.
pub fn decode_enemy_state(byte: u8) -> (EnemyState, u8) {
    (
        EnemyState::from_bits(byte & ENEMY_STATE_MASK),
        byte >> COOLDOWN_SHIFT,
    )
}
