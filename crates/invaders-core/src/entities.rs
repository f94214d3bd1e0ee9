//! Entity records exchanged with the external tick loop.
//!
//! Plain `Copy` data with no interior pointers; each record is
//! exclusively owned by whatever slot table the game loop maintains.
//! Transition rules live with the loop, not here — this module only
//! guards the value domains.

use serde::{Deserialize, Serialize};

use crate::constants::{COOLDOWN_MAX, COOLDOWN_SHIFT, ENEMY_STATE_MASK, NO_ENEMY};
use crate::enums::{EnemyState, PlayerState};
use crate::error::RangeError;
use crate::packed::{decode_enemy_state, encode_enemy_state};
use crate::types::Vector;

/// One hostile unit.
///
/// State and cooldown live in a single packed byte (see
/// [`crate::packed`]); the accessors keep the two fields from ever
/// clobbering each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vector,
    packed: u8,
}

impl Enemy {
    /// A freshly spawned enemy: `Alive`, cooldown 0.
    pub fn spawn(pos: Vector) -> Self {
        Self { pos, packed: 0 }
    }

    /// Builds an enemy from logical parts. Fails if `cooldown` exceeds
    /// the 6-bit domain.
    pub fn from_parts(pos: Vector, state: EnemyState, cooldown: u8) -> Result<Self, RangeError> {
        Ok(Self {
            pos,
            packed: encode_enemy_state(state, cooldown)?,
        })
    }

    /// Rebuilds an enemy from a transferred packed byte. Total: every
    /// byte value is a legal packing.
    pub fn from_packed(pos: Vector, byte: u8) -> Self {
        Self { pos, packed: byte }
    }

    /// The raw packed state byte, suitable for compact transfer.
    pub fn packed_state(self) -> u8 {
        self.packed
    }

    pub fn state(self) -> EnemyState {
        decode_enemy_state(self.packed).0
    }

    pub fn cooldown(self) -> u8 {
        decode_enemy_state(self.packed).1
    }

    /// Replaces the state bits, leaving the cooldown untouched.
    pub fn set_state(&mut self, state: EnemyState) {
        self.packed = (self.packed & !ENEMY_STATE_MASK) | state.bits();
    }

    /// Replaces the cooldown field, leaving the state untouched.
    /// Rejects values outside the 6-bit domain instead of truncating;
    /// a rejected write leaves the record unchanged.
    pub fn set_cooldown(&mut self, cooldown: u8) -> Result<(), RangeError> {
        if cooldown > COOLDOWN_MAX {
            return Err(RangeError::Cooldown(cooldown));
        }
        self.packed = (self.packed & ENEMY_STATE_MASK) | (cooldown << COOLDOWN_SHIFT);
        Ok(())
    }

    /// One tick of cooldown, saturating at 0.
    pub fn tick_cooldown(&mut self) {
        let (state, cooldown) = decode_enemy_state(self.packed);
        self.packed = state.bits() | (cooldown.saturating_sub(1) << COOLDOWN_SHIFT);
    }

    /// Whether the slot is reclaimable.
    pub fn is_dead(self) -> bool {
        self.state().is_terminal()
    }
}

/// The player ship.
///
/// One instance for the whole session by game design; reset on respawn,
/// never destroyed until the session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vector,
    /// Byte-wide, never bit-packed; [`PlayerState`] makes out-of-range
    /// values unrepresentable.
    pub state: PlayerState,
}

impl Player {
    pub fn spawn(pos: Vector) -> Self {
        Self {
            pos,
            state: PlayerState::Alive,
        }
    }
}

/// One in-flight projectile and its enemy-slot association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vector,
    /// Raw slot index; `NO_ENEMY` when unassociated.
    enemy: u8,
}

impl Bullet {
    /// A bullet with no enemy association (e.g. fired by the player at
    /// nothing in particular).
    pub fn unowned(pos: Vector) -> Self {
        Self {
            pos,
            enemy: NO_ENEMY,
        }
    }

    /// A bullet credited to `slot`. Fails if `slot` is the reserved
    /// sentinel.
    pub fn from_enemy(pos: Vector, slot: u8) -> Result<Self, RangeError> {
        let mut bullet = Self::unowned(pos);
        bullet.bind(Some(slot))?;
        Ok(bullet)
    }

    /// Sets or clears the association. `None` stores the `NO_ENEMY`
    /// sentinel; binding the sentinel value itself is rejected. No
    /// liveness check against the enemy table happens here — that is
    /// the slot table owner's job.
    pub fn bind(&mut self, slot: Option<u8>) -> Result<(), RangeError> {
        self.enemy = match slot {
            Some(NO_ENEMY) => return Err(RangeError::EnemyIndex(NO_ENEMY)),
            Some(slot) => slot,
            None => NO_ENEMY,
        };
        Ok(())
    }

    /// The associated enemy slot, `None` for an unowned bullet.
    pub fn enemy_slot(self) -> Option<u8> {
        (self.enemy != NO_ENEMY).then_some(self.enemy)
    }

    /// The raw association byte (sentinel included), for compact
    /// transfer.
    pub fn raw_enemy(self) -> u8 {
        self.enemy
    }
}

impl Default for Bullet {
    fn default() -> Self {
        Self::unowned(Vector::ZERO)
    }
}
