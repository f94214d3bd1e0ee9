//! State enumerations for the enemy and player records.

use serde::{Deserialize, Serialize};

use crate::constants::ENEMY_STATE_MASK;
use crate::error::RangeError;

/// Enemy behavioral state.
///
/// Exactly four variants so the discriminant fits the 2-bit field of
/// the packed enemy byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyState {
    /// In formation, advancing with the wave.
    #[default]
    Alive = 0,
    /// Diving at or firing on the player.
    Attacking = 1,
    /// Hit, playing out its death animation.
    Exploding = 2,
    /// Terminal. The spawner may reclaim the slot.
    Dead = 3,
}

impl EnemyState {
    /// The 2-bit encoding used inside the packed enemy byte.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decodes two state bits. Total: the input is masked to the state
    /// field, so any byte maps to a defined variant.
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & ENEMY_STATE_MASK {
            0 => Self::Alive,
            1 => Self::Attacking,
            2 => Self::Exploding,
            _ => Self::Dead,
        }
    }

    /// Whether the external loop may reclaim this enemy's slot.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Dead)
    }
}

impl TryFrom<u8> for EnemyState {
    type Error = RangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0..=3 => Ok(Self::from_bits(value)),
            _ => Err(RangeError::EnemyState(value)),
        }
    }
}

/// Player lifecycle state.
///
/// Stored byte-wide, never bit-packed. One player per session by game
/// design; transition rules live with the game loop.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerState {
    #[default]
    Alive = 0,
    /// Lost a life; waiting out the respawn timer.
    Respawning = 1,
    /// Out of lives. Session over.
    Dead = 2,
}

impl TryFrom<u8> for PlayerState {
    type Error = RangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Alive),
            1 => Ok(Self::Respawning),
            2 => Ok(Self::Dead),
            other => Err(RangeError::PlayerState(other)),
        }
    }
}
