//! Value-domain violations.

use crate::constants::{COOLDOWN_MAX, COORD_MAX, COORD_MIN};

/// A logical value outside its declared domain.
///
/// Detected at construction or encoding, never deferred: an error here
/// means the caller produced an out-of-domain value and must be fixed
/// upstream, not retried. Nothing in this crate coerces silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Coordinate outside the active profile's representable range.
    #[error("coordinate {0} outside representable range {min}..={max}", min = COORD_MIN, max = COORD_MAX)]
    Coordinate(i64),

    /// Cooldown exceeding the 6-bit field.
    #[error("cooldown {0} exceeds {max}", max = COOLDOWN_MAX)]
    Cooldown(u8),

    /// Enemy state byte outside the four defined states.
    #[error("enemy state {0} outside 0..=3")]
    EnemyState(u8),

    /// Player state byte with no defined meaning.
    #[error("player state byte {0} is not a defined state")]
    PlayerState(u8),

    /// Enemy index colliding with the no-association sentinel.
    #[error("enemy index {0} is reserved as the no-association sentinel")]
    EnemyIndex(u8),
}
