//! Pure slot-layout arithmetic.
//!
//! Zones address their cards by slot index; presentation derives each
//! card's 1-D offset from `(index, total)` alone. Because the function is
//! deterministic and takes no per-card state, a zone can recompute every
//! offset whenever its count changes.

/// Centered 1-D offset for a slot.
///
/// Offsets are centered around zero and spaced by `spacing`:
/// `offset(i, n) = (i - (n - 1) / 2) * spacing`.
///
/// ```
/// use card_duel::zones::layout::slot_offset;
///
/// // Three cards spaced 150 apart: [-150, 0, 150]
/// assert_eq!(slot_offset(0, 3, 150.0), -150.0);
/// assert_eq!(slot_offset(1, 3, 150.0), 0.0);
/// assert_eq!(slot_offset(2, 3, 150.0), 150.0);
///
/// // Two cards straddle the center
/// assert_eq!(slot_offset(0, 2, 150.0), -75.0);
/// assert_eq!(slot_offset(1, 2, 150.0), 75.0);
/// ```
#[must_use]
pub fn slot_offset(index: usize, total: usize, spacing: f32) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (index as f32 - (total as f32 - 1.0) / 2.0) * spacing
}

/// Offsets for a whole row of `total` slots.
#[must_use]
pub fn row_offsets(total: usize, spacing: f32) -> Vec<f32> {
    (0..total).map(|i| slot_offset(i, total, spacing)).collect()
}
