//! Scoring module - pop and fall point rules
//!
//! Matches of 3+ score 10 points per bubble; bubbles dropped as floating
//! score 5 each. A single resolution step awards one or the other, never
//! both. Pops of 5+ additionally raise a combo notification.

use crate::types::{COMBO_MIN, FALL_POINTS, MATCH_MIN, POP_POINTS};

/// Whether a connected group is large enough to pop
pub fn is_match(group_size: usize) -> bool {
    group_size >= MATCH_MIN
}

/// Points for popping a qualifying match
pub fn pop_score(group_size: usize) -> u32 {
    group_size as u32 * POP_POINTS
}

/// Points for dropping floating bubbles
pub fn fall_score(count: usize) -> u32 {
    count as u32 * FALL_POINTS
}

/// Whether a pop is large enough to count as a combo
pub fn is_combo(group_size: usize) -> bool {
    group_size >= COMBO_MIN
}
