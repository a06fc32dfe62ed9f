//! Scoring module
//!
//! Gravity locks and hard drop locks reward line clears differently:
//! gravity uses a fixed table per row count, a hard drop pays a flat amount
//! per row. Drop actions add their own points on top.

use crate::types::{
    LockSource, GRAVITY_LINE_SCORES, HARD_DROP_LINE_POINTS, HARD_DROP_POINTS, SOFT_DROP_POINTS,
};

/// Line clear bonus for a gravity lock
/// lines: number of lines cleared (1-4); anything else scores 0
pub fn gravity_line_score(lines: usize) -> u32 {
    GRAVITY_LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Line clear bonus for a hard drop lock
pub fn hard_drop_line_score(lines: usize) -> u32 {
    HARD_DROP_LINE_POINTS.saturating_mul(lines as u32)
}

/// Line clear bonus for a lock from either path
pub fn line_clear_score(source: LockSource, lines: usize) -> u32 {
    match source {
        LockSource::Gravity => gravity_line_score(lines),
        LockSource::HardDrop => hard_drop_line_score(lines),
    }
}

/// Points for the drop action itself
/// soft_drop: +1 per successful step
/// hard_drop: +2 per action, regardless of distance
pub fn calculate_drop_score(is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        HARD_DROP_POINTS
    } else {
        SOFT_DROP_POINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_table() {
        assert_eq!(gravity_line_score(0), 0);
        assert_eq!(gravity_line_score(1), 100);
        assert_eq!(gravity_line_score(2), 300);
        assert_eq!(gravity_line_score(3), 500);
        assert_eq!(gravity_line_score(4), 800);
        assert_eq!(gravity_line_score(5), 0);
    }

    #[test]
    fn test_hard_drop_is_flat_per_line() {
        assert_eq!(hard_drop_line_score(0), 0);
        assert_eq!(hard_drop_line_score(1), 200);
        assert_eq!(hard_drop_line_score(2), 400);
        assert_eq!(hard_drop_line_score(4), 800);
    }

    #[test]
    fn test_sources_differ_for_same_clear() {
        assert_eq!(line_clear_score(LockSource::Gravity, 2), 300);
        assert_eq!(line_clear_score(LockSource::HardDrop, 2), 400);
        assert_eq!(line_clear_score(LockSource::Gravity, 3), 500);
        assert_eq!(line_clear_score(LockSource::HardDrop, 3), 600);
    }

    #[test]
    fn test_drop_score() {
        assert_eq!(calculate_drop_score(false), 1);
        assert_eq!(calculate_drop_score(true), 2);
    }
}
