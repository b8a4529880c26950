//! Quality bounds and the clamped arithmetic every category goes through.

/// Lowest quality a non-legendary item can have.
pub const MINIMUM_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can have.
pub const MAXIMUM_QUALITY: i32 = 50;

/// Fixed quality of legendary items. Exempt from the [0, 50] bounds.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Rare items gain double quality once `sell_in` is at or below this.
pub const RARE_DOUBLE_INCREASE_DAYS: i32 = 0;

/// Ultra-rare items gain double quality once `sell_in` is at or below this.
pub const ULTRA_RARE_DOUBLE_INCREASE_DAYS: i32 = 10;

/// Ultra-rare items gain triple quality once `sell_in` is at or below this.
pub const ULTRA_RARE_TRIPLE_INCREASE_DAYS: i32 = 5;

/// Clip a quality value into `[MINIMUM_QUALITY, MAXIMUM_QUALITY]`.
pub fn clamp(quality: i32) -> i32 {
    quality.clamp(MINIMUM_QUALITY, MAXIMUM_QUALITY)
}

/// Raise `quality` by `by`, clamped.
pub fn increase(quality: i32, by: i32) -> i32 {
    clamp(quality.saturating_add(by))
}

/// Lower `quality` by `by`, clamped.
pub fn decrease(quality: i32, by: i32) -> i32 {
    clamp(quality.saturating_sub(by))
}

/// Whether `quality` lies within the bounds that apply to non-legendary items.
pub fn is_within_bounds(quality: i32) -> bool {
    (MINIMUM_QUALITY..=MAXIMUM_QUALITY).contains(&quality)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increase_stops_at_maximum() {
        assert_eq!(increase(49, 3), MAXIMUM_QUALITY);
        assert_eq!(increase(10, 2), 12);
    }

    #[test]
    fn decrease_stops_at_minimum() {
        assert_eq!(decrease(1, 2), MINIMUM_QUALITY);
        assert_eq!(decrease(10, 1), 9);
    }

    #[test]
    fn out_of_range_input_snaps_into_bounds() {
        assert_eq!(increase(60, 1), MAXIMUM_QUALITY);
        assert_eq!(decrease(-10, 1), MINIMUM_QUALITY);
        assert_eq!(increase(-10, 2), MINIMUM_QUALITY);
        assert_eq!(decrease(i32::MIN, 2), MINIMUM_QUALITY);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(is_within_bounds(MINIMUM_QUALITY));
        assert!(is_within_bounds(MAXIMUM_QUALITY));
        assert!(!is_within_bounds(LEGENDARY_QUALITY));
        assert!(!is_within_bounds(-1));
    }
}
