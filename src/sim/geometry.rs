//! Wheel slice geometry
//!
//! The pointer sits at angle 0 (screen right) on the unrotated wheel. Slice
//! `i` covers `[i * slice, (i + 1) * slice)`. Rotating the wheel clockwise by
//! `angle` brings the point at `2π - angle` of the wheel under the pointer.

use std::f64::consts::TAU;

use crate::normalize_angle;

/// Angular width of one slice
#[inline]
pub fn slice_angle(count: usize) -> f64 {
    debug_assert!(count >= 1, "wheel needs at least one slice");
    TAU / count as f64
}

/// Angle on the wheel currently aligned with the pointer, in [0, 2π]
#[inline]
pub fn pointer_offset(angle: f64) -> f64 {
    normalize_angle(TAU - (angle % TAU))
}

/// Bucket a wheel-relative offset into a slice index.
///
/// Rounding can push the quotient to exactly `count` at the 2π edge, so the
/// result is wrapped.
#[inline]
pub fn slice_for_offset(offset: f64, count: usize) -> usize {
    ((offset / slice_angle(count)).floor() as usize) % count
}

/// Index of the slice under the pointer for a given wheel rotation
#[inline]
pub fn active_slice_at(angle: f64, count: usize) -> usize {
    slice_for_offset(pointer_offset(angle), count)
}

/// Start and end angle of a slice on the unrotated wheel
#[inline]
pub fn bounds_of(index: usize, count: usize) -> (f64, f64) {
    let slice = slice_angle(count);
    (index as f64 * slice, (index + 1) as f64 * slice)
}

/// Angle of the slice bisector on the unrotated wheel
#[inline]
pub fn mid_angle_of(index: usize, count: usize) -> f64 {
    let (start, end) = bounds_of(index, count);
    start + (end - start) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_slice_angle() {
        assert_eq!(slice_angle(1), TAU);
        assert_eq!(slice_angle(4), FRAC_PI_2);
    }

    #[test]
    fn test_at_rest_pointer_on_first_slice() {
        assert_eq!(active_slice_at(0.0, 4), 0);
    }

    #[test]
    fn test_quarter_turn_lands_on_last_slice() {
        assert_eq!(active_slice_at(FRAC_PI_2, 4), 3);
    }

    #[test]
    fn test_slice_edges_four_slices() {
        let clockwise: Vec<usize> = (0..9).map(|k| active_slice_at(k as f64 * FRAC_PI_2, 4)).collect();
        assert_eq!(clockwise, vec![0, 3, 2, 1, 0, 3, 2, 1, 0]);

        let counter: Vec<usize> = (0..9).map(|k| active_slice_at(-(k as f64) * FRAC_PI_2, 4)).collect();
        assert_eq!(counter, vec![0, 1, 2, 3, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_inside_slices() {
        let nudged: Vec<usize> = (0..8)
            .map(|k| active_slice_at(k as f64 * FRAC_PI_2 + 0.01, 4))
            .collect();
        assert_eq!(nudged, vec![3, 2, 1, 0, 3, 2, 1, 0]);
    }

    #[test]
    fn test_offset_at_full_turn_wraps_to_zero() {
        // Quotient is exactly `count` here; the wrap must kick in
        for count in 1..=12 {
            assert_eq!((TAU / slice_angle(count)).floor() as usize, count);
            assert_eq!(slice_for_offset(TAU, count), 0);
        }
    }

    #[test]
    fn test_tiny_angles_stay_on_first_slice() {
        for angle in [1e-17, f64::MIN_POSITIVE, -1e-17, TAU, 3.0 * TAU] {
            assert_eq!(active_slice_at(angle, 4), 0, "angle {angle}");
        }
    }

    #[test]
    fn test_single_slice_always_zero() {
        for angle in [0.0, 0.5, PI, -PI, 1234.5678, -98765.4321] {
            assert_eq!(active_slice_at(angle, 1), 0);
        }
    }

    #[test]
    fn test_bounds_of() {
        let (start, end) = bounds_of(2, 4);
        assert_eq!(start, PI);
        assert_eq!(end, 1.5 * PI);
        assert_eq!(bounds_of(0, 1), (0.0, TAU));
        assert!((mid_angle_of(0, 4) - PI / 4.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_active_slice_in_range(angle in -1.0e6f64..1.0e6, count in 1usize..64) {
            prop_assert!(active_slice_at(angle, count) < count);
        }

        #[test]
        fn prop_full_turns_do_not_change_slice(angle in 0.0f64..TAU, turns in 0u32..50, count in 1usize..32) {
            // Skip points within rounding distance of a slice edge
            let slice = slice_angle(count);
            let frac = (pointer_offset(angle) / slice).fract();
            prop_assume!(frac > 1e-6 && frac < 1.0 - 1e-6);
            let spun = angle + turns as f64 * TAU;
            prop_assert_eq!(active_slice_at(spun, count), active_slice_at(angle, count));
        }
    }
}
