use crate::domain::model::{SearchBounds, SearchInterval};
use crate::utils::error::{PrimesError, Result};

/// Validates raw bounds and rounds an even start up to the next odd value.
///
/// Negative values are rejected before the ordering check. Because only odd
/// candidates are scanned, 2 is never reported.
pub fn resolve(bounds: SearchBounds) -> Result<SearchInterval> {
    let SearchBounds { start, end } = bounds;

    if start < 0 || end < 0 {
        return Err(PrimesError::InvalidBounds { start, end });
    }
    if start >= end {
        return Err(PrimesError::InvalidRange { start, end });
    }

    // both non-negative, so the casts are lossless
    let mut start = start as u64;
    let end = end as u64;
    if start % 2 == 0 {
        start += 1;
    }

    // an even start just below the end leaves an empty interval
    Ok(SearchInterval::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_start_is_kept() {
        let interval = resolve(SearchBounds::new(9, 16)).unwrap();
        assert_eq!(interval.start(), 9);
        assert_eq!(interval.end(), 16);
    }

    #[test]
    fn test_even_start_rounds_up() {
        let interval = resolve(SearchBounds::new(10, 20)).unwrap();
        assert_eq!(interval.start(), 11);
        let interval = resolve(SearchBounds::new(0, 5)).unwrap();
        assert_eq!(interval.start(), 1);
    }

    #[test]
    fn test_negative_bounds_rejected_first() {
        // negative start with start >= end still reports the bounds error
        let err = resolve(SearchBounds::new(-1, -5)).unwrap_err();
        assert!(matches!(err, PrimesError::InvalidBounds { start: -1, end: -5 }));

        let err = resolve(SearchBounds::new(3, -1)).unwrap_err();
        assert!(matches!(err, PrimesError::InvalidBounds { .. }));
    }

    #[test]
    fn test_empty_or_reversed_range_rejected() {
        let err = resolve(SearchBounds::new(20, 10)).unwrap_err();
        assert!(matches!(err, PrimesError::InvalidRange { start: 20, end: 10 }));

        let err = resolve(SearchBounds::new(7, 7)).unwrap_err();
        assert!(matches!(err, PrimesError::InvalidRange { .. }));
    }

    #[test]
    fn test_default_bounds_cover_full_range() {
        let interval = resolve(SearchBounds::default()).unwrap();
        assert_eq!(interval.start(), 1);
        assert_eq!(interval.end(), i64::MAX as u64);
    }

    #[test]
    fn test_even_start_adjacent_to_end() {
        // [4, 5) holds no odd candidate once 4 is rounded up to 5
        let interval = resolve(SearchBounds::new(4, 5)).unwrap();
        assert_eq!(interval.start(), 5);
        assert_eq!(interval.end(), 5);
        assert!(interval.is_empty());
    }
}
