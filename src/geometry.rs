//! Table geometry: derives a prime slot count and a prime step constant
//! from a requested capacity.
//!
//! Geometry is computed once at construction time and never changes; a table
//! that needs more room is discarded and rebuilt, not grown.

use crate::error::Error;

pub(crate) const MIN_TABLE_SIZE: usize = 2;
pub(crate) const MAX_TABLE_SIZE: usize = 126;

const MIN_LAMBDA: f64 = 0.3;
const MAX_LAMBDA: f64 = 0.5;
const LAMBDA_STEP: f64 = 0.5;
const RATIO_START: f64 = 1.0;

/// Validated table geometry.
///
/// Invariants: `slot_count` is prime, `step` is prime, `step < slot_count`,
/// and `slot_count >= max_elements`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TableGeometry {
    /// Soft capacity the caller asked for.
    pub(crate) max_elements: usize,
    /// Actual prime-sized backing length.
    pub(crate) slot_count: usize,
    /// Prime step base for the second hash function.
    pub(crate) step: u64,
}

impl TableGeometry {
    /// Turn a requested capacity into a valid geometry, or reject it with
    /// [`Error::InvalidCapacity`] when outside `[2, 126]`.
    pub(crate) fn for_capacity(capacity: usize) -> Result<Self, Error> {
        if !(MIN_TABLE_SIZE..=MAX_TABLE_SIZE).contains(&capacity) {
            return Err(Error::InvalidCapacity);
        }
        let slot_count = size_for_load_factor(capacity);
        let step = if capacity > MIN_TABLE_SIZE {
            previous_prime(slot_count - 1) as u64
        } else {
            MIN_TABLE_SIZE as u64
        };
        Ok(Self {
            max_elements: capacity,
            slot_count,
            step,
        })
    }
}

/// Grow the sizing ratio in fixed steps until `capacity / ratio` lands in
/// the target load-factor band, then pick a prime backing length near the
/// accepted ratio.
///
/// The quotient shrinks monotonically while `capacity` stays fixed, and the
/// band is wider than one step's worth of movement, so the walk terminates
/// inside the band for every valid capacity.
fn size_for_load_factor(capacity: usize) -> usize {
    let mut ratio = RATIO_START;
    loop {
        let lambda = capacity as f64 / ratio;
        if (MIN_LAMBDA..=MAX_LAMBDA).contains(&lambda) {
            let next = next_prime(ratio as usize);
            let prev = previous_prime(ratio as usize);
            // next_prime(x) >= previous_prime(x) for every x, so the minimum
            // always resolves to the previous prime. Both sides are computed
            // so the sizing stays bit-for-bit stable.
            return next.min(prev);
        }
        ratio += LAMBDA_STEP;
    }
}

/// Deterministic trial division up to `floor(sqrt(n))`, skipping multiples
/// of 2 and 3 with the 6k±1 pattern. Plenty at these magnitudes.
pub(crate) fn is_prime(n: usize) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let limit = (n as f64).sqrt() as usize;
    let mut i = 5;
    while i <= limit {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Smallest prime `>= n` (with 2 for anything at or below it).
pub(crate) fn next_prime(n: usize) -> usize {
    if n <= 2 {
        return 2;
    }
    let mut n = if n % 2 == 0 { n + 1 } else { n };
    while !is_prime(n) {
        n += 2;
    }
    n
}

/// Largest prime `<= n` (with 2 for anything at or below it).
pub(crate) fn previous_prime(n: usize) -> usize {
    if n <= 2 {
        return 2;
    }
    let mut n = if n % 2 == 0 { n - 1 } else { n };
    while !is_prime(n) {
        n -= 2;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primality_small_values() {
        let primes = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 241, 251];
        for p in primes {
            assert!(is_prime(p), "{p} should be prime");
        }
        for n in [0, 1, 4, 6, 9, 15, 21, 25, 49, 121, 243, 249, 253] {
            assert!(!is_prime(n), "{n} should be composite");
        }
    }

    #[test]
    fn next_and_previous_prime() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(2), 2);
        assert_eq!(next_prime(4), 5);
        assert_eq!(next_prime(14), 17);
        assert_eq!(next_prime(252), 257);
        assert_eq!(previous_prime(2), 2);
        assert_eq!(previous_prime(4), 3);
        assert_eq!(previous_prime(14), 13);
        assert_eq!(previous_prime(252), 251);
    }

    /// Invariant: rejected capacities are exactly those outside `[2, 126]`.
    #[test]
    fn capacity_bounds() {
        assert_eq!(TableGeometry::for_capacity(0), Err(Error::InvalidCapacity));
        assert_eq!(TableGeometry::for_capacity(1), Err(Error::InvalidCapacity));
        assert_eq!(
            TableGeometry::for_capacity(127),
            Err(Error::InvalidCapacity)
        );
        assert_eq!(
            TableGeometry::for_capacity(1000),
            Err(Error::InvalidCapacity)
        );
        assert!(TableGeometry::for_capacity(2).is_ok());
        assert!(TableGeometry::for_capacity(126).is_ok());
    }

    /// Known geometries pinned so the sizing never drifts.
    #[test]
    fn geometry_vectors() {
        let g = TableGeometry::for_capacity(2).unwrap();
        assert_eq!((g.max_elements, g.slot_count, g.step), (2, 3, 2));

        let g = TableGeometry::for_capacity(7).unwrap();
        assert_eq!((g.max_elements, g.slot_count, g.step), (7, 13, 11));

        let g = TableGeometry::for_capacity(126).unwrap();
        assert_eq!((g.max_elements, g.slot_count, g.step), (126, 251, 241));
    }

    /// Invariant: for every valid capacity the derived sizes are prime,
    /// the step stays strictly below the slot count, and the backing array
    /// is at least as large as the requested capacity.
    #[test]
    fn geometry_invariants_over_full_range() {
        for capacity in MIN_TABLE_SIZE..=MAX_TABLE_SIZE {
            let g = TableGeometry::for_capacity(capacity).unwrap();
            assert!(is_prime(g.slot_count), "slot_count for {capacity}");
            assert!(is_prime(g.step as usize), "step for {capacity}");
            assert!((g.step as usize) < g.slot_count, "step bound for {capacity}");
            assert!(g.slot_count >= capacity, "slot_count >= {capacity}");
            // The ratio walk always accepts at ratio == 2 * capacity, so the
            // slot count collapses to the previous prime of that value.
            assert_eq!(g.slot_count, previous_prime(2 * capacity));
        }
    }
}
