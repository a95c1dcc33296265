// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Percent complete after finishing the item at `index` out of `total`.
///
/// Computes `round(100 * (index + 1) / total)` with halves rounding up, in
/// integer arithmetic so there is no float drift. `total == 0` reports 0.
/// For `total > 200` the first items report 0 (`100 / total < 0.5`).
///
/// # Example
/// ```
/// use sequence_pacer::engine::percent_complete;
///
/// assert_eq!(percent_complete(0, 4), 25);
/// assert_eq!(percent_complete(0, 3), 33);
/// assert_eq!(percent_complete(1, 3), 67);
/// ```
pub fn percent_complete(index: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let done = (index + 1).min(total) as u64;
    let total = total as u64;
    // floor(100 * done / total + 1/2)
    ((200 * done + total) / (2 * total)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarters() {
        let values: Vec<u8> = (0..4).map(|i| percent_complete(i, 4)).collect();
        assert_eq!(values, vec![25, 50, 75, 100]);
    }

    #[test]
    fn halves_round_up() {
        // 100 / 8 = 12.5
        assert_eq!(percent_complete(0, 8), 13);
        // 300 / 8 = 37.5
        assert_eq!(percent_complete(2, 8), 38);
        assert_eq!(percent_complete(0, 200), 1);
    }

    #[test]
    fn non_decreasing_and_ends_at_100() {
        for total in 1..=250 {
            let values: Vec<u8> = (0..total).map(|i| percent_complete(i, total)).collect();
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "total={}", total);
            assert_eq!(*values.last().unwrap(), 100, "total={}", total);
        }
    }

    #[test]
    fn long_runs_start_at_zero() {
        assert_eq!(percent_complete(0, 201), 0);
        assert_eq!(percent_complete(3, 1000), 0);
        assert_eq!(percent_complete(4, 1000), 1);
        assert_eq!(percent_complete(999, 1000), 100);
    }

    #[test]
    fn empty_total_is_zero() {
        assert_eq!(percent_complete(0, 0), 0);
    }
}
