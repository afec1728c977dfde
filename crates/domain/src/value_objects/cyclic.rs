//! Cyclic table lookup shared by every calendar table
//!
//! All four tables (sasi, pasaran, dina, tahun) are addressed by a 1-based
//! ordinal that wraps around the table length, where an ordinal congruent to
//! zero selects the last entry.

/// Returns the table entry for a 1-based, wrapping `ordinal`.
///
/// `ordinal.rem_euclid(N)` is always in `0..N`, so negative ordinals wrap the
/// same way positive ones do (`-1` selects entry `N - 1`).
pub(crate) fn cyclic_lookup<T: Copy, const N: usize>(table: &[T; N], ordinal: i64) -> T {
    let len = N as i64;
    let idx = ordinal.rem_euclid(len);
    let position = if idx == 0 { len } else { idx };
    table[(position - 1) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [char; 5] = ['a', 'b', 'c', 'd', 'e'];

    #[test]
    fn ordinals_are_one_based() {
        assert_eq!(cyclic_lookup(&TABLE, 1), 'a');
        assert_eq!(cyclic_lookup(&TABLE, 4), 'd');
    }

    #[test]
    fn zero_selects_last_entry() {
        assert_eq!(cyclic_lookup(&TABLE, 0), 'e');
        assert_eq!(cyclic_lookup(&TABLE, 5), 'e');
        assert_eq!(cyclic_lookup(&TABLE, 10), 'e');
    }

    #[test]
    fn large_ordinals_wrap() {
        assert_eq!(cyclic_lookup(&TABLE, 6), 'a');
        assert_eq!(cyclic_lookup(&TABLE, 5 * 1_000 + 3), 'c');
    }

    #[test]
    fn negative_ordinals_wrap_without_panicking() {
        assert_eq!(cyclic_lookup(&TABLE, -1), 'd');
        assert_eq!(cyclic_lookup(&TABLE, -5), 'e');
        assert_eq!(cyclic_lookup(&TABLE, -4), 'a');
        assert_eq!(cyclic_lookup(&TABLE, i64::MIN), cyclic_lookup(&TABLE, i64::MIN.rem_euclid(5)));
    }
}
