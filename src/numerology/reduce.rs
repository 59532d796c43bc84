//! Digit-sum reduction.
//!
//! Every numerology number is produced by the same rule: collapse a value to
//! the sum of its decimal digits until a single digit remains, stopping early
//! on a master number.

use super::date::BirthDate;

/// Numbers that are never reduced further.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Is `n` a master number?
#[must_use]
pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Sum of the decimal digits of `n`.
#[must_use]
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` to a single digit or a master number.
///
/// The master check runs before every collapse, so `29 -> 11` stops at 11.
///
/// ```
/// use arcana::numerology::reduce;
///
/// assert_eq!(reduce(2010), 3);
/// assert_eq!(reduce(29), 11);
/// assert_eq!(reduce(22), 22);
/// ```
#[must_use]
pub fn reduce(mut n: u32) -> u32 {
    while n > 9 && !is_master(n) {
        n = digit_sum(n);
    }
    n
}

/// Life path: every digit of year, month and day, summed and reduced.
#[must_use]
pub fn compute_life_path(date: &BirthDate) -> u32 {
    reduce(digit_sum(date.year()) + digit_sum(date.month()) + digit_sum(date.day()))
}

/// Destiny: year + month + day as whole numbers, reduced.
#[must_use]
pub fn compute_destiny(date: &BirthDate) -> u32 {
    reduce(date.year() + date.month() + date.day())
}

/// Personality: the day of month, reduced.
#[must_use]
pub fn compute_personality(date: &BirthDate) -> u32 {
    reduce(date.day())
}
