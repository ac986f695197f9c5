//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used for storing
//! cell candidates.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};

/// The lowest digit a [DigitSet] can contain.
pub const MIN_DIGIT: usize = 1;

/// The highest digit a [DigitSet] can contain.
pub const MAX_DIGIT: usize = 9;

const FULL_MASK: u16 = ((1 << MAX_DIGIT) - 1) << MIN_DIGIT;

/// A set of Sudoku digits (1 to 9) implemented as a bit mask. Bit `d` of the
/// mask is set if and only if the digit `d` is contained. This is cheaper
/// than a general-purpose set and can be copied freely.
///
/// All methods taking a digit require it to be in the range
/// `[`[MIN_DIGIT]`, `[MAX_DIGIT]`]`. Digits are validated at the crate
/// boundary, so an out-of-range digit here is a caller bug and only checked
/// by debug assertions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigitSet {
    mask: u16
}

impl DigitSet {

    /// Creates a new, empty digit set.
    pub fn new() -> DigitSet {
        DigitSet {
            mask: 0
        }
    }

    /// Creates a new digit set containing all digits 1 to 9.
    pub fn all() -> DigitSet {
        DigitSet {
            mask: FULL_MASK
        }
    }

    /// Creates a new digit set containing only the given digit.
    pub fn singleton(digit: usize) -> DigitSet {
        let mut set = DigitSet::new();
        set.insert(digit);
        set
    }

    fn mask_of(digit: usize) -> u16 {
        debug_assert!(digit >= MIN_DIGIT && digit <= MAX_DIGIT,
            "digit {} outside [1, 9]", digit);
        1 << digit
    }

    /// Indicates whether this set contains the given digit.
    pub fn contains(&self, digit: usize) -> bool {
        self.mask & DigitSet::mask_of(digit) != 0
    }

    /// Inserts the given digit into this set, such that [DigitSet::contains]
    /// returns `true` for it afterwards. Returns `true` if the set changed,
    /// i.e. the digit was not present before.
    pub fn insert(&mut self, digit: usize) -> bool {
        let mask = DigitSet::mask_of(digit);
        let changed = self.mask & mask == 0;
        self.mask |= mask;
        changed
    }

    /// Removes the given digit from this set, such that [DigitSet::contains]
    /// returns `false` for it afterwards. Returns `true` if the set changed,
    /// i.e. the digit was present before.
    pub fn remove(&mut self, digit: usize) -> bool {
        let mask = DigitSet::mask_of(digit);
        let changed = self.mask & mask != 0;
        self.mask &= !mask;
        changed
    }

    /// Removes all digits from this set.
    pub fn clear(&mut self) {
        self.mask = 0;
    }

    /// Indicates whether this set is empty, i.e. contains no digits.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Returns the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Returns an iterator over the digits contained in this set in
    /// ascending order.
    pub fn iter(&self) -> DigitSetIter {
        DigitSetIter {
            mask: self.mask
        }
    }
}

impl Default for DigitSet {
    fn default() -> DigitSet {
        DigitSet::new()
    }
}

/// An iterator over the digits of a [DigitSet], in ascending order.
pub struct DigitSetIter {
    mask: u16
}

impl Iterator for DigitSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.mask == 0 {
            None
        }
        else {
            let digit = self.mask.trailing_zeros() as usize;
            self.mask &= self.mask - 1;
            Some(digit)
        }
    }
}

impl BitOr for DigitSet {
    type Output = DigitSet;

    fn bitor(self, rhs: DigitSet) -> DigitSet {
        DigitSet {
            mask: self.mask | rhs.mask
        }
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: DigitSet) {
        self.mask |= rhs.mask;
    }
}

impl BitAnd for DigitSet {
    type Output = DigitSet;

    fn bitand(self, rhs: DigitSet) -> DigitSet {
        DigitSet {
            mask: self.mask & rhs.mask
        }
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: DigitSet) {
        self.mask &= rhs.mask;
    }
}

impl Sub for DigitSet {
    type Output = DigitSet;

    fn sub(self, rhs: DigitSet) -> DigitSet {
        DigitSet {
            mask: self.mask & !rhs.mask
        }
    }
}

impl SubAssign for DigitSet {
    fn sub_assign(&mut self, rhs: DigitSet) {
        self.mask &= !rhs.mask;
    }
}

/// Creates a new [DigitSet] that contains the specified digits, provided as
/// a comma-separated list. For empty sets, [DigitSet::new] can be used.
///
/// An example usage of this macro looks as follows:
///
/// ```
/// use sudoku_engine::digits;
/// use sudoku_engine::util::DigitSet;
///
/// let set = digits!(2, 4);
/// assert!(set.contains(2));
/// assert!(!set.contains(3));
/// ```
#[macro_export]
macro_rules! digits {
    ($($digit:expr),+) => {
        {
            let mut set = DigitSet::new();
            $(set.insert($digit);)+
            set
        }
    };
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_set_is_empty() {
        let set = DigitSet::new();
        assert!(set.is_empty());
        assert!(!set.contains(1));
        assert!(!set.contains(9));
        assert_eq!(0, set.len());
    }

    #[test]
    fn all_set_is_full() {
        let set = DigitSet::all();
        assert!(!set.is_empty());
        assert!(set.contains(1));
        assert!(set.contains(5));
        assert!(set.contains(9));
        assert_eq!(9, set.len());
    }

    #[test]
    fn singleton_set_contains_only_given_digit() {
        let set = DigitSet::singleton(3);
        assert!(!set.contains(1));
        assert!(set.contains(3));
        assert!(!set.contains(9));
        assert_eq!(1, set.len());
    }

    #[test]
    fn digits_macro_contains_specified_digits() {
        let set = digits!(3, 7, 8);
        assert_eq!(3, set.len());
        assert!(set.contains(3));
        assert!(set.contains(7));
        assert!(set.contains(8));
        assert!(!set.contains(5));
    }

    #[test]
    fn manipulation() {
        let mut set = DigitSet::new();
        assert!(set.insert(2));
        assert!(set.insert(4));
        assert!(!set.insert(2));
        assert_eq!(2, set.len());

        assert!(set.remove(4));
        assert!(!set.remove(4));
        assert!(set.contains(2));
        assert!(!set.contains(4));
        assert_eq!(1, set.len());

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn iteration_is_ascending() {
        let set = digits!(9, 1, 4, 6);
        let collected: Vec<usize> = set.iter().collect();
        assert_eq!(vec![1, 4, 6, 9], collected);
    }

    #[test]
    fn union() {
        let result = digits!(2, 4) | digits!(3, 4);
        assert_eq!(digits!(2, 3, 4), result);
    }

    #[test]
    fn intersection() {
        let result = digits!(2, 4) & digits!(3, 4);
        assert_eq!(DigitSet::singleton(4), result);
    }

    #[test]
    fn difference() {
        let result = digits!(2, 4) - digits!(3, 4);
        assert_eq!(DigitSet::singleton(2), result);
    }
}
