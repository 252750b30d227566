//! A set of squares packed into a `u64`.

use std::fmt;

use crate::square::Square;

/// A set of board squares, one bit per square index.
///
/// Iteration yields squares in index order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(u64);

impl SquareSet {
    /// The empty set.
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1u64 << sq.index()) != 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Keep only the squares for which `keep` returns `true`.
    pub fn filter(self, mut keep: impl FnMut(Square) -> bool) -> SquareSet {
        self.into_iter().filter(|&sq| keep(sq)).collect()
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> SquareSet {
        let mut set = SquareSet::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<Square> for SquareSet {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, iter: I) {
        for sq in iter {
            self.insert(sq);
        }
    }
}

/// Iterator over the squares of a [`SquareSet`], lowest index first.
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Square::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.into_iter()).finish()
    }
}

impl fmt::Display for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sq) in self.into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{sq}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SquareSet;
    use crate::square::Square;

    #[test]
    fn insert_and_contains() {
        let mut set = SquareSet::EMPTY;
        assert!(set.is_empty());
        set.insert(Square::E4);
        set.insert(Square::A1);
        set.insert(Square::E4);
        assert!(set.contains(Square::E4));
        assert!(!set.contains(Square::E5));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn iterates_in_index_order() {
        let set: SquareSet = [Square::H8, Square::A1, Square::E4].into_iter().collect();
        let squares: Vec<Square> = set.into_iter().collect();
        assert_eq!(squares, vec![Square::A1, Square::E4, Square::H8]);
    }

    #[test]
    fn extend_and_filter() {
        let mut both: SquareSet = [Square::A1, Square::B1].into_iter().collect();
        both.extend([Square::B1, Square::C1]);
        assert_eq!(both.len(), 3);
        let only_c = both.filter(|sq| sq == Square::C1);
        assert_eq!(only_c.into_iter().collect::<Vec<_>>(), vec![Square::C1]);
    }

    #[test]
    fn display_lists_squares() {
        let set: SquareSet = [Square::E3, Square::E4].into_iter().collect();
        assert_eq!(set.to_string(), "e3 e4");
    }
}
