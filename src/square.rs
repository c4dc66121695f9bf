use std::{error::Error, fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A square of the board, packed as `file | rank << 3`.
///
/// Files and ranks are zero based: `a1` is file 0, rank 0 and `h8` is
/// file 7, rank 7. A `Square` is always in bounds by construction.
///
/// # Examples
///
/// ```
/// use chessling::Square;
///
/// let sq: Square = "e4".parse()?;
/// assert_eq!(sq, Square::new(4, 3));
/// assert_eq!(sq.to_string(), "e4");
/// # Ok::<_, chessling::ParseSquareError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(i8);

impl Square {
    /// Creates a square from zero-based file and rank.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if file or rank is out of bounds. Use
    /// [`Square::from_coords`] for checked construction.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Square {
        debug_assert!(0 <= file && file < 8);
        debug_assert!(0 <= rank && rank < 8);
        Square(file | (rank << 3))
    }

    /// Tries to create a square from zero-based file and rank, failing
    /// when either is out of bounds.
    #[inline]
    pub const fn from_coords(file: i8, rank: i8) -> Option<Square> {
        if 0 <= file && file < 8 && 0 <= rank && rank < 8 {
            Some(Square::new(file, rank))
        } else {
            None
        }
    }

    /// Zero-based file, `0` for the a-file.
    #[inline]
    pub const fn file(self) -> i8 {
        self.0 & 7
    }

    /// Zero-based rank, `0` for the first rank.
    #[inline]
    pub const fn rank(self) -> i8 {
        self.0 >> 3
    }

    /// The square reached by stepping `df` files and `dr` ranks, or
    /// `None` when the step leaves the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessling::Square;
    ///
    /// assert_eq!(Square::E4.offset(1, 1), Some(Square::F5));
    /// assert_eq!(Square::A1.offset(-1, 0), None);
    /// ```
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Square> {
        Square::from_coords(self.file() + df, self.rank() + dr)
    }

    /// All 64 squares, a1 through h8, rank by rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    pub const A1: Square = Square::new(0, 0);
    pub const B1: Square = Square::new(1, 0);
    pub const C1: Square = Square::new(2, 0);
    pub const D1: Square = Square::new(3, 0);
    pub const E1: Square = Square::new(4, 0);
    pub const F1: Square = Square::new(5, 0);
    pub const G1: Square = Square::new(6, 0);
    pub const H1: Square = Square::new(7, 0);
    pub const A2: Square = Square::new(0, 1);
    pub const B2: Square = Square::new(1, 1);
    pub const C2: Square = Square::new(2, 1);
    pub const D2: Square = Square::new(3, 1);
    pub const E2: Square = Square::new(4, 1);
    pub const F2: Square = Square::new(5, 1);
    pub const G2: Square = Square::new(6, 1);
    pub const H2: Square = Square::new(7, 1);
    pub const A3: Square = Square::new(0, 2);
    pub const B3: Square = Square::new(1, 2);
    pub const C3: Square = Square::new(2, 2);
    pub const D3: Square = Square::new(3, 2);
    pub const E3: Square = Square::new(4, 2);
    pub const F3: Square = Square::new(5, 2);
    pub const G3: Square = Square::new(6, 2);
    pub const H3: Square = Square::new(7, 2);
    pub const A4: Square = Square::new(0, 3);
    pub const B4: Square = Square::new(1, 3);
    pub const C4: Square = Square::new(2, 3);
    pub const D4: Square = Square::new(3, 3);
    pub const E4: Square = Square::new(4, 3);
    pub const F4: Square = Square::new(5, 3);
    pub const G4: Square = Square::new(6, 3);
    pub const H4: Square = Square::new(7, 3);
    pub const A5: Square = Square::new(0, 4);
    pub const B5: Square = Square::new(1, 4);
    pub const C5: Square = Square::new(2, 4);
    pub const D5: Square = Square::new(3, 4);
    pub const E5: Square = Square::new(4, 4);
    pub const F5: Square = Square::new(5, 4);
    pub const G5: Square = Square::new(6, 4);
    pub const H5: Square = Square::new(7, 4);
    pub const A6: Square = Square::new(0, 5);
    pub const B6: Square = Square::new(1, 5);
    pub const C6: Square = Square::new(2, 5);
    pub const D6: Square = Square::new(3, 5);
    pub const E6: Square = Square::new(4, 5);
    pub const F6: Square = Square::new(5, 5);
    pub const G6: Square = Square::new(6, 5);
    pub const H6: Square = Square::new(7, 5);
    pub const A7: Square = Square::new(0, 6);
    pub const B7: Square = Square::new(1, 6);
    pub const C7: Square = Square::new(2, 6);
    pub const D7: Square = Square::new(3, 6);
    pub const E7: Square = Square::new(4, 6);
    pub const F7: Square = Square::new(5, 6);
    pub const G7: Square = Square::new(6, 6);
    pub const H7: Square = Square::new(7, 6);
    pub const A8: Square = Square::new(0, 7);
    pub const B8: Square = Square::new(1, 7);
    pub const C8: Square = Square::new(2, 7);
    pub const D8: Square = Square::new(3, 7);
    pub const E8: Square = Square::new(4, 7);
    pub const F8: Square = Square::new(5, 7);
    pub const G8: Square = Square::new(6, 7);
    pub const H8: Square = Square::new(7, 7);
}

impl From<Square> for usize {
    #[inline]
    fn from(square: Square) -> usize {
        square.0 as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file() as u8) as char,
            (b'1' + self.rank() as u8) as char
        )
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Error when parsing an invalid square label.
#[derive(Clone, Debug)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square label")
    }
}

impl Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => {
                (file as i8 - 'a' as i8, rank as i8 - '1' as i8)
            }
            _ => return Err(ParseSquareError),
        };
        Ok(Square::new(file, rank))
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Square, D::Error> {
        let s = std::borrow::Cow::<str>::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            de::Error::invalid_value(de::Unexpected::Str(&s), &"a square label like `e4`")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords() {
        for file in 0..8 {
            for rank in 0..8 {
                let square = Square::new(file, rank);
                assert_eq!(square.file(), file);
                assert_eq!(square.rank(), rank);
            }
        }
    }

    #[test]
    fn test_label_round_trip() {
        for square in Square::all() {
            let label = square.to_string();
            assert_eq!(label.parse::<Square>().unwrap(), square);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for s in ["", "e", "e44", "i4", "a0", "a9", "4e"] {
            assert!(s.parse::<Square>().is_err(), "accepted {s:?}");
        }
    }

    #[test]
    fn test_offset() {
        assert_eq!(Square::A1.offset(7, 7), Some(Square::H8));
        assert_eq!(Square::H8.offset(0, 1), None);
        assert_eq!(Square::H8.offset(1, 0), None);
        assert_eq!(Square::E4.offset(-2, 1), Some(Square::C5));
    }
}
