use std::fmt;

use crate::{color::Color, role::Role};

/// A piece with [`Color`], [`Role`] and the number of times it has moved.
///
/// Pieces are plain values. A piece placed on a [`Board`](crate::Board)
/// lives in its board slot, which is the single source of truth for its
/// location.
///
/// # Examples
///
/// ```
/// use chessling::{Color, Piece, Role};
///
/// let piece = Color::White.pawn();
/// assert_eq!(piece, Piece { color: Color::White, role: Role::Pawn, move_count: 0 });
/// assert!(!piece.has_moved());
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
    pub move_count: u32,
}

impl Piece {
    /// The character of the piece, uppercase for white.
    pub fn char(self) -> char {
        self.color
            .fold(self.role.upper_char(), self.role.char())
    }

    /// Checks whether the piece has moved at least once.
    #[inline]
    pub fn has_moved(self) -> bool {
        self.move_count > 0
    }

    /// Returns the piece with its move count incremented by one.
    #[inline]
    #[must_use]
    pub fn bumped(self) -> Piece {
        Piece {
            move_count: self.move_count + 1,
            ..self
        }
    }

    #[inline]
    pub fn is_ally_of(self, other: Piece) -> bool {
        self.color == other.color
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.role.char())
    }
}

impl Color {
    #[inline]
    pub fn pawn(self) -> Piece {
        Role::Pawn.of(self)
    }
    #[inline]
    pub fn knight(self) -> Piece {
        Role::Knight.of(self)
    }
    #[inline]
    pub fn bishop(self) -> Piece {
        Role::Bishop.of(self)
    }
    #[inline]
    pub fn rook(self) -> Piece {
        Role::Rook.of(self)
    }
    #[inline]
    pub fn queen(self) -> Piece {
        Role::Queen.of(self)
    }
    #[inline]
    pub fn king(self) -> Piece {
        Role::King.of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bumped() {
        let pawn = Color::Black.pawn();
        assert_eq!(pawn.move_count, 0);
        assert_eq!(pawn.bumped().move_count, 1);
        assert!(pawn.bumped().has_moved());
        assert_eq!(pawn.bumped().role, Role::Pawn);
    }

    #[test]
    fn test_char() {
        assert_eq!(Color::White.knight().char(), 'N');
        assert_eq!(Color::Black.knight().char(), 'n');
    }
}
