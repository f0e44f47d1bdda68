//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Piece kinds.
///
/// A board cell stores `(Color, Piece)`. Promotion swaps the `Piece` value in
/// the cell; pieces have no identity beyond their kind and color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    King,
    Prince,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    Chancellor,
    Archbishop,
    Camel,
    Zebra,
    Wazir,
    Ferz,
    Alfil,
    Dabbaba,
    Shield,
    Lancer,
    Courier,
    Hawk,
}

/// When a piece earns a second move with itself before the turn passes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BonusRule {
    AfterQuiet,
    AfterCapture,
}

impl Piece {
    pub const COUNT: usize = 19;

    /// All piece kinds in index order
    pub const ALL: [Piece; Piece::COUNT] = [
        Piece::King,
        Piece::Prince,
        Piece::Queen,
        Piece::Rook,
        Piece::Bishop,
        Piece::Knight,
        Piece::Pawn,
        Piece::Chancellor,
        Piece::Archbishop,
        Piece::Camel,
        Piece::Zebra,
        Piece::Wazir,
        Piece::Ferz,
        Piece::Alfil,
        Piece::Dabbaba,
        Piece::Shield,
        Piece::Lancer,
        Piece::Courier,
        Piece::Hawk,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse a piece from a character (case is ignored)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        let lower = c.to_ascii_lowercase();
        Piece::ALL.into_iter().find(|p| p.to_char() == lower)
    }

    /// Lowercase notation character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::King => 'k',
            Piece::Prince => 'i',
            Piece::Queen => 'q',
            Piece::Rook => 'r',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            Piece::Pawn => 'p',
            Piece::Chancellor => 'c',
            Piece::Archbishop => 'a',
            Piece::Camel => 'm',
            Piece::Zebra => 'z',
            Piece::Wazir => 'w',
            Piece::Ferz => 'f',
            Piece::Alfil => 'l',
            Piece::Dabbaba => 'd',
            Piece::Shield => 's',
            Piece::Lancer => 'e',
            Piece::Courier => 'o',
            Piece::Hawk => 'h',
        }
    }

    /// Notation character, uppercase for side A
    #[inline]
    #[must_use]
    pub fn to_notation_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::A {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Material value used by ordering, drop safety and evaluation.
    ///
    /// Royal pieces carry a large value so that capturing them always sorts
    /// first; the evaluator does not count them as material.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Piece::King => 20000,
            Piece::Prince => 10000,
            Piece::Queen => 900,
            Piece::Chancellor => 850,
            Piece::Archbishop => 750,
            Piece::Rook => 500,
            Piece::Bishop => 330,
            Piece::Hawk => 320,
            Piece::Knight => 300,
            Piece::Shield => 280,
            Piece::Camel | Piece::Zebra => 260,
            Piece::Courier => 250,
            Piece::Lancer => 200,
            Piece::Alfil | Piece::Dabbaba => 150,
            Piece::Wazir | Piece::Ferz => 120,
            Piece::Pawn => 100,
        }
    }

    /// King and Prince: losing both ends the game.
    #[inline]
    #[must_use]
    pub const fn is_royal(self) -> bool {
        matches!(self, Piece::King | Piece::Prince)
    }

    /// Kind this piece turns into on reaching the far row.
    #[inline]
    #[must_use]
    pub const fn promotes_to(self) -> Option<Piece> {
        match self {
            Piece::Pawn => Some(Piece::Queen),
            Piece::Lancer => Some(Piece::Rook),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn bonus_rule(self) -> Option<BonusRule> {
        match self {
            Piece::Courier => Some(BonusRule::AfterQuiet),
            Piece::Hawk => Some(BonusRule::AfterCapture),
            _ => None,
        }
    }

    /// Whether a move of this piece with the given capture flag grants a bonus move.
    #[inline]
    #[must_use]
    pub const fn grants_bonus(self, capture: bool) -> bool {
        match self.bonus_rule() {
            Some(BonusRule::AfterQuiet) => !capture,
            Some(BonusRule::AfterCapture) => capture,
            None => false,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char().to_ascii_uppercase())
    }
}

/// The two sides. A moves up the board (towards row 12) and is the
/// maximizing side of every score.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    A,
    B,
}

impl Color {
    /// Both colors in index order (A=0, B=1)
    pub const BOTH: [Color; 2] = [Color::A, Color::B];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::A => 0,
            Color::B => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::A => Color::B,
            Color::B => Color::A,
        }
    }

    /// Scoring sign (+1 for A, -1 for B)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Color::A => 1,
            Color::B => -1,
        }
    }

    /// Row direction of "forward" moves
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Color::A => 1,
            Color::B => -1,
        }
    }

    /// Row on which promoting pieces of this color promote
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::A => super::square::HEIGHT - 1,
            Color::B => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::A => write!(f, "A"),
            Color::B => write!(f, "B"),
        }
    }
}
