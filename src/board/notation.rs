use std::fmt;
use std::str::FromStr;

use super::error::{MoveParseError, NotationError};
use super::movegen::generate_moves;
use super::state::{Board, Position, Reserve};
use super::{Color, Move, Piece, Square, HEIGHT, WIDTH};

/// Playable squares of a row, left to right
fn row_squares(row: usize) -> impl Iterator<Item = Square> {
    (0..WIDTH).filter_map(move |col| Square::new(row, col))
}

fn parse_reserve(field: &str, color: Color) -> Result<Reserve, NotationError> {
    let mut reserve = Reserve::new();
    if field == "-" {
        return Ok(reserve);
    }
    for c in field.chars() {
        let piece = Piece::from_char(c).ok_or(NotationError::InvalidPiece { char: c })?;
        if !reserve.push(piece) {
            return Err(NotationError::ReserveOverflow { color });
        }
    }
    Ok(reserve)
}

fn reserve_to_string(reserve: &Reserve, color: Color) -> String {
    if reserve.is_empty() {
        "-".to_string()
    } else {
        reserve.iter().map(|p| p.to_notation_char(color)).collect()
    }
}

impl Position {
    /// Parse a position from text notation.
    ///
    /// Six space-separated fields: board rows from row 12 down to row 1
    /// (playable cells only, digits for empty runs), side to move (`a`/`b`),
    /// A's reserve, B's reserve, the pending bonus square and the turn
    /// counter. Empty reserves and no bonus are written `-`.
    pub fn from_notation(text: &str) -> Result<Self, NotationError> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(NotationError::WrongFieldCount { found: parts.len() });
        }

        let rows: Vec<&str> = parts[0].split('/').collect();
        if rows.len() != HEIGHT {
            return Err(NotationError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (i, row_str) in rows.iter().enumerate() {
            let row = HEIGHT - 1 - i;
            let squares: Vec<Square> = row_squares(row).collect();
            let mut cell = 0;
            let mut run = 0;
            for c in row_str.chars() {
                if let Some(d) = c.to_digit(10) {
                    run = run * 10 + d as usize;
                    continue;
                }
                cell += run;
                run = 0;
                let piece = Piece::from_char(c).ok_or(NotationError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::A
                } else {
                    Color::B
                };
                let Some(&sq) = squares.get(cell) else {
                    return Err(NotationError::RowLength {
                        row,
                        expected: squares.len(),
                        found: cell + 1,
                    });
                };
                board.set(sq, Some((color, piece)));
                cell += 1;
            }
            cell += run;
            if cell != squares.len() {
                return Err(NotationError::RowLength {
                    row,
                    expected: squares.len(),
                    found: cell,
                });
            }
        }

        let side_to_move = match parts[1] {
            "a" => Color::A,
            "b" => Color::B,
            other => {
                return Err(NotationError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let reserves = [
            parse_reserve(parts[2], Color::A)?,
            parse_reserve(parts[3], Color::B)?,
        ];

        let pending_bonus = match parts[4] {
            "-" => None,
            other => Some(other.parse::<Square>().map_err(|_| {
                NotationError::InvalidBonus {
                    found: other.to_string(),
                }
            })?),
        };

        let turn = parts[5].parse().map_err(|_| NotationError::InvalidTurn {
            found: parts[5].to_string(),
        })?;

        let pos = Position::from_parts(board, side_to_move, turn, reserves, pending_bonus);
        pos.validate()?;
        Ok(pos)
    }

    /// Convert the position to text notation.
    #[must_use]
    pub fn to_notation(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(HEIGHT);
        for row in (0..HEIGHT).rev() {
            let mut text = String::new();
            let mut empty = 0;
            for sq in row_squares(row) {
                if let Some((color, piece)) = self.piece_at(sq) {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_notation_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let side = match self.side_to_move {
            Color::A => "a",
            Color::B => "b",
        };
        let bonus = self
            .pending_bonus
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            side,
            reserve_to_string(self.reserve(Color::A), Color::A),
            reserve_to_string(self.reserve(Color::B), Color::B),
            bonus,
            self.turn
        )
    }

    /// Parse a move in the engine's move notation (`c3-c4`, `e5xf6`, `P@g7`)
    /// and return the matching legal move.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let text = text.trim();
        let well_formed = match text.split_once('@') {
            Some((piece, sq)) => {
                piece.chars().count() == 1
                    && piece.chars().all(|c| Piece::from_char(c).is_some())
                    && sq.parse::<Square>().is_ok()
            }
            None => text
                .split_once(['-', 'x'])
                .is_some_and(|(a, b)| a.parse::<Square>().is_ok() && b.parse::<Square>().is_ok()),
        };
        if !well_formed {
            return Err(MoveParseError::InvalidFormat {
                notation: text.to_string(),
            });
        }

        let wanted = text.to_ascii_lowercase();
        generate_moves(self)
            .into_iter()
            .find(|mv| mv.to_string().to_ascii_lowercase() == wanted)
            .ok_or(MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_notation(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}
