//! Evaluation term unit tests.

use crate::board::{
    evaluate, Color, Evaluator, Move, Piece, Position, PositionBuilder, Score, Square,
    StandardRules,
};

/// Two royals equally far from their nearest sanctuary
fn kings() -> PositionBuilder {
    PositionBuilder::new()
        .piece(Square(0, 5), Color::A, Piece::King)
        .piece(Square(11, 6), Color::B, Piece::King)
}

#[test]
fn test_start_position_is_balanced() {
    assert_eq!(evaluate(&Position::start()), Score::ZERO);
}

#[test]
fn test_bare_kings_balanced() {
    assert_eq!(evaluate(&kings().build().unwrap()), Score::ZERO);
}

#[test]
fn test_eval_ignores_side_to_move() {
    let a = kings()
        .piece(Square(4, 4), Color::A, Piece::Rook)
        .build()
        .unwrap();
    let b = kings()
        .piece(Square(4, 4), Color::A, Piece::Rook)
        .side_to_move(Color::B)
        .build()
        .unwrap();
    assert_eq!(evaluate(&a), evaluate(&b));
    assert!(evaluate(&a) > Score::ZERO);
}

#[test]
fn test_material_sign() {
    let extra_b_queen = kings()
        .piece(Square(7, 7), Color::B, Piece::Queen)
        .build()
        .unwrap();
    assert!(evaluate(&extra_b_queen) < Score::new(-800));
}

#[test]
fn test_reserve_counts_at_discount() {
    let pos = kings().reserve(Color::A, Piece::Queen).build().unwrap();
    assert_eq!(evaluate(&pos), Score::new(720));
}

#[test]
fn test_centralization() {
    let center = kings()
        .piece(Square(5, 5), Color::A, Piece::Knight)
        .build()
        .unwrap();
    let edge = kings()
        .piece(Square(2, 0), Color::A, Piece::Knight)
        .build()
        .unwrap();
    assert_eq!(evaluate(&center), Score::new(320));
    assert_eq!(evaluate(&edge), Score::new(300));
}

#[test]
fn test_pawn_advancement() {
    let back = kings()
        .piece(Square(3, 5), Color::A, Piece::Pawn)
        .build()
        .unwrap();
    let forward = kings()
        .piece(Square(6, 5), Color::A, Piece::Pawn)
        .build()
        .unwrap();
    assert_eq!(evaluate(&back), Score::new(124));
    assert_eq!(evaluate(&forward), Score::new(148));

    // B advances downwards
    let b_pawn = kings()
        .piece(Square(5, 5), Color::B, Piece::Pawn)
        .build()
        .unwrap();
    assert_eq!(evaluate(&b_pawn), Score::new(-148));
}

#[test]
fn test_royal_sanctuary_proximity() {
    let near = PositionBuilder::new()
        .piece(Square(5, 2), Color::A, Piece::King)
        .piece(Square(11, 6), Color::B, Piece::King)
        .build()
        .unwrap();
    assert_eq!(evaluate(&near), Score::new(36));
}

#[test]
fn test_both_royals_bonus() {
    let pos = kings()
        .piece(Square(0, 6), Color::A, Piece::Prince)
        .build()
        .unwrap();
    // Prince five squares from (5, 11), plus the pair bonus
    assert_eq!(evaluate(&pos), Score::new(6 * 12 + 60));
}

#[test]
fn test_decided_game_scores_win() {
    let pos = kings()
        .piece(Square(11, 2), Color::A, Piece::Rook)
        .build()
        .unwrap();
    let won = pos.make_move(Move::capture(Square(11, 2), Square(11, 6)));
    assert_eq!(StandardRules.evaluate(&won), Score::win_for(Color::A, 0));
    assert_eq!(StandardRules.evaluate(&won), Score::WIN);
}
