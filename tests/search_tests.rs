//! Search tests through the public API: full games, shared limits and
//! caller-supplied rules.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use sanctuary_engine::board::{
    find_best_move_with_limits, generate_moves, search, search_with, Board, Color, Evaluator,
    MoveGenerator, MoveList, MoveSource, Piece, Position, PositionBuilder, Score, SearchConfig,
    SearchLimits, SearchParams, SearchState, Square, StandardRules, Target,
};
use sanctuary_engine::zobrist::ZOBRIST;

fn middlegame() -> Position {
    PositionBuilder::new()
        .piece(Square(0, 5), Color::A, Piece::King)
        .piece(Square(1, 6), Color::A, Piece::Shield)
        .piece(Square(3, 3), Color::A, Piece::Chancellor)
        .piece(Square(4, 6), Color::A, Piece::Courier)
        .piece(Square(3, 8), Color::A, Piece::Pawn)
        .piece(Square(11, 6), Color::B, Piece::King)
        .piece(Square(10, 5), Color::B, Piece::Prince)
        .piece(Square(7, 4), Color::B, Piece::Hawk)
        .piece(Square(8, 8), Color::B, Piece::Archbishop)
        .reserve(Color::B, Piece::Knight)
        .turn(12)
        .build()
        .expect("valid position")
}

#[test]
fn engine_plays_a_legal_game_against_itself() {
    let mut pos = Position::start();
    let mut state = SearchState::new(4);
    let stop = AtomicBool::new(false);

    for _ in 0..16 {
        if pos.outcome().is_some() {
            break;
        }
        let result = search(&pos, &mut state, SearchConfig::depth(2), &stop).unwrap();
        match result.best_move {
            Some(mv) => {
                assert!(generate_moves(&pos).contains(&mv), "illegal {mv}");
                pos = pos.make_move(mv);
            }
            None if pos.pending_bonus().is_some() => pos = pos.pass_bonus(),
            None => break,
        }
        assert_eq!(pos.hash(), ZOBRIST.hash_of(&pos));
    }
    assert!(pos.turn() >= 3);
}

#[test]
fn opening_book_covers_first_turns() {
    let mut pos = Position::start();
    let mut state = SearchState::new(1);
    let stop = AtomicBool::new(false);

    for _ in 0..6 {
        let result = search(&pos, &mut state, SearchConfig::depth(3), &stop).unwrap();
        assert_eq!(result.source, Some(MoveSource::Book));
        pos = pos.make_move(result.best_move.unwrap());
    }
    assert_eq!(pos.turn(), 3);

    let result = search(&pos, &mut state, SearchConfig::depth(1), &stop).unwrap();
    assert_eq!(result.source, Some(MoveSource::Search));
}

#[test]
fn notation_and_move_parsing() {
    let start: Position =
        "rmckiazr/nlbqsbdn/ehfppppppwoe/12/12/12/12/12/12/EHFPPPPPPWOE/NLBQSBDN/RMCKIAZR a - - - 0"
            .parse()
            .unwrap();
    assert_eq!(start, Position::start());

    let mv = start.parse_move("f3-f4").unwrap();
    let next = start.make_move(mv);
    assert_eq!(
        next.to_notation(),
        "rmckiazr/nlbqsbdn/ehfppppppwoe/12/12/12/12/12/5P6/EHFPP1PPPWOE/NLBQSBDN/RMCKIAZR b - - - 0"
    );
    assert!(next.parse_move("f3-f4").is_err());
}

#[test]
fn shared_limits_stop_a_running_search() {
    let pos = middlegame();
    let mut state = SearchState::new(4);
    let limits = SearchLimits::with_budget(Duration::from_secs(60));
    let stop = Arc::clone(&limits.stop);

    let stopper = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        stop.store(true, Ordering::Relaxed);
    });
    let mv = find_best_move_with_limits(&pos, &mut state, &limits).unwrap();
    stopper.join().unwrap();

    let mv = mv.expect("a move even when stopped");
    assert!(generate_moves(&pos).contains(&mv));
}

#[test]
fn shared_limits_deadline_can_be_shortened() {
    let pos = middlegame();
    let mut state = SearchState::with_params(SearchParams {
        max_depth: 40,
        ..SearchParams::default()
    });
    let limits = SearchLimits::with_budget(Duration::from_secs(60));
    let clock = Arc::clone(&limits.clock);

    let started = Instant::now();
    let shortener = thread::spawn(move || {
        thread::sleep(Duration::from_millis(200));
        clock.set_deadline(Some(Instant::now()));
    });
    let mv = find_best_move_with_limits(&pos, &mut state, &limits).unwrap();
    shortener.join().unwrap();

    assert!(started.elapsed() < Duration::from_secs(20));
    assert!(generate_moves(&pos).contains(&mv.expect("a move")));
}

/// Standard movement with a material-only evaluation that counts its calls
struct CountingRules {
    evaluations: AtomicU64,
}

impl MoveGenerator for CountingRules {
    fn targets(&self, board: &Board, from: Square, out: &mut Vec<Target>) {
        StandardRules.targets(board, from, out);
    }

    fn drops(&self, pos: &Position, out: &mut MoveList) {
        StandardRules.drops(pos, out);
    }
}

impl Evaluator for CountingRules {
    fn evaluate(&self, pos: &Position) -> Score {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
        if let Some(winner) = pos.outcome() {
            return Score::win_for(winner, 0);
        }
        let material: i32 = pos
            .board()
            .occupied()
            .filter(|&(_, _, piece)| !piece.is_royal())
            .map(|(_, color, piece)| color.sign() * piece.value())
            .sum();
        Score::new(material)
    }
}

#[test]
fn search_with_custom_rules() {
    let pos = middlegame();
    let rules = CountingRules {
        evaluations: AtomicU64::new(0),
    };
    let mut state = SearchState::new(4);
    let stop = AtomicBool::new(false);

    let result = search_with(&pos, &mut state, SearchConfig::depth(2), &stop, &rules).unwrap();
    assert_eq!(result.source, Some(MoveSource::Search));
    assert!(generate_moves(&pos).contains(&result.best_move.unwrap()));
    assert!(rules.evaluations.load(Ordering::Relaxed) > 0);
}

#[cfg(feature = "serde")]
#[test]
fn search_params_from_json() {
    let params: SearchParams =
        serde_json::from_str(r#"{"max_depth": 3, "use_tt": false}"#).unwrap();
    assert_eq!(params.max_depth, 3);
    assert!(!params.use_tt);
    assert_eq!(params.quiescence_depth, SearchParams::default().quiescence_depth);

    let text = serde_json::to_string(&params).unwrap();
    let back: SearchParams = serde_json::from_str(&text).unwrap();
    assert_eq!(back, params);
}
