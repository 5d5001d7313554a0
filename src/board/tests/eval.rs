//! Horizon scoring tests.

use super::board;
use crate::board::{Board, Color, Move, ScoringMode, Square, LOSS_SCORE, WIN_SCORE};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn opponent_without_pieces_is_a_win() {
    let b = board("......../......../......../......../......../......../....w.../........");
    assert_eq!(b.evaluate(Color::White, ScoringMode::Number), WIN_SCORE);
    assert_eq!(b.evaluate(Color::Black, ScoringMode::Number), LOSS_SCORE);
}

#[test]
fn empty_board_counts_as_a_win_for_either_side() {
    // the opponent check comes first
    let b = Board::empty();
    assert_eq!(b.evaluate(Color::White, ScoringMode::Number), WIN_SCORE);
    assert_eq!(b.evaluate(Color::Black, ScoringMode::NumberAndPotential), WIN_SCORE);
}

#[test]
fn number_mode_weights_queens_four() {
    // white: 2 pawns + 1 queen = 6, black: 1 pawn + 1 queen = 5
    let b = board("..W...../......../......../......../...b..../.B....../w.w...../........");
    assert!(close(b.evaluate(Color::White, ScoringMode::Number), 6.0 / 5.0));
    assert!(close(b.evaluate(Color::Black, ScoringMode::Number), 5.0 / 6.0));
}

#[test]
fn potential_mode_rewards_advancement() {
    // white pawn on row 5 advanced 2 rows, black pawn on row 4 advanced 4 rows
    let b = board(".W....../......../......../......../...b..../w......./......../........");
    let own = 1.0 + 0.05 * 2.0 + 5.0;
    let opp = 1.0 + 0.05 * 4.0;
    assert!(close(
        b.evaluate(Color::White, ScoringMode::NumberAndPotential),
        own / opp
    ));
}

#[test]
fn back_row_pawn_has_no_bonus() {
    let b = board("......../......../......../......../......../......../......../w......b");
    let tally = b.material_tally(ScoringMode::NumberAndPotential);
    assert!(close(tally[0].pawns, 1.0));
    assert!(close(tally[1].pawns, 1.0 + 0.05 * 7.0));
}

#[test]
fn scores_are_reciprocal_between_colors() {
    let b = Board::initial().apply_move(Move::quiet(Square(5, 0), Square(4, 1)));
    for mode in [ScoringMode::Number, ScoringMode::NumberAndPotential] {
        let w = b.evaluate(Color::White, mode);
        let bl = b.evaluate(Color::Black, mode);
        assert!(close(w * bl, 1.0));
    }
}

#[test]
fn scoring_mode_parses_config_spellings() {
    assert_eq!("Number".parse::<ScoringMode>(), Ok(ScoringMode::Number));
    assert_eq!(
        "NumberAndPotential".parse::<ScoringMode>(),
        Ok(ScoringMode::NumberAndPotential)
    );
    assert!("number".parse::<ScoringMode>().is_err());
    assert_eq!(ScoringMode::NumberAndPotential.to_string(), "NumberAndPotential");
}
