//! Move generation tests.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::board;
use crate::board::{Board, BoardBuilder, Color, Move, Piece, Square};

fn sorted(mut moves: Vec<Move>) -> Vec<Move> {
    moves.sort_by_key(|m| (m.from, m.to));
    moves
}

#[test]
fn initial_position_move_counts() {
    let b = Board::initial();
    let white = b.generate_moves_ordered(Color::White);
    let black = b.generate_moves_ordered(Color::Black);
    assert_eq!(white.len(), 7);
    assert_eq!(black.len(), 7);
    assert!(!white.has_captures());
}

#[test]
fn pawn_steps_forward_only() {
    let b = board("......../......../......../......../...w..../......../......../........");
    let moves = sorted(b.generate_piece_moves(Square(4, 3)).as_slice().to_vec());
    assert_eq!(
        moves,
        vec![
            Move::quiet(Square(4, 3), Square(3, 2)),
            Move::quiet(Square(4, 3), Square(3, 4)),
        ]
    );

    let b = board("......../......../......../......../...b..../......../......../........");
    let moves = sorted(b.generate_piece_moves(Square(4, 3)).as_slice().to_vec());
    assert_eq!(
        moves,
        vec![
            Move::quiet(Square(4, 3), Square(5, 2)),
            Move::quiet(Square(4, 3), Square(5, 4)),
        ]
    );
}

#[test]
fn pawn_blocked_on_edge_and_by_pieces() {
    let b = board("......../......../......../w......./.w....../......../......../........");
    let moves = b.generate_piece_moves(Square(3, 0));
    assert_eq!(moves.as_slice(), &[Move::quiet(Square(3, 0), Square(2, 1))]);
    // (4,1) is blocked toward (3,0) by its own piece
    let moves = b.generate_piece_moves(Square(4, 1));
    assert_eq!(moves.as_slice(), &[Move::quiet(Square(4, 1), Square(3, 2))]);
}

#[test]
fn pawn_captures_backward() {
    let b = board("......../......../......../...w..../....b.../......../......../........");
    let moves = b.generate_piece_moves(Square(3, 3));
    assert!(moves.has_captures());
    assert_eq!(
        moves.as_slice(),
        &[Move::capture(Square(3, 3), Square(5, 5), Square(4, 4))]
    );
}

#[test]
fn pawn_cannot_jump_own_piece_or_onto_occupied_square() {
    let b = board("......../......../......../......../...w..../..w.b.../.w...w../........");
    // (5,2) is own, (5,4) is black but (6,5) is occupied
    let moves = b.generate_piece_moves(Square(4, 3));
    assert!(!moves.has_captures());
    assert!(moves.iter().all(|m| !m.is_capture()));
}

#[test]
fn empty_square_has_no_moves() {
    let b = Board::initial();
    assert!(b.generate_piece_moves(Square(4, 4)).is_empty());
}

#[test]
fn queen_slides_until_blocked() {
    let b = board("......../......../......../......../......../..W...../......../w.......");
    let moves = b.generate_piece_moves(Square(5, 2));
    assert!(!moves.has_captures());
    // up-left 2, up-right 5, down-right 2, down-left: (6,1) only, (7,0) is own
    assert_eq!(moves.len(), 2 + 5 + 2 + 1);
    assert!(moves.contains(&Move::quiet(Square(5, 2), Square(0, 7))));
    assert!(!moves.contains(&Move::quiet(Square(5, 2), Square(7, 0))));
}

#[test]
fn queen_captures_at_distance_with_every_landing_square() {
    let b = BoardBuilder::new()
        .piece(Square(7, 0), Color::White, Piece::Queen)
        .piece(Square(4, 3), Color::Black, Piece::Pawn)
        .piece(Square(1, 6), Color::Black, Piece::Pawn)
        .build();
    let set = b.generate_piece_moves(Square(7, 0));
    assert!(set.has_captures());
    let moves = sorted(set.as_slice().to_vec());
    assert_eq!(
        moves,
        vec![
            Move::capture(Square(7, 0), Square(2, 5), Square(4, 3)),
            Move::capture(Square(7, 0), Square(3, 4), Square(4, 3)),
        ]
    );
}

#[test]
fn queen_cannot_jump_two_pieces_in_a_row() {
    let b = board("......../......../......../...b..../....b.../.....W../......../........");
    let moves = b.generate_piece_moves(Square(5, 5));
    assert!(!moves.has_captures());
}

#[test]
fn queen_cannot_jump_own_piece() {
    let b = board("......../......../......../...b..../....w.../.....W../......../........");
    let moves = b.generate_piece_moves(Square(5, 5));
    assert!(!moves.has_captures());
}

#[test]
fn mandatory_capture_excludes_other_pieces() {
    // (6,4) can capture (5,5); (6,0) has only quiet moves
    let b = board("......../.b....../......../......../......../.....b../w...w.../........");
    let moves = b.generate_moves_ordered(Color::White);
    assert!(moves.has_captures());
    assert_eq!(
        moves.as_slice(),
        &[Move::capture(Square(6, 4), Square(4, 6), Square(5, 5))]
    );
}

#[test]
fn shuffled_generation_is_a_permutation() {
    let b = Board::initial();
    let mut rng = StdRng::seed_from_u64(7);
    let shuffled = b.generate_moves(Color::White, &mut rng);
    let ordered = b.generate_moves_ordered(Color::White);
    assert_eq!(
        sorted(shuffled.as_slice().to_vec()),
        sorted(ordered.as_slice().to_vec())
    );
}

#[test]
fn same_seed_same_order() {
    let b = Board::initial();
    let first = b.generate_moves(Color::Black, &mut StdRng::seed_from_u64(3));
    let second = b.generate_moves(Color::Black, &mut StdRng::seed_from_u64(3));
    assert_eq!(first, second);
}

#[test]
fn no_pieces_no_moves() {
    let b = Board::empty();
    let mut rng = StdRng::seed_from_u64(0);
    let moves = b.generate_moves(Color::White, &mut rng);
    assert!(moves.is_empty());
    assert!(!moves.has_captures());
    assert!(!b.has_capture(Color::White));
}
