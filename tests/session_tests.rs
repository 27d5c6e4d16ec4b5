//! End-to-end games driven through `Session`.

use pentago::board::Direction;
use pentago::core::{GameConfig, GameError, PlayerId};
use pentago::game::Session;
use pentago::input::MoveInput;
use pentago::rules::GameResult;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Play a list of moves, panicking on the first rejected one.
fn play(session: &mut Session, moves: &[(usize, usize, usize, Direction)]) {
    for &(x, y, sub_board, direction) in moves {
        session
            .make_move(x, y, sub_board, direction)
            .unwrap_or_else(|e| panic!("move ({x}, {y}, {sub_board}, {direction}) failed: {e}"));
    }
}

/// X turns sub-board 0 clockwise, then O turns it back counter-clockwise.
#[test]
fn test_opening_scenario() {
    init_tracing();
    let mut session = Session::new(GameConfig::default()).unwrap();

    session.make_move(0, 0, 0, Direction::Clockwise).unwrap();
    // The top-left corner swings to the top-right corner of sub-board 0.
    assert_eq!(session.symbol_at(2, 0), Ok('X'));
    assert_eq!(session.symbol_at(0, 0), Ok('.'));

    session.make_move(0, 1, 0, Direction::CounterClockwise).unwrap();
    // X swings back to the corner; O moves from the left edge to the bottom edge.
    assert_eq!(session.symbol_at(0, 0), Ok('X'));
    assert_eq!(session.symbol_at(1, 2), Ok('O'));
    assert_eq!(session.board().occupied_count(), 2);
    assert_eq!(session.current_player_symbol(), 'X');
}

#[test]
fn test_turn_advancement_matches_move_count() {
    for players in 1..=4usize {
        let symbols = ['A', 'B', 'C', 'D'];
        let config = GameConfig::default().with_players(symbols[..players].iter().copied());
        let mut session = Session::new(config).unwrap();

        for n in 0..36 {
            assert_eq!(session.current_player(), PlayerId::new((n % players) as u8));
            session.make_move(n % 6, n / 6, 0, Direction::None).unwrap();
        }
        assert_eq!(session.move_count(), 36);
        assert_eq!(session.current_player(), PlayerId::new((36 % players) as u8));
    }
}

#[test]
fn test_horizontal_win() {
    let mut session = Session::new(GameConfig::default()).unwrap();
    play(
        &mut session,
        &[
            (0, 3, 0, Direction::None),
            (0, 5, 0, Direction::None),
            (1, 3, 0, Direction::None),
            (1, 5, 0, Direction::None),
            (2, 3, 0, Direction::None),
            (2, 5, 0, Direction::None),
            (3, 3, 0, Direction::None),
            (3, 5, 0, Direction::None),
        ],
    );
    assert!(session.winners().is_empty());
    assert_eq!(session.result(), None);

    session.make_move(4, 3, 0, Direction::None).unwrap();
    let winners = session.winners();
    assert_eq!(winners.len(), 1);
    assert!(winners.contains(&'X'));
    assert_eq!(session.result(), Some(GameResult::Winner('X')));
}

#[test]
fn test_rotation_completes_a_line() {
    let mut session = Session::new(GameConfig::default()).unwrap();
    play(
        &mut session,
        &[
            (0, 0, 0, Direction::None),
            (0, 5, 2, Direction::None),
            (0, 1, 0, Direction::None),
            (1, 5, 2, Direction::None),
            (0, 2, 0, Direction::None),
            (2, 5, 2, Direction::None),
            (3, 0, 1, Direction::None),
            (3, 5, 3, Direction::None),
        ],
    );
    assert!(session.winners().is_empty());

    // Turning sub-board 0 clockwise lays its left column along the top row.
    session.make_move(4, 0, 0, Direction::Clockwise).unwrap();
    for x in 0..5 {
        assert_eq!(session.symbol_at(x, 0), Ok('X'));
    }
    assert_eq!(session.result(), Some(GameResult::Winner('X')));
}

#[test]
fn test_rotation_can_hand_the_win_to_the_opponent() {
    init_tracing();
    let mut session = Session::new(GameConfig::default()).unwrap();
    play(
        &mut session,
        &[
            (5, 0, 1, Direction::None),
            (0, 3, 2, Direction::None),
            (3, 1, 1, Direction::None),
            (0, 4, 2, Direction::None),
            (5, 2, 1, Direction::None),
            (0, 5, 2, Direction::None),
            (4, 0, 1, Direction::None),
            (3, 3, 3, Direction::None),
            (4, 4, 1, Direction::None),
            (4, 3, 1, Direction::None),
        ],
    );
    assert!(session.winners().is_empty());

    // O's column in sub-board 2 becomes its top row, joining (3, 3) and (4, 3).
    session.make_move(5, 5, 2, Direction::Clockwise).unwrap();
    let winners = session.winners();
    assert_eq!(winners.len(), 1);
    assert!(winners.contains(&'O'));
    assert_eq!(session.result(), Some(GameResult::Winner('O')));
}

#[test]
fn test_simultaneous_winners_are_all_reported() {
    let config = GameConfig::default().with_row_length(3);
    let mut session = Session::new(config).unwrap();
    play(
        &mut session,
        &[
            (3, 0, 1, Direction::None),
            (3, 3, 3, Direction::None),
            (4, 0, 1, Direction::None),
            (3, 4, 3, Direction::None),
            (0, 5, 2, Direction::None),
            (2, 5, 2, Direction::None),
        ],
    );
    assert!(session.winners().is_empty());

    // X completes row 0; turning sub-board 3 lays O's pair along row 5
    // next to (2, 5).
    session.make_move(5, 0, 3, Direction::CounterClockwise).unwrap();
    assert_eq!(session.symbol_at(3, 5), Ok('O'));
    assert_eq!(session.symbol_at(4, 5), Ok('O'));
    let winners = session.winners();
    assert!(winners.contains(&'X'));
    assert!(winners.contains(&'O'));
    assert_eq!(
        session.result(),
        Some(GameResult::Winners(vec!['O', 'X']))
    );
}

#[test]
fn test_occupied_square_leaves_state_untouched() {
    let mut session = Session::new(GameConfig::default()).unwrap();
    session.make_move(2, 2, 3, Direction::Clockwise).unwrap();
    let board = session.board().clone();
    let player = session.current_player();

    let err = session.make_move(2, 2, 0, Direction::CounterClockwise);
    assert!(matches!(err, Err(GameError::OccupiedSquare { x: 2, y: 2, .. })));
    assert_eq!(session.board(), &board);
    assert_eq!(session.current_player(), player);
    assert_eq!(session.move_count(), 1);
}

#[test]
fn test_parsed_input_drives_session() {
    let mut session = Session::new(GameConfig::default()).unwrap();
    let input: MoveInput = "0 0 0 c".parse().unwrap();
    session.apply_input(&input).unwrap();
    assert_eq!(session.symbol_at(2, 0), Ok('X'));

    let input: MoveInput = "0,1,0,a".parse().unwrap();
    session.apply_input(&input).unwrap();
    assert_eq!(session.symbol_at(0, 0), Ok('X'));
    assert_eq!(session.symbol_at(1, 2), Ok('O'));
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    // 2x2 board of 1x1 sub-boards: rotation never moves anything.
    let config = GameConfig::default()
        .with_sub_board_size(1)
        .with_board_size(2)
        .with_row_length(3);
    let mut session = Session::new(config).unwrap();
    play(
        &mut session,
        &[
            (0, 0, 0, Direction::Clockwise),
            (1, 0, 1, Direction::Clockwise),
            (0, 1, 2, Direction::CounterClockwise),
            (1, 1, 3, Direction::None),
        ],
    );
    assert!(session.is_full());
    assert_eq!(session.result(), Some(GameResult::Draw));
}

#[test]
fn test_sessions_are_independent() {
    let mut first = Session::new(GameConfig::default()).unwrap();
    let second = Session::new(GameConfig::default()).unwrap();
    first.make_move(3, 3, 1, Direction::None).unwrap();
    assert_eq!(first.board().occupied_count(), 1);
    assert_eq!(second.board().occupied_count(), 0);
}
